/// Horizontal rules: `---`, `***`, `___`, optionally spaced.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [u8; 3] = [b'-', b'*', b'_'];
    pub const MIN_LEN: usize = 3;

    pub fn matches(line: &str) -> bool {
        let mut marker = None;
        let mut count = 0usize;
        for b in line.bytes() {
            match b {
                b' ' | b'\t' | b'\r' => {}
                c if Self::CHARS.contains(&c) && marker.is_none_or(|m| m == c) => {
                    marker = Some(c);
                    count += 1;
                }
                _ => return false,
            }
        }
        count >= Self::MIN_LEN
    }
}
