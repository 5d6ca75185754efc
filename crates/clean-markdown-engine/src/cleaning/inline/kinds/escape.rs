/// Backslash escapes: `\` before ASCII punctuation yields the literal character.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    pub fn escapes(b: u8) -> bool {
        b.is_ascii_punctuation()
    }
}
