/// Emphasis and strong delimiters.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    /// Decides whether a delimiter run can open and/or close emphasis.
    ///
    /// A run opens when followed by non-whitespace and closes when preceded
    /// by non-whitespace. Underscores additionally never open or close
    /// inside a word, so `snake_case_name` stays intact.
    pub fn flanking(ch: u8, prev: Option<char>, next: Option<char>) -> (bool, bool) {
        let left = next.is_some_and(|c| !c.is_whitespace());
        let right = prev.is_some_and(|c| !c.is_whitespace());
        if ch == Self::UNDERSCORE {
            let word_before = prev.is_some_and(char::is_alphanumeric);
            let word_after = next.is_some_and(char::is_alphanumeric);
            (left && !word_before, right && !word_after)
        } else {
            (left, right)
        }
    }
}
