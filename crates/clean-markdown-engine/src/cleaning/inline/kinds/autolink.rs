/// Autolinks: `<https://example.com>` and `<user@example.com>`.
pub struct Autolink;

impl Autolink {
    pub const OPEN: u8 = b'<';
    pub const CLOSE: u8 = b'>';

    /// Byte index of the closing `>` if an autolink opens at `from`.
    pub fn find_close(s: &str, from: usize) -> Option<usize> {
        let rest = s.get(from + 1..)?;
        let len = rest.find(|c: char| c == '>' || c == '<' || c.is_whitespace())?;
        if rest.as_bytes()[len] != Self::CLOSE {
            return None;
        }
        let target = &rest[..len];
        if Self::is_uri(target) || Self::is_email(target) {
            Some(from + 1 + len)
        } else {
            None
        }
    }

    /// `scheme:rest` with a 2-32 character scheme.
    fn is_uri(target: &str) -> bool {
        let Some((scheme, _)) = target.split_once(':') else {
            return false;
        };
        let mut chars = scheme.chars();
        (2..=32).contains(&scheme.len())
            && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
    }

    fn is_email(target: &str) -> bool {
        let Some((user, host)) = target.split_once('@') else {
            return false;
        };
        !user.is_empty()
            && host.contains('.')
            && !host.starts_with('.')
            && !host.ends_with('.')
            && !host.contains('@')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_autolink() {
        assert_eq!(Autolink::find_close("<https://e.com>", 0), Some(14));
    }

    #[test]
    fn email_autolink() {
        assert_eq!(Autolink::find_close("x <me@e.com> y", 2), Some(11));
    }

    #[test]
    fn html_tags_and_comparisons_are_not_autolinks() {
        assert_eq!(Autolink::find_close("<br>", 0), None);
        assert_eq!(Autolink::find_close("a < b > c", 2), None);
        assert_eq!(Autolink::find_close("<https://e.com", 0), None);
    }
}
