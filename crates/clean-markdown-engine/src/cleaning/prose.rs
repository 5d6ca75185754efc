use crate::options::CleanOptions;

use super::{
    blocks::kinds::{BlockQuote, Heading, LinkDefinition, ListItem, ThematicBreak},
    inline::strip_inline,
};

/// Strips all recognised markup from one prose line.
///
/// Line-start markers go first, in order: heading, blockquote, horizontal
/// rule, list marker, repeated while any of them still matches. The
/// residue goes through the inline stripper. In list context the
/// continuation indentation is list structure and is dropped too.
pub fn strip_prose_line(line: &str, in_list: bool, options: &CleanOptions) -> String {
    let line = if in_list {
        line.trim_start_matches([' ', '\t'])
    } else {
        line
    };
    match strip_line_markers(line) {
        Some(rest) => strip_inline(rest, options),
        None => String::new(),
    }
}

/// Removes line-start markers. `None` means the whole line is markup.
///
/// Markers repeat until none is left (`- - x`, `# 1. x`), so stripping
/// the result again finds nothing more to remove.
fn strip_line_markers(line: &str) -> Option<&str> {
    let (mut start, mut end) = (0, line.len());
    // Past this offset only rule characters remain before `end`
    let mut rule_from = rule_tail(line);
    loop {
        if LinkDefinition::matches(&line[start..end]) {
            return None;
        }
        let before = end - start;

        if let Some(text) = Heading::bounds(&line[start..end]) {
            if start + text.end != end {
                end = start + text.end;
                rule_from = rule_tail(&line[..end]);
            }
            start += text.start;
        }
        start += BlockQuote::strip_prefixes(&line[start..end]).1;

        if start >= rule_from && ThematicBreak::matches(&line[start..end]) {
            return None;
        }
        if let Some(content) = ListItem::content_start(&line[start..end]) {
            start += content;
        }

        if end - start == before {
            return Some(&line[start..end]);
        }
    }
}

fn rule_tail(s: &str) -> usize {
    s.trim_end_matches([' ', '\t', '\r', '-', '*', '_']).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn strip(line: &str) -> String {
        strip_prose_line(line, false, &CleanOptions::default())
    }

    #[rstest]
    #[case("# Title", "Title")]
    #[case("### Deep *title* ###", "Deep title")]
    #[case("> quoted", "quoted")]
    #[case("> > nested", "nested")]
    #[case("> # Quoted heading", "Quoted heading")]
    #[case("> - quoted item", "quoted item")]
    #[case("- item one", "item one")]
    #[case("  * nested", "nested")]
    #[case("3) third", "third")]
    #[case("- [x] done", "done")]
    #[case("---", "")]
    #[case("* * *", "")]
    #[case("> ___", "")]
    #[case("[ref]: https://example.com", "")]
    #[case("", "")]
    #[case("plain text", "plain text")]
    #[case("#hashtag", "#hashtag")]
    #[case("- - x", "x")]
    #[case("1. - x", "x")]
    #[case("# - item", "item")]
    #[case("- > - x", "x")]
    #[case("- [ref]: https://example.com", "")]
    #[case("# --- #", "")]
    #[case("- - - x", "x")]
    fn strips_line_markers(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip(input), expected);
    }

    #[test]
    fn list_context_drops_indentation() {
        let opts = CleanOptions::default();
        assert_eq!(strip_prose_line("    continued", true, &opts), "continued");
        assert_eq!(strip_prose_line("    continued", false, &opts), "    continued");
        assert_eq!(strip_prose_line("      - deeper", true, &opts), "deeper");
    }

    #[test]
    fn blank_whitespace_line_is_kept() {
        assert_eq!(strip("   "), "   ");
    }
}
