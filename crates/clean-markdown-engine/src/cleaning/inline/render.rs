use regex::Regex;
use std::sync::OnceLock;

use crate::options::CleanOptions;

use super::{delimiters::match_delimiters, parser::parse_inline, types::InlineNode};

/// Strips inline markup from one line, keeping the readable text.
///
/// Code span interiors are copied verbatim and link syntax is dropped
/// around its text. Matched emphasis runs vanish; unmatched ones stay
/// literal.
pub fn strip_inline(s: &str, options: &CleanOptions) -> String {
    let nodes = parse_inline(s);
    let matched = match_delimiters(&nodes);

    let mut out = String::with_capacity(s.len());
    // Prose text waiting for URL filtering; raw zones bypass it.
    let mut pending = String::new();

    for (node, matched) in nodes.iter().zip(matched) {
        match node {
            InlineNode::Text(sp) => pending.push_str(sp.slice(s)),
            InlineNode::Escape { ch, .. } => pending.push_str(ch.slice(s)),
            InlineNode::Delim { full, .. } => {
                if !matched {
                    pending.push_str(full.slice(s));
                }
            }
            InlineNode::CodeSpan { inner, .. } => {
                flush(&mut out, &mut pending, options);
                out.push_str(inner.slice(s));
            }
            // Link syntax vanishes; the text between stays in the node stream
            InlineNode::LinkOpen { .. } | InlineNode::LinkClose { .. } => {
                flush(&mut out, &mut pending, options);
            }
            InlineNode::Autolink { target, .. } => {
                flush(&mut out, &mut pending, options);
                let target = target.slice(s);
                if !(options.strip_bare_urls && url_regex().is_match(target)) {
                    out.push_str(target);
                }
            }
        }
    }

    flush(&mut out, &mut pending, options);
    out
}

fn flush(out: &mut String, pending: &mut String, options: &CleanOptions) {
    if options.strip_bare_urls {
        out.push_str(&remove_bare_urls(pending));
    } else {
        out.push_str(pending);
    }
    pending.clear();
}

fn url_regex() -> &'static Regex {
    // Regex pattern for HTTP/HTTPS URLs
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s<>\[\]]+").expect("Invalid URL regex"))
}

/// Deletes `http(s)://` URLs from `text`, leaving trailing sentence punctuation.
pub fn remove_bare_urls(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for url_match in url_regex().find_iter(text) {
        let start = url_match.start();
        let url = url_match.as_str();
        // Remove trailing punctuation that's typically not part of URLs
        let kept = url.trim_end_matches(['.', ',', ':', ';', '!', '?', ')', ']', '}']);
        out.push_str(&text[last..start]);
        last = start + kept.len();
    }

    out.push_str(&text[last..]);
    out
}
