use std::fmt::Write;

use crate::cleaning::{ParsedDoc, blocks::RegionKind, text::preview};

/// One line per region: kind, line range, byte span and a quoted text preview.
pub fn normalize(doc: &str, parsed: &ParsedDoc<'_>) -> String {
    let mut out = String::new();
    for r in &parsed.regions {
        let kind = match r.kind {
            RegionKind::Prose { in_list: false } => "Prose".to_string(),
            RegionKind::Prose { in_list: true } => "Prose(list)".to_string(),
            RegionKind::FencedCode { fence, closed } => format!(
                "FencedCode({:?}, len={}, quote={}, {})",
                fence.kind,
                fence.len,
                fence.quote_depth,
                if closed { "closed" } else { "open" }
            ),
            RegionKind::IndentedCode => "IndentedCode".to_string(),
        };
        let text = preview(doc, r.span, 40);
        let _ = writeln!(
            out,
            "{kind} lines={}..{} span={}..{} {text:?}",
            r.lines.start, r.lines.end, r.span.start, r.span.end
        );
    }
    out
}
