use crate::cleaning::ParsedDoc;

pub fn check(doc: &str, parsed: &ParsedDoc<'_>) {
    let n = doc.len();
    let mut next_line = 0;

    for r in &parsed.regions {
        assert!(!r.lines.is_empty(), "empty region: {r:?}");
        assert_eq!(
            r.lines.start, next_line,
            "regions not contiguous: expected line {next_line}, got {r:?}"
        );
        assert!(
            r.span.start <= r.span.end && r.span.end <= n,
            "region span out of bounds: {:?} (doc len: {})",
            r.span,
            n
        );

        let first = &parsed.lines[r.lines.start];
        let last = &parsed.lines[r.lines.end - 1];
        assert_eq!(
            (r.span.start, r.span.end),
            (first.line.start, last.line.end),
            "region span does not match its lines: {r:?}"
        );

        let body = r.body();
        assert!(
            body.start >= r.lines.start && body.end <= r.lines.end,
            "body {body:?} not contained in region lines {:?}",
            r.lines
        );
        next_line = r.lines.end;
    }

    assert_eq!(
        next_line,
        parsed.lines.len(),
        "regions cover {next_line} of {} lines",
        parsed.lines.len()
    );
}
