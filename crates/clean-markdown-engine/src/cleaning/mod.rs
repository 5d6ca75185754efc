//! # Cleaning
//!
//! `clean()` turns a Markdown document into plain text in two steps:
//!
//! 1. **Region detection** (`blocks`): lines are classified and grouped
//!    into prose, fenced code and indented code regions
//! 2. **Rendering**: prose lines go through the line-marker and inline
//!    strippers (`prose`, `inline`); code lines are copied verbatim or
//!    replaced by a placeholder. Everything lands in an `OutputBuffer`.

pub mod blocks;
pub mod inline;
pub mod output;
pub mod prose;
pub mod snapshot;
pub mod text;

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use crate::options::CleanOptions;

use blocks::{
    LineClass, MarkdownLineClassifier, Region, RegionBuilder, RegionKind, kinds::IndentedCode,
};
use output::OutputBuffer;
use prose::strip_prose_line;
use text::lines_with_spans;

/// A document split into classified lines and the regions covering them.
#[derive(Debug)]
pub struct ParsedDoc<'a> {
    pub lines: Vec<LineClass<'a>>,
    pub regions: Vec<Region>,
}

/// Classifies every line of `doc` and groups the lines into regions.
pub fn parse_document<'a>(doc: &'a str, options: &CleanOptions) -> ParsedDoc<'a> {
    let classifier = MarkdownLineClassifier::new(options.effective_tab_width());
    let mut builder = RegionBuilder::new();
    let mut lines = Vec::new();

    for (idx, lr) in lines_with_spans(doc).enumerate() {
        let lc = classifier.classify(&lr);
        builder.push(idx, &lc);
        lines.push(lc);
    }

    ParsedDoc {
        lines,
        regions: builder.finish(),
    }
}

/// Strips Markdown formatting from `document`, keeping code blocks verbatim.
///
/// Never fails: malformed markup degrades to literal text and an
/// unterminated fence runs to the end of the document.
///
/// ```
/// use clean_markdown_engine::{CleanOptions, clean};
///
/// let out = clean("# Title\n\nSome **bold** text.", &CleanOptions::default());
/// assert_eq!(out, "Title\n\nSome bold text.");
/// ```
pub fn clean(document: &str, options: &CleanOptions) -> String {
    let parsed = parse_document(document, options);
    let mut out = OutputBuffer::new(document.len(), options.preserve_blank_lines);

    for region in &parsed.regions {
        render_region(&parsed, region, options, &mut out);
    }

    out.finish()
}

fn render_region(
    parsed: &ParsedDoc<'_>,
    region: &Region,
    options: &CleanOptions,
    out: &mut OutputBuffer,
) {
    let body = &parsed.lines[region.body()];
    let tab_width = options.effective_tab_width();
    match region.kind {
        RegionKind::Prose { in_list } => {
            for line in body {
                out.push_prose(&strip_prose_line(line.text, in_list, options));
            }
        }
        RegionKind::FencedCode { fence, .. } => {
            let code = body.iter().map(|l| fence.content(l.text, tab_width));
            render_code(code, options, out);
        }
        RegionKind::IndentedCode => {
            let code = body
                .iter()
                .map(|l| IndentedCode::content(l.text, tab_width));
            render_code(code, options, out);
        }
    }
}

fn render_code<'a>(
    code: impl Iterator<Item = Cow<'a, str>>,
    options: &CleanOptions,
    out: &mut OutputBuffer,
) {
    if options.strip_code_blocks {
        if !options.code_placeholder.is_empty() {
            out.push_prose(&options.code_placeholder);
        }
        return;
    }
    for line in code {
        out.push_verbatim(&line);
    }
}
