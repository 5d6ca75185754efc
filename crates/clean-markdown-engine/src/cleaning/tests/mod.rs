//! Integration tests for the cleaning module.
//!
//! Fixtures (`.md` input, `.txt` expected output) are co-located in
//! `fixtures/`. Region structure is checked with inline `insta` snapshots.

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    cleaning::{blocks::RegionKind, clean, parse_document, snapshot},
    options::CleanOptions,
};

fn clean_default(doc: &str) -> String {
    clean(doc, &CleanOptions::default())
}

// Fixture-based tests

#[rstest]
#[case("basic")]
#[case("code_fences")]
#[case("lists")]
#[case("quotes")]
#[case("inline_edge_cases")]
fn fixture(#[case] name: &str) {
    let fixtures_dir = format!("{}/src/cleaning/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.txt")).unwrap();

    let options = CleanOptions::default();
    let parsed = parse_document(&md, &options);
    snapshot::invariants(&md, &parsed);

    assert_eq!(clean(&md, &options), expected);
}

// Reference scenarios

#[rstest]
#[case("# Title\n\nSome **bold** and *em* text.", "Title\n\nSome bold and em text.")]
#[case("```\n*not stripped*\n```", "*not stripped*")]
#[case("- item one\n- item two", "item one\nitem two")]
#[case("[link](http://x.com)", "link")]
#[case("```\ncode line", "code line")]
fn reference_scenarios(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(clean_default(input), expected);
}

#[test]
fn empty_document() {
    assert_eq!(clean_default(""), "");
}

// Region structure

#[test]
fn regions_for_closed_fence() {
    let doc = "# T\n```\ncode\n```\nafter";
    let parsed = parse_document(doc, &CleanOptions::default());
    snapshot::invariants(doc, &parsed);
    insta::assert_snapshot!(snapshot::normalize(doc, &parsed), @r##"
    Prose lines=0..1 span=0..3 "# T"
    FencedCode(Backticks, len=3, quote=0, closed) lines=1..4 span=4..16 "```\ncode\n```"
    Prose lines=4..5 span=17..22 "after"
    "##);
}

#[test]
fn regions_for_list_continuation() {
    let doc = "- a\n  b\n\n    code?\nend";
    let parsed = parse_document(doc, &CleanOptions::default());
    snapshot::invariants(doc, &parsed);
    insta::assert_snapshot!(snapshot::normalize(doc, &parsed), @r#"
    Prose(list) lines=0..4 span=0..18 "- a\n  b\n\n    code?"
    Prose lines=4..5 span=19..22 "end"
    "#);
}

#[test]
fn regions_for_quoted_fence_cut_short() {
    let doc = "> ```\n> x\ny";
    let parsed = parse_document(doc, &CleanOptions::default());
    snapshot::invariants(doc, &parsed);
    insta::assert_snapshot!(snapshot::normalize(doc, &parsed), @r#"
    FencedCode(Backticks, len=3, quote=1, open) lines=0..2 span=0..9 "> ```\n> x"
    Prose lines=2..3 span=10..11 "y"
    "#);
}

#[test]
fn mismatched_fence_char_does_not_close() {
    let doc = "```\n~~~\nstill code\n```";
    let parsed = parse_document(doc, &CleanOptions::default());
    assert_eq!(parsed.regions.len(), 1);
    assert!(matches!(
        parsed.regions[0].kind,
        RegionKind::FencedCode { closed: true, .. }
    ));
    assert_eq!(clean_default(doc), "~~~\nstill code");
}

#[test]
fn shorter_closing_fence_does_not_close() {
    assert_eq!(clean_default("````\na\n```\nb\n````\nc"), "a\n```\nb\nc");
}

#[test]
fn fence_with_trailing_text_does_not_close() {
    assert_eq!(clean_default("```\na\n``` nope\n```"), "a\n``` nope");
}

#[test]
fn four_space_fence_is_indented_code() {
    assert_eq!(clean_default("text\n\n    ```\n    *x*"), "text\n\n```\n*x*");
}

// Properties

#[rstest]
#[case("# Title\n\nSome **bold** and *em* text.")]
#[case("- one\n- [x] two\n  more _words_ here")]
#[case("> quoted [link](http://x.com) and ![img](a.png)")]
#[case("Unbalanced **bold and `code` spans")]
#[case("a\n\n\n\n\nb")]
#[case("- - x")]
#[case("1. - x")]
#[case("# - item")]
#[case("> 1. > - [ ] deep")]
fn cleaning_is_idempotent(#[case] input: &str) {
    let once = clean_default(input);
    assert_eq!(clean_default(&once), once);
}

#[test]
fn fenced_code_is_preserved_byte_for_byte() {
    let body = "  fn main() {\n\t*x* = [a](b); # not a heading\n\n\n\n}\n";
    let doc = format!("Intro **text**\n\n```rust\n{body}```\nOutro");
    let out = clean_default(&doc);
    assert!(out.contains(body), "code body missing from:\n{out}");
}

#[rstest]
#[case("- item\n\t```\n\tcode\n\t```", "item\ncode")]
#[case("- item\n  \t```\n  \tcode\n  \t```", "item\ncode")]
#[case("- item\n    ```\n\tcode\n    ```", "item\ncode")]
fn list_fence_indent_is_measured_in_columns(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(clean_default(input), expected);
}

#[rstest]
#[case("## Heading with *emphasis* ##")]
#[case("> > - [ ] nested [link](http://example.com/x) item")]
#[case("Escaped \\*stars\\* and `` code ` span ``")]
#[case("<https://example.com> autolink")]
#[case("***strong em*** and __strong__")]
fn prose_lines_never_grow(#[case] line: &str) {
    let out = clean_default(line);
    assert!(out.len() <= line.len(), "{out:?} longer than {line:?}");
}

#[test]
fn balanced_markup_does_not_leak() {
    let out = clean_default("# Head\n\n**strong** _em_ [link](http://x.com) ![alt](i.png)");
    for marker in ['#', '*', '_', '[', ']', '(', ')', '!'] {
        assert!(!out.contains(marker), "{marker:?} leaked into {out:?}");
    }
    assert_eq!(out, "Head\n\nstrong em link alt");
}

#[test]
fn cleaning_from_many_threads() {
    let doc = "# Title\n\n```\ncode\n```\n- item";
    let results: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| clean_default(doc))).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(results.iter().all(|r| r == "Title\n\ncode\nitem"));
}

// Options

#[test]
fn blank_runs_collapse_to_two() {
    assert_eq!(clean_default("a\n\n\n\n\nb"), "a\n\n\nb");
}

#[test]
fn preserve_blank_lines_keeps_every_line() {
    let options = CleanOptions {
        preserve_blank_lines: true,
        ..CleanOptions::default()
    };
    assert_eq!(clean("a\n\n\n\n\nb", &options), "a\n\n\n\n\nb");
}

#[test]
fn blank_lines_inside_code_are_never_collapsed() {
    assert_eq!(clean_default("```\na\n\n\n\nb\n```"), "a\n\n\n\nb");
}

#[test]
fn strip_code_blocks_uses_placeholder() {
    let options = CleanOptions {
        strip_code_blocks: true,
        ..CleanOptions::default()
    };
    assert_eq!(
        clean("a\n```\ncode\nmore\n```\nb", &options),
        "a\n[Code Omitted]\nb"
    );
    assert_eq!(
        clean("a\n\n    code\n\nb", &options),
        "a\n\n[Code Omitted]\n\nb"
    );
}

#[test]
fn empty_placeholder_drops_code_blocks() {
    let options = CleanOptions {
        strip_code_blocks: true,
        code_placeholder: String::new(),
        ..CleanOptions::default()
    };
    assert_eq!(clean("a\n```\ncode\n```\nb", &options), "a\nb");
}

#[test]
fn strip_code_blocks_keeps_inline_code() {
    let options = CleanOptions {
        strip_code_blocks: true,
        ..CleanOptions::default()
    };
    assert_eq!(clean("run `cargo test` now", &options), "run cargo test now");
}

#[rstest]
#[case(4, "\tcode", "code")]
#[case(8, "\tcode", "    code")]
#[case(2, "\tcode", "\tcode")]
#[case(0, "\tcode", "\tcode")]
fn tab_width_controls_indented_code(
    #[case] tab_width: usize,
    #[case] input: &str,
    #[case] expected: &str,
) {
    let options = CleanOptions {
        tab_width,
        ..CleanOptions::default()
    };
    assert_eq!(clean(input, &options), expected);
}

#[test]
fn strip_bare_urls_removes_prose_urls_only() {
    let options = CleanOptions {
        strip_bare_urls: true,
        ..CleanOptions::default()
    };
    assert_eq!(
        clean(
            "See https://example.com/page. Or <https://x.org> and `http://kept.com`",
            &options
        ),
        "See . Or  and http://kept.com"
    );
    assert_eq!(
        clean("```\nhttps://in.code\n```", &options),
        "https://in.code"
    );
}

// Scaling

fn best_of_three(doc: &str) -> Duration {
    (0..3)
        .map(|_| {
            let start = Instant::now();
            std::hint::black_box(clean_default(std::hint::black_box(doc)));
            start.elapsed()
        })
        .min()
        .unwrap()
}

#[rstest]
#[case("[")]
#[case("![")]
#[case("[](")]
#[case("][")]
#[case("[a](")]
#[case("<a")]
#[case("`x")]
#[case("*a_")]
#[case("- ")]
#[case("1. # ")]
fn unmatched_markup_scales_linearly(#[case] unit: &str) {
    let doc = |n: usize| format!("{}x", unit.repeat(n));
    let small = best_of_three(&doc(25_000));
    let large = best_of_three(&doc(100_000));
    assert!(
        large <= small * 8 + Duration::from_millis(25),
        "{unit:?}: 25k took {small:?}, 100k took {large:?}"
    );
}

#[test]
fn deeply_nested_links_clean_without_recursion() {
    let depth = 50_000;
    let doc = format!("{}x{}", "[".repeat(depth), "](u)".repeat(depth));
    assert_eq!(clean_default(&doc), "x");
}
