// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** _content_ and a [link](http://example.com).\n\n- Bullet point\n  - Nested item\n- [x] Another item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n> Quoted `code` text\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_emphasis_heavy(lines: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        content.push_str(&format!(
            "Line {i} with *em*, **strong**, ***both***, an unbalanced ** run and snake_case_names.\n"
        ));
    }
    content
}

#[allow(dead_code)]
pub fn generate_code_heavy(blocks: usize) -> String {
    let mut content = String::new();
    for i in 0..blocks {
        content.push_str(&format!("Block {i}:\n\n```\n"));
        for j in 0..20 {
            content.push_str(&format!("let v{j} = *ptr + [a](b);\n"));
        }
        content.push_str("```\n\n    indented code line\n\n");
    }
    content
}

#[allow(dead_code)]
pub fn generate_nested_links(depth: usize) -> String {
    format!("{}text{}\n", "[".repeat(depth), "](http://example.com)".repeat(depth))
}
