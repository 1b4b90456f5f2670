// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\nParagraph with **bold**, *italic*, `code` and a [link](https://example.com).\n\n- Bullet point\n- Another ~~old~~ item\n1. Numbered\n\n| a | b |\n\n```rust\nfn example() {}\n```\n\n";
    base.repeat(size)
}

/// Byte offset of the middle of the document, snapped back to the start of
/// the nearest paragraph line.
#[allow(dead_code)]
pub fn middle_paragraph(content: &str) -> usize {
    let mid = content.len() / 2;
    content[..mid].rfind("Paragraph").unwrap_or(0)
}
