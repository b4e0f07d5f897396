// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_document(size: usize) -> String {
    let base = "# Entry\n\nParagraph with **bold**, *italic*, `code` and a [link](url).\n\n- Bullet point\n- [ ] Open task\n- [x] Done task\n\n> Quoted line\n\n```rust\nfn example() {\n    println!(\"hello\");\n}\n```\n\n| a | b |\n| --- | --- |\n| 1 | 2 |\n\n";
    base.repeat(size)
}

/// A revision of the document with one line edited, one inserted, and
/// one removed, roughly what sits between two commits.
#[allow(dead_code)]
pub fn generate_revision(original: &str) -> String {
    let mut lines: Vec<&str> = original.split('\n').collect();
    let len = lines.len();
    if len > 10 {
        lines[len / 2] = "an edited line";
        lines.insert(len / 3, "an inserted line");
        lines.remove(len - 2);
    }
    lines.join("\n")
}
