//! Integration tests for the markup module.
//!
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`;
//! each fixture is rendered, invariant-checked, and its HTML projection
//! snapshot-asserted.

use xi_rope::Rope;

use crate::markup::{BlockKind, Inline, render, render_str, snapshot, to_html};

// Fixture-based snapshot tests

#[test]
fn fixture_simple_paragraph() {
    assert_fixture("simple_paragraph");
}

#[test]
fn fixture_heading_and_list() {
    assert_fixture("heading_and_list");
}

#[test]
fn fixture_fenced_code() {
    assert_fixture("fenced_code");
}

#[test]
fn fixture_quoted_table() {
    assert_fixture("quoted_table");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/markup/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let tree = render_str(&md);
    snapshot::invariants(&md, &tree);

    let html = to_html(&tree);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, html);
    });
}

// Round-trip tests

/// Rendering then flattening reproduces the source exactly, including
/// syntax that degrades to literal text.
#[test]
fn flatten_reproduces_source() {
    let sources = [
        "",
        "\n",
        "plain text",
        "plain text\n",
        "# Title\n\nbody with **bold** and *italic*\n",
        "- one\n- two\n\n1. first\n007. padded\n",
        "- [ ] open\n- [x] done\n",
        "> a quote line\n> another\n",
        "```rust\nlet x = 1;\n\n// blank inside\n```\n",
        "```mermaid\ngraph TD\n```\n",
        "$$\nE=mc^2\n$$\n",
        "| a | b |\n| --- | --- |\n| 1 | 2 |\n",
        "---\n",
        "text with `code` and [link](url) and ![img](pic.png)[^1]\n",
        "broken **bold and `tick\n",
        "```unterminated\nstays text\n",
        "####### seven hashes\n#nospace\n-bare\n",
        "  \n\nleading blanks\n\n\ntrailing blanks\n\n",
        "~~gone~~ ==kept== *em* **st** ***both***\n",
        "| header only |\nno divider follows\n",
    ];
    for source in sources {
        let tree = render_str(source);
        snapshot::invariants(source, &tree);
    }
}

/// Rendering is a pure function of the text: flatten then render again
/// yields an identical tree.
#[test]
fn render_is_idempotent_over_flatten() {
    let source = "# A\n\npara **b**\n\n- x\n- [ ] y\n\n```\nraw\n```\n";
    let first = render_str(source);
    let second = render_str(&first.flatten());
    assert_eq!(first, second);
}

/// The rope path and the str path agree.
#[test]
fn rope_and_str_renders_agree() {
    let source = "# T\n\nbody\n\n```rust\nx\n```\n";
    assert_eq!(render(&Rope::from(source)), render_str(source));
}

/// Raw zones suppress inline parsing.
#[test]
fn fenced_body_is_not_inline_parsed() {
    let tree = render_str("```\n**not bold** [not](link)\n```\n");
    let BlockKind::CodeBlock { body, .. } = &tree.blocks[0].kind else {
        panic!("expected code block");
    };
    assert_eq!(body, &vec!["**not bold** [not](link)".to_string()]);
}

/// Unclosed inline constructs become plain text.
#[test]
fn unclosed_constructs_become_text() {
    let tree = render_str("**unclosed and `also unclosed");
    let BlockKind::Paragraph { children } = &tree.blocks[0].kind else {
        panic!("expected paragraph");
    };
    assert_eq!(
        children,
        &vec![Inline::Text("**unclosed and `also unclosed".to_string())]
    );
}

/// An empty document produces no blocks.
#[test]
fn empty_document() {
    let tree = render_str("");
    assert!(tree.blocks.is_empty());
    assert!(tree.leading.is_empty());
}

/// Blank lines alone produce no blocks, only a leading run.
#[test]
fn blank_lines_only() {
    let tree = render_str("\n\n\n");
    assert!(tree.blocks.is_empty());
    assert_eq!(tree.leading, "\n\n\n");
}
