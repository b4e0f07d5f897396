//! Read-only HTML projection of a parsed tree.
//!
//! This is NOT a general markdown-to-HTML compiler. It emits minimal,
//! deterministic HTML for the live preview pane; the flattened tree, not
//! this output, is the authoritative form of the document.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::markup::tree::{BlockKind, BlockNode, Inline, ListMarker, TableBlock, Tree};

/// Serializes the whole tree.
///
/// Consecutive list items separated by a single newline are grouped into
/// one `<ul>` or `<ol>`; a blank line between items starts a new list.
pub fn to_html(tree: &Tree) -> String {
    let mut html = String::new();
    let blocks = &tree.blocks;

    let mut i = 0;
    while i < blocks.len() {
        if let BlockKind::ListItem { marker, .. } = &blocks[i].kind {
            i = push_list(&mut html, blocks, i, is_ordered(marker));
            continue;
        }
        push_block(&mut html, &blocks[i].kind);
        i += 1;
    }

    html
}

fn is_ordered(marker: &ListMarker) -> bool {
    matches!(marker, ListMarker::Ordered { .. })
}

fn push_block(html: &mut String, kind: &BlockKind) {
    match kind {
        BlockKind::Heading { level, children } => {
            let tag = heading_tag(*level);
            html.push('<');
            html.push_str(tag);
            html.push('>');
            push_inlines(html, children);
            html.push_str("</");
            html.push_str(tag);
            html.push('>');
        }
        BlockKind::Paragraph { children } => {
            html.push_str("<p>");
            push_inlines(html, children);
            html.push_str("</p>");
        }
        BlockKind::CodeBlock { language, body } => {
            if language.is_empty() {
                html.push_str("<pre><code>");
            } else {
                html.push_str("<pre><code class=\"language-");
                html.push_str(&encode_double_quoted_attribute(language));
                html.push_str("\">");
            }
            html.push_str(&encode_text(&body.join("\n")));
            html.push_str("</code></pre>");
        }
        BlockKind::Diagram { keyword, body } => {
            html.push_str("<pre class=\"diagram\" data-diagram=\"");
            html.push_str(keyword);
            html.push_str("\">");
            html.push_str(&encode_text(&body.join("\n")));
            html.push_str("</pre>");
        }
        BlockKind::MathBlock { body } => {
            html.push_str("<pre class=\"math\">");
            html.push_str(&encode_text(&body.join("\n")));
            html.push_str("</pre>");
        }
        BlockKind::Table(table) => push_table(html, table),
        BlockKind::Quote { children } => {
            html.push_str("<blockquote>");
            push_inlines(html, children);
            html.push_str("</blockquote>");
        }
        BlockKind::Rule => html.push_str("<hr>"),
        BlockKind::ListItem { marker, children } => {
            // Reached only via push_list, but keep it total.
            push_list_item(html, marker, children);
        }
    }
}

fn heading_tag(level: u8) -> &'static str {
    match level {
        1 => "h1",
        2 => "h2",
        3 => "h3",
        4 => "h4",
        5 => "h5",
        _ => "h6",
    }
}

fn push_list(html: &mut String, blocks: &[BlockNode], start: usize, ordered: bool) -> usize {
    let tag = if ordered { "ol" } else { "ul" };
    html.push('<');
    html.push_str(tag);
    html.push('>');

    let mut j = start;
    while j < blocks.len() {
        let BlockKind::ListItem { marker, children } = &blocks[j].kind else {
            break;
        };
        if is_ordered(marker) != ordered {
            break;
        }
        if j > start && blocks[j - 1].terminator != "\n" {
            break;
        }
        push_list_item(html, marker, children);
        j += 1;
    }

    html.push_str("</");
    html.push_str(tag);
    html.push('>');
    j
}

fn push_list_item(html: &mut String, marker: &ListMarker, children: &[Inline]) {
    html.push_str("<li>");
    if let ListMarker::Task { checked } = marker {
        if *checked {
            html.push_str("<input type=\"checkbox\" checked disabled> ");
        } else {
            html.push_str("<input type=\"checkbox\" disabled> ");
        }
    }
    push_inlines(html, children);
    html.push_str("</li>");
}

fn push_table(html: &mut String, table: &TableBlock) {
    html.push_str("<table><thead><tr>");
    for cell in &table.header.cells {
        html.push_str("<th>");
        push_inlines(html, cell);
        html.push_str("</th>");
    }
    html.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        html.push_str("<tr>");
        for cell in &row.cells {
            html.push_str("<td>");
            push_inlines(html, cell);
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
}

fn push_inlines(html: &mut String, children: &[Inline]) {
    for child in children {
        push_inline(html, child);
    }
}

fn push_inline(html: &mut String, node: &Inline) {
    match node {
        Inline::Text(s) => html.push_str(&encode_text(s)),
        Inline::LineBreak => html.push_str("<br>"),
        Inline::Strong(s) => push_wrapped(html, "strong", s),
        Inline::Emphasis(s) => push_wrapped(html, "em", s),
        Inline::Strike(s) => push_wrapped(html, "del", s),
        Inline::Highlight(s) => push_wrapped(html, "mark", s),
        Inline::Code(s) => push_wrapped(html, "code", s),
        Inline::Link { text, url } => {
            html.push_str("<a href=\"");
            html.push_str(&encode_double_quoted_attribute(url));
            html.push_str("\">");
            html.push_str(&encode_text(text));
            html.push_str("</a>");
        }
        Inline::Image { alt, url } => {
            html.push_str("<img src=\"");
            html.push_str(&encode_double_quoted_attribute(url));
            html.push_str("\" alt=\"");
            html.push_str(&encode_double_quoted_attribute(alt));
            html.push_str("\">");
        }
        Inline::Footnote { label } => {
            html.push_str("<sup class=\"footnote\">");
            html.push_str(&encode_text(label));
            html.push_str("</sup>");
        }
    }
}

fn push_wrapped(html: &mut String, tag: &str, s: &str) {
    html.push('<');
    html.push_str(tag);
    html.push('>');
    html.push_str(&encode_text(s));
    html.push_str("</");
    html.push_str(tag);
    html.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::render_str;

    fn html_of(source: &str) -> String {
        to_html(&render_str(source))
    }

    #[test]
    fn heading_levels_map_to_tags() {
        assert_eq!(html_of("# one\n"), "<h1>one</h1>");
        assert_eq!(html_of("###### six\n"), "<h6>six</h6>");
    }

    #[test]
    fn paragraph_lines_render_breaks() {
        assert_eq!(html_of("a\nb\n"), "<p>a<br>b</p>");
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(html_of("a < b & c\n"), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn inline_styles_render() {
        assert_eq!(
            html_of("**b** *i* ~~s~~ ==h== `c`\n"),
            "<p><strong>b</strong> <em>i</em> <del>s</del> <mark>h</mark> <code>c</code></p>"
        );
    }

    #[test]
    fn links_and_images_escape_attributes() {
        assert_eq!(
            html_of("[t](u\"v)\n"),
            "<p><a href=\"u&quot;v\">t</a></p>"
        );
        assert_eq!(
            html_of("![alt](pic.png)\n"),
            "<p><img src=\"pic.png\" alt=\"alt\"></p>"
        );
    }

    #[test]
    fn consecutive_bullets_group_into_one_list() {
        assert_eq!(
            html_of("- a\n- b\n"),
            "<ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn blank_line_splits_lists() {
        assert_eq!(
            html_of("- a\n\n- b\n"),
            "<ul><li>a</li></ul><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn ordered_items_get_their_own_list() {
        assert_eq!(
            html_of("- a\n1. b\n"),
            "<ul><li>a</li></ul><ol><li>b</li></ol>"
        );
    }

    #[test]
    fn tasks_render_checkboxes() {
        assert_eq!(
            html_of("- [ ] open\n- [x] done\n"),
            "<ul><li><input type=\"checkbox\" disabled> open</li>\
             <li><input type=\"checkbox\" checked disabled> done</li></ul>"
        );
    }

    #[test]
    fn code_block_keeps_language_and_escapes_body() {
        assert_eq!(
            html_of("```rust\nlet x = 1 < 2;\n```\n"),
            "<pre><code class=\"language-rust\">let x = 1 &lt; 2;</code></pre>"
        );
    }

    #[test]
    fn diagram_and_math_render_labeled_frames() {
        assert_eq!(
            html_of("```mermaid\ngraph TD\n```\n"),
            "<pre class=\"diagram\" data-diagram=\"mermaid\">graph TD</pre>"
        );
        assert_eq!(
            html_of("$$\nE=mc^2\n$$\n"),
            "<pre class=\"math\">E=mc^2</pre>"
        );
    }

    #[test]
    fn table_renders_head_and_body() {
        assert_eq!(
            html_of("| a | b |\n| --- | --- |\n| 1 | 2 |\n"),
            "<table><thead><tr><th>a</th><th>b</th></tr></thead>\
             <tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
        );
    }

    #[test]
    fn quote_and_rule_render() {
        assert_eq!(html_of("> said\n"), "<blockquote>said</blockquote>");
        assert_eq!(html_of("---\n"), "<hr>");
    }
}
