use super::cursor::Cursor;
use super::kinds::{CodeSpan, Emphasis, Footnote, Highlight, Image, Link, Strike, Strong};
use crate::markup::tree::Inline;

/// Parses one line of block content into a flat sequence of [`Inline`]
/// leaves.
///
/// Constructs are probed in precedence order at each position: code spans
/// first (raw zones suppress everything inside), then strong before
/// emphasis on the shared `*` delimiter, then the remaining delimited
/// constructs. A probe that fails to find its closer restores the cursor
/// and the characters fall through as literal text, so no input is ever
/// dropped.
pub fn parse_inline(s: &str) -> Vec<Inline> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    // Accumulated literal text between constructs becomes one Text leaf.
    fn flush_text(out: &mut Vec<Inline>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(Inline::Text(s[start..end].to_string()));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        if let Some(node) = try_parse_code_span(&mut cur) {
            flush_text(&mut out, s, text_start, start);
            text_start = cur.pos();
            out.push(node);
            continue;
        }
        if let Some(node) = try_parse_strong(&mut cur) {
            flush_text(&mut out, s, text_start, start);
            text_start = cur.pos();
            out.push(node);
            continue;
        }
        if let Some(node) = try_parse_emphasis(&mut cur) {
            flush_text(&mut out, s, text_start, start);
            text_start = cur.pos();
            out.push(node);
            continue;
        }
        if let Some(node) = try_parse_strike(&mut cur) {
            flush_text(&mut out, s, text_start, start);
            text_start = cur.pos();
            out.push(node);
            continue;
        }
        if let Some(node) = try_parse_highlight(&mut cur) {
            flush_text(&mut out, s, text_start, start);
            text_start = cur.pos();
            out.push(node);
            continue;
        }
        if let Some(node) = try_parse_image(&mut cur) {
            flush_text(&mut out, s, text_start, start);
            text_start = cur.pos();
            out.push(node);
            continue;
        }
        if let Some(node) = try_parse_link(&mut cur) {
            flush_text(&mut out, s, text_start, start);
            text_start = cur.pos();
            out.push(node);
            continue;
        }
        if let Some(node) = try_parse_footnote(&mut cur) {
            flush_text(&mut out, s, text_start, start);
            text_start = cur.pos();
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, s, text_start, cur.pos());
    out
}

/// Attempts a code span at the current position.
///
/// The inner text must be non-empty; `` `` `` stays literal. Nothing is
/// parsed inside the span.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<Inline> {
    if !cur.starts_with(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump();
    let inner_start = cur.pos();

    while !cur.eof() && !cur.starts_with(CodeSpan::TICK) {
        cur.bump();
    }
    let inner_end = cur.pos();

    if cur.eof() || inner_end == inner_start {
        *cur = saved;
        return None;
    }
    cur.bump();

    Some(Inline::Code(cur.slice(inner_start, inner_end).to_string()))
}

/// Attempts a two-character wrapping pair (`**`, `~~`, `==`).
///
/// The inner text may be empty and may contain a single delimiter
/// character, but not the pair itself. Returns the inner text.
fn try_parse_pair(cur: &mut Cursor<'_>, delim: &str) -> Option<String> {
    if !cur.starts_with(delim) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(delim.len());
    let inner_start = cur.pos();

    while !cur.eof() && !cur.starts_with(delim) {
        cur.bump();
    }

    if cur.eof() {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump_n(delim.len());

    Some(cur.slice(inner_start, inner_end).to_string())
}

fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<Inline> {
    try_parse_pair(cur, Strong::DELIM).map(Inline::Strong)
}

fn try_parse_strike(cur: &mut Cursor<'_>) -> Option<Inline> {
    try_parse_pair(cur, Strike::DELIM).map(Inline::Strike)
}

fn try_parse_highlight(cur: &mut Cursor<'_>) -> Option<Inline> {
    try_parse_pair(cur, Highlight::DELIM).map(Inline::Highlight)
}

/// Attempts single-`*` emphasis.
///
/// Only probed after strong has failed at the same position. The opener
/// must not follow another `*`, the inner text must be non-empty and free
/// of `*`, and the closer must not be followed by another `*`; together
/// these keep emphasis from eating half of a strong delimiter.
fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<Inline> {
    if !cur.starts_with(Emphasis::DELIM) || cur.prev() == Some(b'*') {
        return None;
    }

    let saved = cur.clone();
    cur.bump();
    let inner_start = cur.pos();

    while !cur.eof() && !cur.starts_with(Emphasis::DELIM) {
        cur.bump();
    }
    let inner_end = cur.pos();

    if cur.eof() || inner_end == inner_start {
        *cur = saved;
        return None;
    }
    cur.bump();

    if cur.peek() == Some(b'*') {
        // Closer is half of a `**`; not emphasis.
        *cur = saved;
        return None;
    }

    Some(Inline::Emphasis(cur.slice(inner_start, inner_end).to_string()))
}

/// Attempts `![alt](url)`. The alt text may be empty; the url may not.
fn try_parse_image(cur: &mut Cursor<'_>) -> Option<Inline> {
    if !cur.starts_with(Image::OPEN) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(Image::OPEN.len());

    let Some((alt, url)) = parse_bracket_paren(cur, true) else {
        *cur = saved;
        return None;
    };
    Some(Inline::Image { alt, url })
}

/// Attempts `[text](url)`. Both parts must be non-empty.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<Inline> {
    if !cur.starts_with(Link::OPEN) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(Link::OPEN.len());

    let Some((text, url)) = parse_bracket_paren(cur, false) else {
        *cur = saved;
        return None;
    };
    Some(Inline::Link { text, url })
}

/// Parses `text](url)` after an opening bracket has been consumed.
fn parse_bracket_paren(cur: &mut Cursor<'_>, allow_empty_text: bool) -> Option<(String, String)> {
    let text_start = cur.pos();
    while !cur.eof() && !cur.starts_with(Link::CLOSE) {
        cur.bump();
    }
    let text_end = cur.pos();
    if !allow_empty_text && text_end == text_start {
        return None;
    }

    if !cur.starts_with(Link::MID) {
        return None;
    }
    cur.bump_n(Link::MID.len());

    let url_start = cur.pos();
    while !cur.eof() && !cur.starts_with(Link::END) {
        cur.bump();
    }
    let url_end = cur.pos();
    if cur.eof() || url_end == url_start {
        return None;
    }
    cur.bump();

    Some((
        cur.slice(text_start, text_end).to_string(),
        cur.slice(url_start, url_end).to_string(),
    ))
}

/// Attempts a footnote marker `[^label]`, label being one or more word
/// characters. Probed after links, so `[^a](url)` stays a link.
fn try_parse_footnote(cur: &mut Cursor<'_>) -> Option<Inline> {
    if !cur.starts_with(Footnote::OPEN) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(Footnote::OPEN.len());
    let label_start = cur.pos();

    while cur.peek().is_some_and(Footnote::is_label_byte) {
        cur.bump();
    }
    let label_end = cur.pos();

    if label_end == label_start || !cur.starts_with(Footnote::CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump();

    Some(Inline::Footnote {
        label: cur.slice(label_start, label_end).to_string(),
    })
}
