//! Event-level glue between an editing surface and the engine.

use std::ops::Range;

use log::debug;

use crate::caret;
use crate::editing::Document;
use crate::history::{EditHistory, Entry};
use crate::markup::{self, Tree};
use crate::smart::{self, Conversion};

/// The state a surface holds while a document is open.
///
/// The session owns the document, its rendered [`Tree`], the caret, and
/// the undo history, and plays the surface's side of the editing
/// contract: every content change re-renders the tree, carries the caret
/// across the replacement through the locator, and offers the result to
/// the history. Composition input is the one exception; renders pause
/// while a composition is open and a single catch-up pass runs when it
/// ends, so half-composed sequences never hit the renderer.
pub struct EditorSession {
    document: Document,
    tree: Tree,
    /// Caret as a character offset into the flattened source.
    caret: usize,
    history: EditHistory,
    composing: bool,
}

impl EditorSession {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let document = Document::new(text);
        let tree = markup::render(document.rope());
        let caret = document.char_len();
        Self {
            document,
            tree,
            caret,
            history: EditHistory::new(text, caret),
            composing: false,
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.document.text()
    }

    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The display projection of the current tree.
    #[must_use]
    pub fn html(&self) -> String {
        markup::to_html(&self.tree)
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    #[must_use]
    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn set_caret(&mut self, chars: usize) {
        self.caret = chars.min(self.document.char_len());
    }

    #[must_use]
    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Applies one typed character.
    ///
    /// Enter routes through list continuation and space through the
    /// conversion triggers; everything else inserts as-is.
    pub fn type_char(&mut self, ch: char) {
        if ch == '\n' {
            self.press_enter();
            return;
        }
        let mut buf = [0u8; 4];
        self.insert_at_caret(ch.encode_utf8(&mut buf));
        if ch == ' ' {
            self.check_conversion();
        }
    }

    /// Inserts text at the caret without any keystroke-level smarts,
    /// the paste path.
    pub fn insert(&mut self, text: &str) {
        self.insert_at_caret(text);
    }

    /// Replaces a character range, as typing over a selection does. The
    /// caret lands after the inserted text.
    pub fn replace_range(&mut self, range: Range<usize>, text: &str) {
        let char_len = self.document.char_len();
        let start = range.start.min(range.end).min(char_len);
        let end = range.end.max(range.start).min(char_len);
        let from = self.document.byte_of_char(start);
        let to = self.document.byte_of_char(end);
        self.document.replace(from..to, text);
        self.caret = start + text.chars().count();
        self.sync();
    }

    /// Deletes the character before the caret.
    pub fn delete_backward(&mut self) {
        if self.caret == 0 {
            return;
        }
        let from = self.document.byte_of_char(self.caret - 1);
        let to = self.document.byte_of_char(self.caret);
        self.document.delete(from..to);
        self.caret -= 1;
        self.sync();
    }

    /// Handles the Enter key: list and quote lines continue their marker
    /// on the next line, everything else gets a plain newline.
    pub fn press_enter(&mut self) {
        let text = self.document.text();
        match smart::on_enter(&text, self.caret) {
            Some(continuation) => {
                self.document.replace_all(&continuation.text);
                self.caret = continuation.caret;
                self.sync();
            }
            None => self.insert_at_caret("\n"),
        }
    }

    /// Inserts an image link for a file dropped onto the surface.
    ///
    /// Non-image payloads are ignored. Returns whether anything was
    /// inserted; storing the payload itself is the caller's problem.
    pub fn drop_attachment(&mut self, name: &str, media_type: &str, target: &str) -> bool {
        if !media_type.starts_with("image/") {
            debug!("ignoring non-image drop: {name} ({media_type})");
            return false;
        }
        self.insert_at_caret(&format!("![{name}]({target})"));
        true
    }

    /// Marks the start of a composition; renders pause until it ends.
    pub fn begin_composition(&mut self) {
        self.composing = true;
    }

    /// Ends a composition and runs the one catch-up pass for it.
    pub fn end_composition(&mut self) {
        if !self.composing {
            return;
        }
        self.composing = false;
        self.sync();
    }

    /// Steps back to the previous undo point. Restoring never records,
    /// so redo stays available.
    pub fn undo(&mut self) -> bool {
        match self.history.undo().cloned() {
            Some(entry) => {
                self.restore(&entry);
                true
            }
            None => false,
        }
    }

    /// Steps forward to the next undo point.
    pub fn redo(&mut self) -> bool {
        match self.history.redo().cloned() {
            Some(entry) => {
                self.restore(&entry);
                true
            }
            None => false,
        }
    }

    /// Replaces the open document wholesale, as switching notes does.
    /// History starts over so undo never crosses documents.
    pub fn load(&mut self, text: &str) {
        self.document.replace_all(text);
        self.caret = 0;
        self.history.reset(text, 0);
        self.composing = false;
        self.render_and_restore();
    }

    fn insert_at_caret(&mut self, text: &str) {
        let at = self.document.byte_of_char(self.caret);
        self.document.insert(at, text);
        self.caret += text.chars().count();
        self.sync();
    }

    fn check_conversion(&mut self) {
        let text = self.document.text();
        match smart::check(&text, self.caret) {
            Some(Conversion::Rerender) => {
                // The render already ran when the space went in; the
                // variant only matters to surfaces that batch renders.
                debug!("block prefix completed at caret {}", self.caret);
            }
            Some(Conversion::Rewrite { text, caret }) => {
                self.document.replace_all(&text);
                self.caret = caret;
                self.sync();
            }
            None => {}
        }
    }

    /// One pass of the surface contract after a content change.
    fn sync(&mut self) {
        if self.composing {
            return;
        }
        self.render_and_restore();
        self.history.record(&self.document.text(), self.caret);
    }

    fn render_and_restore(&mut self) {
        self.tree = markup::render(self.document.rope());
        let pos = caret::restore(&self.tree, self.caret);
        self.caret = caret::save(&self.tree, pos);
    }

    fn restore(&mut self, entry: &Entry) {
        self.document.replace_all(&entry.text);
        self.caret = entry.caret;
        self.render_and_restore();
    }
}
