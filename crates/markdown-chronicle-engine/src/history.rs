//! Bounded, coalesced undo history for the editing surface.
//!
//! Snapshots are whole-text copies with the caret that produced them.
//! Recording is rate-limited by a quiescence window so a fast typing burst
//! collapses into one entry, and the ring is capacity-bounded with the
//! oldest entry evicted first. Undo and redo only move the current pointer
//! over existing entries, they never mutate entry contents.

use std::time::{Duration, Instant};

/// One undo point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub text: String,
    pub caret: usize,
}

pub struct EditHistory {
    entries: Vec<Entry>,
    current: usize,
    last_recorded: Instant,
}

impl EditHistory {
    /// Minimum quiet time between two recorded entries.
    pub const COALESCE_WINDOW: Duration = Duration::from_millis(500);
    /// Maximum retained entries; the oldest is evicted beyond this.
    pub const CAPACITY: usize = 50;

    /// Starts history with a single baseline entry for the given text.
    #[must_use]
    pub fn new(text: &str, caret: usize) -> Self {
        Self {
            entries: vec![Entry {
                text: text.to_string(),
                caret,
            }],
            current: 0,
            last_recorded: Instant::now(),
        }
    }

    /// Records an undo point, unless it falls inside the coalescing
    /// window of the previous recorded entry.
    ///
    /// Recording truncates any redo tail beyond the current pointer.
    /// Returns whether the entry was kept.
    pub fn record(&mut self, text: &str, caret: usize) -> bool {
        self.record_at(text, caret, Instant::now())
    }

    /// [`EditHistory::record`] with an explicit clock, for tests.
    pub fn record_at(&mut self, text: &str, caret: usize, now: Instant) -> bool {
        if now.duration_since(self.last_recorded) < Self::COALESCE_WINDOW {
            return false;
        }

        self.entries.truncate(self.current + 1);
        self.entries.push(Entry {
            text: text.to_string(),
            caret,
        });
        if self.entries.len() > Self::CAPACITY {
            self.entries.remove(0);
        }
        self.current = self.entries.len() - 1;
        self.last_recorded = now;
        true
    }

    /// Steps back one entry; `None` at the oldest retained entry.
    pub fn undo(&mut self) -> Option<&Entry> {
        if self.current == 0 {
            return None;
        }
        self.current -= 1;
        Some(&self.entries[self.current])
    }

    /// Steps forward one entry; `None` at the newest.
    pub fn redo(&mut self) -> Option<&Entry> {
        if self.current + 1 >= self.entries.len() {
            return None;
        }
        self.current += 1;
        Some(&self.entries[self.current])
    }

    /// Discards everything and starts over from a fresh baseline. Used
    /// when the caller switches documents, so history never leaks across
    /// them.
    pub fn reset(&mut self, text: &str, caret: usize) {
        self.entries = vec![Entry {
            text: text.to_string(),
            caret,
        }];
        self.current = 0;
        self.last_recorded = Instant::now();
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A clock that always lands outside the coalescing window.
    struct Ticker {
        now: Instant,
    }

    impl Ticker {
        fn new() -> Self {
            Self {
                now: Instant::now(),
            }
        }

        fn tick(&mut self) -> Instant {
            self.now += EditHistory::COALESCE_WINDOW;
            self.now
        }
    }

    #[test]
    fn records_spaced_edits() {
        let mut history = EditHistory::new("", 0);
        let mut clock = Ticker::new();
        assert!(history.record_at("a", 1, clock.tick()));
        assert!(history.record_at("ab", 2, clock.tick()));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn drops_records_inside_the_window() {
        let mut history = EditHistory::new("", 0);
        let mut clock = Ticker::new();
        let t = clock.tick();
        assert!(history.record_at("a", 1, t));
        assert!(!history.record_at("ab", 2, t + Duration::from_millis(100)));
        assert_eq!(history.len(), 2);

        // The window measures from the last kept entry, not the last call.
        assert!(history.record_at("abc", 3, t + EditHistory::COALESCE_WINDOW));
    }

    #[test]
    fn undo_walks_back_to_the_oldest_then_stops() {
        let mut history = EditHistory::new("v0", 0);
        let mut clock = Ticker::new();
        history.record_at("v1", 2, clock.tick());
        history.record_at("v2", 2, clock.tick());

        assert_eq!(history.undo().map(|e| e.text.clone()), Some("v1".into()));
        assert_eq!(history.undo().map(|e| e.text.clone()), Some("v0".into()));
        assert!(history.undo().is_none());
    }

    #[test]
    fn redo_replays_forward_then_stops() {
        let mut history = EditHistory::new("v0", 0);
        let mut clock = Ticker::new();
        history.record_at("v1", 2, clock.tick());
        history.undo();

        assert_eq!(history.redo().map(|e| e.text.clone()), Some("v1".into()));
        assert!(history.redo().is_none());
    }

    #[test]
    fn recording_truncates_the_redo_tail() {
        let mut history = EditHistory::new("v0", 0);
        let mut clock = Ticker::new();
        history.record_at("v1", 2, clock.tick());
        history.record_at("v2", 2, clock.tick());
        history.undo();
        history.undo();

        history.record_at("fork", 4, clock.tick());
        assert!(history.redo().is_none());
        assert_eq!(history.len(), 2);
        assert_eq!(history.undo().map(|e| e.text.clone()), Some("v0".into()));
    }

    #[test]
    fn capacity_evicts_the_oldest_entry() {
        let mut history = EditHistory::new("v0", 0);
        let mut clock = Ticker::new();
        for i in 1..=EditHistory::CAPACITY + 10 {
            history.record_at(&format!("v{i}"), i, clock.tick());
        }
        assert_eq!(history.len(), EditHistory::CAPACITY);

        // Undo to exhaustion lands on the oldest retained entry, which is
        // no longer v0, and never returns None on the way there.
        let mut last = None;
        while let Some(entry) = history.undo() {
            last = Some(entry.text.clone());
        }
        assert_eq!(last, Some("v11".to_string()));
    }

    #[test]
    fn reset_discards_history() {
        let mut history = EditHistory::new("v0", 0);
        let mut clock = Ticker::new();
        history.record_at("v1", 2, clock.tick());

        history.reset("fresh", 0);
        assert_eq!(history.len(), 1);
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
    }
}
