/// List item markers: bullets, ordered numbers, and checklist boxes.
///
/// Items are recognized one line at a time with no indentation nesting;
/// checklist markers must be probed before plain bullets since they share
/// the `- ` prefix.
pub struct ListItem;

impl ListItem {
    pub const BULLET: &'static str = "- ";
    pub const TASK_OPEN: &'static str = "- [ ] ";
    pub const TASK_DONE: &'static str = "- [x] ";

    /// Tries to read a checklist marker; returns (checked, content).
    pub fn try_task(line: &str) -> Option<(bool, &str)> {
        if let Some(content) = line.strip_prefix(Self::TASK_OPEN) {
            return Some((false, content));
        }
        if let Some(content) = line.strip_prefix(Self::TASK_DONE) {
            return Some((true, content));
        }
        None
    }

    /// Tries to read a plain bullet marker; returns the content after `- `.
    pub fn try_bullet(line: &str) -> Option<&str> {
        line.strip_prefix(Self::BULLET)
    }

    /// Tries to read an ordered marker like `12. `; returns the number, the
    /// raw marker text (digits, dot, space), and the content after it.
    pub fn try_ordered(line: &str) -> Option<(u64, &str, &str)> {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let rest = &line[digits..];
        if !rest.starts_with(". ") {
            return None;
        }
        let number: u64 = line[..digits].parse().ok()?;
        let marker_end = digits + 2;
        Some((number, &line[..marker_end], &line[marker_end..]))
    }

    /// The task marker string for a checked state.
    #[must_use]
    pub fn task_marker(checked: bool) -> &'static str {
        if checked { Self::TASK_DONE } else { Self::TASK_OPEN }
    }
}
