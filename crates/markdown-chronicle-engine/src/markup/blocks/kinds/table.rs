/// Pipe tables: a header row, a divider row, and body rows.
///
/// A `|` line only starts a table when the next line is a divider; cell
/// splitting is a display-side projection, raw row text is kept for
/// flattening.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// Whether a line can be a table row (header or body).
    #[must_use]
    pub fn is_row(line: &str) -> bool {
        line.starts_with(Self::PIPE)
    }

    /// Whether a line is the divider between header and body, e.g.
    /// `| --- | :--: |`.
    #[must_use]
    pub fn is_divider(line: &str) -> bool {
        line.starts_with(Self::PIPE)
            && line.contains('-')
            && line
                .chars()
                .all(|c| matches!(c, '|' | '-' | ':' | ' ' | '\t'))
    }

    /// Splits a row into trimmed cell texts, dropping the empty leading and
    /// trailing cells produced by the outer pipes.
    #[must_use]
    pub fn split_cells(line: &str) -> Vec<&str> {
        let mut cells: Vec<&str> = line.split(Self::PIPE).map(str::trim).collect();
        if cells.first().is_some_and(|c| c.is_empty()) {
            cells.remove(0);
        }
        if cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        cells
    }
}
