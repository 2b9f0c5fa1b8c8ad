//! In-memory table model for the reflow pipeline.
//!
//! Input text is converted into rows of cells, one row per line. A cell
//! stores the column's visible text and the whitespace that followed it,
//! both as the resolved trailing width and as what the input literally
//! contained. The resolver mutates trailing widths in place; the table is
//! owned by a single [`crate::process::reflow`] call and never outlives it.

/// What the delimiter after a cell literally contained in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawGap {
    /// An all-space delimiter of the given length. The row's last cell
    /// carries `Spaces(0)`.
    Spaces(usize),
    /// The delimiter contained a tab-class character (tab, vertical tab,
    /// form feed, or carriage return). Its spacing is always recomputed.
    Tabbed,
}

/// One column of one line: visible text plus its trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Visible content. Leading line indentation is folded into the first
    /// cell's text verbatim rather than treated as a column of its own.
    pub text: String,
    /// Number of spaces to emit after this cell when it is not the row's
    /// last cell. Starts as the literal space count (or 0 for tabbed
    /// delimiters) and is adjusted by the resolver.
    pub trailing: usize,
    /// The delimiter the input actually contained, for change detection.
    pub raw: RawGap,
}

impl Cell {
    /// Cell followed by an all-space delimiter of `spaces` spaces.
    #[must_use]
    pub fn spaced(text: impl Into<String>, spaces: usize) -> Self {
        Cell {
            text: text.into(),
            trailing: spaces,
            raw: RawGap::Spaces(spaces),
        }
    }

    /// Cell followed by a delimiter containing a tab-class character.
    /// Trailing starts at zero; the resolver supplies the real width.
    #[must_use]
    pub fn tabbed(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            trailing: 0,
            raw: RawGap::Tabbed,
        }
    }

    /// Visible width of the cell text in Unicode scalar values, not bytes.
    #[must_use]
    pub fn text_width(&self) -> usize {
        self.text.chars().count()
    }
}

/// One input line as an ordered sequence of cells.
pub type Row = Vec<Cell>;

/// The whole input, one row per line, in input order.
pub type Table = Vec<Row>;

/// Width of a cell slice: text widths of every cell plus trailing widths
/// of every cell except the slice's last. Measuring `&row[..k]` therefore
/// gives the row's width through cell `k-1`'s text, excluding that cell's
/// own trailing.
#[must_use]
pub fn measure_width(cells: &[Cell]) -> usize {
    let mut total = 0;
    for (i, cell) in cells.iter().enumerate() {
        total += cell.text_width();
        if i < cells.len() - 1 {
            total += cell.trailing;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_width_excludes_last_trailing() {
        let row = vec![Cell::spaced("int", 4), Cell::spaced("a;", 9)];
        // 3 + 4 + 2, the last cell's trailing is not counted
        assert_eq!(measure_width(&row), 9);
    }

    #[test]
    fn test_measure_width_single_cell() {
        let row = vec![Cell::spaced("struct A {", 0)];
        assert_eq!(measure_width(&row), 10);
    }

    #[test]
    fn test_measure_width_empty() {
        assert_eq!(measure_width(&[]), 0);
    }

    #[test]
    fn test_measure_width_counts_chars_not_bytes() {
        let row = vec![Cell::spaced("héllo", 2), Cell::spaced("wörld", 0)];
        // "héllo" is 5 chars but 6 bytes
        assert_eq!(measure_width(&row), 12);
    }

    #[test]
    fn test_tabbed_cell_starts_at_zero() {
        let cell = Cell::tabbed("a;");
        assert_eq!(cell.trailing, 0);
        assert_eq!(cell.raw, RawGap::Tabbed);
    }

    #[test]
    fn test_measure_width_prefix_slice() {
        let row = vec![
            Cell::spaced("\tint", 8),
            Cell::tabbed("a;"),
            Cell::spaced("// field 1", 4),
        ];
        // Tab in the text counts as one char
        assert_eq!(measure_width(&row[..1]), 4);
        assert_eq!(measure_width(&row[..2]), 4 + 8 + 2);
    }
}
