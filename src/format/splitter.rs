//! Line splitting: one line of text to an ordered sequence of cells.
//!
//! The column-boundary rule distinguishes alignable whitespace from
//! ordinary word spacing:
//! - a whitespace run starting with a tab-class character (tab, vertical
//!   tab, form feed, carriage return) is always a boundary;
//! - a space followed by at least one more whitespace character is a
//!   boundary;
//! - a single space between non-whitespace characters (or before the end
//!   of the line) is plain text.
//!
//! Leading indentation is kept verbatim as part of the first cell's text,
//! so indent tabs survive while delimiter tabs are replaced with spaces.

use super::table::{Cell, Row};

/// Whitespace that forces a boundary and whose spacing is recomputed.
fn is_tab_class(ch: char) -> bool {
    matches!(ch, '\t' | '\u{0B}' | '\u{0C}' | '\r')
}

/// Whitespace recognized inside a line (newlines never reach the splitter).
fn is_line_whitespace(ch: char) -> bool {
    ch == ' ' || is_tab_class(ch)
}

/// Split one line (without its newline) into cells.
///
/// A line with no boundary yields exactly one cell. Blank and
/// whitespace-only lines yield one cell with empty text; with a single
/// column they break every alignment block spanning two or more columns.
#[must_use]
pub fn split_line(line: &str) -> Row {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();

    // Leading indentation belongs to the first cell's text verbatim.
    let mut start = 0;
    while start < len && is_line_whitespace(chars[start]) {
        start += 1;
    }
    if start == len {
        return vec![Cell::spaced("", 0)];
    }

    let mut row = Row::new();
    let mut text: String = chars[..start].iter().collect();
    let mut pos = start;

    while pos < len {
        let ch = chars[pos];
        if !is_line_whitespace(ch) {
            text.push(ch);
            pos += 1;
            continue;
        }

        // Extent of the whitespace run starting here.
        let mut end = pos;
        while end < len && is_line_whitespace(chars[end]) {
            end += 1;
        }
        let run = &chars[pos..end];

        // A lone space is word spacing, not a delimiter.
        if !is_tab_class(ch) && run.len() < 2 {
            text.push(ch);
            pos = end;
            continue;
        }

        if run.iter().copied().any(is_tab_class) {
            row.push(Cell::tabbed(std::mem::take(&mut text)));
        } else {
            row.push(Cell::spaced(std::mem::take(&mut text), run.len()));
        }
        pos = end;
    }

    // A delimiter reaching end-of-line leaves the previous cell last;
    // only non-empty remaining text forms a final cell.
    if !text.is_empty() {
        row.push(Cell::spaced(text, 0));
    }

    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::table::RawGap;

    #[test]
    fn test_single_space_is_text() {
        let row = split_line("char* c;");
        assert_eq!(row.len(), 1);
        assert_eq!(row[0].text, "char* c;");
    }

    #[test]
    fn test_two_spaces_are_a_boundary() {
        let row = split_line("int  a;");
        assert_eq!(row.len(), 2);
        assert_eq!(row[0].text, "int");
        assert_eq!(row[0].trailing, 2);
        assert_eq!(row[0].raw, RawGap::Spaces(2));
        assert_eq!(row[1].text, "a;");
    }

    #[test]
    fn test_tab_is_a_boundary_with_zero_trailing() {
        let row = split_line("int\ta;");
        assert_eq!(row.len(), 2);
        assert_eq!(row[0].raw, RawGap::Tabbed);
        assert_eq!(row[0].trailing, 0);
    }

    #[test]
    fn test_space_then_tab_is_tabbed() {
        let row = split_line("a; \tb;");
        assert_eq!(row.len(), 2);
        assert_eq!(row[0].raw, RawGap::Tabbed);
    }

    #[test]
    fn test_leading_indent_folds_into_first_cell() {
        let row = split_line("\tint        a;");
        assert_eq!(row.len(), 2);
        assert_eq!(row[0].text, "\tint");
        assert_eq!(row[0].trailing, 8);
    }

    #[test]
    fn test_space_indent_kept_verbatim() {
        let row = split_line("    struct D     x;");
        assert_eq!(row.len(), 2);
        assert_eq!(row[0].text, "    struct D");
        assert_eq!(row[0].trailing, 5);
    }

    #[test]
    fn test_blank_line_is_one_empty_cell() {
        let row = split_line("");
        assert_eq!(row.len(), 1);
        assert_eq!(row[0].text, "");
    }

    #[test]
    fn test_whitespace_only_line_is_one_empty_cell() {
        let row = split_line("    ");
        assert_eq!(row.len(), 1);
        assert_eq!(row[0].text, "");
    }

    #[test]
    fn test_single_trailing_space_stays_in_text() {
        let row = split_line("a; ");
        assert_eq!(row.len(), 1);
        assert_eq!(row[0].text, "a; ");
    }

    #[test]
    fn test_trailing_delimiter_leaves_no_empty_cell() {
        let row = split_line("a;   ");
        assert_eq!(row.len(), 1);
        assert_eq!(row[0].text, "a;");
        // Recorded but never emitted, since the cell is the row's last
        assert_eq!(row[0].trailing, 3);
    }

    #[test]
    fn test_trailing_tab_delimiter() {
        let row = split_line("a;\t");
        assert_eq!(row.len(), 1);
        assert_eq!(row[0].raw, RawGap::Tabbed);
    }

    #[test]
    fn test_carriage_return_is_tab_class() {
        let row = split_line("a\rb");
        assert_eq!(row.len(), 2);
        assert_eq!(row[0].raw, RawGap::Tabbed);
        assert_eq!(row[1].text, "b");
    }

    #[test]
    fn test_mixed_delimiters() {
        let row = split_line("int        a;\t// field 1    ");
        assert_eq!(row.len(), 3);
        assert_eq!(row[0].text, "int");
        assert_eq!(row[0].raw, RawGap::Spaces(8));
        assert_eq!(row[1].text, "a;");
        assert_eq!(row[1].raw, RawGap::Tabbed);
        assert_eq!(row[2].text, "// field 1");
        assert_eq!(row[2].raw, RawGap::Spaces(4));
    }

    #[test]
    fn test_multiple_words_in_one_cell() {
        let row = split_line("const char*    y;   // field 2");
        assert_eq!(row.len(), 3);
        assert_eq!(row[0].text, "const char*");
        assert_eq!(row[1].text, "y;");
        assert_eq!(row[2].text, "// field 2");
    }

    #[test]
    fn test_unicode_text_preserved() {
        let row = split_line("naïve  entry");
        assert_eq!(row.len(), 2);
        assert_eq!(row[0].text, "naïve");
        assert_eq!(row[0].text_width(), 5);
    }
}
