//! Table serialization and change detection.
//!
//! The table is written back as cell text, `trailing` spaces after every
//! cell except a row's last, and a newline per row. Delimiter positions
//! only ever receive spaces; a tab in the input delimiter therefore always
//! counts as a change. Change detection runs before any byte is written so
//! the caller can skip the destination entirely on a no-op.

use std::io::Write;

use super::table::{RawGap, Table};

/// Pre-allocated buffer of spaces for padding.
/// Avoids allocating a new Vec for each trailing-width write.
const SPACES: &[u8; 256] = &[b' '; 256];

/// Write `count` spaces to output using the pre-allocated buffer.
fn write_spaces<W: Write>(output: &mut W, count: usize) -> std::io::Result<()> {
    if count == 0 {
        return Ok(());
    }
    if count <= SPACES.len() {
        output.write_all(&SPACES[..count])
    } else {
        output.write_all(&vec![b' '; count])
    }
}

/// Whether serializing the table would produce different spacing than the
/// input contained.
///
/// True when any delimiter contained a tab-class character (tabs are
/// always eliminated, even after a row's last cell), or when a non-last
/// cell's resolved trailing width differs from the literal space count
/// that followed it in the input.
#[must_use]
pub fn differs_from_source(table: &Table) -> bool {
    for row in table {
        for (col, cell) in row.iter().enumerate() {
            match cell.raw {
                RawGap::Tabbed => return true,
                RawGap::Spaces(count) => {
                    if col + 1 < row.len() && cell.trailing != count {
                        return true;
                    }
                }
            }
        }
    }
    false
}

/// Serialize the table: cell text, trailing spaces for non-last cells,
/// one newline per row.
pub fn write_table<W: Write>(table: &Table, output: &mut W) -> std::io::Result<()> {
    for row in table {
        for (col, cell) in row.iter().enumerate() {
            output.write_all(cell.text.as_bytes())?;
            if col + 1 < row.len() {
                write_spaces(output, cell.trailing)?;
            }
        }
        output.write_all(b"\n")?;
    }
    Ok(())
}
