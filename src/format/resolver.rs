//! Block-width resolution: make columns line up within contiguous blocks.
//!
//! For each column index, rows are partitioned into maximal contiguous
//! runs ("blocks") of rows that have enough columns to participate. Rows
//! that fall short end the current block and take part in none at that
//! index. Within a block every row's cumulative width through the column
//! is brought to the block's widest member plus the configured gap.
//!
//! Columns are processed in strictly increasing order: column `k`'s
//! resolved trailing feeds into column `k + 1`'s width measurements.

use std::ops::Range;

use super::table::{measure_width, Table};

/// Maximal contiguous runs of rows that all have at least `num_cols`
/// columns, as index ranges into the table. A shorter row (blank line,
/// comment-only line) terminates the current run.
#[must_use]
pub fn find_blocks(table: &Table, num_cols: usize) -> Vec<Range<usize>> {
    let mut blocks = Vec::new();
    let mut block_start = 0;
    let mut block_end = 0;

    for row in 0..=table.len() {
        if row < table.len() && table[row].len() >= num_cols {
            block_end = row + 1;
        } else {
            if block_end > block_start {
                blocks.push(block_start..block_end);
            }
            block_start = row + 1;
            block_end = row + 1;
        }
    }

    blocks
}

/// Resolve trailing widths so that within every block, every row's width
/// through each shared column equals the block's widest member plus `gap`.
///
/// A single-row block is still normalized to its own width plus the gap.
/// The final cell of a row is never assigned alignment trailing: there is
/// no column after it to align.
pub fn align(table: &mut Table, gap: usize) {
    let max_cols = table.iter().map(Vec::len).max().unwrap_or(0);

    for align_col in 1..max_cols {
        for block in find_blocks(table, align_col + 1) {
            let widest = table[block.clone()]
                .iter()
                .map(|row| measure_width(&row[..align_col]))
                .max()
                .unwrap_or(0);

            for row in &mut table[block] {
                // widest is at least this row's width, so the new trailing
                // is at least the gap.
                let width = measure_width(&row[..align_col]);
                row[align_col - 1].trailing = widest + gap - width;
            }
        }
    }
}
