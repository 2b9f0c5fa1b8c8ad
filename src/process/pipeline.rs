//! The reflow pipeline: split, resolve, render.
//!
//! The entire input is buffered into a [`Table`] before any output is
//! produced: a later row can widen a block, retroactively changing the
//! trailing width of earlier rows, so per-line streaming is not possible.
//! Once widths are resolved, change detection decides between serializing
//! the table and reporting [`Outcome::Unchanged`] without writing a byte.

use std::io::{BufRead, Write};

use anyhow::Context;

use crate::config::Config;
use crate::format::{align, differs_from_source, split_line, write_table, Table};
use crate::Result;

/// What a successful reflow produced.
///
/// `Unchanged` is a distinct success, not an error: the output would carry
/// the same spacing the input already has, so the caller should skip any
/// destination write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Spacing changed; the reflowed text was written to the output.
    Reflowed,
    /// The input is already aligned; nothing was written.
    Unchanged,
}

/// Reflow `input` into `output`.
///
/// Reads the whole input, re-aligns its columns, and either writes the
/// result (returning [`Outcome::Reflowed`]) or writes nothing (returning
/// [`Outcome::Unchanged`]). Read and write failures propagate immediately;
/// there are no partial writes on the unchanged path and no retries.
pub fn reflow<R: BufRead, W: Write>(input: R, output: &mut W, config: &Config) -> Result<Outcome> {
    let mut table = Table::new();
    for line in input.lines() {
        let line = line.context("failed to read input")?;
        table.push(split_line(&line));
    }

    align(&mut table, config.gap);

    if !differs_from_source(&table) {
        return Ok(Outcome::Unchanged);
    }

    write_table(&table, output).context("failed to write output")?;
    Ok(Outcome::Reflowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = reflow(Cursor::new(input), &mut out, &Config::default()).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_reflow_aligns_block() {
        let (outcome, out) = run("int        a;  // one\nint  b;        // two\n");
        assert_eq!(outcome, Outcome::Reflowed);
        assert_eq!(out, "int  a;  // one\nint  b;  // two\n");
    }

    #[test]
    fn test_reflow_eliminates_delimiter_tabs() {
        let (outcome, out) = run("int\ta;\n");
        assert_eq!(outcome, Outcome::Reflowed);
        assert_eq!(out, "int  a;\n");
        assert!(!out.contains('\t'));
    }

    #[test]
    fn test_already_aligned_is_unchanged() {
        let (outcome, out) = run("int  a;  // one\nint  b;  // two\n");
        assert_eq!(outcome, Outcome::Unchanged);
        assert!(out.is_empty());
    }

    #[test]
    fn test_single_space_line_is_unchanged() {
        let (outcome, out) = run("char* c;\n");
        assert_eq!(outcome, Outcome::Unchanged);
        assert!(out.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let (first, out) = run("a\tbb\tc\naaa\tb\tcc\n");
        assert_eq!(first, Outcome::Reflowed);
        let (second, rest) = run(&out);
        assert_eq!(second, Outcome::Unchanged);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_short_row_splits_blocks() {
        let (outcome, out) = run("a      b\n---\nlonger      b\n");
        assert_eq!(outcome, Outcome::Reflowed);
        // The rows around the separator align independently.
        assert_eq!(out, "a  b\n---\nlonger  b\n");
    }

    #[test]
    fn test_custom_gap() {
        let config = Config { gap: 4 };
        let mut out = Vec::new();
        let outcome = reflow(Cursor::new("ab\tx\n"), &mut out, &config).unwrap();
        assert_eq!(outcome, Outcome::Reflowed);
        assert_eq!(out, b"ab    x\n");
    }

    #[test]
    fn test_unicode_widths_align_by_chars() {
        let (outcome, out) = run("é\tx\nab\ty\n");
        assert_eq!(outcome, Outcome::Reflowed);
        // "é" is one char wide, "ab" two; both land on width 2 + gap
        assert_eq!(out, "é   x\nab  y\n");
    }

    #[test]
    fn test_empty_input_is_unchanged() {
        let (outcome, out) = run("");
        assert_eq!(outcome, Outcome::Unchanged);
        assert!(out.is_empty());
    }
}
