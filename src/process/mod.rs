//! Input processing and the reflow pipeline.
//!
//! The pipeline runs three stages over one fully buffered pass:
//!
//! **Split** — each input line becomes a row of cells per the column
//! boundary rule.
//!
//! **Resolve** — per column index, contiguous blocks of rows with enough
//! columns are padded to the block's widest member plus the gap.
//!
//! **Render** — the table is serialized back to bytes, or the run reports
//! [`Outcome::Unchanged`] and writes nothing.
//!
//! The main entry point is [`reflow`] which processes a buffered reader
//! and writes reflowed output to any `Write` implementation.

pub mod pipeline;

pub use pipeline::{reflow, Outcome};
