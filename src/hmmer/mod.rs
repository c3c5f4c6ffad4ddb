//! Parsers for HMMER search output.
//!
//! The result tables this crate explores come out of phmmer/hmmsearch
//! runs. This module turns the two relevant text artifacts into usable
//! data: the `--domtblout` domain table becomes a [`ProteinTable`], and the
//! human-readable alignment blocks yield per-domain identity and
//! similarity scores that can be joined back onto a table.
//!
//! [`ProteinTable`]: crate::table::ProteinTable

pub mod alignment;
pub mod domtbl;

pub use alignment::{
    attach_similarity, parse_alignments, read_alignments, AlignmentKey, AlignmentStats,
};
pub use domtbl::{parse_domtbl, read_domtbl};

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
