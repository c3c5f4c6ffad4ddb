//! Core library for exploring protein search results.
//!
//! The crate covers the steps between a finished HMMER search and an
//! interactive analysis of its hits:
//! 1. Parsing domain tables and alignment blocks (`hmmer`).
//! 2. Holding hits in a typed, ordered result table (`table`).
//! 3. Filtering by numeric range, domain architecture and biome lineage,
//!    with lineage terms expanded against a `biome::BiomeHierarchy`.
//! 4. Saving and reloading tables as delimited text with JSON-encoded
//!    nested cells.
//!
//! Every transformation returns a new table; nothing is mutated in place
//! and there is no global state.

pub mod biome;
pub mod hmmer;
pub mod table;

pub use biome::BiomeHierarchy;
pub use table::{Filter, Filters, ProteinTable, Range, TableError, Term, Value};
