//! Column schema and cell values for protein result tables.
//!
//! Every column a result table can carry is declared here together with its
//! kind, so filtering and serialization never have to sniff types from the
//! data. Headers outside the registry are tolerated and treated as plain
//! text.

use std::cmp::Ordering;

use indexmap::IndexMap;
use log::debug;
use thiserror::Error;

/// Errors raised by table operations.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("column '{column}' not in table. Choose one of: {}", .available.join(", "))]
    UnknownColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("column '{column}' is not numeric")]
    NotNumeric { column: String },

    #[error("cannot sort by nested column '{column}'")]
    UnsortableColumn { column: String },

    #[error("column '{column}' does not hold {expected} values")]
    WrongKind {
        column: String,
        expected: &'static str,
    },

    #[error("row {row} has {found} values, expected {expected}")]
    RowWidth {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("row {row}: value for column '{column}' does not fit its {kind:?} kind")]
    KindMismatch {
        row: usize,
        column: String,
        kind: ColumnKind,
    },
}

/// The declared kind of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Whole-number scalar, e.g. `tlen` or `ndom`.
    Int,
    /// Floating-point scalar, e.g. `e-value` or `coverage_hit`.
    Float,
    /// Plain string scalar, e.g. `target_name`.
    Text,
    /// Dash-joined domain accessions, matched by case-insensitive substring.
    Architecture,
    /// Nested list of biome ids, matched through the biome hierarchy.
    Biomes,
    /// Nested list of strings, e.g. `assemblies` or `truncation`.
    TextList,
    /// Nested list of booleans, e.g. `complete`.
    BoolList,
}

impl ColumnKind {
    /// The declared kind of a known column name, or `None` for headers
    /// outside the registry.
    pub fn for_column(name: &str) -> Option<ColumnKind> {
        use ColumnKind::*;
        let kind = match name {
            "target_name" | "target_accession" | "query_name" | "query_accession"
            | "description" => Text,
            "pfam_architecture" => Architecture,
            "tlen" | "qlen" | "ndom" | "ndom_of" | "hmm_from" | "hmm_to" | "ali_from"
            | "ali_to" | "env_from" | "env_to" => Int,
            "e-value" | "score" | "bias" | "c-value" | "i-value" | "dom_score" | "dom_bias"
            | "acc" | "coverage_hit" | "coverage_query" | "similarity" | "identity" => Float,
            "biomes" => Biomes,
            "assemblies" | "truncation" => TextList,
            "complete" => BoolList,
            _ => return None,
        };
        Some(kind)
    }

    /// True for `Int` and `Float` columns.
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Int | ColumnKind::Float)
    }

    /// True for the nested list kinds.
    pub fn is_nested(self) -> bool {
        matches!(
            self,
            ColumnKind::Biomes | ColumnKind::TextList | ColumnKind::BoolList
        )
    }
}

/// A single table cell.
///
/// Nested cells always hold a list, possibly empty; a missing nested value
/// is the empty list, never a null.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Ids(Vec<u32>),
    Texts(Vec<String>),
    Bools(Vec<bool>),
}

impl Value {
    /// Numeric view of the cell, for `Int` and `Float` values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// String view of the cell, for `Text` values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The id list of a nested id cell, empty for every other kind.
    pub fn ids(&self) -> &[u32] {
        match self {
            Value::Ids(v) => v,
            _ => &[],
        }
    }

    /// The string list of a nested text cell, empty for every other kind.
    pub fn texts(&self) -> &[String] {
        match self {
            Value::Texts(v) => v,
            _ => &[],
        }
    }

    /// The boolean list of a nested bool cell, empty for every other kind.
    pub fn bools(&self) -> &[bool] {
        match self {
            Value::Bools(v) => v,
            _ => &[],
        }
    }

    // A `Text` value fits any kind: an unparsable cell is kept as raw text
    // and simply never matches typed predicates.
    pub(crate) fn fits(&self, kind: ColumnKind) -> bool {
        matches!(
            (self, kind),
            (Value::Text(_), _)
                | (Value::Int(_), ColumnKind::Int)
                | (Value::Int(_), ColumnKind::Float)
                | (Value::Float(_), ColumnKind::Float)
                | (Value::Ids(_), ColumnKind::Biomes)
                | (Value::Texts(_), ColumnKind::TextList)
                | (Value::Bools(_), ColumnKind::BoolList)
        )
    }

    // Equality with numeric cells compared as f64, so Int(5) matches
    // Float(5.0).
    pub(crate) fn loose_eq(&self, other: &Value) -> bool {
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => self == other,
        }
    }

    // Total order used by sort: numerics together, then cells of unlike
    // kinds by kind rank, so tolerated raw-text cells land after parsed
    // numbers deterministically.
    pub(crate) fn sort_cmp(&self, other: &Value) -> Ordering {
        use Value::*;
        match (self, other) {
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Int(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Int(b)) => a.total_cmp(&(*b as f64)),
            (Text(a), Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Int(_) | Value::Float(_) => 0,
            Value::Text(_) => 1,
            Value::Ids(_) => 2,
            Value::Texts(_) => 3,
            Value::Bools(_) => 4,
        }
    }
}

/// An ordered set of named, kind-declared columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: IndexMap<String, ColumnKind>,
}

impl Schema {
    /// Builds a schema from file headers, falling back to `Text` for
    /// headers outside the registry.
    pub fn from_headers<I, S>(headers: I) -> Schema
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = headers
            .into_iter()
            .map(|header| {
                let name = header.into();
                let kind = match ColumnKind::for_column(&name) {
                    Some(kind) => kind,
                    None => {
                        debug!("unknown column '{}' treated as text", name);
                        ColumnKind::Text
                    }
                };
                (name, kind)
            })
            .collect();
        Schema { columns }
    }

    /// Builds a schema from explicit name/kind pairs.
    pub fn from_columns<I, S>(columns: I) -> Schema
    where
        I: IntoIterator<Item = (S, ColumnKind)>,
        S: Into<String>,
    {
        Schema {
            columns: columns
                .into_iter()
                .map(|(name, kind)| (name.into(), kind))
                .collect(),
        }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when the schema declares no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of a column, if declared.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.get_index_of(name)
    }

    /// Kind of a column, if declared.
    pub fn kind(&self, name: &str) -> Option<ColumnKind> {
        self.columns.get(name).copied()
    }

    /// Name of the column at `index`.
    pub fn name_at(&self, index: usize) -> &str {
        let (name, _) = self.columns.get_index(index).expect("column index in range");
        name
    }

    /// Kind of the column at `index`.
    pub fn kind_at(&self, index: usize) -> ColumnKind {
        let (_, kind) = self.columns.get_index(index).expect("column index in range");
        *kind
    }

    /// Column names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Column names in declaration order, owned. Error messages list these.
    pub fn name_list(&self) -> Vec<String> {
        self.columns.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_declares_expected_kinds() {
        assert_eq!(ColumnKind::for_column("target_name"), Some(ColumnKind::Text));
        assert_eq!(ColumnKind::for_column("e-value"), Some(ColumnKind::Float));
        assert_eq!(ColumnKind::for_column("ndom"), Some(ColumnKind::Int));
        assert_eq!(ColumnKind::for_column("biomes"), Some(ColumnKind::Biomes));
        assert_eq!(
            ColumnKind::for_column("truncation"),
            Some(ColumnKind::TextList)
        );
        assert_eq!(
            ColumnKind::for_column("complete"),
            Some(ColumnKind::BoolList)
        );
        assert_eq!(
            ColumnKind::for_column("pfam_architecture"),
            Some(ColumnKind::Architecture)
        );
        assert_eq!(ColumnKind::for_column("no_such_column"), None);
    }

    #[test]
    fn test_unknown_headers_fall_back_to_text() {
        let schema = Schema::from_headers(["target_name", "my_annotation"]);
        assert_eq!(schema.kind("target_name"), Some(ColumnKind::Text));
        assert_eq!(schema.kind("my_annotation"), Some(ColumnKind::Text));
        assert_eq!(schema.index_of("my_annotation"), Some(1));
        assert_eq!(schema.index_of("absent"), None);
    }

    #[test]
    fn test_schema_preserves_header_order() {
        let schema = Schema::from_headers(["b", "a", "c"]);
        let names: Vec<&str> = schema.names().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(schema.name_at(1), "a");
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Int(7).as_f64(), Some(7.0));
        assert_eq!(Value::Float(0.5).as_f64(), Some(0.5));
        assert_eq!(Value::Text("x".into()).as_f64(), None);
        assert_eq!(Value::Text("x".into()).as_str(), Some("x"));
        assert_eq!(Value::Ids(vec![1, 2]).ids(), &[1, 2]);
        assert!(Value::Int(7).ids().is_empty());
        assert_eq!(Value::Bools(vec![true]).bools(), &[true]);
    }

    #[test]
    fn test_loose_eq_compares_numerics_across_kinds() {
        assert!(Value::Int(5).loose_eq(&Value::Float(5.0)));
        assert!(!Value::Int(5).loose_eq(&Value::Float(5.5)));
        assert!(Value::Text("a".into()).loose_eq(&Value::Text("a".into())));
        assert!(!Value::Text("5".into()).loose_eq(&Value::Int(5)));
    }

    #[test]
    fn test_sort_cmp_orders_numerics_and_text() {
        assert_eq!(
            Value::Int(2).sort_cmp(&Value::Float(2.5)),
            Ordering::Less
        );
        assert_eq!(
            Value::Text("abc".into()).sort_cmp(&Value::Text("abd".into())),
            Ordering::Less
        );
        // Raw-text leftovers sort after parsed numbers.
        assert_eq!(
            Value::Float(1e10).sort_cmp(&Value::Text("broken".into())),
            Ordering::Less
        );
    }

    #[test]
    fn test_text_fits_any_kind() {
        assert!(Value::Text("raw".into()).fits(ColumnKind::Float));
        assert!(Value::Int(3).fits(ColumnKind::Float));
        assert!(!Value::Float(3.0).fits(ColumnKind::Int));
        assert!(Value::Ids(vec![]).fits(ColumnKind::Biomes));
        assert!(!Value::Ids(vec![]).fits(ColumnKind::TextList));
    }
}
