//! The protein result table and its transformations.
//!
//! A `ProteinTable` holds the hits of one or more sequence searches in row
//! order, under a fixed schema. Every transformation leaves the receiver
//! untouched and returns a new table, so exploration can branch freely
//! from one loaded result.

use std::cmp::Ordering;

use itertools::Itertools;

pub mod filter;
mod io;
pub mod membership;
pub mod schema;

pub use filter::{Filter, Filters, Range, Term};
pub use membership::MembershipMatrix;
pub use schema::{ColumnKind, Schema, TableError, Value};

/// An ordered table of protein search hits with a fixed schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ProteinTable {
    pub(crate) schema: Schema,
    pub(crate) rows: Vec<Vec<Value>>,
}

/// A borrowed view of one table row with by-name access.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    schema: &'a Schema,
    values: &'a [Value],
}

impl<'a> RowView<'a> {
    /// Cell by column name, `None` when the column is not in the schema.
    pub fn get(&self, column: &str) -> Option<&'a Value> {
        self.schema.index_of(column).map(|index| &self.values[index])
    }

    /// All cells of the row in column order.
    pub fn values(&self) -> &'a [Value] {
        self.values
    }
}

impl ProteinTable {
    /// Creates an empty table with the given schema.
    pub fn new(schema: Schema) -> Self {
        ProteinTable {
            schema,
            rows: Vec::new(),
        }
    }

    /// Builds a table from rows, validating row width and value kinds
    /// against the schema.
    pub fn from_rows(schema: Schema, rows: Vec<Vec<Value>>) -> Result<Self, TableError> {
        for (rowno, row) in rows.iter().enumerate() {
            if row.len() != schema.len() {
                return Err(TableError::RowWidth {
                    row: rowno,
                    found: row.len(),
                    expected: schema.len(),
                });
            }
            for (index, value) in row.iter().enumerate() {
                if !value.fits(schema.kind_at(index)) {
                    return Err(TableError::KindMismatch {
                        row: rowno,
                        column: schema.name_at(index).to_string(),
                        kind: schema.kind_at(index),
                    });
                }
            }
        }
        Ok(ProteinTable { schema, rows })
    }

    /// The table's schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the rows in table order.
    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> {
        self.rows.iter().map(|values| RowView {
            schema: &self.schema,
            values,
        })
    }

    /// The row at `index`.
    pub fn row(&self, index: usize) -> RowView<'_> {
        RowView {
            schema: &self.schema,
            values: &self.rows[index],
        }
    }

    /// Cell by row index and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.schema.index_of(column)?;
        self.rows.get(row).map(|values| &values[index])
    }

    /// The values of one column, top to bottom.
    pub fn column(&self, column: &str) -> Result<impl Iterator<Item = &Value>, TableError> {
        let index = self.column_index(column)?;
        Ok(self.rows.iter().map(move |row| &row[index]))
    }

    pub(crate) fn column_index(&self, column: &str) -> Result<usize, TableError> {
        self.schema
            .index_of(column)
            .ok_or_else(|| TableError::UnknownColumn {
                column: column.to_string(),
                available: self.schema.name_list(),
            })
    }

    pub(crate) fn with_rows(&self, rows: Vec<Vec<Value>>) -> ProteinTable {
        ProteinTable {
            schema: self.schema.clone(),
            rows,
        }
    }

    /// Returns the table sorted by the given columns.
    ///
    /// `ascending` applies to every requested column. `target_name` and
    /// `ndom` are appended as tie-breakers, always ascending, so the rows
    /// of one hit stay together with their domains in order no matter what
    /// the caller sorts by. Nested columns cannot be sort keys.
    pub fn sort(&self, by: &[&str], ascending: bool) -> Result<ProteinTable, TableError> {
        let mut keys = Vec::with_capacity(by.len() + 2);
        for column in by {
            let index = self.column_index(column)?;
            if self.schema.kind_at(index).is_nested() {
                return Err(TableError::UnsortableColumn {
                    column: column.to_string(),
                });
            }
            keys.push((index, ascending));
        }
        for tiebreak in ["target_name", "ndom"] {
            if by.contains(&tiebreak) {
                continue;
            }
            if let Some(index) = self.schema.index_of(tiebreak) {
                keys.push((index, true));
            }
        }
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| {
            for &(index, ascending) in &keys {
                let ord = a[index].sort_cmp(&b[index]);
                let ord = if ascending { ord } else { ord.reverse() };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            Ordering::Equal
        });
        Ok(self.with_rows(rows))
    }

    /// Keeps the rows whose `column` value lies inside `range`.
    ///
    /// Unlike a `pick` on an unknown column, an unknown or non-numeric
    /// column here is an error.
    pub fn threshold(&self, column: &str, range: Range) -> Result<ProteinTable, TableError> {
        let index = self.column_index(column)?;
        if !self.schema.kind_at(index).is_numeric() {
            return Err(TableError::NotNumeric {
                column: column.to_string(),
            });
        }
        let rows = self
            .rows
            .iter()
            .filter(|row| row[index].as_f64().map_or(false, |v| range.contains(v)))
            .cloned()
            .collect();
        Ok(self.with_rows(rows))
    }

    /// Keeps the rows whose `column` cell equals `value`, with numerics
    /// compared across `Int`/`Float`.
    pub fn match_value(&self, column: &str, value: &Value) -> Result<ProteinTable, TableError> {
        let index = self.column_index(column)?;
        let rows = self
            .rows
            .iter()
            .filter(|row| row[index].loose_eq(value))
            .cloned()
            .collect();
        Ok(self.with_rows(rows))
    }

    /// Distinct target names in first-appearance order.
    pub fn unique_hits(&self) -> Result<Vec<String>, TableError> {
        let index = self.column_index("target_name")?;
        Ok(self
            .rows
            .iter()
            .filter_map(|row| row[index].as_str())
            .unique()
            .map(str::to_string)
            .collect())
    }

    /// Number of distinct target names.
    pub fn n_unique_hits(&self) -> Result<usize, TableError> {
        Ok(self.unique_hits()?.len())
    }

    /// All ids of a nested id column, concatenated in row order.
    pub fn flatten_ids(&self, column: &str) -> Result<Vec<u32>, TableError> {
        let index = self.column_index(column)?;
        if self.schema.kind_at(index) != ColumnKind::Biomes {
            return Err(TableError::WrongKind {
                column: column.to_string(),
                expected: "nested id",
            });
        }
        Ok(self
            .rows
            .iter()
            .flat_map(|row| row[index].ids().iter().copied())
            .collect())
    }

    /// All strings of a nested text column, concatenated in row order.
    pub fn flatten_texts(&self, column: &str) -> Result<Vec<String>, TableError> {
        let index = self.column_index(column)?;
        if self.schema.kind_at(index) != ColumnKind::TextList {
            return Err(TableError::WrongKind {
                column: column.to_string(),
                expected: "nested text",
            });
        }
        Ok(self
            .rows
            .iter()
            .flat_map(|row| row[index].texts().iter().cloned())
            .collect())
    }

    /// Distinct ids of a nested id column in first-appearance order.
    pub fn unique_ids(&self, column: &str) -> Result<Vec<u32>, TableError> {
        Ok(self.flatten_ids(column)?.into_iter().unique().collect())
    }

    /// Distinct strings of a nested text column in first-appearance order.
    pub fn unique_texts(&self, column: &str) -> Result<Vec<String>, TableError> {
        Ok(self.flatten_texts(column)?.into_iter().unique().collect())
    }

    /// Number of distinct leaf values in any nested column.
    pub fn n_unique_nested(&self, column: &str) -> Result<usize, TableError> {
        let index = self.column_index(column)?;
        let count = match self.schema.kind_at(index) {
            ColumnKind::Biomes => self
                .rows
                .iter()
                .flat_map(|row| row[index].ids().iter().copied())
                .unique()
                .count(),
            ColumnKind::TextList => self
                .rows
                .iter()
                .flat_map(|row| row[index].texts())
                .unique()
                .count(),
            ColumnKind::BoolList => self
                .rows
                .iter()
                .flat_map(|row| row[index].bools().iter().copied())
                .unique()
                .count(),
            _ => {
                return Err(TableError::WrongKind {
                    column: column.to_string(),
                    expected: "nested",
                })
            }
        };
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> Schema {
        Schema::from_headers([
            "target_name",
            "query_name",
            "tlen",
            "e-value",
            "score",
            "ndom",
            "biomes",
            "assemblies",
            "complete",
        ])
    }

    fn row(
        target: &str,
        query: &str,
        tlen: i64,
        evalue: f64,
        score: f64,
        ndom: i64,
        biomes: &[u32],
        assemblies: &[&str],
        complete: &[bool],
    ) -> Vec<Value> {
        vec![
            Value::Text(target.to_string()),
            Value::Text(query.to_string()),
            Value::Int(tlen),
            Value::Float(evalue),
            Value::Float(score),
            Value::Int(ndom),
            Value::Ids(biomes.to_vec()),
            Value::Texts(assemblies.iter().map(|s| s.to_string()).collect()),
            Value::Bools(complete.to_vec()),
        ]
    }

    fn sample_table() -> ProteinTable {
        ProteinTable::from_rows(
            sample_schema(),
            vec![
                row(
                    "MGYP000420419373",
                    "query_1",
                    292,
                    7.2e-77,
                    245.1,
                    1,
                    &[171, 353],
                    &["ERZ1744012"],
                    &[true],
                ),
                row(
                    "MGYP000573539843",
                    "query_1",
                    314,
                    1.8e-49,
                    155.8,
                    2,
                    &[4],
                    &["ERZ1744017"],
                    &[false],
                ),
                row(
                    "MGYP000573539843",
                    "query_1",
                    314,
                    1.8e-49,
                    155.8,
                    1,
                    &[4],
                    &["ERZ1744017"],
                    &[false],
                ),
                row(
                    "MGYP000062928162",
                    "query_2",
                    335,
                    6.6e-16,
                    45.9,
                    1,
                    &[62, 106],
                    &["ERZ1744012", "ERZ1744017"],
                    &[true, false],
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_from_rows_rejects_wrong_width() {
        let err = ProteinTable::from_rows(sample_schema(), vec![vec![Value::Int(1)]]).unwrap_err();
        assert!(matches!(
            err,
            TableError::RowWidth {
                row: 0,
                found: 1,
                expected: 9
            }
        ));
    }

    #[test]
    fn test_from_rows_rejects_kind_mismatch() {
        let mut bad = sample_table().rows[0].clone();
        bad[6] = Value::Texts(vec!["not-ids".to_string()]);
        let err = ProteinTable::from_rows(sample_schema(), vec![bad]).unwrap_err();
        match err {
            TableError::KindMismatch { row, column, kind } => {
                assert_eq!(row, 0);
                assert_eq!(column, "biomes");
                assert_eq!(kind, ColumnKind::Biomes);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_sort_appends_tiebreakers() {
        let table = sample_table();
        let sorted = table.sort(&["score"], false).unwrap();
        let targets: Vec<&Value> = sorted.column("target_name").unwrap().collect();
        assert_eq!(targets[0], &Value::Text("MGYP000420419373".to_string()));
        // Equal-score rows of one hit come out with domains ascending even
        // though the primary key is descending.
        assert_eq!(
            sorted.cell(1, "ndom"),
            Some(&Value::Int(1)),
            "tie-break must order domains ascending"
        );
        assert_eq!(sorted.cell(2, "ndom"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_sort_does_not_mutate_the_receiver() {
        let table = sample_table();
        let before = table.clone();
        let _sorted = table.sort(&["e-value"], true).unwrap();
        assert_eq!(table, before);
    }

    #[test]
    fn test_sort_unknown_column_names_the_valid_ones() {
        let err = sample_table().sort(&["no_such"], true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'no_such'"));
        assert!(message.contains("Choose one of"));
        assert!(message.contains("target_name"));
    }

    #[test]
    fn test_sort_rejects_nested_columns() {
        let err = sample_table().sort(&["biomes"], true).unwrap_err();
        assert!(matches!(err, TableError::UnsortableColumn { .. }));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let table = sample_table();
        let kept = table.threshold("score", Range::between(45.9, 155.8)).unwrap();
        assert_eq!(kept.len(), 3);
        let kept = table.threshold("score", Range::at_least(200.0)).unwrap();
        assert_eq!(kept.len(), 1);
        // The receiver keeps all of its rows.
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_threshold_errors_loudly() {
        let table = sample_table();
        assert!(matches!(
            table.threshold("absent", Range::at_least(1.0)),
            Err(TableError::UnknownColumn { .. })
        ));
        assert!(matches!(
            table.threshold("target_name", Range::at_least(1.0)),
            Err(TableError::NotNumeric { .. })
        ));
    }

    #[test]
    fn test_match_value_compares_numerics_across_kinds() {
        let table = sample_table();
        let matched = table.match_value("tlen", &Value::Float(314.0)).unwrap();
        assert_eq!(matched.len(), 2);
        let matched = table
            .match_value("target_name", &Value::Text("MGYP000062928162".to_string()))
            .unwrap();
        assert_eq!(matched.len(), 1);
        assert!(matches!(
            table.match_value("absent", &Value::Int(0)),
            Err(TableError::UnknownColumn { .. })
        ));
    }

    #[test]
    fn test_unique_hits_keeps_first_appearance_order() {
        let table = sample_table();
        assert_eq!(
            table.unique_hits().unwrap(),
            vec![
                "MGYP000420419373".to_string(),
                "MGYP000573539843".to_string(),
                "MGYP000062928162".to_string()
            ]
        );
        assert_eq!(table.n_unique_hits().unwrap(), 3);
    }

    #[test]
    fn test_nested_column_helpers() {
        let table = sample_table();
        assert_eq!(table.flatten_ids("biomes").unwrap(), vec![171, 353, 4, 4, 62, 106]);
        assert_eq!(table.unique_ids("biomes").unwrap(), vec![171, 353, 4, 62, 106]);
        assert_eq!(table.n_unique_nested("biomes").unwrap(), 5);
        assert_eq!(
            table.unique_texts("assemblies").unwrap(),
            vec!["ERZ1744012".to_string(), "ERZ1744017".to_string()]
        );
        assert_eq!(table.n_unique_nested("complete").unwrap(), 2);
        assert!(matches!(
            table.flatten_ids("assemblies"),
            Err(TableError::WrongKind { .. })
        ));
        assert!(matches!(
            table.n_unique_nested("score"),
            Err(TableError::WrongKind { .. })
        ));
    }

    #[test]
    fn test_row_views_and_cells() {
        let table = sample_table();
        let first = table.row(0);
        assert_eq!(first.get("tlen"), Some(&Value::Int(292)));
        assert_eq!(first.get("absent"), None);
        assert_eq!(table.cell(3, "query_name"), Some(&Value::Text("query_2".to_string())));
        assert_eq!(table.cell(99, "query_name"), None);
        assert_eq!(table.rows().count(), 4);
    }
}
