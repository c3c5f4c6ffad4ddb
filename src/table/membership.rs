//! Query-membership sets over search hits.
//!
//! When several queries run against the same database, each target is hit
//! by some subset of them. The membership matrix makes those subsets
//! explicit: one row per target, one column per query, a binary set id per
//! target such as `"101"`, and a readable `∩`-joined name for every set
//! that occurs. Upset-style summaries and per-set sub-tables build on it.

use std::collections::HashSet;

use indexmap::IndexMap;
use ndarray::Array2;

use crate::table::schema::TableError;
use crate::table::ProteinTable;

/// The target x query incidence matrix of a result table.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipMatrix {
    // Both axes sorted lexicographically, so set ids are stable across
    // row orderings of the source table.
    targets: Vec<String>,
    queries: Vec<String>,
    matrix: Array2<u8>,
}

impl MembershipMatrix {
    /// Builds the incidence matrix from a table's target/query pairs.
    pub fn from_table(table: &ProteinTable) -> Result<MembershipMatrix, TableError> {
        let target_index = table.column_index("target_name")?;
        let query_index = table.column_index("query_name")?;

        let mut targets: Vec<String> = table
            .rows
            .iter()
            .filter_map(|row| row[target_index].as_str())
            .map(str::to_string)
            .collect();
        targets.sort();
        targets.dedup();
        let mut queries: Vec<String> = table
            .rows
            .iter()
            .filter_map(|row| row[query_index].as_str())
            .map(str::to_string)
            .collect();
        queries.sort();
        queries.dedup();

        let mut matrix = Array2::zeros((targets.len(), queries.len()));
        for row in &table.rows {
            let (Some(target), Some(query)) =
                (row[target_index].as_str(), row[query_index].as_str())
            else {
                continue;
            };
            let t = targets.binary_search_by(|probe| probe.as_str().cmp(target));
            let q = queries.binary_search_by(|probe| probe.as_str().cmp(query));
            if let (Ok(t), Ok(q)) = (t, q) {
                matrix[[t, q]] = 1;
            }
        }
        Ok(MembershipMatrix {
            targets,
            queries,
            matrix,
        })
    }

    /// Target names, sorted.
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Query names, sorted. Set-id digits follow this order.
    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    /// The binary membership string of one target, e.g. `"101"`.
    pub fn set_id(&self, target: &str) -> Option<String> {
        let row = self
            .targets
            .binary_search_by(|probe| probe.as_str().cmp(target))
            .ok()?;
        Some(self.row_id(row))
    }

    /// Maps each occurring set's readable name (`"q1∩q3"`) to its set id.
    pub fn set_mapping(&self) -> IndexMap<String, String> {
        let mut mapping = IndexMap::new();
        for row in 0..self.targets.len() {
            mapping
                .entry(self.readable_name(row))
                .or_insert_with(|| self.row_id(row));
        }
        mapping
    }

    /// The targets whose membership equals `set_id`.
    pub fn targets_with_set(&self, set_id: &str) -> Vec<&str> {
        (0..self.targets.len())
            .filter(|&row| self.row_id(row) == set_id)
            .map(|row| self.targets[row].as_str())
            .collect()
    }

    fn row_id(&self, row: usize) -> String {
        self.matrix
            .row(row)
            .iter()
            .map(|&hit| if hit > 0 { '1' } else { '0' })
            .collect()
    }

    fn readable_name(&self, row: usize) -> String {
        let hit_queries: Vec<&str> = self
            .matrix
            .row(row)
            .iter()
            .zip(&self.queries)
            .filter(|&(&hit, _)| hit > 0)
            .map(|(_, query)| query.as_str())
            .collect();
        hit_queries.join("∩")
    }
}

impl ProteinTable {
    /// The sub-table of targets hit by exactly the named query combination.
    ///
    /// `name` may be a readable combination such as `"query_1∩query_2"` or
    /// a raw set id such as `"110"`. An unknown name yields an empty table.
    pub fn get_set(&self, name: &str) -> Result<ProteinTable, TableError> {
        let matrix = MembershipMatrix::from_table(self)?;
        let set_id = matrix
            .set_mapping()
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string());
        let wanted: HashSet<&str> = matrix.targets_with_set(&set_id).into_iter().collect();
        let target_index = self.column_index("target_name")?;
        let rows = self
            .rows
            .iter()
            .filter(|row| {
                row[target_index]
                    .as_str()
                    .map_or(false, |target| wanted.contains(target))
            })
            .cloned()
            .collect();
        Ok(self.with_rows(rows))
    }
}
