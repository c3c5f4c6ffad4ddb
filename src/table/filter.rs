//! Declarative row filters and the `pick` engine.
//!
//! A `Filters` value maps column names to conditions: an inclusive numeric
//! window, or a list of terms. All conditions are AND-composed, so the
//! picked rows do not depend on the order the conditions were given in.
//! The same structure deserializes from the JSON documents result-browser
//! UIs emit, where a `null` condition stands for an inactive control.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, warn};
use serde::Deserialize;

use crate::biome::BiomeHierarchy;
use crate::table::schema::{ColumnKind, Schema, TableError, Value};
use crate::table::ProteinTable;

/// An inclusive numeric window. A missing bound is open; an all-open range
/// matches every numeric value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Range {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Range {
    /// A window open at the top.
    pub fn at_least(min: f64) -> Range {
        Range {
            min: Some(min),
            max: None,
        }
    }

    /// A window open at the bottom.
    pub fn at_most(max: f64) -> Range {
        Range {
            min: None,
            max: Some(max),
        }
    }

    /// A window closed on both ends.
    pub fn between(min: f64, max: f64) -> Range {
        Range {
            min: Some(min),
            max: Some(max),
        }
    }

    /// True when `value` lies inside the window, bounds included.
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// One value of a term-list condition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Term {
    Bool(bool),
    Id(u32),
    Num(f64),
    Text(String),
}

impl From<bool> for Term {
    fn from(value: bool) -> Term {
        Term::Bool(value)
    }
}

impl From<u32> for Term {
    fn from(value: u32) -> Term {
        Term::Id(value)
    }
}

impl From<f64> for Term {
    fn from(value: f64) -> Term {
        Term::Num(value)
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Term {
        Term::Text(value.to_string())
    }
}

impl From<String> for Term {
    fn from(value: String) -> Term {
        Term::Text(value)
    }
}

/// One column's condition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Filter {
    Range(Range),
    Terms(Vec<Term>),
}

/// Column-keyed conditions, AND-composed by [`ProteinTable::pick`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Filters {
    conditions: IndexMap<String, Option<Filter>>,
}

impl Filters {
    /// An empty condition set; picking with it keeps every row.
    pub fn new() -> Filters {
        Filters::default()
    }

    /// Parses a JSON filter document, e.g.
    /// `{"e-value": {"max": 1e-10}, "biomes": [171], "score": null}`.
    pub fn from_json(text: &str) -> serde_json::Result<Filters> {
        serde_json::from_str(text)
    }

    /// Adds an inclusive numeric window on `column`.
    pub fn with_range(mut self, column: impl Into<String>, range: Range) -> Filters {
        self.conditions.insert(column.into(), Some(Filter::Range(range)));
        self
    }

    /// Adds a term-list condition on `column`.
    pub fn with_terms<T>(mut self, column: impl Into<String>, terms: impl IntoIterator<Item = T>) -> Filters
    where
        T: Into<Term>,
    {
        let terms = terms.into_iter().map(Into::into).collect();
        self.conditions.insert(column.into(), Some(Filter::Terms(terms)));
        self
    }

    /// Number of conditions, inactive ones included.
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// True when no conditions are present.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = (&str, Option<&Filter>)> {
        self.conditions
            .iter()
            .map(|(column, condition)| (column.as_str(), condition.as_ref()))
    }
}

// A condition compiled against a concrete schema: column resolved to its
// index, terms expanded to the sets the row scan tests against.
enum Predicate {
    Window { column: usize, range: Range },
    BiomeSet { column: usize, wanted: HashSet<u32> },
    TextSet { column: usize, wanted: HashSet<String> },
    BoolSet { column: usize, wanted: Vec<bool> },
    Substring { column: usize, needles: Vec<String> },
    Equals { column: usize, wanted: Vec<Value> },
}

impl Predicate {
    fn matches(&self, row: &[Value]) -> bool {
        match self {
            Predicate::Window { column, range } => {
                row[*column].as_f64().map_or(false, |v| range.contains(v))
            }
            Predicate::BiomeSet { column, wanted } => {
                row[*column].ids().iter().any(|id| wanted.contains(id))
            }
            Predicate::TextSet { column, wanted } => {
                row[*column].texts().iter().any(|s| wanted.contains(s))
            }
            Predicate::BoolSet { column, wanted } => {
                row[*column].bools().iter().any(|b| wanted.contains(b))
            }
            Predicate::Substring { column, needles } => row[*column].as_str().map_or(false, |s| {
                let haystack = s.to_lowercase();
                needles.iter().any(|needle| haystack.contains(needle))
            }),
            Predicate::Equals { column, wanted } => {
                wanted.iter().any(|value| value.loose_eq(&row[*column]))
            }
        }
    }
}

fn compile(
    schema: &Schema,
    filters: &Filters,
    biomes: &BiomeHierarchy,
) -> Result<Vec<Predicate>, TableError> {
    let mut predicates = Vec::new();
    for (column, condition) in filters.iter() {
        let Some(filter) = condition else {
            debug!("filter on '{}' is inactive, skipping", column);
            continue;
        };
        let Some(index) = schema.index_of(column) else {
            debug!("filter column '{}' not in table, skipping", column);
            continue;
        };
        let kind = schema.kind_at(index);
        match filter {
            Filter::Range(range) => {
                if !kind.is_numeric() {
                    return Err(TableError::NotNumeric {
                        column: column.to_string(),
                    });
                }
                predicates.push(Predicate::Window {
                    column: index,
                    range: *range,
                });
            }
            Filter::Terms(terms) => {
                predicates.push(compile_terms(column, index, kind, terms, biomes));
            }
        }
    }
    Ok(predicates)
}

fn compile_terms(
    name: &str,
    column: usize,
    kind: ColumnKind,
    terms: &[Term],
    biomes: &BiomeHierarchy,
) -> Predicate {
    match kind {
        ColumnKind::Biomes => {
            // A biome term covers the named node and everything below it:
            // filtering for a coarse category must match rows tagged with
            // finer lineages only.
            let mut ids = Vec::new();
            let mut wanted = HashSet::new();
            for term in terms {
                match term {
                    Term::Id(id) => ids.push(*id),
                    Term::Text(path) => wanted.extend(biomes.ids_matching_prefix(path)),
                    other => warn!("ignoring biome term {:?} on '{}'", other, name),
                }
            }
            wanted.extend(biomes.union_descendants(&ids));
            Predicate::BiomeSet { column, wanted }
        }
        ColumnKind::TextList => {
            let mut wanted = HashSet::new();
            for term in terms {
                match term {
                    Term::Text(s) => {
                        wanted.insert(s.clone());
                    }
                    other => warn!("ignoring non-string term {:?} on '{}'", other, name),
                }
            }
            Predicate::TextSet { column, wanted }
        }
        ColumnKind::BoolList => {
            let mut wanted = Vec::new();
            for term in terms {
                match term {
                    Term::Bool(b) if !wanted.contains(b) => wanted.push(*b),
                    Term::Bool(_) => {}
                    other => warn!("ignoring non-boolean term {:?} on '{}'", other, name),
                }
            }
            Predicate::BoolSet { column, wanted }
        }
        ColumnKind::Architecture => {
            let mut needles = Vec::new();
            for term in terms {
                match term {
                    Term::Text(s) => needles.push(s.to_lowercase()),
                    other => warn!("ignoring non-string term {:?} on '{}'", other, name),
                }
            }
            Predicate::Substring { column, needles }
        }
        ColumnKind::Int | ColumnKind::Float | ColumnKind::Text => {
            let mut wanted = Vec::new();
            for term in terms {
                match term {
                    Term::Bool(_) => warn!("ignoring boolean term on scalar column '{}'", name),
                    Term::Id(id) => wanted.push(Value::Int(*id as i64)),
                    Term::Num(x) => wanted.push(Value::Float(*x)),
                    Term::Text(s) => wanted.push(Value::Text(s.clone())),
                }
            }
            Predicate::Equals { column, wanted }
        }
    }
}

impl ProteinTable {
    /// Applies AND-composed column conditions and returns the matching rows
    /// as a new table.
    ///
    /// Numeric windows apply to `Int`/`Float` columns, bounds inclusive.
    /// Term lists test membership: against the hierarchy-expanded id set on
    /// the biome column, against the raw leaf values on other nested
    /// columns, by case-insensitive substring on the architecture column,
    /// and by equality on scalar columns. Conditions on columns the table
    /// does not have are skipped, so one saved filter document can serve
    /// tables with different projections.
    ///
    /// # Errors
    ///
    /// A numeric window on a non-numeric column fails with
    /// [`TableError::NotNumeric`].
    pub fn pick(
        &self,
        filters: &Filters,
        biomes: &BiomeHierarchy,
    ) -> Result<ProteinTable, TableError> {
        let predicates = compile(&self.schema, filters, biomes)?;
        let rows = self
            .rows
            .iter()
            .filter(|row| predicates.iter().all(|predicate| predicate.matches(row)))
            .cloned()
            .collect();
        Ok(self.with_rows(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::schema::Schema;

    fn sample_schema() -> Schema {
        Schema::from_headers([
            "target_name",
            "tlen",
            "e-value",
            "score",
            "pfam_architecture",
            "biomes",
            "assemblies",
            "truncation",
            "complete",
        ])
    }

    fn row(
        target: &str,
        tlen: i64,
        evalue: f64,
        score: f64,
        architecture: &str,
        biomes: &[u32],
        assemblies: &[&str],
        truncation: &[&str],
        complete: &[bool],
    ) -> Vec<Value> {
        vec![
            Value::Text(target.to_string()),
            Value::Int(tlen),
            Value::Float(evalue),
            Value::Float(score),
            Value::Text(architecture.to_string()),
            Value::Ids(biomes.to_vec()),
            Value::Texts(assemblies.iter().map(|s| s.to_string()).collect()),
            Value::Texts(truncation.iter().map(|s| s.to_string()).collect()),
            Value::Bools(complete.to_vec()),
        ]
    }

    // Biome ids refer to the builtin vocabulary: 4 = Bioreactor and 62 =
    // Wastewater under root:Engineered, 106 = Freshwater:Lentic, 133 =
    // Marine:Brackish and 171 = Marine:Sediment under root:Environmental,
    // 353 = root:Host-associated:Human.
    fn sample_table() -> ProteinTable {
        ProteinTable::from_rows(
            sample_schema(),
            vec![
                row(
                    "MGYP000420419373",
                    292,
                    7.2e-77,
                    245.1,
                    "PF00155",
                    &[171, 353],
                    &["ERZ1744012"],
                    &["00"],
                    &[true],
                ),
                row(
                    "MGYP000573539843",
                    314,
                    1.8e-49,
                    155.8,
                    "PF00155-PF00005",
                    &[4],
                    &["ERZ1744017"],
                    &["01"],
                    &[false],
                ),
                row(
                    "MGYP000062928162",
                    335,
                    6.6e-16,
                    45.9,
                    "PF13419",
                    &[62, 106],
                    &["ERZ1744012", "ERZ1744017"],
                    &["11"],
                    &[true, false],
                ),
                row(
                    "MGYP000448149430",
                    278,
                    3.9e-9,
                    22.4,
                    "",
                    &[133],
                    &["ERZ1744020"],
                    &["00"],
                    &[true],
                ),
            ],
        )
        .unwrap()
    }

    fn targets(table: &ProteinTable) -> Vec<String> {
        table.unique_hits().unwrap()
    }

    #[test]
    fn test_empty_filters_keep_every_row() {
        let table = sample_table();
        let picked = table.pick(&Filters::new(), &BiomeHierarchy::builtin()).unwrap();
        assert_eq!(picked, table);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let table = sample_table();
        let biomes = BiomeHierarchy::builtin();
        let filters = Filters::new().with_range("score", Range::between(45.9, 155.8));
        let picked = table.pick(&filters, &biomes).unwrap();
        assert_eq!(
            targets(&picked),
            vec!["MGYP000573539843".to_string(), "MGYP000062928162".to_string()]
        );
        let filters = Filters::new().with_range("e-value", Range::at_most(1.8e-49));
        let picked = table.pick(&filters, &biomes).unwrap();
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn test_range_on_text_column_errors() {
        let table = sample_table();
        let filters = Filters::new().with_range("target_name", Range::at_least(1.0));
        assert!(matches!(
            table.pick(&filters, &BiomeHierarchy::builtin()),
            Err(TableError::NotNumeric { .. })
        ));
    }

    #[test]
    fn test_unknown_filter_column_is_skipped() {
        let table = sample_table();
        let filters = Filters::new()
            .with_range("no_such_column", Range::at_least(1.0))
            .with_range("score", Range::at_least(100.0));
        let picked = table.pick(&filters, &BiomeHierarchy::builtin()).unwrap();
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn test_biome_ids_expand_to_descendants() {
        let table = sample_table();
        let biomes = BiomeHierarchy::builtin();
        // 1 = root:Engineered; rows are tagged with deeper nodes only.
        let filters = Filters::new().with_terms("biomes", [1u32]);
        let picked = table.pick(&filters, &biomes).unwrap();
        assert_eq!(
            targets(&picked),
            vec!["MGYP000573539843".to_string(), "MGYP000062928162".to_string()]
        );
        // A leaf id matches only rows tagged with it.
        let filters = Filters::new().with_terms("biomes", [353u32]);
        let picked = table.pick(&filters, &biomes).unwrap();
        assert_eq!(targets(&picked), vec!["MGYP000420419373".to_string()]);
    }

    #[test]
    fn test_biome_paths_match_like_ids() {
        let table = sample_table();
        let biomes = BiomeHierarchy::builtin();
        let by_path = Filters::new().with_terms("biomes", ["root:Engineered"]);
        let by_id = Filters::new().with_terms("biomes", [1u32]);
        assert_eq!(
            table.pick(&by_path, &biomes).unwrap(),
            table.pick(&by_id, &biomes).unwrap()
        );
        // The forest root covers every tagged row.
        let everything = Filters::new().with_terms("biomes", ["root"]);
        assert_eq!(table.pick(&everything, &biomes).unwrap().len(), 4);
    }

    #[test]
    fn test_mixed_biome_terms_union() {
        let table = sample_table();
        let biomes = BiomeHierarchy::builtin();
        let filters =
            Filters::new().with_terms("biomes", [Term::from("root:Host-associated"), Term::from(133u32)]);
        let picked = table.pick(&filters, &biomes).unwrap();
        assert_eq!(
            targets(&picked),
            vec!["MGYP000420419373".to_string(), "MGYP000448149430".to_string()]
        );
    }

    #[test]
    fn test_text_list_membership_has_no_expansion() {
        let table = sample_table();
        let filters = Filters::new().with_terms("assemblies", ["ERZ1744017"]);
        let picked = table.pick(&filters, &BiomeHierarchy::builtin()).unwrap();
        assert_eq!(
            targets(&picked),
            vec!["MGYP000573539843".to_string(), "MGYP000062928162".to_string()]
        );
        let filters = Filters::new().with_terms("truncation", ["00"]);
        let picked = table.pick(&filters, &BiomeHierarchy::builtin()).unwrap();
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn test_bool_list_membership() {
        let table = sample_table();
        let filters = Filters::new().with_terms("complete", [true]);
        let picked = table.pick(&filters, &BiomeHierarchy::builtin()).unwrap();
        assert_eq!(picked.len(), 3);
        let filters = Filters::new().with_terms("complete", [false]);
        let picked = table.pick(&filters, &BiomeHierarchy::builtin()).unwrap();
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn test_architecture_matches_by_substring_case_insensitively() {
        let table = sample_table();
        let filters = Filters::new().with_terms("pfam_architecture", ["pf00155"]);
        let picked = table.pick(&filters, &BiomeHierarchy::builtin()).unwrap();
        assert_eq!(
            targets(&picked),
            vec!["MGYP000420419373".to_string(), "MGYP000573539843".to_string()]
        );
        // An absent architecture never matches.
        let filters = Filters::new().with_terms("pfam_architecture", ["PF99999"]);
        assert!(table.pick(&filters, &BiomeHierarchy::builtin()).unwrap().is_empty());
    }

    #[test]
    fn test_scalar_terms_mean_equality() {
        let table = sample_table();
        let filters = Filters::new().with_terms("tlen", [314u32, 278u32]);
        let picked = table.pick(&filters, &BiomeHierarchy::builtin()).unwrap();
        assert_eq!(picked.len(), 2);
        let filters = Filters::new().with_terms("target_name", ["MGYP000448149430"]);
        let picked = table.pick(&filters, &BiomeHierarchy::builtin()).unwrap();
        assert_eq!(picked.len(), 1);
    }

    #[test]
    fn test_filter_order_is_irrelevant() {
        let table = sample_table();
        let biomes = BiomeHierarchy::builtin();
        let one_way = Filters::new()
            .with_range("e-value", Range::at_most(1e-10))
            .with_terms("biomes", ["root:Engineered"]);
        let other_way = Filters::new()
            .with_terms("biomes", ["root:Engineered"])
            .with_range("e-value", Range::at_most(1e-10));
        let picked = table.pick(&one_way, &biomes).unwrap();
        assert_eq!(picked, table.pick(&other_way, &biomes).unwrap());
        // Sequential application agrees with the combined document.
        let staged = table
            .pick(&Filters::new().with_range("e-value", Range::at_most(1e-10)), &biomes)
            .unwrap()
            .pick(&Filters::new().with_terms("biomes", ["root:Engineered"]), &biomes)
            .unwrap();
        assert_eq!(picked, staged);
    }

    #[test]
    fn test_filters_parse_from_json_documents() {
        let table = sample_table();
        let filters = Filters::from_json(
            r#"{
                "e-value": {"max": 1e-40},
                "biomes": [1, "root:Environmental:Aquatic:Freshwater"],
                "assemblies": null,
                "unknown_column": [1, 2, 3]
            }"#,
        )
        .unwrap();
        let picked = table.pick(&filters, &BiomeHierarchy::builtin()).unwrap();
        assert_eq!(targets(&picked), vec!["MGYP000573539843".to_string()]);
    }

    #[test]
    fn test_json_range_with_open_bounds() {
        let filters = Filters::from_json(r#"{"score": {"min": 100}}"#).unwrap();
        let table = sample_table();
        let picked = table.pick(&filters, &BiomeHierarchy::builtin()).unwrap();
        assert_eq!(picked.len(), 2);
        // An all-open window keeps every row with a numeric cell.
        let filters = Filters::from_json(r#"{"score": {}}"#).unwrap();
        let picked = table.pick(&filters, &BiomeHierarchy::builtin()).unwrap();
        assert_eq!(picked.len(), 4);
    }

    #[test]
    fn test_pick_against_a_custom_hierarchy() {
        let biomes = BiomeHierarchy::from_entries([
            (0, "root".to_string()),
            (1, "root:A".to_string()),
            (2, "root:A:B".to_string()),
            (6, "root:F".to_string()),
        ]);
        let schema = Schema::from_headers(["target_name", "biomes"]);
        let table = ProteinTable::from_rows(
            schema,
            vec![
                vec![Value::Text("first".to_string()), Value::Ids(vec![2])],
                vec![Value::Text("second".to_string()), Value::Ids(vec![6])],
            ],
        )
        .unwrap();
        let filters = Filters::new().with_terms("biomes", ["root:A"]);
        let picked = table.pick(&filters, &biomes).unwrap();
        assert_eq!(targets(&picked), vec!["first".to_string()]);
        // A root id expands over the whole forest, not just exact tags.
        let filters = Filters::new().with_terms("biomes", [0u32]);
        let picked = table.pick(&filters, &biomes).unwrap();
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn test_picking_returns_independent_tables() {
        let table = sample_table();
        let before = table.clone();
        let filters = Filters::new().with_terms("biomes", [353u32]);
        let picked = table.pick(&filters, &BiomeHierarchy::builtin()).unwrap();
        assert_eq!(table, before);
        assert_ne!(picked, table);
    }
}
