//! Biome hierarchy lookups.
//!
//! MGnify tags every protein with the numeric ids of the biomes its source
//! assemblies came from. The ids name nodes of a forest whose paths are
//! colon-separated lineages such as
//! `root:Environmental:Aquatic:Marine`. This module answers the set queries
//! the table filters need: which ids sit below a node, which sit above it,
//! and which ids a lineage prefix covers.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

mod builtin;

/// An immutable forest of biome lineages, queryable by id or by path.
///
/// Entries are indexed once at construction; all queries are read-only, so a
/// hierarchy can be shared by reference across every table operation that
/// needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiomeHierarchy {
    // Entries sorted lexicographically by path. A node's descendants occupy
    // a contiguous range of this vec, located by binary search.
    by_path: Vec<(String, u32)>,
    // Position of each id's entry in `by_path`.
    index_of_id: HashMap<u32, usize>,
}

impl BiomeHierarchy {
    /// Returns the MGnify biome vocabulary compiled into the binary.
    pub fn builtin() -> Self {
        Self::from_entries(
            builtin::BIOME_LINEAGES
                .iter()
                .map(|&(id, path)| (id, path.to_string())),
        )
    }

    /// Builds a hierarchy from arbitrary id/path pairs.
    ///
    /// The first occurrence of an id wins; later occurrences are skipped
    /// with a warning.
    pub fn from_entries(entries: impl IntoIterator<Item = (u32, String)>) -> Self {
        let mut seen = HashSet::new();
        let mut by_path: Vec<(String, u32)> = Vec::new();
        for (id, path) in entries {
            if !seen.insert(id) {
                warn!("duplicate biome id {} (path '{}') ignored", id, path);
                continue;
            }
            by_path.push((path, id));
        }
        by_path.sort();
        let index_of_id = by_path
            .iter()
            .enumerate()
            .map(|(pos, &(_, id))| (id, pos))
            .collect();
        BiomeHierarchy { by_path, index_of_id }
    }

    /// Loads a hierarchy from a tab-separated file of `id<TAB>path` lines.
    ///
    /// Empty lines and lines starting with `#` are skipped; malformed lines
    /// are skipped with a warning.
    pub fn from_tsv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open biome table {}", path.display()))?;
        let mut entries = Vec::new();
        for (lineno, line) in BufReader::new(file).lines().enumerate() {
            let line = line.with_context(|| format!("failed to read {}", path.display()))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.split_once('\t') {
                Some((id, lineage)) => match id.trim().parse::<u32>() {
                    Ok(id) => entries.push((id, lineage.trim().to_string())),
                    Err(_) => warn!(
                        "skipping line {} of {}: bad biome id '{}'",
                        lineno + 1,
                        path.display(),
                        id
                    ),
                },
                None => warn!(
                    "skipping line {} of {}: expected id<TAB>path",
                    lineno + 1,
                    path.display()
                ),
            }
        }
        Ok(Self::from_entries(entries))
    }

    /// Number of nodes in the forest.
    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    /// True when the forest has no nodes.
    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    /// The lineage path of `id`, if the id is known.
    pub fn path(&self, id: u32) -> Option<&str> {
        self.index_of_id
            .get(&id)
            .map(|&pos| self.by_path[pos].0.as_str())
    }

    /// The id whose lineage path is exactly `path`, if any.
    pub fn id(&self, path: &str) -> Option<u32> {
        let pos = self.by_path.partition_point(|(p, _)| p.as_str() < path);
        match self.by_path.get(pos) {
            Some((p, id)) if p == path => Some(*id),
            _ => None,
        }
    }

    /// Iterates over all `(id, path)` entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.by_path.iter().map(|(path, id)| (*id, path.as_str()))
    }

    /// The ids strictly below `id` in the forest. Unknown ids yield the
    /// empty set.
    pub fn descendants_of(&self, id: u32) -> HashSet<u32> {
        match self.path(id) {
            Some(path) => self.below(path).collect(),
            None => HashSet::new(),
        }
    }

    /// The ids strictly above `id`, up to its root. Unknown ids yield the
    /// empty set.
    pub fn ancestors_of(&self, id: u32) -> HashSet<u32> {
        let mut out = HashSet::new();
        if let Some(path) = self.path(id) {
            for (colon, _) in path.match_indices(':') {
                if let Some(ancestor) = self.id(&path[..colon]) {
                    out.insert(ancestor);
                }
            }
        }
        out
    }

    /// The ids whose path is `prefix` or sits below it. An unmatched prefix
    /// yields the empty set.
    pub fn ids_matching_prefix(&self, prefix: &str) -> HashSet<u32> {
        let mut out: HashSet<u32> = self.below(prefix).collect();
        if let Some(id) = self.id(prefix) {
            out.insert(id);
        }
        out
    }

    /// The union of each given id with all of its descendants. Unknown ids
    /// contribute nothing.
    pub fn union_descendants(&self, ids: &[u32]) -> HashSet<u32> {
        let mut out = HashSet::new();
        for &id in ids {
            if let Some(path) = self.path(id) {
                out.insert(id);
                out.extend(self.below(path));
            }
        }
        out
    }

    /// Every distinct lineage level covered by the given ids, sorted.
    ///
    /// For an id tagged `root:A:B` this contributes `root`, `root:A` and
    /// `root:A:B`. Category-selection UIs list these.
    pub fn levels_for(&self, ids: &[u32]) -> Vec<String> {
        let mut levels = BTreeSet::new();
        for &id in ids {
            if let Some(path) = self.path(id) {
                for (colon, _) in path.match_indices(':') {
                    levels.insert(path[..colon].to_string());
                }
                levels.insert(path.to_string());
            }
        }
        levels.into_iter().collect()
    }

    // Ids whose path extends `path` by at least one segment. Matching on
    // `path` plus the separator keeps sibling labels that merely share a
    // text prefix (e.g. `root:A 2` next to `root:A`) out of the range.
    fn below<'a>(&'a self, path: &str) -> impl Iterator<Item = u32> + 'a {
        let prefix = format!("{path}:");
        let start = self
            .by_path
            .partition_point(|(p, _)| p.as_str() < prefix.as_str());
        self.by_path[start..]
            .iter()
            .take_while(move |(p, _)| p.starts_with(&prefix))
            .map(|&(_, id)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> BiomeHierarchy {
        BiomeHierarchy::from_entries([
            (0, "root".to_string()),
            (1, "root:A".to_string()),
            (2, "root:A:B".to_string()),
            (6, "root:F".to_string()),
        ])
    }

    #[test]
    fn test_descendants_are_strict() {
        let biomes = toy();
        assert_eq!(biomes.descendants_of(0), HashSet::from([1, 2, 6]));
        assert_eq!(biomes.descendants_of(1), HashSet::from([2]));
        assert!(biomes.descendants_of(2).is_empty());
        assert!(biomes.descendants_of(99).is_empty());
    }

    #[test]
    fn test_ancestors_are_strict() {
        let biomes = toy();
        assert_eq!(biomes.ancestors_of(2), HashSet::from([0, 1]));
        assert_eq!(biomes.ancestors_of(6), HashSet::from([0]));
        assert!(biomes.ancestors_of(0).is_empty());
        assert!(biomes.ancestors_of(99).is_empty());
    }

    #[test]
    fn test_prefix_match_includes_self() {
        let biomes = toy();
        assert_eq!(biomes.ids_matching_prefix("root:A"), HashSet::from([1, 2]));
        assert_eq!(
            biomes.ids_matching_prefix("root"),
            HashSet::from([0, 1, 2, 6])
        );
        assert!(biomes.ids_matching_prefix("root:Z").is_empty());
        assert!(biomes.ids_matching_prefix("").is_empty());
    }

    #[test]
    fn test_prefix_match_is_segment_wise() {
        // "root:A 2" shares a text prefix with "root:A" but is a sibling,
        // not a descendant.
        let biomes = BiomeHierarchy::from_entries([
            (0, "root".to_string()),
            (1, "root:A".to_string()),
            (2, "root:A:B".to_string()),
            (3, "root:A 2".to_string()),
        ]);
        assert_eq!(biomes.ids_matching_prefix("root:A"), HashSet::from([1, 2]));
        assert_eq!(biomes.descendants_of(1), HashSet::from([2]));
        assert_eq!(biomes.descendants_of(0), HashSet::from([1, 2, 3]));
    }

    #[test]
    fn test_union_descendants_includes_the_ids_themselves() {
        let biomes = toy();
        assert_eq!(biomes.union_descendants(&[1, 6]), HashSet::from([1, 2, 6]));
        assert_eq!(biomes.union_descendants(&[2]), HashSet::from([2]));
        // Unknown ids contribute nothing.
        assert_eq!(biomes.union_descendants(&[1, 99]), HashSet::from([1, 2]));
        assert!(biomes.union_descendants(&[]).is_empty());
    }

    #[test]
    fn test_descendants_and_ancestors_are_inverse() {
        let biomes = BiomeHierarchy::builtin();
        for (id, _) in biomes.iter() {
            for below in biomes.descendants_of(id) {
                assert!(
                    biomes.ancestors_of(below).contains(&id),
                    "{} descends from {} but does not list it as ancestor",
                    below,
                    id
                );
            }
        }
    }

    #[test]
    fn test_builtin_vocabulary() {
        let biomes = BiomeHierarchy::builtin();
        assert_eq!(biomes.len(), 493);
        assert_eq!(biomes.path(0), Some("root"));
        assert_eq!(biomes.id("root:Engineered"), Some(1));
        assert_eq!(biomes.path(492), Some("root:Mixed"));
        // Continuous-culture bioreactors sit below id 4.
        assert!(biomes.descendants_of(4).contains(&6));
        assert!(biomes.ancestors_of(6).contains(&4));
    }

    #[test]
    fn test_levels_for_lists_every_prefix() {
        let biomes = toy();
        assert_eq!(
            biomes.levels_for(&[2]),
            vec!["root".to_string(), "root:A".to_string(), "root:A:B".to_string()]
        );
        assert_eq!(
            biomes.levels_for(&[2, 6]),
            vec![
                "root".to_string(),
                "root:A".to_string(),
                "root:A:B".to_string(),
                "root:F".to_string()
            ]
        );
        assert!(biomes.levels_for(&[99]).is_empty());
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let biomes =
            BiomeHierarchy::from_entries([(1, "root:A".to_string()), (1, "root:B".to_string())]);
        assert_eq!(biomes.len(), 1);
        assert_eq!(biomes.path(1), Some("root:A"));
    }

    #[test]
    fn test_from_tsv_skips_comments_and_malformed_lines() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let table = dir.path().join("biomes.tsv");
        let mut file = File::create(&table).unwrap();
        writeln!(file, "# id\tlineage").unwrap();
        writeln!(file, "0\troot").unwrap();
        writeln!(file, "1\troot:A").unwrap();
        writeln!(file, "not-an-id\troot:B").unwrap();
        writeln!(file, "no tab here").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "2\troot:A:B").unwrap();
        drop(file);

        let biomes = BiomeHierarchy::from_tsv_path(&table).unwrap();
        assert_eq!(biomes.len(), 3);
        assert_eq!(biomes.id("root:A:B"), Some(2));
        assert!(biomes.id("root:B").is_none());
    }
}
