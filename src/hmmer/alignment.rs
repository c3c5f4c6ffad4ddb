//! Alignment-block parsing and per-domain agreement scores.
//!
//! Below each scored domain, HMMER's human-readable output prints a
//! three-line alignment: the query sequence, a consensus line, and the
//! target sequence. In the consensus a space marks a mismatch, `+` a
//! similar residue and any other character an identical one, so percent
//! identity and similarity fall straight out of counting characters. The
//! consensus column offset has to be computed from the target line, since
//! leading whitespace varies with the width of the name and coordinate
//! columns.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

use crate::hmmer::round2;
use crate::table::{ColumnKind, ProteinTable, Schema, TableError, Value};

/// Identity and similarity of one aligned domain, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentStats {
    pub identity: f64,
    pub similarity: f64,
}

/// Identifies one domain alignment by target and alignment coordinates,
/// matching the `ali_from`/`ali_to` span of the domain-table row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlignmentKey {
    pub target: String,
    pub ali_from: i64,
    pub ali_to: i64,
}

/// Reads the alignment blocks of a HMMER output file.
pub fn read_alignments(path: impl AsRef<Path>) -> Result<HashMap<AlignmentKey, AlignmentStats>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open search output {}", path.display()))?;
    parse_alignments(BufReader::new(file))
        .with_context(|| format!("failed to parse alignments in {}", path.display()))
}

/// Parses `==`-introduced three-line alignment blocks from any buffered
/// reader. Blocks that do not parse are skipped with a warning.
pub fn parse_alignments(
    reader: impl BufRead,
) -> Result<HashMap<AlignmentKey, AlignmentStats>> {
    let mut out = HashMap::new();
    let mut block: Vec<String> = Vec::new();
    let mut collecting = false;
    for line in reader.lines() {
        let mut line = line.context("failed to read search output")?;
        if line.ends_with('\r') {
            line.pop();
        }
        if line.starts_with('#') {
            continue;
        }
        if collecting {
            block.push(line);
            if block.len() == 3 {
                collecting = false;
                match block_stats(&block) {
                    Some((key, stats)) => {
                        out.insert(key, stats);
                    }
                    None => warn!("skipping unparseable alignment block"),
                }
            }
        } else if line.starts_with("  ==") {
            collecting = true;
            block.clear();
        }
    }
    Ok(out)
}

/// Scores a consensus line: spaces are mismatches, `+` similar residues,
/// everything else identical. Percentages are rounded to two decimals.
pub fn identity_similarity(consensus: &str) -> AlignmentStats {
    let mut identical = 0usize;
    let mut similar = 0usize;
    let mut length = 0usize;
    for character in consensus.chars() {
        length += 1;
        match character {
            ' ' => {}
            '+' => similar += 1,
            _ => identical += 1,
        }
    }
    if length == 0 {
        return AlignmentStats {
            identity: 0.0,
            similarity: 0.0,
        };
    }
    AlignmentStats {
        identity: round2(identical as f64 / length as f64 * 100.0),
        similarity: round2((identical + similar) as f64 / length as f64 * 100.0),
    }
}

// Index of the first space after the first run of non-space characters,
// i.e. the end of one left-padded column.
fn end_of_column(text: &str) -> Option<usize> {
    let mut in_column = false;
    for (index, character) in text.char_indices() {
        if character == ' ' {
            if in_column {
                return Some(index);
            }
        } else {
            in_column = true;
        }
    }
    None
}

fn block_stats(block: &[String]) -> Option<(AlignmentKey, AlignmentStats)> {
    let consensus_line = &block[1];
    let target_line = &block[2];

    let mut fields = target_line.split_whitespace();
    let target = fields.next()?;
    let ali_from: i64 = fields.next()?.parse().ok()?;
    let _sequence = fields.next()?;
    let ali_to: i64 = fields.next()?.parse().ok()?;

    // The consensus starts exactly under the target sequence: skip the name
    // column and the start-coordinate column plus one separating space.
    let name_end = end_of_column(target_line)?;
    let coordinate_end = end_of_column(&target_line[name_end..])?;
    let consensus_start = name_end + coordinate_end + 1;
    let consensus = consensus_line.get(consensus_start..).unwrap_or("");

    Some((
        AlignmentKey {
            target: target.to_string(),
            ali_from,
            ali_to,
        },
        identity_similarity(consensus),
    ))
}

/// Joins per-domain alignment scores onto a table as `similarity` and
/// `identity` columns.
///
/// Rows whose `(target_name, ali_from, ali_to)` span has no alignment
/// record are dropped with a warning.
pub fn attach_similarity(
    table: &ProteinTable,
    alignments: &HashMap<AlignmentKey, AlignmentStats>,
) -> Result<ProteinTable, TableError> {
    let target_index = table.column_index("target_name")?;
    let from_index = table.column_index("ali_from")?;
    let to_index = table.column_index("ali_to")?;

    let schema = table.schema();
    let mut columns: Vec<(String, ColumnKind)> = (0..schema.len())
        .map(|index| (schema.name_at(index).to_string(), schema.kind_at(index)))
        .collect();
    let similarity_index = match schema.index_of("similarity") {
        Some(index) => index,
        None => {
            columns.push(("similarity".to_string(), ColumnKind::Float));
            columns.len() - 1
        }
    };
    let identity_index = match schema.index_of("identity") {
        Some(index) => index,
        None => {
            columns.push(("identity".to_string(), ColumnKind::Float));
            columns.len() - 1
        }
    };
    let joined_schema = Schema::from_columns(columns);
    let width = joined_schema.len();

    let mut rows = Vec::with_capacity(table.len());
    for row in table.rows() {
        let values = row.values();
        let key = match (
            values[target_index].as_str(),
            int_of(&values[from_index]),
            int_of(&values[to_index]),
        ) {
            (Some(target), Some(ali_from), Some(ali_to)) => AlignmentKey {
                target: target.to_string(),
                ali_from,
                ali_to,
            },
            _ => {
                warn!("row without usable alignment coordinates dropped");
                continue;
            }
        };
        match alignments.get(&key) {
            Some(stats) => {
                let mut values = values.to_vec();
                values.resize(width, Value::Float(0.0));
                values[similarity_index] = Value::Float(stats.similarity);
                values[identity_index] = Value::Float(stats.identity);
                rows.push(values);
            }
            None => warn!(
                "no alignment for {} {}..{}, dropping row",
                key.target, key.ali_from, key.ali_to
            ),
        }
    }
    ProteinTable::from_rows(joined_schema, rows)
}

fn int_of(value: &Value) -> Option<i64> {
    match value {
        Value::Int(n) => Some(*n),
        _ => None,
    }
}
