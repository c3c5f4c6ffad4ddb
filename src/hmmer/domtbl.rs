//! HMMER domain-table (`--domtblout`) parsing.
//!
//! The domain table is whitespace-delimited with `#` comment lines and a
//! fixed set of 22 fields per domain hit, followed by a free-text target
//! description. On top of the raw fields the parser derives per-domain
//! coverage of the hit and of the query from the alignment span.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

use crate::hmmer::round2;
use crate::table::{ProteinTable, Schema, Value};

/// Reads a `--domtblout` file into a [`ProteinTable`].
pub fn read_domtbl(path: impl AsRef<Path>) -> Result<ProteinTable> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open domain table {}", path.display()))?;
    parse_domtbl(BufReader::new(file))
        .with_context(|| format!("failed to parse domain table {}", path.display()))
}

/// Parses `--domtblout` text from any buffered reader.
///
/// Comment and empty lines are skipped; lines that do not yield the full
/// field set are skipped with a warning.
pub fn parse_domtbl(reader: impl BufRead) -> Result<ProteinTable> {
    let mut rows = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.context("failed to read domain table")?;
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_line(line) {
            Some(row) => rows.push(row),
            None => warn!("skipping malformed domain-table line {}", lineno + 1),
        }
    }
    Ok(ProteinTable::from_rows(domtbl_schema(), rows)?)
}

fn domtbl_schema() -> Schema {
    Schema::from_headers([
        "target_name",
        "target_accession",
        "tlen",
        "query_name",
        "query_accession",
        "qlen",
        "e-value",
        "score",
        "bias",
        "ndom",
        "ndom_of",
        "c-value",
        "i-value",
        "dom_score",
        "dom_bias",
        "hmm_from",
        "hmm_to",
        "ali_from",
        "ali_to",
        "env_from",
        "env_to",
        "acc",
        "description",
        "coverage_hit",
        "coverage_query",
    ])
}

fn parse_line(line: &str) -> Option<Vec<Value>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 23 {
        return None;
    }
    let tlen: i64 = fields[2].parse().ok()?;
    let qlen: i64 = fields[5].parse().ok()?;
    let ali_from: i64 = fields[17].parse().ok()?;
    let ali_to: i64 = fields[18].parse().ok()?;
    let aligned = (ali_to - ali_from) as f64;
    Some(vec![
        Value::Text(fields[0].to_string()),
        Value::Text(fields[1].to_string()),
        Value::Int(tlen),
        Value::Text(fields[3].to_string()),
        Value::Text(fields[4].to_string()),
        Value::Int(qlen),
        Value::Float(fields[6].parse().ok()?),
        Value::Float(fields[7].parse().ok()?),
        Value::Float(fields[8].parse().ok()?),
        Value::Int(fields[9].parse().ok()?),
        Value::Int(fields[10].parse().ok()?),
        Value::Float(fields[11].parse().ok()?),
        Value::Float(fields[12].parse().ok()?),
        Value::Float(fields[13].parse().ok()?),
        Value::Float(fields[14].parse().ok()?),
        Value::Int(fields[15].parse().ok()?),
        Value::Int(fields[16].parse().ok()?),
        Value::Int(ali_from),
        Value::Int(ali_to),
        Value::Int(fields[19].parse().ok()?),
        Value::Int(fields[20].parse().ok()?),
        Value::Float(fields[21].parse().ok()?),
        Value::Text(fields[22..].join(" ")),
        Value::Float(round2(aligned / tlen as f64)),
        Value::Float(round2(aligned / qlen as f64)),
    ])
}
