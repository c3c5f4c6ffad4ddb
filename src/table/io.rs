//! Reading and writing result tables as delimited files.
//!
//! Tables persist as comma-delimited text with a header row. Nested cells
//! are embedded JSON array literals, so the files stay flat and readable
//! while round-tripping the list values exactly. Significance scores keep
//! their familiar scientific form.

use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::warn;

use crate::table::schema::{ColumnKind, Schema, Value};
use crate::table::ProteinTable;

// Columns holding significance scores; written scientific once they drop
// to the cutoff or below.
const SIGNIFICANCE_COLUMNS: [&str; 3] = ["e-value", "i-value", "c-value"];
const FIXED_POINT_CUTOFF: f64 = 1e-4;

impl ProteinTable {
    /// Loads a table from a comma-delimited file with a header row.
    ///
    /// Cells that fail to parse for their column's declared kind are kept
    /// as raw text with a warning; the rest of the file still loads.
    pub fn load(path: impl AsRef<Path>) -> Result<ProteinTable> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open table {}", path.display()))?;
        Self::load_from_reader(file)
            .with_context(|| format!("failed to read table {}", path.display()))
    }

    /// Loads a table from any reader of comma-delimited text.
    ///
    /// Rows whose field count does not match the header are skipped with a
    /// warning. A header naming the same column twice is rejected, since
    /// the duplicated cells could not be told apart afterwards.
    pub fn load_from_reader(reader: impl Read) -> Result<ProteinTable> {
        let mut csv = csv::Reader::from_reader(reader);
        let headers = csv.headers()?.clone();
        if let Some(name) = first_duplicate(&headers) {
            bail!("header names column '{}' more than once", name);
        }
        let schema = Schema::from_headers(headers.iter());
        let mut rows = Vec::new();
        for (recno, record) in csv.records().enumerate() {
            // Header line is line 1.
            let line = recno + 2;
            let record = match record {
                Ok(record) => record,
                Err(err) => {
                    warn!("line {}: skipping unreadable record: {}", line, err);
                    continue;
                }
            };
            let mut row = Vec::with_capacity(schema.len());
            for (index, cell) in record.iter().enumerate() {
                row.push(parse_cell(
                    cell,
                    schema.kind_at(index),
                    schema.name_at(index),
                    line,
                ));
            }
            rows.push(row);
        }
        Ok(ProteinTable { schema, rows })
    }

    /// Writes the table as comma-delimited text with a header row.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("failed to create table {}", path.display()))?;
        self.save_to_writer(file)
            .with_context(|| format!("failed to write table {}", path.display()))
    }

    /// Writes the table as comma-delimited text to any writer.
    pub fn save_to_writer(&self, writer: impl Write) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(self.schema.names())?;
        for row in &self.rows {
            let mut record = Vec::with_capacity(row.len());
            for (index, value) in row.iter().enumerate() {
                record.push(format_cell(value, self.schema.name_at(index))?);
            }
            csv.write_record(&record)?;
        }
        csv.flush()?;
        Ok(())
    }
}

fn first_duplicate(headers: &csv::StringRecord) -> Option<&str> {
    let mut seen = HashSet::new();
    headers.iter().find(|name| !seen.insert(*name))
}

fn parse_cell(cell: &str, kind: ColumnKind, column: &str, line: usize) -> Value {
    match kind {
        ColumnKind::Text | ColumnKind::Architecture => Value::Text(cell.to_string()),
        ColumnKind::Int => match cell.parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => keep_raw(cell, column, line),
        },
        ColumnKind::Float => match cell.parse::<f64>() {
            Ok(x) => Value::Float(x),
            Err(_) => keep_raw(cell, column, line),
        },
        ColumnKind::Biomes => {
            if cell.is_empty() {
                return Value::Ids(Vec::new());
            }
            match serde_json::from_str::<Vec<u32>>(cell) {
                Ok(ids) => Value::Ids(ids),
                Err(_) => keep_raw(cell, column, line),
            }
        }
        ColumnKind::TextList => {
            if cell.is_empty() {
                return Value::Texts(Vec::new());
            }
            match serde_json::from_str::<Vec<String>>(cell) {
                Ok(texts) => Value::Texts(texts),
                Err(_) => keep_raw(cell, column, line),
            }
        }
        ColumnKind::BoolList => {
            if cell.is_empty() {
                return Value::Bools(Vec::new());
            }
            match serde_json::from_str::<Vec<bool>>(cell) {
                Ok(bools) => Value::Bools(bools),
                Err(_) => keep_raw(cell, column, line),
            }
        }
    }
}

fn keep_raw(cell: &str, column: &str, line: usize) -> Value {
    warn!(
        "line {}: cannot parse '{}' for column '{}', keeping raw text",
        line, cell, column
    );
    Value::Text(cell.to_string())
}

fn format_cell(value: &Value, column: &str) -> Result<String> {
    let cell = match value {
        Value::Int(n) => n.to_string(),
        Value::Float(x) => format_float(*x, column),
        Value::Text(s) => s.clone(),
        Value::Ids(v) => serde_json::to_string(v)?,
        Value::Texts(v) => serde_json::to_string(v)?,
        Value::Bools(v) => serde_json::to_string(v)?,
    };
    Ok(cell)
}

fn format_float(value: f64, column: &str) -> String {
    if SIGNIFICANCE_COLUMNS.contains(&column) && value <= FIXED_POINT_CUTOFF {
        format!("{:.1e}", value)
    } else {
        value.to_string()
    }
}
