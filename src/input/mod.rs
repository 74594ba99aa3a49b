use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;

use crate::model::profile::ColumnNames;

pub mod score_label;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing column {column:?} in {path}")]
    MissingColumn { column: String, path: String },
    #[error("parse error at line {line}: {msg}")]
    Parse { line: u64, msg: String },
}

/// One data line of a score table, before any field is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawScoreRecord {
    pub line: u64,
    pub label: String,
    pub count: String,
    pub cumulative: String,
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(MultiGzDecoder::new(BufReader::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn read_score_records(
    path: &Path,
    columns: &ColumnNames,
) -> Result<Vec<RawScoreRecord>, InputError> {
    let reader = open_maybe_gz(path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| InputError::MissingColumn {
                column: name.to_string(),
                path: path.display().to_string(),
            })
    };
    let label_idx = find(columns.score)?;
    let count_idx = find(columns.count)?;
    let cumulative_idx = find(columns.cumulative)?;

    let mut out = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let field = |idx: usize| record.get(idx).unwrap_or("").to_string();
        out.push(RawScoreRecord {
            line,
            label: field(label_idx),
            count: field(count_idx),
            cumulative: field(cumulative_idx),
        });
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
