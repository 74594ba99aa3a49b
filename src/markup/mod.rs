use std::fs;
use std::path::Path;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Pulls `<td>` cell text out of `<tr>` rows with plain pattern matching.
///
/// Rows may span lines; a cell must open and close on the same line.
#[derive(Debug, Clone)]
pub struct TableExtractor {
    row: Regex,
    cell: Regex,
}

impl TableExtractor {
    pub fn new() -> Result<Self, MarkupError> {
        Ok(Self {
            row: Regex::new(r"(?s)<tr[^>]*>.*?</tr>")?,
            cell: Regex::new(r"<td[^>]*>(.*?)</td>")?,
        })
    }

    /// Trimmed cell strings per row, in source order. Rows without any
    /// `<td>` cell (header rows, for instance) are skipped.
    pub fn extract_rows(&self, markup: &str) -> Vec<Vec<String>> {
        self.row
            .find_iter(markup)
            .filter_map(|row| {
                let cells: Vec<String> = self
                    .cell
                    .captures_iter(row.as_str())
                    .filter_map(|c| c.get(1))
                    .map(|m| m.as_str().trim().to_string())
                    .collect();
                (!cells.is_empty()).then_some(cells)
            })
            .collect()
    }
}

pub fn write_rows_csv(path: &Path, rows: &[Vec<String>]) -> Result<(), MarkupError> {
    let mut w = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::CRLF)
        .from_path(path)?;
    for row in rows {
        w.write_record(row)?;
    }
    w.flush()?;
    Ok(())
}

/// Reads `input`, extracts table rows and writes them to `output` as CSV.
/// Returns the number of rows written.
pub fn extract_table_file(input: &Path, output: &Path) -> Result<usize, MarkupError> {
    let markup = fs::read_to_string(input)?;
    let rows = TableExtractor::new()?.extract_rows(&markup);
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    write_rows_csv(output, &rows)?;
    Ok(rows.len())
}

#[cfg(test)]
#[path = "../../tests/src_inline/markup/tests.rs"]
mod tests;
