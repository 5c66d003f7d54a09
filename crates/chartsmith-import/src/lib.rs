// File: crates/chartsmith-import/src/lib.rs
// Summary: ImportNormalizer: raw delimited text in, typed columns out.

pub mod column;
pub mod error;

use tracing::debug;

pub use column::{infer, Column, ColumnData, ColumnKind};
pub use error::{ImportError, Result};

/// Parse comma-delimited text into typed columns.
///
/// The first row is the header; every later row is data. Surrounding quotes
/// are stripped by the reader. Fewer than two rows, or a data row whose cell
/// count disagrees with the header, rejects the whole import; nothing partial
/// is ever returned.
pub fn parse_columns(raw: &str) -> Result<Vec<Column>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());

    let mut rows: Vec<csv::StringRecord> = Vec::new();
    for record in reader.records() {
        rows.push(record?);
    }
    if rows.len() < 2 {
        debug!(rows = rows.len(), "import rejected: missing header or data");
        return Err(ImportError::TooFewRows { got: rows.len() });
    }

    let header = &rows[0];
    let width = header.len();
    for (i, row) in rows.iter().enumerate().skip(1) {
        if row.len() != width {
            debug!(row = i, "import rejected: ragged row");
            return Err(ImportError::RaggedRow {
                row: i,
                got: row.len(),
                expected: width,
            });
        }
    }

    let columns = (0..width)
        .map(|col| {
            let name = header.get(col).unwrap_or_default();
            let cells: Vec<String> = rows[1..]
                .iter()
                .map(|row| row.get(col).unwrap_or_default().to_string())
                .collect();
            infer(name, &cells)
        })
        .collect();
    Ok(columns)
}
