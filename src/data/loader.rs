use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::model::{CellValue, Channel, CleanedTable, RawTable};
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// How the drilling log is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoaderOptions {
    /// Position of the row holding the real column names. Every row up to
    /// and including it is dropped before the data starts.
    pub header_row: usize,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        LoaderOptions { header_row: 1 }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and clean a drilling log CSV.
///
/// Layout: row 0 is metadata, row `header_row` holds the column names, data
/// follows. The six loaded channels are coerced to numbers; cells that do not
/// parse become [`CellValue::Missing`] instead of failing the load.
pub fn load_file(path: &Path, options: &LoaderOptions) -> Result<CleanedTable, DashboardError> {
    let source_name = path.display().to_string();
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| {
            log::error!("Failed to open {source_name}: {source}");
            DashboardError::DataSource {
                source_name: source_name.clone(),
                source,
            }
        })?;
    clean(read_raw(reader, &source_name)?, &source_name, options)
}

/// Same as [`load_file`] for any byte source; `source_name` is only used in
/// diagnostics.
pub fn load_reader<R: Read>(
    reader: R,
    source_name: &str,
    options: &LoaderOptions,
) -> Result<CleanedTable, DashboardError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    clean(read_raw(reader, source_name)?, source_name, options)
}

// ---------------------------------------------------------------------------
// Pipeline steps
// ---------------------------------------------------------------------------

/// Read every record positionally, metadata rows included.
fn read_raw<R: Read>(
    mut reader: csv::Reader<R>,
    source_name: &str,
) -> Result<RawTable, DashboardError> {
    let mut raw = RawTable::default();
    for result in reader.records() {
        let record = result.map_err(|source| DashboardError::DataSource {
            source_name: source_name.to_string(),
            source,
        })?;
        raw.rows.push(record.iter().map(str::to_string).collect());
    }
    log::debug!("{source_name}: read {} raw rows", raw.len());
    Ok(raw)
}

/// Repair the header, drop the non-data rows and coerce the loaded channels.
fn clean(
    raw: RawTable,
    source_name: &str,
    options: &LoaderOptions,
) -> Result<CleanedTable, DashboardError> {
    let header_row = options.header_row;
    let mut rows = raw.rows.into_iter();

    let columns = rows
        .nth(header_row)
        .ok_or_else(|| DashboardError::NoHeaderRow {
            source_name: source_name.to_string(),
            header_row,
        })?;

    let numeric: Vec<bool> = columns
        .iter()
        .map(|c| {
            Channel::LOADED
                .iter()
                .any(|ch| ch.raw_header() == Some(c.as_str()))
        })
        .collect();

    let mut data = Vec::new();
    for (i, row) in rows.enumerate() {
        if row.len() > columns.len() {
            return Err(DashboardError::RaggedRow {
                source_name: source_name.to_string(),
                row: i,
                expected: columns.len(),
                found: row.len(),
            });
        }
        let cells = row
            .into_iter()
            .zip(&numeric)
            .map(|(text, &is_numeric)| {
                if is_numeric {
                    coerce_numeric(&text)
                } else {
                    CellValue::Text(text)
                }
            })
            .collect();
        data.push(cells);
    }

    let table = CleanedTable::new(source_name, columns, data)?;

    log::info!("Loaded {} rows from {source_name}", table.len());
    for channel in Channel::LOADED {
        let missing = table.missing_count(channel);
        if missing > 0 {
            log::debug!("{source_name}: {missing} missing values in '{}'", channel.label());
        }
    }
    Ok(table)
}

/// Parse a cell as a finite number; anything else is missing.
fn coerce_numeric(text: &str) -> CellValue {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => CellValue::Number(v),
        _ => CellValue::Missing,
    }
}
