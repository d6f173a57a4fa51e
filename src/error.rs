use thiserror::Error;

/// Failures raised while turning a drilling log into a [`CleanedTable`].
///
/// Missing cell values are not errors; they are carried as
/// [`CellValue::Missing`] through the table instead.
///
/// [`CleanedTable`]: crate::data::model::CleanedTable
/// [`CellValue::Missing`]: crate::data::model::CellValue::Missing
#[derive(Error, Debug)]
pub enum DashboardError {
    // Data source errors
    #[error("cannot read drilling log '{source_name}': {source}")]
    DataSource {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("drilling log '{source_name}' has no header row at position {header_row}")]
    NoHeaderRow {
        source_name: String,
        header_row: usize,
    },

    #[error(
        "drilling log '{source_name}': data row {row} has {found} fields but the header has {expected}"
    )]
    RaggedRow {
        source_name: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    // Schema errors
    #[error("required column '{column}' not found in the header of '{source_name}'")]
    Schema {
        source_name: String,
        column: String,
    },
}
