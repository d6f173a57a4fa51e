use std::path::{Path, PathBuf};

use crate::data::filter::filter;
use crate::data::loader::{LoaderOptions, load_file};
use crate::data::model::{CleanedTable, FilterBounds, FilteredTable};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Drilling log loaded for this session.
    pub table: CleanedTable,

    /// Where `table` came from.
    pub source: PathBuf,

    /// Layout used when loading further files.
    pub loader: LoaderOptions,

    /// Observed column ranges; the slider limits and the reset target.
    pub observed: FilterBounds,

    /// Bounds currently set by the sliders.
    pub bounds: FilterBounds,

    /// Result of filtering `table` with `bounds`.
    pub filtered: FilteredTable,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Start a session on a loaded table. `initial` overrides the observed
    /// bounds when given.
    pub fn new(
        table: CleanedTable,
        source: PathBuf,
        loader: LoaderOptions,
        initial: Option<FilterBounds>,
    ) -> Self {
        let observed = FilterBounds::observed(&table);
        let bounds = initial.unwrap_or(observed);
        let filtered = filter(&table, &bounds);
        Self {
            table,
            source,
            loader,
            observed,
            bounds,
            filtered,
            status_message: None,
        }
    }

    /// Replace the session table; bounds go back to the observed ranges.
    pub fn set_table(&mut self, table: CleanedTable, source: PathBuf) {
        self.observed = FilterBounds::observed(&table);
        self.bounds = self.observed;
        self.table = table;
        self.source = source;
        self.status_message = None;
        self.refilter();
    }

    /// Load another drilling log. On failure the current table stays and
    /// the error is shown in the status line.
    pub fn open(&mut self, path: &Path) {
        match load_file(path, &self.loader) {
            Ok(table) => {
                log::info!("Opened {} ({} rows)", path.display(), table.len());
                self.set_table(table, path.to_path_buf());
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Recompute `filtered` after a bounds change.
    pub fn refilter(&mut self) {
        self.filtered = filter(&self.table, &self.bounds);
        log::trace!(
            "{} of {} rows within {:?}",
            self.filtered.len(),
            self.table.len(),
            self.bounds
        );
    }

    /// Restore the observed (pass-through) bounds.
    pub fn reset_bounds(&mut self) {
        self.bounds = self.observed;
        self.refilter();
    }
}
