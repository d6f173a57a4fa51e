use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Channel – canonical identifiers for the drilling log columns
// ---------------------------------------------------------------------------

/// A numeric channel of the drilling log.
///
/// The raw CSV header spells these with inconsistent spacing and units; the
/// mapping to [`Channel`] happens once, when a [`CleanedTable`] is built, and
/// everything downstream refers to channels only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    Depth,
    TempOut,
    TempIn,
    Rop,
    Wob,
    SurfaceTorque,
    /// Derived after filtering: `TempOut - TempIn`.
    TemperatureGain,
}

impl Channel {
    /// Channels read from the file and coerced to numbers at load time.
    pub const LOADED: [Channel; 6] = [
        Channel::Depth,
        Channel::TempOut,
        Channel::TempIn,
        Channel::Rop,
        Channel::Wob,
        Channel::SurfaceTorque,
    ];

    /// Column order of the filtered data table.
    pub const TABLE: [Channel; 7] = [
        Channel::Depth,
        Channel::TempOut,
        Channel::TempIn,
        Channel::TemperatureGain,
        Channel::Rop,
        Channel::Wob,
        Channel::SurfaceTorque,
    ];

    /// Exact header spelling in the source file, `None` for derived channels.
    pub fn raw_header(self) -> Option<&'static str> {
        match self {
            Channel::Depth => Some("Depth"),
            Channel::TempOut => Some("Temp Out( degF)"),
            Channel::TempIn => Some("Temp In(degF)"),
            Channel::Rop => Some("ROP(1 ft)"),
            Channel::Wob => Some("WOB (k-lbs)"),
            Channel::SurfaceTorque => Some("Surface Torque (psi)"),
            Channel::TemperatureGain => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::Depth => "Depth",
            Channel::TempOut => "Temp Out",
            Channel::TempIn => "Temp In",
            Channel::Rop => "ROP",
            Channel::Wob => "WOB",
            Channel::SurfaceTorque => "Surface Torque",
            Channel::TemperatureGain => "ΔT (Temp Gain)",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Channel::Depth => "ft",
            Channel::TempOut | Channel::TempIn | Channel::TemperatureGain => "°F",
            Channel::Rop => "ft/hr",
            Channel::Wob => "k-lbs",
            Channel::SurfaceTorque => "psi",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.unit())
    }
}

// ---------------------------------------------------------------------------
// CellValue – a single cell of the cleaned table
// ---------------------------------------------------------------------------

/// One cell of a drilling log row.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Untyped text, kept as-is for columns that are not coerced.
    Text(String),
    Number(f64),
    /// Placeholder for a cell that failed numeric coercion or was absent.
    Missing,
}

impl CellValue {
    /// Numeric view of the cell; text and missing cells have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

// ---------------------------------------------------------------------------
// RawTable – rows as parsed, before header repair
// ---------------------------------------------------------------------------

/// Rows exactly as they came out of the CSV reader, addressed by position.
/// Includes the metadata row and the row carrying the real column names.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// CleanedTable – repaired header, numeric channels coerced
// ---------------------------------------------------------------------------

/// A drilling log with a repaired header and its numeric channels coerced.
///
/// Every row has exactly `columns.len()` cells. Loaded channels hold only
/// [`CellValue::Number`] or [`CellValue::Missing`].
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedTable {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
    /// Column index of each loaded channel, indexed by `Channel::slot`.
    channel_index: [usize; 6],
}

impl CleanedTable {
    /// Build a table, resolving every loaded channel against `columns`.
    ///
    /// Fails with [`DashboardError::Schema`] naming the first channel whose
    /// header is absent. Rows are padded with missing cells (or truncated)
    /// to the header width.
    pub fn new(
        source_name: &str,
        columns: Vec<String>,
        rows: Vec<Vec<CellValue>>,
    ) -> Result<Self, DashboardError> {
        let mut channel_index = [0usize; 6];
        for channel in Channel::LOADED {
            let header = channel.raw_header().unwrap_or_default();
            channel_index[channel.slot()] = columns
                .iter()
                .position(|c| c == header)
                .ok_or_else(|| DashboardError::Schema {
                    source_name: source_name.to_string(),
                    column: header.to_string(),
                })?;
        }

        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Missing);
                row
            })
            .collect();

        Ok(CleanedTable {
            columns,
            rows,
            channel_index,
        })
    }

    /// Same header and channel mapping, different rows.
    pub(crate) fn with_rows(&self, rows: Vec<Vec<CellValue>>) -> Self {
        CleanedTable {
            columns: self.columns.clone(),
            rows,
            channel_index: self.channel_index,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column index of a loaded channel; `None` for derived channels.
    pub fn column_of(&self, channel: Channel) -> Option<usize> {
        channel.raw_header()?;
        Some(self.channel_index[channel.slot()])
    }

    /// Numeric value of `channel` in `row`, `None` when missing.
    pub fn value(&self, row: usize, channel: Channel) -> Option<f64> {
        let col = self.column_of(channel)?;
        self.rows.get(row)?.get(col)?.as_f64()
    }

    /// Smallest and largest non-missing value of a channel.
    pub fn observed_range(&self, channel: Channel) -> Option<(f64, f64)> {
        (0..self.len())
            .filter_map(|row| self.value(row, channel))
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Number of rows whose value for `channel` is missing.
    pub fn missing_count(&self, channel: Channel) -> usize {
        let Some(col) = self.column_of(channel) else {
            return 0;
        };
        self.rows.iter().filter(|row| row[col].is_missing()).count()
    }
}

// ---------------------------------------------------------------------------
// FilterBounds – inclusive range constraints
// ---------------------------------------------------------------------------

/// Inclusive bounds on Depth, ROP and WOB. `min <= max` is not enforced; an
/// inverted pair simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterBounds {
    pub min_depth: f64,
    pub max_depth: f64,
    pub min_rop: f64,
    pub max_rop: f64,
    pub min_wob: f64,
    pub max_wob: f64,
}

impl FilterBounds {
    /// Channels constrained by the bounds.
    pub const FILTERED: [Channel; 3] = [Channel::Depth, Channel::Rop, Channel::Wob];

    /// Observed min/max of each filtered channel; a channel without any
    /// numeric value gets `[0, 0]`.
    pub fn observed(table: &CleanedTable) -> Self {
        let range = |channel| table.observed_range(channel).unwrap_or((0.0, 0.0));
        let (min_depth, max_depth) = range(Channel::Depth);
        let (min_rop, max_rop) = range(Channel::Rop);
        let (min_wob, max_wob) = range(Channel::Wob);
        FilterBounds {
            min_depth,
            max_depth,
            min_rop,
            max_rop,
            min_wob,
            max_wob,
        }
    }

    /// The `(min, max)` pair for a filtered channel.
    pub fn interval(&self, channel: Channel) -> Option<(f64, f64)> {
        match channel {
            Channel::Depth => Some((self.min_depth, self.max_depth)),
            Channel::Rop => Some((self.min_rop, self.max_rop)),
            Channel::Wob => Some((self.min_wob, self.max_wob)),
            _ => None,
        }
    }

    /// Mutable access to the `(min, max)` pair, for the slider widgets.
    pub fn interval_mut(&mut self, channel: Channel) -> Option<(&mut f64, &mut f64)> {
        match channel {
            Channel::Depth => Some((&mut self.min_depth, &mut self.max_depth)),
            Channel::Rop => Some((&mut self.min_rop, &mut self.max_rop)),
            Channel::Wob => Some((&mut self.min_wob, &mut self.max_wob)),
            _ => None,
        }
    }

    /// Inclusive containment; a missing value is never contained.
    pub fn contains(&self, channel: Channel, value: Option<f64>) -> bool {
        match (self.interval(channel), value) {
            (Some((lo, hi)), Some(v)) => lo <= v && v <= hi,
            (None, _) => true,
            (_, None) => false,
        }
    }
}

// ---------------------------------------------------------------------------
// FilteredTable – surviving rows plus the derived column
// ---------------------------------------------------------------------------

/// Rows that passed a [`FilterBounds`], in their original order, with the
/// derived temperature gain alongside.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredTable {
    table: CleanedTable,
    temperature_gain: Vec<Option<f64>>,
}

impl FilteredTable {
    pub(crate) fn new(table: CleanedTable, temperature_gain: Vec<Option<f64>>) -> Self {
        debug_assert_eq!(table.len(), temperature_gain.len());
        FilteredTable {
            table,
            temperature_gain,
        }
    }

    /// The surviving rows as a table over the original header.
    pub fn table(&self) -> &CleanedTable {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Value of any channel, including the derived temperature gain.
    pub fn value(&self, row: usize, channel: Channel) -> Option<f64> {
        match channel {
            Channel::TemperatureGain => self.temperature_gain.get(row).copied().flatten(),
            _ => self.table.value(row, channel),
        }
    }

    /// `[value, depth]` points of a channel, skipping rows where either is
    /// missing.
    pub fn depth_profile(&self, channel: Channel) -> Vec<[f64; 2]> {
        (0..self.len())
            .filter_map(|row| {
                let v = self.value(row, channel)?;
                let depth = self.value(row, Channel::Depth)?;
                Some([v, depth])
            })
            .collect()
    }

    /// Rows for the data table: every column of [`Channel::TABLE`], keeping
    /// only rows with no missing value among them.
    pub fn complete_rows(&self) -> Vec<[f64; 7]> {
        (0..self.len())
            .filter_map(|row| {
                let mut out = [0.0; 7];
                for (slot, channel) in out.iter_mut().zip(Channel::TABLE) {
                    *slot = self.value(row, channel)?;
                }
                Some(out)
            })
            .collect()
    }
}
