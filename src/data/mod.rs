/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  drilling log .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  repair header, coerce channels → CleanedTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ CleanedTable  │  rows aligned to header, Channel → column index
///   └──────────────┘
///        │   + FilterBounds
///        ▼
///   ┌──────────┐
///   │  filter   │  inclusive range predicates → FilteredTable (+ ΔT)
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
