/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate rows → LaunchTable
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ LaunchTable  │  Vec<LaunchRecord>, site / booster index, payload bounds
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site + open payload interval → row indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
