/// Data layer: core types, import, exclusion and query filtering.
///
/// Architecture:
/// ```text
///  .csv / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  rows → deduplicated MenuItem list → JSON
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ exclusion  │  keyword match → kept / removed
///   └───────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ MenuDataset  │  scored items, hall summaries
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  search / hall / risk query → visible indices
///   └──────────┘
/// ```

pub mod exclusion;
pub mod filter;
pub mod loader;
pub mod model;
