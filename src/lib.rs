//! Dining-hall menu allergen risk pipeline.
//!
//! ```text
//!  scraped .csv / .parquet
//!        │  import_menu
//!        ▼
//!  menuItems.json
//!        │  filter_menu
//!        ▼
//!  menuItems.filtered.json
//!        │  hall-risk (viewer)
//!        ▼
//!  risk scores, hall summaries, query view
//! ```

pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod highlight;
pub mod risk;
pub mod state;

pub use error::MenuError;
