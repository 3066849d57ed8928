/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///   output.txt (delimited text)
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  split + parse every field → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table   │  named f64 columns of equal length
///   └──────────┘
/// ```

pub mod loader;
pub mod model;

pub use loader::{load_table, LoadOptions};
pub use model::{Column, Table};
