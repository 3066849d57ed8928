/// Chart layer: configuration, rendering and static export.
///
/// ```text
///   Table + ChartSpec
///        │
///        ▼
///   ┌──────────┐
///   │  render   │  validate columns, pair x with each y, assign colours
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Chart    │  title, axis labels, grid, Vec<Series>
///   └──────────┘
///        │
///        ▼
///   export (PNG / SVG)  or  app (window)
/// ```

pub mod color;
pub mod export;
pub mod model;
pub mod render;
pub mod spec;

pub use export::save_chart;
pub use model::{Chart, Series, SeriesColor};
pub use render::render;
pub use spec::ChartSpec;
