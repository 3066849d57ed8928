//! Line charts of time-series simulation output.
//!
//! Three stages, each failing fast:
//! [`load_table`] reads a delimited text file, [`render`] turns a
//! [`Table`] and a [`ChartSpec`] into a [`Chart`], and [`show`] puts the
//! chart in a window or an image file.
//!
//! ```no_run
//! use std::path::Path;
//! use timeplot::{load_table, render, show, ChartSpec, LoadOptions, Presentation};
//!
//! let table = load_table(Path::new("output.txt"), &LoadOptions::default())?;
//! let spec = ChartSpec::new("time", ["y1", "y2", "y3"]).with_y_label("Concentration");
//! let chart = render(&table, &spec)?;
//! show(&chart, &Presentation::File("chart.png".into()))?;
//! # Ok::<(), timeplot::PlotError>(())
//! ```

pub mod app;
pub mod chart;
pub mod data;
pub mod error;
pub mod show;
mod ui;

pub use chart::{render, Chart, ChartSpec, Series, SeriesColor};
pub use data::{load_table, Column, LoadOptions, Table};
pub use error::{PlotError, Result};
pub use show::{show, Presentation};
