use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};

pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 600;

/// What to plot and how to label it.
///
/// Built in code with the `with_*` methods or read from JSON:
///
/// ```json
/// {
///   "independent_column": "time",
///   "dependent_columns": ["y1", "y2", "y3"],
///   "y_label": "Concentration",
///   "title": "Concentration vs Time",
///   "legend_labels": { "y1": "X" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartSpec {
    pub independent_column: String,
    #[serde(default)]
    pub dependent_columns: Vec<String>,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub y_label: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Legend text per column; columns not listed use their own name.
    #[serde(default)]
    pub legend_labels: BTreeMap<String, String>,
    #[serde(default = "default_grid")]
    pub grid: bool,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_grid() -> bool {
    true
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

impl ChartSpec {
    pub fn new<I, S>(independent_column: impl Into<String>, dependent_columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ChartSpec {
            independent_column: independent_column.into(),
            dependent_columns: dependent_columns.into_iter().map(Into::into).collect(),
            x_label: None,
            y_label: None,
            title: None,
            legend_labels: BTreeMap::new(),
            grid: true,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Read a spec from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| PlotError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|e| PlotError::SpecFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_legend_label(mut self, column: impl Into<String>, label: impl Into<String>) -> Self {
        self.legend_labels.insert(column.into(), label.into());
        self
    }

    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Legend text for `column`.
    pub fn legend_label<'a>(&'a self, column: &'a str) -> &'a str {
        self.legend_labels
            .get(column)
            .map(String::as_str)
            .unwrap_or(column)
    }
}
