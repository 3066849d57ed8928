use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between reading a file and presenting a chart.
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("cannot open {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("line {line}: expected {expected} fields but found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("line {line}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },

    #[error("column '{0}' appears more than once in the header")]
    DuplicateColumn(String),

    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    #[error("column '{0}' is plotted against itself or listed twice")]
    ConflictingColumn(String),

    #[error("invalid chart spec {}: {reason}", path.display())]
    SpecFile { path: PathBuf, reason: String },

    #[error("unsupported output format: {} (expected .png or .svg)", .0.display())]
    UnsupportedOutput(PathBuf),

    #[error("failed to draw chart: {0}")]
    Export(String),

    #[error("failed to open chart window: {0}")]
    Window(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;
