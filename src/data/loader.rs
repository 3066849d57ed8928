use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::Path;

use csv::StringRecord;

use super::model::{Column, Table};
use crate::error::{PlotError, Result};

// ---------------------------------------------------------------------------
// Load options
// ---------------------------------------------------------------------------

/// How to split the input file into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Single-byte field separator.
    pub delimiter: u8,
    /// Whether the first line holds column names.
    pub has_header: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            delimiter: b',',
            has_header: true,
        }
    }
}

impl LoadOptions {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn without_header(mut self) -> Self {
        self.has_header = false;
        self
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a delimited text file into a [`Table`].
///
/// Layout:
/// ```text
/// time,x,y,z        <- header (optional)
/// 0,1.0,0.0,2.0     <- one sample per line
/// 1,0.9,0.1,1.8
/// ```
/// Every field must parse as `f64`. Surrounding whitespace is ignored, so
/// `Time, X, Y, Z` yields the names `Time`, `X`, `Y`, `Z`.
pub fn load_table(path: &Path, options: &LoadOptions) -> Result<Table> {
    let file = File::open(path).map_err(|source| PlotError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_table(file, options, path)?;

    log::info!(
        "Loaded {} rows x {} columns from {}",
        table.num_rows(),
        table.num_columns(),
        path.display()
    );
    Ok(table)
}

/// Parse delimited text from any reader. `origin` is only used in errors.
pub(crate) fn read_table<R: io::Read>(input: R, options: &LoadOptions, origin: &Path) -> Result<Table> {
    // Quoting is off: the format has no escaping, so quotes are plain data.
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(input);

    let read_err = |source: csv::Error| PlotError::Read {
        path: origin.to_path_buf(),
        source,
    };

    let mut records = reader.records();
    let mut names: Option<Vec<String>> = None;
    let mut values: Vec<Vec<f64>> = Vec::new();

    if options.has_header {
        match records.next() {
            Some(result) => {
                let header = result.map_err(read_err)?;
                names = Some(header_names(&header)?);
                values = vec![Vec::new(); header.len()];
            }
            None => return Ok(Table::default()),
        }
    }

    for result in records {
        let record = result.map_err(read_err)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let names = names.get_or_insert_with(|| {
            values = vec![Vec::new(); record.len()];
            positional_names(record.len())
        });

        if record.len() != names.len() {
            return Err(PlotError::MalformedRow {
                line,
                expected: names.len(),
                found: record.len(),
            });
        }

        for ((field, name), column) in record.iter().zip(names.iter()).zip(values.iter_mut()) {
            let value = field.parse::<f64>().map_err(|_| PlotError::InvalidNumber {
                line,
                column: name.clone(),
                value: field.to_string(),
            })?;
            column.push(value);
        }
    }

    let columns = names
        .unwrap_or_default()
        .into_iter()
        .zip(values)
        .map(|(name, vals)| Column::new(name, vals))
        .collect();

    // Every row was checked against the column count above.
    Ok(Table::from_checked_columns(columns))
}

fn header_names(header: &StringRecord) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    header
        .iter()
        .map(|name| {
            if !seen.insert(name) {
                return Err(PlotError::DuplicateColumn(name.to_string()));
            }
            Ok(name.to_string())
        })
        .collect()
}

fn positional_names(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("column_{i}")).collect()
}
