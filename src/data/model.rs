// ---------------------------------------------------------------------------
// Column – one named sequence of samples
// ---------------------------------------------------------------------------

/// A single named numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Column {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded file
// ---------------------------------------------------------------------------

/// Named columns of equal length, in file order.
///
/// Built through [`Table::from_columns`], which checks that every column
/// has the same number of rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Returns `None` when the columns disagree on length.
    pub fn from_columns(columns: Vec<Column>) -> Option<Self> {
        let rows = columns.first().map(Column::len).unwrap_or(0);
        if columns.iter().any(|c| c.len() != rows) {
            return None;
        }
        Some(Table { columns, rows })
    }

    /// For callers that already checked every column against the row count.
    pub(crate) fn from_checked_columns(columns: Vec<Column>) -> Self {
        let rows = columns.first().map(Column::len).unwrap_or(0);
        assert!(
            columns.iter().all(|c| c.len() == rows),
            "columns of unequal length"
        );
        Table { columns, rows }
    }

    /// Look up a column by exact name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of samples (data lines).
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Whether the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}
