use std::collections::HashSet;

use super::color::generate_palette;
use super::model::{Chart, Series};
use super::spec::ChartSpec;
use crate::data::model::{Column, Table};
use crate::error::{PlotError, Result};

const DEFAULT_Y_LABEL: &str = "value";

/// Build a [`Chart`] with one line per dependent column of `spec`.
///
/// Fails before producing anything if a referenced column is missing, if a
/// dependent column is the independent one, or if one is listed twice.
pub fn render(table: &Table, spec: &ChartSpec) -> Result<Chart> {
    let x_column = lookup(table, &spec.independent_column)?;

    let y_columns = spec
        .dependent_columns
        .iter()
        .map(|name| lookup(table, name))
        .collect::<Result<Vec<_>>>()?;

    let mut seen = HashSet::new();
    for name in &spec.dependent_columns {
        if *name == spec.independent_column || !seen.insert(name.as_str()) {
            return Err(PlotError::ConflictingColumn(name.clone()));
        }
    }

    if x_column.values.windows(2).any(|w| w[1] < w[0]) {
        log::warn!(
            "Column '{}' is not non-decreasing; lines are drawn in row order",
            x_column.name
        );
    }

    let palette = generate_palette(y_columns.len());
    let series: Vec<Series> = y_columns
        .iter()
        .zip(palette)
        .map(|(column, color)| {
            let points: Vec<[f64; 2]> = x_column
                .values
                .iter()
                .zip(column.values.iter())
                .map(|(&x, &y)| [x, y])
                .collect();

            log::debug!("Series '{}': {} points", column.name, points.len());

            Series {
                column: column.name.clone(),
                label: spec.legend_label(&column.name).to_string(),
                color,
                points,
            }
        })
        .collect();

    let x_label = spec
        .x_label
        .clone()
        .unwrap_or_else(|| spec.independent_column.clone());
    let y_label = spec
        .y_label
        .clone()
        .unwrap_or_else(|| DEFAULT_Y_LABEL.to_string());
    let title = spec
        .title
        .clone()
        .unwrap_or_else(|| format!("{y_label} vs {x_label}"));

    Ok(Chart {
        title,
        x_label,
        y_label,
        grid: spec.grid,
        width: spec.width,
        height: spec.height,
        series,
    })
}

fn lookup<'a>(table: &'a Table, name: &str) -> Result<&'a Column> {
    table
        .column(name)
        .ok_or_else(|| PlotError::UnknownColumn(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::from_columns(vec![
            Column::new("time", vec![0.0, 1.0]),
            Column::new("x", vec![1.0, 0.9]),
            Column::new("y", vec![0.0, 0.1]),
            Column::new("z", vec![2.0, 1.8]),
        ])
        .unwrap()
    }

    #[test]
    fn one_series_per_dependent_column() {
        let chart = render(&table(), &ChartSpec::new("time", ["x", "y", "z"])).unwrap();

        assert_eq!(chart.series.len(), 3);
        let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["x", "y", "z"]);
        assert!(chart.series.iter().all(|s| s.len() == 2));
        assert_eq!(chart.series[2].points, vec![[0.0, 2.0], [1.0, 1.8]]);
    }

    #[test]
    fn series_follow_spec_order() {
        let chart = render(&table(), &ChartSpec::new("time", ["z", "x"])).unwrap();
        let columns: Vec<&str> = chart.series.iter().map(|s| s.column.as_str()).collect();
        assert_eq!(columns, vec!["z", "x"]);
    }

    #[test]
    fn unknown_dependent_column() {
        let err = render(&table(), &ChartSpec::new("time", ["q"])).unwrap_err();
        assert!(matches!(err, PlotError::UnknownColumn(name) if name == "q"));
    }

    #[test]
    fn unknown_independent_column() {
        let err = render(&table(), &ChartSpec::new("t", ["q"])).unwrap_err();
        assert!(matches!(err, PlotError::UnknownColumn(name) if name == "t"));
    }

    #[test]
    fn independent_column_cannot_be_plotted() {
        let err = render(&table(), &ChartSpec::new("time", ["x", "time"])).unwrap_err();
        assert!(matches!(err, PlotError::ConflictingColumn(name) if name == "time"));
    }

    #[test]
    fn duplicate_dependent_column() {
        let err = render(&table(), &ChartSpec::new("time", ["x", "x"])).unwrap_err();
        assert!(matches!(err, PlotError::ConflictingColumn(name) if name == "x"));
    }

    #[test]
    fn labels_default_and_override() {
        let chart = render(&table(), &ChartSpec::new("time", ["x"])).unwrap();
        assert_eq!(chart.x_label, "time");
        assert_eq!(chart.y_label, "value");
        assert_eq!(chart.title, "value vs time");

        let spec = ChartSpec::new("time", ["x", "y"])
            .with_x_label("Time")
            .with_y_label("Concentration")
            .with_title("Concentration vs Time")
            .with_legend_label("x", "X")
            .with_grid(false);
        let chart = render(&table(), &spec).unwrap();
        assert_eq!(chart.title, "Concentration vs Time");
        assert_eq!(chart.series[0].label, "X");
        assert_eq!(chart.series[1].label, "y");
        assert!(!chart.grid);
    }

    #[test]
    fn series_colours_differ() {
        let chart = render(&table(), &ChartSpec::new("time", ["x", "y", "z"])).unwrap();
        assert_ne!(chart.series[0].color, chart.series[1].color);
        assert_ne!(chart.series[1].color, chart.series[2].color);
        assert_ne!(chart.series[0].color, chart.series[2].color);
    }

    #[test]
    fn no_dependent_columns() {
        let chart = render(&table(), &ChartSpec::new("time", Vec::<String>::new())).unwrap();
        assert!(chart.series.is_empty());
    }

    #[test]
    fn unordered_time_is_kept_in_row_order() {
        let table = Table::from_columns(vec![
            Column::new("time", vec![1.0, 0.0]),
            Column::new("x", vec![5.0, 6.0]),
        ])
        .unwrap();
        let chart = render(&table, &ChartSpec::new("time", ["x"])).unwrap();
        assert_eq!(chart.series[0].points, vec![[1.0, 5.0], [0.0, 6.0]]);
    }
}
