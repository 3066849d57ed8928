// End-to-end: write a file, load it, render it, export it.

use std::io::Write;

use tempfile::NamedTempFile;
use timeplot::{load_table, render, show, ChartSpec, LoadOptions, PlotError, Presentation, Table};

fn write_input(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

fn load(contents: &str) -> Result<Table, PlotError> {
    let file = write_input(contents);
    load_table(file.path(), &LoadOptions::default())
}

const SCENARIO: &str = "time,x,y,z\n0,1.0,0.0,2.0\n1,0.9,0.1,1.8\n";

#[test]
fn scenario_a_load() {
    let table = load(SCENARIO).unwrap();

    assert_eq!(table.num_columns(), 4);
    assert_eq!(table.num_rows(), 2);
    assert_eq!(table.column("time").unwrap().values, vec![0.0, 1.0]);
    assert_eq!(table.column("x").unwrap().values, vec![1.0, 0.9]);
    assert_eq!(table.column("y").unwrap().values, vec![0.0, 0.1]);
    assert_eq!(table.column("z").unwrap().values, vec![2.0, 1.8]);
}

#[test]
fn scenario_b_render() {
    let table = load(SCENARIO).unwrap();
    let chart = render(&table, &ChartSpec::new("time", ["x", "y", "z"])).unwrap();

    assert_eq!(chart.series.len(), 3);
    for series in &chart.series {
        assert_eq!(series.len(), 2);
    }
    let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["x", "y", "z"]);
}

#[test]
fn scenario_c_malformed_row() {
    let err = load("time,x,y,z\n0,1.0,0.0\n").unwrap_err();
    assert!(matches!(
        err,
        PlotError::MalformedRow { line: 2, expected: 4, found: 3 }
    ));
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn scenario_d_unknown_column() {
    let table = load(SCENARIO).unwrap();
    let err = render(&table, &ChartSpec::new("time", ["q"])).unwrap_err();

    assert!(matches!(&err, PlotError::UnknownColumn(name) if name == "q"));
    assert_eq!(err.to_string(), "unknown column 'q'");
}

#[test]
fn header_only_file() {
    let table = load("time,x,y\n").unwrap();
    assert_eq!(table.num_rows(), 0);

    let chart = render(&table, &ChartSpec::new("time", ["x", "y"])).unwrap();
    assert_eq!(chart.series.len(), 2);
    assert!(chart.series.iter().all(|s| s.is_empty()));
}

#[test]
fn render_is_idempotent() {
    let table = load(SCENARIO).unwrap();
    let spec = ChartSpec::new("time", ["z", "x"]).with_title("Concentration vs Time");

    assert_eq!(render(&table, &spec).unwrap(), render(&table, &spec).unwrap());
}

#[test]
fn simulation_writer_output() {
    // Header padded with spaces, as written by the kinetics simulation.
    let table = load("Time, X, Y, Z\n0, 1, 0, 0\n0.1, 0.99, 0.0099, 0.0001\n").unwrap();
    let spec = ChartSpec::new("Time", ["X", "Y", "Z"]).with_y_label("Concentration");
    let chart = render(&table, &spec).unwrap();

    assert_eq!(chart.title, "Concentration vs Time");
    assert_eq!(chart.series[1].points[1], [0.1, 0.0099]);
}

#[test]
fn row_and_column_counts_match_input() {
    let mut text = String::from("time,y1,y2,y3,y4,y5,y6\n");
    for i in 0..50 {
        let t = i as f64 * 60.0;
        text.push_str(&format!("{t},{},{},{},{},{},{}\n", t, -t, 1e3, -2.5e-4, 0, i));
    }

    let table = load(&text).unwrap();
    assert_eq!(table.num_columns(), 7);
    assert_eq!(table.num_rows(), 50);

    let spec = ChartSpec::new("time", ["y1", "y2", "y3", "y4", "y5", "y6"]);
    let chart = render(&table, &spec).unwrap();
    assert_eq!(chart.series.len(), 6);
    assert!(chart.series.iter().all(|s| s.len() == 50));
}

#[test]
fn invalid_number_is_located() {
    let err = load("time,x\n0,1\n1,2\n2,oops\n").unwrap_err();
    match err {
        PlotError::InvalidNumber { line, column, value } => {
            assert_eq!((line, column.as_str(), value.as_str()), (4, "x", "oops"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn show_writes_svg_file() {
    let table = load(SCENARIO).unwrap();
    let chart = render(&table, &ChartSpec::new("time", ["x", "y"]).with_legend_label("x", "Reactant")).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chart.svg");
    show(&chart, &Presentation::File(out.clone())).expect("svg export");

    let svg = std::fs::read_to_string(&out).expect("output exists");
    assert!(svg.contains("Reactant"));
}

#[test]
fn show_rejects_unrepresentable_time_span() {
    let table = load("time,x\n-1e308,1\n1e308,2\n").unwrap();
    let chart = render(&table, &ChartSpec::new("time", ["x"])).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("big.svg");
    let err = show(&chart, &Presentation::File(out.clone())).unwrap_err();

    assert!(matches!(err, PlotError::Export(_)));
    assert!(!out.exists());
}
