//! `timeplot` - plot every column of a delimited time-series file against time.
//!
//! Usage: `timeplot [output.txt] [-x time] [-y y1,y2] [-o chart.png]`

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;

use timeplot::{load_table, render, show, ChartSpec, LoadOptions, Presentation, Table};

#[derive(Parser, Debug)]
#[command(name = "timeplot")]
#[command(about = "Line chart of time-series columns from a delimited text file")]
struct Args {
    /// Input file; first line holds column names unless --no-header
    #[arg(default_value = "output.txt")]
    path: PathBuf,

    /// Field separator: a single character, or `tab` / `space`
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Treat the first line as data and name columns column_1, column_2, ...
    #[arg(long)]
    no_header: bool,

    /// Independent (time) column; defaults to the first column
    #[arg(short = 'x', long)]
    x_column: Option<String>,

    /// Columns to plot; defaults to every other column
    #[arg(short = 'y', long, value_delimiter = ',')]
    columns: Vec<String>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    x_label: Option<String>,

    #[arg(long)]
    y_label: Option<String>,

    /// Legend text for a column, e.g. `--label y1=X`
    #[arg(long = "label", value_name = "COLUMN=LABEL", value_parser = parse_label)]
    labels: Vec<(String, String)>,

    /// Hide grid lines
    #[arg(long)]
    no_grid: bool,

    /// Figure width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Figure height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// JSON chart spec; other flags override its fields
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Write a .png or .svg instead of opening a window
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let options = LoadOptions {
        delimiter: args.delimiter,
        has_header: !args.no_header,
    };
    let table = load_table(&args.path, &options)
        .with_context(|| format!("loading {}", args.path.display()))?;

    let spec = build_spec(args, &table)?;
    let chart = render(&table, &spec).context("building chart")?;

    let presentation = match &args.output {
        Some(path) => Presentation::File(path.clone()),
        None => Presentation::Window,
    };
    show(&chart, &presentation)?;
    Ok(())
}

/// Start from `--spec` (or the table's own layout) and apply flag overrides.
fn build_spec(args: &Args, table: &Table) -> Result<ChartSpec> {
    let mut spec = match &args.spec {
        Some(path) => ChartSpec::from_json_file(path)?,
        None => {
            let names = table.column_names();
            let Some(first) = names.first() else {
                bail!("{} has no columns", args.path.display());
            };
            ChartSpec::new(*first, Vec::<String>::new())
        }
    };

    if let Some(x) = &args.x_column {
        spec.independent_column = x.clone();
    }
    if !args.columns.is_empty() {
        spec.dependent_columns = args.columns.clone();
    } else if args.spec.is_none() {
        spec.dependent_columns = table
            .column_names()
            .into_iter()
            .filter(|name| *name != spec.independent_column)
            .map(str::to_string)
            .collect();
    }

    if let Some(title) = &args.title {
        spec.title = Some(title.clone());
    }
    if let Some(label) = &args.x_label {
        spec.x_label = Some(label.clone());
    }
    if let Some(label) = &args.y_label {
        spec.y_label = Some(label.clone());
    }
    for (column, label) in &args.labels {
        spec.legend_labels.insert(column.clone(), label.clone());
    }
    if args.no_grid {
        spec.grid = false;
    }
    if let Some(width) = args.width {
        spec.width = width;
    }
    if let Some(height) = args.height {
        spec.height = height;
    }

    log::debug!("Chart spec: {spec:?}");
    Ok(spec)
}

fn parse_delimiter(s: &str) -> std::result::Result<u8, String> {
    match s {
        "tab" | "\\t" | "\t" => return Ok(b'\t'),
        "space" => return Ok(b' '),
        _ => {}
    }
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("'{s}' is not a single ASCII character")),
    }
}

fn parse_label(s: &str) -> std::result::Result<(String, String), String> {
    let (column, label) = s
        .split_once('=')
        .ok_or_else(|| format!("expected COLUMN=LABEL, got '{s}'"))?;
    if column.is_empty() {
        return Err(format!("missing column name in '{s}'"));
    }
    Ok((column.to_string(), label.to_string()))
}
