//! Static image output for a rendered [`Chart`].
//!
//! `.png` goes through the bitmap backend, `.svg` through the SVG backend;
//! both share [`draw_on_area`].

use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::model::Chart;
use crate::error::{PlotError, Result};

const LINE_WIDTH: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(ImageFormat::Png),
            "svg" => Some(ImageFormat::Svg),
            _ => None,
        }
    }
}

/// Write `chart` to `path`, choosing the format from the extension.
pub fn save_chart(chart: &Chart, path: &Path) -> Result<()> {
    let format =
        ImageFormat::from_path(path).ok_or_else(|| PlotError::UnsupportedOutput(path.to_path_buf()))?;
    let (x_range, y_range) = axis_ranges(chart)?;
    let size = (chart.width.max(1), chart.height.max(1));

    // The two backends have different error types, so map each arm.
    match format {
        ImageFormat::Png => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw_on_area(&root, chart, x_range, y_range)
                .map_err(|e| PlotError::Export(e.to_string()))?;
        }
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw_on_area(&root, chart, x_range, y_range)
                .map_err(|e| PlotError::Export(e.to_string()))?;
        }
    }

    log::info!("Chart written to {}", path.display());
    Ok(())
}

/// Axis ranges with 5% headroom on y.
///
/// Spans that overflow `f64` would leave the backend without usable ticks,
/// so they are rejected before any file is created.
fn axis_ranges(chart: &Chart) -> Result<(Range<f64>, Range<f64>)> {
    let ((x_min, x_max), (y_min, y_max)) = chart.bounds();
    let y_pad = 0.05 * (y_max - y_min);
    let y_lo = y_min - y_pad;
    let y_hi = y_max + y_pad;

    let finite = [x_min, x_max, x_max - x_min, y_lo, y_hi, y_hi - y_lo];
    if !finite.iter().all(|v| v.is_finite()) {
        return Err(PlotError::Export("data range too large to draw".to_string()));
    }
    Ok((x_min..x_max, y_lo..y_hi))
}

fn draw_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &Chart,
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, ("sans-serif", 28).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;

    {
        let mut mesh = ctx.configure_mesh();
        mesh.x_desc(chart.x_label.as_str()).y_desc(chart.y_label.as_str());
        if !chart.grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;
    }

    for series in &chart.series {
        let color = RGBColor::from(series.color);
        ctx.draw_series(LineSeries::new(
            series
                .points
                .iter()
                .filter(|p| p[0].is_finite() && p[1].is_finite())
                .map(|p| (p[0], p[1])),
            color.stroke_width(LINE_WIDTH),
        ))?
        .label(series.label.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH)));
    }

    if !chart.series.is_empty() {
        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}
