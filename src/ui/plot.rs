use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::chart::Chart;

// ---------------------------------------------------------------------------
// Line chart (central panel)
// ---------------------------------------------------------------------------

/// Render every series of `chart` as a labelled line.
pub fn chart_plot(ui: &mut Ui, chart: &Chart) {
    if chart.series.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No columns selected for plotting");
        });
        return;
    }

    Plot::new("time_series_plot")
        .legend(Legend::default())
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .show_grid(chart.grid)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let points: PlotPoints = series.points.iter().copied().collect();

                let line = Line::new(points)
                    .name(&series.label)
                    .color(Color32::from(series.color))
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}
