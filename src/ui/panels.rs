use eframe::egui::{RichText, Ui};

use crate::chart::Chart;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the chart title and a short summary of what is drawn.
pub fn top_bar(ui: &mut Ui, chart: &Chart) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(RichText::new(&chart.title).strong());

        ui.separator();

        let rows = chart.series.first().map(|s| s.len()).unwrap_or(0);
        ui.label(format!("{} series, {} samples", chart.series.len(), rows));
    });
}
