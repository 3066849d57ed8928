use eframe::egui;

use crate::chart::Chart;
use crate::error::{PlotError, Result};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Read-only window around a single rendered chart.
pub struct ChartViewerApp {
    pub chart: Chart,
}

impl ChartViewerApp {
    pub fn new(chart: Chart) -> Self {
        Self { chart }
    }
}

impl eframe::App for ChartViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.chart);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_plot(ui, &self.chart);
        });
    }
}

/// Open a native window showing `chart`; blocks until it is closed.
pub fn run_window(chart: &Chart) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([chart.width as f32, chart.height as f32])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    let chart = chart.clone();
    let title = chart.title.clone();
    log::info!("Opening chart window '{title}'");

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ChartViewerApp::new(chart)))),
    )
    .map_err(|e| PlotError::Window(e.to_string()))
}
