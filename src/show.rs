use std::path::PathBuf;

use crate::app::run_window;
use crate::chart::{save_chart, Chart};
use crate::error::Result;

/// Where a chart ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// Interactive native window; blocks until closed.
    Window,
    /// PNG or SVG image, picked by extension.
    File(PathBuf),
}

/// Present `chart` to the user.
pub fn show(chart: &Chart, presentation: &Presentation) -> Result<()> {
    match presentation {
        Presentation::Window => run_window(chart),
        Presentation::File(path) => save_chart(chart, path),
    }
}
