use eframe::egui::Color32;
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// SeriesColor – backend-neutral line colour
// ---------------------------------------------------------------------------

/// 8-bit sRGB colour shared by the window and image backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SeriesColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        SeriesColor { r, g, b }
    }
}

impl From<SeriesColor> for Color32 {
    fn from(c: SeriesColor) -> Self {
        Color32::from_rgb(c.r, c.g, c.b)
    }
}

impl From<SeriesColor> for RGBColor {
    fn from(c: SeriesColor) -> Self {
        RGBColor(c.r, c.g, c.b)
    }
}

// ---------------------------------------------------------------------------
// Series – one plotted line
// ---------------------------------------------------------------------------

/// One dependent column drawn against the independent column.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Source column in the table.
    pub column: String,
    /// Legend text.
    pub label: String,
    pub color: SeriesColor,
    /// `[x, y]` pairs in row order.
    pub points: Vec<[f64; 2]>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Chart – the rendered artifact
// ---------------------------------------------------------------------------

/// A fully resolved line chart, ready to be shown or exported.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
    pub width: u32,
    pub height: u32,
    pub series: Vec<Series>,
}

impl Chart {
    /// Data extent over all finite points as `(x_range, y_range)`.
    ///
    /// Empty or degenerate extents are widened so the result is always a
    /// non-empty interval a backend can build axes on.
    pub fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        let finite = self
            .series
            .iter()
            .flat_map(|s| s.points.iter())
            .filter(|p| p[0].is_finite() && p[1].is_finite());

        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        for p in finite {
            x = (x.0.min(p[0]), x.1.max(p[0]));
            y = (y.0.min(p[1]), y.1.max(p[1]));
        }
        (widen(x), widen(y))
    }
}

fn widen((lo, hi): (f64, f64)) -> (f64, f64) {
    if lo > hi {
        return (0.0, 1.0);
    }
    if (hi - lo).abs() < f64::EPSILON {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.1 };
        return (lo - pad, hi + pad);
    }
    (lo, hi)
}
