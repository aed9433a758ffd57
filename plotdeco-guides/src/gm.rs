//! The slice of a graphics method the layout engines read: projection
//! name, tick/label sources per axis, and requested world coordinates.

use plotdeco_scales::labels::TickLabelMap;
use plotdeco_template::region::{Axis, Which};

use crate::slab::AxisMeta;

/// Values beyond this are treated as "not set" in `datawc`.
pub const WORLD_COORDINATE_UNSET: f64 = 1e20;

/// Where an axis gets its tick values and label strings from.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TickSource {
    /// Generate round values covering the world coordinates.
    #[default]
    Auto,
    Off,
    /// A named tick list in the layout context.
    Named(String),
    /// An inline value-to-label map.
    Map(TickLabelMap),
}

/// Graphics-method settings driving decoration layout.
///
/// `datawc` is `[x1, x2, y1, y2]`; entries at or beyond
/// `WORLD_COORDINATE_UNSET` in magnitude fall back to the axis bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsMethod {
    pub projection: String,
    pub x_tick_labels: [TickSource; 2],
    pub x_minor_ticks: [TickSource; 2],
    pub y_tick_labels: [TickSource; 2],
    pub y_minor_ticks: [TickSource; 2],
    pub datawc: [f64; 4],
}

impl Default for GraphicsMethod {
    fn default() -> Self {
        Self {
            projection: "linear".to_string(),
            x_tick_labels: [TickSource::Auto, TickSource::Auto],
            x_minor_ticks: [TickSource::Off, TickSource::Off],
            y_tick_labels: [TickSource::Auto, TickSource::Auto],
            y_minor_ticks: [TickSource::Off, TickSource::Off],
            datawc: [WORLD_COORDINATE_UNSET; 4],
        }
    }
}

impl GraphicsMethod {
    pub fn tick_source(&self, axis: Axis, which: Which, minor: bool) -> &TickSource {
        let index = match which {
            Which::One => 0,
            Which::Two => 1,
        };
        match (axis, minor) {
            (Axis::X, false) => &self.x_tick_labels[index],
            (Axis::X, true) => &self.x_minor_ticks[index],
            (Axis::Y, false) => &self.y_tick_labels[index],
            (Axis::Y, true) => &self.y_minor_ticks[index],
        }
    }
}

/// The world coordinates a plot covers: the graphics method's `datawc`
/// where set, the axis bounds elsewhere.
pub fn world_coordinates(gm: &GraphicsMethod, x_axis: &AxisMeta, y_axis: &AxisMeta) -> [f64; 4] {
    let pick = |requested: f64, fallback: f64| {
        if requested.abs() >= WORLD_COORDINATE_UNSET {
            fallback
        } else {
            requested
        }
    };
    let (x1, x2) = x_axis.range();
    let (y1, y2) = y_axis.range();
    [
        pick(gm.datawc[0], x1),
        pick(gm.datawc[1], x2),
        pick(gm.datawc[2], y1),
        pick(gm.datawc[3], y2),
    ]
}
