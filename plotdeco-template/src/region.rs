//! The closed set of layout region kinds.
//!
//! Every region is a point or segment in [0,1]x[0,1] normalized page
//! coordinates with a visibility priority (0 = hidden) and named style
//! references into the style catalog. The kinds replace the original
//! design's runtime attribute probing: which of x/x1/x2/y/y1/y2 a region
//! carries is fixed per kind and matched statically.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "lowercase")]
pub enum ScaleAxis {
    X,
    Y,
    XY,
}

/// First (data-edge) or second (far-edge) instance of a tick/label pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Which {
    One,
    Two,
}

impl std::fmt::Display for Which {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Which::One => write!(f, "1"),
            Which::Two => write!(f, "2"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
}

/// A single text anchor point (titles, annotations, axis names).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRegion {
    pub priority: i32,
    pub x: f64,
    pub y: f64,
    pub text_table: String,
    pub text_orientation: String,
}

/// A text anchor with an attached numeric format (min/mean/max, axis
/// values).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatRegion {
    pub priority: i32,
    pub x: f64,
    pub y: f64,
    pub format: String,
    pub text_table: String,
    pub text_orientation: String,
}

/// Vertical extent of an x-axis tick; the x position comes from the tick
/// value at layout time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XTickRegion {
    pub priority: i32,
    pub y1: f64,
    pub y2: f64,
    pub line: String,
}

/// Horizontal extent of a y-axis tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YTickRegion {
    pub priority: i32,
    pub x1: f64,
    pub x2: f64,
    pub line: String,
}

/// Baseline of an x-axis label row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XLabelRegion {
    pub priority: i32,
    pub y: f64,
    pub text_table: String,
    pub text_orientation: String,
}

/// Anchor column of a y-axis label stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YLabelRegion {
    pub priority: i32,
    pub x: f64,
    pub text_table: String,
    pub text_orientation: String,
}

/// A rectangular outline or rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxRegion {
    pub priority: i32,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub line: String,
}

/// The legend/colorbar box. `arrow` is the fraction of the legend length
/// reserved for one extension arrow; `offset` is the label offset from
/// the legend edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendRegion {
    pub priority: i32,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub line: String,
    pub text_table: String,
    pub text_orientation: String,
    pub offset: f64,
    pub arrow: f64,
}

/// The data-plotting area. `ratio` records the last y/x ratio requested
/// through the ratio operation (negated when boxes/ticks were adjusted
/// too); 0 means none was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRegion {
    pub priority: i32,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub ratio: f64,
}

impl DataRegion {
    pub fn span(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => (self.x1, self.x2),
            Axis::Y => (self.y1, self.y2),
        }
    }
}

/// Borrowed view of one region, tagged by kind.
pub enum RegionRef<'a> {
    Text(&'a TextRegion),
    Format(&'a FormatRegion),
    XTick(&'a XTickRegion),
    YTick(&'a YTickRegion),
    XLabel(&'a XLabelRegion),
    YLabel(&'a YLabelRegion),
    Box(&'a BoxRegion),
    Legend(&'a LegendRegion),
    Data(&'a DataRegion),
}

/// Mutable view of one region, tagged by kind.
pub enum RegionMut<'a> {
    Text(&'a mut TextRegion),
    Format(&'a mut FormatRegion),
    XTick(&'a mut XTickRegion),
    YTick(&'a mut YTickRegion),
    XLabel(&'a mut XLabelRegion),
    YLabel(&'a mut YLabelRegion),
    Box(&'a mut BoxRegion),
    Legend(&'a mut LegendRegion),
    Data(&'a mut DataRegion),
}

impl<'a> RegionMut<'a> {
    pub fn priority_mut(self) -> &'a mut i32 {
        match self {
            RegionMut::Text(r) => &mut r.priority,
            RegionMut::Format(r) => &mut r.priority,
            RegionMut::XTick(r) => &mut r.priority,
            RegionMut::YTick(r) => &mut r.priority,
            RegionMut::XLabel(r) => &mut r.priority,
            RegionMut::YLabel(r) => &mut r.priority,
            RegionMut::Box(r) => &mut r.priority,
            RegionMut::Legend(r) => &mut r.priority,
            RegionMut::Data(r) => &mut r.priority,
        }
    }

    /// The text orientation reference, for kinds that carry text.
    pub fn text_orientation_mut(self) -> Option<&'a mut String> {
        match self {
            RegionMut::Text(r) => Some(&mut r.text_orientation),
            RegionMut::Format(r) => Some(&mut r.text_orientation),
            RegionMut::XLabel(r) => Some(&mut r.text_orientation),
            RegionMut::YLabel(r) => Some(&mut r.text_orientation),
            RegionMut::Legend(r) => Some(&mut r.text_orientation),
            _ => None,
        }
    }
}
