use plotdeco_scenegraph::marks::text::{TextAlign, TextBaseline};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LineKind {
    Solid,
    Dash,
    Dot,
    DashDot,
    LongDash,
}

/// A named line style. Regions reference these by name; many regions may
/// share one style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
    pub kind: LineKind,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: "black".to_string(),
            width: 1.0,
            kind: LineKind::Solid,
        }
    }
}

/// Font/color half of a text style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextTable {
    pub font: String,
    pub color: String,
}

impl Default for TextTable {
    fn default() -> Self {
        Self {
            font: "default".to_string(),
            color: "black".to_string(),
        }
    }
}

/// Size/angle/alignment half of a text style. `height` is the part the
/// font-scaling pass multiplies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextOrientation {
    pub height: f64,
    pub angle: f64,
    pub halign: TextAlign,
    pub valign: TextBaseline,
}

impl Default for TextOrientation {
    fn default() -> Self {
        Self {
            height: 14.0,
            angle: 0.0,
            halign: TextAlign::Left,
            valign: TextBaseline::Half,
        }
    }
}
