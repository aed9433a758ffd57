use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "lowercase")]
pub enum FillStyle {
    #[default]
    Solid,
    Hatch,
    Pattern,
}

/// A batch of filled polygons, one per color entry.
///
/// Color values are opaque to the layout engine; the renderer resolves
/// them against whatever colormap it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FillMark {
    pub name: String,
    pub priority: i32,
    pub style: FillStyle,
    pub colors: Vec<String>,
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
}

impl FillMark {
    pub fn polygons(&self) -> impl Iterator<Item = (&[f64], &[f64])> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(xs, ys)| (xs.as_slice(), ys.as_slice()))
    }
}

impl Default for FillMark {
    fn default() -> Self {
        Self {
            name: "fill_mark".to_string(),
            priority: 1,
            style: FillStyle::Solid,
            colors: Vec::new(),
            x: Vec::new(),
            y: Vec::new(),
        }
    }
}
