use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "lowercase")]
pub enum TextBaseline {
    Top,
    Half,
    Bottom,
}

/// A batch of strings sharing one text style pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TextMark {
    pub name: String,
    pub priority: i32,
    /// Names of text styles in the style catalog.
    pub text_table: String,
    pub text_orientation: String,
    pub projection: String,
    pub strings: Vec<String>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Per-mark alignment overrides on top of the orientation style.
    pub halign: Option<TextAlign>,
    pub valign: Option<TextBaseline>,
    pub viewport: Option<[f64; 4]>,
    pub world: Option<[f64; 4]>,
}

impl Default for TextMark {
    fn default() -> Self {
        Self {
            name: "text_mark".to_string(),
            priority: 1,
            text_table: "default".to_string(),
            text_orientation: "default".to_string(),
            projection: "linear".to_string(),
            strings: Vec::new(),
            x: Vec::new(),
            y: Vec::new(),
            halign: None,
            valign: None,
            viewport: None,
            world: None,
        }
    }
}
