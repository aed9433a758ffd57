use serde::{Deserialize, Serialize};

/// A batch of marker symbols, one per point.
///
/// Symbol and color values are opaque to the layout engine; the renderer
/// resolves them against its own symbol and color tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MarkerMark {
    pub name: String,
    pub priority: i32,
    pub symbols: Vec<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<f64>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Default for MarkerMark {
    fn default() -> Self {
        Self {
            name: "marker_mark".to_string(),
            priority: 1,
            symbols: Vec::new(),
            colors: Vec::new(),
            sizes: Vec::new(),
            x: Vec::new(),
            y: Vec::new(),
        }
    }
}
