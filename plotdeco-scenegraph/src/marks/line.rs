use serde::{Deserialize, Serialize};

/// One or more polylines sharing a line style.
///
/// Coordinates are normalized page coordinates unless `world` is set, in
/// which case they are world coordinates and the renderer is expected to
/// project them through `viewport`/`world` itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LineMark {
    pub name: String,
    pub priority: i32,
    /// Name of a line style in the style catalog.
    pub line: String,
    pub projection: String,
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub viewport: Option<[f64; 4]>,
    pub world: Option<[f64; 4]>,
}

impl LineMark {
    pub fn segments(&self) -> impl Iterator<Item = (&[f64], &[f64])> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(xs, ys)| (xs.as_slice(), ys.as_slice()))
    }
}

impl Default for LineMark {
    fn default() -> Self {
        Self {
            name: "line_mark".to_string(),
            priority: 1,
            line: "default".to_string(),
            projection: "linear".to_string(),
            x: Vec::new(),
            y: Vec::new(),
            viewport: None,
            world: None,
        }
    }
}
