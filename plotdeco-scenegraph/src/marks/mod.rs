pub mod fill;
pub mod line;
pub mod marker;
pub mod text;

use serde::{Deserialize, Serialize};

use crate::marks::fill::FillMark;
use crate::marks::line::LineMark;
use crate::marks::marker::MarkerMark;
use crate::marks::text::TextMark;

/// A single draw-ready decoration primitive, handed to the renderer as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mark {
    Line(LineMark),
    Text(TextMark),
    Fill(FillMark),
    Marker(MarkerMark),
}

impl Mark {
    pub fn priority(&self) -> i32 {
        match self {
            Mark::Line(m) => m.priority,
            Mark::Text(m) => m.priority,
            Mark::Fill(m) => m.priority,
            Mark::Marker(m) => m.priority,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Mark::Line(m) => &m.name,
            Mark::Text(m) => &m.name,
            Mark::Fill(m) => &m.name,
            Mark::Marker(m) => &m.name,
        }
    }
}

impl From<LineMark> for Mark {
    fn from(mark: LineMark) -> Self {
        Mark::Line(mark)
    }
}

impl From<TextMark> for Mark {
    fn from(mark: TextMark) -> Self {
        Mark::Text(mark)
    }
}

impl From<FillMark> for Mark {
    fn from(mark: FillMark) -> Self {
        Mark::Fill(mark)
    }
}

impl From<MarkerMark> for Mark {
    fn from(mark: MarkerMark) -> Self {
        Mark::Marker(mark)
    }
}
