//! Line-and-marker legend layout: one sample segment, marker, and label
//! per entry, stacked inside the template's legend region.

use plotdeco_scenegraph::canvas::{Canvas, DisplayHandle};
use plotdeco_scenegraph::marks::line::LineMark;
use plotdeco_scenegraph::marks::marker::MarkerMark;
use plotdeco_scenegraph::marks::text::{TextAlign, TextBaseline, TextMark};
use plotdeco_template::context::LayoutContext;
use plotdeco_template::style::{LineKind, LineStyle};
use plotdeco_template::template::Template;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::PlotdecoGuidesError;

/// Direction the entries stack along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "lowercase")]
pub enum Stacking {
    #[default]
    Horizontal,
    Vertical,
}

/// One legend row: a line sample with a marker on it, then the label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub line: LineStyle,
    pub marker_symbol: String,
    pub marker_color: String,
    pub marker_size: f64,
    pub label: String,
    /// Overrides the legend region's text color for this label.
    pub label_color: Option<String>,
    /// Scratched entries get a strike line across the label.
    pub scratched: bool,
}

impl Default for LegendEntry {
    fn default() -> Self {
        Self {
            line: LineStyle::default(),
            marker_symbol: "dot".to_string(),
            marker_color: "black".to_string(),
            marker_size: 1.0,
            label: String::new(),
            label_color: None,
            scratched: false,
        }
    }
}

// Fraction of each cell the line sample occupies; the label starts
// `legend.offset` after it.
const SAMPLE_FRACTION: f64 = 0.3;

fn minmax(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Lay out a line-and-marker legend in the template's legend region.
///
/// Horizontal stacking splits the region into equal-width cells left to
/// right; vertical stacking into equal-height cells top to bottom.
pub fn draw_lines_and_markers_legend(
    template: &Template,
    entries: &[LegendEntry],
    stacking: Stacking,
    ctx: &mut LayoutContext,
    canvas: &mut dyn Canvas,
    background: bool,
) -> Result<Vec<DisplayHandle>, PlotdecoGuidesError> {
    let region = &template.legend;
    if entries.is_empty() {
        return Err(PlotdecoGuidesError::InvalidArgument(
            "legend needs at least one entry".to_string(),
        ));
    }
    let priority = region.priority;

    let saved_viewport = canvas.viewport();
    let saved_world = canvas.world_coordinate();
    canvas.set_viewport([0.0, 1.0, 0.0, 1.0]);
    canvas.set_world_coordinate([0.0, 1.0, 0.0, 1.0]);

    let (x1, x2) = minmax(region.x1, region.x2);
    let (y1, y2) = minmax(region.y1, region.y2);
    let n = entries.len() as f64;
    let cell = |i: usize| -> [f64; 4] {
        let i = i as f64;
        match stacking {
            Stacking::Horizontal => {
                let w = (x2 - x1) / n;
                [x1 + i * w, x1 + (i + 1.0) * w, y1, y2]
            }
            Stacking::Vertical => {
                let h = (y2 - y1) / n;
                [x1, x2, y2 - (i + 1.0) * h, y2 - i * h]
            }
        }
    };

    let mut displays = Vec::new();
    let mut marker = MarkerMark {
        name: "legend".to_string(),
        priority,
        ..Default::default()
    };

    for (i, entry) in entries.iter().enumerate() {
        let [cx1, cx2, cy1, cy2] = cell(i);
        let mid_y = (cy1 + cy2) / 2.0;
        let sample_end = cx1 + SAMPLE_FRACTION * (cx2 - cx1);

        let line_name = ctx.styles.create_line(entry.line.clone());
        let sample = LineMark {
            name: "legend".to_string(),
            priority,
            line: line_name.clone(),
            x: vec![vec![cx1, sample_end]],
            y: vec![vec![mid_y, mid_y]],
            ..Default::default()
        };
        let display = canvas.plot(sample.into(), background)?;
        ctx.styles.remove_line(&line_name);
        if let Some(display) = display {
            displays.push(display);
        }

        marker.symbols.push(entry.marker_symbol.clone());
        marker.colors.push(entry.marker_color.clone());
        marker.sizes.push(entry.marker_size);
        marker.x.push((cx1 + sample_end) / 2.0);
        marker.y.push(mid_y);

        let table_name = ctx.styles.create_text_table_from(&region.text_table)?;
        if let Some(color) = &entry.label_color {
            if let Some(table) = ctx.styles.text_table_mut(&table_name) {
                table.color = color.clone();
            }
        }
        let orientation_name = ctx
            .styles
            .create_text_orientation_from(&region.text_orientation)?;
        let label_x = sample_end + region.offset;
        let text = TextMark {
            name: "legend".to_string(),
            priority,
            text_table: table_name.clone(),
            text_orientation: orientation_name.clone(),
            strings: vec![entry.label.clone()],
            x: vec![label_x],
            y: vec![mid_y],
            halign: Some(TextAlign::Left),
            valign: Some(TextBaseline::Half),
            ..Default::default()
        };
        let strike_color = ctx
            .styles
            .text_table(&table_name)
            .map(|t| t.color.clone())
            .unwrap_or_else(|| "black".to_string());
        let display = canvas.plot(text.into(), background)?;
        ctx.styles.remove_text_table(&table_name);
        ctx.styles.remove_text_orientation(&orientation_name);
        if let Some(display) = display {
            displays.push(display);
        }

        if entry.scratched {
            let strike_name = ctx.styles.create_line(LineStyle {
                color: strike_color,
                width: 1.0,
                kind: LineKind::Solid,
            });
            let strike = LineMark {
                name: "legend".to_string(),
                priority,
                line: strike_name.clone(),
                x: vec![vec![label_x, cx2]],
                y: vec![vec![mid_y, mid_y]],
                ..Default::default()
            };
            let display = canvas.plot(strike.into(), background)?;
            ctx.styles.remove_line(&strike_name);
            if let Some(display) = display {
                displays.push(display);
            }
        }
    }

    if let Some(display) = canvas.plot(marker.into(), background)? {
        displays.push(display);
    }

    canvas.set_viewport(saved_viewport);
    canvas.set_world_coordinate(saved_world);
    Ok(displays)
}
