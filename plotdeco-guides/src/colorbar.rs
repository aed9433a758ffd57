//! Colorbar layout: one filled box per color in the legend region, with
//! optional extension arrows, an outline, internal level ticks, and
//! level labels.

use itertools::Itertools;
use ordered_float::OrderedFloat;
use plotdeco_scales::labels::{format_g, nice_labels, TickLabelMap};
use plotdeco_scenegraph::canvas::{Canvas, DisplayHandle};
use plotdeco_scenegraph::marks::fill::{FillMark, FillStyle};
use plotdeco_scenegraph::marks::line::LineMark;
use plotdeco_scenegraph::marks::text::{TextAlign, TextBaseline, TextMark};
use plotdeco_template::context::LayoutContext;
use plotdeco_template::template::Template;

use crate::error::PlotdecoGuidesError;

/// Values beyond this magnitude at either end mark an open-ended scale.
const LEVEL_SENTINEL: f64 = 1e19;

/// The level values the colors represent.
///
/// Contiguous pairs collapse to the equivalent boundary list; truly
/// non-contiguous pairs get one separate box per pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Levels {
    /// `n + 1` boundaries for `n` colors.
    Boundaries(Vec<f64>),
    /// Explicit `(low, high)` per color.
    Pairs(Vec<(f64, f64)>),
}

impl Levels {
    fn collapse(self) -> Levels {
        match self {
            Levels::Pairs(pairs)
                if !pairs.is_empty() && pairs.windows(2).all(|w| w[0].1 == w[1].0) =>
            {
                let mut bounds: Vec<f64> = pairs.iter().map(|p| p.0).collect();
                bounds.push(pairs[pairs.len() - 1].1);
                Levels::Boundaries(bounds)
            }
            other => other,
        }
    }

    fn ends(&self) -> Option<(f64, f64)> {
        match self {
            Levels::Boundaries(b) => Some((*b.first()?, *b.last()?)),
            Levels::Pairs(p) => Some((p.first()?.0, p.last()?.1)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ColorBarOptions {
    /// Explicit labels; by default every level gets its round label.
    pub legend: Option<TickLabelMap>,
    pub extend_low: bool,
    pub extend_high: bool,
    /// Overrides the legend region priority.
    pub priority: Option<i32>,
    pub style: FillStyle,
}

// a <= b / a >= b up to single-precision epsilon, which is all label
// placement needs
fn epsilon_lte(a: f64, b: f64) -> bool {
    f64::from(f32::EPSILON) > a - b
}

fn epsilon_gte(a: f64, b: f64) -> bool {
    -f64::from(f32::EPSILON) < a - b
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-8 + 1e-5 * b.abs()
}

/// Lay out the colorbar in the template's legend region.
///
/// `colors` are opaque color names, one box each. Sentinel level values
/// beyond `LEVEL_SENTINEL` force the matching extension arrow on.
pub fn draw_color_bar(
    template: &Template,
    colors: &[String],
    levels: Levels,
    options: &ColorBarOptions,
    ctx: &mut LayoutContext,
    canvas: &mut dyn Canvas,
    background: bool,
) -> Result<Vec<DisplayHandle>, PlotdecoGuidesError> {
    let legend_region = &template.legend;
    let nbox = colors.len();
    if nbox == 0 {
        return Err(PlotdecoGuidesError::InvalidArgument(
            "colorbar needs at least one color".to_string(),
        ));
    }
    let levels = levels.collapse();
    if matches!(&levels, Levels::Boundaries(b) if b.len() < 2) {
        return Err(PlotdecoGuidesError::InvalidArgument(
            "colorbar needs at least two level boundaries".to_string(),
        ));
    }
    let (l0, l1) = levels.ends().ok_or_else(|| {
        PlotdecoGuidesError::InvalidArgument("colorbar needs at least one level".to_string())
    })?;
    let ext_1 = options.extend_low || l0 < -LEVEL_SENTINEL;
    let ext_2 = options.extend_high || l1 > LEVEL_SENTINEL;
    let arrows = usize::from(ext_1) + usize::from(ext_2);
    if nbox <= arrows {
        return Err(PlotdecoGuidesError::InvalidArgument(format!(
            "{} colors cannot fit {} extension arrows",
            nbox, arrows
        )));
    }
    let priority = options.priority.unwrap_or(legend_region.priority);

    let saved_viewport = canvas.viewport();
    let saved_world = canvas.world_coordinate();
    canvas.set_viewport([0.0, 1.0, 0.0, 1.0]);
    canvas.set_world_coordinate([0.0, 1.0, 0.0, 1.0]);

    let d_x = (legend_region.x2 - legend_region.x1).abs();
    let d_y = (legend_region.y2 - legend_region.y1).abs();
    let horizontal = d_x > d_y;
    let (length, thick, mut start_length, start_thick) = if horizontal {
        (
            d_x,
            d_y,
            legend_region.x1.min(legend_region.x2),
            legend_region.y1.min(legend_region.y2),
        )
    } else {
        (
            d_y,
            d_x,
            legend_region.y1.min(legend_region.y2),
            legend_region.x1.min(legend_region.x2),
        )
    };

    let arrow_length = legend_region.arrow * length;
    let mut box_length = if ext_1 && ext_2 {
        (length - 2.0 * arrow_length) / (nbox as f64 - 2.0)
    } else if ext_1 || ext_2 {
        (length - arrow_length) / (nbox as f64 - 1.0)
    } else {
        length / nbox as f64
    };

    // One polygon per color; arrows become triangles at the ends.
    let mut along: Vec<Vec<f64>> = Vec::with_capacity(nbox);
    let mut across: Vec<Vec<f64>> = Vec::with_capacity(nbox);
    let mut adjust = 0.0;
    for i in 0..nbox {
        if ext_1 && i == 0 {
            along.push(vec![
                start_length + arrow_length,
                start_length,
                start_length + arrow_length,
            ]);
            across.push(vec![
                start_thick,
                start_thick + thick / 2.0,
                start_thick + thick,
            ]);
            start_length += arrow_length;
            adjust = -1.0;
        } else if ext_2 && i == nbox - 1 {
            let base = start_length + box_length * (i as f64 + adjust);
            along.push(vec![base, base + arrow_length, base]);
            across.push(vec![
                start_thick,
                start_thick + thick / 2.0,
                start_thick + thick,
            ]);
        } else {
            let lo = start_length + box_length * (i as f64 + adjust);
            let hi = start_length + box_length * (i as f64 + adjust + 1.0);
            along.push(vec![lo, hi, hi, lo]);
            across.push(vec![
                start_thick,
                start_thick,
                start_thick + thick,
                start_thick + thick,
            ]);
        }
    }

    let fill = FillMark {
        name: "legend".to_string(),
        priority,
        style: options.style,
        colors: colors.to_vec(),
        x: if horizontal { along.clone() } else { across.clone() },
        y: if horizontal { across.clone() } else { along.clone() },
    };
    let mut displays = Vec::new();
    if let Some(display) = canvas.plot(fill.into(), background)? {
        displays.push(display);
    }

    // Outline, internal ticks, and arrow edges all land in one line mark.
    let mut line_along: Vec<Vec<f64>> = Vec::new();
    let mut line_across: Vec<Vec<f64>> = Vec::new();
    let mut label_along: Vec<f64> = Vec::new();
    let mut label_across: Vec<f64> = Vec::new();
    let mut strings: Vec<String> = Vec::new();

    let mut levels_length = length;
    let mut levels = levels;
    if ext_1 {
        line_across.push(across[0].clone());
        line_along.push(along[0].clone());
        match &mut levels {
            Levels::Boundaries(b) => {
                b.remove(0);
            }
            Levels::Pairs(p) => {
                p.remove(0);
            }
        }
        levels_length -= arrow_length;
    }
    if ext_2 {
        line_across.push(across[nbox - 1].clone());
        line_along.push(along[nbox - 1].clone());
        match &mut levels {
            Levels::Boundaries(b) => {
                b.pop();
            }
            Levels::Pairs(p) => {
                p.pop();
            }
        }
        levels_length -= arrow_length;
    }
    line_across.push(vec![
        start_thick,
        start_thick,
        start_thick + thick,
        start_thick + thick,
        start_thick,
    ]);
    line_along.push(vec![
        start_length,
        start_length + levels_length,
        start_length + levels_length,
        start_length,
        start_length,
    ]);

    match &levels {
        Levels::Pairs(pairs) => {
            // Separate boxes: a tick at each box start, labels above and
            // below the box center.
            for (i, (low, high)) in pairs.iter().enumerate() {
                let loc = i as f64 * box_length + start_length;
                line_along.push(vec![loc, loc]);
                line_across.push(vec![start_thick, start_thick + thick]);
                let center = start_length + (i as f64 + 0.5) * box_length;
                let low_label = match &options.legend {
                    Some(map) => map.get(&OrderedFloat(*low)).cloned(),
                    None => Some(format_g(*low)),
                };
                if let Some(label) = low_label {
                    strings.push(label);
                    label_along.push(center);
                    label_across.push(start_thick + thick * 1.4);
                }
                let high_label = match &options.legend {
                    Some(map) => map.get(&OrderedFloat(*high)).cloned(),
                    None => Some(format_g(*high)),
                };
                if let Some(label) = high_label {
                    strings.push(label);
                    label_along.push(center);
                    label_across.push(start_thick - thick * 0.6);
                }
            }
        }
        Levels::Boundaries(bounds) if bounds.len() >= 2 => {
            let legend = match &options.legend {
                Some(map) => map.clone(),
                None => nice_labels(bounds),
            };
            let last = bounds[bounds.len() - 1];
            let comparison: fn(f64, f64) -> bool = if bounds[0] < bounds[1] {
                epsilon_lte
            } else {
                epsilon_gte
            };
            box_length = levels_length / (bounds.len() as f64 - 1.0);

            for key in legend.keys().copied().sorted() {
                let value = key.into_inner();
                if !(comparison(bounds[0], value) && comparison(value, last)) {
                    continue;
                }
                for i in 0..bounds.len() - 1 {
                    if comparison(bounds[i], value) && comparison(value, bounds[i + 1]) {
                        let mut location = i as f64 * box_length;
                        location +=
                            (value - bounds[i]) / (bounds[i + 1] - bounds[i]) * box_length;
                        location += start_length;
                        // no tick on top of the outline ends
                        if !(close(value, bounds[0]) || close(value, last)) {
                            line_along.push(vec![location, location]);
                            line_across.push(vec![start_thick, start_thick + thick]);
                        }
                        label_along.push(location);
                        label_across.push(start_thick + thick + legend_region.offset);
                        strings.push(legend[&key].clone());
                        break;
                    }
                }
            }
        }
        // both ends consumed by arrows, nothing left to label
        Levels::Boundaries(_) => {}
    }

    let line_name = ctx.styles.create_line_from(&legend_region.line)?;
    let table_name = ctx
        .styles
        .create_text_table_from(&legend_region.text_table)?;
    let orientation_name = ctx
        .styles
        .create_text_orientation_from(&legend_region.text_orientation)?;

    let line = LineMark {
        name: "legend".to_string(),
        priority,
        line: line_name.clone(),
        x: if horizontal { line_along.clone() } else { line_across.clone() },
        y: if horizontal { line_across } else { line_along },
        ..Default::default()
    };
    if let Some(display) = canvas.plot(line.into(), background)? {
        displays.push(display);
    }
    let text = TextMark {
        name: "legend".to_string(),
        priority,
        text_table: table_name.clone(),
        text_orientation: orientation_name.clone(),
        strings,
        x: if horizontal { label_along.clone() } else { label_across.clone() },
        y: if horizontal { label_across } else { label_along },
        halign: horizontal.then_some(TextAlign::Center),
        valign: (!horizontal).then_some(TextBaseline::Half),
        ..Default::default()
    };
    if let Some(display) = canvas.plot(text.into(), background)? {
        displays.push(display);
    }

    ctx.styles.remove_line(&line_name);
    ctx.styles.remove_text_table(&table_name);
    ctx.styles.remove_text_orientation(&orientation_name);
    canvas.set_viewport(saved_viewport);
    canvas.set_world_coordinate(saved_world);
    Ok(displays)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use plotdeco_scenegraph::canvas::RecordingCanvas;
    use plotdeco_scenegraph::marks::Mark;

    fn colors(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("c{}", i)).collect()
    }

    fn fills(canvas: &RecordingCanvas) -> Vec<&FillMark> {
        canvas
            .marks()
            .iter()
            .filter_map(|m| match m {
                Mark::Fill(f) => Some(f),
                _ => None,
            })
            .collect()
    }

    fn texts(canvas: &RecordingCanvas) -> Vec<&TextMark> {
        canvas
            .marks()
            .iter()
            .filter_map(|m| match m {
                Mark::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_boxes_and_labels_for_plain_levels() {
        let template = Template::default_template();
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        draw_color_bar(
            &template,
            &colors(2),
            Levels::Boundaries(vec![0.0, 1.0, 2.0]),
            &ColorBarOptions::default(),
            &mut ctx,
            &mut canvas,
            false,
        )
        .unwrap();
        let fill = fills(&canvas)[0];
        assert_eq!(fill.x.len(), 2);
        assert_eq!(fill.x[0].len(), 4);
        assert_approx_eq!(f64, fill.x[0][0], 0.05);
        assert_approx_eq!(f64, fill.x[0][1], 0.5);
        assert_approx_eq!(f64, fill.x[1][1], 0.95);
        let text = texts(&canvas)[0];
        assert_eq!(text.strings, vec!["0", "1", "2"]);
        assert_approx_eq!(f64, text.x[0], 0.05);
        assert_approx_eq!(f64, text.x[1], 0.5);
        assert_approx_eq!(f64, text.x[2], 0.95);
        // labels sit offset above the bar
        assert_approx_eq!(f64, text.y[0], 0.13 + 0.03 + 0.01);
        assert_eq!(text.halign, Some(TextAlign::Center));
    }

    #[test]
    fn test_sentinel_level_becomes_arrow() {
        let template = Template::default_template();
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        draw_color_bar(
            &template,
            &colors(3),
            Levels::Boundaries(vec![-1e20, 0.0, 1.0, 2.0]),
            &ColorBarOptions::default(),
            &mut ctx,
            &mut canvas,
            false,
        )
        .unwrap();
        let fill = fills(&canvas)[0];
        assert_eq!(fill.x.len(), 3);
        // leading triangle, then quads
        assert_eq!(fill.x[0].len(), 3);
        assert_eq!(fill.x[1].len(), 4);
        assert_eq!(fill.x[2].len(), 4);
        // the arrow tip points at the legend start
        assert_approx_eq!(f64, fill.x[0][1], 0.05);
        // labels only for the finite levels
        assert_eq!(texts(&canvas)[0].strings, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_arrows_on_both_ends() {
        let template = Template::default_template();
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        draw_color_bar(
            &template,
            &colors(4),
            Levels::Boundaries(vec![0.0, 1.0, 2.0]),
            &ColorBarOptions {
                extend_low: true,
                extend_high: true,
                ..Default::default()
            },
            &mut ctx,
            &mut canvas,
            false,
        )
        .unwrap();
        let fill = fills(&canvas)[0];
        assert_eq!(fill.x.len(), 4);
        assert_eq!(fill.x[0].len(), 3);
        assert_eq!(fill.x[3].len(), 3);
        let arrow = template.legend.arrow * 0.9;
        let box_length = (0.9 - 2.0 * arrow) / 2.0;
        assert_approx_eq!(f64, fill.x[1][0], 0.05 + arrow);
        assert_approx_eq!(f64, fill.x[1][1], 0.05 + arrow + box_length, epsilon = 1e-12);
    }

    #[test]
    fn test_contiguous_pairs_collapse() {
        assert_eq!(
            Levels::Pairs(vec![(0.0, 1.0), (1.0, 2.0)]).collapse(),
            Levels::Boundaries(vec![0.0, 1.0, 2.0])
        );
        let gap = Levels::Pairs(vec![(0.0, 1.0), (3.0, 4.0)]);
        assert_eq!(gap.clone().collapse(), gap);
    }

    #[test]
    fn test_non_contiguous_pairs_label_above_and_below() {
        let template = Template::default_template();
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        draw_color_bar(
            &template,
            &colors(2),
            Levels::Pairs(vec![(0.0, 1.0), (3.0, 4.0)]),
            &ColorBarOptions::default(),
            &mut ctx,
            &mut canvas,
            false,
        )
        .unwrap();
        let text = texts(&canvas)[0];
        assert_eq!(text.strings, vec!["0", "1", "3", "4"]);
        // low label above the box, high label below
        assert!(text.y[0] > 0.16);
        assert!(text.y[1] < 0.13);
        // both anchored at the box center
        assert_approx_eq!(f64, text.x[0], 0.05 + 0.225);
    }

    #[test]
    fn test_vertical_legend_swaps_axes() {
        let mut template = Template::new_from("t", &Template::default_template());
        template.legend.x1 = 0.88;
        template.legend.x2 = 0.92;
        template.legend.y1 = 0.2;
        template.legend.y2 = 0.8;
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        draw_color_bar(
            &template,
            &colors(3),
            Levels::Boundaries(vec![0.0, 1.0, 2.0, 3.0]),
            &ColorBarOptions::default(),
            &mut ctx,
            &mut canvas,
            false,
        )
        .unwrap();
        let fill = fills(&canvas)[0];
        assert_approx_eq!(f64, fill.y[0][0], 0.2);
        assert_approx_eq!(f64, fill.y[0][1], 0.4, epsilon = 1e-12);
        assert_eq!(texts(&canvas)[0].valign, Some(TextBaseline::Half));
    }

    #[test]
    fn test_style_catalog_and_canvas_state_restored() {
        let template = Template::default_template();
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        canvas.set_viewport([0.1, 0.9, 0.1, 0.9]);
        canvas.set_world_coordinate([-180.0, 180.0, -90.0, 90.0]);
        let before = ctx.styles.len();
        draw_color_bar(
            &template,
            &colors(2),
            Levels::Boundaries(vec![0.0, 1.0, 2.0]),
            &ColorBarOptions::default(),
            &mut ctx,
            &mut canvas,
            false,
        )
        .unwrap();
        assert_eq!(ctx.styles.len(), before);
        assert_eq!(canvas.viewport(), [0.1, 0.9, 0.1, 0.9]);
        assert_eq!(canvas.world_coordinate(), [-180.0, 180.0, -90.0, 90.0]);
    }

    #[test]
    fn test_too_many_arrows_is_an_error() {
        let template = Template::default_template();
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        let result = draw_color_bar(
            &template,
            &colors(2),
            Levels::Boundaries(vec![0.0, 1.0, 2.0]),
            &ColorBarOptions {
                extend_low: true,
                extend_high: true,
                ..Default::default()
            },
            &mut ctx,
            &mut canvas,
            false,
        );
        assert!(matches!(
            result,
            Err(PlotdecoGuidesError::InvalidArgument(_))
        ));
    }
}
