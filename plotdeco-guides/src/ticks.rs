//! Tick and tick-label layout for one axis pass.
//!
//! A pass covers one axis, one side (1 = data edge, 2 = far edge), and
//! either the major or the minor tick set. Linear projections are mapped
//! to page coordinates here; for the other families the marks carry raw
//! world coordinates plus the viewport/world frame and the renderer
//! projects them.

use indexmap::IndexMap;
use plotdeco_scales::labels::{nice_labels, nice_scale, TickLabelMap};
use plotdeco_scenegraph::canvas::{Canvas, DisplayHandle};
use plotdeco_scenegraph::marks::line::LineMark;
use plotdeco_scenegraph::marks::text::TextMark;
use plotdeco_template::context::LayoutContext;
use plotdeco_template::projection::ProjectionKind;
use plotdeco_template::region::{Axis, Which};
use plotdeco_template::template::Template;

use crate::error::PlotdecoGuidesError;
use crate::gm::{GraphicsMethod, TickSource};

fn minmax(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// The tick values and label strings for one pass.
fn resolve_tick_map(
    source: &TickSource,
    ctx: &LayoutContext,
    axis: Axis,
    which: Which,
    world: [f64; 4],
) -> TickLabelMap {
    match source {
        TickSource::Auto => {
            let (w1, w2) = match axis {
                Axis::X => (world[0], world[1]),
                Axis::Y => (world[2], world[3]),
            };
            let mut map = nice_labels(&nice_scale(w1, w2));
            // The far side shows ticks only, no label text.
            if which == Which::Two {
                for label in map.values_mut() {
                    label.clear();
                }
            }
            map
        }
        TickSource::Off => TickLabelMap::new(),
        TickSource::Named(name) => match ctx.tick_lists.get(name) {
            Some(map) => map.clone(),
            None => {
                log::warn!("no tick list named '{}', drawing no ticks", name);
                TickLabelMap::new()
            }
        },
        TickSource::Map(map) => map.clone(),
    }
}

/// Drop tick values outside the world coordinates, inclusive and aware
/// of descending axes.
fn prune_to_world(map: &mut TickLabelMap, w1: f64, w2: f64) {
    map.retain(|value, _| {
        let v = value.into_inner();
        if w2 > w1 {
            w1 <= v && v <= w2
        } else {
            w1 >= v && v >= w2
        }
    });
}

/// Lay out one tick pass and hand the resulting marks to the canvas.
///
/// `viewport` is the page-coordinate frame of the data area and `world`
/// the world coordinates it spans, both as `[x1, x2, y1, y2]`.
#[allow(clippy::too_many_arguments)]
pub fn draw_ticks(
    template: &Template,
    gm: &GraphicsMethod,
    ctx: &mut LayoutContext,
    canvas: &mut dyn Canvas,
    axis: Axis,
    which: Which,
    minor: bool,
    viewport: [f64; 4],
    world: [f64; 4],
    background: bool,
) -> Result<Vec<DisplayHandle>, PlotdecoGuidesError> {
    let kind = ctx.projections.kind(&gm.projection)?;
    let mut map = resolve_tick_map(gm.tick_source(axis, which, minor), ctx, axis, which, world);
    let (w1, w2) = match axis {
        Axis::X => (world[0], world[1]),
        Axis::Y => (world[2], world[3]),
    };
    prune_to_world(&mut map, w1, w2);

    let dx = (world[1] - world[0]) / (viewport[1] - viewport[0]);
    let dy = (world[3] - world[2]) / (viewport[3] - viewport[2]);
    let (xmn, xmx) = minmax(world[0], world[1]);
    let (ymn, ymx) = minmax(world[2], world[3]);
    let data = &template.data;

    let line_name = match axis {
        Axis::X => ctx
            .styles
            .create_line_from(&template.x_tick_region(which, minor).line)?,
        Axis::Y => ctx
            .styles
            .create_line_from(&template.y_tick_region(which, minor).line)?,
    };
    let text_names = if minor {
        None
    } else {
        let (table, orientation) = match axis {
            Axis::X => {
                let r = template.x_label_region(which);
                (&r.text_table, &r.text_orientation)
            }
            Axis::Y => {
                let r = template.y_label_region(which);
                (&r.text_table, &r.text_orientation)
            }
        };
        Some((
            ctx.styles.create_text_table_from(table)?,
            ctx.styles.create_text_orientation_from(orientation)?,
        ))
    };

    let mut xs: Vec<Vec<f64>> = Vec::new();
    let mut ys: Vec<Vec<f64>> = Vec::new();
    let mut txs: Vec<f64> = Vec::new();
    let mut tys: Vec<f64> = Vec::new();
    let mut tstring: Vec<String> = Vec::new();
    let tick_priority;
    let mut label_priority;
    let mut label_viewport = None;

    match axis {
        Axis::X => {
            let region = template.x_tick_region(which, minor);
            let label = template.x_label_region(which);
            tick_priority = region.priority;
            label_priority = label.priority;
            for (value, text) in &map {
                let v = value.into_inner();
                if !(xmn <= v && v <= xmx) {
                    continue;
                }
                match kind {
                    ProjectionKind::Linear => {
                        let sx = (v - world[0]) / dx + viewport[0];
                        xs.push(vec![sx, sx]);
                        ys.push(vec![region.y1, region.y2]);
                        if !minor {
                            txs.push(sx);
                            tys.push(label.y);
                            tstring.push(text.clone());
                        }
                    }
                    // No straight bottom edge to anchor ticks on.
                    ProjectionKind::Elliptical => {}
                    _ => {
                        xs.push(vec![v, v]);
                        let end = world[2]
                            + (world[3] - world[2]) * (region.y2 - region.y1)
                                / (data.y2 - data.y1);
                        ys.push(vec![world[2], end]);
                        if !minor {
                            txs.push(v);
                            tys.push(world[3]);
                            tstring.push(text.clone());
                        }
                    }
                }
            }
            if !kind.is_linear() {
                if kind.is_round() {
                    // Labels land just outside the data frame.
                    let (vx1, vx2) = minmax(data.x1, data.x2);
                    let (vy1, vy2) = minmax(data.y1, data.y2);
                    label_viewport = Some([
                        (vx1 - 0.02).max(0.0),
                        (vx2 + 0.02).min(1.0),
                        (vy1 - 0.02).max(0.0),
                        (vy2 + 0.02).min(1.0),
                    ]);
                } else {
                    let mut vp = viewport;
                    vp[2] = label.y;
                    label_viewport = Some(vp);
                }
            }
        }
        Axis::Y => {
            let region = template.y_tick_region(which, minor);
            let label = template.y_label_region(which);
            tick_priority = region.priority;
            label_priority = label.priority;
            for (value, text) in &map {
                let v = value.into_inner();
                if !(ymn <= v && v <= ymx) {
                    continue;
                }
                match kind {
                    ProjectionKind::Linear => {
                        let sy = (v - world[2]) / dy + viewport[2];
                        ys.push(vec![sy, sy]);
                        xs.push(vec![region.x1, region.x2]);
                        if !minor {
                            tys.push(sy);
                            txs.push(label.x);
                            tstring.push(text.clone());
                        }
                    }
                    _ => {
                        ys.push(vec![v, v]);
                        let mut end = world[0]
                            + (world[1] - world[0]) * (region.x2 - region.x1)
                                / (data.x2 - data.x1);
                        if end < -180.0 {
                            end = world[0];
                        }
                        xs.push(vec![world[0], end]);
                        if !minor {
                            tys.push(v);
                            txs.push(world[0]);
                            tstring.push(text.clone());
                        }
                    }
                }
            }
            if !kind.is_linear() {
                let mut vp = viewport;
                vp[0] = label.x;
                label_viewport = Some(vp);
                if kind.is_round() {
                    // Round outlines have no side edge to stack labels
                    // along.
                    label_priority = 0;
                }
            }
        }
    }

    let mut displays = Vec::new();
    if let Some((table_name, orientation_name)) = &text_names {
        if !txs.is_empty() {
            let mark = TextMark {
                name: format!("{}label{}", axis, which),
                priority: label_priority,
                text_table: table_name.clone(),
                text_orientation: orientation_name.clone(),
                projection: gm.projection.clone(),
                strings: tstring,
                x: txs,
                y: tys,
                viewport: if kind.is_linear() { None } else { label_viewport },
                world: if kind.is_linear() { None } else { Some(world) },
                ..Default::default()
            };
            if let Some(display) = canvas.plot(mark.into(), background)? {
                displays.push(display);
            }
        }
    }
    if !xs.is_empty() {
        let mark = LineMark {
            name: if minor {
                format!("{}mintic{}", axis, which)
            } else {
                format!("{}tic{}", axis, which)
            },
            priority: tick_priority,
            line: line_name.clone(),
            projection: gm.projection.clone(),
            x: xs,
            y: ys,
            viewport: if kind.is_linear() { None } else { Some(viewport) },
            world: if kind.is_linear() { None } else { Some(world) },
        };
        if let Some(display) = canvas.plot(mark.into(), background)? {
            displays.push(display);
        }
    }

    ctx.styles.remove_line(&line_name);
    if let Some((table_name, orientation_name)) = &text_names {
        ctx.styles.remove_text_table(table_name);
        ctx.styles.remove_text_orientation(orientation_name);
    }
    Ok(displays)
}

/// Builds an inline tick map from value/label pairs.
pub fn tick_map<I, S>(entries: I) -> TickLabelMap
where
    I: IntoIterator<Item = (f64, S)>,
    S: Into<String>,
{
    let mut map = IndexMap::new();
    for (value, label) in entries {
        map.insert(ordered_float::OrderedFloat(value), label.into());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use plotdeco_scenegraph::canvas::RecordingCanvas;
    use plotdeco_scenegraph::marks::Mark;

    fn data_frame(t: &Template) -> [f64; 4] {
        [t.data.x1, t.data.x2, t.data.y1, t.data.y2]
    }

    fn draw(
        template: &Template,
        gm: &GraphicsMethod,
        ctx: &mut LayoutContext,
        canvas: &mut RecordingCanvas,
        axis: Axis,
        which: Which,
        minor: bool,
        world: [f64; 4],
    ) -> Vec<DisplayHandle> {
        draw_ticks(
            template,
            gm,
            ctx,
            canvas,
            axis,
            which,
            minor,
            data_frame(template),
            world,
            false,
        )
        .unwrap()
    }

    #[test]
    fn test_out_of_range_ticks_are_pruned() {
        let template = Template::default_template();
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        let mut gm = GraphicsMethod::default();
        gm.x_tick_labels[0] =
            TickSource::Map(tick_map([(-10.0, "a"), (0.0, "b"), (20.0, "c")]));
        draw(
            &template,
            &gm,
            &mut ctx,
            &mut canvas,
            Axis::X,
            Which::One,
            false,
            [0.0, 10.0, 0.0, 1.0],
        );
        let text = canvas
            .marks()
            .iter()
            .find_map(|m| match m {
                Mark::Text(t) => Some(t),
                _ => None,
            })
            .unwrap();
        assert_eq!(text.strings, vec!["b".to_string()]);
        let line = canvas
            .marks()
            .iter()
            .find_map(|m| match m {
                Mark::Line(l) => Some(l),
                _ => None,
            })
            .unwrap();
        assert_eq!(line.x.len(), 1);
        // value 0 sits at the data edge
        assert_approx_eq!(f64, line.x[0][0], template.data.x1);
    }

    #[test]
    fn test_descending_axis_keeps_in_range_ticks() {
        let template = Template::default_template();
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        let mut gm = GraphicsMethod::default();
        gm.y_tick_labels[0] =
            TickSource::Map(tick_map([(5.0, "five"), (50.0, "fifty")]));
        draw(
            &template,
            &gm,
            &mut ctx,
            &mut canvas,
            Axis::Y,
            Which::One,
            false,
            [0.0, 1.0, 10.0, 0.0],
        );
        let text = canvas
            .marks()
            .iter()
            .find_map(|m| match m {
                Mark::Text(t) => Some(t),
                _ => None,
            })
            .unwrap();
        assert_eq!(text.strings, vec!["five".to_string()]);
    }

    #[test]
    fn test_far_side_auto_labels_are_blank() {
        let mut template = Template::new_from("t", &Template::default_template());
        template.xlabel2.priority = 1;
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        let gm = GraphicsMethod::default();
        draw(
            &template,
            &gm,
            &mut ctx,
            &mut canvas,
            Axis::X,
            Which::Two,
            false,
            [0.0, 10.0, 0.0, 1.0],
        );
        let text = canvas
            .marks()
            .iter()
            .find_map(|m| match m {
                Mark::Text(t) => Some(t),
                _ => None,
            })
            .unwrap();
        assert!(!text.strings.is_empty());
        assert!(text.strings.iter().all(String::is_empty));
    }

    #[test]
    fn test_minor_ticks_have_no_labels() {
        let mut template = Template::new_from("t", &Template::default_template());
        template.xmintic1.priority = 1;
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        let mut gm = GraphicsMethod::default();
        gm.x_minor_ticks[0] = TickSource::Map(tick_map([(2.5, ""), (7.5, "")]));
        let displays = draw(
            &template,
            &gm,
            &mut ctx,
            &mut canvas,
            Axis::X,
            Which::One,
            true,
            [0.0, 10.0, 0.0, 1.0],
        );
        assert_eq!(displays.len(), 1);
        assert!(matches!(canvas.marks()[0], Mark::Line(_)));
    }

    #[test]
    fn test_missing_named_tick_list_draws_nothing() {
        let template = Template::default_template();
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        let mut gm = GraphicsMethod::default();
        gm.x_tick_labels[0] = TickSource::Named("no-such-list".to_string());
        let displays = draw(
            &template,
            &gm,
            &mut ctx,
            &mut canvas,
            Axis::X,
            Which::One,
            false,
            [0.0, 10.0, 0.0, 1.0],
        );
        assert!(displays.is_empty());
        assert!(canvas.marks().is_empty());
    }

    #[test]
    fn test_style_catalog_is_restored() {
        let template = Template::default_template();
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        let gm = GraphicsMethod::default();
        let before = ctx.styles.len();
        draw(
            &template,
            &gm,
            &mut ctx,
            &mut canvas,
            Axis::X,
            Which::One,
            false,
            [0.0, 10.0, 0.0, 1.0],
        );
        assert_eq!(ctx.styles.len(), before);
    }

    #[test]
    fn test_elliptical_projection_skips_x_ticks() {
        let template = Template::default_template();
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        let gm = GraphicsMethod {
            projection: "mollweide".to_string(),
            ..Default::default()
        };
        let displays = draw(
            &template,
            &gm,
            &mut ctx,
            &mut canvas,
            Axis::X,
            Which::One,
            false,
            [-180.0, 180.0, -90.0, 90.0],
        );
        assert!(displays.is_empty());
        assert!(canvas.marks().is_empty());
    }

    #[test]
    fn test_round_projection_y_ticks_carry_world_frame() {
        let template = Template::default_template();
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        let gm = GraphicsMethod {
            projection: "robinson".to_string(),
            ..Default::default()
        };
        let world = [-180.0, 180.0, -90.0, 90.0];
        draw(
            &template,
            &gm,
            &mut ctx,
            &mut canvas,
            Axis::Y,
            Which::One,
            false,
            world,
        );
        // labels are suppressed, ticks carry the projection frame
        let lines: Vec<_> = canvas
            .marks()
            .iter()
            .filter_map(|m| match m {
                Mark::Line(l) => Some(l),
                _ => None,
            })
            .collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].world, Some(world));
        assert_eq!(lines[0].viewport, Some(data_frame(&template)));
        assert!(canvas
            .marks()
            .iter()
            .all(|m| !matches!(m, Mark::Text(_))));
    }
}
