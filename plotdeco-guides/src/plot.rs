//! Full decoration pass for one plotted slab: annotations, axis names,
//! every tick pass, and the box/line rules.

use plotdeco_scenegraph::canvas::{Canvas, DisplayHandle};
use plotdeco_scenegraph::marks::line::LineMark;
use plotdeco_scenegraph::marks::text::TextMark;
use plotdeco_template::context::LayoutContext;
use plotdeco_template::projection::ProjectionKind;
use plotdeco_template::region::{Axis, Which};
use plotdeco_template::template::Template;

use crate::attributes::draw_attributes;
use crate::error::PlotdecoGuidesError;
use crate::gm::{world_coordinates, GraphicsMethod};
use crate::slab::SlabSource;
use crate::ticks::draw_ticks;

/// Draw everything the template says about `slab` onto the canvas.
///
/// The canvas viewport and world coordinates are reset to `[0, 1]` for
/// the duration of the pass and restored afterwards.
pub fn plot(
    template: &Template,
    slab: &dyn SlabSource,
    gm: &GraphicsMethod,
    ctx: &mut LayoutContext,
    canvas: &mut dyn Canvas,
    background: bool,
) -> Result<Vec<DisplayHandle>, PlotdecoGuidesError> {
    let kind = ctx.projections.kind(&gm.projection)?;
    let saved_viewport = canvas.viewport();
    let saved_world = canvas.world_coordinate();
    canvas.set_viewport([0.0, 1.0, 0.0, 1.0]);
    canvas.set_world_coordinate([0.0, 1.0, 0.0, 1.0]);

    let result = plot_inner(template, slab, gm, ctx, canvas, background, kind);

    canvas.set_viewport(saved_viewport);
    canvas.set_world_coordinate(saved_world);
    result
}

fn plot_inner(
    template: &Template,
    slab: &dyn SlabSource,
    gm: &GraphicsMethod,
    ctx: &mut LayoutContext,
    canvas: &mut dyn Canvas,
    background: bool,
    kind: ProjectionKind,
) -> Result<Vec<DisplayHandle>, PlotdecoGuidesError> {
    let mut displays = draw_attributes(template, slab, ctx, canvas, background)?;

    // Axis names and units. Round projections bend the axes, so the
    // straight-edge name slots stay empty there.
    if !kind.is_round() {
        let axes = [
            ("x", Some(slab.x_axis()), &template.xname, &template.xunits),
            ("y", Some(slab.y_axis()), &template.yname, &template.yunits),
            ("z", slab.z_axis(), &template.zname, &template.zunits),
            ("t", slab.t_axis(), &template.tname, &template.tunits),
        ];
        for (prefix, axis, name_region, units_region) in axes {
            let Some(axis) = axis else {
                continue;
            };
            for (suffix, region, string) in [
                ("name", name_region, axis.id.clone()),
                ("units", units_region, axis.units.clone()),
            ] {
                let table_name = ctx.styles.create_text_table_from(&region.text_table)?;
                let orientation_name = ctx
                    .styles
                    .create_text_orientation_from(&region.text_orientation)?;
                let mark = TextMark {
                    name: format!("{}{}", prefix, suffix),
                    priority: region.priority,
                    text_table: table_name.clone(),
                    text_orientation: orientation_name.clone(),
                    strings: vec![string],
                    x: vec![region.x],
                    y: vec![region.y],
                    ..Default::default()
                };
                let display = canvas.plot(mark.into(), background)?;
                ctx.styles.remove_text_table(&table_name);
                ctx.styles.remove_text_orientation(&orientation_name);
                if let Some(display) = display {
                    displays.push(display);
                }
            }
        }
    }

    let world = world_coordinates(gm, slab.x_axis(), slab.y_axis());
    let viewport = [
        template.data.x1,
        template.data.x2,
        template.data.y1,
        template.data.y2,
    ];
    for axis in [Axis::X, Axis::Y] {
        for which in [Which::One, Which::Two] {
            for minor in [false, true] {
                displays.extend(draw_ticks(
                    template, gm, ctx, canvas, axis, which, minor, viewport, world, background,
                )?);
            }
        }
    }

    let rules = [
        ("box1", &template.box1, true),
        ("box2", &template.box2, true),
        ("box3", &template.box3, true),
        ("box4", &template.box4, true),
        ("line1", &template.line1, false),
        ("line2", &template.line2, false),
        ("line3", &template.line3, false),
        ("line4", &template.line4, false),
    ];
    for (name, region, is_box) in rules {
        if region.priority == 0 {
            continue;
        }
        let line_name = ctx.styles.create_line_from(&region.line)?;
        let mark = if kind.is_linear() {
            LineMark {
                name: name.to_string(),
                priority: region.priority,
                line: line_name.clone(),
                projection: gm.projection.clone(),
                x: vec![vec![region.x1, region.x2, region.x2, region.x1, region.x1]],
                y: vec![vec![region.y1, region.y1, region.y2, region.y2, region.y1]],
                viewport: None,
                world: None,
            }
        } else {
            let dx = (region.x2 - region.x1) / (template.data.x2 - template.data.x1)
                * (world[1] - world[0]);
            let dy = (region.y2 - region.y1) / (template.data.y2 - template.data.y1)
                * (world[3] - world[2]);
            let (x, y) = if !is_box {
                (
                    vec![vec![world[0], world[0] + dx]],
                    vec![vec![world[2], world[2] + dy]],
                )
            } else if kind.is_round() {
                // Round outlines reduce to the two latitude edges.
                (
                    vec![vec![world[0], world[1]], vec![world[0], world[1]]],
                    vec![vec![world[3], world[3]], vec![world[2], world[2]]],
                )
            } else {
                (
                    vec![vec![
                        world[0],
                        world[0] + dx,
                        world[0] + dx,
                        world[0],
                        world[0],
                    ]],
                    vec![vec![world[2], world[2], world[3], world[3], world[2]]],
                )
            };
            LineMark {
                name: name.to_string(),
                priority: region.priority,
                line: line_name.clone(),
                projection: gm.projection.clone(),
                x,
                y,
                viewport: Some([region.x1, region.x2, region.y1, region.y2]),
                world: Some(world),
            }
        };
        let display = canvas.plot(mark.into(), background)?;
        ctx.styles.remove_line(&line_name);
        if let Some(display) = display {
            displays.push(display);
        }
    }

    Ok(displays)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotdeco_scenegraph::canvas::RecordingCanvas;
    use plotdeco_scenegraph::marks::Mark;

    use crate::slab::{AxisMeta, StaticSlab};

    fn slab() -> StaticSlab {
        StaticSlab {
            id: "clt".to_string(),
            min: 0.0,
            max: 100.0,
            mean: 51.5,
            x_axis: Some(AxisMeta::new("longitude", "degrees_east", -180.0, 180.0)),
            y_axis: Some(AxisMeta::new("latitude", "degrees_north", -90.0, 90.0)),
            ..Default::default()
        }
    }

    fn lines(canvas: &RecordingCanvas) -> Vec<&LineMark> {
        canvas
            .marks()
            .iter()
            .filter_map(|m| match m {
                Mark::Line(l) => Some(l),
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
    fn test_full_linear_pass() {
        let template = Template::default_template();
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        canvas.set_viewport([0.2, 0.8, 0.2, 0.8]);
        let displays = plot(
            &template,
            &slab(),
            &GraphicsMethod::default(),
            &mut ctx,
            &mut canvas,
            false,
        )
        .unwrap();
        assert!(!displays.is_empty());
        // id, mean, min, max annotations plus both axis names and the
        // visible label rows
        let text_names: Vec<&str> = texts(&canvas).iter().map(|t| t.name.as_str()).collect();
        assert!(text_names.contains(&"id"));
        assert!(text_names.contains(&"mean"));
        assert!(texts(&canvas)
            .iter()
            .any(|t| t.strings == vec!["longitude".to_string()]));
        assert!(texts(&canvas)
            .iter()
            .any(|t| t.strings == vec!["latitude".to_string()]));
        // four visible tick rows and the data box
        let line_names: Vec<&str> = lines(&canvas).iter().map(|l| l.name.as_str()).collect();
        assert_eq!(line_names, vec!["xtic1", "xtic2", "ytic1", "ytic2", "box1"]);
        let box1 = lines(&canvas)[4];
        assert_eq!(
            box1.x,
            vec![vec![0.05, 0.95, 0.95, 0.05, 0.05]]
        );
        assert_eq!(
            box1.y,
            vec![vec![0.26, 0.26, 0.86, 0.86, 0.26]]
        );
        // canvas frame restored after the pass
        assert_eq!(canvas.viewport(), [0.2, 0.8, 0.2, 0.8]);
        // every transient style cleaned up
        assert_eq!(ctx.styles.len(), LayoutContext::new().styles.len());
    }

    #[test]
    fn test_round_projection_suppresses_axis_names() {
        let template = Template::default_template();
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        let gm = GraphicsMethod {
            projection: "robinson".to_string(),
            ..Default::default()
        };
        plot(&template, &slab(), &gm, &mut ctx, &mut canvas, false).unwrap();
        assert!(!texts(&canvas)
            .iter()
            .any(|t| t.strings == vec!["longitude".to_string()]));
        // the data box becomes the two latitude edges in world space
        let box1 = lines(&canvas)
            .into_iter()
            .find(|l| l.name == "box1")
            .unwrap();
        assert_eq!(box1.x, vec![vec![-180.0, 180.0], vec![-180.0, 180.0]]);
        assert_eq!(box1.y, vec![vec![90.0, 90.0], vec![-90.0, -90.0]]);
        assert_eq!(box1.world, Some([-180.0, 180.0, -90.0, 90.0]));
    }

    #[test]
    fn test_hidden_rules_are_skipped() {
        let mut template = Template::new_from("t", &Template::default_template());
        template.line1.priority = 2;
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        plot(
            &template,
            &slab(),
            &GraphicsMethod::default(),
            &mut ctx,
            &mut canvas,
            false,
        )
        .unwrap();
        let line_names: Vec<&str> = lines(&canvas).iter().map(|l| l.name.as_str()).collect();
        assert!(line_names.contains(&"line1"));
        assert!(!line_names.contains(&"line2"));
        assert!(!line_names.contains(&"box2"));
    }
}
