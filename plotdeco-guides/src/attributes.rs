//! Drawing of slab metadata (titles, comments, min/mean/max summaries)
//! into their annotation regions.

use plotdeco_scales::labels::apply_format;
use plotdeco_scenegraph::canvas::{Canvas, DisplayHandle};
use plotdeco_scenegraph::marks::text::TextMark;
use plotdeco_template::context::LayoutContext;
use plotdeco_template::template::{AnnotationRef, Template};

use crate::error::PlotdecoGuidesError;
use crate::slab::SlabSource;

/// The slab attributes with a region of their own, in drawing order.
pub const ANNOTATION_KEYS: &[&str] = &[
    "file",
    "function",
    "logicalmask",
    "transformation",
    "source",
    "id",
    "title",
    "units",
    "crdate",
    "crtime",
    "comment1",
    "comment2",
    "comment3",
    "comment4",
    "zname",
    "tname",
    "zunits",
    "tunits",
    "xvalue",
    "yvalue",
    "zvalue",
    "tvalue",
    "mean",
    "min",
    "max",
    "xname",
    "yname",
];

fn format_value(ctx: &LayoutContext, value: f64, format_name: &str, fallback: &str) -> String {
    let spec = if format_name == "default" {
        fallback
    } else {
        ctx.format(format_name).unwrap_or(format_name)
    };
    match apply_format(value, spec) {
        Ok(formatted) => formatted,
        Err(err) => {
            log::warn!("cannot format {} with '{}': {}", value, spec, err);
            format!("{}", value)
        }
    }
}

/// Draw every slab attribute that exists into its region.
///
/// Min, mean, and max always exist; a text attribute is skipped when the
/// slab does not carry it.
pub fn draw_attributes(
    template: &Template,
    slab: &dyn SlabSource,
    ctx: &mut LayoutContext,
    canvas: &mut dyn Canvas,
    background: bool,
) -> Result<Vec<DisplayHandle>, PlotdecoGuidesError> {
    let mut displays = Vec::new();
    for &key in ANNOTATION_KEYS {
        let string = match key {
            "min" => Some(format!(
                "Min {}",
                format_value(ctx, slab.min(), &template.min.format, ":g")
            )),
            "max" => Some(format!(
                "Max {}",
                format_value(ctx, slab.max(), &template.max.format, ":g")
            )),
            "mean" => Some(format!(
                "Mean {}",
                format_value(ctx, slab.mean(), &template.mean.format, ":.4g")
            )),
            "id" => Some(slab.id().to_string()),
            _ => slab.text_attribute(key).map(|value| {
                // value regions format numeric attributes
                if let Some(AnnotationRef::Format(region)) = template.annotation_region(key) {
                    match value.parse::<f64>() {
                        Ok(number) => format_value(ctx, number, &region.format, ":g"),
                        Err(_) => value.to_string(),
                    }
                } else {
                    value.to_string()
                }
            }),
        };
        let Some(string) = string else {
            continue;
        };
        let Some(region) = template.annotation_region(key) else {
            continue;
        };
        let (priority, x, y, text_table, text_orientation) = match region {
            AnnotationRef::Text(r) => (r.priority, r.x, r.y, &r.text_table, &r.text_orientation),
            AnnotationRef::Format(r) => (r.priority, r.x, r.y, &r.text_table, &r.text_orientation),
        };
        let table_name = ctx.styles.create_text_table_from(text_table)?;
        let orientation_name = ctx.styles.create_text_orientation_from(text_orientation)?;
        let mark = TextMark {
            name: key.to_string(),
            priority,
            text_table: table_name.clone(),
            text_orientation: orientation_name.clone(),
            strings: vec![string],
            x: vec![x],
            y: vec![y],
            ..Default::default()
        };
        let display = canvas.plot(mark.into(), background)?;
        ctx.styles.remove_text_table(&table_name);
        ctx.styles.remove_text_orientation(&orientation_name);
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

    fn slab() -> crate::slab::StaticSlab {
        let mut slab = crate::slab::StaticSlab {
            id: "clt".to_string(),
            min: 0.0,
            max: 100.0,
            mean: 54.33125,
            ..Default::default()
        };
        slab.attributes
            .insert("title".to_string(), "Total cloudiness".to_string());
        slab
    }

    fn strings(canvas: &RecordingCanvas) -> Vec<(String, String)> {
        canvas
            .marks()
            .iter()
            .filter_map(|m| match m {
                Mark::Text(t) => Some((t.name.clone(), t.strings[0].clone())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_summary_annotations() {
        let template = Template::default_template();
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        draw_attributes(&template, &slab(), &mut ctx, &mut canvas, false).unwrap();
        let drawn = strings(&canvas);
        assert!(drawn.contains(&("min".to_string(), "Min 0".to_string())));
        assert!(drawn.contains(&("max".to_string(), "Max 100".to_string())));
        assert!(drawn.contains(&("mean".to_string(), "Mean 54.33".to_string())));
        assert!(drawn.contains(&("id".to_string(), "clt".to_string())));
        assert!(drawn.contains(&("title".to_string(), "Total cloudiness".to_string())));
        // absent attributes draw nothing
        assert!(!drawn.iter().any(|(name, _)| name == "comment1"));
    }

    #[test]
    fn test_custom_format() {
        let mut template = Template::new_from("t", &Template::default_template());
        template.min.format = ":.2f".to_string();
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        draw_attributes(&template, &slab(), &mut ctx, &mut canvas, false).unwrap();
        assert!(strings(&canvas).contains(&("min".to_string(), "Min 0.00".to_string())));
    }

    #[test]
    fn test_style_catalog_restored() {
        let template = Template::default_template();
        let mut ctx = LayoutContext::new();
        let mut canvas = RecordingCanvas::default();
        let before = ctx.styles.len();
        draw_attributes(&template, &slab(), &mut ctx, &mut canvas, false).unwrap();
        assert_eq!(ctx.styles.len(), before);
    }
}
