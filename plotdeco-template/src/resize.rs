//! Proportional repositioning of every region relative to the data area.
//!
//! `reset` is the primitive all the others are built on: given a new
//! anchor pair for one axis, every region field on that axis is moved so
//! its stored offset from the anchor scales with the anchor change.
//! Regions that carry no field on the requested axis are skipped; the
//! whole family is best-effort per region, and coordinates saturate into
//! [0,1] rather than fail.

use indexmap::IndexMap;

use crate::context::StyleCatalog;
use crate::error::PlotdecoTemplateError;
use crate::region::{Axis, RegionMut, ScaleAxis};
use crate::template::Template;

pub(crate) fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// What to do with text styles when scaling geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontScaling {
    /// Scale fonts only when both axes are scaled.
    #[default]
    Auto,
    Off,
    On,
}

/// Affine remap of one axis, anchored at the old first value.
struct AxisRemap {
    v1: f64,
    v2: f64,
    old: Option<(f64, f64)>,
    ratio: f64,
}

impl AxisRemap {
    fn new(v1: f64, v2: f64, old: Option<(f64, f64)>) -> Result<Self, PlotdecoTemplateError> {
        if !v1.is_finite() || !v2.is_finite() {
            return Err(PlotdecoTemplateError::InvalidArgument(format!(
                "anchor values must be finite, got ({}, {})",
                v1, v2
            )));
        }
        let ratio = match old {
            Some((ov1, ov2)) => {
                let span = ov2 - ov1;
                if span == 0.0 || !span.is_finite() {
                    return Err(PlotdecoTemplateError::InvalidArgument(format!(
                        "degenerate old anchor span ({}, {})",
                        ov1, ov2
                    )));
                }
                (v2 - v1) / span
            }
            None => 1.0,
        };
        Ok(Self { v1, v2, old, ratio })
    }

    /// Remap a field tied to the first anchor (`x1`, `y1`, or a single
    /// `x`/`y`).
    fn first(&self, ov: f64) -> f64 {
        let delta = match self.old {
            Some((ov1, _)) => (ov - ov1) * self.ratio,
            None => 0.0,
        };
        clamp01(self.v1 + delta)
    }

    /// Remap a field tied to the second anchor (`x2`/`y2`).
    fn second(&self, ov: f64) -> f64 {
        let delta = match self.old {
            Some((_, ov2)) => (ov - ov2) * self.ratio,
            None => 0.0,
        };
        clamp01(self.v2 + delta)
    }
}

fn remap_region(region: RegionMut<'_>, axis: Axis, remap: &AxisRemap) {
    match (region, axis) {
        (RegionMut::Text(r), Axis::X) => r.x = remap.first(r.x),
        (RegionMut::Text(r), Axis::Y) => r.y = remap.first(r.y),
        (RegionMut::Format(r), Axis::X) => r.x = remap.first(r.x),
        (RegionMut::Format(r), Axis::Y) => r.y = remap.first(r.y),
        // x ticks span only y, y ticks only x
        (RegionMut::XTick(_), Axis::X) => {}
        (RegionMut::XTick(r), Axis::Y) => {
            r.y1 = remap.first(r.y1);
            r.y2 = remap.second(r.y2);
        }
        (RegionMut::YTick(r), Axis::X) => {
            r.x1 = remap.first(r.x1);
            r.x2 = remap.second(r.x2);
        }
        (RegionMut::YTick(_), Axis::Y) => {}
        (RegionMut::XLabel(_), Axis::X) => {}
        (RegionMut::XLabel(r), Axis::Y) => r.y = remap.first(r.y),
        (RegionMut::YLabel(r), Axis::X) => r.x = remap.first(r.x),
        (RegionMut::YLabel(_), Axis::Y) => {}
        (RegionMut::Box(r), Axis::X) => {
            r.x1 = remap.first(r.x1);
            r.x2 = remap.second(r.x2);
        }
        (RegionMut::Box(r), Axis::Y) => {
            r.y1 = remap.first(r.y1);
            r.y2 = remap.second(r.y2);
        }
        (RegionMut::Legend(r), Axis::X) => {
            r.x1 = remap.first(r.x1);
            r.x2 = remap.second(r.x2);
        }
        (RegionMut::Legend(r), Axis::Y) => {
            r.y1 = remap.first(r.y1);
            r.y2 = remap.second(r.y2);
        }
        (RegionMut::Data(r), Axis::X) => {
            r.x1 = remap.first(r.x1);
            r.x2 = remap.second(r.x2);
        }
        (RegionMut::Data(r), Axis::Y) => {
            r.y1 = remap.first(r.y1);
            r.y2 = remap.second(r.y2);
        }
    }
}

impl Template {
    /// Remap every region field on `axis` for an anchor change from
    /// `old` to `(v1, v2)`. With no old anchor, fields translate to the
    /// new values without rescaling their offsets.
    pub fn reset(
        &mut self,
        axis: Axis,
        v1: f64,
        v2: f64,
        old: Option<(f64, f64)>,
    ) -> Result<(), PlotdecoTemplateError> {
        let remap = AxisRemap::new(v1, v2, old)?;
        self.for_each_region_mut(|_, region| remap_region(region, axis, &remap));
        Ok(())
    }

    /// Shift the whole layout by `delta` along `axis`, anchored on the
    /// data region.
    pub fn move_along(&mut self, delta: f64, axis: Axis) -> Result<(), PlotdecoTemplateError> {
        if !delta.is_finite() {
            return Err(PlotdecoTemplateError::InvalidArgument(format!(
                "move delta must be finite, got {}",
                delta
            )));
        }
        let (ov1, ov2) = self.data.span(axis);
        self.reset(axis, ov1 + delta, ov2 + delta, Some((ov1, ov2)))
    }

    /// Re-anchor the layout so the data region's first corner lands on
    /// `(x, y)`, preserving its width and height.
    pub fn move_to(&mut self, x: f64, y: f64) -> Result<(), PlotdecoTemplateError> {
        let (ov1, ov2) = self.data.span(Axis::X);
        self.reset(Axis::X, x, x + (ov2 - ov1), Some((ov1, ov2)))?;
        let (ov1, ov2) = self.data.span(Axis::Y);
        self.reset(Axis::Y, y, y + (ov2 - ov1), Some((ov1, ov2)))
    }

    pub(crate) fn scale_geometry(
        &mut self,
        factor: f64,
        axis: Axis,
    ) -> Result<(), PlotdecoTemplateError> {
        let (ov1, ov2) = self.data.span(axis);
        self.reset(axis, ov1, ov1 + (ov2 - ov1) * factor, Some((ov1, ov2)))
    }

    /// Scale the layout by `factor` along the requested axes, anchored
    /// at the data region's first corner. Depending on `font`, text
    /// heights are scaled along with the geometry.
    pub fn scale(
        &mut self,
        factor: f64,
        axis: ScaleAxis,
        font: FontScaling,
        styles: &mut StyleCatalog,
    ) -> Result<(), PlotdecoTemplateError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(PlotdecoTemplateError::InvalidArgument(format!(
                "scale factor must be positive and finite, got {}",
                factor
            )));
        }
        let axes: &[Axis] = match axis {
            ScaleAxis::X => &[Axis::X],
            ScaleAxis::Y => &[Axis::Y],
            ScaleAxis::XY => &[Axis::X, Axis::Y],
        };
        for ax in axes {
            self.scale_geometry(factor, *ax)?;
        }
        let scale_font = match font {
            FontScaling::On => true,
            FontScaling::Off => false,
            FontScaling::Auto => matches!(axis, ScaleAxis::XY),
        };
        if scale_font {
            self.scale_font(factor, styles)?;
        }
        Ok(())
    }

    /// Scale every referenced text orientation's height by `factor`.
    ///
    /// Each source orientation is cloned into the catalog once and the
    /// clone is scaled, so regions in other templates sharing the source
    /// style keep their size. The latch makes repeated calls no-ops so
    /// scaling cannot compound.
    pub fn scale_font(
        &mut self,
        factor: f64,
        styles: &mut StyleCatalog,
    ) -> Result<(), PlotdecoTemplateError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(PlotdecoTemplateError::InvalidArgument(format!(
                "font scale factor must be positive and finite, got {}",
                factor
            )));
        }
        if self.scaled_font {
            return Ok(());
        }
        let mut clones: IndexMap<String, String> = IndexMap::new();
        self.for_each_region_mut(|name, region| {
            let Some(orientation) = region.text_orientation_mut() else {
                return;
            };
            if let Some(clone) = clones.get(orientation.as_str()) {
                *orientation = clone.clone();
                return;
            }
            match styles.create_text_orientation_from(orientation) {
                Ok(clone) => {
                    if let Some(style) = styles.text_orientation_mut(&clone) {
                        style.height *= factor;
                    }
                    clones.insert(orientation.clone(), clone.clone());
                    *orientation = clone;
                }
                Err(_) => {
                    // Unknown source style: leave the region untouched.
                    log::warn!(
                        "cannot scale font of region '{}': unknown text orientation '{}'",
                        name,
                        orientation
                    );
                }
            }
        });
        self.scaled_font = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Which;
    use float_cmp::assert_approx_eq;

    fn template() -> Template {
        Template::new_from("t", &Template::default_template())
    }

    #[test]
    fn test_reset_identity_is_noop() {
        let mut t = template();
        let before = t.clone();
        let (x1, x2) = t.data.span(Axis::X);
        t.reset(Axis::X, x1, x2, Some((x1, x2))).unwrap();
        assert_approx_eq!(f64, t.data.x1, before.data.x1);
        assert_approx_eq!(f64, t.data.x2, before.data.x2);
        assert_approx_eq!(f64, t.ytic1.x2, before.ytic1.x2);
        assert_approx_eq!(f64, t.xname.x, before.xname.x);
        assert_approx_eq!(f64, t.legend.x2, before.legend.x2);
        // the untouched axis stays byte-identical
        assert_eq!(t.xtic1, before.xtic1);
    }

    #[test]
    fn test_reset_without_old_anchor_translates() {
        let mut t = template();
        t.reset(Axis::X, 0.1, 0.6, None).unwrap();
        assert_approx_eq!(f64, t.data.x1, 0.1);
        assert_approx_eq!(f64, t.data.x2, 0.6);
        // single-point regions move to the first anchor
        assert_approx_eq!(f64, t.xname.x, 0.1);
    }

    #[test]
    fn test_move_to_exact_anchor() {
        let mut t = template();
        let width = t.data.x2 - t.data.x1;
        let height = t.data.y2 - t.data.y1;
        t.move_to(0.05, 0.3).unwrap();
        assert_eq!(t.data.x1, 0.05);
        assert_eq!(t.data.y1, 0.3);
        assert_approx_eq!(f64, t.data.x2 - t.data.x1, width);
        assert_approx_eq!(f64, t.data.y2 - t.data.y1, height);
    }

    #[test]
    fn test_move_to_past_the_edge_saturates() {
        let mut t = template();
        // data is 0.9 wide, so anchoring x1 at 0.2 pushes x2 off the page
        t.move_to(0.2, 0.3).unwrap();
        assert_eq!(t.data.x1, 0.2);
        assert_eq!(t.data.x2, 1.0);
        assert_approx_eq!(f64, t.data.y2 - t.data.y1, 0.6);
    }

    #[test]
    fn test_move_preserves_relative_offsets() {
        let mut t = template();
        let tick_gap = t.ytic1.x1 - t.ytic1.x2;
        t.move_along(0.02, Axis::X).unwrap();
        assert_approx_eq!(f64, t.data.x1, 0.07);
        assert_approx_eq!(f64, t.ytic1.x1 - t.ytic1.x2, tick_gap);
    }

    #[test]
    fn test_scale_round_trip() {
        let mut styles = StyleCatalog::with_defaults();
        for k in [0.25, 0.5, 2.0, 10.0] {
            let mut t = template();
            // leave headroom so no coordinate saturates during the trip
            t.scale(0.1, ScaleAxis::X, FontScaling::Off, &mut styles)
                .unwrap();
            let extent = t.data.x2 - t.data.x1;
            t.scale(k, ScaleAxis::X, FontScaling::Off, &mut styles)
                .unwrap();
            t.scale(1.0 / k, ScaleAxis::X, FontScaling::Off, &mut styles)
                .unwrap();
            assert_approx_eq!(f64, t.data.x2 - t.data.x1, extent, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_coordinates_stay_clamped() {
        let mut t = template();
        t.move_along(5.0, Axis::Y).unwrap();
        let mut ok = true;
        t.for_each_region(|_, region| {
            use crate::region::RegionRef;
            let coords: Vec<f64> = match region {
                RegionRef::Text(r) => vec![r.x, r.y],
                RegionRef::Format(r) => vec![r.x, r.y],
                RegionRef::XTick(r) => vec![r.y1, r.y2],
                RegionRef::YTick(r) => vec![r.x1, r.x2],
                RegionRef::XLabel(r) => vec![r.y],
                RegionRef::YLabel(r) => vec![r.x],
                RegionRef::Box(r) => vec![r.x1, r.y1, r.x2, r.y2],
                RegionRef::Legend(r) => vec![r.x1, r.y1, r.x2, r.y2],
                RegionRef::Data(r) => vec![r.x1, r.y1, r.x2, r.y2],
            };
            ok &= coords.iter().all(|c| (0.0..=1.0).contains(c));
        });
        assert!(ok);
    }

    #[test]
    fn test_degenerate_anchor_is_invalid() {
        let mut t = template();
        let err = t.reset(Axis::X, 0.0, 1.0, Some((0.5, 0.5))).unwrap_err();
        assert!(matches!(err, PlotdecoTemplateError::InvalidArgument(_)));
    }

    #[test]
    fn test_scale_font_latch() {
        let mut styles = StyleCatalog::with_defaults();
        let mut t = template();
        t.scale_font(2.0, &mut styles).unwrap();
        let scaled = t.xlabel1.text_orientation.clone();
        assert_ne!(scaled, "defcenter");
        assert_approx_eq!(
            f64,
            styles.text_orientation(&scaled).unwrap().height,
            28.0
        );
        // second call must not compound
        t.scale_font(2.0, &mut styles).unwrap();
        assert_eq!(t.xlabel1.text_orientation, scaled);
        assert_approx_eq!(
            f64,
            styles.text_orientation(&scaled).unwrap().height,
            28.0
        );
        // shared source style is untouched
        assert_approx_eq!(
            f64,
            styles.text_orientation("defcenter").unwrap().height,
            14.0
        );
    }

    #[test]
    fn test_scale_font_shares_one_clone_per_source() {
        let mut styles = StyleCatalog::with_defaults();
        let mut t = template();
        t.scale_font(0.5, &mut styles).unwrap();
        assert_eq!(
            t.x_label_region(Which::One).text_orientation,
            t.xname.text_orientation
        );
    }
}
