//! Aspect-ratio adjustment of the data area.
//!
//! `ratio` shrinks the data region along one axis so the plotted y/x
//! ratio, after accounting for the output page aspect, matches the
//! wished value. The shrunk region is re-centered over the old one.

use plotdeco_scenegraph::canvas::Canvas;

use crate::error::PlotdecoTemplateError;
use crate::region::{Axis, ScaleAxis};
use crate::resize::clamp01;
use crate::template::Template;

const DEFAULT_SCREEN_ASPECT: f64 = 1.0 / 0.758800507;

/// The width/height aspect of the output page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputAspect {
    /// US Letter paper, 11 x 8.5 inches landscape.
    Letter,
    /// A4 paper, 29.7 x 21 centimeters landscape.
    A4,
    /// The canvas window itself. Falls back to the default screen aspect
    /// when the canvas is not open.
    Screen,
    /// An explicit width/height ratio.
    Ratio(f64),
}

impl OutputAspect {
    /// The width/height ratio, flipped for portrait canvases. An open
    /// canvas reports its real pixel aspect for `Screen`.
    pub fn resolve(&self, canvas: &dyn Canvas) -> Result<f64, PlotdecoTemplateError> {
        let flip = |r: f64| if canvas.is_portrait() { 1.0 / r } else { r };
        match self {
            OutputAspect::Letter => Ok(flip(11.0 / 8.5)),
            OutputAspect::A4 => Ok(flip(29.7 / 21.0)),
            OutputAspect::Screen => {
                if canvas.is_open() {
                    let info = canvas.canvas_info();
                    Ok(f64::from(info.width) / f64::from(info.height))
                } else {
                    Ok(flip(DEFAULT_SCREEN_ASPECT))
                }
            }
            OutputAspect::Ratio(r) => {
                if r.is_finite() && *r > 0.0 {
                    Ok(*r)
                } else {
                    Err(PlotdecoTemplateError::InvalidArgument(format!(
                        "output aspect must be positive and finite, got {}",
                        r
                    )))
                }
            }
        }
    }
}

impl Template {
    /// Shrink the data region so its on-page y/x ratio equals `wished`.
    ///
    /// With `box_and_ticks`, the data box outline follows the data
    /// region, ticks are re-anchored to the new data edges preserving
    /// their lengths, and labels and axis names keep their offsets from
    /// the ticks. The requested ratio is recorded on the data region,
    /// negated when boxes and ticks were adjusted too.
    pub fn ratio(
        &mut self,
        wished: f64,
        output: OutputAspect,
        box_and_ticks: bool,
        canvas: &dyn Canvas,
    ) -> Result<(), PlotdecoTemplateError> {
        if !(wished.is_finite() && wished > 0.0) {
            return Err(PlotdecoTemplateError::InvalidArgument(format!(
                "wished ratio must be positive and finite, got {}",
                wished
            )));
        }
        let r_out = output.resolve(canvas)?;

        // Scale a scratch copy; only its data region is copied back, so
        // the other regions keep their places.
        let mut scratch = self.clone();
        let r_template = (self.data.y2 - self.data.y1) / (self.data.x2 - self.data.x1);
        let r_actual = r_template / r_out;
        if wished > r_actual {
            scratch.scale_geometry(r_actual / wished, Axis::X)?;
        } else {
            scratch.scale_geometry(wished / r_actual, Axis::Y)?;
        }

        let ndx = scratch.data.x2 - scratch.data.x1;
        let ndy = scratch.data.y2 - scratch.data.y1;
        let odx = self.data.x2 - self.data.x1;
        let ody = self.data.y2 - self.data.y1;

        self.data.x1 = scratch.data.x1;
        self.data.x2 = scratch.data.x2;
        self.data.y1 = scratch.data.y1;
        self.data.y2 = scratch.data.y2;

        // Re-center whichever axis shrank.
        if odx != ndx {
            self.data.x1 = clamp01(self.data.x1 + (odx - ndx) / 2.0);
            self.data.x2 = clamp01(self.data.x2 + (odx - ndx) / 2.0);
        } else {
            self.data.y1 = clamp01(self.data.y1 + (ody - ndy) / 2.0);
            self.data.y2 = clamp01(self.data.y2 + (ody - ndy) / 2.0);
        }

        if box_and_ticks {
            let x_scale = ndx / odx;
            let y_scale = ndy / ody;

            let x_label_name_diff = self.xlabel1.y - self.xname.y;
            let y_label_name_diff = self.ylabel1.x - self.yname.x;

            self.box1.x1 = self.data.x1;
            self.box1.x2 = self.data.x2;
            self.box1.y1 = self.data.y1;
            self.box1.y2 = self.data.y2;

            // Label offsets from their ticks, saved before the ticks
            // move.
            let d_y1 = self.xlabel1.y - self.xtic1.y1;
            let d_y2 = self.xlabel2.y - self.xtic2.y1;
            let d_x1 = self.ylabel1.x - self.ytic1.x1;
            let d_x2 = self.ylabel2.x - self.ytic2.x1;

            let dy = self.xtic1.y2 - self.xtic1.y1;
            self.xtic1.y1 = self.data.y1;
            self.xtic1.y2 = clamp01(self.xtic1.y1 + dy);
            let dy = self.xtic2.y2 - self.xtic2.y1;
            self.xtic2.y1 = self.data.y2;
            self.xtic2.y2 = clamp01(self.xtic2.y1 + dy);
            let dy = self.xmintic1.y2 - self.xmintic1.y1;
            self.xmintic1.y1 = self.data.y1;
            self.xmintic1.y2 = clamp01(self.xmintic1.y1 + dy);
            let dy = self.xmintic2.y2 - self.xmintic2.y1;
            self.xmintic2.y1 = self.data.y2;
            self.xmintic2.y2 = clamp01(self.xmintic2.y1 + dy);

            let dx = self.ytic1.x2 - self.ytic1.x1;
            self.ytic1.x1 = self.data.x1;
            self.ytic1.x2 = clamp01(self.ytic1.x1 + dx);
            let dx = self.ytic2.x2 - self.ytic2.x1;
            self.ytic2.x1 = self.data.x2;
            self.ytic2.x2 = clamp01(self.ytic2.x1 + dx);
            let dx = self.ymintic1.x2 - self.ymintic1.x1;
            self.ymintic1.x1 = self.data.x1;
            self.ymintic1.x2 = clamp01(self.ymintic1.x1 + dx);
            let dx = self.ymintic2.x2 - self.ymintic2.x1;
            self.ymintic2.x1 = self.data.x2;
            self.ymintic2.x2 = clamp01(self.ymintic2.x1 + dx);

            self.xlabel1.y = clamp01(self.xtic1.y1 + d_y1);
            self.xlabel2.y = clamp01(self.xtic2.y1 + d_y2);
            self.ylabel1.x = clamp01(self.ytic1.x1 + d_x1);
            self.ylabel2.x = clamp01(self.ytic2.x1 + d_x2);

            self.xname.y = clamp01(self.xlabel1.y - x_scale * x_label_name_diff);
            self.yname.x = clamp01(self.ylabel1.x - y_scale * y_label_name_diff);
            self.data.ratio = -wished;
        } else {
            self.data.ratio = wished;
        }
        Ok(())
    }

    /// `ratio` with the wished value derived from a lon/lat box, so a
    /// linear projection of that box has the least deformation. Degrees
    /// east and north; a degenerate box is a no-op.
    pub fn ratio_linear_projection(
        &mut self,
        lon1: f64,
        lon2: f64,
        lat1: f64,
        lat2: f64,
        wished: Option<f64>,
        output: OutputAspect,
        box_and_ticks: bool,
        canvas: &dyn Canvas,
    ) -> Result<(), PlotdecoTemplateError> {
        let lat1 = lat1.to_radians();
        let lat2 = lat2.to_radians();
        let lon1 = lon1.to_radians();
        let lon2 = lon2.to_radians();
        if lon1 == lon2 || lat1 == lat2 {
            return Ok(());
        }
        let wished = match wished {
            Some(w) => w,
            None => {
                2.0 * (lat2.sin() - lat1.sin())
                    / (lon2 - lon1)
                    / (1.0 + ((2.0 * lat2).sin() - (2.0 * lat1).sin()) / 2.0 / (lat2 - lat1))
            }
        };
        self.ratio(wished, output, box_and_ticks, canvas)
    }
}
