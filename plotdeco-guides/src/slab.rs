//! The data the decoration layer needs from the plotted variable.
//!
//! Only metadata crosses this seam; the actual array stays with the
//! plotting side.

use indexmap::IndexMap;

/// One coordinate axis of a slab.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisMeta {
    pub id: String,
    pub units: String,
    /// First and last coordinate values, in axis order.
    pub bounds: (f64, f64),
}

impl AxisMeta {
    pub fn new(id: &str, units: &str, first: f64, last: f64) -> Self {
        Self {
            id: id.to_string(),
            units: units.to_string(),
            bounds: (first, last),
        }
    }

    pub fn range(&self) -> (f64, f64) {
        self.bounds
    }
}

/// Metadata view of a plotted variable.
pub trait SlabSource {
    fn id(&self) -> &str;
    fn min(&self) -> f64;
    fn max(&self) -> f64;
    fn mean(&self) -> f64;
    fn x_axis(&self) -> &AxisMeta;
    fn y_axis(&self) -> &AxisMeta;

    fn z_axis(&self) -> Option<&AxisMeta> {
        None
    }

    fn t_axis(&self) -> Option<&AxisMeta> {
        None
    }

    /// Free-form text attribute (title, source, comments...). Absent
    /// attributes are simply not drawn.
    fn text_attribute(&self, _key: &str) -> Option<&str> {
        None
    }
}

/// A slab built from plain values, for tests and callers that already
/// reduced their data.
#[derive(Debug, Clone, Default)]
pub struct StaticSlab {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub x_axis: Option<AxisMeta>,
    pub y_axis: Option<AxisMeta>,
    pub z_axis: Option<AxisMeta>,
    pub t_axis: Option<AxisMeta>,
    pub attributes: IndexMap<String, String>,
}

impl StaticSlab {
    fn axis_or_default(axis: &Option<AxisMeta>) -> &AxisMeta {
        static UNIT: std::sync::OnceLock<AxisMeta> = std::sync::OnceLock::new();
        axis.as_ref().unwrap_or_else(|| {
            UNIT.get_or_init(|| AxisMeta::new("axis", "", 0.0, 1.0))
        })
    }
}

impl SlabSource for StaticSlab {
    fn id(&self) -> &str {
        &self.id
    }

    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn mean(&self) -> f64 {
        self.mean
    }

    fn x_axis(&self) -> &AxisMeta {
        Self::axis_or_default(&self.x_axis)
    }

    fn y_axis(&self) -> &AxisMeta {
        Self::axis_or_default(&self.y_axis)
    }

    fn z_axis(&self) -> Option<&AxisMeta> {
        self.z_axis.as_ref()
    }

    fn t_axis(&self) -> Option<&AxisMeta> {
        self.t_axis.as_ref()
    }

    fn text_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}
