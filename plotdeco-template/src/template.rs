//! The template aggregate: one named region per decoration slot.
//!
//! A template is only ever built two ways: the immutable "default"
//! baseline, or a deep copy of an existing template under a new name.

use serde::{Deserialize, Serialize};

use crate::region::{
    Axis, BoxRegion, DataRegion, FormatRegion, LegendRegion, Orientation, RegionMut, RegionRef,
    TextRegion, Which, XLabelRegion, XTickRegion, YLabelRegion, YTickRegion,
};

pub const DEFAULT_TEMPLATE: &str = "default";

/// Region referenced by a slab text attribute during attribute drawing.
pub enum AnnotationRef<'a> {
    Text(&'a TextRegion),
    Format(&'a FormatRegion),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub orientation: Orientation,
    /// Latch set by the first font-scaling pass so repeated scaling does
    /// not compound.
    pub scaled_font: bool,

    pub file: TextRegion,
    pub function: TextRegion,
    pub logicalmask: TextRegion,
    pub transformation: TextRegion,
    pub source: TextRegion,
    pub dataname: TextRegion,
    pub title: TextRegion,
    pub units: TextRegion,
    pub crdate: TextRegion,
    pub crtime: TextRegion,
    pub comment1: TextRegion,
    pub comment2: TextRegion,
    pub comment3: TextRegion,
    pub comment4: TextRegion,
    pub xname: TextRegion,
    pub yname: TextRegion,
    pub zname: TextRegion,
    pub tname: TextRegion,
    pub xunits: TextRegion,
    pub yunits: TextRegion,
    pub zunits: TextRegion,
    pub tunits: TextRegion,

    pub xvalue: FormatRegion,
    pub yvalue: FormatRegion,
    pub zvalue: FormatRegion,
    pub tvalue: FormatRegion,
    pub mean: FormatRegion,
    pub min: FormatRegion,
    pub max: FormatRegion,

    pub xtic1: XTickRegion,
    pub xtic2: XTickRegion,
    pub xmintic1: XTickRegion,
    pub xmintic2: XTickRegion,
    pub ytic1: YTickRegion,
    pub ytic2: YTickRegion,
    pub ymintic1: YTickRegion,
    pub ymintic2: YTickRegion,

    pub xlabel1: XLabelRegion,
    pub xlabel2: XLabelRegion,
    pub ylabel1: YLabelRegion,
    pub ylabel2: YLabelRegion,

    pub box1: BoxRegion,
    pub box2: BoxRegion,
    pub box3: BoxRegion,
    pub box4: BoxRegion,
    pub line1: BoxRegion,
    pub line2: BoxRegion,
    pub line3: BoxRegion,
    pub line4: BoxRegion,

    pub legend: LegendRegion,
    pub data: DataRegion,
}

macro_rules! visit_regions {
    ($self:expr, $f:expr, $kind:ident) => {{
        let f = &mut $f;
        f("file", $kind::Text(&$self.file));
        f("function", $kind::Text(&$self.function));
        f("logicalmask", $kind::Text(&$self.logicalmask));
        f("transformation", $kind::Text(&$self.transformation));
        f("source", $kind::Text(&$self.source));
        f("dataname", $kind::Text(&$self.dataname));
        f("title", $kind::Text(&$self.title));
        f("units", $kind::Text(&$self.units));
        f("crdate", $kind::Text(&$self.crdate));
        f("crtime", $kind::Text(&$self.crtime));
        f("comment1", $kind::Text(&$self.comment1));
        f("comment2", $kind::Text(&$self.comment2));
        f("comment3", $kind::Text(&$self.comment3));
        f("comment4", $kind::Text(&$self.comment4));
        f("xname", $kind::Text(&$self.xname));
        f("yname", $kind::Text(&$self.yname));
        f("zname", $kind::Text(&$self.zname));
        f("tname", $kind::Text(&$self.tname));
        f("xunits", $kind::Text(&$self.xunits));
        f("yunits", $kind::Text(&$self.yunits));
        f("zunits", $kind::Text(&$self.zunits));
        f("tunits", $kind::Text(&$self.tunits));
        f("xvalue", $kind::Format(&$self.xvalue));
        f("yvalue", $kind::Format(&$self.yvalue));
        f("zvalue", $kind::Format(&$self.zvalue));
        f("tvalue", $kind::Format(&$self.tvalue));
        f("mean", $kind::Format(&$self.mean));
        f("min", $kind::Format(&$self.min));
        f("max", $kind::Format(&$self.max));
        f("xtic1", $kind::XTick(&$self.xtic1));
        f("xtic2", $kind::XTick(&$self.xtic2));
        f("xmintic1", $kind::XTick(&$self.xmintic1));
        f("xmintic2", $kind::XTick(&$self.xmintic2));
        f("ytic1", $kind::YTick(&$self.ytic1));
        f("ytic2", $kind::YTick(&$self.ytic2));
        f("ymintic1", $kind::YTick(&$self.ymintic1));
        f("ymintic2", $kind::YTick(&$self.ymintic2));
        f("xlabel1", $kind::XLabel(&$self.xlabel1));
        f("xlabel2", $kind::XLabel(&$self.xlabel2));
        f("ylabel1", $kind::YLabel(&$self.ylabel1));
        f("ylabel2", $kind::YLabel(&$self.ylabel2));
        f("box1", $kind::Box(&$self.box1));
        f("box2", $kind::Box(&$self.box2));
        f("box3", $kind::Box(&$self.box3));
        f("box4", $kind::Box(&$self.box4));
        f("line1", $kind::Box(&$self.line1));
        f("line2", $kind::Box(&$self.line2));
        f("line3", $kind::Box(&$self.line3));
        f("line4", $kind::Box(&$self.line4));
        f("legend", $kind::Legend(&$self.legend));
        f("data", $kind::Data(&$self.data));
    }};
    (mut $self:expr, $f:expr, $kind:ident) => {{
        let f = &mut $f;
        f("file", $kind::Text(&mut $self.file));
        f("function", $kind::Text(&mut $self.function));
        f("logicalmask", $kind::Text(&mut $self.logicalmask));
        f("transformation", $kind::Text(&mut $self.transformation));
        f("source", $kind::Text(&mut $self.source));
        f("dataname", $kind::Text(&mut $self.dataname));
        f("title", $kind::Text(&mut $self.title));
        f("units", $kind::Text(&mut $self.units));
        f("crdate", $kind::Text(&mut $self.crdate));
        f("crtime", $kind::Text(&mut $self.crtime));
        f("comment1", $kind::Text(&mut $self.comment1));
        f("comment2", $kind::Text(&mut $self.comment2));
        f("comment3", $kind::Text(&mut $self.comment3));
        f("comment4", $kind::Text(&mut $self.comment4));
        f("xname", $kind::Text(&mut $self.xname));
        f("yname", $kind::Text(&mut $self.yname));
        f("zname", $kind::Text(&mut $self.zname));
        f("tname", $kind::Text(&mut $self.tname));
        f("xunits", $kind::Text(&mut $self.xunits));
        f("yunits", $kind::Text(&mut $self.yunits));
        f("zunits", $kind::Text(&mut $self.zunits));
        f("tunits", $kind::Text(&mut $self.tunits));
        f("xvalue", $kind::Format(&mut $self.xvalue));
        f("yvalue", $kind::Format(&mut $self.yvalue));
        f("zvalue", $kind::Format(&mut $self.zvalue));
        f("tvalue", $kind::Format(&mut $self.tvalue));
        f("mean", $kind::Format(&mut $self.mean));
        f("min", $kind::Format(&mut $self.min));
        f("max", $kind::Format(&mut $self.max));
        f("xtic1", $kind::XTick(&mut $self.xtic1));
        f("xtic2", $kind::XTick(&mut $self.xtic2));
        f("xmintic1", $kind::XTick(&mut $self.xmintic1));
        f("xmintic2", $kind::XTick(&mut $self.xmintic2));
        f("ytic1", $kind::YTick(&mut $self.ytic1));
        f("ytic2", $kind::YTick(&mut $self.ytic2));
        f("ymintic1", $kind::YTick(&mut $self.ymintic1));
        f("ymintic2", $kind::YTick(&mut $self.ymintic2));
        f("xlabel1", $kind::XLabel(&mut $self.xlabel1));
        f("xlabel2", $kind::XLabel(&mut $self.xlabel2));
        f("ylabel1", $kind::YLabel(&mut $self.ylabel1));
        f("ylabel2", $kind::YLabel(&mut $self.ylabel2));
        f("box1", $kind::Box(&mut $self.box1));
        f("box2", $kind::Box(&mut $self.box2));
        f("box3", $kind::Box(&mut $self.box3));
        f("box4", $kind::Box(&mut $self.box4));
        f("line1", $kind::Box(&mut $self.line1));
        f("line2", $kind::Box(&mut $self.line2));
        f("line3", $kind::Box(&mut $self.line3));
        f("line4", $kind::Box(&mut $self.line4));
        f("legend", $kind::Legend(&mut $self.legend));
        f("data", $kind::Data(&mut $self.data));
    }};
}

impl Template {
    /// Deep copy of `source` under a new name. The font-scaling latch is
    /// not inherited.
    pub fn new_from(name: &str, source: &Template) -> Self {
        let mut template = source.clone();
        template.name = name.to_string();
        template.scaled_font = false;
        template
    }

    pub fn for_each_region(&self, mut f: impl FnMut(&'static str, RegionRef<'_>)) {
        visit_regions!(self, f, RegionRef);
    }

    pub fn for_each_region_mut(&mut self, mut f: impl FnMut(&'static str, RegionMut<'_>)) {
        visit_regions!(mut self, f, RegionMut);
    }

    /// Turn off every region, or only the named ones. Unknown names are
    /// skipped.
    pub fn blank(&mut self, names: Option<&[&str]>) {
        self.for_each_region_mut(|name, region| {
            if names.map_or(true, |list| list.contains(&name)) {
                *region.priority_mut() = 0;
            }
        });
    }

    pub fn x_tick_region(&self, which: Which, minor: bool) -> &XTickRegion {
        match (which, minor) {
            (Which::One, false) => &self.xtic1,
            (Which::Two, false) => &self.xtic2,
            (Which::One, true) => &self.xmintic1,
            (Which::Two, true) => &self.xmintic2,
        }
    }

    pub fn y_tick_region(&self, which: Which, minor: bool) -> &YTickRegion {
        match (which, minor) {
            (Which::One, false) => &self.ytic1,
            (Which::Two, false) => &self.ytic2,
            (Which::One, true) => &self.ymintic1,
            (Which::Two, true) => &self.ymintic2,
        }
    }

    pub fn x_label_region(&self, which: Which) -> &XLabelRegion {
        match which {
            Which::One => &self.xlabel1,
            Which::Two => &self.xlabel2,
        }
    }

    pub fn y_label_region(&self, which: Which) -> &YLabelRegion {
        match which {
            Which::One => &self.ylabel1,
            Which::Two => &self.ylabel2,
        }
    }

    /// The region a slab text attribute is drawn into, if there is one.
    /// The slab's `id` attribute lands in the dataname region.
    pub fn annotation_region(&self, key: &str) -> Option<AnnotationRef<'_>> {
        let text = |r| Some(AnnotationRef::Text(r));
        let format = |r| Some(AnnotationRef::Format(r));
        match key {
            "file" => text(&self.file),
            "function" => text(&self.function),
            "logicalmask" => text(&self.logicalmask),
            "transformation" => text(&self.transformation),
            "source" => text(&self.source),
            "id" => text(&self.dataname),
            "title" => text(&self.title),
            "units" => text(&self.units),
            "crdate" => text(&self.crdate),
            "crtime" => text(&self.crtime),
            "comment1" => text(&self.comment1),
            "comment2" => text(&self.comment2),
            "comment3" => text(&self.comment3),
            "comment4" => text(&self.comment4),
            "xname" => text(&self.xname),
            "yname" => text(&self.yname),
            "zname" => text(&self.zname),
            "tname" => text(&self.tname),
            "xunits" => text(&self.xunits),
            "yunits" => text(&self.yunits),
            "zunits" => text(&self.zunits),
            "tunits" => text(&self.tunits),
            "xvalue" => format(&self.xvalue),
            "yvalue" => format(&self.yvalue),
            "zvalue" => format(&self.zvalue),
            "tvalue" => format(&self.tvalue),
            "mean" => format(&self.mean),
            "min" => format(&self.min),
            "max" => format(&self.max),
            _ => None,
        }
    }

    pub fn data_span(&self, axis: Axis) -> (f64, f64) {
        self.data.span(axis)
    }

    /// The immutable baseline layout every other template is copied from.
    pub fn default_template() -> Self {
        let text = |priority: i32, x: f64, y: f64| TextRegion {
            priority,
            x,
            y,
            text_table: "default".to_string(),
            text_orientation: "default".to_string(),
        };
        let format = |priority: i32, x: f64, y: f64| FormatRegion {
            priority,
            x,
            y,
            format: "default".to_string(),
            text_table: "default".to_string(),
            text_orientation: "default".to_string(),
        };
        let xtick = |priority: i32, y1: f64, y2: f64| XTickRegion {
            priority,
            y1,
            y2,
            line: "default".to_string(),
        };
        let ytick = |priority: i32, x1: f64, x2: f64| YTickRegion {
            priority,
            x1,
            x2,
            line: "default".to_string(),
        };
        let boxr = |priority: i32, x1: f64, y1: f64, x2: f64, y2: f64| BoxRegion {
            priority,
            x1,
            y1,
            x2,
            y2,
            line: "default".to_string(),
        };

        Self {
            name: DEFAULT_TEMPLATE.to_string(),
            orientation: Orientation::Landscape,
            scaled_font: false,

            file: text(0, 0.05, 0.013),
            function: text(0, 0.05, 0.013),
            logicalmask: text(0, 0.05, 0.03),
            transformation: text(0, 0.05, 0.047),
            source: text(1, 0.05, 0.941),
            dataname: text(1, 0.05, 0.923),
            title: text(1, 0.15, 0.923),
            units: text(1, 0.67, 0.923),
            crdate: text(1, 0.75, 0.923),
            crtime: text(1, 0.85, 0.923),
            comment1: text(0, 0.1, 0.955),
            comment2: text(0, 0.1, 0.97),
            comment3: text(0, 0.1, 0.985),
            comment4: text(0, 0.1, 0.999),
            xname: TextRegion {
                priority: 1,
                x: 0.5,
                y: 0.21,
                text_table: "default".to_string(),
                text_orientation: "defcenter".to_string(),
            },
            yname: TextRegion {
                priority: 1,
                x: 0.006,
                y: 0.56,
                text_table: "default".to_string(),
                text_orientation: "defup".to_string(),
            },
            zname: text(0, 0.0, 0.995),
            tname: text(0, 0.0, 0.995),
            xunits: text(0, 0.6, 0.21),
            yunits: text(0, 0.006, 0.65),
            zunits: text(0, 0.0, 0.995),
            tunits: text(0, 0.0, 0.995),

            xvalue: format(0, 0.75, 0.9),
            yvalue: format(0, 0.75, 0.88),
            zvalue: format(0, 0.75, 0.86),
            tvalue: format(0, 0.75, 0.84),
            mean: format(1, 0.05, 0.9),
            min: format(1, 0.45, 0.9),
            max: format(1, 0.25, 0.9),

            xtic1: xtick(1, 0.26, 0.247),
            xtic2: xtick(1, 0.86, 0.873),
            xmintic1: xtick(0, 0.26, 0.2565),
            xmintic2: xtick(0, 0.86, 0.8635),
            ytic1: ytick(1, 0.05, 0.037),
            ytic2: ytick(1, 0.95, 0.963),
            ymintic1: ytick(0, 0.05, 0.0435),
            ymintic2: ytick(0, 0.95, 0.9565),

            xlabel1: XLabelRegion {
                priority: 1,
                y: 0.234,
                text_table: "default".to_string(),
                text_orientation: "defcenter".to_string(),
            },
            xlabel2: XLabelRegion {
                priority: 0,
                y: 0.886,
                text_table: "default".to_string(),
                text_orientation: "defcenter".to_string(),
            },
            ylabel1: YLabelRegion {
                priority: 1,
                x: 0.04,
                text_table: "default".to_string(),
                text_orientation: "defright".to_string(),
            },
            ylabel2: YLabelRegion {
                priority: 0,
                x: 0.96,
                text_table: "default".to_string(),
                text_orientation: "default".to_string(),
            },

            box1: boxr(1, 0.05, 0.26, 0.95, 0.86),
            box2: boxr(0, 0.0, 0.0, 1.0, 1.0),
            box3: boxr(0, 0.0, 0.0, 1.0, 1.0),
            box4: boxr(0, 0.0, 0.0, 1.0, 1.0),
            line1: boxr(0, 0.05, 0.56, 0.95, 0.56),
            line2: boxr(0, 0.5, 0.26, 0.5, 0.86),
            line3: boxr(0, 0.0, 0.5, 1.0, 0.5),
            line4: boxr(0, 0.0, 0.5, 1.0, 0.5),

            legend: LegendRegion {
                priority: 1,
                x1: 0.05,
                y1: 0.13,
                x2: 0.95,
                y2: 0.16,
                line: "default".to_string(),
                text_table: "default".to_string(),
                text_orientation: "defcenter".to_string(),
                offset: 0.01,
                arrow: 0.05,
            },
            data: DataRegion {
                priority: 1,
                x1: 0.05,
                y1: 0.26,
                x2: 0.95,
                y2: 0.86,
                ratio: 0.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let t = Template::default_template();
        assert_eq!(t.name, "default");
        assert_eq!(t.data.x1, 0.05);
        assert_eq!(t.data.x2, 0.95);
        assert_eq!(t.box1.x1, t.data.x1);
        assert_eq!(t.xtic1.y1, t.data.y1);
    }

    #[test]
    fn test_region_count() {
        let t = Template::default_template();
        let mut count = 0;
        t.for_each_region(|_, _| count += 1);
        assert_eq!(count, 51);
    }

    #[test]
    fn test_new_from_resets_font_latch() {
        let mut base = Template::default_template();
        base.scaled_font = true;
        let copy = Template::new_from("copy", &base);
        assert_eq!(copy.name, "copy");
        assert!(!copy.scaled_font);
        assert_eq!(copy.data, base.data);
    }

    #[test]
    fn test_blank_subset() {
        let mut t = Template::new_from("b", &Template::default_template());
        t.blank(Some(&["mean", "legend"]));
        assert_eq!(t.mean.priority, 0);
        assert_eq!(t.legend.priority, 0);
        assert_eq!(t.min.priority, 1);
        t.blank(None);
        assert_eq!(t.min.priority, 0);
        assert_eq!(t.data.priority, 0);
    }
}
