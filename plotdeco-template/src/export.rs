//! Flat key/value export of a template, one entry per region field.
//!
//! Keys are `<region>.<field>`; this is the stable external form for
//! saving a template or diffing two of them, independent of the region
//! structs' layout.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::region::RegionRef;
use crate::template::Template;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<i32> for RecordValue {
    fn from(v: i32) -> Self {
        RecordValue::Int(i64::from(v))
    }
}

impl From<f64> for RecordValue {
    fn from(v: f64) -> Self {
        RecordValue::Float(v)
    }
}

impl From<&str> for RecordValue {
    fn from(v: &str) -> Self {
        RecordValue::Str(v.to_string())
    }
}

pub type TemplateRecord = IndexMap<String, RecordValue>;

impl Template {
    pub fn to_record(&self) -> TemplateRecord {
        let mut record = TemplateRecord::new();
        record.insert("name".to_string(), self.name.as_str().into());
        record.insert(
            "orientation".to_string(),
            self.orientation.to_string().as_str().into(),
        );
        self.for_each_region(|name, region| {
            let mut put = |field: &str, value: RecordValue| {
                record.insert(format!("{}.{}", name, field), value);
            };
            match region {
                RegionRef::Text(r) => {
                    put("priority", r.priority.into());
                    put("x", r.x.into());
                    put("y", r.y.into());
                    put("texttable", r.text_table.as_str().into());
                    put("textorientation", r.text_orientation.as_str().into());
                }
                RegionRef::Format(r) => {
                    put("priority", r.priority.into());
                    put("x", r.x.into());
                    put("y", r.y.into());
                    put("format", r.format.as_str().into());
                    put("texttable", r.text_table.as_str().into());
                    put("textorientation", r.text_orientation.as_str().into());
                }
                RegionRef::XTick(r) => {
                    put("priority", r.priority.into());
                    put("y1", r.y1.into());
                    put("y2", r.y2.into());
                    put("line", r.line.as_str().into());
                }
                RegionRef::YTick(r) => {
                    put("priority", r.priority.into());
                    put("x1", r.x1.into());
                    put("x2", r.x2.into());
                    put("line", r.line.as_str().into());
                }
                RegionRef::XLabel(r) => {
                    put("priority", r.priority.into());
                    put("y", r.y.into());
                    put("texttable", r.text_table.as_str().into());
                    put("textorientation", r.text_orientation.as_str().into());
                }
                RegionRef::YLabel(r) => {
                    put("priority", r.priority.into());
                    put("x", r.x.into());
                    put("texttable", r.text_table.as_str().into());
                    put("textorientation", r.text_orientation.as_str().into());
                }
                RegionRef::Box(r) => {
                    put("priority", r.priority.into());
                    put("x1", r.x1.into());
                    put("y1", r.y1.into());
                    put("x2", r.x2.into());
                    put("y2", r.y2.into());
                    put("line", r.line.as_str().into());
                }
                RegionRef::Legend(r) => {
                    put("priority", r.priority.into());
                    put("x1", r.x1.into());
                    put("y1", r.y1.into());
                    put("x2", r.x2.into());
                    put("y2", r.y2.into());
                    put("line", r.line.as_str().into());
                    put("texttable", r.text_table.as_str().into());
                    put("textorientation", r.text_orientation.as_str().into());
                    put("offset", r.offset.into());
                    put("arrow", r.arrow.into());
                }
                RegionRef::Data(r) => {
                    put("priority", r.priority.into());
                    put("x1", r.x1.into());
                    put("y1", r.y1.into());
                    put("x2", r.x2.into());
                    put("y2", r.y2.into());
                    put("ratio", r.ratio.into());
                }
            }
        });
        record
    }
}
