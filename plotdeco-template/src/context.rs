//! Explicit catalogs for everything templates reference by name.
//!
//! Templates store style names, not styles; the catalogs own the styles
//! and the layout engines resolve names at draw time. A `LayoutContext`
//! bundles all the catalogs so a drawing call needs a single handle.

use indexmap::IndexMap;
use plotdeco_scales::labels::TickLabelMap;

use crate::error::PlotdecoTemplateError;
use crate::projection::ProjectionKind;
use crate::style::{LineStyle, TextOrientation, TextTable};
use crate::template::{Template, DEFAULT_TEMPLATE};

/// Named line and text styles.
///
/// `create_*_from` clones an existing style under a fresh generated name;
/// layout engines use this for the transient per-draw styles they remove
/// before returning, and font scaling uses it for its per-template
/// clones.
#[derive(Debug, Clone, Default)]
pub struct StyleCatalog {
    lines: IndexMap<String, LineStyle>,
    text_tables: IndexMap<String, TextTable>,
    text_orientations: IndexMap<String, TextOrientation>,
    next_id: u64,
}

impl StyleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding the styles the default template references.
    pub fn with_defaults() -> Self {
        use plotdeco_scenegraph::marks::text::{TextAlign, TextBaseline};

        let mut catalog = Self::new();
        catalog.lines.insert("default".to_string(), LineStyle::default());
        catalog
            .text_tables
            .insert("default".to_string(), TextTable::default());
        catalog
            .text_orientations
            .insert("default".to_string(), TextOrientation::default());
        catalog.text_orientations.insert(
            "defcenter".to_string(),
            TextOrientation {
                halign: TextAlign::Center,
                ..TextOrientation::default()
            },
        );
        catalog.text_orientations.insert(
            "defright".to_string(),
            TextOrientation {
                halign: TextAlign::Right,
                ..TextOrientation::default()
            },
        );
        catalog.text_orientations.insert(
            "defup".to_string(),
            TextOrientation {
                angle: -90.0,
                halign: TextAlign::Center,
                ..TextOrientation::default()
            },
        );
        catalog
    }

    fn fresh_name(&mut self, prefix: &str) -> String {
        loop {
            self.next_id += 1;
            let name = format!("__{}_{}", prefix, self.next_id);
            if !self.lines.contains_key(&name)
                && !self.text_tables.contains_key(&name)
                && !self.text_orientations.contains_key(&name)
            {
                return name;
            }
        }
    }

    pub fn line(&self, name: &str) -> Option<&LineStyle> {
        self.lines.get(name)
    }

    pub fn line_mut(&mut self, name: &str) -> Option<&mut LineStyle> {
        self.lines.get_mut(name)
    }

    pub fn text_table(&self, name: &str) -> Option<&TextTable> {
        self.text_tables.get(name)
    }

    pub fn text_table_mut(&mut self, name: &str) -> Option<&mut TextTable> {
        self.text_tables.get_mut(name)
    }

    pub fn text_orientation(&self, name: &str) -> Option<&TextOrientation> {
        self.text_orientations.get(name)
    }

    pub fn text_orientation_mut(&mut self, name: &str) -> Option<&mut TextOrientation> {
        self.text_orientations.get_mut(name)
    }

    pub fn insert_line(&mut self, name: &str, style: LineStyle) {
        self.lines.insert(name.to_string(), style);
    }

    pub fn insert_text_table(&mut self, name: &str, style: TextTable) {
        self.text_tables.insert(name.to_string(), style);
    }

    pub fn insert_text_orientation(&mut self, name: &str, style: TextOrientation) {
        self.text_orientations.insert(name.to_string(), style);
    }

    /// Insert `style` under a fresh generated name and return the name.
    pub fn create_line(&mut self, style: LineStyle) -> String {
        let name = self.fresh_name("line");
        self.lines.insert(name.clone(), style);
        name
    }

    /// Clone the line style `source` under a fresh name and return the
    /// name.
    pub fn create_line_from(&mut self, source: &str) -> Result<String, PlotdecoTemplateError> {
        let style = self
            .lines
            .get(source)
            .cloned()
            .ok_or_else(|| PlotdecoTemplateError::UnknownName {
                kind: "line style",
                name: source.to_string(),
            })?;
        let name = self.fresh_name("line");
        self.lines.insert(name.clone(), style);
        Ok(name)
    }

    pub fn create_text_table_from(&mut self, source: &str) -> Result<String, PlotdecoTemplateError> {
        let style = self
            .text_tables
            .get(source)
            .cloned()
            .ok_or_else(|| PlotdecoTemplateError::UnknownName {
                kind: "text table",
                name: source.to_string(),
            })?;
        let name = self.fresh_name("texttable");
        self.text_tables.insert(name.clone(), style);
        Ok(name)
    }

    pub fn create_text_orientation_from(
        &mut self,
        source: &str,
    ) -> Result<String, PlotdecoTemplateError> {
        let style = self
            .text_orientations
            .get(source)
            .cloned()
            .ok_or_else(|| PlotdecoTemplateError::UnknownName {
                kind: "text orientation",
                name: source.to_string(),
            })?;
        let name = self.fresh_name("textorientation");
        self.text_orientations.insert(name.clone(), style);
        Ok(name)
    }

    pub fn remove_line(&mut self, name: &str) {
        self.lines.shift_remove(name);
    }

    pub fn remove_text_table(&mut self, name: &str) {
        self.text_tables.shift_remove(name);
    }

    pub fn remove_text_orientation(&mut self, name: &str) {
        self.text_orientations.shift_remove(name);
    }

    pub fn len(&self) -> usize {
        self.lines.len() + self.text_tables.len() + self.text_orientations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Projection names mapped to their coordinate family.
#[derive(Debug, Clone, Default)]
pub struct ProjectionCatalog {
    kinds: IndexMap<String, ProjectionKind>,
}

impl ProjectionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        for name in ["default", "linear"] {
            catalog.insert(name, ProjectionKind::Linear);
        }
        for name in ["robinson", "polar", "orthographic", "stereographic"] {
            catalog.insert(name, ProjectionKind::Round);
        }
        catalog.insert("mollweide", ProjectionKind::Elliptical);
        catalog
    }

    pub fn insert(&mut self, name: &str, kind: ProjectionKind) {
        self.kinds.insert(name.to_string(), kind);
    }

    pub fn kind(&self, name: &str) -> Result<ProjectionKind, PlotdecoTemplateError> {
        self.kinds
            .get(name)
            .copied()
            .ok_or_else(|| PlotdecoTemplateError::UnknownName {
                kind: "projection",
                name: name.to_string(),
            })
    }
}

/// The named templates. The default template is seeded at construction
/// and is immutable; new templates are created by copying an existing
/// one.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: IndexMap<String, Template>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        let mut templates = IndexMap::new();
        templates.insert(DEFAULT_TEMPLATE.to_string(), Template::default_template());
        Self { templates }
    }
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `name` as a copy of `source` (the default template when
    /// `None`).
    pub fn create(
        &mut self,
        name: &str,
        source: Option<&str>,
    ) -> Result<&mut Template, PlotdecoTemplateError> {
        if name.is_empty() {
            return Err(PlotdecoTemplateError::InvalidArgument(
                "template name cannot be empty".to_string(),
            ));
        }
        if self.templates.contains_key(name) {
            return Err(PlotdecoTemplateError::NameConflict(name.to_string()));
        }
        let source = source.unwrap_or(DEFAULT_TEMPLATE);
        let base = self
            .templates
            .get(source)
            .ok_or_else(|| PlotdecoTemplateError::UnknownName {
                kind: "template",
                name: source.to_string(),
            })?;
        let template = Template::new_from(name, base);
        Ok(self.templates.entry(name.to_string()).or_insert(template))
    }

    pub fn get(&self, name: &str) -> Result<&Template, PlotdecoTemplateError> {
        self.templates
            .get(name)
            .ok_or_else(|| PlotdecoTemplateError::UnknownName {
                kind: "template",
                name: name.to_string(),
            })
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Template, PlotdecoTemplateError> {
        if name == DEFAULT_TEMPLATE {
            return Err(PlotdecoTemplateError::ImmutableTarget);
        }
        self.templates
            .get_mut(name)
            .ok_or_else(|| PlotdecoTemplateError::UnknownName {
                kind: "template",
                name: name.to_string(),
            })
    }

    pub fn remove(&mut self, name: &str) -> Result<(), PlotdecoTemplateError> {
        if name == DEFAULT_TEMPLATE {
            return Err(PlotdecoTemplateError::ImmutableTarget);
        }
        self.templates
            .shift_remove(name)
            .map(|_| ())
            .ok_or_else(|| PlotdecoTemplateError::UnknownName {
                kind: "template",
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Everything a layout pass needs besides the template itself.
///
/// Fields are public so callers can borrow the catalogs independently,
/// e.g. a mutable style catalog alongside an immutable template.
pub struct LayoutContext {
    pub templates: TemplateRegistry,
    pub styles: StyleCatalog,
    pub projections: ProjectionCatalog,
    /// Named tick sets, for graphics methods that reference a tick list
    /// by name instead of carrying a map inline.
    pub tick_lists: IndexMap<String, TickLabelMap>,
    /// Named numeric formats for annotation regions.
    pub formats: IndexMap<String, String>,
}

impl Default for LayoutContext {
    fn default() -> Self {
        let mut formats = IndexMap::new();
        formats.insert("default".to_string(), ":g".to_string());
        Self {
            templates: TemplateRegistry::new(),
            styles: StyleCatalog::with_defaults(),
            projections: ProjectionCatalog::with_defaults(),
            tick_lists: IndexMap::new(),
            formats,
        }
    }
}

impl LayoutContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(&self, name: &str) -> Option<&str> {
        self.formats.get(name).map(String::as_str)
    }
}
