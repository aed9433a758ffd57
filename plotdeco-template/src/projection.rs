use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Coordinate-projection family, looked up by projection name.
///
/// Linear projections are mapped to screen space by the layout engines
/// themselves; for the other families the engines emit raw world
/// coordinates and attach viewport/world metadata for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "lowercase")]
pub enum ProjectionKind {
    Linear,
    Round,
    Elliptical,
    Other,
}

impl ProjectionKind {
    pub fn is_linear(&self) -> bool {
        matches!(self, ProjectionKind::Linear)
    }

    /// Round (and elliptical, which are round in outline) projections
    /// have no straight axis edge to hang labels on.
    pub fn is_round(&self) -> bool {
        matches!(self, ProjectionKind::Round | ProjectionKind::Elliptical)
    }

    pub fn is_elliptical(&self) -> bool {
        matches!(self, ProjectionKind::Elliptical)
    }
}
