use serde::{Deserialize, Serialize};

use crate::error::PlotdecoSceneError;
use crate::marks::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasInfo {
    pub width: u32,
    pub height: u32,
}

/// Handle to a plotted primitive, returned by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayHandle {
    pub id: u64,
    pub mark: Mark,
}

/// The rendering surface the layout engines draw onto.
///
/// The engines never rasterize anything themselves; they hand finished
/// marks to this trait and read back canvas state (size, orientation,
/// current viewport/world coordinates). A failed `plot` call is not
/// retried and propagates to the caller unchanged.
pub trait Canvas {
    fn canvas_info(&self) -> CanvasInfo;
    fn is_portrait(&self) -> bool;
    /// Whether the canvas window has been realized; closed canvases fall
    /// back to a default aspect when resolving paper ratios.
    fn is_open(&self) -> bool;
    fn viewport(&self) -> [f64; 4];
    fn world_coordinate(&self) -> [f64; 4];
    fn set_viewport(&mut self, viewport: [f64; 4]);
    fn set_world_coordinate(&mut self, world: [f64; 4]);
    fn plot(
        &mut self,
        mark: Mark,
        background: bool,
    ) -> Result<Option<DisplayHandle>, PlotdecoSceneError>;
}

/// An in-memory canvas that records every plotted mark.
///
/// Stands in for a real renderer in tests and headless use.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    pub info: CanvasInfo,
    pub portrait: bool,
    pub open: bool,
    viewport: [f64; 4],
    world: [f64; 4],
    marks: Vec<Mark>,
    next_id: u64,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            info: CanvasInfo { width, height },
            portrait: height > width,
            open: true,
            viewport: [0.0, 1.0, 0.0, 1.0],
            world: [0.0, 1.0, 0.0, 1.0],
            marks: Vec::new(),
            next_id: 0,
        }
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new(959, 728)
    }
}

impl Canvas for RecordingCanvas {
    fn canvas_info(&self) -> CanvasInfo {
        self.info
    }

    fn is_portrait(&self) -> bool {
        self.portrait
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn viewport(&self) -> [f64; 4] {
        self.viewport
    }

    fn world_coordinate(&self) -> [f64; 4] {
        self.world
    }

    fn set_viewport(&mut self, viewport: [f64; 4]) {
        self.viewport = viewport;
    }

    fn set_world_coordinate(&mut self, world: [f64; 4]) {
        self.world = world;
    }

    fn plot(
        &mut self,
        mark: Mark,
        _background: bool,
    ) -> Result<Option<DisplayHandle>, PlotdecoSceneError> {
        // Hidden marks produce no display, mirroring priority 0 semantics.
        if mark.priority() == 0 {
            return Ok(None);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.marks.push(mark.clone());
        Ok(Some(DisplayHandle { id, mark }))
    }
}
