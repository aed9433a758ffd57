use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotdecoSceneError {
    #[error("canvas draw failed: {0}")]
    Canvas(String),
}
