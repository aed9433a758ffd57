use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotdecoScaleError {
    #[error("unsupported format spec: {0}")]
    InvalidFormat(String),
}
