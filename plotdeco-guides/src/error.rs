use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotdecoGuidesError {
    #[error(transparent)]
    Template(#[from] plotdeco_template::error::PlotdecoTemplateError),

    #[error(transparent)]
    Scale(#[from] plotdeco_scales::error::PlotdecoScaleError),

    #[error(transparent)]
    Scene(#[from] plotdeco_scenegraph::error::PlotdecoSceneError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
