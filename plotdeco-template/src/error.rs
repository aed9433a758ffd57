use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotdecoTemplateError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("an element named '{0}' already exists")]
    NameConflict(String),

    #[error("the default template cannot be modified or removed")]
    ImmutableTarget,

    #[error("no {kind} named '{name}'")]
    UnknownName { kind: &'static str, name: String },
}
