use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("A control requires a non-empty name")]
    MissingName,

    #[error("Control `{control}` has no type")]
    MissingType { control: String },

    #[error("Control `{control}` has no orientation")]
    MissingOrientation { control: String },

    #[error("Label is already bound to another control")]
    LabelAlreadyBound,

    #[error(transparent)]
    Template(#[from] minijinja::Error),

    #[error("{0}")]
    Resolver(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("{0}")]
    Panicked(String),
}

pub type Result<T> = std::result::Result<T, FormError>;
