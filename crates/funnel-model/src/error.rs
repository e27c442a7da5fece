use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("invalid column override (expected field=Header): {0}")]
    InvalidOverride(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
