use thiserror::Error;

pub type Result<T> = std::result::Result<T, TintError>;

#[derive(Debug, Error)]
pub enum TintError {
    #[error("validation error: {0}")]
    Validation(String),
}
