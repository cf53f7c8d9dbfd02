use thiserror::Error;

/// Top-level server error, for startup and shutdown paths.
///
/// Request-level failures use `shared::AppError`; this type only covers
/// faults that take the whole process down.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
