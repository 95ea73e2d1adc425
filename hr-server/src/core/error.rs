use thiserror::Error;

/// Fatal server-level errors raised during startup and serving.
///
/// Per-request errors use [`crate::utils::AppError`] instead; anything
/// surfacing here aborts the process.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("ETL load error: {0}")]
    Etl(#[from] crate::etl::EtlError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<surrealdb::Error> for ServerError {
    fn from(err: surrealdb::Error) -> Self {
        ServerError::Database(err.to_string())
    }
}

/// Result alias for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;
