//! Repository Module
//!
//! CRUD plus natural-key upserts over the SurrealDB collections. The
//! upsert-by-business-key operations (`upsert_by_nombre`,
//! `upsert_by_documento`, `upsert_by_empleado_periodo`) carry the
//! loader's idempotence contract: same key, same record, stable id.

pub mod area;
pub mod cargo;
pub mod empleado;
pub mod nomina;

// Re-exports
pub use area::AreaRepository;
pub use cargo::CargoRepository;
pub use empleado::EmpleadoRepository;
pub use nomina::NominaRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
