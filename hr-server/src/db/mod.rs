//! Database Module
//!
//! Embedded SurrealDB storage: connection setup plus models and
//! repositories for the four collections (`area`, `cargo`, `empleado`,
//! `nomina`).

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "acme";
const DATABASE: &str = "hr";

/// Open the embedded database at the given directory
pub async fn connect(path: &Path) -> Result<Surreal<Db>, surrealdb::Error> {
    let db = Surreal::new::<RocksDb>(path).await?;
    db.use_ns(NAMESPACE).use_db(DATABASE).await?;

    tracing::info!("Database opened at {}", path.display());
    Ok(db)
}

/// Open an in-memory database (tests)
pub async fn connect_memory() -> Result<Surreal<Db>, surrealdb::Error> {
    let db = Surreal::new::<Mem>(()).await?;
    db.use_ns(NAMESPACE).use_db(DATABASE).await?;
    Ok(db)
}
