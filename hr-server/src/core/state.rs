use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::{Config, Result};

/// Shared server state - one instance cloned into every handler
///
/// Holds the configuration and the embedded database handle. Cloning is
/// cheap: `Surreal<Db>` is an `Arc` internally. The store handle is
/// injected here once at startup and passed down explicitly; there is no
/// process-wide mutable client.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    /// Build a state around an already-open database handle
    ///
    /// Used by tests with the in-memory engine
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// Initialize the server state
    ///
    /// 1. Ensure the working directory structure exists
    /// 2. Open the embedded database under `work_dir/database/`
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db = crate::db::connect(&config.database_dir()).await?;

        Ok(Self::new(config.clone(), db))
    }

    /// Database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
