//! Acme HR Server - corporate HR record service
//!
//! # Architecture overview
//!
//! Single-process HTTP service backed by an embedded SurrealDB store:
//!
//! - **ETL** (`etl`): one-shot CSV-to-store loader run at startup
//! - **Database** (`db`): embedded SurrealDB storage and repositories
//! - **HTTP API** (`api`): RESTful CRUD per entity
//!
//! # Module structure
//!
//! ```text
//! hr-server/src/
//! ├── core/          # config, state, server, errors
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # models and repositories
//! ├── etl/           # CSV loader
//! └── utils/         # errors, logging, money helpers
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod etl;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use etl::{EtlError, EtlSummary};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging. Call once, before anything else.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // Missing .env is fine; environment variables still apply
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    init_logger_with_file(Some(&log_level), std::env::var("LOG_DIR").ok().as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ___
   /   | _________ ___  ___
  / /| |/ ___/ __ `__ \/ _ \
 / ___ / /__/ / / / / /  __/
/_/  |_\___/_/ /_/ /_/\___/
    __  ______
   / / / / __ \
  / /_/ / /_/ /
 / __  / _, _/
/_/ /_/_/ |_|
    "#
    );
}
