//! CSV-to-store loader, run once at startup before serving
//!
//! Four steps, strictly ordered: areas, cargos, empleados, nominas.
//! Each later step depends on identifiers or records produced by an
//! earlier one, so the ordering is a hard dependency. Two error tiers:
//!
//! - *data quality* (a row naming an unknown area/cargo/empleado, or an
//!   unparsable field): skip the row, warn, keep going;
//! - *infrastructure* (I/O, CSV parse, store fault): abort the step and
//!   the whole run. The caller must not start serving on a partial load.

pub mod csv_source;
pub mod loader;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::db::repository::RepoError;

/// Infrastructure-tier loader error. Aborts the run.
#[derive(Debug, Error)]
pub enum EtlError {
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Store error: {0}")]
    Repo(#[from] RepoError),
}

/// Loaded/skipped row counts for one loader step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepCounts {
    pub loaded: usize,
    pub skipped: usize,
}

/// Per-run outcome, logged at the end so silently skipped rows are
/// visible to operators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EtlSummary {
    /// Distinct areas known after the load
    pub areas: usize,
    /// Distinct cargos known after the load
    pub cargos: usize,
    pub empleados: StepCounts,
    pub nominas: StepCounts,
}

impl EtlSummary {
    pub fn skipped_total(&self) -> usize {
        self.empleados.skipped + self.nominas.skipped
    }

    pub fn log(&self) {
        tracing::info!(
            "[ETL] Load complete: {} areas, {} cargos known",
            self.areas,
            self.cargos
        );
        tracing::info!(
            "[ETL] Empleados: {} upserted, {} skipped",
            self.empleados.loaded,
            self.empleados.skipped
        );
        tracing::info!(
            "[ETL] Nominas: {} upserted, {} skipped",
            self.nominas.loaded,
            self.nominas.skipped
        );
        if self.skipped_total() > 0 {
            tracing::warn!(
                "[ETL] {} rows skipped for data-quality reasons; review the source files",
                self.skipped_total()
            );
        }
    }
}

/// Run the four loader steps in order against `data_dir`
pub async fn run(db: &Surreal<Db>, data_dir: &Path) -> Result<EtlSummary, EtlError> {
    tracing::info!("[ETL] Starting data load from {}", data_dir.display());

    let area_map = loader::load_areas(db, data_dir).await?;
    let cargo_map = loader::load_cargos(db, data_dir).await?;
    let empleados = loader::load_empleados(db, data_dir, &area_map, &cargo_map).await?;
    let nominas = loader::load_nominas(db, data_dir).await?;

    Ok(EtlSummary {
        areas: area_map.len(),
        cargos: cargo_map.len(),
        empleados,
        nominas,
    })
}
