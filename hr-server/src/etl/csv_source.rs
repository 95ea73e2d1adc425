//! CSV sources for the loader
//!
//! Row structs mirror the CSV column headers (camelCase). Fields that
//! need coercion (numbers, dates, role lists) stay `String` here; the
//! loader converts them and decides per-row whether to skip.

use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::EtlError;

/// Row of areas.csv
#[derive(Debug, Clone, Deserialize)]
pub struct AreaRow {
    pub nombre: String,
}

/// Row of cargos.csv
#[derive(Debug, Clone, Deserialize)]
pub struct CargoRow {
    pub nombre: String,
}

/// Row of empleados.csv. `area`/`cargo` are display names resolved
/// against the maps built by the earlier steps.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmpleadoRow {
    pub documento: String,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub edad: String,
    pub ciudad: String,
    pub barrio: String,
    #[serde(default)]
    pub roles: Option<String>,
    pub salario_base: String,
    pub area: String,
    pub cargo: String,
    pub fecha_contratacion: String,
}

/// Row of nominas.csv. Up to two devengo and two deducción slots as
/// flat columns; a slot counts only when both fields are non-empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NominaRow {
    pub documento_empleado: String,
    pub periodo: String,
    pub fecha_emision: String,
    #[serde(default)]
    pub devengos_concepto1: Option<String>,
    #[serde(default)]
    pub devengos_valor1: Option<String>,
    #[serde(default)]
    pub devengos_concepto2: Option<String>,
    #[serde(default)]
    pub devengos_valor2: Option<String>,
    #[serde(default)]
    pub deducciones_concepto1: Option<String>,
    #[serde(default)]
    pub deducciones_valor1: Option<String>,
    #[serde(default)]
    pub deducciones_concepto2: Option<String>,
    #[serde(default)]
    pub deducciones_valor2: Option<String>,
}

/// Read all rows of a CSV file.
///
/// A missing file is not an error: sources are optional and an absent
/// one just means the step has nothing to do. A present but malformed
/// file aborts the run.
pub fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, EtlError> {
    if !path.exists() {
        tracing::warn!("[ETL] Source file {} not found; skipping", path.display());
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }

    tracing::info!("[ETL] Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
