//! The four loader steps
//!
//! `load_areas`/`load_cargos` are the small map-builders; `load_empleados`
//! adds reference resolution and field coercion; `load_nominas` adds the
//! derived payroll aggregation.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::csv_source::{self, AreaRow, CargoRow, EmpleadoRow, NominaRow};
use super::{EtlError, StepCounts};
use crate::db::models::{AreaId, CargoId, ConceptoNomina, Direccion, Empleado, Nomina};
use crate::db::repository::{
    AreaRepository, CargoRepository, EmpleadoRepository, NominaRepository, RepoError,
};
use crate::utils::money;

/// Upsert every area by name, then re-read the collection and return the
/// name-to-id map. Empty input: empty map, no writes.
pub async fn load_areas(
    db: &Surreal<Db>,
    data_dir: &Path,
) -> Result<HashMap<String, RecordId>, EtlError> {
    let file = data_dir.join("areas.csv");
    tracing::info!("[ETL] Loading areas from {}", file.display());

    let rows: Vec<AreaRow> = csv_source::read_rows(&file)?;
    if rows.is_empty() {
        tracing::warn!("[ETL] No area rows; skipping step");
        return Ok(HashMap::new());
    }

    let repo = AreaRepository::new(db.clone());
    for row in rows {
        repo.upsert_by_nombre(&row.nombre).await?;
    }

    // Re-read so the map carries the store-assigned ids, including areas
    // that existed before this run.
    let mut map = HashMap::new();
    for area in repo.find_all().await? {
        if let Some(id) = area.id {
            map.insert(area.nombre, id);
        }
    }

    tracing::info!("[ETL] Areas loaded: {} known", map.len());
    Ok(map)
}

/// Same contract as [`load_areas`], for cargos
pub async fn load_cargos(
    db: &Surreal<Db>,
    data_dir: &Path,
) -> Result<HashMap<String, RecordId>, EtlError> {
    let file = data_dir.join("cargos.csv");
    tracing::info!("[ETL] Loading cargos from {}", file.display());

    let rows: Vec<CargoRow> = csv_source::read_rows(&file)?;
    if rows.is_empty() {
        tracing::warn!("[ETL] No cargo rows; skipping step");
        return Ok(HashMap::new());
    }

    let repo = CargoRepository::new(db.clone());
    for row in rows {
        repo.upsert_by_nombre(&row.nombre).await?;
    }

    let mut map = HashMap::new();
    for cargo in repo.find_all().await? {
        if let Some(id) = cargo.id {
            map.insert(cargo.nombre, id);
        }
    }

    tracing::info!("[ETL] Cargos loaded: {} known", map.len());
    Ok(map)
}

/// Upsert empleados by documento, resolving area/cargo display names
/// through the maps built by the earlier steps. A row naming an unknown
/// area or cargo, or carrying unparsable fields, is skipped with a
/// warning; a store fault aborts the step.
pub async fn load_empleados(
    db: &Surreal<Db>,
    data_dir: &Path,
    area_map: &HashMap<String, RecordId>,
    cargo_map: &HashMap<String, RecordId>,
) -> Result<StepCounts, EtlError> {
    let file = data_dir.join("empleados.csv");
    tracing::info!("[ETL] Loading empleados from {}", file.display());

    let rows: Vec<EmpleadoRow> = csv_source::read_rows(&file)?;
    let mut counts = StepCounts::default();
    if rows.is_empty() {
        tracing::warn!("[ETL] No empleado rows; skipping step");
        return Ok(counts);
    }

    let repo = EmpleadoRepository::new(db.clone());
    for row in rows {
        let Some(area_id) = area_map.get(&row.area) else {
            tracing::warn!(
                "[ETL] Area '{}' not found for empleado {}; skipping row",
                row.area,
                row.documento
            );
            counts.skipped += 1;
            continue;
        };
        let Some(cargo_id) = cargo_map.get(&row.cargo) else {
            tracing::warn!(
                "[ETL] Cargo '{}' not found for empleado {}; skipping row",
                row.cargo,
                row.documento
            );
            counts.skipped += 1;
            continue;
        };

        let empleado = match empleado_from_row(&row, area_id.clone(), cargo_id.clone()) {
            Ok(empleado) => empleado,
            Err(reason) => {
                tracing::warn!(
                    "[ETL] Bad data for empleado {}: {}; skipping row",
                    row.documento,
                    reason
                );
                counts.skipped += 1;
                continue;
            }
        };

        repo.upsert_by_documento(empleado).await?;
        counts.loaded += 1;
    }

    tracing::info!(
        "[ETL] Empleados loaded: {} upserted, {} skipped",
        counts.loaded,
        counts.skipped
    );
    Ok(counts)
}

/// Upsert nominas by `(empleadoId, periodo)`. The referenced empleado is
/// looked up in the store per row (not through an in-memory map), and
/// `salarioBruto` is taken from that record's `salarioBase` - never from
/// the CSV. Missing empleado or bad fields: skip-and-warn.
pub async fn load_nominas(db: &Surreal<Db>, data_dir: &Path) -> Result<StepCounts, EtlError> {
    let file = data_dir.join("nominas.csv");
    tracing::info!("[ETL] Loading nominas from {}", file.display());

    let rows: Vec<NominaRow> = csv_source::read_rows(&file)?;
    let mut counts = StepCounts::default();
    if rows.is_empty() {
        tracing::warn!("[ETL] No nomina rows; skipping step");
        return Ok(counts);
    }

    let nominas = NominaRepository::new(db.clone());
    let empleados = EmpleadoRepository::new(db.clone());
    for row in rows {
        let Some(empleado) = empleados.find_by_documento(&row.documento_empleado).await? else {
            tracing::warn!(
                "[ETL] Empleado not found for nomina: {}; skipping row",
                row.documento_empleado
            );
            counts.skipped += 1;
            continue;
        };
        let empleado_id = empleado
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Stored empleado has no id".to_string()))?;

        let nomina = match nomina_from_row(&row, empleado_id, empleado.salario_base) {
            Ok(nomina) => nomina,
            Err(reason) => {
                tracing::warn!(
                    "[ETL] Bad data for nomina of {}: {}; skipping row",
                    row.documento_empleado,
                    reason
                );
                counts.skipped += 1;
                continue;
            }
        };

        nominas.upsert_by_empleado_periodo(nomina).await?;
        counts.loaded += 1;
    }

    tracing::info!(
        "[ETL] Nominas loaded: {} upserted, {} skipped",
        counts.loaded,
        counts.skipped
    );
    Ok(counts)
}

// ========== Row shaping (pure) ==========

fn empleado_from_row(
    row: &EmpleadoRow,
    area_id: AreaId,
    cargo_id: CargoId,
) -> Result<Empleado, String> {
    let edad: i32 = row
        .edad
        .trim()
        .parse()
        .map_err(|_| format!("unparsable edad '{}'", row.edad))?;
    let salario_base: f64 = row
        .salario_base
        .trim()
        .parse()
        .map_err(|_| format!("unparsable salarioBase '{}'", row.salario_base))?;
    let fecha_contratacion: NaiveDate = row
        .fecha_contratacion
        .trim()
        .parse()
        .map_err(|_| format!("unparsable fechaContratacion '{}'", row.fecha_contratacion))?;

    Ok(Empleado {
        id: None,
        documento: row.documento.clone(),
        nombre: row.nombre.clone(),
        apellido: row.apellido.clone(),
        email: row.email.clone(),
        edad,
        direccion: Direccion {
            ciudad: row.ciudad.clone(),
            barrio: row.barrio.clone(),
        },
        roles: split_roles(row.roles.as_deref()),
        salario_base,
        area_id,
        cargo_id,
        fecha_contratacion,
    })
}

fn nomina_from_row(
    row: &NominaRow,
    empleado_id: RecordId,
    salario_base: f64,
) -> Result<Nomina, String> {
    let fecha_emision: NaiveDate = row
        .fecha_emision
        .trim()
        .parse()
        .map_err(|_| format!("unparsable fechaEmision '{}'", row.fecha_emision))?;

    let mut devengos = Vec::new();
    if let Some(c) = slot(&row.devengos_concepto1, &row.devengos_valor1)? {
        devengos.push(c);
    }
    if let Some(c) = slot(&row.devengos_concepto2, &row.devengos_valor2)? {
        devengos.push(c);
    }

    let mut deducciones = Vec::new();
    if let Some(c) = slot(&row.deducciones_concepto1, &row.deducciones_valor1)? {
        deducciones.push(c);
    }
    if let Some(c) = slot(&row.deducciones_concepto2, &row.deducciones_valor2)? {
        deducciones.push(c);
    }

    let total_devengos = money::sum_valores(devengos.iter().map(|c| &c.valor));
    let total_deducciones = money::sum_valores(deducciones.iter().map(|c| &c.valor));
    let salario_bruto = salario_base;
    let salario_neto = money::salario_neto(salario_bruto, total_devengos, total_deducciones);

    Ok(Nomina {
        id: None,
        empleado_id,
        periodo: row.periodo.clone(),
        fecha_emision,
        salario_bruto,
        devengos,
        deducciones,
        total_devengos,
        total_deducciones,
        salario_neto,
    })
}

/// A concept/value slot counts only when both fields are present and
/// non-empty. An unparsable value disqualifies the whole row.
fn slot(
    concepto: &Option<String>,
    valor: &Option<String>,
) -> Result<Option<ConceptoNomina>, String> {
    match (non_empty(concepto), non_empty(valor)) {
        (Some(c), Some(v)) => {
            let parsed: f64 = v
                .parse()
                .map_err(|_| format!("unparsable valor '{}' for concepto '{}'", v, c))?;
            Ok(Some(ConceptoNomina::new(c, parsed)))
        }
        _ => Ok(None),
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn split_roles(roles: Option<&str>) -> Vec<String> {
    roles
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
