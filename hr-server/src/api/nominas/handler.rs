//! Nomina API Handlers
//!
//! The three totals (`totalDevengos`, `totalDeducciones`, `salarioNeto`)
//! are always recomputed from the submitted line items; whatever totals
//! a client sends are ignored by construction of the payload type.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::{ConceptoNomina, EmpleadoId, Nomina, NominaCreate, NominaDetalle};
use crate::db::repository::{EmpleadoRepository, NominaRepository};
use crate::utils::{AppError, AppResult, money};

/// List all nominas joined with their empleado
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<NominaDetalle>>> {
    let repo = NominaRepository::new(state.db.clone());
    let nominas = repo.find_all_detalle().await?;
    Ok(Json(nominas))
}

/// Get nomina by id joined with its empleado
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<NominaDetalle>> {
    let repo = NominaRepository::new(state.db.clone());
    let nomina = repo
        .find_detalle_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Nomina {} not found", id)))?;
    Ok(Json(nomina))
}

/// Create a new nomina
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<NominaCreate>,
) -> AppResult<(StatusCode, Json<Nomina>)> {
    let nomina = nomina_from_payload(&state, payload).await?;

    let repo = NominaRepository::new(state.db.clone());
    let created = repo.create(nomina).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace a nomina (the PUT contract takes the full record)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<NominaCreate>,
) -> AppResult<Json<Nomina>> {
    let nomina = nomina_from_payload(&state, payload).await?;

    let repo = NominaRepository::new(state.db.clone());
    let updated = repo.update(&id, nomina).await?;
    Ok(Json(updated))
}

/// Delete a nomina
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = NominaRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}

/// Validate the payload, resolve the empleado reference and derive the
/// totals from the line items.
async fn nomina_from_payload(state: &ServerState, payload: NominaCreate) -> AppResult<Nomina> {
    payload.validate()?;
    money::validate_amount(payload.salario_bruto, "salarioBruto")?;
    for concepto in payload.devengos.iter().chain(payload.deducciones.iter()) {
        money::validate_amount(concepto.valor, "valor")?;
    }

    let empleado_id: EmpleadoId = payload
        .empleado_id
        .parse()
        .map_err(|_| AppError::Invalid(format!("Invalid empleadoId: {}", payload.empleado_id)))?;

    EmpleadoRepository::new(state.db.clone())
        .find_by_id(&payload.empleado_id)
        .await?
        .ok_or_else(|| {
            AppError::Validation(format!("Empleado {} does not exist", payload.empleado_id))
        })?;

    let devengos: Vec<ConceptoNomina> = payload
        .devengos
        .into_iter()
        .map(|c| ConceptoNomina::new(c.concepto, c.valor))
        .collect();
    let deducciones: Vec<ConceptoNomina> = payload
        .deducciones
        .into_iter()
        .map(|c| ConceptoNomina::new(c.concepto, c.valor))
        .collect();

    let total_devengos = money::sum_valores(devengos.iter().map(|c| &c.valor));
    let total_deducciones = money::sum_valores(deducciones.iter().map(|c| &c.valor));
    let salario_neto =
        money::salario_neto(payload.salario_bruto, total_devengos, total_deducciones);

    Ok(Nomina {
        id: None,
        empleado_id,
        periodo: payload.periodo,
        fecha_emision: payload.fecha_emision,
        salario_bruto: payload.salario_bruto,
        devengos,
        deducciones,
        total_devengos,
        total_deducciones,
        salario_neto,
    })
}
