//! Empleado API Handlers
//!
//! List and get responses are denormalized: the referenced area and
//! cargo come joined in the same document.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::{
    AreaId, CargoId, Direccion, Empleado, EmpleadoCreate, EmpleadoDetalle,
};
use crate::db::repository::{AreaRepository, CargoRepository, EmpleadoRepository};
use crate::utils::{AppError, AppResult, money};

/// List all empleados joined with area and cargo
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmpleadoDetalle>>> {
    let repo = EmpleadoRepository::new(state.db.clone());
    let empleados = repo.find_all_detalle().await?;
    Ok(Json(empleados))
}

/// Get empleado by id joined with area and cargo
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<EmpleadoDetalle>> {
    let repo = EmpleadoRepository::new(state.db.clone());
    let empleado = repo
        .find_detalle_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Empleado {} not found", id)))?;
    Ok(Json(empleado))
}

/// Create a new empleado
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmpleadoCreate>,
) -> AppResult<(StatusCode, Json<Empleado>)> {
    let empleado = empleado_from_payload(&state, payload).await?;

    let repo = EmpleadoRepository::new(state.db.clone());
    let created = repo.create(empleado).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace an empleado (the PUT contract takes the full record)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmpleadoCreate>,
) -> AppResult<Json<Empleado>> {
    let empleado = empleado_from_payload(&state, payload).await?;

    let repo = EmpleadoRepository::new(state.db.clone());
    let updated = repo.update(&id, empleado).await?;
    Ok(Json(updated))
}

/// Delete an empleado
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = EmpleadoRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}

/// Validate the payload and resolve its area/cargo references. Both
/// must name existing records.
async fn empleado_from_payload(
    state: &ServerState,
    payload: EmpleadoCreate,
) -> AppResult<Empleado> {
    payload.validate()?;
    money::validate_amount(payload.salario_base, "salarioBase")?;

    let area_id: AreaId = payload
        .area_id
        .parse()
        .map_err(|_| AppError::Invalid(format!("Invalid areaId: {}", payload.area_id)))?;
    let cargo_id: CargoId = payload
        .cargo_id
        .parse()
        .map_err(|_| AppError::Invalid(format!("Invalid cargoId: {}", payload.cargo_id)))?;

    AreaRepository::new(state.db.clone())
        .find_by_id(&payload.area_id)
        .await?
        .ok_or_else(|| AppError::Validation(format!("Area {} does not exist", payload.area_id)))?;
    CargoRepository::new(state.db.clone())
        .find_by_id(&payload.cargo_id)
        .await?
        .ok_or_else(|| {
            AppError::Validation(format!("Cargo {} does not exist", payload.cargo_id))
        })?;

    Ok(Empleado {
        id: None,
        documento: payload.documento,
        nombre: payload.nombre,
        apellido: payload.apellido,
        email: payload.email,
        edad: payload.edad,
        direccion: Direccion {
            ciudad: payload.ciudad,
            barrio: payload.barrio,
        },
        roles: payload.roles.into_vec(),
        salario_base: payload.salario_base,
        area_id,
        cargo_id,
        fecha_contratacion: payload.fecha_contratacion,
    })
}
