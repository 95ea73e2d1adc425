//! Cargo API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::{Cargo, CargoCreate, CargoUpdate};
use crate::db::repository::CargoRepository;
use crate::utils::{AppError, AppResult};

/// List all cargos
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Cargo>>> {
    let repo = CargoRepository::new(state.db.clone());
    let cargos = repo.find_all().await?;
    Ok(Json(cargos))
}

/// Get cargo by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Cargo>> {
    let repo = CargoRepository::new(state.db.clone());
    let cargo = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Cargo {} not found", id)))?;
    Ok(Json(cargo))
}

/// Create a new cargo
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CargoCreate>,
) -> AppResult<(StatusCode, Json<Cargo>)> {
    payload.validate()?;

    let repo = CargoRepository::new(state.db.clone());
    let cargo = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(cargo)))
}

/// Update a cargo
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CargoUpdate>,
) -> AppResult<Json<Cargo>> {
    payload.validate()?;

    let repo = CargoRepository::new(state.db.clone());
    let cargo = repo.update(&id, payload).await?;
    Ok(Json(cargo))
}

/// Delete a cargo
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = CargoRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
