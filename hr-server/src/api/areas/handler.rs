//! Area API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::{Area, AreaCreate, AreaUpdate};
use crate::db::repository::AreaRepository;
use crate::utils::{AppError, AppResult};

/// List all areas
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Area>>> {
    let repo = AreaRepository::new(state.db.clone());
    let areas = repo.find_all().await?;
    Ok(Json(areas))
}

/// Get area by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Area>> {
    let repo = AreaRepository::new(state.db.clone());
    let area = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Area {} not found", id)))?;
    Ok(Json(area))
}

/// Create a new area
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AreaCreate>,
) -> AppResult<(StatusCode, Json<Area>)> {
    payload.validate()?;

    let repo = AreaRepository::new(state.db.clone());
    let area = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(area)))
}

/// Update an area
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<AreaUpdate>,
) -> AppResult<Json<Area>> {
    payload.validate()?;

    let repo = AreaRepository::new(state.db.clone());
    let area = repo.update(&id, payload).await?;
    Ok(Json(area))
}

/// Delete an area
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = AreaRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
