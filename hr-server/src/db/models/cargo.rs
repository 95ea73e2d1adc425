//! Cargo Model (job title)

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

/// Cargo ID type
pub type CargoId = RecordId;

/// Cargo entity. Same uniqueness rule as [`super::Area`]: `nombre` is
/// the natural key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cargo {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<CargoId>,
    pub nombre: String,
}

/// Create cargo payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CargoCreate {
    #[validate(length(min = 1, message = "nombre is required"))]
    pub nombre: String,
}

/// Update cargo payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CargoUpdate {
    #[validate(length(min = 1, message = "nombre is required"))]
    pub nombre: String,
}
