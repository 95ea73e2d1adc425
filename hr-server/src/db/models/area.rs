//! Area Model (organizational department)

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

/// Area ID type
pub type AreaId = RecordId;

/// Area entity. `nombre` is unique across the collection: the loader
/// upserts on it and the create endpoint rejects duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<AreaId>,
    pub nombre: String,
}

/// Create area payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AreaCreate {
    #[validate(length(min = 1, message = "nombre is required"))]
    pub nombre: String,
}

/// Update area payload (full replacement, as in the PUT contract)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AreaUpdate {
    #[validate(length(min = 1, message = "nombre is required"))]
    pub nombre: String,
}
