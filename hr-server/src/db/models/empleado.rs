//! Empleado Model

use super::serde_helpers;
use super::{Area, AreaId, Cargo, CargoId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

/// Empleado ID type
pub type EmpleadoId = RecordId;

/// Nested address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Direccion {
    pub ciudad: String,
    pub barrio: String,
}

/// Empleado entity. `documento` is the globally unique natural key used
/// for idempotent upserts; `area_id`/`cargo_id` must reference existing
/// records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Empleado {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<EmpleadoId>,
    pub documento: String,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub edad: i32,
    pub direccion: Direccion,
    #[serde(default)]
    pub roles: Vec<String>,
    pub salario_base: f64,
    #[serde(with = "serde_helpers::record_id")]
    pub area_id: AreaId,
    #[serde(with = "serde_helpers::record_id")]
    pub cargo_id: CargoId,
    pub fecha_contratacion: NaiveDate,
}

/// Roles arrive either as a JSON array or as a comma-separated string
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RolesInput {
    Lista(Vec<String>),
    Texto(String),
}

impl RolesInput {
    /// Normalize to an ordered list of trimmed, non-empty role names
    pub fn into_vec(self) -> Vec<String> {
        match self {
            RolesInput::Lista(roles) => roles,
            RolesInput::Texto(s) => s
                .split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

impl Default for RolesInput {
    fn default() -> Self {
        RolesInput::Lista(Vec::new())
    }
}

/// Create/replace empleado payload (the PUT contract is a full
/// replacement, so updates take the same shape)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmpleadoCreate {
    #[validate(length(min = 1, message = "documento is required"))]
    pub documento: String,
    #[validate(length(min = 1, message = "nombre is required"))]
    pub nombre: String,
    #[validate(length(min = 1, message = "apellido is required"))]
    pub apellido: String,
    #[validate(email)]
    pub email: String,
    pub edad: i32,
    pub ciudad: String,
    pub barrio: String,
    #[serde(default)]
    pub roles: RolesInput,
    pub salario_base: f64,
    pub area_id: String,
    pub cargo_id: String,
    pub fecha_contratacion: NaiveDate,
}

/// Empleado joined with its area and cargo, as returned by the list and
/// get endpoints. A dangling reference leaves the joined field null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmpleadoDetalle {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<EmpleadoId>,
    pub documento: String,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub edad: i32,
    pub direccion: Direccion,
    #[serde(default)]
    pub roles: Vec<String>,
    pub salario_base: f64,
    #[serde(with = "serde_helpers::record_id")]
    pub area_id: AreaId,
    #[serde(with = "serde_helpers::record_id")]
    pub cargo_id: CargoId,
    pub fecha_contratacion: NaiveDate,
    #[serde(default)]
    pub area: Option<Area>,
    #[serde(default)]
    pub cargo: Option<Cargo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_from_comma_separated_text() {
        let roles = RolesInput::Texto("ventas, supervisor ,auditor".to_string());
        assert_eq!(roles.into_vec(), vec!["ventas", "supervisor", "auditor"]);
    }

    #[test]
    fn roles_from_list_pass_through() {
        let roles = RolesInput::Lista(vec!["ventas".to_string()]);
        assert_eq!(roles.into_vec(), vec!["ventas"]);
    }

    #[test]
    fn empty_text_yields_no_roles() {
        assert!(RolesInput::Texto(String::new()).into_vec().is_empty());
    }
}
