//! Nomina Model (payroll record, one employee for one pay period)

use super::serde_helpers;
use super::{Empleado, EmpleadoId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use uuid::Uuid;
use validator::Validate;

/// Nomina ID type
pub type NominaId = RecordId;

/// One earning (devengo) or deduction (deducción) line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptoNomina {
    pub id: Uuid,
    pub concepto: String,
    pub valor: f64,
}

impl ConceptoNomina {
    pub fn new(concepto: impl Into<String>, valor: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            concepto: concepto.into(),
            valor,
        }
    }
}

/// Nomina entity. Natural key `(empleado_id, periodo)`. The three
/// totals are always derived from the line items, never stored from
/// client or CSV input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nomina {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<NominaId>,
    #[serde(with = "serde_helpers::record_id")]
    pub empleado_id: EmpleadoId,
    pub periodo: String,
    pub fecha_emision: NaiveDate,
    pub salario_bruto: f64,
    #[serde(default)]
    pub devengos: Vec<ConceptoNomina>,
    #[serde(default)]
    pub deducciones: Vec<ConceptoNomina>,
    pub total_devengos: f64,
    pub total_deducciones: f64,
    pub salario_neto: f64,
}

/// Line item as submitted through the API (id assigned server-side)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConceptoInput {
    #[validate(length(min = 1, message = "concepto is required"))]
    pub concepto: String,
    pub valor: f64,
}

/// Create/replace nomina payload. Totals are recomputed server-side
/// from `devengos`/`deducciones`; any client-supplied totals are
/// ignored by construction.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NominaCreate {
    pub empleado_id: String,
    #[validate(length(min = 1, message = "periodo is required"))]
    pub periodo: String,
    pub fecha_emision: NaiveDate,
    pub salario_bruto: f64,
    #[serde(default)]
    #[validate(nested)]
    pub devengos: Vec<ConceptoInput>,
    #[serde(default)]
    #[validate(nested)]
    pub deducciones: Vec<ConceptoInput>,
}

/// Nomina joined with its empleado, as returned by the list and get
/// endpoints. A dangling reference leaves `empleado` null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NominaDetalle {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<NominaId>,
    #[serde(with = "serde_helpers::record_id")]
    pub empleado_id: EmpleadoId,
    pub periodo: String,
    pub fecha_emision: NaiveDate,
    pub salario_bruto: f64,
    #[serde(default)]
    pub devengos: Vec<ConceptoNomina>,
    #[serde(default)]
    pub deducciones: Vec<ConceptoNomina>,
    pub total_devengos: f64,
    pub total_deducciones: f64,
    pub salario_neto: f64,
    #[serde(default)]
    pub empleado: Option<Empleado>,
}
