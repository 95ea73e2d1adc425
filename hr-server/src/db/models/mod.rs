//! Entity models for the four collections
//!
//! Ids are store-generated [`surrealdb::RecordId`]s, serialized on the
//! wire as `"table:id"` strings via [`serde_helpers`]. All JSON field
//! names are camelCase, matching the CSV column names and the public
//! API (`salarioBase`, `areaId`, `fechaContratacion`).

pub mod area;
pub mod cargo;
pub mod empleado;
pub mod nomina;
pub mod serde_helpers;

pub use area::{Area, AreaCreate, AreaId, AreaUpdate};
pub use cargo::{Cargo, CargoCreate, CargoId, CargoUpdate};
pub use empleado::{Direccion, Empleado, EmpleadoCreate, EmpleadoDetalle, EmpleadoId, RolesInput};
pub use nomina::{ConceptoInput, ConceptoNomina, Nomina, NominaCreate, NominaDetalle, NominaId};
