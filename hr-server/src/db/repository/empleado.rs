//! Empleado Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Empleado, EmpleadoDetalle};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const CREATE_SQL: &str = r#"CREATE empleado SET
    documento = $documento,
    nombre = $nombre,
    apellido = $apellido,
    email = $email,
    edad = $edad,
    direccion = $direccion,
    roles = $roles,
    salarioBase = $salarioBase,
    areaId = $areaId,
    cargoId = $cargoId,
    fechaContratacion = $fechaContratacion
RETURN AFTER"#;

const REPLACE_SQL: &str = r#"UPDATE $thing SET
    documento = $documento,
    nombre = $nombre,
    apellido = $apellido,
    email = $email,
    edad = $edad,
    direccion = $direccion,
    roles = $roles,
    salarioBase = $salarioBase,
    areaId = $areaId,
    cargoId = $cargoId,
    fechaContratacion = $fechaContratacion
RETURN AFTER"#;

// areaId/cargoId are record links, so the joined projections resolve
// in the store without a second round trip.
const DETALLE_SQL: &str =
    "SELECT *, areaId.* AS area, cargoId.* AS cargo FROM empleado ORDER BY apellido, nombre";

const DETALLE_BY_ID_SQL: &str =
    "SELECT *, areaId.* AS area, cargoId.* AS cargo FROM $thing";

#[derive(Clone)]
pub struct EmpleadoRepository {
    base: BaseRepository,
}

impl EmpleadoRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all empleados
    pub async fn find_all(&self) -> RepoResult<Vec<Empleado>> {
        let empleados: Vec<Empleado> = self
            .base
            .db()
            .query("SELECT * FROM empleado ORDER BY apellido, nombre")
            .await?
            .take(0)?;
        Ok(empleados)
    }

    /// Find all empleados joined with area and cargo
    pub async fn find_all_detalle(&self) -> RepoResult<Vec<EmpleadoDetalle>> {
        let empleados: Vec<EmpleadoDetalle> =
            self.base.db().query(DETALLE_SQL).await?.take(0)?;
        Ok(empleados)
    }

    /// Find empleado by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Empleado>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let emp: Option<Empleado> = self.base.db().select(thing).await?;
        Ok(emp)
    }

    /// Find empleado by id joined with area and cargo
    pub async fn find_detalle_by_id(&self, id: &str) -> RepoResult<Option<EmpleadoDetalle>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let mut result = self
            .base
            .db()
            .query(DETALLE_BY_ID_SQL)
            .bind(("thing", thing))
            .await?;
        let empleados: Vec<EmpleadoDetalle> = result.take(0)?;
        Ok(empleados.into_iter().next())
    }

    /// Find empleado by documento (the natural key)
    pub async fn find_by_documento(&self, documento: &str) -> RepoResult<Option<Empleado>> {
        let documento_owned = documento.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM empleado WHERE documento = $documento LIMIT 1")
            .bind(("documento", documento_owned))
            .await?;
        let empleados: Vec<Empleado> = result.take(0)?;
        Ok(empleados.into_iter().next())
    }

    /// Create a new empleado
    pub async fn create(&self, emp: Empleado) -> RepoResult<Empleado> {
        // Check duplicate documento
        if self.find_by_documento(&emp.documento).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Empleado with documento '{}' already exists",
                emp.documento
            )));
        }

        self.insert(emp).await
    }

    /// Full replacement of an empleado by id
    pub async fn update(&self, id: &str, emp: Empleado) -> RepoResult<Empleado> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Empleado {} not found", id)))?;

        // Check duplicate documento if changing
        if emp.documento != existing.documento
            && self.find_by_documento(&emp.documento).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Empleado with documento '{}' already exists",
                emp.documento
            )));
        }

        self.replace(thing, emp).await
    }

    /// Insert-or-update keyed on documento. Re-running the loader with
    /// changed source data updates the stored record in place; the id
    /// stays stable.
    pub async fn upsert_by_documento(&self, emp: Empleado) -> RepoResult<Empleado> {
        match self.find_by_documento(&emp.documento).await? {
            Some(existing) => {
                let thing = existing.id.ok_or_else(|| {
                    RepoError::Database("Stored empleado has no id".to_string())
                })?;
                self.replace(thing, emp).await
            }
            None => self.insert(emp).await,
        }
    }

    /// Hard delete an empleado
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Empleado {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }

    async fn insert(&self, emp: Empleado) -> RepoResult<Empleado> {
        let mut result = self
            .base
            .db()
            .query(CREATE_SQL)
            .bind(("documento", emp.documento))
            .bind(("nombre", emp.nombre))
            .bind(("apellido", emp.apellido))
            .bind(("email", emp.email))
            .bind(("edad", emp.edad))
            .bind(("direccion", emp.direccion))
            .bind(("roles", emp.roles))
            .bind(("salarioBase", emp.salario_base))
            .bind(("areaId", emp.area_id))
            .bind(("cargoId", emp.cargo_id))
            .bind(("fechaContratacion", emp.fecha_contratacion))
            .await?;

        let created: Option<Empleado> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create empleado".to_string()))
    }

    async fn replace(&self, thing: RecordId, emp: Empleado) -> RepoResult<Empleado> {
        let mut result = self
            .base
            .db()
            .query(REPLACE_SQL)
            .bind(("thing", thing))
            .bind(("documento", emp.documento))
            .bind(("nombre", emp.nombre))
            .bind(("apellido", emp.apellido))
            .bind(("email", emp.email))
            .bind(("edad", emp.edad))
            .bind(("direccion", emp.direccion))
            .bind(("roles", emp.roles))
            .bind(("salarioBase", emp.salario_base))
            .bind(("areaId", emp.area_id))
            .bind(("cargoId", emp.cargo_id))
            .bind(("fechaContratacion", emp.fecha_contratacion))
            .await?;

        result
            .take::<Option<Empleado>>(0)?
            .ok_or_else(|| RepoError::Database("Failed to update empleado".to_string()))
    }
}
