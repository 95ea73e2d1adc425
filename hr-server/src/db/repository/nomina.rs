//! Nomina Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{EmpleadoId, Nomina, NominaDetalle};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const CREATE_SQL: &str = r#"CREATE nomina SET
    empleadoId = $empleadoId,
    periodo = $periodo,
    fechaEmision = $fechaEmision,
    salarioBruto = $salarioBruto,
    devengos = $devengos,
    deducciones = $deducciones,
    totalDevengos = $totalDevengos,
    totalDeducciones = $totalDeducciones,
    salarioNeto = $salarioNeto
RETURN AFTER"#;

const REPLACE_SQL: &str = r#"UPDATE $thing SET
    empleadoId = $empleadoId,
    periodo = $periodo,
    fechaEmision = $fechaEmision,
    salarioBruto = $salarioBruto,
    devengos = $devengos,
    deducciones = $deducciones,
    totalDevengos = $totalDevengos,
    totalDeducciones = $totalDeducciones,
    salarioNeto = $salarioNeto
RETURN AFTER"#;

const DETALLE_SQL: &str =
    "SELECT *, empleadoId.* AS empleado FROM nomina ORDER BY periodo";

const DETALLE_BY_ID_SQL: &str = "SELECT *, empleadoId.* AS empleado FROM $thing";

#[derive(Clone)]
pub struct NominaRepository {
    base: BaseRepository,
}

impl NominaRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all nominas
    pub async fn find_all(&self) -> RepoResult<Vec<Nomina>> {
        let nominas: Vec<Nomina> = self
            .base
            .db()
            .query("SELECT * FROM nomina ORDER BY periodo")
            .await?
            .take(0)?;
        Ok(nominas)
    }

    /// Find all nominas joined with their empleado
    pub async fn find_all_detalle(&self) -> RepoResult<Vec<NominaDetalle>> {
        let nominas: Vec<NominaDetalle> =
            self.base.db().query(DETALLE_SQL).await?.take(0)?;
        Ok(nominas)
    }

    /// Find nomina by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Nomina>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let nomina: Option<Nomina> = self.base.db().select(thing).await?;
        Ok(nomina)
    }

    /// Find nomina by id joined with its empleado
    pub async fn find_detalle_by_id(&self, id: &str) -> RepoResult<Option<NominaDetalle>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let mut result = self
            .base
            .db()
            .query(DETALLE_BY_ID_SQL)
            .bind(("thing", thing))
            .await?;
        let nominas: Vec<NominaDetalle> = result.take(0)?;
        Ok(nominas.into_iter().next())
    }

    /// Find nomina by its natural key `(empleadoId, periodo)`
    pub async fn find_by_empleado_periodo(
        &self,
        empleado_id: &EmpleadoId,
        periodo: &str,
    ) -> RepoResult<Option<Nomina>> {
        let empleado_id = empleado_id.clone();
        let periodo_owned = periodo.to_string();
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM nomina WHERE empleadoId = $empleadoId AND periodo = $periodo LIMIT 1",
            )
            .bind(("empleadoId", empleado_id))
            .bind(("periodo", periodo_owned))
            .await?;
        let nominas: Vec<Nomina> = result.take(0)?;
        Ok(nominas.into_iter().next())
    }

    /// Create a new nomina
    pub async fn create(&self, nomina: Nomina) -> RepoResult<Nomina> {
        self.insert(nomina).await
    }

    /// Full replacement of a nomina by id
    pub async fn update(&self, id: &str, nomina: Nomina) -> RepoResult<Nomina> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Nomina {} not found", id)))?;

        self.replace(thing, nomina).await
    }

    /// Insert-or-update keyed on `(empleadoId, periodo)`, so reloading
    /// the same pay period never duplicates a record.
    pub async fn upsert_by_empleado_periodo(&self, nomina: Nomina) -> RepoResult<Nomina> {
        match self
            .find_by_empleado_periodo(&nomina.empleado_id, &nomina.periodo)
            .await?
        {
            Some(existing) => {
                let thing = existing.id.ok_or_else(|| {
                    RepoError::Database("Stored nomina has no id".to_string())
                })?;
                self.replace(thing, nomina).await
            }
            None => self.insert(nomina).await,
        }
    }

    /// Hard delete a nomina
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Nomina {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }

    async fn insert(&self, nomina: Nomina) -> RepoResult<Nomina> {
        let mut result = self
            .base
            .db()
            .query(CREATE_SQL)
            .bind(("empleadoId", nomina.empleado_id))
            .bind(("periodo", nomina.periodo))
            .bind(("fechaEmision", nomina.fecha_emision))
            .bind(("salarioBruto", nomina.salario_bruto))
            .bind(("devengos", nomina.devengos))
            .bind(("deducciones", nomina.deducciones))
            .bind(("totalDevengos", nomina.total_devengos))
            .bind(("totalDeducciones", nomina.total_deducciones))
            .bind(("salarioNeto", nomina.salario_neto))
            .await?;

        let created: Option<Nomina> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create nomina".to_string()))
    }

    async fn replace(&self, thing: RecordId, nomina: Nomina) -> RepoResult<Nomina> {
        let mut result = self
            .base
            .db()
            .query(REPLACE_SQL)
            .bind(("thing", thing))
            .bind(("empleadoId", nomina.empleado_id))
            .bind(("periodo", nomina.periodo))
            .bind(("fechaEmision", nomina.fecha_emision))
            .bind(("salarioBruto", nomina.salario_bruto))
            .bind(("devengos", nomina.devengos))
            .bind(("deducciones", nomina.deducciones))
            .bind(("totalDevengos", nomina.total_devengos))
            .bind(("totalDeducciones", nomina.total_deducciones))
            .bind(("salarioNeto", nomina.salario_neto))
            .await?;

        result
            .take::<Option<Nomina>>(0)?
            .ok_or_else(|| RepoError::Database("Failed to update nomina".to_string()))
    }
}
