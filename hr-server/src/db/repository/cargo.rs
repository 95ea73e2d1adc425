//! Cargo Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Cargo, CargoCreate, CargoUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Clone)]
pub struct CargoRepository {
    base: BaseRepository,
}

impl CargoRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all cargos ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<Cargo>> {
        let cargos: Vec<Cargo> = self
            .base
            .db()
            .query("SELECT * FROM cargo ORDER BY nombre")
            .await?
            .take(0)?;
        Ok(cargos)
    }

    /// Find cargo by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Cargo>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let cargo: Option<Cargo> = self.base.db().select(thing).await?;
        Ok(cargo)
    }

    /// Find cargo by name
    pub async fn find_by_nombre(&self, nombre: &str) -> RepoResult<Option<Cargo>> {
        let nombre_owned = nombre.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM cargo WHERE nombre = $nombre LIMIT 1")
            .bind(("nombre", nombre_owned))
            .await?;
        let cargos: Vec<Cargo> = result.take(0)?;
        Ok(cargos.into_iter().next())
    }

    /// Create a new cargo
    pub async fn create(&self, data: CargoCreate) -> RepoResult<Cargo> {
        // Check duplicate name
        if self.find_by_nombre(&data.nombre).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Cargo '{}' already exists",
                data.nombre
            )));
        }

        let mut result = self
            .base
            .db()
            .query("CREATE cargo SET nombre = $nombre RETURN AFTER")
            .bind(("nombre", data.nombre))
            .await?;

        let created: Option<Cargo> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create cargo".to_string()))
    }

    /// Insert-or-keep by name, mirroring [`AreaRepository::upsert_by_nombre`]
    ///
    /// [`AreaRepository::upsert_by_nombre`]: super::AreaRepository::upsert_by_nombre
    pub async fn upsert_by_nombre(&self, nombre: &str) -> RepoResult<Cargo> {
        if let Some(existing) = self.find_by_nombre(nombre).await? {
            return Ok(existing);
        }

        let nombre_owned = nombre.to_string();
        let mut result = self
            .base
            .db()
            .query("CREATE cargo SET nombre = $nombre RETURN AFTER")
            .bind(("nombre", nombre_owned))
            .await?;

        let created: Option<Cargo> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to upsert cargo".to_string()))
    }

    /// Update a cargo
    pub async fn update(&self, id: &str, data: CargoUpdate) -> RepoResult<Cargo> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Cargo {} not found", id)))?;

        // Check duplicate name if changing
        if data.nombre != existing.nombre
            && self.find_by_nombre(&data.nombre).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Cargo '{}' already exists",
                data.nombre
            )));
        }

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET nombre = $nombre RETURN AFTER")
            .bind(("thing", thing))
            .bind(("nombre", data.nombre))
            .await?;

        result
            .take::<Option<Cargo>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Cargo {} not found", id)))
    }

    /// Hard delete a cargo
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Cargo {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
