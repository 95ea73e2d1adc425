//! Area Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Area, AreaCreate, AreaUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Clone)]
pub struct AreaRepository {
    base: BaseRepository,
}

impl AreaRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all areas ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<Area>> {
        let areas: Vec<Area> = self
            .base
            .db()
            .query("SELECT * FROM area ORDER BY nombre")
            .await?
            .take(0)?;
        Ok(areas)
    }

    /// Find area by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Area>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let area: Option<Area> = self.base.db().select(thing).await?;
        Ok(area)
    }

    /// Find area by name
    pub async fn find_by_nombre(&self, nombre: &str) -> RepoResult<Option<Area>> {
        let nombre_owned = nombre.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM area WHERE nombre = $nombre LIMIT 1")
            .bind(("nombre", nombre_owned))
            .await?;
        let areas: Vec<Area> = result.take(0)?;
        Ok(areas.into_iter().next())
    }

    /// Create a new area
    pub async fn create(&self, data: AreaCreate) -> RepoResult<Area> {
        // Check duplicate name
        if self.find_by_nombre(&data.nombre).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Area '{}' already exists",
                data.nombre
            )));
        }

        let mut result = self
            .base
            .db()
            .query("CREATE area SET nombre = $nombre RETURN AFTER")
            .bind(("nombre", data.nombre))
            .await?;

        let created: Option<Area> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create area".to_string()))
    }

    /// Insert-or-keep by name. Existing record is left untouched and
    /// returned; the id stays stable across repeated calls.
    pub async fn upsert_by_nombre(&self, nombre: &str) -> RepoResult<Area> {
        if let Some(existing) = self.find_by_nombre(nombre).await? {
            return Ok(existing);
        }

        let nombre_owned = nombre.to_string();
        let mut result = self
            .base
            .db()
            .query("CREATE area SET nombre = $nombre RETURN AFTER")
            .bind(("nombre", nombre_owned))
            .await?;

        let created: Option<Area> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to upsert area".to_string()))
    }

    /// Update an area (full replacement of the mutable fields)
    pub async fn update(&self, id: &str, data: AreaUpdate) -> RepoResult<Area> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Area {} not found", id)))?;

        // Check duplicate name if changing
        if data.nombre != existing.nombre
            && self.find_by_nombre(&data.nombre).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Area '{}' already exists",
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
            .take::<Option<Area>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Area {} not found", id)))
    }

    /// Hard delete an area
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Area {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
