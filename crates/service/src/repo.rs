//! Generic repository helpers shared by the per-entity services.
//!
//! The per-entity services stay responsible for validation and user-facing
//! messages; the data access itself is the same for every entity.

use sea_orm::{DatabaseConnection, EntityTrait, PrimaryKeyTrait};

use crate::errors::ServiceError;

pub async fn find_all<E>(db: &DatabaseConnection) -> Result<Vec<E::Model>, ServiceError>
where
    E: EntityTrait,
{
    E::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn find_by_id<E>(
    db: &DatabaseConnection,
    id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
) -> Result<Option<E::Model>, ServiceError>
where
    E: EntityTrait,
{
    E::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete by primary key, reporting how many rows went away. Callers turn
/// `0` into their own not-found error.
pub async fn delete_by_id<E>(
    db: &DatabaseConnection,
    id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
) -> Result<u64, ServiceError>
where
    E: EntityTrait,
{
    E::delete_by_id(id)
        .exec(db)
        .await
        .map(|res| res.rows_affected)
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Pagination parameters
#[derive(Clone, Copy, Debug)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    /// Clamp to sane defaults and convert to the 0-based index
    /// `fetch_page` expects.
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, 100);
        ((page - 1) as u64, per_page as u64)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, per_page: 20 }
    }
}
