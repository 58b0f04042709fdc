use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use models::biometria;

use crate::errors::ServiceError;
use crate::repo;

const NOT_FOUND_MSG: &str = "Nenhuma biometria encontrada";

// Read-only surface: biometric rows are written by the capture pipeline,
// the API only exposes them.

pub async fn list_biometrias(db: &DatabaseConnection) -> Result<Vec<biometria::Model>, ServiceError> {
    let all = repo::find_all::<biometria::Entity>(db).await?;
    if all.is_empty() {
        return Err(ServiceError::NotFound(NOT_FOUND_MSG.into()));
    }
    Ok(all)
}

pub async fn get_biometria(db: &DatabaseConnection, id: i32) -> Result<biometria::Model, ServiceError> {
    repo::find_by_id::<biometria::Entity>(db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(NOT_FOUND_MSG.into()))
}

pub async fn list_biometrias_by_user(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Vec<biometria::Model>, ServiceError> {
    let rows = biometria::Entity::find()
        .filter(biometria::Column::UserId.eq(user_id))
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if rows.is_empty() {
        return Err(ServiceError::NotFound(NOT_FOUND_MSG.into()));
    }
    Ok(rows)
}
