use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use models::errors::ModelError;

use crate::auth::domain::{AuthUser, Credentials};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError> {
        let res = models::usuario::Entity::find()
            .filter(models::usuario::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(|u| AuthUser { id: u.id, email: u.email, nome: u.nome }))
    }

    async fn create_usuario(
        &self,
        email: &str,
        nome: &str,
        senha_hash: &str,
        senha_algorithm: &str,
    ) -> Result<AuthUser, AuthError> {
        let created = models::usuario::create(&self.db, email, nome, senha_hash, senha_algorithm)
            .await
            .map_err(|e| match e {
                ModelError::Duplicate(_) => AuthError::Conflict,
                ModelError::Validation(msg) => AuthError::Validation(msg),
                ModelError::Db(msg) => AuthError::Repository(msg),
            })?;
        Ok(AuthUser { id: created.id, email: created.email, nome: created.nome })
    }

    async fn get_credentials(&self, usuario_id: i32) -> Result<Option<Credentials>, AuthError> {
        let res = models::usuario::Entity::find_by_id(usuario_id)
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(|u| Credentials {
            usuario_id: u.id,
            senha_hash: u.senha_hash,
            senha_algorithm: u.senha_algorithm,
        }))
    }
}
