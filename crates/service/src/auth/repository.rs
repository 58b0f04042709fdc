use async_trait::async_trait;

use super::domain::{AuthUser, Credentials};
use super::errors::AuthError;

/// Repository abstraction for login-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError>;
    async fn create_usuario(
        &self,
        email: &str,
        nome: &str,
        senha_hash: &str,
        senha_algorithm: &str,
    ) -> Result<AuthUser, AuthError>;
    async fn get_credentials(&self, usuario_id: i32) -> Result<Option<Credentials>, AuthError>;
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAuthRepository {
        users: Mutex<HashMap<String, (AuthUser, Credentials)>>, // key: email
        next_id: AtomicI32,
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError> {
            let users = self.users.lock().unwrap();
            Ok(users.get(email).map(|(u, _)| u.clone()))
        }

        async fn create_usuario(
            &self,
            email: &str,
            nome: &str,
            senha_hash: &str,
            senha_algorithm: &str,
        ) -> Result<AuthUser, AuthError> {
            let mut users = self.users.lock().unwrap();
            if users.contains_key(email) {
                return Err(AuthError::Conflict);
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let user = AuthUser { id, email: email.to_string(), nome: nome.to_string() };
            let creds = Credentials {
                usuario_id: id,
                senha_hash: senha_hash.to_string(),
                senha_algorithm: senha_algorithm.to_string(),
            };
            users.insert(email.to_string(), (user.clone(), creds));
            Ok(user)
        }

        async fn get_credentials(&self, usuario_id: i32) -> Result<Option<Credentials>, AuthError> {
            let users = self.users.lock().unwrap();
            Ok(users
                .values()
                .find(|(u, _)| u.id == usuario_id)
                .map(|(_, c)| c.clone()))
        }
    }
}
