//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Returns explicit error kinds; HTTP status mapping happens at the boundary.

pub mod auth;
pub mod biometria_service;
pub mod cliente_service;
pub mod documento_service;
pub mod download;
pub mod errors;
pub mod repo;
#[cfg(test)]
pub mod test_support;
