//! Create `usuario` table for the login module.
//!
//! Stores backoffice operators; password hashes only, never plaintext.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuario::Table)
                    .if_not_exists()
                    .col(pk_auto(Usuario::Id))
                    .col(string_len(Usuario::Email, 255).unique_key().not_null())
                    .col(string_len(Usuario::Nome, 128).not_null())
                    .col(string_len(Usuario::SenhaHash, 255).not_null())
                    .col(string_len(Usuario::SenhaAlgorithm, 32).not_null())
                    .col(timestamp_with_time_zone(Usuario::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Usuario::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Usuario::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Usuario { Table, Id, Email, Nome, SenhaHash, SenhaAlgorithm, CreatedAt, UpdatedAt }
