//! Create `cliente` table.
//!
//! CPF uniqueness is a database constraint; concurrent inserts of the same
//! CPF surface as a unique-violation, never as a duplicated row.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cliente::Table)
                    .if_not_exists()
                    .col(pk_auto(Cliente::Id))
                    .col(string_len(Cliente::Cpf, 14).unique_key().not_null())
                    .col(string_len(Cliente::Nome, 128).not_null())
                    .col(ColumnDef::new(Cliente::Email).string_len(255).null())
                    .col(ColumnDef::new(Cliente::Telefone).string_len(32).null())
                    .col(ColumnDef::new(Cliente::Linkdownload).text().null())
                    .col(ColumnDef::new(Cliente::Statusdownload).string_len(64).null())
                    .col(timestamp_with_time_zone(Cliente::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Cliente::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cliente::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Cliente { Table, Id, Cpf, Nome, Email, Telefone, Linkdownload, Statusdownload, CreatedAt, UpdatedAt }
