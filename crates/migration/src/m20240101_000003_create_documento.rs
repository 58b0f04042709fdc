//! Create `documento` table with FK to `cliente`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Documento::Table)
                    .if_not_exists()
                    .col(pk_auto(Documento::Id))
                    .col(integer(Documento::UserId).not_null())
                    .col(string_len(Documento::Tipodocumento, 64).not_null())
                    .col(string_len(Documento::Numerodocumento, 64).not_null())
                    // Validity arrives as a plain string and is stored verbatim
                    .col(string_len(Documento::Validade, 32).not_null())
                    .col(string_len(Documento::Status, 32).not_null())
                    .col(text(Documento::ArquivoDocumento).not_null())
                    .col(ColumnDef::new(Documento::Motivo).text().null())
                    .col(timestamp_with_time_zone(Documento::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Documento::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_documento_cliente")
                            .from(Documento::Table, Documento::UserId)
                            .to(Cliente::Table, Cliente::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Documento::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Documento { Table, Id, UserId, Tipodocumento, Numerodocumento, Validade, Status, ArquivoDocumento, Motivo, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Cliente { Table, Id }
