//! Create `biometria` table with FK to `cliente`.
//!
//! The biometric payload is stored as an opaque string; capture happens in a
//! separate system and rows arrive through it, not through this API.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Biometria::Table)
                    .if_not_exists()
                    .col(pk_auto(Biometria::Id))
                    .col(integer(Biometria::UserId).not_null())
                    .col(string_len(Biometria::TipoBiometria, 64).not_null())
                    .col(text(Biometria::DadosBiometricos).not_null())
                    .col(ColumnDef::new(Biometria::Motivo).text().null())
                    .col(timestamp_with_time_zone(Biometria::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Biometria::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_biometria_cliente")
                            .from(Biometria::Table, Biometria::UserId)
                            .to(Cliente::Table, Cliente::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Biometria::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Biometria { Table, Id, UserId, TipoBiometria, DadosBiometricos, Motivo, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Cliente { Table, Id }
