use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Documento: index on user_id
        manager
            .create_index(
                Index::create()
                    .name("idx_documento_user")
                    .table(Documento::Table)
                    .col(Documento::UserId)
                    .to_owned(),
            )
            .await?;

        // Biometria: index on user_id
        manager
            .create_index(
                Index::create()
                    .name("idx_biometria_user")
                    .table(Biometria::Table)
                    .col(Biometria::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_documento_user").table(Documento::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_biometria_user").table(Biometria::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Documento { Table, UserId }

#[derive(DeriveIden)]
enum Biometria { Table, UserId }
