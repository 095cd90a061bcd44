//! Create `pengguna` table.
//! Dashboard accounts; `sppg_id` scopes an operator to one unit.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pengguna::Table)
                    .if_not_exists()
                    .col(uuid(Pengguna::Id).primary_key())
                    .col(string_len(Pengguna::Email, 255).unique_key())
                    .col(string_len(Pengguna::Nama, 255))
                    .col(string_len(Pengguna::PasswordHash, 255))
                    .col(string_len(Pengguna::PasswordAlgorithm, 32))
                    .col(uuid_null(Pengguna::SppgId))
                    .col(timestamp_with_time_zone(Pengguna::CreatedAt))
                    .col(timestamp_with_time_zone_null(Pengguna::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pengguna_sppg")
                            .from(Pengguna::Table, Pengguna::SppgId)
                            .to(Sppg::Table, Sppg::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Pengguna::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Pengguna {
    Table,
    Id,
    Email,
    Nama,
    PasswordHash,
    PasswordAlgorithm,
    SppgId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Sppg { Table, Id }
