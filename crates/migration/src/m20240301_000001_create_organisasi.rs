//! Create `organisasi` table.
//! Oversight organizations, optionally nested under a parent organization.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Organisasi::Table)
                    .if_not_exists()
                    .col(uuid(Organisasi::Id).primary_key())
                    .col(string_len(Organisasi::Nama, 255))
                    .col(string_len_null(Organisasi::Singkatan, 64))
                    .col(string_len(Organisasi::Status, 32).default("AKTIF"))
                    .col(integer_null(Organisasi::Tingkat))
                    .col(uuid_null(Organisasi::IndukOrganisasiId))
                    .col(uuid(Organisasi::CreatedBy))
                    .col(timestamp_with_time_zone(Organisasi::CreatedAt))
                    .col(uuid_null(Organisasi::UpdatedBy))
                    .col(timestamp_with_time_zone_null(Organisasi::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_organisasi_induk")
                            .from(Organisasi::Table, Organisasi::IndukOrganisasiId)
                            .to(Organisasi::Table, Organisasi::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Organisasi::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Organisasi {
    Table,
    Id,
    Nama,
    Singkatan,
    Status,
    Tingkat,
    IndukOrganisasiId,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
}
