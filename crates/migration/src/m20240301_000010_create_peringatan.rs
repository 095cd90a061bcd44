//! Create `peringatan` table.
//! Alerts may point at any entity through `entity_type` + `entity_id`;
//! the SPPG and organization references are kept for filtering.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Peringatan::Table)
                    .if_not_exists()
                    .col(uuid(Peringatan::Id).primary_key())
                    .col(string_len(Peringatan::Judul, 255))
                    .col(text(Peringatan::Deskripsi))
                    .col(string_len(Peringatan::JenisPeringatan, 32))
                    .col(string_len(Peringatan::TingkatPrioritas, 16))
                    .col(string_len(Peringatan::StatusPeringatan, 32).default("AKTIF"))
                    .col(string_len_null(Peringatan::EntityType, 64))
                    .col(uuid_null(Peringatan::EntityId))
                    .col(uuid_null(Peringatan::SppgId))
                    .col(uuid_null(Peringatan::OrganisasiId))
                    .col(timestamp_with_time_zone_null(Peringatan::BatasWaktuTindakan))
                    .col(text_null(Peringatan::TindakanDilakukan))
                    .col(text_null(Peringatan::HasilTindakan))
                    .col(boolean(Peringatan::AutoResolve).default(false))
                    .col(timestamp_with_time_zone_null(Peringatan::ResolvedAt))
                    .col(uuid_null(Peringatan::ResolvedBy))
                    .col(uuid(Peringatan::CreatedBy))
                    .col(timestamp_with_time_zone(Peringatan::CreatedAt))
                    .col(uuid_null(Peringatan::UpdatedBy))
                    .col(timestamp_with_time_zone_null(Peringatan::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_peringatan_sppg")
                            .from(Peringatan::Table, Peringatan::SppgId)
                            .to(Sppg::Table, Sppg::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_peringatan_organisasi")
                            .from(Peringatan::Table, Peringatan::OrganisasiId)
                            .to(Organisasi::Table, Organisasi::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Peringatan::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Peringatan {
    Table,
    Id,
    Judul,
    Deskripsi,
    JenisPeringatan,
    TingkatPrioritas,
    StatusPeringatan,
    EntityType,
    EntityId,
    SppgId,
    OrganisasiId,
    BatasWaktuTindakan,
    TindakanDilakukan,
    HasilTindakan,
    AutoResolve,
    ResolvedAt,
    ResolvedBy,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Sppg { Table, Id }

#[derive(DeriveIden)]
enum Organisasi { Table, Id }
