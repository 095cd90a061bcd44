//! Create `checklist_harian` table.
//! Daily hygiene checklist; `skor_kepatuhan` is computed by the service.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChecklistHarian::Table)
                    .if_not_exists()
                    .col(uuid(ChecklistHarian::Id).primary_key())
                    .col(date(ChecklistHarian::Tanggal))
                    .col(boolean(ChecklistHarian::KebersihanSdm))
                    .col(boolean(ChecklistHarian::KebersihanInfrastruktur))
                    .col(boolean(ChecklistHarian::KondisiPeralatan))
                    .col(double_null(ChecklistHarian::SuhuPenyimpanan))
                    .col(text_null(ChecklistHarian::Catatan))
                    .col(json(ChecklistHarian::FotoEvidence))
                    .col(double_null(ChecklistHarian::SkorKepatuhan))
                    .col(string_len(ChecklistHarian::Status, 32).default("DRAFT"))
                    .col(uuid(ChecklistHarian::SppgId))
                    .col(uuid(ChecklistHarian::CreatedBy))
                    .col(timestamp_with_time_zone(ChecklistHarian::CreatedAt))
                    .col(uuid_null(ChecklistHarian::UpdatedBy))
                    .col(timestamp_with_time_zone_null(ChecklistHarian::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_checklist_harian_sppg")
                            .from(ChecklistHarian::Table, ChecklistHarian::SppgId)
                            .to(Sppg::Table, Sppg::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ChecklistHarian::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ChecklistHarian {
    Table,
    Id,
    Tanggal,
    KebersihanSdm,
    KebersihanInfrastruktur,
    KondisiPeralatan,
    SuhuPenyimpanan,
    Catatan,
    FotoEvidence,
    SkorKepatuhan,
    Status,
    SppgId,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Sppg { Table, Id }
