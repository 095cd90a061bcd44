//! Create `notifikasi_peringatan` table.
//! One row per alert and recipient; dropped together with either.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NotifikasiPeringatan::Table)
                    .if_not_exists()
                    .col(uuid(NotifikasiPeringatan::Id).primary_key())
                    .col(uuid(NotifikasiPeringatan::PeringatanId))
                    .col(uuid(NotifikasiPeringatan::UserId))
                    .col(boolean(NotifikasiPeringatan::Dibaca).default(false))
                    .col(timestamp_with_time_zone_null(NotifikasiPeringatan::DibacaAt))
                    .col(boolean(NotifikasiPeringatan::Dismiss).default(false))
                    .col(timestamp_with_time_zone_null(NotifikasiPeringatan::DismissAt))
                    .col(boolean(NotifikasiPeringatan::ChannelEmail).default(true))
                    .col(boolean(NotifikasiPeringatan::ChannelInApp).default(true))
                    .col(timestamp_with_time_zone(NotifikasiPeringatan::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notifikasi_peringatan_peringatan")
                            .from(NotifikasiPeringatan::Table, NotifikasiPeringatan::PeringatanId)
                            .to(Peringatan::Table, Peringatan::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notifikasi_peringatan_pengguna")
                            .from(NotifikasiPeringatan::Table, NotifikasiPeringatan::UserId)
                            .to(Pengguna::Table, Pengguna::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_notifikasi_peringatan_user")
                    .table(NotifikasiPeringatan::Table)
                    .col(NotifikasiPeringatan::UserId)
                    .col(NotifikasiPeringatan::Dismiss)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(NotifikasiPeringatan::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum NotifikasiPeringatan {
    Table,
    Id,
    PeringatanId,
    UserId,
    Dibaca,
    DibacaAt,
    Dismiss,
    DismissAt,
    ChannelEmail,
    ChannelInApp,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Peringatan { Table, Id }

#[derive(DeriveIden)]
enum Pengguna { Table, Id }
