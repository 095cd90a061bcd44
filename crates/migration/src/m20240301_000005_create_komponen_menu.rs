//! Create `komponen_menu` table.
//! Components go away with their menu.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KomponenMenu::Table)
                    .if_not_exists()
                    .col(uuid(KomponenMenu::Id).primary_key())
                    .col(string_len(KomponenMenu::NamaBahan, 255))
                    .col(double(KomponenMenu::Jumlah))
                    .col(string_len(KomponenMenu::Satuan, 32))
                    .col(double_null(KomponenMenu::KaloriPer100g))
                    .col(double_null(KomponenMenu::ProteinPer100g))
                    .col(double_null(KomponenMenu::KarbohidratPer100g))
                    .col(double_null(KomponenMenu::LemakPer100g))
                    .col(uuid(KomponenMenu::MenuHarianId))
                    .col(uuid(KomponenMenu::CreatedBy))
                    .col(timestamp_with_time_zone(KomponenMenu::CreatedAt))
                    .col(uuid_null(KomponenMenu::UpdatedBy))
                    .col(timestamp_with_time_zone_null(KomponenMenu::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_komponen_menu_menu_harian")
                            .from(KomponenMenu::Table, KomponenMenu::MenuHarianId)
                            .to(MenuHarian::Table, MenuHarian::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(KomponenMenu::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum KomponenMenu {
    Table,
    Id,
    NamaBahan,
    Jumlah,
    Satuan,
    #[sea_orm(iden = "kalori_per_100g")]
    KaloriPer100g,
    #[sea_orm(iden = "protein_per_100g")]
    ProteinPer100g,
    #[sea_orm(iden = "karbohidrat_per_100g")]
    KarbohidratPer100g,
    #[sea_orm(iden = "lemak_per_100g")]
    LemakPer100g,
    MenuHarianId,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum MenuHarian { Table, Id }
