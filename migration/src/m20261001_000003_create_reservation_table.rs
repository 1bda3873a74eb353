use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000002_create_apartment_table::Apartment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_uuid(Reservation::Id))
                    .col(uuid(Reservation::ApartmentId))
                    .col(timestamp_with_time_zone(Reservation::StartDate))
                    .col(timestamp_with_time_zone(Reservation::EndDate))
                    .col(string(Reservation::ClientName).default(""))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_apartment_id")
                            .from(Reservation::Table, Reservation::ApartmentId)
                            .to(Apartment::Table, Apartment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Overlap lookups filter by apartment and compare both bounds
        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_apartment_dates")
                    .table(Reservation::Table)
                    .col(Reservation::ApartmentId)
                    .col(Reservation::StartDate)
                    .col(Reservation::EndDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    ApartmentId,
    StartDate,
    EndDate,
    ClientName,
}
