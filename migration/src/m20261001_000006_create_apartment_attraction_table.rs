use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000002_create_apartment_table::Apartment,
    m20261001_000005_create_attraction_table::Attraction,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApartmentAttraction::Table)
                    .if_not_exists()
                    .col(uuid(ApartmentAttraction::ApartmentId))
                    .col(uuid(ApartmentAttraction::AttractionId))
                    .primary_key(
                        Index::create()
                            .name("pk_apartment_attraction")
                            .col(ApartmentAttraction::ApartmentId)
                            .col(ApartmentAttraction::AttractionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_apartment_attraction_apartment_id")
                            .from(ApartmentAttraction::Table, ApartmentAttraction::ApartmentId)
                            .to(Apartment::Table, Apartment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_apartment_attraction_attraction_id")
                            .from(ApartmentAttraction::Table, ApartmentAttraction::AttractionId)
                            .to(Attraction::Table, Attraction::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Link counts and "who links this attraction" lookups go by attraction id
        manager
            .create_index(
                Index::create()
                    .name("idx_apartment_attraction_attraction_id")
                    .table(ApartmentAttraction::Table)
                    .col(ApartmentAttraction::AttractionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApartmentAttraction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ApartmentAttraction {
    Table,
    ApartmentId,
    AttractionId,
}
