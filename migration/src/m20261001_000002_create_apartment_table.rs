use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Apartment::Table)
                    .if_not_exists()
                    .col(pk_uuid(Apartment::Id))
                    .col(uuid(Apartment::OwnerId))
                    .col(string(Apartment::Name))
                    .col(string(Apartment::Address))
                    .col(
                        timestamp_with_time_zone(Apartment::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_apartment_owner_id")
                            .from(Apartment::Table, Apartment::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_apartment_owner_id")
                    .table(Apartment::Table)
                    .col(Apartment::OwnerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Apartment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Apartment {
    Table,
    Id,
    OwnerId,
    Name,
    Address,
    CreatedAt,
}
