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
                    .table(Attraction::Table)
                    .if_not_exists()
                    .col(pk_uuid(Attraction::Id))
                    .col(string(Attraction::Kind))
                    .col(uuid(Attraction::OwnerId))
                    .col(string(Attraction::Title))
                    .col(text(Attraction::Description))
                    .col(json(Attraction::ImagesUrl))
                    .col(string_null(Attraction::TitleImage))
                    .col(double_null(Attraction::Lat))
                    .col(double_null(Attraction::Lng))
                    .col(
                        timestamp_with_time_zone(Attraction::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attraction_owner_id")
                            .from(Attraction::Table, Attraction::OwnerId)
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
                    .name("idx_attraction_owner_kind")
                    .table(Attraction::Table)
                    .col(Attraction::OwnerId)
                    .col(Attraction::Kind)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attraction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attraction {
    Table,
    Id,
    Kind,
    OwnerId,
    Title,
    Description,
    ImagesUrl,
    TitleImage,
    Lat,
    Lng,
    CreatedAt,
}
