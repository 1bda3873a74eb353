//! Apartment data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::apartment::CreateApartmentParams;

/// Repository for apartment records.
///
/// Generic over the connection so services can run its queries inside a transaction.
pub struct ApartmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApartmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new apartment with a generated ID.
    pub async fn create(
        &self,
        params: CreateApartmentParams,
    ) -> Result<entity::apartment::Model, DbErr> {
        entity::apartment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            owner_id: ActiveValue::Set(params.owner_id),
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::apartment::Model>, DbErr> {
        entity::prelude::Apartment::find_by_id(id).one(self.db).await
    }

    /// Locks an apartment row for the rest of the transaction, then reads it.
    ///
    /// Must run before any read in the transaction. The no-op update takes the Sqlite
    /// write lock (a row lock on Postgres), so a competing transaction waits here for
    /// the busy timeout instead of failing when it upgrades from a read.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Apartment exists and is locked
    /// - `Ok(None)` - No apartment with that ID, nothing locked
    pub async fn find_by_id_for_update(
        &self,
        id: Uuid,
    ) -> Result<Option<entity::apartment::Model>, DbErr> {
        let locked = entity::prelude::Apartment::update_many()
            .col_expr(
                entity::apartment::Column::Id,
                Expr::col(entity::apartment::Column::Id),
            )
            .filter(entity::apartment::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if locked.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Replaces the name and address of an apartment.
    pub async fn update(
        &self,
        id: Uuid,
        name: String,
        address: String,
    ) -> Result<entity::apartment::Model, DbErr> {
        entity::apartment::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(name),
            address: ActiveValue::Set(address),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Gets all apartments of an owner ordered by name.
    pub async fn get_by_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<entity::apartment::Model>, DbErr> {
        entity::prelude::Apartment::find()
            .filter(entity::apartment::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::apartment::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets the IDs of an owner's apartments except `excluded_id`.
    pub async fn get_ids_by_owner_except(
        &self,
        owner_id: Uuid,
        excluded_id: Uuid,
    ) -> Result<Vec<Uuid>, DbErr> {
        entity::prelude::Apartment::find()
            .select_only()
            .column(entity::apartment::Column::Id)
            .filter(entity::apartment::Column::OwnerId.eq(owner_id))
            .filter(entity::apartment::Column::Id.ne(excluded_id))
            .into_tuple::<Uuid>()
            .all(self.db)
            .await
    }
}
