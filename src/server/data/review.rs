//! Review data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::review::CreateReviewParams;

pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a review with a generated ID, timestamped now.
    pub async fn create(&self, params: CreateReviewParams) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            apartment_id: ActiveValue::Set(params.apartment_id),
            reservation_id: ActiveValue::Set(params.reservation_id),
            comfort_rating: ActiveValue::Set(params.comfort_rating),
            experience_rating: ActiveValue::Set(params.experience_rating),
            value_rating: ActiveValue::Set(params.value_rating),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Gets all reviews of an apartment, newest first.
    pub async fn get_by_apartment(
        &self,
        apartment_id: Uuid,
    ) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::ApartmentId.eq(apartment_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Checks whether a reservation has been reviewed already.
    pub async fn exists_for_reservation(&self, reservation_id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::ReservationId.eq(reservation_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
