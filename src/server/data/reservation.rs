//! Reservation data repository.
//!
//! Provides the closed-interval overlap query used to reject double bookings, the
//! "current reservation" lookup and plain CRUD. Callers that check for overlaps and then
//! write must run both steps on the same transaction.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    model::reservation::CreateReservationParams, util::interval::DateRange,
};

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a reservation with a generated ID.
    pub async fn create(
        &self,
        params: CreateReservationParams,
    ) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            apartment_id: ActiveValue::Set(params.apartment_id),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            client_name: ActiveValue::Set(params.client_name),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Locks a reservation row for the rest of the transaction, then reads it.
    ///
    /// Must run before any read in the transaction, for the same reason as
    /// `ApartmentRepository::find_by_id_for_update`.
    pub async fn find_by_id_for_update(
        &self,
        id: Uuid,
    ) -> Result<Option<entity::reservation::Model>, DbErr> {
        let locked = entity::prelude::Reservation::update_many()
            .col_expr(
                entity::reservation::Column::Id,
                Expr::col(entity::reservation::Column::Id),
            )
            .filter(entity::reservation::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if locked.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Updates the dates and client name of a reservation.
    pub async fn update(
        &self,
        id: Uuid,
        range: DateRange,
        client_name: String,
    ) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::Unchanged(id),
            start_date: ActiveValue::Set(range.start()),
            end_date: ActiveValue::Set(range.end()),
            client_name: ActiveValue::Set(client_name),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Deletes a reservation together with its reviews.
    ///
    /// # Returns
    /// - `Ok(true)` - Reservation deleted
    /// - `Ok(false)` - No reservation with that ID
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        entity::prelude::Review::delete_many()
            .filter(entity::review::Column::ReservationId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds reservations of an apartment overlapping `range`, endpoints included.
    ///
    /// # Arguments
    /// - `apartment_id` - Apartment whose reservations are checked
    /// - `range` - Requested date range
    /// - `excluded_id` - Reservation to ignore, used when moving an existing reservation
    pub async fn find_overlapping(
        &self,
        apartment_id: Uuid,
        range: &DateRange,
        excluded_id: Option<Uuid>,
    ) -> Result<Vec<entity::reservation::Model>, DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::ApartmentId.eq(apartment_id))
            .filter(entity::reservation::Column::StartDate.lte(range.end()))
            .filter(entity::reservation::Column::EndDate.gte(range.start()));

        if let Some(excluded_id) = excluded_id {
            query = query.filter(entity::reservation::Column::Id.ne(excluded_id));
        }

        query
            .order_by_asc(entity::reservation::Column::StartDate)
            .all(self.db)
            .await
    }

    /// Finds the reservation of an apartment containing `instant`.
    ///
    /// Reservations never overlap, so at most one row matches; the earliest start wins
    /// should stored data ever violate that.
    pub async fn find_current(
        &self,
        apartment_id: Uuid,
        instant: DateTime<Utc>,
    ) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::ApartmentId.eq(apartment_id))
            .filter(entity::reservation::Column::StartDate.lte(instant))
            .filter(entity::reservation::Column::EndDate.gte(instant))
            .order_by_asc(entity::reservation::Column::StartDate)
            .one(self.db)
            .await
    }

    /// Gets all reservations of an apartment, latest end date first.
    pub async fn get_by_apartment(
        &self,
        apartment_id: Uuid,
    ) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::ApartmentId.eq(apartment_id))
            .order_by_desc(entity::reservation::Column::EndDate)
            .all(self.db)
            .await
    }
}
