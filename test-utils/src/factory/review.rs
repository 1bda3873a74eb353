//! Review factory for creating test review entities.

use chrono::Utc;
use sea_orm::{prelude::Uuid, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a review with top ratings attached to a reservation.
///
/// # Arguments
/// - `db` - Database connection
/// - `apartment_id` - Apartment the review is about
/// - `reservation_id` - Reservation the review was written for
pub async fn create_review(
    db: &DatabaseConnection,
    apartment_id: Uuid,
    reservation_id: Uuid,
) -> Result<entity::review::Model, DbErr> {
    entity::review::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        apartment_id: ActiveValue::Set(apartment_id),
        reservation_id: ActiveValue::Set(reservation_id),
        comfort_rating: ActiveValue::Set(5),
        experience_rating: ActiveValue::Set(5),
        value_rating: ActiveValue::Set(5),
        comment: ActiveValue::Set(Some("Lovely stay".to_string())),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
