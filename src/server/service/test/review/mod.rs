use crate::server::{
    error::AppError, model::review::CreateReviewParams, service::review::ReviewService,
};
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;


fn june(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, day, 0, 0, 0).unwrap()
}

/// Review with top ratings and no text.
fn review_of(apartment_id: Uuid, reservation_id: Uuid) -> CreateReviewParams {
    CreateReviewParams {
        apartment_id,
        reservation_id,
        comfort_rating: 5,
        experience_rating: 5,
        value_rating: 5,
        comment: None,
    }
}
