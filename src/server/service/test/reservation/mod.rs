use crate::server::{
    data::reservation::ReservationRepository,
    error::AppError,
    model::reservation::{CreateReservationParams, UpdateReservationParams},
    service::reservation::ReservationService,
    util::time::{FixedClock, ReferenceDay},
};
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use std::sync::Arc;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod get_current;
mod get_by_apartment;

/// Midnight UTC of the given day in June 2025.
fn june(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, day, 0, 0, 0).unwrap()
}

/// Reference day frozen at noon UTC on 2025-06-15, resolved in UTC.
fn reference_day() -> ReferenceDay {
    ReferenceDay::new(
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap())),
        chrono_tz::UTC,
    )
}

fn booking(
    apartment_id: Uuid,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> CreateReservationParams {
    CreateReservationParams {
        apartment_id,
        start_date: start,
        end_date: end,
        client_name: "Guest".to_string(),
    }
}
