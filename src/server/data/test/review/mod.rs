use crate::server::{data::review::ReviewRepository, model::review::CreateReviewParams};
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};


fn june(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, day, 0, 0, 0).unwrap()
}
