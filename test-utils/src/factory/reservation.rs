//! Reservation factory for creating test reservation entities.

use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{prelude::Uuid, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations.
///
/// Rows are inserted directly, bypassing any overlap check, so tests can set up
/// arbitrary existing bookings.
///
/// # Example
///
/// ```rust,ignore
/// let reservation = ReservationFactory::new(&db, apartment.id)
///     .dates(start, end)
///     .client_name("Jane")
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    apartment_id: Uuid,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    client_name: String,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - start_date: 2025-06-01T00:00:00Z
    /// - end_date: start_date + 9 days
    /// - client_name: `"Guest"`
    pub fn new(db: &'a DatabaseConnection, apartment_id: Uuid) -> Self {
        let start_date = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        Self {
            db,
            apartment_id,
            start_date,
            end_date: start_date + Duration::days(9),
            client_name: "Guest".to_string(),
        }
    }

    pub fn dates(mut self, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = client_name.into();
        self
    }

    /// Builds and inserts the reservation entity into the database.
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            apartment_id: ActiveValue::Set(self.apartment_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            client_name: ActiveValue::Set(self.client_name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation for the apartment spanning the given dates.
pub async fn create_reservation(
    db: &DatabaseConnection,
    apartment_id: Uuid,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, apartment_id)
        .dates(start_date, end_date)
        .build()
        .await
}
