use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{apartment::ApartmentRepository, reservation::ReservationRepository},
    error::AppError,
    model::reservation::{CreateReservationParams, Reservation, UpdateReservationParams},
    util::{interval::DateRange, time::ReferenceDay},
};

const INVALID_RANGE_MESSAGE: &str = "End date must be after start date";
const OCCUPIED_MESSAGE: &str = "Date is already occupied";

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
    reference_day: &'a ReferenceDay,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection, reference_day: &'a ReferenceDay) -> Self {
        Self { db, reference_day }
    }

    /// Books an apartment for a date range
    ///
    /// The overlap check and the insert run in one transaction that holds a lock on the
    /// apartment row, so two concurrent bookings of the same apartment are serialized.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation
    /// - `Err(AppError::BadRequest)` - End date not after start date
    /// - `Err(AppError::NotFound)` - Apartment does not exist
    /// - `Err(AppError::Conflict)` - Range overlaps an existing reservation
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, AppError> {
        let range = Self::validate_range(params.start_date, params.end_date)?;

        let txn = self.db.begin().await?;

        let apartment_repo = ApartmentRepository::new(&txn);
        if apartment_repo
            .find_by_id_for_update(params.apartment_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Apartment not found".to_string()));
        }

        Self::validate_reservation_conflict(&txn, params.apartment_id, &range, None).await?;

        let reservation = ReservationRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::info!(
            "Created reservation {} for apartment {} ({} - {})",
            reservation.id,
            reservation.apartment_id,
            reservation.start_date,
            reservation.end_date
        );

        Ok(Reservation::from_entity(reservation))
    }

    /// Moves a reservation to new dates and updates the client name
    ///
    /// Runs under the same apartment lock as `create`. The reservation itself is excluded
    /// from the overlap check.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The updated reservation
    /// - `Err(AppError::BadRequest)` - End date not after start date
    /// - `Err(AppError::NotFound)` - Reservation missing or belongs to another apartment
    /// - `Err(AppError::Conflict)` - New range overlaps another reservation
    pub async fn update(&self, params: UpdateReservationParams) -> Result<Reservation, AppError> {
        let range = Self::validate_range(params.start_date, params.end_date)?;
        let not_found = || AppError::NotFound("Reservation not found".to_string());

        let txn = self.db.begin().await?;

        ApartmentRepository::new(&txn)
            .find_by_id_for_update(params.apartment_id)
            .await?
            .ok_or_else(not_found)?;

        let reservation_repo = ReservationRepository::new(&txn);
        let existing = reservation_repo
            .find_by_id(params.reservation_id)
            .await?
            .ok_or_else(not_found)?;
        if existing.apartment_id != params.apartment_id {
            return Err(not_found());
        }

        Self::validate_reservation_conflict(
            &txn,
            params.apartment_id,
            &range,
            Some(params.reservation_id),
        )
        .await?;

        let reservation = reservation_repo
            .update(params.reservation_id, range, params.client_name)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Updated reservation {} of apartment {} to {} - {}",
            reservation.id,
            reservation.apartment_id,
            reservation.start_date,
            reservation.end_date
        );

        Ok(Reservation::from_entity(reservation))
    }

    /// Deletes a reservation and its reviews
    ///
    /// The reservation row is locked first so a concurrent delete of the same reservation
    /// waits and then reports it missing.
    ///
    /// # Returns
    /// - `Ok(())` - Reservation deleted
    /// - `Err(AppError::NotFound)` - Reservation does not exist
    /// - `Err(AppError::Forbidden)` - Requesting user does not own the apartment
    pub async fn delete(
        &self,
        reservation_id: Uuid,
        requesting_user_id: Uuid,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let reservation_repo = ReservationRepository::new(&txn);
        let reservation = reservation_repo
            .find_by_id_for_update(reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        let apartment = ApartmentRepository::new(&txn)
            .find_by_id(reservation.apartment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Apartment not found".to_string()))?;
        if apartment.owner_id != requesting_user_id {
            return Err(AppError::not_owner());
        }

        reservation_repo.delete(reservation_id).await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted reservation {} of apartment {}",
            reservation_id,
            apartment.id
        );

        Ok(())
    }

    /// Gets a reservation by ID
    pub async fn get_by_id(&self, reservation_id: Uuid) -> Result<Reservation, AppError> {
        let repo = ReservationRepository::new(self.db);

        repo.find_by_id(reservation_id)
            .await?
            .map(Reservation::from_entity)
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))
    }

    /// Gets the reservation covering the start of today in the reference timezone
    ///
    /// A missing apartment simply has no current reservation.
    pub async fn get_current(&self, apartment_id: Uuid) -> Result<Option<Reservation>, AppError> {
        let repo = ReservationRepository::new(self.db);

        let today = self.reference_day.start_of_today();
        let reservation = repo.find_current(apartment_id, today).await?;

        Ok(reservation.map(Reservation::from_entity))
    }

    /// Gets all reservations of an apartment, latest end date first
    pub async fn get_by_apartment(&self, apartment_id: Uuid) -> Result<Vec<Reservation>, AppError> {
        let repo = ReservationRepository::new(self.db);

        let reservations = repo.get_by_apartment(apartment_id).await?;

        Ok(reservations
            .into_iter()
            .map(Reservation::from_entity)
            .collect())
    }

    fn validate_range(
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<DateRange, AppError> {
        DateRange::new(start_date, end_date)
            .ok_or_else(|| AppError::BadRequest(INVALID_RANGE_MESSAGE.to_string()))
    }

    /// Rejects `range` if any other reservation of the apartment overlaps it
    async fn validate_reservation_conflict<C: ConnectionTrait>(
        db: &C,
        apartment_id: Uuid,
        range: &DateRange,
        exclude_reservation_id: Option<Uuid>,
    ) -> Result<(), AppError> {
        let conflicting = ReservationRepository::new(db)
            .find_overlapping(apartment_id, range, exclude_reservation_id)
            .await?;
        debug_assert!(conflicting.iter().all(|reservation| {
            DateRange::new(reservation.start_date, reservation.end_date)
                .is_some_and(|stored| stored.overlaps(range))
        }));

        if let Some(conflict) = conflicting.first() {
            tracing::debug!(
                "Reservation range {} - {} for apartment {} collides with reservation {}",
                range.start(),
                range.end(),
                apartment_id,
                conflict.id
            );
            return Err(AppError::Conflict(OCCUPIED_MESSAGE.to_string()));
        }

        Ok(())
    }
}
