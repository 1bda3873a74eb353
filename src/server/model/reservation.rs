//! Reservation domain models and parameters.
//!
//! A reservation occupies the closed range `[start_date, end_date]` of one apartment.
//! Parameter types carry raw dates; the service validates them into a
//! [`DateRange`](crate::server::util::interval::DateRange) before touching the database.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::reservation::{CreateReservationDto, ReservationDto, UpdateReservationDto};

/// Booking of an apartment for a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: Uuid,
    pub apartment_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub client_name: String,
}

impl Reservation {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            apartment_id: entity.apartment_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            client_name: entity.client_name,
        }
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            apartment_id: self.apartment_id,
            start_date: self.start_date,
            end_date: self.end_date,
            client_name: self.client_name,
        }
    }
}

/// Parameters for booking an apartment.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub apartment_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Empty when the client did not give a name.
    pub client_name: String,
}

impl CreateReservationParams {
    pub fn from_dto(dto: CreateReservationDto) -> Self {
        Self {
            apartment_id: dto.apartment_id,
            start_date: dto.start_date,
            end_date: dto.end_date,
            client_name: dto.client_name.unwrap_or_default(),
        }
    }
}

/// Parameters for changing the dates or client name of a reservation.
#[derive(Debug, Clone)]
pub struct UpdateReservationParams {
    pub reservation_id: Uuid,
    pub apartment_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub client_name: String,
}

impl UpdateReservationParams {
    pub fn from_dto(reservation_id: Uuid, dto: UpdateReservationDto) -> Self {
        Self {
            reservation_id,
            apartment_id: dto.apartment_id,
            start_date: dto.start_date,
            end_date: dto.end_date,
            client_name: dto.client_name.unwrap_or_default(),
        }
    }
}
