use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ReservationDto {
    pub id: Uuid,
    pub apartment_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub client_name: String,
}

/// Request body for booking an apartment.
///
/// `client_name` may be omitted, in which case it is stored as an empty string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CreateReservationDto {
    pub apartment_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub client_name: Option<String>,
}

/// Request body for moving or renaming an existing reservation.
///
/// `apartment_id` must match the apartment the reservation already belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UpdateReservationDto {
    pub apartment_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub client_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CreatedReservationDto {
    pub reservation_id: Uuid,
}
