use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        reservation::{
            CreateReservationDto, CreatedReservationDto, ReservationDto, UpdateReservationDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::reservation::{CreateReservationParams, UpdateReservationParams},
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

/// Book an apartment for a date range.
///
/// The range is closed on both ends: a booking may not start on the day another one ends.
///
/// # Access Control
/// - `ApartmentOwner` - Only the apartment's owner can record bookings
///
/// # Returns
/// - `201 Created` - Reservation stored, body holds its ID
/// - `400 Bad Request` - End date not after start date
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User does not own the apartment
/// - `404 Not Found` - Apartment does not exist
/// - `409 Conflict` - Range overlaps an existing reservation
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Successfully created reservation", body = CreatedReservationDto),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the apartment", body = ErrorDto),
        (status = 404, description = "Apartment not found", body = ErrorDto),
        (status = 409, description = "Date is already occupied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ApartmentOwner(payload.apartment_id)])
        .await?;

    let service = ReservationService::new(&state.db, &state.reference_day);
    let reservation = service
        .create(CreateReservationParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedReservationDto {
            reservation_id: reservation.id,
        }),
    ))
}

/// Get a reservation by ID.
#[utoipa::path(
    get,
    path = "/api/reservations/{reservation_id}",
    tag = RESERVATION_TAG,
    params(
        ("reservation_id" = Uuid, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved reservation", body = ReservationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the apartment", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    let _ = guard.require(&[]).await?;

    let service = ReservationService::new(&state.db, &state.reference_day);
    let reservation = service.get_by_id(reservation_id).await?;

    let _ = guard
        .require(&[Permission::ApartmentOwner(reservation.apartment_id)])
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Move or rename a reservation.
///
/// The reservation's own range is ignored in the overlap check, so it may shrink or
/// shift within itself.
///
/// # Access Control
/// - `ApartmentOwner` - Only the apartment's owner can change bookings
#[utoipa::path(
    patch,
    path = "/api/reservations/{reservation_id}",
    tag = RESERVATION_TAG,
    params(
        ("reservation_id" = Uuid, Path, description = "Reservation ID")
    ),
    request_body = UpdateReservationDto,
    responses(
        (status = 200, description = "Successfully updated reservation", body = ReservationDto),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the apartment", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Date is already occupied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<Uuid>,
    Json(payload): Json<UpdateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ApartmentOwner(payload.apartment_id)])
        .await?;

    let service = ReservationService::new(&state.db, &state.reference_day);
    let reservation = service
        .update(UpdateReservationParams::from_dto(reservation_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Delete a reservation together with its reviews.
#[utoipa::path(
    delete,
    path = "/api/reservations/{reservation_id}",
    tag = RESERVATION_TAG,
    params(
        ("reservation_id" = Uuid, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted reservation"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the apartment", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ReservationService::new(&state.db, &state.reference_day);
    service.delete(reservation_id, user.id).await?;

    Ok(StatusCode::OK)
}

/// List an apartment's reservations, latest first.
#[utoipa::path(
    get,
    path = "/api/apartments/{apartment_id}/reservations",
    tag = RESERVATION_TAG,
    params(
        ("apartment_id" = Uuid, Path, description = "Apartment ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved reservations", body = Vec<ReservationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the apartment", body = ErrorDto),
        (status = 404, description = "Apartment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_apartment_reservations(
    State(state): State<AppState>,
    session: Session,
    Path(apartment_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ApartmentOwner(apartment_id)])
        .await?;

    let service = ReservationService::new(&state.db, &state.reference_day);
    let reservations = service.get_by_apartment(apartment_id).await?;

    let dtos: Vec<ReservationDto> = reservations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get the reservation covering the start of today in the reference timezone.
///
/// Responds with `null` when the apartment is free today.
#[utoipa::path(
    get,
    path = "/api/apartments/{apartment_id}/reservations/current",
    tag = RESERVATION_TAG,
    params(
        ("apartment_id" = Uuid, Path, description = "Apartment ID")
    ),
    responses(
        (status = 200, description = "Current reservation or null", body = ReservationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the apartment", body = ErrorDto),
        (status = 404, description = "Apartment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(apartment_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ApartmentOwner(apartment_id)])
        .await?;

    let service = ReservationService::new(&state.db, &state.reference_day);
    let reservation = service.get_current(apartment_id).await?;

    Ok((StatusCode::OK, Json(reservation.map(|r| r.into_dto()))))
}
