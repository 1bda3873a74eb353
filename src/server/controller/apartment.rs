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
        apartment::{ApartmentDto, CreateApartmentDto, UpdateApartmentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::apartment::{CreateApartmentParams, UpdateApartmentParams},
        service::apartment::ApartmentService,
        state::AppState,
    },
};

/// Tag for grouping apartment endpoints in OpenAPI documentation
pub static APARTMENT_TAG: &str = "apartment";

/// Create an apartment owned by the logged in user.
///
/// # Returns
/// - `201 Created` - Successfully created apartment
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/apartments",
    tag = APARTMENT_TAG,
    request_body = CreateApartmentDto,
    responses(
        (status = 201, description = "Successfully created apartment", body = ApartmentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_apartment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateApartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ApartmentService::new(&state.db);
    let apartment = service
        .create(CreateApartmentParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(apartment.into_dto())))
}

/// List the logged in user's apartments ordered by name.
#[utoipa::path(
    get,
    path = "/api/apartments",
    tag = APARTMENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved apartments", body = Vec<ApartmentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_apartments(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ApartmentService::new(&state.db);
    let apartments = service.get_by_owner(user.id).await?;

    let dtos: Vec<ApartmentDto> = apartments.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get one of the logged in user's apartments.
#[utoipa::path(
    get,
    path = "/api/apartments/{apartment_id}",
    tag = APARTMENT_TAG,
    params(
        ("apartment_id" = Uuid, Path, description = "Apartment ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved apartment", body = ApartmentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the apartment", body = ErrorDto),
        (status = 404, description = "Apartment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_apartment(
    State(state): State<AppState>,
    session: Session,
    Path(apartment_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ApartmentOwner(apartment_id)])
        .await?;

    let service = ApartmentService::new(&state.db);
    let apartment = service.get_by_id(apartment_id).await?;

    Ok((StatusCode::OK, Json(apartment.into_dto())))
}

/// Rename an apartment or change its address.
///
/// # Access Control
/// - `ApartmentOwner` - Checked by the service under the apartment row lock
///
/// # Returns
/// - `200 OK` - Apartment updated
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User does not own the apartment
/// - `404 Not Found` - Apartment does not exist
#[utoipa::path(
    put,
    path = "/api/apartments/{apartment_id}",
    tag = APARTMENT_TAG,
    params(
        ("apartment_id" = Uuid, Path, description = "Apartment ID")
    ),
    request_body = UpdateApartmentDto,
    responses(
        (status = 200, description = "Successfully updated apartment", body = ApartmentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the apartment", body = ErrorDto),
        (status = 404, description = "Apartment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_apartment(
    State(state): State<AppState>,
    session: Session,
    Path(apartment_id): Path<Uuid>,
    Json(payload): Json<UpdateApartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ApartmentService::new(&state.db);
    let apartment = service
        .update(
            UpdateApartmentParams::from_dto(apartment_id, payload),
            user.id,
        )
        .await?;

    Ok((StatusCode::OK, Json(apartment.into_dto())))
}
