//! Attraction endpoints.
//!
//! Every route carries the attraction kind as a lowercase path segment (`beach`, `shop`,
//! `restaurant`, `sight`, `device`); the service for that kind never sees other kinds.

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
        attraction::{
            AddImagesDto, AttractionDto, AttractionKindDto, CreateAttractionDto, DeleteImageDto,
            UpdateAttractionDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::attraction::{AttractionDetails, CreateAttractionParams},
        service::attraction::AttractionService,
        state::AppState,
    },
};

/// Tag for grouping attraction endpoints in OpenAPI documentation
pub static ATTRACTION_TAG: &str = "attraction";

fn attraction_service(state: &AppState, kind: AttractionKindDto) -> AttractionService<'_> {
    AttractionService::new(&state.db, kind.into(), state.file_store.as_ref())
}

/// Author a new attraction inside an apartment.
///
/// # Returns
/// - `201 Created` - Attraction created and linked to the apartment
/// - `400 Bad Request` - Title image is not one of the images
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User does not own the apartment
/// - `404 Not Found` - Apartment does not exist
#[utoipa::path(
    post,
    path = "/api/apartments/{apartment_id}/attractions/{kind}",
    tag = ATTRACTION_TAG,
    params(
        ("apartment_id" = Uuid, Path, description = "Apartment ID"),
        ("kind" = AttractionKindDto, Path, description = "Attraction kind")
    ),
    request_body = CreateAttractionDto,
    responses(
        (status = 201, description = "Successfully created attraction", body = AttractionDto),
        (status = 400, description = "Invalid title image", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the apartment", body = ErrorDto),
        (status = 404, description = "Apartment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_attraction(
    State(state): State<AppState>,
    session: Session,
    Path((apartment_id, kind)): Path<(Uuid, AttractionKindDto)>,
    Json(payload): Json<CreateAttractionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = attraction_service(&state, kind);
    let attraction = service
        .create(CreateAttractionParams::from_dto(apartment_id, user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(attraction.into_dto())))
}

/// List the attractions of a kind linked to an apartment, ordered by title.
#[utoipa::path(
    get,
    path = "/api/apartments/{apartment_id}/attractions/{kind}",
    tag = ATTRACTION_TAG,
    params(
        ("apartment_id" = Uuid, Path, description = "Apartment ID"),
        ("kind" = AttractionKindDto, Path, description = "Attraction kind")
    ),
    responses(
        (status = 200, description = "Successfully retrieved attractions", body = Vec<AttractionDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the apartment", body = ErrorDto),
        (status = 404, description = "Apartment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_apartment_attractions(
    State(state): State<AppState>,
    session: Session,
    Path((apartment_id, kind)): Path<(Uuid, AttractionKindDto)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ApartmentOwner(apartment_id)])
        .await?;

    let attractions = attraction_service(&state, kind)
        .get_in_apartment(apartment_id)
        .await?;

    let dtos: Vec<AttractionDto> = attractions.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List the user's attractions from other apartments that could be added here.
///
/// Each attraction appears once even when linked to several other apartments. Those
/// already linked to this apartment are left out. An unknown apartment yields an empty
/// list.
#[utoipa::path(
    get,
    path = "/api/apartments/{apartment_id}/attractions/{kind}/available",
    tag = ATTRACTION_TAG,
    params(
        ("apartment_id" = Uuid, Path, description = "Apartment ID"),
        ("kind" = AttractionKindDto, Path, description = "Attraction kind")
    ),
    responses(
        (status = 200, description = "Successfully retrieved attractions", body = Vec<AttractionDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_attractions(
    State(state): State<AppState>,
    session: Session,
    Path((apartment_id, kind)): Path<(Uuid, AttractionKindDto)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let attractions = attraction_service(&state, kind)
        .get_from_other_apartments(user.id, apartment_id)
        .await?;

    let dtos: Vec<AttractionDto> = attractions.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Link an existing attraction to an apartment.
#[utoipa::path(
    post,
    path = "/api/apartments/{apartment_id}/attractions/{kind}/{attraction_id}",
    tag = ATTRACTION_TAG,
    params(
        ("apartment_id" = Uuid, Path, description = "Apartment ID"),
        ("kind" = AttractionKindDto, Path, description = "Attraction kind"),
        ("attraction_id" = Uuid, Path, description = "Attraction ID")
    ),
    responses(
        (status = 201, description = "Successfully linked attraction"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the apartment or attraction", body = ErrorDto),
        (status = 404, description = "Apartment or attraction not found", body = ErrorDto),
        (status = 409, description = "Attraction already linked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_attraction_to_apartment(
    State(state): State<AppState>,
    session: Session,
    Path((apartment_id, kind, attraction_id)): Path<(Uuid, AttractionKindDto, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ApartmentOwner(apartment_id)])
        .await?;

    attraction_service(&state, kind)
        .add_existing_to_apartment(apartment_id, attraction_id)
        .await?;

    Ok(StatusCode::CREATED)
}

/// Remove an attraction from an apartment.
///
/// Removing it from its last apartment deletes the attraction and its images.
#[utoipa::path(
    delete,
    path = "/api/apartments/{apartment_id}/attractions/{kind}/{attraction_id}",
    tag = ATTRACTION_TAG,
    params(
        ("apartment_id" = Uuid, Path, description = "Apartment ID"),
        ("kind" = AttractionKindDto, Path, description = "Attraction kind"),
        ("attraction_id" = Uuid, Path, description = "Attraction ID")
    ),
    responses(
        (status = 200, description = "Successfully removed attraction"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the attraction", body = ErrorDto),
        (status = 404, description = "Attraction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_attraction_from_apartment(
    State(state): State<AppState>,
    session: Session,
    Path((apartment_id, kind, attraction_id)): Path<(Uuid, AttractionKindDto, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    attraction_service(&state, kind)
        .delete(attraction_id, user.id, apartment_id)
        .await?;

    Ok(StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/api/attractions/{kind}/{attraction_id}",
    tag = ATTRACTION_TAG,
    params(
        ("kind" = AttractionKindDto, Path, description = "Attraction kind"),
        ("attraction_id" = Uuid, Path, description = "Attraction ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved attraction", body = AttractionDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Attraction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attraction(
    State(state): State<AppState>,
    session: Session,
    Path((kind, attraction_id)): Path<(AttractionKindDto, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let attraction = attraction_service(&state, kind)
        .get_by_id(attraction_id)
        .await?;

    Ok((StatusCode::OK, Json(attraction.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/attractions/{kind}/{attraction_id}",
    tag = ATTRACTION_TAG,
    params(
        ("kind" = AttractionKindDto, Path, description = "Attraction kind"),
        ("attraction_id" = Uuid, Path, description = "Attraction ID")
    ),
    request_body = UpdateAttractionDto,
    responses(
        (status = 200, description = "Successfully updated attraction", body = AttractionDto),
        (status = 400, description = "Invalid title image", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the attraction", body = ErrorDto),
        (status = 404, description = "Attraction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_attraction(
    State(state): State<AppState>,
    session: Session,
    Path((kind, attraction_id)): Path<(AttractionKindDto, Uuid)>,
    Json(payload): Json<UpdateAttractionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let attraction = attraction_service(&state, kind)
        .update(attraction_id, user.id, AttractionDetails::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(attraction.into_dto())))
}

/// Attach already uploaded images to an attraction.
#[utoipa::path(
    post,
    path = "/api/attractions/{kind}/{attraction_id}/images",
    tag = ATTRACTION_TAG,
    params(
        ("kind" = AttractionKindDto, Path, description = "Attraction kind"),
        ("attraction_id" = Uuid, Path, description = "Attraction ID")
    ),
    request_body = AddImagesDto,
    responses(
        (status = 200, description = "Successfully added images", body = AttractionDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the attraction", body = ErrorDto),
        (status = 404, description = "Attraction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_attraction_images(
    State(state): State<AppState>,
    session: Session,
    Path((kind, attraction_id)): Path<(AttractionKindDto, Uuid)>,
    Json(payload): Json<AddImagesDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let attraction = attraction_service(&state, kind)
        .add_images(attraction_id, user.id, payload.paths)
        .await?;

    Ok((StatusCode::OK, Json(attraction.into_dto())))
}

/// Remove one image from an attraction and delete the file.
#[utoipa::path(
    delete,
    path = "/api/attractions/{kind}/{attraction_id}/images",
    tag = ATTRACTION_TAG,
    params(
        ("kind" = AttractionKindDto, Path, description = "Attraction kind"),
        ("attraction_id" = Uuid, Path, description = "Attraction ID")
    ),
    request_body = DeleteImageDto,
    responses(
        (status = 200, description = "Successfully removed image", body = AttractionDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the attraction", body = ErrorDto),
        (status = 404, description = "Attraction or image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_attraction_image(
    State(state): State<AppState>,
    session: Session,
    Path((kind, attraction_id)): Path<(AttractionKindDto, Uuid)>,
    Json(payload): Json<DeleteImageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let attraction = attraction_service(&state, kind)
        .delete_image(attraction_id, user.id, payload.path)
        .await?;

    Ok((StatusCode::OK, Json(attraction.into_dto())))
}
