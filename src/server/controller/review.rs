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
        review::{CreateReviewDto, CreatedReviewDto, ReviewDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::review::CreateReviewParams,
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Review a stay.
///
/// Any logged in user may review; the reservation must belong to the given apartment
/// and may be reviewed only once.
///
/// # Returns
/// - `201 Created` - Review stored, body holds its ID
/// - `400 Bad Request` - Rating outside 1 to 5 or review text of invalid length
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Reservation missing or belongs to another apartment
/// - `409 Conflict` - Reservation already reviewed
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Successfully created review", body = CreatedReviewDto),
        (status = 400, description = "Invalid rating or review text", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Reservation already reviewed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ReviewService::new(&state.db);
    let review = service
        .create(CreateReviewParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedReviewDto {
            review_id: review.id,
        }),
    ))
}

/// List an apartment's reviews, newest first.
#[utoipa::path(
    get,
    path = "/api/apartments/{apartment_id}/reviews",
    tag = REVIEW_TAG,
    params(
        ("apartment_id" = Uuid, Path, description = "Apartment ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved reviews", body = Vec<ReviewDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the apartment", body = ErrorDto),
        (status = 404, description = "Apartment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_apartment_reviews(
    State(state): State<AppState>,
    session: Session,
    Path(apartment_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ApartmentOwner(apartment_id)])
        .await?;

    let service = ReviewService::new(&state.db);
    let reviews = service.get_by_apartment(apartment_id).await?;

    let dtos: Vec<ReviewDto> = reviews.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
