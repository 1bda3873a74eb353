//! Guest reviews of past stays.
//!
//! Every review belongs to one reservation of the reviewed apartment, and a reservation
//! is reviewed at most once.

use sea_orm::{DatabaseConnection, TransactionTrait};
use std::ops::RangeInclusive;
use uuid::Uuid;

use crate::server::{
    data::{reservation::ReservationRepository, review::ReviewRepository},
    error::AppError,
    model::review::{CreateReviewParams, Review},
};

const RATING_RANGE: RangeInclusive<i16> = 1..=5;
const COMMENT_LENGTH: RangeInclusive<usize> = 4..=1000;

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a review of a reservation
    ///
    /// The reservation row is locked before the duplicate check, so two concurrent
    /// reviews of one stay cannot both be stored.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review
    /// - `Err(AppError::BadRequest)` - Rating outside 1 to 5 or comment of invalid length
    /// - `Err(AppError::NotFound)` - Reservation missing or belongs to another apartment
    /// - `Err(AppError::Conflict)` - Reservation has been reviewed already
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, AppError> {
        Self::validate_review(&params)?;

        let txn = self.db.begin().await?;

        let reservation = ReservationRepository::new(&txn)
            .find_by_id_for_update(params.reservation_id)
            .await?
            .filter(|reservation| reservation.apartment_id == params.apartment_id)
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        let review_repo = ReviewRepository::new(&txn);
        if review_repo.exists_for_reservation(reservation.id).await? {
            return Err(AppError::Conflict(
                "Reservation has already been reviewed".to_string(),
            ));
        }

        let review = review_repo.create(params).await?;

        txn.commit().await?;

        tracing::info!(
            "Created review {} for reservation {} of apartment {}",
            review.id,
            review.reservation_id,
            review.apartment_id
        );

        Ok(Review::from_entity(review))
    }

    /// Gets all reviews of an apartment, newest first
    pub async fn get_by_apartment(&self, apartment_id: Uuid) -> Result<Vec<Review>, AppError> {
        let repo = ReviewRepository::new(self.db);

        let reviews = repo.get_by_apartment(apartment_id).await?;

        Ok(reviews.into_iter().map(Review::from_entity).collect())
    }

    fn validate_review(params: &CreateReviewParams) -> Result<(), AppError> {
        let ratings = [
            params.comfort_rating,
            params.experience_rating,
            params.value_rating,
        ];
        if !ratings.iter().all(|rating| RATING_RANGE.contains(rating)) {
            return Err(AppError::BadRequest(
                "Ratings must be between 1 and 5".to_string(),
            ));
        }

        if let Some(comment) = &params.comment {
            if !COMMENT_LENGTH.contains(&comment.chars().count()) {
                return Err(AppError::BadRequest(
                    "Review text must be between 4 and 1000 characters".to_string(),
                ));
            }
        }

        Ok(())
    }
}
