//! Review domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::review::{CreateReviewDto, ReviewDto};

/// A guest's rating of one stay.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: Uuid,
    pub apartment_id: Uuid,
    pub reservation_id: Uuid,
    pub comfort_rating: i16,
    pub experience_rating: i16,
    pub value_rating: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            apartment_id: entity.apartment_id,
            reservation_id: entity.reservation_id,
            comfort_rating: entity.comfort_rating,
            experience_rating: entity.experience_rating,
            value_rating: entity.value_rating,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            apartment_id: self.apartment_id,
            reservation_id: self.reservation_id,
            comfort_rating: self.comfort_rating,
            experience_rating: self.experience_rating,
            value_rating: self.value_rating,
            comment: self.comment,
            created_at: self.created_at,
        }
    }
}

/// Parameters for reviewing a reservation.
#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub apartment_id: Uuid,
    pub reservation_id: Uuid,
    pub comfort_rating: i16,
    pub experience_rating: i16,
    pub value_rating: i16,
    /// `None` when the guest left no text.
    pub comment: Option<String>,
}

impl CreateReviewParams {
    /// Converts the request body, treating an empty comment as no comment.
    pub fn from_dto(dto: CreateReviewDto) -> Self {
        Self {
            apartment_id: dto.apartment_id,
            reservation_id: dto.reservation_id,
            comfort_rating: dto.comfort_rating,
            experience_rating: dto.experience_rating,
            value_rating: dto.value_rating,
            comment: dto.comment.filter(|comment| !comment.is_empty()),
        }
    }
}
