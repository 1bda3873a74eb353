use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ReviewDto {
    pub id: Uuid,
    pub apartment_id: Uuid,
    pub reservation_id: Uuid,
    pub comfort_rating: i16,
    pub experience_rating: i16,
    pub value_rating: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for reviewing a stay.
///
/// Ratings range from 1 to 5. `comment` may be omitted or empty; otherwise it holds
/// 4 to 1000 characters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CreateReviewDto {
    pub apartment_id: Uuid,
    pub reservation_id: Uuid,
    pub comfort_rating: i16,
    pub experience_rating: i16,
    pub value_rating: i16,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CreatedReviewDto {
    pub review_id: Uuid,
}
