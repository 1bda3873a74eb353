use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Attraction category as it appears in URLs and response bodies.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttractionKindDto {
    Beach,
    Shop,
    Restaurant,
    Sight,
    Device,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AttractionDto {
    pub id: Uuid,
    pub kind: AttractionKindDto,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub images_url: Vec<String>,
    pub title_image: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Request body for authoring a new attraction inside an apartment.
///
/// Image paths refer to files already placed in the upload directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CreateAttractionDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images_url: Vec<String>,
    #[serde(default)]
    pub title_image: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UpdateAttractionDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub title_image: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AddImagesDto {
    pub paths: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DeleteImageDto {
    pub path: String,
}
