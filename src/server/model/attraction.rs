//! Attraction domain models and parameters.
//!
//! Beaches, shops, restaurants, sights and devices share one shape and differ only by
//! their [`AttractionKind`]. Every operation is scoped to a kind, so an attraction is
//! never found through the wrong kind's endpoints.

use chrono::{DateTime, Utc};
use entity::attraction::AttractionKind;
use uuid::Uuid;

use crate::model::attraction::{
    AttractionDto, AttractionKindDto, CreateAttractionDto, UpdateAttractionDto,
};

impl From<AttractionKindDto> for AttractionKind {
    fn from(kind: AttractionKindDto) -> Self {
        match kind {
            AttractionKindDto::Beach => AttractionKind::Beach,
            AttractionKindDto::Shop => AttractionKind::Shop,
            AttractionKindDto::Restaurant => AttractionKind::Restaurant,
            AttractionKindDto::Sight => AttractionKind::Sight,
            AttractionKindDto::Device => AttractionKind::Device,
        }
    }
}

impl From<AttractionKind> for AttractionKindDto {
    fn from(kind: AttractionKind) -> Self {
        match kind {
            AttractionKind::Beach => AttractionKindDto::Beach,
            AttractionKind::Shop => AttractionKindDto::Shop,
            AttractionKind::Restaurant => AttractionKindDto::Restaurant,
            AttractionKind::Sight => AttractionKindDto::Sight,
            AttractionKind::Device => AttractionKindDto::Device,
        }
    }
}

/// An attraction owned by one user and shared between that user's apartments.
#[derive(Debug, Clone, PartialEq)]
pub struct Attraction {
    pub id: Uuid,
    pub kind: AttractionKind,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    /// Stored image paths in upload order.
    pub images_url: Vec<String>,
    /// One of `images_url`, shown as the cover image.
    pub title_image: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Attraction {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::attraction::Model) -> Self {
        Self {
            id: entity.id,
            kind: entity.kind,
            owner_id: entity.owner_id,
            title: entity.title,
            description: entity.description,
            images_url: entity.images_url.0,
            title_image: entity.title_image,
            lat: entity.lat,
            lng: entity.lng,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AttractionDto {
        AttractionDto {
            id: self.id,
            kind: self.kind.into(),
            owner_id: self.owner_id,
            title: self.title,
            description: self.description,
            images_url: self.images_url,
            title_image: self.title_image,
            lat: self.lat,
            lng: self.lng,
            created_at: self.created_at,
        }
    }
}

/// Editable descriptive fields of an attraction.
#[derive(Debug, Clone, PartialEq)]
pub struct AttractionDetails {
    pub title: String,
    pub description: String,
    pub title_image: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl AttractionDetails {
    pub fn from_dto(dto: UpdateAttractionDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            title_image: dto.title_image,
            lat: dto.lat,
            lng: dto.lng,
        }
    }
}

/// Parameters for authoring a new attraction inside an apartment.
#[derive(Debug, Clone)]
pub struct CreateAttractionParams {
    /// Apartment the attraction is linked to on creation.
    pub apartment_id: Uuid,
    pub owner_id: Uuid,
    pub images_url: Vec<String>,
    pub details: AttractionDetails,
}

impl CreateAttractionParams {
    pub fn from_dto(apartment_id: Uuid, owner_id: Uuid, dto: CreateAttractionDto) -> Self {
        Self {
            apartment_id,
            owner_id,
            images_url: dto.images_url,
            details: AttractionDetails {
                title: dto.title,
                description: dto.description,
                title_image: dto.title_image,
                lat: dto.lat,
                lng: dto.lng,
            },
        }
    }
}
