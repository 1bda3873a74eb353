//! Apartment domain model and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::apartment::{ApartmentDto, CreateApartmentDto, UpdateApartmentDto};

/// An apartment listed by its owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Apartment {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl Apartment {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::apartment::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            address: entity.address,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ApartmentDto {
        ApartmentDto {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            address: self.address,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating an apartment.
#[derive(Debug, Clone)]
pub struct CreateApartmentParams {
    pub owner_id: Uuid,
    pub name: String,
    pub address: String,
}

impl CreateApartmentParams {
    pub fn from_dto(owner_id: Uuid, dto: CreateApartmentDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
            address: dto.address,
        }
    }
}

/// Parameters for renaming or moving an apartment.
#[derive(Debug, Clone)]
pub struct UpdateApartmentParams {
    pub apartment_id: Uuid,
    pub name: String,
    pub address: String,
}

impl UpdateApartmentParams {
    pub fn from_dto(apartment_id: Uuid, dto: UpdateApartmentDto) -> Self {
        Self {
            apartment_id,
            name: dto.name,
            address: dto.address,
        }
    }
}
