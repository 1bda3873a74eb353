use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::apartment::ApartmentRepository,
    error::AppError,
    model::apartment::{Apartment, CreateApartmentParams, UpdateApartmentParams},
};

pub struct ApartmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApartmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new apartment for its owner
    pub async fn create(&self, params: CreateApartmentParams) -> Result<Apartment, AppError> {
        let repo = ApartmentRepository::new(self.db);

        let apartment = repo.create(params).await?;

        tracing::info!(
            "Created apartment {} for owner {}",
            apartment.id,
            apartment.owner_id
        );

        Ok(Apartment::from_entity(apartment))
    }

    /// Gets an apartment by ID
    ///
    /// # Returns
    /// - `Ok(Apartment)` - The apartment
    /// - `Err(AppError::NotFound)` - No apartment with that ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Apartment, AppError> {
        let repo = ApartmentRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .map(Apartment::from_entity)
            .ok_or_else(|| AppError::NotFound("Apartment not found".to_string()))
    }

    /// Replaces name and address of an apartment
    ///
    /// # Returns
    /// - `Ok(Apartment)` - The updated apartment
    /// - `Err(AppError::NotFound)` - No apartment with that ID
    /// - `Err(AppError::Forbidden)` - Requesting user does not own the apartment
    pub async fn update(
        &self,
        params: UpdateApartmentParams,
        requesting_user_id: Uuid,
    ) -> Result<Apartment, AppError> {
        let txn = self.db.begin().await?;

        let repo = ApartmentRepository::new(&txn);
        let apartment = repo
            .find_by_id_for_update(params.apartment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Apartment not found".to_string()))?;
        if apartment.owner_id != requesting_user_id {
            return Err(AppError::not_owner());
        }

        let updated = repo
            .update(params.apartment_id, params.name, params.address)
            .await?;

        txn.commit().await?;

        tracing::info!("Updated apartment {}", updated.id);

        Ok(Apartment::from_entity(updated))
    }

    /// Gets all apartments owned by a user, ordered by name
    pub async fn get_by_owner(&self, owner_id: Uuid) -> Result<Vec<Apartment>, AppError> {
        let repo = ApartmentRepository::new(self.db);

        let apartments = repo.get_by_owner(owner_id).await?;

        Ok(apartments.into_iter().map(Apartment::from_entity).collect())
    }
}
