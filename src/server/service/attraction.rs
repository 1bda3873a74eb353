//! Attraction authoring and sharing between apartments.
//!
//! An attraction belongs to one owner and is linked to one or more of that owner's
//! apartments. Links act as a reference count: unlinking the last apartment deletes the
//! attraction and purges its images once the transaction has committed.

use entity::attraction::AttractionKind;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use std::collections::HashSet;
use uuid::Uuid;

use crate::server::{
    data::{
        apartment::ApartmentRepository, apartment_attraction::AttractionLinkRepository,
        attraction::AttractionRepository,
    },
    error::AppError,
    model::attraction::{Attraction, AttractionDetails, CreateAttractionParams},
    util::file_store::{purge_files, FileStore},
};

pub struct AttractionService<'a> {
    db: &'a DatabaseConnection,
    kind: AttractionKind,
    file_store: &'a dyn FileStore,
}

impl<'a> AttractionService<'a> {
    /// Creates a service operating on attractions of `kind`.
    pub fn new(
        db: &'a DatabaseConnection,
        kind: AttractionKind,
        file_store: &'a dyn FileStore,
    ) -> Self {
        Self {
            db,
            kind,
            file_store,
        }
    }

    /// Creates an attraction and links it to the apartment it was authored in
    ///
    /// # Returns
    /// - `Ok(Attraction)` - The created attraction
    /// - `Err(AppError::BadRequest)` - Title image is not one of the images
    /// - `Err(AppError::NotFound)` - Apartment does not exist
    /// - `Err(AppError::Forbidden)` - Owner does not own the apartment
    pub async fn create(&self, params: CreateAttractionParams) -> Result<Attraction, AppError> {
        Self::validate_title_image(&params.details.title_image, &params.images_url)?;

        let txn = self.db.begin().await?;

        let apartment = ApartmentRepository::new(&txn)
            .find_by_id_for_update(params.apartment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Apartment not found".to_string()))?;
        if apartment.owner_id != params.owner_id {
            return Err(AppError::not_owner());
        }

        let attraction = AttractionRepository::new(&txn, self.kind)
            .create(params)
            .await?;
        AttractionLinkRepository::new(&txn)
            .link(apartment.id, attraction.id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Created {:?} attraction {} in apartment {}",
            self.kind,
            attraction.id,
            apartment.id
        );

        Ok(Attraction::from_entity(attraction))
    }

    /// Gets an attraction of this kind by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Attraction, AppError> {
        let repo = AttractionRepository::new(self.db, self.kind);

        repo.find_by_id(id)
            .await?
            .map(Attraction::from_entity)
            .ok_or_else(|| AppError::NotFound("Attraction not found".to_string()))
    }

    /// Gets the attractions of this kind linked to an apartment, ordered by title
    pub async fn get_in_apartment(&self, apartment_id: Uuid) -> Result<Vec<Attraction>, AppError> {
        let link_repo = AttractionLinkRepository::new(self.db);
        let repo = AttractionRepository::new(self.db, self.kind);

        let ids = link_repo.get_attraction_ids_for_apartment(apartment_id).await?;
        let attractions = repo.get_by_ids(&ids).await?;

        Ok(attractions.into_iter().map(Attraction::from_entity).collect())
    }

    /// Gets attractions the owner could link to `current_apartment_id`
    ///
    /// These are the owner's attractions of this kind linked to any of the owner's other
    /// apartments but not to the current one, each listed once and ordered by title. A
    /// missing current apartment yields an empty list.
    pub async fn get_from_other_apartments(
        &self,
        owner_id: Uuid,
        current_apartment_id: Uuid,
    ) -> Result<Vec<Attraction>, AppError> {
        let apartment_repo = ApartmentRepository::new(self.db);
        let link_repo = AttractionLinkRepository::new(self.db);

        if apartment_repo
            .find_by_id(current_apartment_id)
            .await?
            .is_none()
        {
            tracing::warn!(
                "Current apartment with id {} not found",
                current_apartment_id
            );
            return Ok(Vec::new());
        }

        let current_ids: HashSet<Uuid> = link_repo
            .get_attraction_ids_for_apartment(current_apartment_id)
            .await?
            .into_iter()
            .collect();

        let other_apartment_ids = apartment_repo
            .get_ids_by_owner_except(owner_id, current_apartment_id)
            .await?;

        let candidate_ids: Vec<Uuid> = link_repo
            .get_attraction_ids_for_apartments(&other_apartment_ids)
            .await?
            .into_iter()
            .filter(|id| !current_ids.contains(id))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let attractions = AttractionRepository::new(self.db, self.kind)
            .get_by_ids(&candidate_ids)
            .await?;

        Ok(attractions
            .into_iter()
            .filter(|attraction| attraction.owner_id == owner_id)
            .map(Attraction::from_entity)
            .collect())
    }

    /// Links an existing attraction to another apartment of its owner
    ///
    /// # Returns
    /// - `Ok(())` - Link created
    /// - `Err(AppError::NotFound)` - Apartment or attraction of this kind does not exist
    /// - `Err(AppError::Forbidden)` - Attraction and apartment have different owners
    /// - `Err(AppError::Conflict)` - Attraction is already linked to the apartment
    pub async fn add_existing_to_apartment(
        &self,
        apartment_id: Uuid,
        attraction_id: Uuid,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let attraction = AttractionRepository::new(&txn, self.kind)
            .find_by_id_for_update(attraction_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Attraction not found".to_string()))?;

        let apartment = ApartmentRepository::new(&txn)
            .find_by_id(apartment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Apartment not found".to_string()))?;
        if attraction.owner_id != apartment.owner_id {
            return Err(AppError::not_owner());
        }

        let link_repo = AttractionLinkRepository::new(&txn);
        if link_repo.exists(apartment_id, attraction_id).await? {
            return Err(AppError::Conflict(
                "Attraction is already linked to this apartment".to_string(),
            ));
        }

        link_repo.link(apartment_id, attraction_id).await?;

        txn.commit().await?;

        tracing::info!(
            "Linked {:?} attraction {} to apartment {}",
            self.kind,
            attraction_id,
            apartment_id
        );

        Ok(())
    }

    /// Removes an attraction from one apartment, deleting it with its last link
    ///
    /// Lock, unlink, recount and the conditional delete run in one transaction holding the
    /// attraction row lock. Images are purged only after commit, skipping paths that other
    /// attractions still list.
    ///
    /// # Returns
    /// - `Ok(())` - Link removed, and the attraction deleted if it was the last one
    /// - `Err(AppError::NotFound)` - Attraction of this kind does not exist
    /// - `Err(AppError::Forbidden)` - Requesting user does not own the attraction
    pub async fn delete(
        &self,
        attraction_id: Uuid,
        requesting_user_id: Uuid,
        apartment_id: Uuid,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let repo = AttractionRepository::new(&txn, self.kind);
        let attraction = repo
            .find_by_id_for_update(attraction_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Attraction not found".to_string()))?;
        if attraction.owner_id != requesting_user_id {
            return Err(AppError::not_owner());
        }

        let link_repo = AttractionLinkRepository::new(&txn);
        if !link_repo.unlink(apartment_id, attraction_id).await? {
            tracing::warn!(
                "Attraction {} was not linked to apartment {}",
                attraction_id,
                apartment_id
            );
        }

        let remaining = link_repo.count_links(attraction_id).await?;
        let purged_images = if remaining == 0 {
            repo.delete(attraction_id).await?;
            let images = attraction.images_url.0;
            Some(Self::unshared_images(&repo, images, attraction_id).await?)
        } else {
            None
        };

        txn.commit().await?;

        match purged_images {
            Some(images) => {
                tracing::info!(
                    "Deleted {:?} attraction {} after unlinking its last apartment {}",
                    self.kind,
                    attraction_id,
                    apartment_id
                );
                purge_files(self.file_store, &images).await;
            }
            None => tracing::info!(
                "Unlinked {:?} attraction {} from apartment {}, {} links remain",
                self.kind,
                attraction_id,
                apartment_id,
                remaining
            ),
        }

        Ok(())
    }

    /// Replaces the descriptive fields of an attraction
    ///
    /// # Returns
    /// - `Ok(Attraction)` - The updated attraction
    /// - `Err(AppError::NotFound)` - Attraction of this kind does not exist
    /// - `Err(AppError::Forbidden)` - Requesting user does not own the attraction
    /// - `Err(AppError::BadRequest)` - Title image is not one of the images
    pub async fn update(
        &self,
        attraction_id: Uuid,
        requesting_user_id: Uuid,
        details: AttractionDetails,
    ) -> Result<Attraction, AppError> {
        let txn = self.db.begin().await?;

        let repo = AttractionRepository::new(&txn, self.kind);
        let attraction = repo
            .find_by_id_for_update(attraction_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Attraction not found".to_string()))?;
        if attraction.owner_id != requesting_user_id {
            return Err(AppError::not_owner());
        }
        Self::validate_title_image(&details.title_image, &attraction.images_url.0)?;

        let updated = repo.update_details(attraction_id, details).await?;

        txn.commit().await?;

        tracing::info!("Updated {:?} attraction {}", self.kind, attraction_id);

        Ok(Attraction::from_entity(updated))
    }

    /// Appends uploaded image paths to an attraction
    ///
    /// Paths already present are skipped.
    pub async fn add_images(
        &self,
        attraction_id: Uuid,
        requesting_user_id: Uuid,
        paths: Vec<String>,
    ) -> Result<Attraction, AppError> {
        let txn = self.db.begin().await?;

        let repo = AttractionRepository::new(&txn, self.kind);
        let attraction = repo
            .find_by_id_for_update(attraction_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Attraction not found".to_string()))?;
        if attraction.owner_id != requesting_user_id {
            return Err(AppError::not_owner());
        }

        let mut images = attraction.images_url.0;
        for path in paths {
            if !images.contains(&path) {
                images.push(path);
            }
        }

        let updated = repo
            .set_images(attraction_id, images, attraction.title_image)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Attraction {} now has {} images",
            attraction_id,
            updated.images_url.0.len()
        );

        Ok(Attraction::from_entity(updated))
    }

    /// Removes one image from an attraction and purges the file
    ///
    /// Clears the title image when it pointed at the removed path. The file is kept while
    /// another attraction still lists it.
    ///
    /// # Returns
    /// - `Ok(Attraction)` - The updated attraction
    /// - `Err(AppError::NotFound)` - Attraction missing or path not among its images
    /// - `Err(AppError::Forbidden)` - Requesting user does not own the attraction
    pub async fn delete_image(
        &self,
        attraction_id: Uuid,
        requesting_user_id: Uuid,
        path: String,
    ) -> Result<Attraction, AppError> {
        let txn = self.db.begin().await?;

        let repo = AttractionRepository::new(&txn, self.kind);
        let attraction = repo
            .find_by_id_for_update(attraction_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Attraction not found".to_string()))?;
        if attraction.owner_id != requesting_user_id {
            return Err(AppError::not_owner());
        }

        let mut images = attraction.images_url.0;
        let Some(position) = images.iter().position(|image| *image == path) else {
            return Err(AppError::NotFound("Image not found".to_string()));
        };
        images.remove(position);

        let title_image = attraction
            .title_image
            .filter(|title_image| *title_image != path);

        let updated = repo.set_images(attraction_id, images, title_image).await?;
        let removed = vec![path.clone()];
        let purged = Self::unshared_images(&repo, removed, attraction_id).await?;

        txn.commit().await?;

        tracing::info!("Removed image {} from attraction {}", path, attraction_id);
        purge_files(self.file_store, &purged).await;

        Ok(Attraction::from_entity(updated))
    }

    /// Drops the paths that attractions other than `attraction_id` still list
    async fn unshared_images<C: ConnectionTrait>(
        repo: &AttractionRepository<'_, C>,
        images: Vec<String>,
        attraction_id: Uuid,
    ) -> Result<Vec<String>, AppError> {
        let referenced = repo
            .find_images_referenced_elsewhere(&images, attraction_id)
            .await?;

        for image in &referenced {
            tracing::warn!(
                "Keeping image {} of attraction {}, another attraction still lists it",
                image,
                attraction_id
            );
        }

        Ok(images
            .into_iter()
            .filter(|image| !referenced.contains(image))
            .collect())
    }

    fn validate_title_image(
        title_image: &Option<String>,
        images: &[String],
    ) -> Result<(), AppError> {
        match title_image {
            Some(title_image) if !images.contains(title_image) => Err(AppError::BadRequest(
                "Title image must be one of the attraction's images".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
