//! Links between apartments and attractions.
//!
//! A link row is a pure `(apartment_id, attraction_id)` pair and also serves as the
//! reference count deciding when an attraction is deleted.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect,
};
use uuid::Uuid;

pub struct AttractionLinkRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttractionLinkRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links an attraction to an apartment.
    ///
    /// Fails with a unique constraint error if the pair already exists.
    pub async fn link(
        &self,
        apartment_id: Uuid,
        attraction_id: Uuid,
    ) -> Result<entity::apartment_attraction::Model, DbErr> {
        entity::apartment_attraction::ActiveModel {
            apartment_id: ActiveValue::Set(apartment_id),
            attraction_id: ActiveValue::Set(attraction_id),
        }
        .insert(self.db)
        .await
    }

    /// Removes the link between an apartment and an attraction.
    ///
    /// # Returns
    /// - `Ok(true)` - Link removed
    /// - `Ok(false)` - The pair was not linked
    pub async fn unlink(&self, apartment_id: Uuid, attraction_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::ApartmentAttraction::delete_many()
            .filter(entity::apartment_attraction::Column::ApartmentId.eq(apartment_id))
            .filter(entity::apartment_attraction::Column::AttractionId.eq(attraction_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, apartment_id: Uuid, attraction_id: Uuid) -> Result<bool, DbErr> {
        let link = entity::prelude::ApartmentAttraction::find_by_id((apartment_id, attraction_id))
            .one(self.db)
            .await?;

        Ok(link.is_some())
    }

    /// Counts the apartments an attraction is linked to.
    pub async fn count_links(&self, attraction_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::ApartmentAttraction::find()
            .filter(entity::apartment_attraction::Column::AttractionId.eq(attraction_id))
            .count(self.db)
            .await
    }

    /// Gets the IDs of all attractions linked to an apartment, of any kind.
    pub async fn get_attraction_ids_for_apartment(
        &self,
        apartment_id: Uuid,
    ) -> Result<Vec<Uuid>, DbErr> {
        entity::prelude::ApartmentAttraction::find()
            .select_only()
            .column(entity::apartment_attraction::Column::AttractionId)
            .filter(entity::apartment_attraction::Column::ApartmentId.eq(apartment_id))
            .into_tuple::<Uuid>()
            .all(self.db)
            .await
    }

    /// Gets the distinct IDs of attractions linked to any of the given apartments.
    pub async fn get_attraction_ids_for_apartments(
        &self,
        apartment_ids: &[Uuid],
    ) -> Result<Vec<Uuid>, DbErr> {
        if apartment_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ApartmentAttraction::find()
            .select_only()
            .column(entity::apartment_attraction::Column::AttractionId)
            .distinct()
            .filter(
                entity::apartment_attraction::Column::ApartmentId
                    .is_in(apartment_ids.iter().copied()),
            )
            .into_tuple::<Uuid>()
            .all(self.db)
            .await
    }
}
