//! Attraction data repository.
//!
//! All attraction kinds share one table. A repository instance is bound to one
//! [`AttractionKind`] and never returns rows of another kind.

use chrono::Utc;
use entity::attraction::{AttractionKind, ImageUrls};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashSet;
use uuid::Uuid;

use crate::server::model::attraction::{AttractionDetails, CreateAttractionParams};

pub struct AttractionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
    kind: AttractionKind,
}

impl<'a, C: ConnectionTrait> AttractionRepository<'a, C> {
    /// Creates a repository scoped to `kind`.
    pub fn new(db: &'a C, kind: AttractionKind) -> Self {
        Self { db, kind }
    }

    /// Inserts an attraction of this repository's kind.
    ///
    /// Does not link it to any apartment; see `AttractionLinkRepository::link`.
    pub async fn create(
        &self,
        params: CreateAttractionParams,
    ) -> Result<entity::attraction::Model, DbErr> {
        entity::attraction::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            kind: ActiveValue::Set(self.kind),
            owner_id: ActiveValue::Set(params.owner_id),
            title: ActiveValue::Set(params.details.title),
            description: ActiveValue::Set(params.details.description),
            images_url: ActiveValue::Set(ImageUrls(params.images_url)),
            title_image: ActiveValue::Set(params.details.title_image),
            lat: ActiveValue::Set(params.details.lat),
            lng: ActiveValue::Set(params.details.lng),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::attraction::Model>, DbErr> {
        entity::prelude::Attraction::find_by_id(id)
            .filter(entity::attraction::Column::Kind.eq(self.kind))
            .one(self.db)
            .await
    }

    /// Locks an attraction row of this kind for the rest of the transaction, then reads it.
    ///
    /// Must run before any read in the transaction, for the same reason as
    /// `ApartmentRepository::find_by_id_for_update`.
    pub async fn find_by_id_for_update(
        &self,
        id: Uuid,
    ) -> Result<Option<entity::attraction::Model>, DbErr> {
        let locked = entity::prelude::Attraction::update_many()
            .col_expr(
                entity::attraction::Column::Id,
                Expr::col(entity::attraction::Column::Id),
            )
            .filter(entity::attraction::Column::Id.eq(id))
            .filter(entity::attraction::Column::Kind.eq(self.kind))
            .exec(self.db)
            .await?;

        if locked.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Gets the attractions with the given IDs, ordered by title.
    ///
    /// IDs belonging to another kind are skipped.
    pub async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<entity::attraction::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Attraction::find()
            .filter(entity::attraction::Column::Kind.eq(self.kind))
            .filter(entity::attraction::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::attraction::Column::Title)
            .all(self.db)
            .await
    }

    /// Replaces the descriptive fields of an attraction.
    pub async fn update_details(
        &self,
        id: Uuid,
        details: AttractionDetails,
    ) -> Result<entity::attraction::Model, DbErr> {
        entity::attraction::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: ActiveValue::Set(details.title),
            description: ActiveValue::Set(details.description),
            title_image: ActiveValue::Set(details.title_image),
            lat: ActiveValue::Set(details.lat),
            lng: ActiveValue::Set(details.lng),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Replaces the image list and title image of an attraction.
    pub async fn set_images(
        &self,
        id: Uuid,
        images_url: Vec<String>,
        title_image: Option<String>,
    ) -> Result<entity::attraction::Model, DbErr> {
        entity::attraction::ActiveModel {
            id: ActiveValue::Unchanged(id),
            images_url: ActiveValue::Set(ImageUrls(images_url)),
            title_image: ActiveValue::Set(title_image),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Returns those of `paths` that attractions other than `excluded_id` still list.
    ///
    /// Image paths are shared storage across owners and kinds, so this lookup ignores the
    /// repository's kind.
    pub async fn find_images_referenced_elsewhere(
        &self,
        paths: &[String],
        excluded_id: Uuid,
    ) -> Result<HashSet<String>, DbErr> {
        if paths.is_empty() {
            return Ok(HashSet::new());
        }

        let image_lists = entity::prelude::Attraction::find()
            .select_only()
            .column(entity::attraction::Column::ImagesUrl)
            .filter(entity::attraction::Column::Id.ne(excluded_id))
            .into_tuple::<ImageUrls>()
            .all(self.db)
            .await?;

        Ok(image_lists
            .into_iter()
            .flat_map(|images| images.0)
            .filter(|image| paths.contains(image))
            .collect())
    }

    /// Deletes an attraction of this kind.
    ///
    /// # Returns
    /// - `Ok(true)` - Attraction deleted
    /// - `Ok(false)` - No attraction of this kind with that ID
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Attraction::delete_many()
            .filter(entity::attraction::Column::Id.eq(id))
            .filter(entity::attraction::Column::Kind.eq(self.kind))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
