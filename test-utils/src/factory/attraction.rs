//! Attraction factory for creating test attractions and apartment links.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::attraction::{AttractionKind, ImageUrls};
use sea_orm::{prelude::Uuid, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test attractions with customizable fields.
///
/// Apartments passed to `linked_to` receive a link row after the attraction is inserted.
///
/// # Example
///
/// ```rust,ignore
/// let beach = AttractionFactory::new(&db, owner.id)
///     .kind(AttractionKind::Beach)
///     .images(vec!["uploads/beach/a.png".to_string()])
///     .linked_to(apartment_a.id)
///     .linked_to(apartment_b.id)
///     .build()
///     .await?;
/// ```
pub struct AttractionFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: Uuid,
    kind: AttractionKind,
    title: String,
    images_url: Vec<String>,
    apartments: Vec<Uuid>,
}

impl<'a> AttractionFactory<'a> {
    /// Creates a new AttractionFactory with default values.
    ///
    /// Defaults:
    /// - kind: `AttractionKind::Beach`
    /// - title: `"Attraction {n}"`
    /// - images_url: empty
    /// - no apartment links
    pub fn new(db: &'a DatabaseConnection, owner_id: Uuid) -> Self {
        Self {
            db,
            owner_id,
            kind: AttractionKind::Beach,
            title: format!("Attraction {}", next_id()),
            images_url: Vec::new(),
            apartments: Vec::new(),
        }
    }

    pub fn kind(mut self, kind: AttractionKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn images(mut self, images_url: Vec<String>) -> Self {
        self.images_url = images_url;
        self
    }

    /// Links the attraction to an apartment once it has been inserted.
    pub fn linked_to(mut self, apartment_id: Uuid) -> Self {
        self.apartments.push(apartment_id);
        self
    }

    /// Builds and inserts the attraction and its apartment links.
    pub async fn build(self) -> Result<entity::attraction::Model, DbErr> {
        let title_image = self.images_url.first().cloned();
        let attraction = entity::attraction::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            kind: ActiveValue::Set(self.kind),
            owner_id: ActiveValue::Set(self.owner_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(String::new()),
            images_url: ActiveValue::Set(ImageUrls(self.images_url)),
            title_image: ActiveValue::Set(title_image),
            lat: ActiveValue::Set(None),
            lng: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        for apartment_id in self.apartments {
            link_attraction(self.db, apartment_id, attraction.id).await?;
        }

        Ok(attraction)
    }
}

/// Creates an attraction of the given kind linked to the listed apartments.
pub async fn create_attraction(
    db: &DatabaseConnection,
    owner_id: Uuid,
    kind: AttractionKind,
    apartments: &[Uuid],
) -> Result<entity::attraction::Model, DbErr> {
    let mut factory = AttractionFactory::new(db, owner_id).kind(kind);
    for apartment_id in apartments {
        factory = factory.linked_to(*apartment_id);
    }
    factory.build().await
}

/// Inserts a link row between an apartment and an attraction.
pub async fn link_attraction(
    db: &DatabaseConnection,
    apartment_id: Uuid,
    attraction_id: Uuid,
) -> Result<entity::apartment_attraction::Model, DbErr> {
    entity::apartment_attraction::ActiveModel {
        apartment_id: ActiveValue::Set(apartment_id),
        attraction_id: ActiveValue::Set(attraction_id),
    }
    .insert(db)
    .await
}
