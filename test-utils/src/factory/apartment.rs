//! Apartment factory for creating test apartment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{prelude::Uuid, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test apartments owned by a given user.
///
/// # Example
///
/// ```rust,ignore
/// let apartment = ApartmentFactory::new(&db, owner.id)
///     .name("Sea View")
///     .build()
///     .await?;
/// ```
pub struct ApartmentFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: Uuid,
    name: String,
    address: String,
}

impl<'a> ApartmentFactory<'a> {
    /// Creates a new ApartmentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Apartment {n}"`
    /// - address: `"Harbour Street {n}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - ID of an existing user owning the apartment
    pub fn new(db: &'a DatabaseConnection, owner_id: Uuid) -> Self {
        let n = next_id();
        Self {
            db,
            owner_id,
            name: format!("Apartment {}", n),
            address: format!("Harbour Street {}", n),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Builds and inserts the apartment entity into the database.
    pub async fn build(self) -> Result<entity::apartment::Model, DbErr> {
        entity::apartment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an apartment with default values for the given owner.
pub async fn create_apartment(
    db: &DatabaseConnection,
    owner_id: Uuid,
) -> Result<entity::apartment::Model, DbErr> {
    ApartmentFactory::new(db, owner_id).build().await
}
