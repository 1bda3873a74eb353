//! Shared helper utilities for factory methods.
//!
//! Provides unique counter values for generated test data and convenience methods for
//! creating entities together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names and emails in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an owner and one apartment belonging to them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, apartment))` - The created user and apartment
/// - `Err(DbErr)` - Database error during creation
pub async fn create_apartment_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::apartment::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let apartment = crate::factory::apartment::create_apartment(db, owner.id).await?;

    Ok((owner, apartment))
}

/// Creates an owner with `count` apartments.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of apartments to create for the owner
///
/// # Returns
/// - `Ok((owner, apartments))` - The created user and apartments in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_owner_with_apartments(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::user::Model, Vec<entity::apartment::Model>), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;

    let mut apartments = Vec::with_capacity(count);
    for _ in 0..count {
        apartments.push(crate::factory::apartment::create_apartment(db, owner.id).await?);
    }

    Ok((owner, apartments))
}
