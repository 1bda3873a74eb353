//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::user::create_user(&db).await?;
//! let apartment = factory::apartment::create_apartment(&db, owner.id).await?;
//! let beach = factory::attraction::AttractionFactory::new(&db, owner.id)
//!     .kind(AttractionKind::Beach)
//!     .linked_to(apartment.id)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `apartment` - Create apartment entities
//! - `reservation` - Create reservation entities
//! - `review` - Create review entities
//! - `attraction` - Create attraction entities and their apartment links
//! - `helpers` - ID generation and multi-entity shortcuts

pub mod apartment;
pub mod attraction;
pub mod helpers;
pub mod reservation;
pub mod review;
pub mod user;

pub use apartment::create_apartment;
pub use attraction::{create_attraction, link_attraction};
pub use reservation::create_reservation;
pub use review::create_review;
pub use user::create_user;
