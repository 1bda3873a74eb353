//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Reference day provider anchoring "today" to the configured timezone
//! - File store used to purge attraction images

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::util::{file_store::FileStore, time::ReferenceDay};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `ReferenceDay` holds an `Arc` clock and a `Copy` timezone
/// - `Arc<dyn FileStore>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Resolves the start of the current day for current-reservation queries.
    pub reference_day: ReferenceDay,

    /// Storage for uploaded images, purged when attractions or images are deleted.
    pub file_store: Arc<dyn FileStore>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `reference_day` - Clock and reference timezone
    /// - `file_store` - Storage backend for uploaded images
    pub fn new(
        db: DatabaseConnection,
        reference_day: ReferenceDay,
        file_store: Arc<dyn FileStore>,
    ) -> Self {
        Self {
            db,
            reference_day,
            file_store,
        }
    }
}
