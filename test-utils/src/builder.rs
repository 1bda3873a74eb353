use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use std::path::PathBuf;

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Apartment, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Apartment)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Sqlite file used instead of an in-memory database, see `with_database_file`.
    database_file: Option<PathBuf>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            database_file: None,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Backs the test database with a Sqlite file and a multi-connection pool.
    ///
    /// Needed by tests that run transactions concurrently: every in-memory connection
    /// sees its own database, so an in-memory context is limited to one connection.
    ///
    /// # Arguments
    /// - `path` - File to create, usually inside a `tempfile::TempDir` kept alive by the test
    pub fn with_database_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_file = Some(path.into());
        self
    }

    /// Adds the tables every apartment test needs: User and Apartment.
    pub fn with_apartment_tables(self) -> Self {
        self.with_table(User).with_table(Apartment)
    }

    /// Adds all tables required for reservation operations.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - Apartment
    /// - Reservation
    /// - Review
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_reservation_tables(self) -> Self {
        self.with_apartment_tables()
            .with_table(Reservation)
            .with_table(Review)
    }

    /// Adds all tables required for attraction sharing operations.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - Apartment
    /// - Attraction
    /// - ApartmentAttraction
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_attraction_tables(self) -> Self {
        self.with_apartment_tables()
            .with_table(Attraction)
            .with_table(ApartmentAttraction)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates the SQLite database connection and executes all CREATE TABLE statements
    /// that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = match self.database_file {
            Some(path) => TestContext::with_database_file(path),
            None => TestContext::new(),
        };

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
