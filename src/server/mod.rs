//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for apartment bookings and the attractions
//! owners share between their apartments. The backend uses Axum as the web framework and
//! SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules and transactions over the data layer
//! - **Data Layer** (`data/`) - Repositories over SeaORM entities
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, reference day, file store)
//! - **Startup** (`startup`) - Database, migrations, sessions and shutdown signal
//! - **Router** (`router`) - Axum route configuration and Swagger UI
//! - **Doc** (`doc`) - OpenAPI document
//! - **Util** (`util/`) - Date ranges, clocks, file storage and parsing helpers
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** resolves the session user and checks apartment ownership
//! 3. **Controller** converts DTOs to params, calls service
//! 4. **Service** runs business rules, usually inside one transaction
//! 5. **Data** queries database and returns entity models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
