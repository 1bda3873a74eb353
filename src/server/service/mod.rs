//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and the file store
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running check-then-write sequences atomically

pub mod apartment;
pub mod attraction;
pub mod reservation;
pub mod review;

#[cfg(test)]
mod test;
