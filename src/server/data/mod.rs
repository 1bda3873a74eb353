//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models and are generic over
//! `ConnectionTrait`, so the same repository works on the connection pool or inside a
//! transaction opened by a service.

pub mod apartment;
pub mod apartment_attraction;
pub mod attraction;
pub mod reservation;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
