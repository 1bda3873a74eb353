//! SeaORM entity definitions for the reservation & attraction schema.

pub mod prelude;

pub mod apartment;
pub mod apartment_attraction;
pub mod attraction;
pub mod reservation;
pub mod review;
pub mod user;
