//! API data transfer objects.
//!
//! Request and response bodies exchanged with HTTP clients. Every type here derives
//! `ToSchema` so it can be referenced from the OpenAPI document.

pub mod api;
pub mod apartment;
pub mod attraction;
pub mod reservation;
pub mod review;
