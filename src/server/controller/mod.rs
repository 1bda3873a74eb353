pub mod apartment;
pub mod attraction;
pub mod reservation;
pub mod review;
