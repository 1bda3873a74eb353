pub use super::apartment::Entity as Apartment;
pub use super::apartment_attraction::Entity as ApartmentAttraction;
pub use super::attraction::Entity as Attraction;
pub use super::reservation::Entity as Reservation;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
