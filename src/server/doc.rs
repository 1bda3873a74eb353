use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        apartment::{ApartmentDto, CreateApartmentDto, UpdateApartmentDto},
        attraction::{
            AddImagesDto, AttractionDto, AttractionKindDto, CreateAttractionDto, DeleteImageDto,
            UpdateAttractionDto,
        },
        reservation::{
            CreateReservationDto, CreatedReservationDto, ReservationDto, UpdateReservationDto,
        },
        review::{CreateReviewDto, CreatedReviewDto, ReviewDto},
    },
    server::controller::{
        apartment::{self, APARTMENT_TAG},
        attraction::{self, ATTRACTION_TAG},
        reservation::{self, RESERVATION_TAG},
        review::{self, REVIEW_TAG},
    },
};

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        apartment::create_apartment,
        apartment::get_apartments,
        apartment::get_apartment,
        apartment::update_apartment,
        reservation::create_reservation,
        reservation::get_reservation,
        reservation::update_reservation,
        reservation::delete_reservation,
        reservation::get_apartment_reservations,
        reservation::get_current_reservation,
        review::create_review,
        review::get_apartment_reviews,
        attraction::create_attraction,
        attraction::get_apartment_attractions,
        attraction::get_available_attractions,
        attraction::add_attraction_to_apartment,
        attraction::remove_attraction_from_apartment,
        attraction::get_attraction,
        attraction::update_attraction,
        attraction::add_attraction_images,
        attraction::delete_attraction_image
    ),
    components(schemas(
        ErrorDto,
        ApartmentDto,
        CreateApartmentDto,
        UpdateApartmentDto,
        ReservationDto,
        CreateReservationDto,
        UpdateReservationDto,
        CreatedReservationDto,
        ReviewDto,
        CreateReviewDto,
        CreatedReviewDto,
        AttractionKindDto,
        AttractionDto,
        CreateAttractionDto,
        UpdateAttractionDto,
        AddImagesDto,
        DeleteImageDto
    )),
    tags(
        (name = APARTMENT_TAG, description = "Apartments of the logged in owner"),
        (name = RESERVATION_TAG, description = "Apartment bookings"),
        (name = REVIEW_TAG, description = "Guest reviews of past stays"),
        (name = ATTRACTION_TAG, description = "Attractions shared between apartments"),
    ),
    info(
        title = "Staykeeper API",
        version = "0.1.0",
        description = "Apartment reservations and shared attractions"
    )
)]
pub struct ApiDoc;
