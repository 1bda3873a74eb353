use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        apartment::{create_apartment, get_apartment, get_apartments, update_apartment},
        attraction::{
            add_attraction_images, add_attraction_to_apartment, create_attraction,
            delete_attraction_image, get_apartment_attractions, get_attraction,
            get_available_attractions, remove_attraction_from_apartment, update_attraction,
        },
        reservation::{
            create_reservation, delete_reservation, get_apartment_reservations,
            get_current_reservation, get_reservation, update_reservation,
        },
        review::{create_review, get_apartment_reviews},
    },
    doc::ApiDoc,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/apartments", post(create_apartment).get(get_apartments))
        .route(
            "/api/apartments/{apartment_id}",
            get(get_apartment).put(update_apartment),
        )
        .route(
            "/api/apartments/{apartment_id}/reservations",
            get(get_apartment_reservations),
        )
        .route(
            "/api/apartments/{apartment_id}/reservations/current",
            get(get_current_reservation),
        )
        .route("/api/reservations", post(create_reservation))
        .route(
            "/api/reservations/{reservation_id}",
            get(get_reservation)
                .patch(update_reservation)
                .delete(delete_reservation),
        )
        .route("/api/reviews", post(create_review))
        .route(
            "/api/apartments/{apartment_id}/reviews",
            get(get_apartment_reviews),
        )
        .route(
            "/api/apartments/{apartment_id}/attractions/{kind}",
            post(create_attraction).get(get_apartment_attractions),
        )
        .route(
            "/api/apartments/{apartment_id}/attractions/{kind}/available",
            get(get_available_attractions),
        )
        .route(
            "/api/apartments/{apartment_id}/attractions/{kind}/{attraction_id}",
            post(add_attraction_to_apartment).delete(remove_attraction_from_apartment),
        )
        .route(
            "/api/attractions/{kind}/{attraction_id}",
            get(get_attraction).put(update_attraction),
        )
        .route(
            "/api/attractions/{kind}/{attraction_id}/images",
            post(add_attraction_images).delete(delete_attraction_image),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
