//! mindwell-api
//!
//! JSON HTTP surface over the screening engine and the support features
//! (companion, resource library, forum, counselor booking). Stateless apart
//! from configuration: nothing a client sends is stored.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Instruments
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        // Scoring
        .route(
            "/assessments/score",
            post(routes::assessments::score_assessment),
        )
        .route("/severity", post(routes::assessments::classify))
        // Companion
        .route("/companion/greeting", get(routes::companion::greeting))
        .route("/companion/reply", post(routes::companion::reply))
        // Resource library
        .route("/resources", get(routes::resources::list_resources))
        .route(
            "/resources/categories",
            get(routes::resources::list_categories),
        )
        .route("/resources/{id}", get(routes::resources::get_resource))
        // Forum
        .route("/forum/categories", get(routes::forum::list_categories))
        .route(
            "/forum/posts",
            get(routes::forum::list_posts).post(routes::forum::create_post),
        )
        // Counseling
        .route("/counselors", get(routes::counseling::list_counselors))
        .route("/counselors/{id}", get(routes::counseling::get_counselor))
        .route("/counseling/slots", get(routes::counseling::list_slots))
        .route(
            "/counseling/bookings",
            post(routes::counseling::create_booking),
        )
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::request_log::request_log))
                .layer(cors),
        )
        .with_state(state)
}
