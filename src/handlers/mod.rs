pub mod artists;
pub mod health;
pub mod html;
pub mod reviews;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Artist endpoints
        .route("/artists", get(artists::list_artists))
        .route("/artist/:id", get(artists::get_artist))

        // Review endpoints
        .route("/reviews", post(reviews::add_review_json))
        .route("/reviews/:artist_id", get(reviews::list_artist_reviews))
}

pub fn html_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(html::review_form))
        .route("/home", get(html::review_form))
        .route("/musicreview", get(html::review_form))
        .route("/viewreviews", get(html::artist_index))
        .route("/selectreview", get(html::artist_index))
        .route("/artists/:id/reviews", get(html::artist_reviews))
        // The form posts here and receives JSON back
        .route("/addreview", post(reviews::add_review_form))
}

/// JSON 404 for anything no route matched
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Page not found" })),
    )
}
