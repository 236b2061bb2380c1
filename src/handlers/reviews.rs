use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        Path, State,
    },
    Form, Json,
};
use serde::Serialize;

use crate::{
    db::repositories::{ReviewListing, ReviewRepository},
    error::Result,
    services::{ingest_review, ReviewSubmission},
    state::AppState,
};

pub const REVIEW_ADDED_MESSAGE: &str = "Review added successfully!";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddReviewResponse {
    pub success: bool,
    pub message: &'static str,
    pub review_id: i32,
}

async fn add_review(state: &AppState, submission: ReviewSubmission) -> Result<Json<AddReviewResponse>> {
    let outcome = ingest_review(&state.db, &submission).await?;

    Ok(Json(AddReviewResponse {
        success: true,
        message: REVIEW_ADDED_MESSAGE,
        review_id: outcome.review_id,
    }))
}

/// Review form submission (`application/x-www-form-urlencoded`)
pub async fn add_review_form(
    State(state): State<AppState>,
    payload: std::result::Result<Form<ReviewSubmission>, FormRejection>,
) -> Result<Json<AddReviewResponse>> {
    let Form(submission) = payload?;
    add_review(&state, submission).await
}

/// Same as the form endpoint, for JSON clients
pub async fn add_review_json(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ReviewSubmission>, JsonRejection>,
) -> Result<Json<AddReviewResponse>> {
    let Json(submission) = payload?;
    add_review(&state, submission).await
}

/// Reviews for one artist, newest first
pub async fn list_artist_reviews(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
) -> Result<Json<Vec<ReviewListing>>> {
    let reviews = ReviewRepository::new(state.db.clone())
        .list_for_artist(artist_id)
        .await?;
    Ok(Json(reviews))
}
