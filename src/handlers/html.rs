use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::{
    db::repositories::{ArtistRepository, ReviewRepository},
    error::{AppError, Result},
    state::AppState,
    templates::{artist_index_page, artist_reviews_page, review_form_page},
};

/// Review submission form
pub async fn review_form() -> Html<String> {
    Html(review_form_page().into_string())
}

/// Artist list linking to each artist's reviews
pub async fn artist_index(State(state): State<AppState>) -> Result<Html<String>> {
    let artists = ArtistRepository::new(state.db.clone()).list_options().await?;
    Ok(Html(artist_index_page(&artists).into_string()))
}

pub async fn artist_reviews(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let artist = ArtistRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Artist not found".to_string()))?;

    let reviews = ReviewRepository::new(state.db.clone())
        .list_for_artist(artist.id)
        .await?;

    Ok(Html(artist_reviews_page(&artist, &reviews).into_string()))
}
