use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::{
    db::{
        entities::artist,
        repositories::{ArtistOption, ArtistRepository},
    },
    error::{AppError, Result},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct ArtistResponse {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_description: Option<String>,
    pub artist_picture: Option<String>,
}

impl From<artist::Model> for ArtistResponse {
    fn from(model: artist::Model) -> Self {
        Self {
            artist_id: model.id,
            artist_name: model.name,
            artist_description: model.description,
            artist_picture: model.picture_url,
        }
    }
}

/// List artists for the review selector dropdown
pub async fn list_artists(State(state): State<AppState>) -> Result<Json<Vec<ArtistOption>>> {
    let artists = ArtistRepository::new(state.db.clone()).list_options().await?;
    Ok(Json(artists))
}

/// Get a single artist
pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ArtistResponse>> {
    let artist = ArtistRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Artist not found".to_string()))?;

    Ok(Json(artist.into()))
}
