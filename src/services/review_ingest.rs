//! Review ingestion transaction.
//!
//! A submission resolves artist → album → track → reviewer, each step using
//! the id produced by the one before it, and then writes the review. All five
//! steps run inside one transaction. The first failure rolls the whole thing
//! back and surfaces as a plain [`AppError::Database`]; the failing stage is
//! only visible in the log.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use serde::{de, Deserialize, Deserializer};

use super::dimensions::{
    insert_review, resolve_album, resolve_artist, resolve_reviewer, resolve_track, NewReview,
    Resolved,
};
use crate::error::{AppError, Result};

/// Flat payload posted by the review form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReviewSubmission {
    pub artist_name: String,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub artist_description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub artist_picture: Option<String>,
    pub album_title: String,
    pub track_title: String,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub track_length: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub track_artwork: Option<String>,
    pub reviewer_name: String,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub review_title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub review_description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_star_rating")]
    pub star_rating: Option<i32>,
}

/// HTML forms post every input, so an empty or whitespace-only value means
/// the field was left blank.
fn deserialize_optional_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}

/// Accepts a JSON number, a numeric string, or an empty form field.
fn deserialize_star_rating<'de, D>(deserializer: D) -> std::result::Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RatingInput {
        Number(i32),
        Text(String),
    }

    match Option::<RatingInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RatingInput::Number(n)) => Ok(Some(n)),
        Some(RatingInput::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RatingInput::Text(s)) => s.trim().parse().map(Some).map_err(de::Error::custom),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestStage {
    Begin,
    ResolveArtist,
    ResolveAlbum,
    ResolveTrack,
    ResolveReviewer,
    InsertReview,
    Commit,
}

impl IngestStage {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Begin => "begin",
            Self::ResolveArtist => "resolve_artist",
            Self::ResolveAlbum => "resolve_album",
            Self::ResolveTrack => "resolve_track",
            Self::ResolveReviewer => "resolve_reviewer",
            Self::InsertReview => "insert_review",
            Self::Commit => "commit",
        }
    }
}

/// Ids touched by a committed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOutcome {
    pub review_id: i32,
    pub artist: Resolved,
    pub album: Resolved,
    pub track: Resolved,
    pub reviewer: Resolved,
}

fn stage_failed(stage: IngestStage, err: DbErr) -> AppError {
    tracing::error!(stage = stage.as_str(), error = %err, "Review ingestion failed");
    AppError::Database(err)
}

/// Persists one submission atomically.
///
/// No retry is attempted. Concurrent submissions that introduce the same new
/// name can both miss the lookup and both insert; later lookups then settle
/// on the lowest id.
pub async fn ingest_review(
    db: &DatabaseConnection,
    submission: &ReviewSubmission,
) -> Result<IngestOutcome> {
    let txn = db
        .begin()
        .await
        .map_err(|e| stage_failed(IngestStage::Begin, e))?;

    match ingest_within(&txn, submission).await {
        Ok(outcome) => {
            txn.commit()
                .await
                .map_err(|e| stage_failed(IngestStage::Commit, e))?;

            tracing::info!(
                review_id = outcome.review_id,
                artist_id = outcome.artist.id,
                album_id = outcome.album.id,
                track_id = outcome.track.id,
                reviewer_id = outcome.reviewer.id,
                "Review added"
            );
            Ok(outcome)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!(error = %rollback_err, "Failed to roll back review ingestion");
            }
            Err(err)
        }
    }
}

/// Runs the resolve chain and the review insert on an already open
/// connection or transaction. Callers own commit and rollback.
pub async fn ingest_within<C: ConnectionTrait>(
    conn: &C,
    submission: &ReviewSubmission,
) -> Result<IngestOutcome> {
    let artist = resolve_artist(
        conn,
        &submission.artist_name,
        submission.artist_description.as_deref(),
        submission.artist_picture.as_deref(),
    )
    .await
    .map_err(|e| stage_failed(IngestStage::ResolveArtist, e))?;

    let album = resolve_album(conn, &submission.album_title, artist.id)
        .await
        .map_err(|e| stage_failed(IngestStage::ResolveAlbum, e))?;

    let track = resolve_track(
        conn,
        &submission.track_title,
        submission.track_length.as_deref(),
        submission.track_artwork.as_deref(),
        album.id,
        artist.id,
    )
    .await
    .map_err(|e| stage_failed(IngestStage::ResolveTrack, e))?;

    let reviewer = resolve_reviewer(conn, &submission.reviewer_name)
        .await
        .map_err(|e| stage_failed(IngestStage::ResolveReviewer, e))?;

    let review_id = insert_review(
        conn,
        NewReview {
            title: submission.review_title.as_deref(),
            body: submission.review_description.as_deref(),
            star_rating: submission.star_rating,
            reviewer_id: reviewer.id,
            track_id: track.id,
            artist_id: artist.id,
        },
    )
    .await
    .map_err(|e| stage_failed(IngestStage::InsertReview, e))?;

    Ok(IngestOutcome {
        review_id,
        artist,
        album,
        track,
        reviewer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_star_rating_accepts_number_and_string() {
        let from_number: ReviewSubmission = serde_json::from_value(json!({
            "artist_name": "Nova",
            "album_title": "Echoes",
            "track_title": "Drift",
            "reviewer_name": "Mia",
            "star_rating": 4
        }))
        .unwrap();
        assert_eq!(from_number.star_rating, Some(4));

        let from_string: ReviewSubmission = serde_json::from_value(json!({
            "artist_name": "Nova",
            "album_title": "Echoes",
            "track_title": "Drift",
            "reviewer_name": "Mia",
            "star_rating": " 3 "
        }))
        .unwrap();
        assert_eq!(from_string.star_rating, Some(3));
    }

    #[test]
    fn test_star_rating_blank_or_missing_is_none() {
        let blank: ReviewSubmission = serde_json::from_value(json!({
            "artist_name": "Nova",
            "album_title": "Echoes",
            "track_title": "Drift",
            "reviewer_name": "Mia",
            "star_rating": ""
        }))
        .unwrap();
        assert_eq!(blank.star_rating, None);

        let missing: ReviewSubmission = serde_json::from_value(json!({
            "artist_name": "Nova",
            "album_title": "Echoes",
            "track_title": "Drift",
            "reviewer_name": "Mia"
        }))
        .unwrap();
        assert_eq!(missing.star_rating, None);
        assert_eq!(missing.artist_description, None);
    }

    #[test]
    fn test_blank_optional_text_is_none() {
        let submission: ReviewSubmission = serde_json::from_value(json!({
            "artist_name": "Nova",
            "artist_description": "",
            "artist_picture": "   ",
            "album_title": "Echoes",
            "track_title": "Drift",
            "track_length": "3:45",
            "reviewer_name": "Mia",
            "review_title": "",
            "review_description": null
        }))
        .unwrap();

        assert_eq!(submission.artist_description, None);
        assert_eq!(submission.artist_picture, None);
        assert_eq!(submission.track_length.as_deref(), Some("3:45"));
        assert_eq!(submission.track_artwork, None);
        assert_eq!(submission.review_title, None);
        assert_eq!(submission.review_description, None);
    }

    #[test]
    fn test_star_rating_rejects_garbage() {
        let result = serde_json::from_value::<ReviewSubmission>(json!({
            "artist_name": "Nova",
            "album_title": "Echoes",
            "track_title": "Drift",
            "reviewer_name": "Mia",
            "star_rating": "five"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(IngestStage::ResolveTrack.as_str(), "resolve_track");
        assert_eq!(IngestStage::InsertReview.as_str(), "insert_review");
    }
}
