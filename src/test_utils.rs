//! Test utilities for Music Review
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState factories
//! - Test data generators

use chrono::Utc;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

use crate::{
    db::entities::{album, artist, review, reviewer, track},
    services::ReviewSubmission,
    state::AppState,
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database perfect for parallel testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    // Run all migrations
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a complete test AppState with an isolated database
pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;
    AppState::new(db)
}

/// The submission used throughout the docs: a fresh artist, album, track
/// and reviewer with a five star review.
pub fn sample_submission() -> ReviewSubmission {
    ReviewSubmission {
        artist_name: "Nova".to_string(),
        artist_description: None,
        artist_picture: None,
        album_title: "Echoes".to_string(),
        track_title: "Drift".to_string(),
        track_length: None,
        track_artwork: None,
        reviewer_name: "Mia".to_string(),
        review_title: Some("Great".to_string()),
        review_description: Some("Loved it".to_string()),
        star_rating: Some(5),
    }
}

/// Row counts for every table, in dependency order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCounts {
    pub artists: u64,
    pub albums: u64,
    pub tracks: u64,
    pub reviewers: u64,
    pub reviews: u64,
}

pub async fn table_counts(db: &DatabaseConnection) -> TableCounts {
    TableCounts {
        artists: artist::Entity::find().count(db).await.expect("count artists"),
        albums: album::Entity::find().count(db).await.expect("count albums"),
        tracks: track::Entity::find().count(db).await.expect("count tracks"),
        reviewers: reviewer::Entity::find().count(db).await.expect("count reviewers"),
        reviews: review::Entity::find().count(db).await.expect("count reviews"),
    }
}

// ============================================================================
// Test Data Factories
// ============================================================================

/// Create a test artist in the database
pub async fn create_test_artist(
    db: &DatabaseConnection,
    name: &str,
    description: Option<&str>,
) -> artist::Model {
    let artist = artist::ActiveModel {
        name: Set(name.to_string()),
        description: Set(description.map(|s| s.to_string())),
        picture_url: Set(None),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };

    artist.insert(db).await.expect("Failed to insert test artist")
}

/// Create a test album in the database
pub async fn create_test_album(
    db: &DatabaseConnection,
    artist_id: i32,
    title: &str,
) -> album::Model {
    let album = album::ActiveModel {
        artist_id: Set(artist_id),
        title: Set(title.to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };

    album.insert(db).await.expect("Failed to insert test album")
}

/// Create a test track in the database
pub async fn create_test_track(
    db: &DatabaseConnection,
    album: &album::Model,
    title: &str,
) -> track::Model {
    let track = track::ActiveModel {
        title: Set(title.to_string()),
        length: Set(Some("3:30".to_string())),
        artwork_url: Set(None),
        album_id: Set(album.id),
        artist_id: Set(album.artist_id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };

    track.insert(db).await.expect("Failed to insert test track")
}

/// Create a test reviewer in the database
pub async fn create_test_reviewer(db: &DatabaseConnection, name: &str) -> reviewer::Model {
    let reviewer = reviewer::ActiveModel {
        name: Set(name.to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };

    reviewer.insert(db).await.expect("Failed to insert test reviewer")
}

/// Create a test review in the database
pub async fn create_test_review(
    db: &DatabaseConnection,
    reviewer: &reviewer::Model,
    track: &track::Model,
    title: &str,
    star_rating: Option<i32>,
) -> review::Model {
    let review = review::ActiveModel {
        title: Set(Some(title.to_string())),
        body: Set(Some(format!("{} body", title))),
        star_rating: Set(star_rating),
        reviewer_id: Set(reviewer.id),
        track_id: Set(track.id),
        artist_id: Set(track.artist_id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };

    review.insert(db).await.expect("Failed to insert test review")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_db() {
        let db = setup_test_db().await;
        let counts = table_counts(&db).await;

        assert_eq!(
            counts,
            TableCounts {
                artists: 0,
                albums: 0,
                tracks: 0,
                reviewers: 0,
                reviews: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_factories_chain() {
        let db = setup_test_db().await;
        let artist = create_test_artist(&db, "Test Artist", Some("desc")).await;
        let album = create_test_album(&db, artist.id, "Test Album").await;
        let track = create_test_track(&db, &album, "Test Track").await;
        let reviewer = create_test_reviewer(&db, "Test Reviewer").await;
        let review = create_test_review(&db, &reviewer, &track, "Solid", Some(4)).await;

        assert_eq!(album.artist_id, artist.id);
        assert_eq!(track.album_id, album.id);
        assert_eq!(track.artist_id, artist.id);
        assert_eq!(review.artist_id, artist.id);
        assert_eq!(review.star_rating, Some(4));
    }

    #[tokio::test]
    async fn test_parallel_databases() {
        // Run two database setups in parallel - they should not interfere
        let (db1, db2) = tokio::join!(setup_test_db(), setup_test_db());

        let artist1 = create_test_artist(&db1, "Artist 1", None).await;
        let artist2 = create_test_artist(&db2, "Artist 2", None).await;

        // Both should be ID 1 (separate databases)
        assert_eq!(artist1.id, 1);
        assert_eq!(artist2.id, 1);

        assert_eq!(table_counts(&db1).await.artists, 1);
        assert_eq!(table_counts(&db2).await.artists, 1);
    }
}
