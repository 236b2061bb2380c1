//! Database integration tests
//!
//! Checks the migrated schema directly:
//! - Foreign keys reject dangling references
//! - Natural keys are not unique at the storage layer
//! - Timestamps round-trip

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use music_review::db::entities::{album, review, reviewer, track};
use music_review::test_utils::*;

#[tokio::test]
async fn test_album_requires_valid_artist() {
    let db = setup_test_db().await;

    let invalid_album = album::ActiveModel {
        artist_id: Set(99999), // Non-existent artist
        title: Set("Orphan".to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };

    let result = invalid_album.insert(&db).await;
    assert!(result.is_err(), "Should fail to create album with invalid artist_id");
}

#[tokio::test]
async fn test_track_requires_valid_album() {
    let db = setup_test_db().await;
    let artist = create_test_artist(&db, "Nova", None).await;

    let invalid_track = track::ActiveModel {
        title: Set("Drift".to_string()),
        album_id: Set(99999),
        artist_id: Set(artist.id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };

    assert!(invalid_track.insert(&db).await.is_err());
}

#[tokio::test]
async fn test_review_requires_valid_reviewer() {
    let db = setup_test_db().await;
    let artist = create_test_artist(&db, "Nova", None).await;
    let album = create_test_album(&db, artist.id, "Echoes").await;
    let track = create_test_track(&db, &album, "Drift").await;

    let invalid_review = review::ActiveModel {
        title: Set(Some("Ghost".to_string())),
        reviewer_id: Set(99999),
        track_id: Set(track.id),
        artist_id: Set(artist.id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };

    assert!(invalid_review.insert(&db).await.is_err());
}

#[tokio::test]
async fn test_duplicate_names_are_allowed_by_schema() {
    let db = setup_test_db().await;

    create_test_reviewer(&db, "Mia").await;
    create_test_reviewer(&db, "Mia").await;

    let found = reviewer::Entity::find()
        .filter(reviewer::Column::Name.eq("Mia"))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(found.len(), 2);
}

#[tokio::test]
async fn test_unrated_review_is_stored() {
    let db = setup_test_db().await;
    let artist = create_test_artist(&db, "Nova", None).await;
    let album = create_test_album(&db, artist.id, "Echoes").await;
    let track = create_test_track(&db, &album, "Drift").await;
    let reviewer = create_test_reviewer(&db, "Mia").await;

    let review = create_test_review(&db, &reviewer, &track, "Meh", None).await;
    let stored = review::Entity::find_by_id(review.id).one(&db).await.unwrap().unwrap();

    assert_eq!(stored.star_rating, None);
    assert_eq!(stored.created_at.timestamp(), review.created_at.timestamp());
}

#[tokio::test]
async fn test_rating_range_is_not_enforced() {
    let db = setup_test_db().await;
    let artist = create_test_artist(&db, "Nova", None).await;
    let album = create_test_album(&db, artist.id, "Echoes").await;
    let track = create_test_track(&db, &album, "Drift").await;
    let reviewer = create_test_reviewer(&db, "Mia").await;

    let review = create_test_review(&db, &reviewer, &track, "Off the charts", Some(11)).await;
    assert_eq!(review.star_rating, Some(11));
}
