//! Find-or-create lookups for the dimension tables and the review insert.
//!
//! Every function takes any [`ConnectionTrait`] so the ingestion transaction
//! can pass its `DatabaseTransaction` straight through. A lookup that finds
//! a row never touches it: attributes supplied for creation are ignored
//! when the natural key already exists.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::db::entities::{album, artist, review, reviewer, track};

/// Outcome of a find-or-create lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub id: i32,
    pub created: bool,
}

impl Resolved {
    fn existing(id: i32) -> Self {
        Self { id, created: false }
    }

    fn created(id: i32) -> Self {
        Self { id, created: true }
    }
}

/// Exact, case-sensitive name match.
pub async fn resolve_artist<C: ConnectionTrait>(
    conn: &C,
    name: &str,
    description: Option<&str>,
    picture_url: Option<&str>,
) -> Result<Resolved, DbErr> {
    let existing: Option<i32> = artist::Entity::find()
        .select_only()
        .column(artist::Column::Id)
        .filter(artist::Column::Name.eq(name))
        .order_by_asc(artist::Column::Id)
        .into_tuple()
        .one(conn)
        .await?;

    if let Some(id) = existing {
        tracing::debug!(artist_id = id, name, "Reusing existing artist");
        return Ok(Resolved::existing(id));
    }

    let created = artist::ActiveModel {
        name: Set(name.to_string()),
        description: Set(description.map(str::to_string)),
        picture_url: Set(picture_url.map(str::to_string)),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    tracing::debug!(artist_id = created.id, name, "Created artist");
    Ok(Resolved::created(created.id))
}

/// Albums are scoped to their artist: the same title under another artist
/// is a different album.
pub async fn resolve_album<C: ConnectionTrait>(
    conn: &C,
    title: &str,
    artist_id: i32,
) -> Result<Resolved, DbErr> {
    let existing: Option<i32> = album::Entity::find()
        .select_only()
        .column(album::Column::Id)
        .filter(album::Column::Title.eq(title))
        .filter(album::Column::ArtistId.eq(artist_id))
        .order_by_asc(album::Column::Id)
        .into_tuple()
        .one(conn)
        .await?;

    if let Some(id) = existing {
        tracing::debug!(album_id = id, artist_id, title, "Reusing existing album");
        return Ok(Resolved::existing(id));
    }

    let created = album::ActiveModel {
        title: Set(title.to_string()),
        artist_id: Set(artist_id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    tracing::debug!(album_id = created.id, artist_id, title, "Created album");
    Ok(Resolved::created(created.id))
}

/// Tracks are matched on (title, artist_id). `album_id` is only recorded
/// when the track is first created, so a title already used on another
/// album by the same artist resolves to that earlier track.
pub async fn resolve_track<C: ConnectionTrait>(
    conn: &C,
    title: &str,
    length: Option<&str>,
    artwork_url: Option<&str>,
    album_id: i32,
    artist_id: i32,
) -> Result<Resolved, DbErr> {
    let existing: Option<i32> = track::Entity::find()
        .select_only()
        .column(track::Column::Id)
        .filter(track::Column::Title.eq(title))
        .filter(track::Column::ArtistId.eq(artist_id))
        .order_by_asc(track::Column::Id)
        .into_tuple()
        .one(conn)
        .await?;

    if let Some(id) = existing {
        tracing::debug!(track_id = id, artist_id, title, "Reusing existing track");
        return Ok(Resolved::existing(id));
    }

    let created = track::ActiveModel {
        title: Set(title.to_string()),
        length: Set(length.map(str::to_string)),
        artwork_url: Set(artwork_url.map(str::to_string)),
        album_id: Set(album_id),
        artist_id: Set(artist_id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    tracing::debug!(track_id = created.id, album_id, artist_id, title, "Created track");
    Ok(Resolved::created(created.id))
}

pub async fn resolve_reviewer<C: ConnectionTrait>(conn: &C, name: &str) -> Result<Resolved, DbErr> {
    let existing: Option<i32> = reviewer::Entity::find()
        .select_only()
        .column(reviewer::Column::Id)
        .filter(reviewer::Column::Name.eq(name))
        .order_by_asc(reviewer::Column::Id)
        .into_tuple()
        .one(conn)
        .await?;

    if let Some(id) = existing {
        tracing::debug!(reviewer_id = id, name, "Reusing existing reviewer");
        return Ok(Resolved::existing(id));
    }

    let created = reviewer::ActiveModel {
        name: Set(name.to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    tracing::debug!(reviewer_id = created.id, name, "Created reviewer");
    Ok(Resolved::created(created.id))
}

/// Fields of the review row itself. Rating range is not checked here.
#[derive(Debug, Clone, Copy)]
pub struct NewReview<'a> {
    pub title: Option<&'a str>,
    pub body: Option<&'a str>,
    pub star_rating: Option<i32>,
    pub reviewer_id: i32,
    pub track_id: i32,
    pub artist_id: i32,
}

/// Inserts the fact row with a server-assigned `created_at`.
pub async fn insert_review<C: ConnectionTrait>(conn: &C, new: NewReview<'_>) -> Result<i32, DbErr> {
    let created = review::ActiveModel {
        title: Set(new.title.map(str::to_string)),
        body: Set(new.body.map(str::to_string)),
        star_rating: Set(new.star_rating),
        reviewer_id: Set(new.reviewer_id),
        track_id: Set(new.track_id),
        artist_id: Set(new.artist_id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Ok(created.id)
}
