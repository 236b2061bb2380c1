use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use serde::Serialize;

use crate::db::entities::{artist, review, reviewer, track};
use crate::error::Result;

/// Artist entry for the review form dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromQueryResult)]
pub struct ArtistOption {
    pub artist_id: i32,
    pub artist_name: String,
}

/// Review joined with its reviewer, track and artist names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromQueryResult)]
pub struct ReviewListing {
    pub review_id: i32,
    pub review_title: Option<String>,
    pub review_description: Option<String>,
    pub star_rating: Option<i32>,
    pub created_at: sea_orm::prelude::DateTimeWithTimeZone,
    pub reviewer_name: String,
    pub track_title: String,
    pub track_length: Option<String>,
    pub track_artwork: Option<String>,
    pub artist_name: String,
}

pub struct ArtistRepository {
    db: DatabaseConnection,
}

impl ArtistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<artist::Model>> {
        Ok(artist::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Distinct (id, name) pairs ordered by name.
    pub async fn list_options(&self) -> Result<Vec<ArtistOption>> {
        Ok(artist::Entity::find()
            .select_only()
            .column_as(artist::Column::Id, "artist_id")
            .column_as(artist::Column::Name, "artist_name")
            .distinct()
            .order_by_asc(artist::Column::Name)
            .order_by_asc(artist::Column::Id)
            .into_model::<ArtistOption>()
            .all(&self.db)
            .await?)
    }
}

pub struct ReviewRepository {
    db: DatabaseConnection,
}

impl ReviewRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reviews of one artist, newest first.
    pub async fn list_for_artist(&self, artist_id: i32) -> Result<Vec<ReviewListing>> {
        Ok(review::Entity::find()
            .select_only()
            .column_as(review::Column::Id, "review_id")
            .column_as(review::Column::Title, "review_title")
            .column_as(review::Column::Body, "review_description")
            .column_as(review::Column::StarRating, "star_rating")
            .column_as(review::Column::CreatedAt, "created_at")
            .column_as(reviewer::Column::Name, "reviewer_name")
            .column_as(track::Column::Title, "track_title")
            .column_as(track::Column::Length, "track_length")
            .column_as(track::Column::ArtworkUrl, "track_artwork")
            .column_as(artist::Column::Name, "artist_name")
            .join(JoinType::InnerJoin, review::Relation::Reviewer.def())
            .join(JoinType::InnerJoin, review::Relation::Track.def())
            .join(JoinType::InnerJoin, review::Relation::Artist.def())
            .filter(review::Column::ArtistId.eq(artist_id))
            .order_by_desc(review::Column::CreatedAt)
            .order_by_desc(review::Column::Id)
            .into_model::<ReviewListing>()
            .all(&self.db)
            .await?)
    }
}
