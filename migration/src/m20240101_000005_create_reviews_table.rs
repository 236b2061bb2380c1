use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_artists_table::Artists;
use super::m20240101_000003_create_tracks_table::Tracks;
use super::m20240101_000004_create_reviewers_table::Reviewers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::Title).string_len(255))
                    .col(ColumnDef::new(Reviews::Body).text())
                    .col(ColumnDef::new(Reviews::StarRating).integer())
                    .col(
                        ColumnDef::new(Reviews::ReviewerId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reviews::TrackId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reviews::ArtistId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_reviewer_id")
                            .from(Reviews::Table, Reviews::ReviewerId)
                            .to(Reviewers::Table, Reviewers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_track_id")
                            .from(Reviews::Table, Reviews::TrackId)
                            .to(Tracks::Table, Tracks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_artist_id")
                            .from(Reviews::Table, Reviews::ArtistId)
                            .to(Artists::Table, Artists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_artist_id_created_at")
                    .table(Reviews::Table)
                    .col(Reviews::ArtistId)
                    .col(Reviews::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reviews {
    Table,
    Id,
    Title,
    Body,
    StarRating,
    ReviewerId,
    TrackId,
    ArtistId,
    CreatedAt,
}
