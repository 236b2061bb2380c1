use sea_orm_migration::prelude::*;

use crate::natural_key_column;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();

        manager
            .create_table(
                Table::create()
                    .table(Reviewers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviewers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(natural_key_column(Reviewers::Name, backend))
                    .col(
                        ColumnDef::new(Reviewers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviewers_name")
                    .table(Reviewers::Table)
                    .col(Reviewers::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviewers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reviewers {
    Table,
    Id,
    Name,
    CreatedAt,
}
