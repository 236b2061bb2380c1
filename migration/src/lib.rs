pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DbBackend;

mod m20240101_000001_create_artists_table;
mod m20240101_000002_create_albums_table;
mod m20240101_000003_create_tracks_table;
mod m20240101_000004_create_reviewers_table;
mod m20240101_000005_create_reviews_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_artists_table::Migration),
            Box::new(m20240101_000002_create_albums_table::Migration),
            Box::new(m20240101_000003_create_tracks_table::Migration),
            Box::new(m20240101_000004_create_reviewers_table::Migration),
            Box::new(m20240101_000005_create_reviews_table::Migration),
        ]
    }
}

/// Name or title column the ingestion queries match on with `=`.
///
/// MySQL's default collations compare case-insensitively, so on MySQL the
/// column is pinned to `utf8mb4_bin` and "nova" never matches "Nova".
pub fn natural_key_column<T: IntoIden>(name: T, backend: DbBackend) -> ColumnDef {
    let mut def = ColumnDef::new(name);
    def.string_len(255).not_null();
    if backend == DbBackend::MySql {
        def.extra("COLLATE utf8mb4_bin");
    }
    def
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artists_ddl(backend: DbBackend) -> String {
        let table = Table::create()
            .table(Alias::new("artists"))
            .col(natural_key_column(Alias::new("name"), backend))
            .to_owned();

        match backend {
            DbBackend::MySql => table.to_string(MysqlQueryBuilder),
            DbBackend::Postgres => table.to_string(PostgresQueryBuilder),
            DbBackend::Sqlite => table.to_string(SqliteQueryBuilder),
        }
    }

    #[test]
    fn test_natural_key_uses_binary_collation_on_mysql() {
        let ddl = artists_ddl(DbBackend::MySql);
        assert!(ddl.contains("COLLATE utf8mb4_bin"), "{ddl}");
        assert!(ddl.contains("NOT NULL"), "{ddl}");
    }

    #[test]
    fn test_natural_key_keeps_default_collation_elsewhere() {
        assert!(!artists_ddl(DbBackend::Sqlite).contains("COLLATE"));
        assert!(!artists_ddl(DbBackend::Postgres).contains("COLLATE"));
    }
}
