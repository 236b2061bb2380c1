pub mod entities;
pub mod repositories;

pub use entities::*;

use anyhow::Result;
use sea_orm::{Database, DatabaseConnection};

use crate::config::Config;

/// Connects to the configured database, retrying at a fixed interval until
/// it answers or `db_connect_max_attempts` is exhausted.
pub async fn connect_with_retry(config: &Config) -> Result<DatabaseConnection> {
    let delay = config.db_connect_retry_delay();
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        match Database::connect(&config.database_url).await {
            Ok(db) => return Ok(db),
            Err(e) => {
                if config
                    .db_connect_max_attempts
                    .is_some_and(|max| attempt >= max)
                {
                    return Err(anyhow::Error::new(e).context(format!(
                        "Couldn't connect to database after {} attempts",
                        attempt
                    )));
                }
                tracing::warn!(
                    attempt,
                    error = %e,
                    "Couldn't connect to database, retrying in {:?}",
                    delay
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}
