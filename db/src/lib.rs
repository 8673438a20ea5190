pub mod models;
pub mod role_counts;
pub mod test_utils;

use common::{AppConfig, database};
use sea_orm::{Database, DatabaseConnection, DbErr};

/// Connects to the database named by `DATABASE_PATH`.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path_or_url = AppConfig::global().database_path.clone();
    connect_to(&path_or_url).await
}

/// Connects to a SQLite file path or a full `sqlite:` URL.
pub async fn connect_to(path_or_url: &str) -> Result<DatabaseConnection, DbErr> {
    let url = database_url(path_or_url)?;
    log::debug!("Connecting to {}", url);
    Database::connect(&url).await
}

fn database_url(path_or_url: &str) -> Result<String, DbErr> {
    database::sqlite_url(path_or_url).map_err(|e| {
        DbErr::Custom(format!(
            "Failed to prepare database path {}: {}",
            path_or_url, e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::Migrator;
    use sea_orm_migration::MigratorTrait;

    #[test]
    fn test_database_url_reports_unusable_directory() {
        let file = tempfile::NamedTempFile::new().unwrap();
        // The parent "directory" is a regular file.
        let path = file.path().join("dev.db");

        let err = database_url(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, DbErr::Custom(msg) if msg.contains("Failed to prepare database path")));
    }

    #[tokio::test]
    async fn test_connect_to_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dev.db");

        let db = connect_to(path.to_str().unwrap())
            .await
            .expect("Failed to open file database");
        Migrator::up(&db, None).await.expect("Failed to run migrations");

        assert!(path.exists());
    }
}
