use migration::Migrator;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;

/// A fresh in-memory database with every migration applied, opened through
/// the same path as [`crate::connect_to`].
pub async fn setup_test_db() -> DatabaseConnection {
    let db = crate::connect_to("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory db");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}
