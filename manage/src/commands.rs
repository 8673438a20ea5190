use crate::cli::Command;
use crate::error::ManageError;
use crate::seeds::seed_sample_data;
use db::role_counts::{format_pairs, organization_role_counts};
use migration::Migrator;
use sea_orm::{DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

/// Runs a command and returns what it prints on stdout.
pub async fn execute(command: &Command, db: &DatabaseConnection) -> Result<String, ManageError> {
    match command {
        Command::PrintOrgLoggerRoleCounts => print_org_logger_role_counts(db).await,
        Command::Seed => seed(db).await,
        Command::Report { json } => report(db, *json).await,
    }
}

/// Applies pending migrations.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await
}

async fn print_org_logger_role_counts(db: &DatabaseConnection) -> Result<String, ManageError> {
    ensure_schema(db).await?;
    seed_sample_data(db).await?;
    report(db, false).await
}

async fn seed(db: &DatabaseConnection) -> Result<String, ManageError> {
    ensure_schema(db).await?;
    let outcome = seed_sample_data(db).await?;
    Ok(format!(
        "Seeded {} rows ({} skipped)",
        outcome.inserted,
        outcome.skipped()
    ))
}

async fn report(db: &DatabaseConnection, json: bool) -> Result<String, ManageError> {
    let rows = organization_role_counts(db).await?;
    log::info!("Counted LoggerRoles for {} organizations", rows.len());

    if json {
        Ok(serde_json::to_string(&rows)?)
    } else {
        Ok(format_pairs(&rows))
    }
}
