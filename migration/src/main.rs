use colored::*;
use common::{AppConfig, database};
use std::{fs, path::Path, process};

#[tokio::main]
async fn main() {
    if let Err(err) = AppConfig::init() {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }

    let db_path = AppConfig::global().database_path.clone();
    let command = std::env::args().nth(1);

    let result = match command.as_deref() {
        Some("clean") => remove_db_file(&db_path),
        Some("fresh") => match remove_db_file(&db_path) {
            Ok(()) => migrate(&db_path).await,
            Err(err) => Err(err),
        },
        None | Some("up") => migrate(&db_path).await,
        Some(other) => Err(format!("unknown command `{other}` (expected up, fresh or clean)")),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}

async fn migrate(db_path: &str) -> Result<(), String> {
    let url = database::sqlite_url(db_path)
        .map_err(|e| format!("Failed to create DB directory: {e}"))?;
    let db = sea_orm::Database::connect(&url)
        .await
        .map_err(|e| format!("DB connection failed: {e}"))?;
    migration::runner::run_all_migrations(&db)
        .await
        .map_err(|e| e.to_string())
}

fn remove_db_file(path: &str) -> Result<(), String> {
    if database::is_database_url(path) {
        println!("DATABASE_PATH is a URL, nothing to delete: {}", path);
        return Ok(());
    }

    let db_path = Path::new(path);
    if db_path.exists() {
        fs::remove_file(db_path).map_err(|e| format!("Failed to delete DB file: {e}"))?;
        println!("Deleted DB: {}", db_path.display());
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
    Ok(())
}
