use clap::Parser;
use colored::*;
use common::{AppConfig, logger};
use std::process;

use crate::cli::Cli;
use crate::error::ManageError;

mod cli;
mod commands;
mod error;
mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ManageError> {
    AppConfig::init()?;
    if let Some(path) = cli.database {
        AppConfig::set_database_path(path);
    }
    if let Some(level) = cli.log_level {
        AppConfig::set_log_level(level);
    }

    let (log_level, log_file) = {
        let config = AppConfig::global();
        (config.log_level.clone(), config.log_file.clone())
    };
    logger::init_logger(&log_level, log_file.as_deref())?;

    let db = db::connect().await?;
    let output = commands::execute(&cli.command, &db).await?;
    println!("{}", output);
    Ok(())
}
