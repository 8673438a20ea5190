//! Sample data, one seeder per table.
//!
//! Seeders run in dependency order: organizations, users, LoggerRoles and
//! finally the Logger mappings that reference users and roles by name.

pub mod logger;
pub mod logger_role;
pub mod organization;
pub mod user;

use crate::seed::{SeedOutcome, Seeder, run_seeder};
use sea_orm::{DatabaseConnection, DbErr};

/// Seeds the full sample data set, stopping at the first database error.
pub async fn seed_sample_data(db: &DatabaseConnection) -> Result<SeedOutcome, DbErr> {
    let mut total = SeedOutcome::default();

    let seeders: [(Box<dyn Seeder>, &str); 4] = [
        (Box::new(organization::OrganizationSeeder::default()), "Organization"),
        (Box::new(user::UserSeeder::default()), "User"),
        (Box::new(logger_role::LoggerRoleSeeder::default()), "LoggerRole"),
        (Box::new(logger::LoggerSeeder::default()), "Logger"),
    ];

    for (seeder, name) in seeders {
        total += run_seeder(&*seeder, name, db).await?;
    }

    Ok(total)
}
