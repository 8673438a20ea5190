use crate::seed::{SeedOutcome, Seeder};
use db::models::logger_role::Model;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

pub const LOGGER_ROLE_NAMES: [&str; 3] = ["Owner", "Developer", "Reporter"];

pub struct LoggerRoleSeeder {
    names: Vec<String>,
}

impl LoggerRoleSeeder {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for LoggerRoleSeeder {
    fn default() -> Self {
        Self::new(LOGGER_ROLE_NAMES)
    }
}

#[async_trait::async_trait]
impl Seeder for LoggerRoleSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<SeedOutcome, DbErr> {
        let txn = db.begin().await?;
        for name in &self.names {
            Model::create(&txn, name).await?;
        }
        txn.commit().await?;

        Ok(SeedOutcome::inserted(self.names.len()))
    }
}
