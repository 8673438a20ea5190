use crate::seed::{SeedOutcome, Seeder};
use db::models::{logger, logger_role, user};
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

/// (user name, LoggerRole name)
pub const LOGGER_MAPPINGS: [(&str, &str); 6] = [
    ("Steve Jobs", "Owner"),
    ("Tim Cook", "Developer"),
    ("Phil Schiller", "Reporter"), // Apple: 3 distinct roles
    ("Sundar Pichai", "Owner"),
    ("Eric Schmidt", "Developer"), // Google: 2
    ("Satya Nadella", "Owner"),    // Microsoft: 1, Yahoo!: 0
];

pub struct LoggerSeeder {
    mappings: Vec<(String, String)>,
}

impl LoggerSeeder {
    pub fn new<'a, I>(mappings: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            mappings: mappings
                .into_iter()
                .map(|(user, role)| (user.to_owned(), role.to_owned()))
                .collect(),
        }
    }
}

impl Default for LoggerSeeder {
    fn default() -> Self {
        Self::new(LOGGER_MAPPINGS)
    }
}

#[async_trait::async_trait]
impl Seeder for LoggerSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<SeedOutcome, DbErr> {
        let txn = db.begin().await?;
        let mut outcome = SeedOutcome::default();

        for (user_name, role_name) in &self.mappings {
            let Some(user) = user::Model::find_by_name(&txn, user_name).await? else {
                outcome.skip("User", user_name);
                continue;
            };

            let Some(role) = logger_role::Model::find_by_name(&txn, role_name).await? else {
                outcome.skip("LoggerRole", role_name);
                continue;
            };

            logger::Model::create(&txn, user.id, role.id).await?;
            outcome.inserted += 1;
        }

        txn.commit().await?;
        Ok(outcome)
    }
}
