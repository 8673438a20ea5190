use crate::seed::{SeedOutcome, Seeder};
use db::models::organization::Model;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

pub const ORGANIZATION_NAMES: [&str; 4] = ["Apple", "Google", "Microsoft", "Yahoo!"];

pub struct OrganizationSeeder {
    names: Vec<String>,
}

impl OrganizationSeeder {
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

impl Default for OrganizationSeeder {
    fn default() -> Self {
        Self::new(ORGANIZATION_NAMES)
    }
}

#[async_trait::async_trait]
impl Seeder for OrganizationSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<SeedOutcome, DbErr> {
        let txn = db.begin().await?;
        for name in &self.names {
            Model::create(&txn, name).await?;
        }
        txn.commit().await?;

        Ok(SeedOutcome::inserted(self.names.len()))
    }
}
