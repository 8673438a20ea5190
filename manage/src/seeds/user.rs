use crate::seed::{SeedOutcome, Seeder};
use db::models::{organization, user};
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

/// (user name, organization name)
pub const USER_MAPPINGS: [(&str, &str); 7] = [
    ("Steve Jobs", "Apple"),
    ("Tim Cook", "Apple"),
    ("Phil Schiller", "Apple"),
    ("Sundar Pichai", "Google"),
    ("Eric Schmidt", "Google"),
    ("Satya Nadella", "Microsoft"),
    ("Marissa Mayer", "Yahoo!"),
];

pub struct UserSeeder {
    mappings: Vec<(String, String)>,
}

impl UserSeeder {
    pub fn new<'a, I>(mappings: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            mappings: mappings
                .into_iter()
                .map(|(user, org)| (user.to_owned(), org.to_owned()))
                .collect(),
        }
    }
}

impl Default for UserSeeder {
    fn default() -> Self {
        Self::new(USER_MAPPINGS)
    }
}

#[async_trait::async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<SeedOutcome, DbErr> {
        let txn = db.begin().await?;
        let mut outcome = SeedOutcome::default();

        for (user_name, org_name) in &self.mappings {
            let Some(org) = organization::Model::find_by_name(&txn, org_name).await? else {
                outcome.skip("Organization", org_name);
                continue;
            };

            user::Model::create(&txn, user_name, org.id).await?;
            outcome.inserted += 1;
        }

        txn.commit().await?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::organization::OrganizationSeeder;
    use db::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_users_map_to_organizations() {
        let db = setup_test_db().await;
        OrganizationSeeder::default().seed(&db).await.unwrap();

        let outcome = UserSeeder::default().seed(&db).await.unwrap();
        assert_eq!(outcome, SeedOutcome::inserted(7));

        let google = organization::Model::find_by_name(&db, "Google").await.unwrap().unwrap();
        let eric = user::Model::find_by_name(&db, "Eric Schmidt").await.unwrap().unwrap();
        assert_eq!(eric.organization_id, google.id);
    }

    #[tokio::test]
    async fn test_unknown_organization_is_skipped() {
        let db = setup_test_db().await;
        OrganizationSeeder::new(["Apple"]).seed(&db).await.unwrap();

        let seeder = UserSeeder::new([
            ("Steve Jobs", "Apple"),
            ("Jerry Yang", "Altavista"),
            ("Tim Cook", "Apple"),
        ]);
        let outcome = seeder.seed(&db).await.unwrap();

        assert_eq!(outcome.inserted, 2);
        assert_eq!(
            outcome.warnings,
            vec![r#"Could not find Organization with name "Altavista"!"#.to_string()]
        );
        assert!(user::Model::find_by_name(&db, "Jerry Yang").await.unwrap().is_none());
        assert!(user::Model::find_by_name(&db, "Tim Cook").await.unwrap().is_some());
    }
}
