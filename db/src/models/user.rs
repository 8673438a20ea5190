use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryFilter, QueryOrder};
use serde::Serialize;

/// Represents a user in the `users` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Full name, e.g. "Tim Cook".
    pub name: String,
    /// Organization the user belongs to (foreign key to `organizations`).
    pub organization_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationId",
        to = "super::organization::Column::Id"
    )]
    Organization,

    /// Role assignments held by this user.
    #[sea_orm(has_many = "super::logger::Entity")]
    Loggers,
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl Related<super::logger::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Loggers.def()
    }
}

/// Users reach their roles through the `loggers` bridge table.
impl Related<super::logger_role::Entity> for Entity {
    fn to() -> RelationDef {
        super::logger::Relation::LoggerRole.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::logger::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C>(db: &C, name: &str, organization_id: i64) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        ActiveModel {
            name: Set(name.to_owned()),
            organization_id: Set(organization_id),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Returns the earliest user with the given name, if any.
    pub async fn find_by_name<C>(db: &C, name: &str) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::Name.eq(name))
            .order_by_asc(Column::Id)
            .one(db)
            .await
    }

    pub async fn logger_roles<C>(&self, db: &C) -> Result<Vec<super::logger_role::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        self.find_related(super::logger_role::Entity)
            .order_by_asc(super::logger_role::Column::Id)
            .all(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{logger, logger_role, organization};
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_create_user_in_organization() {
        let db = setup_test_db().await;
        let org = organization::Model::create(&db, "Apple").await.unwrap();

        let user = Model::create(&db, "Steve Jobs", org.id)
            .await
            .expect("Failed to create user");
        assert_eq!(user.organization_id, org.id);

        let found = Model::find_by_name(&db, "Steve Jobs").await.unwrap();
        assert_eq!(found, Some(user));
    }

    #[tokio::test]
    async fn test_create_user_rejects_unknown_organization() {
        let db = setup_test_db().await;
        let result = Model::create(&db, "Nobody", 4242).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_logger_roles_via_bridge() {
        let db = setup_test_db().await;
        let org = organization::Model::create(&db, "Google").await.unwrap();
        let user = Model::create(&db, "Sundar Pichai", org.id).await.unwrap();
        let owner = logger_role::Model::create(&db, "Owner").await.unwrap();
        logger_role::Model::create(&db, "Developer").await.unwrap();
        logger::Model::create(&db, user.id, owner.id).await.unwrap();

        let roles = user.logger_roles(&db).await.unwrap();
        let names: Vec<&str> = roles.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Owner"]);
    }
}
