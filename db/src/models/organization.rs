use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryFilter, QueryOrder};
use serde::Serialize;

/// Represents an organization in the `organizations` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "organizations")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name. Unique by convention only.
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Users belonging to this organization.
    #[sea_orm(has_many = "super::user::Entity")]
    Users,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C>(db: &C, name: &str) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Returns the earliest organization with the given name, if any.
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_create_and_find_by_name() {
        let db = setup_test_db().await;

        let apple = Model::create(&db, "Apple").await.expect("Failed to create org");
        Model::create(&db, "Google").await.unwrap();

        let found = Model::find_by_name(&db, "Apple").await.unwrap();
        assert_eq!(found, Some(apple));

        let missing = Model::find_by_name(&db, "Yahoo!").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_find_by_name_returns_first_duplicate() {
        let db = setup_test_db().await;

        let first = Model::create(&db, "Apple").await.unwrap();
        let second = Model::create(&db, "Apple").await.unwrap();
        assert_ne!(first.id, second.id);

        let found = Model::find_by_name(&db, "Apple").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
    }
}
