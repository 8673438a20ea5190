use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryFilter, QueryOrder};
use serde::Serialize;

/// A named role a user can hold, e.g. Owner, Developer or Reporter.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "logger_roles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::logger::Entity")]
    Loggers,
}

impl Related<super::logger::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Loggers.def()
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
