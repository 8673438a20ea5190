use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Bridge table: "this user holds this LoggerRole".
///
/// Nothing stops the same pair from being recorded twice; readers that count
/// roles must count distinct role ids.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "loggers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// User ID (foreign key to `users`)
    pub user_id: i64,

    /// LoggerRole ID (foreign key to `logger_roles`)
    pub logger_role_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::logger_role::Entity",
        from = "Column::LoggerRoleId",
        to = "super::logger_role::Column::Id"
    )]
    LoggerRole,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::logger_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LoggerRole.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C>(db: &C, user_id: i64, logger_role_id: i64) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        ActiveModel {
            user_id: Set(user_id),
            logger_role_id: Set(logger_role_id),
            ..Default::default()
        }
        .insert(db)
        .await
    }
}
