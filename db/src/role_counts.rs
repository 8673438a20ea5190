//! Per-organization LoggerRole counts.
//!
//! The query walks outward from `organizations` with left joins
//! (organizations → users → loggers → logger_roles), so organizations without
//! users, and users without role assignments, still produce a row with a
//! count of zero. Roles are counted by distinct id, so two users holding the
//! same role contribute once.

use crate::models::{logger, logger_role, organization, user};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ConnectionTrait, DbErr, EntityTrait, FromQueryResult, JoinType, QueryOrder, QuerySelect,
    RelationTrait,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct OrganizationRoleCount {
    pub name: String,
    pub role_count: i64,
}

/// Counts distinct LoggerRoles per organization, in organization insertion order.
pub async fn organization_role_counts<C>(db: &C) -> Result<Vec<OrganizationRoleCount>, DbErr>
where
    C: ConnectionTrait,
{
    organization::Entity::find()
        .select_only()
        .column(organization::Column::Name)
        .column_as(
            Expr::expr(Func::count_distinct(Expr::col((
                logger_role::Entity,
                logger_role::Column::Id,
            )))),
            "role_count",
        )
        .join(JoinType::LeftJoin, organization::Relation::Users.def())
        .join(JoinType::LeftJoin, user::Relation::Loggers.def())
        .join(JoinType::LeftJoin, logger::Relation::LoggerRole.def())
        .group_by(organization::Column::Id)
        .order_by_asc(organization::Column::Id)
        .into_model::<OrganizationRoleCount>()
        .all(db)
        .await
}

/// Renders rows as `[("Apple", 3), ("Google", 2)]`.
pub fn format_pairs(rows: &[OrganizationRoleCount]) -> String {
    let pairs: Vec<(&str, i64)> = rows
        .iter()
        .map(|row| (row.name.as_str(), row.role_count))
        .collect();
    format!("{:?}", pairs)
}
