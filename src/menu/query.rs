use super::{MenuFilter, MenuRow};
use crate::config::GenConfig;
use crate::error::{Error, Result};
use crate::naming::is_blank;
use sea_query::{Expr, Iden, Order, Query, SelectStatement, SqliteQueryBuilder, Value};
use sqlx::query::QueryAs;
use sqlx::sqlite::SqliteArguments;
use sqlx::{Pool, Sqlite};

#[derive(Iden)]
enum SysMenu {
    Table,
    MenuId,
    ParentId,
    MenuName,
    OrderNum,
    Path,
    Component,
    QueryParam,
    IsFrame,
    IsCache,
    MenuType,
    Visible,
    Status,
    Perms,
    Icon,
    Remark,
}

#[derive(Iden)]
enum SysRoleMenu {
    Table,
    RoleId,
    MenuId,
}

#[derive(Iden)]
enum SysUserRole {
    Table,
    UserId,
    RoleId,
}

type MenuQuery<'q> = QueryAs<'q, Sqlite, MenuRow, SqliteArguments<'q>>;

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value: &&str| !is_blank(value))
}

/// Menu list statement. With `user_id` set, only menus granted to one of the user's roles are kept.
pub fn menu_list_query(filter: &MenuFilter, user_id: Option<i64>) -> SelectStatement {
    let mut query = Query::select();

    query
        .columns([
            SysMenu::MenuId,
            SysMenu::ParentId,
            SysMenu::MenuName,
            SysMenu::OrderNum,
            SysMenu::Path,
            SysMenu::Component,
            SysMenu::QueryParam,
            SysMenu::IsFrame,
            SysMenu::IsCache,
            SysMenu::MenuType,
            SysMenu::Visible,
            SysMenu::Status,
            SysMenu::Perms,
            SysMenu::Icon,
            SysMenu::Remark,
        ])
        .from(SysMenu::Table);

    if let Some(menu_name) = non_blank(&filter.menu_name) {
        let pattern = format!("%{}%", menu_name);
        query.and_where(Expr::col(SysMenu::MenuName).like(pattern.as_str()));
    }
    if let Some(visible) = non_blank(&filter.visible) {
        query.and_where(Expr::col(SysMenu::Visible).eq(visible));
    }
    if let Some(status) = non_blank(&filter.status) {
        query.and_where(Expr::col(SysMenu::Status).eq(status));
    }
    if let Some(menu_type) = non_blank(&filter.menu_type) {
        query.and_where(Expr::col(SysMenu::MenuType).eq(menu_type));
    }
    if let Some(parent_id) = filter.parent_id {
        query.and_where(Expr::col(SysMenu::ParentId).eq(parent_id));
    }

    if let Some(user_id) = user_id {
        let user_roles = Query::select()
            .column(SysUserRole::RoleId)
            .from(SysUserRole::Table)
            .and_where(Expr::col(SysUserRole::UserId).eq(user_id))
            .to_owned();

        let role_menus = Query::select()
            .column(SysRoleMenu::MenuId)
            .from(SysRoleMenu::Table)
            .and_where(Expr::col(SysRoleMenu::RoleId).in_subquery(user_roles))
            .to_owned();

        query.and_where(Expr::tbl(SysMenu::Table, SysMenu::MenuId).in_subquery(role_menus));
    }

    query
        .order_by(SysMenu::ParentId, Order::Asc)
        .order_by(SysMenu::OrderNum, Order::Asc)
        .to_owned()
}

fn bind_value(query: MenuQuery<'_>, value: Value) -> Result<MenuQuery<'_>> {
    match value {
        Value::String(Some(text)) => Ok(query.bind(*text)),
        Value::BigInt(Some(number)) => Ok(query.bind(number)),
        Value::Int(Some(number)) => Ok(query.bind(number)),
        Value::Bool(Some(flag)) => Ok(query.bind(flag)),
        other => Err(Error::UnsupportedValue(format!("{:?}", other))),
    }
}

/// Menus visible to `user_id`: every matching menu for the super admin, otherwise those
/// reachable through the user's roles. Ordered by parent id, then order number.
pub async fn select_menu_list(
    connection: &Pool<Sqlite>,
    filter: &MenuFilter,
    user_id: i64,
    config: &GenConfig,
) -> Result<Vec<MenuRow>> {
    let restriction = if config.is_super_admin(user_id) {
        None
    } else {
        Some(user_id)
    };

    let (sql, values) = menu_list_query(filter, restriction).build(SqliteQueryBuilder);

    tracing::debug!(%sql, user_id, "selecting menu list");

    let mut query: MenuQuery<'_> = sqlx::query_as(&sql);
    for value in values.0 {
        query = bind_value(query, value)?;
    }

    Ok(query.fetch_all(connection).await?)
}
