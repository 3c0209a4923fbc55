pub mod query;
pub mod tree;

use serde_derive::Serialize;

pub use query::{menu_list_query, select_menu_list};
pub use tree::{build_menu_tree, MenuNode};

/// A row of `sys_menu`.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MenuRow {
    pub menu_id: i64,
    pub parent_id: i64,
    pub menu_name: String,
    pub order_num: i64,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_param: Option<String>,
    pub is_frame: i64,
    pub is_cache: i64,
    pub menu_type: String, // M directory, C menu, F button
    pub visible: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perms: Option<String>,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// Partial match filter for the menu list. Blank or absent fields are ignored.
#[derive(Clone, Debug, Default)]
pub struct MenuFilter {
    pub menu_name: Option<String>,
    pub visible: Option<String>,
    pub status: Option<String>,
    pub menu_type: Option<String>,
    pub parent_id: Option<i64>,
}
