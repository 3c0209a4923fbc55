use super::column_meta::ColumnMeta;
use serde_derive::Serialize;

pub const TPL_CRUD: &str = "crud";
pub const TPL_TREE: &str = "tree";

/// Generation mode of a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateCategory {
    /// Flat list view.
    Crud,
    /// Hierarchical view.
    Tree,
    Other,
}

impl TemplateCategory {
    /// Accepts both the named (`crud`, `tree`) and numbered (`01`, `02`) codes.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            TPL_CRUD | "01" => TemplateCategory::Crud,
            TPL_TREE | "02" => TemplateCategory::Tree,
            _ => TemplateCategory::Other,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableMeta {
    pub table_name: String, // snake_case
    pub table_comment: String,
    pub class_name: String, // CamelCase
    pub package_name: String,
    pub module_name: String,
    pub business_name: String,
    pub function_name: String,
    pub function_author: String,
    pub tpl_category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_parent_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_menu_id: Option<String>,
    pub columns: Vec<ColumnMeta>,
}

impl TableMeta {
    pub fn category(self: &Self) -> TemplateCategory {
        TemplateCategory::parse(&self.tpl_category)
    }

    pub fn pk_column(self: &Self) -> Option<&ColumnMeta> {
        self.columns.iter().find(|column: &&ColumnMeta| column.is_pk)
    }

    /// Java package path: `org.dromara.system` -> `org/dromara/system`.
    pub fn package_dir(self: &Self) -> String {
        self.package_name.replace('.', "/")
    }
}
