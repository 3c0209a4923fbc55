use crate::config::GenConfig;
use crate::dicts::dict_list;
use crate::error::Result;
use crate::naming::{before_last, capitalize, is_blank, uncapitalize};
use crate::types::{ColumnMeta, TableMeta, TemplateCategory};
use heck::ToLowerCamelCase;
use std::collections::BTreeSet;
use toml::Value;

/// Variables handed to the template engine, keyed by the names the templates use.
pub type TemplateContext = toml::value::Table;

pub const DEFAULT_FUNCTION_NAME: &str = "【请填写功能名称】";

pub fn prepare_context(table: &TableMeta, config: &GenConfig) -> Result<TemplateContext> {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    prepare_context_at(table, config, &today)
}

/// Same as [`prepare_context`] with a fixed `datetime` value.
pub fn prepare_context_at(
    table: &TableMeta,
    config: &GenConfig,
    datetime: &str,
) -> Result<TemplateContext> {
    let mut context = TemplateContext::new();

    let function_name = if is_blank(&table.function_name) {
        DEFAULT_FUNCTION_NAME
    } else {
        table.function_name.as_str()
    };

    put(&mut context, "tplCategory", &table.tpl_category);
    put(&mut context, "tableName", &table.table_name);
    put(&mut context, "functionName", function_name);
    put(&mut context, "ClassName", &table.class_name);
    put(&mut context, "className", &uncapitalize(&table.class_name));
    put(&mut context, "moduleName", &table.module_name);
    put(&mut context, "BusinessName", &capitalize(&table.business_name));
    put(&mut context, "businessName", &table.business_name);
    put(&mut context, "basePackage", before_last(&table.package_name, '.'));
    put(&mut context, "packageName", &table.package_name);
    put(&mut context, "author", &table.function_author);
    put(&mut context, "datetime", datetime);
    put(
        &mut context,
        "permissionPrefix",
        &permission_prefix(&table.module_name, &table.business_name),
    );

    if let Some(pk_column) = table.pk_column() {
        context.insert("pkColumn".into(), Value::try_from(pk_column)?);
    }

    let import_list: Vec<Value> = import_list(table).into_iter().map(Value::String).collect();
    context.insert("importList".into(), Value::Array(import_list));
    context.insert("columns".into(), Value::try_from(&table.columns)?);
    context.insert("table".into(), Value::try_from(table)?);

    let dicts: Vec<Value> = dict_list(table)
        .iter()
        .map(Value::try_from)
        .collect::<std::result::Result<_, _>>()?;
    context.insert("dicts".into(), Value::Array(dicts));

    let parent_menu_id = table
        .parent_menu_id
        .as_deref()
        .filter(|id: &&str| !is_blank(id))
        .unwrap_or(config.parent_menu_id.as_str());
    put(&mut context, "parentMenuId", parent_menu_id);

    if table.category() == TemplateCategory::Tree {
        put_tree_context(&mut context, table);
    }

    Ok(context)
}

fn put(context: &mut TemplateContext, key: &str, value: &str) {
    context.insert(key.to_string(), Value::String(value.to_string()));
}

fn put_tree_context(context: &mut TemplateContext, table: &TableMeta) {
    let tree_code = table.tree_code.as_deref().unwrap_or_default();
    let tree_parent_code = table.tree_parent_code.as_deref().unwrap_or_default();
    let tree_name = table.tree_name.as_deref().unwrap_or_default();

    put(context, "treeCode", &tree_code.to_lower_camel_case());
    put(context, "treeParentCode", &tree_parent_code.to_lower_camel_case());
    put(context, "treeName", &tree_name.to_lower_camel_case());
    context.insert("expandColumn".into(), Value::Integer(expand_column(table)));

    if !tree_parent_code.is_empty() {
        put(context, "tree_parent_code", tree_parent_code);
    }
    if !tree_name.is_empty() {
        put(context, "tree_name", tree_name);
    }
}

pub fn permission_prefix(module_name: &str, business_name: &str) -> String {
    format!("{}:{}", module_name, business_name)
}

/// Java imports required by the entity's own (non-inherited) fields.
pub fn import_list(table: &TableMeta) -> BTreeSet<String> {
    let mut imports = BTreeSet::new();

    for column in table.columns.iter().filter(|column: &&ColumnMeta| !column.is_super_column()) {
        match column.java_type.as_str() {
            "Date" => {
                imports.insert("java.util.Date".to_string());
                imports.insert("com.fasterxml.jackson.annotation.JsonFormat".to_string());
            }
            "BigDecimal" => {
                imports.insert("java.math.BigDecimal".to_string());
            }
            _ => {}
        }
    }

    imports
}

/// 1-based position of the tree name column among the list columns.
///
/// Counts every list column when the tree name is not one of them.
pub fn expand_column(table: &TableMeta) -> i64 {
    let tree_name = table.tree_name.as_deref().unwrap_or_default();
    let mut position = 0;

    for column in table.columns.iter().filter(|column: &&ColumnMeta| column.is_list) {
        position += 1;
        if column.column_name == tree_name {
            break;
        }
    }

    position
}
