use crate::column_mapping::{column_mapping, RawColumn};
use crate::config::GenConfig;
use crate::error::{Error, Result};
use crate::naming::after_last;
use crate::types::table_meta::TPL_CRUD;
use crate::types::{ColumnMeta, TableMeta};
use heck::ToUpperCamelCase;
use sqlx::{FromRow, Pool, Sqlite};

const TABLE_NAME_SQL: &str =
    "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ? COLLATE NOCASE";

const TABLE_INFO_SQL: &str = r#"SELECT name, type AS declared_type, "notnull" AS not_null, pk
    FROM pragma_table_info(?)
    ORDER BY cid"#;

/// One row of `pragma_table_info`, `declared_type` exactly as written in the DDL.
#[derive(Debug, FromRow)]
struct TableInfoRow {
    name: String,
    declared_type: String,
    not_null: i64,
    pk: i64, // 1-based position in the primary key, 0 otherwise
}

/// Reads the columns of `table_name` and builds generation metadata for it.
pub async fn get_table_meta(
    connection: Pool<Sqlite>,
    table_name: &str,
    config: &GenConfig,
) -> Result<TableMeta> {
    let (name,): (String,) = sqlx::query_as(TABLE_NAME_SQL)
        .bind(table_name)
        .fetch_optional(&connection)
        .await?
        .ok_or_else(|| Error::TableNotFound(table_name.to_string()))?;

    let rows: Vec<TableInfoRow> = sqlx::query_as(TABLE_INFO_SQL)
        .bind(name.as_str())
        .fetch_all(&connection)
        .await?;

    let pk_count = rows.iter().filter(|row: &&TableInfoRow| row.pk > 0).count();

    let columns: Vec<ColumnMeta> = rows
        .iter()
        .enumerate()
        .map(|(index, row): (usize, &TableInfoRow)| {
            column_mapping(&raw_column(row, pk_count), index as i32 + 1)
        })
        .collect();

    tracing::debug!(table = %name, columns = columns.len(), "imported table");

    Ok(init_table(&name, "", columns, config))
}

fn raw_column(row: &TableInfoRow, pk_count: usize) -> RawColumn {
    let is_pk = row.pk > 0;

    RawColumn {
        name: row.name.clone(),
        db_type: row.declared_type.clone(),
        comment: String::new(),
        is_pk,
        not_null: row.not_null != 0,
        // A lone `INTEGER` primary key aliases the rowid and is assigned by SQLite.
        is_increment: is_pk && pk_count == 1 && row.declared_type.eq_ignore_ascii_case("integer"),
    }
}

/// Generator defaults for a table: class, module and business names from config and table name.
pub fn init_table(
    table_name: &str,
    table_comment: &str,
    columns: Vec<ColumnMeta>,
    config: &GenConfig,
) -> TableMeta {
    let function_name = table_comment.replace('表', "");
    let function_name = if function_name.trim().is_empty() {
        table_name.to_string()
    } else {
        function_name
    };

    TableMeta {
        table_name: table_name.to_string(),
        table_comment: table_comment.to_string(),
        class_name: class_name(table_name, config),
        package_name: config.package_name.clone(),
        module_name: after_last(&config.package_name, '.').to_string(),
        business_name: after_last(table_name, '_').to_string(),
        function_name,
        function_author: config.author.clone(),
        tpl_category: TPL_CRUD.to_string(),
        tree_code: None,
        tree_parent_code: None,
        tree_name: None,
        parent_menu_id: None,
        columns,
    }
}

/// `sys_user` -> `SysUser`, or `User` when `sys_` is a removed prefix.
pub fn class_name(table_name: &str, config: &GenConfig) -> String {
    let mut name = table_name;

    if config.auto_remove_pre {
        if let Some(prefix) = config
            .table_prefixes()
            .into_iter()
            .find(|prefix: &&str| table_name.starts_with(prefix))
        {
            name = &table_name[prefix.len()..];
        }
    }

    name.to_upper_camel_case()
}
