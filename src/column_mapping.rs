use crate::types::{ColumnMeta, HtmlType, QueryType};
use heck::ToLowerCamelCase;

pub const COLUMNTYPE_STR: [&str; 5] = ["char", "varchar", "nvarchar", "varchar2", "string"];
pub const COLUMNTYPE_TEXT: [&str; 4] = ["tinytext", "text", "mediumtext", "longtext"];
pub const COLUMNTYPE_TIME: [&str; 4] = ["datetime", "time", "date", "timestamp"];
pub const COLUMNTYPE_NUMBER: [&str; 13] = [
    "tinyint",
    "smallint",
    "mediumint",
    "int",
    "number",
    "integer",
    "bit",
    "bigint",
    "tinyinteger",
    "smallinteger",
    "biginteger",
    "boolean",
    "serial",
];
pub const COLUMNTYPE_DECIMAL: [&str; 6] =
    ["float", "double", "decimal", "numeric", "real", "money"];

pub const COLUMNNAME_NOT_EDIT: [&str; 4] = ["id", "create_by", "create_time", "del_flag"];
pub const COLUMNNAME_NOT_LIST: [&str; 6] = [
    "id",
    "create_by",
    "create_time",
    "del_flag",
    "update_by",
    "update_time",
];
pub const COLUMNNAME_NOT_QUERY: [&str; 7] = [
    "id",
    "create_by",
    "create_time",
    "del_flag",
    "update_by",
    "update_time",
    "remark",
];

pub const STRING_TEXTAREA_LENGTH: u32 = 500;

/// A column as read from the database, before generator defaults are applied.
#[derive(Clone, Debug, Default)]
pub struct RawColumn {
    pub name: String,
    pub db_type: String, // e.g. varchar(64)
    pub comment: String,
    pub is_pk: bool,
    pub not_null: bool,
    pub is_increment: bool,
}

/// Base type name without length or precision: `VARCHAR(64)` -> `varchar`.
pub fn db_type(column_type: &str) -> String {
    column_type
        .split('(')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

/// Declared length, `0` when the type has none: `decimal(10,2)` -> `10`.
pub fn column_length(column_type: &str) -> u32 {
    column_type
        .split_once('(')
        .and_then(|(_, rest): (&str, &str)| rest.split(|c: char| c == ',' || c == ')').next())
        .and_then(|length: &str| length.trim().parse().ok())
        .unwrap_or(0)
}

pub fn java_type(column_type: &str) -> &'static str {
    let data_type = db_type(column_type);

    if COLUMNTYPE_TIME.contains(&data_type.as_str()) {
        "Date"
    } else if COLUMNTYPE_DECIMAL.contains(&data_type.as_str()) {
        "BigDecimal"
    } else if COLUMNTYPE_NUMBER.contains(&data_type.as_str()) {
        "Long"
    } else {
        "String"
    }
}

fn html_type(column: &RawColumn) -> HtmlType {
    let data_type = db_type(&column.db_type);
    let name = column.name.to_lowercase();

    if name.ends_with("status") {
        HtmlType::Radio
    } else if name.ends_with("type") || name.ends_with("sex") {
        HtmlType::Select
    } else if name.ends_with("image") {
        HtmlType::ImageUpload
    } else if name.ends_with("file") {
        HtmlType::FileUpload
    } else if name.ends_with("content") {
        HtmlType::Editor
    } else if COLUMNTYPE_TEXT.contains(&data_type.as_str()) {
        HtmlType::Textarea
    } else if COLUMNTYPE_STR.contains(&data_type.as_str())
        && column_length(&column.db_type) >= STRING_TEXTAREA_LENGTH
    {
        HtmlType::Textarea
    } else if COLUMNTYPE_TIME.contains(&data_type.as_str()) {
        HtmlType::Datetime
    } else {
        HtmlType::Input
    }
}

/// Applies the generator defaults to a freshly imported column.
pub fn column_mapping(column: &RawColumn, sort: i32) -> ColumnMeta {
    let name = column.name.as_str();
    let not_pk = !column.is_pk;

    let query_type = if name.to_lowercase().ends_with("name") {
        QueryType::Like
    } else {
        QueryType::Eq
    };

    ColumnMeta {
        column_name: name.to_string(),
        column_comment: column.comment.clone(),
        column_type: column.db_type.clone(),
        java_type: java_type(&column.db_type).to_string(),
        java_field: name.to_lower_camel_case(),
        is_pk: column.is_pk,
        is_increment: column.is_increment,
        is_required: column.not_null && not_pk,
        is_insert: not_pk,
        is_edit: not_pk && !COLUMNNAME_NOT_EDIT.contains(&name),
        is_list: not_pk && !COLUMNNAME_NOT_LIST.contains(&name),
        is_query: not_pk && !COLUMNNAME_NOT_QUERY.contains(&name),
        query_type,
        html_type: html_type(column),
        dict_type: None,
        sort,
    }
}
