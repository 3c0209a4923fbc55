use crate::types::{ColumnMeta, DictBinding, TableMeta};
use heck::ToLowerCamelCase;
use std::collections::BTreeSet;

/// Dictionaries referenced by the table's own selection columns, one per distinct binding.
pub fn dict_list(table: &TableMeta) -> BTreeSet<DictBinding> {
    table
        .columns
        .iter()
        .filter(|column: &&ColumnMeta| !column.is_super_column() && column.html_type.is_selection())
        .filter_map(|column: &ColumnMeta| {
            column.dict_type().map(|dict_type: &str| DictBinding {
                dict_type: dict_type.to_string(),
                name: dict_type.to_lower_camel_case(),
                immediate: !column.is_list,
            })
        })
        .collect()
}
