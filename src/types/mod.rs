pub mod column_meta;
pub mod dict_binding;
pub mod table_meta;

pub use column_meta::{ColumnMeta, HtmlType, QueryType};
pub use dict_binding::DictBinding;
pub use table_meta::{TableMeta, TemplateCategory};
