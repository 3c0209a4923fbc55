use serde_derive::Serialize;

/// Java fields inherited from the generated base entity.
pub const BASE_ENTITY: [&str; 5] = [
    "createDept",
    "createBy",
    "createTime",
    "updateBy",
    "updateTime",
];

/// UI control a column is rendered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HtmlType {
    Input,
    Textarea,
    Select,
    Radio,
    Checkbox,
    Datetime,
    ImageUpload,
    FileUpload,
    Editor,
}

impl HtmlType {
    /// Controls that pick from a dictionary.
    pub fn is_selection(self: &Self) -> bool {
        matches!(self, HtmlType::Select | HtmlType::Radio | HtmlType::Checkbox)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QueryType {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    Like,
    Between,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMeta {
    pub column_name: String, // snake_case
    pub column_comment: String,
    pub column_type: String, // declared db type, e.g. varchar(64)
    pub java_type: String,
    pub java_field: String, // camelCase
    pub is_pk: bool,
    pub is_increment: bool,
    pub is_required: bool,
    pub is_insert: bool,
    pub is_edit: bool,
    pub is_list: bool,
    pub is_query: bool,
    pub query_type: QueryType,
    pub html_type: HtmlType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dict_type: Option<String>,
    pub sort: i32,
}

impl ColumnMeta {
    pub fn is_super_column(self: &Self) -> bool {
        BASE_ENTITY
            .iter()
            .any(|field: &&str| field.eq_ignore_ascii_case(&self.java_field))
    }

    pub fn dict_type(self: &Self) -> Option<&str> {
        self.dict_type
            .as_deref()
            .filter(|dict_type: &&str| !dict_type.is_empty())
    }
}
