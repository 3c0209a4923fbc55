use crud_codegen::config::GenConfig;
use crud_codegen::database_schema::get_table_meta;
use crud_codegen::error::Error;
use crud_codegen::types::{HtmlType, QueryType};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

async fn pool_with_tables() -> Pool<Sqlite> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query(
        "CREATE TABLE sys_notice (
            notice_id INTEGER PRIMARY KEY,
            notice_title VARCHAR(50) NOT NULL,
            notice_type CHAR(1) NOT NULL,
            notice_content TEXT,
            status CHAR(1),
            create_by VARCHAR(64),
            remark VARCHAR(255)
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query(
        "CREATE TABLE biz_goods (
            goods_id BIGINT NOT NULL PRIMARY KEY,
            dept_id BIGINT NOT NULL,
            price DECIMAL(10,2),
            publish_time DATETIME,
            summary TEXT,
            description NVARCHAR(500),
            goods_name VARCHAR(100) NOT NULL
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    pool
}

#[tokio::test]
async fn imports_table_with_generator_defaults() {
    let pool = pool_with_tables().await;
    let config = GenConfig {
        author: "lion".into(),
        auto_remove_pre: true,
        ..GenConfig::default()
    };

    let table = get_table_meta(pool, "sys_notice", &config).await.unwrap();

    assert_eq!(table.table_name, "sys_notice");
    assert_eq!(table.class_name, "Notice");
    assert_eq!(table.business_name, "notice");
    assert_eq!(table.module_name, "system");
    assert_eq!(table.function_author, "lion");
    assert_eq!(table.tpl_category, "crud");

    let fields: Vec<&str> = table
        .columns
        .iter()
        .map(|column| column.java_field.as_str())
        .collect();
    assert_eq!(
        fields,
        vec![
            "noticeId",
            "noticeTitle",
            "noticeType",
            "noticeContent",
            "status",
            "createBy",
            "remark"
        ]
    );

    let sorts: Vec<i32> = table.columns.iter().map(|column| column.sort).collect();
    assert_eq!(sorts, vec![1, 2, 3, 4, 5, 6, 7]);

    assert_eq!(table.columns[2].html_type, HtmlType::Select);
    assert_eq!(table.columns[3].html_type, HtmlType::Editor);
    assert_eq!(table.columns[4].html_type, HtmlType::Radio);
    assert!(!table.columns[5].is_list);
    assert!(!table.columns[6].is_query);
}

#[tokio::test]
async fn rowid_primary_key_is_flagged() {
    let pool = pool_with_tables().await;

    let table = get_table_meta(pool, "sys_notice", &GenConfig::default())
        .await
        .unwrap();

    let pk = table.pk_column().unwrap();
    assert_eq!(pk.column_name, "notice_id");
    assert_eq!(pk.java_type, "Long");
    assert!(pk.is_pk);
    assert!(pk.is_increment);
    assert!(!pk.is_insert);
    assert!(!pk.is_list);
    assert!(!pk.is_required);

    assert!(table.columns[1].is_required);
    assert!(!table.columns[1].is_pk);
}

#[tokio::test]
async fn declared_types_drive_java_types_and_controls() {
    let pool = pool_with_tables().await;

    let table = get_table_meta(pool, "BIZ_GOODS", &GenConfig::default())
        .await
        .unwrap();

    assert_eq!(table.table_name, "biz_goods");
    assert_eq!(table.class_name, "BizGoods");

    let pk = table.pk_column().unwrap();
    assert_eq!(pk.column_name, "goods_id");
    assert!(!pk.is_increment);
    assert!(!pk.is_required);
    assert!(!pk.is_edit);

    let types: Vec<(&str, &str)> = table
        .columns
        .iter()
        .map(|column| (column.column_type.as_str(), column.java_type.as_str()))
        .collect();
    assert_eq!(
        types,
        vec![
            ("BIGINT", "Long"),
            ("BIGINT", "Long"),
            ("DECIMAL(10,2)", "BigDecimal"),
            ("DATETIME", "Date"),
            ("TEXT", "String"),
            ("NVARCHAR(500)", "String"),
            ("VARCHAR(100)", "String"),
        ]
    );

    assert!(table.columns[1].is_required);
    assert_eq!(table.columns[3].html_type, HtmlType::Datetime);
    assert_eq!(table.columns[4].html_type, HtmlType::Textarea);
    assert_eq!(table.columns[5].html_type, HtmlType::Textarea);
    assert_eq!(table.columns[6].html_type, HtmlType::Input);
    assert_eq!(table.columns[6].query_type, QueryType::Like);
}

#[tokio::test]
async fn unknown_table_is_reported() {
    let pool = pool_with_tables().await;

    let result = get_table_meta(pool, "sys_missing", &GenConfig::default()).await;

    assert!(matches!(result, Err(Error::TableNotFound(name)) if name == "sys_missing"));
}
