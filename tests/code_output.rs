use crud_codegen::config::{DbDialect, GenConfig};
use crud_codegen::context::TemplateContext;
use crud_codegen::error::{Error, Result};
use crud_codegen::generator::{generate_code, TemplateRenderer};
use crud_codegen::toml_generator::{write_plan, PLAN_FILE};
use crud_codegen::types::{ColumnMeta, HtmlType, QueryType, TableMeta};
use std::fs;

struct EchoRenderer;

impl TemplateRenderer for EchoRenderer {
    fn render(&self, template: &str, context: &TemplateContext) -> Result<String> {
        let class_name = context
            .get("ClassName")
            .and_then(toml::Value::as_str)
            .unwrap_or_default();

        Ok(format!("{} for {}", template, class_name))
    }
}

struct FailingRenderer;

impl TemplateRenderer for FailingRenderer {
    fn render(&self, template: &str, _context: &TemplateContext) -> Result<String> {
        Err(Error::Render {
            template: template.to_string(),
            message: "no engine".into(),
        })
    }
}

fn column(column_name: &str, java_field: &str, is_pk: bool) -> ColumnMeta {
    ColumnMeta {
        column_name: column_name.into(),
        column_comment: String::new(),
        column_type: "bigint(20)".into(),
        java_type: "Long".into(),
        java_field: java_field.into(),
        is_pk,
        is_increment: false,
        is_required: !is_pk,
        is_insert: !is_pk,
        is_edit: !is_pk,
        is_list: !is_pk,
        is_query: !is_pk,
        query_type: QueryType::Eq,
        html_type: HtmlType::Input,
        dict_type: None,
        sort: 0,
    }
}

fn sys_dept(tpl_category: &str) -> TableMeta {
    let mut dept_name = column("dept_name", "deptName", false);
    dept_name.java_type = "String".into();
    dept_name.query_type = QueryType::Like;

    let mut status = column("status", "status", false);
    status.java_type = "String".into();
    status.html_type = HtmlType::Radio;
    status.dict_type = Some("sys_normal_disable".into());

    TableMeta {
        table_name: "sys_dept".into(),
        table_comment: "部门表".into(),
        class_name: "SysDept".into(),
        package_name: "org.dromara.system".into(),
        module_name: "system".into(),
        business_name: "dept".into(),
        function_name: "部门".into(),
        function_author: "admin".into(),
        tpl_category: tpl_category.into(),
        tree_code: Some("dept_id".into()),
        tree_parent_code: Some("parent_id".into()),
        tree_name: Some("dept_name".into()),
        parent_menu_id: None,
        columns: vec![
            column("dept_id", "deptId", true),
            column("parent_id", "parentId", false),
            dept_name,
            status,
        ],
    }
}

#[test]
fn writes_every_planned_file() {
    let dir = tempfile::tempdir().unwrap();

    let config = GenConfig::default();

    let written = generate_code(dir.path(), &sys_dept("crud"), &config, &EchoRenderer).unwrap();

    assert_eq!(written.len(), 17);

    let mapper = dir.path().join("main/resources/mapper/system/SysDeptMapper.xml");
    assert!(written.contains(&mapper));
    assert_eq!(fs::read_to_string(&mapper).unwrap(), "vm/xml/mapper.xml.vm for SysDept");

    let sql = fs::read_to_string(dir.path().join("deptMenu.sql")).unwrap();
    assert_eq!(sql, "vm/sql/sql.vm for SysDept");
}

#[test]
fn tree_tables_write_one_view() {
    let dir = tempfile::tempdir().unwrap();
    let config = GenConfig {
        dialect: DbDialect::Oracle,
        ..GenConfig::default()
    };

    let written = generate_code(dir.path(), &sys_dept("tree"), &config, &EchoRenderer).unwrap();

    assert_eq!(written.len(), 16);
    let sql = fs::read_to_string(dir.path().join("deptMenu.sql")).unwrap();
    assert_eq!(sql, "vm/sql/oracle/sql.vm for SysDept");
    assert!(dir.path().join("vue/views/system/dept/index.vue").exists());
    assert!(!dir.path().join("soybean/views/system/dept/index.vue").exists());
}

#[test]
fn renderer_errors_stop_generation() {
    let dir = tempfile::tempdir().unwrap();

    let config = GenConfig::default();

    let result = generate_code(dir.path(), &sys_dept("crud"), &config, &FailingRenderer);

    assert!(matches!(
        result,
        Err(Error::Render { template, .. }) if template == "vm/java/domain.java.vm"
    ));
}

#[test]
fn plan_manifest_round_trips_through_toml() {
    let dir = tempfile::tempdir().unwrap();

    let path = write_plan(dir.path(), &sys_dept("tree"), &GenConfig::default()).unwrap();
    assert_eq!(path, dir.path().join(PLAN_FILE));

    let manifest: toml::Value = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    let files = manifest.get("files").and_then(toml::Value::as_array).unwrap();
    assert_eq!(files.len(), 16);
    assert_eq!(
        files[0].get("path").and_then(toml::Value::as_str),
        Some("main/java/org/dromara/system/domain/SysDept.java")
    );

    let context = manifest.get("context").unwrap();
    assert_eq!(context.get("treeName").and_then(toml::Value::as_str), Some("deptName"));
    assert_eq!(context.get("expandColumn").and_then(toml::Value::as_integer), Some(2));

    let dicts = context.get("dicts").and_then(toml::Value::as_array).unwrap();
    assert_eq!(dicts.len(), 1);
    assert_eq!(dicts[0].get("name").and_then(toml::Value::as_str), Some("sysNormalDisable"));
}
