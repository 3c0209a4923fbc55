use crate::config::DbDialect;
use crate::types::{TableMeta, TemplateCategory};
use serde_derive::Serialize;

pub const PROJECT_PATH: &str = "main/java";
pub const MYBATIS_PATH: &str = "main/resources/mapper";
pub const VUE_PATH: &str = "vue";

const BACKEND_TEMPLATES: [&str; 8] = [
    "vm/java/domain.java.vm",
    "vm/java/vo.java.vm",
    "vm/java/bo.java.vm",
    "vm/java/mapper.java.vm",
    "vm/java/service.java.vm",
    "vm/java/serviceImpl.java.vm",
    "vm/java/controller.java.vm",
    "vm/xml/mapper.xml.vm",
];

const FRONTEND_TEMPLATES: [&str; 6] = [
    "vm/ts/api.ts.vm",
    "vm/ts/types.ts.vm",
    "vm/soybean/typings/soy.api.d.ts.vm",
    "vm/soybean/api/soy.api.ts.vm",
    "vm/soybean/modules/soy.search.vue.vm",
    "vm/soybean/modules/soy.operate-drawer.vue.vm",
];

const CRUD_TEMPLATES: [&str; 2] = ["vm/vue/index.vue.vm", "vm/soybean/soy.index.vue.vm"];

const TREE_TEMPLATES: [&str; 1] = ["vm/vue/index-tree.vue.vm"];

/// A template together with the file it renders to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    pub template: String,
    pub path: String,
}

pub fn sql_template(dialect: DbDialect) -> &'static str {
    match dialect {
        DbDialect::Oracle => "vm/sql/oracle/sql.vm",
        DbDialect::Postgres => "vm/sql/postgres/sql.vm",
        DbDialect::Sqlserver => "vm/sql/sqlserver/sql.vm",
        DbDialect::Mysql => "vm/sql/sql.vm",
    }
}

pub fn template_list(category: TemplateCategory, dialect: DbDialect) -> Vec<&'static str> {
    let mut templates: Vec<&'static str> = BACKEND_TEMPLATES.to_vec();

    templates.push(sql_template(dialect));
    templates.extend(FRONTEND_TEMPLATES);

    match category {
        TemplateCategory::Crud => templates.extend(CRUD_TEMPLATES),
        TemplateCategory::Tree => templates.extend(TREE_TEMPLATES),
        TemplateCategory::Other => {}
    }

    templates
}

/// Destination of `template` for `table`, relative to the output directory.
///
/// Rules are checked in order by substring and the first match wins, so the
/// `soy.*` rules sit ahead of the plain `api.ts`/`index.vue` ones they contain.
/// Unknown templates resolve to an empty path.
pub fn file_name(template: &str, table: &TableMeta) -> String {
    let java_path = format!("{}/{}", PROJECT_PATH, table.package_dir());
    let mybatis_path = format!("{}/{}", MYBATIS_PATH, table.module_name);
    let class_name = &table.class_name;
    let module_name = &table.module_name;
    let business_name = &table.business_name;

    let rules: [(&str, String); 18] = [
        ("domain.java.vm", format!("{}/domain/{}.java", java_path, class_name)),
        ("vo.java.vm", format!("{}/domain/vo/{}Vo.java", java_path, class_name)),
        ("bo.java.vm", format!("{}/domain/bo/{}Bo.java", java_path, class_name)),
        (
            "soy.index.vue.vm",
            format!("soybean/views/{}/{}/index.vue", module_name, business_name),
        ),
        (
            "soy.search.vue.vm",
            format!(
                "soybean/views/{}/{}/modules/{}-search.vue",
                module_name, business_name, business_name
            ),
        ),
        (
            "soy.operate-drawer.vue.vm",
            format!(
                "soybean/views/{}/{}/modules/{}-operate-drawer.vue",
                module_name, business_name, business_name
            ),
        ),
        ("soy.api.d.ts.vm", format!("soybean/typings/api/{}.d.ts", module_name)),
        ("soy.api.ts.vm", format!("soybean/api/{}/{}.ts", module_name, business_name)),
        ("mapper.java.vm", format!("{}/mapper/{}Mapper.java", java_path, class_name)),
        ("service.java.vm", format!("{}/service/I{}Service.java", java_path, class_name)),
        (
            "serviceImpl.java.vm",
            format!("{}/service/impl/{}ServiceImpl.java", java_path, class_name),
        ),
        (
            "controller.java.vm",
            format!("{}/controller/{}Controller.java", java_path, class_name),
        ),
        ("mapper.xml.vm", format!("{}/{}Mapper.xml", mybatis_path, class_name)),
        ("sql.vm", format!("{}Menu.sql", business_name)),
        ("api.ts.vm", format!("{}/api/{}/{}/index.ts", VUE_PATH, module_name, business_name)),
        ("types.ts.vm", format!("{}/api/{}/{}/types.ts", VUE_PATH, module_name, business_name)),
        ("index.vue.vm", format!("{}/views/{}/{}/index.vue", VUE_PATH, module_name, business_name)),
        (
            "index-tree.vue.vm",
            format!("{}/views/{}/{}/index.vue", VUE_PATH, module_name, business_name),
        ),
    ];

    rules
        .into_iter()
        .find(|(pattern, _)| template.contains(*pattern))
        .map(|(_, path)| path)
        .unwrap_or_default()
}

pub fn plan(table: &TableMeta, dialect: DbDialect) -> Vec<PlannedFile> {
    template_list(table.category(), dialect)
        .into_iter()
        .map(|template: &str| {
            let path = file_name(template, table);

            if path.is_empty() {
                tracing::warn!(template, "no destination for template");
            }

            PlannedFile {
                template: template.to_string(),
                path,
            }
        })
        .collect()
}
