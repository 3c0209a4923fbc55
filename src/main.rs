use crud_codegen::{
    config::GenConfig,
    database_schema::get_table_meta,
    error::{Error, Result},
    menu::{build_menu_tree, select_menu_list, MenuFilter, MenuNode},
    template_planner::plan,
    toml_generator::write_plan,
};
use serde_derive::Serialize;
use sqlx::SqlitePool;
use std::{env, path::Path, process};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "crud-codegen plan <database-url> <table> [config.toml|-] [out-dir]\n       \
                     crud-codegen menus <database-url> <user-id> [config.toml|-] [menu-name]";

#[derive(Serialize)]
struct MenuTree {
    menus: Vec<MenuNode>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let arguments: Vec<String> = env::args().collect();

    if let Err(err) = run(&arguments).await {
        tracing::error!(%err, "crud-codegen failed");
        eprintln!("{}", USAGE);
        process::exit(1);
    }
}

async fn run(arguments: &[String]) -> Result<()> {
    let command = arguments.get(1).map(String::as_str);
    let database_url = arguments
        .get(2)
        .ok_or_else(|| Error::Usage("missing database url".into()))?;
    let config = load_config(arguments.get(4))?;

    match command {
        Some("plan") => {
            let table_name = arguments
                .get(3)
                .ok_or_else(|| Error::Usage("missing table name".into()))?;
            let default_path: String = "generated".into();
            let path: &String = arguments.get(5).unwrap_or(&default_path);

            let connection = SqlitePool::connect(database_url).await?;
            let table = get_table_meta(connection, table_name, &config).await?;

            for file in plan(&table, config.dialect) {
                println!("{} -> {}", file.template, file.path);
            }

            write_plan(Path::new(path), &table, &config)?;
        }
        Some("menus") => {
            let user_id: i64 = arguments
                .get(3)
                .and_then(|user_id: &String| user_id.parse().ok())
                .ok_or_else(|| Error::Usage("user id must be a number".into()))?;
            let filter = MenuFilter {
                menu_name: arguments.get(5).cloned(),
                ..MenuFilter::default()
            };

            let connection = SqlitePool::connect(database_url).await?;
            let menus = select_menu_list(&connection, &filter, user_id, &config).await?;

            let tree = MenuTree {
                menus: build_menu_tree(menus),
            };
            println!("{}", toml::to_string_pretty(&toml::Value::try_from(&tree)?)?);
        }
        _ => return Err(Error::Usage("unknown command".into())),
    }

    Ok(())
}

fn load_config(path: Option<&String>) -> Result<GenConfig> {
    match path.map(String::as_str) {
        None | Some("-") => Ok(GenConfig::default()),
        Some(path) => GenConfig::load(Path::new(path)),
    }
}
