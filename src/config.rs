use crate::error::Result;
use serde_derive::Deserialize;
use std::{fs, path::Path};

/// Database flavour the generated menu SQL targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbDialect {
    #[default]
    Mysql,
    Oracle,
    Postgres,
    Sqlserver,
}

/// Generator settings, read from a `gen.toml` file.
///
/// Every field has a default so an empty file (or no file) is valid.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    pub author: String,
    pub package_name: String,
    pub auto_remove_pre: bool,
    /// Comma separated list of prefixes stripped from table names.
    pub table_prefix: String,
    pub dialect: DbDialect,
    pub super_admin_id: i64,
    pub parent_menu_id: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            author: "admin".into(),
            package_name: "org.dromara.system".into(),
            auto_remove_pre: false,
            table_prefix: "sys_".into(),
            dialect: DbDialect::default(),
            super_admin_id: 1,
            parent_menu_id: "3".into(),
        }
    }
}

impl GenConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        Self::from_toml(&content)
    }

    pub fn is_super_admin(self: &Self, user_id: i64) -> bool {
        user_id == self.super_admin_id
    }

    pub fn table_prefixes(self: &Self) -> Vec<&str> {
        self.table_prefix
            .split(',')
            .map(|prefix: &str| prefix.trim())
            .filter(|prefix: &&str| !prefix.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = GenConfig::from_toml("").unwrap();

        assert_eq!(config.package_name, "org.dromara.system");
        assert_eq!(config.dialect, DbDialect::Mysql);
        assert_eq!(config.super_admin_id, 1);
        assert_eq!(config.parent_menu_id, "3");
    }

    #[test]
    fn reads_dialect_and_prefixes() {
        let config = GenConfig::from_toml(
            r#"
            author = "lion"
            dialect = "postgres"
            auto_remove_pre = true
            table_prefix = "sys_, test_,"
            "#,
        )
        .unwrap();

        assert_eq!(config.author, "lion");
        assert_eq!(config.dialect, DbDialect::Postgres);
        assert!(config.auto_remove_pre);
        assert_eq!(config.table_prefixes(), vec!["sys_", "test_"]);
    }

    #[test]
    fn rejects_unknown_dialect() {
        assert!(GenConfig::from_toml("dialect = \"db2\"").is_err());
    }

    #[test]
    fn super_admin_is_configured_id() {
        let config = GenConfig::default();

        assert!(config.is_super_admin(1));
        assert!(!config.is_super_admin(2));
    }
}
