use crate::config::GenConfig;
use crate::context::{prepare_context, TemplateContext};
use crate::error::Result;
use crate::template_planner::{plan, PlannedFile};
use crate::types::TableMeta;
use serde_derive::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const PLAN_FILE: &str = "gen-plan.toml";

/// Everything an external renderer needs for one table.
#[derive(Serialize)]
pub struct PlanManifest {
    pub files: Vec<PlannedFile>,
    pub context: TemplateContext,
}

impl PlanManifest {
    pub fn new(table: &TableMeta, config: &GenConfig) -> Result<Self> {
        Ok(Self {
            files: plan(table, config.dialect),
            context: prepare_context(table, config)?,
        })
    }

    pub fn to_toml(self: &Self) -> Result<String> {
        // Going through `Value` lets toml order plain values ahead of tables.
        let value = toml::Value::try_from(self)?;

        Ok(toml::to_string_pretty(&value)?)
    }
}

pub fn write_plan(dir: &Path, table: &TableMeta, config: &GenConfig) -> Result<PathBuf> {
    let manifest = PlanManifest::new(table, config)?;

    fs::create_dir_all(dir)?;

    let path = dir.join(PLAN_FILE);
    fs::write(&path, manifest.to_toml()?)?;

    tracing::info!(path = %path.display(), files = manifest.files.len(), "wrote generation plan");

    Ok(path)
}
