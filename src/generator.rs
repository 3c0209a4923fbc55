use crate::config::GenConfig;
use crate::context::{prepare_context, TemplateContext};
use crate::error::Result;
use crate::template_planner::{plan, PlannedFile};
use crate::types::TableMeta;
use std::{fs, path::Path, path::PathBuf};

/// Template engine seam: turns a template id and its context into file content.
pub trait TemplateRenderer {
    fn render(&self, template: &str, context: &TemplateContext) -> Result<String>;
}

/// Renders every planned template of `table` and writes it below `dir`.
///
/// Templates without a destination are skipped. Returns the written paths in plan order.
pub fn generate_code<R: TemplateRenderer>(
    dir: &Path,
    table: &TableMeta,
    config: &GenConfig,
    renderer: &R,
) -> Result<Vec<PathBuf>> {
    let context = prepare_context(table, config)?;
    let mut written = Vec::new();

    for PlannedFile { template, path } in plan(table, config.dialect) {
        if path.is_empty() {
            continue;
        }

        let content = renderer.render(&template, &context)?;
        let file_path = dir.join(&path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, content.as_bytes())?;

        tracing::info!(template = %template, path = %file_path.display(), "generated file");

        written.push(file_path);
    }

    Ok(written)
}
