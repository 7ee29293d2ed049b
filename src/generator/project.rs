use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use super::model::build_view_model;
use super::templates::{write_modal, write_page};
use crate::schema::load_schema;

/// Generator configuration, constructed once at the CLI boundary
///
/// The generator never reads ambient state; everything it needs is carried
/// here and passed by parameter.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Path to the content-type `schema.json`
    pub schema_path: PathBuf,
    /// Output directory for the generated list page
    pub pages_dir: PathBuf,
    /// Output directory for the generated modal
    pub modals_dir: PathBuf,
    /// Overwrite existing artifacts
    pub force: bool,
}

/// Generate the admin list page and create/edit modal for one schema
///
/// The schema is fully read before any template is built; the page is
/// written before the modal and the two writes never interleave. A write
/// failure aborts the invocation without rolling back an already written
/// sibling artifact.
///
/// # Errors
///
/// Returns an error if the schema cannot be read or parsed, an output
/// directory cannot be created, or a file write fails.
pub fn generate_admin(config: &GeneratorConfig) -> anyhow::Result<()> {
    let schema = load_schema(&config.schema_path)?;
    let model = build_view_model(&schema);

    tracing::info!(
        collection = %schema.display_name,
        columns = model.columns.len(),
        populate = model.populate.len(),
        "generating admin artifacts"
    );

    fs::create_dir_all(&config.pages_dir)
        .with_context(|| format!("failed to create pages dir {:?}", config.pages_dir))?;
    fs::create_dir_all(&config.modals_dir)
        .with_context(|| format!("failed to create modals dir {:?}", config.modals_dir))?;

    write_page(&config.pages_dir, &schema, &model, config.force)?;
    write_modal(&config.modals_dir, &schema, &model, config.force)?;

    Ok(())
}
