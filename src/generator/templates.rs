use askama::Template;
use std::fs;
use std::path::Path;

use super::model::{ColumnDef, FieldKind, FormField, ViewModel};
use crate::schema::ContentTypeSchema;

/// Template data for the generated list page (`<Name>Page.tsx`)
#[derive(Template)]
#[template(path = "page.tsx.txt", escape = "none")]
pub struct PageTemplateData {
    /// Collection display name, the identifier stem
    pub name: String,
    /// Plural resource name for API paths
    pub plural_name: String,
    /// Display columns in attribute order
    pub columns: Vec<ColumnDef>,
    /// TypeScript interface entries, `createdAt` last
    pub field_kinds: Vec<FieldKind>,
    /// Whether a populate directive is emitted at all
    pub has_populate: bool,
    /// Eager-load keys as a JSON array literal
    pub populate_json: String,
}

/// Template data for the generated create/edit modal (`AE<Name>.tsx`)
#[derive(Template)]
#[template(path = "modal.tsx.txt", escape = "none")]
pub struct ModalTemplateData {
    /// Collection display name, the identifier stem
    pub name: String,
    /// Plural resource name for API paths
    pub plural_name: String,
    /// Form controls in attribute order
    pub fields: Vec<FormField>,
    /// Submission payload object literal (`{ title: values.title, ... }`)
    pub values_object: String,
    /// Form seed object literal (`{ title: item?.title, ... }`)
    pub initial_values_object: String,
}

/// Build the submission payload object literal for the modal form
pub fn values_object(fields: &[FormField]) -> String {
    if fields.is_empty() {
        return "{}".to_string();
    }
    let parts: Vec<String> = fields
        .iter()
        .map(|f| format!("{0}: values.{0}", f.name))
        .collect();
    format!("{{ {} }}", parts.join(", "))
}

/// Build the initial-values object literal seeding the form when editing
pub fn initial_values_object(fields: &[FormField]) -> String {
    if fields.is_empty() {
        return "{}".to_string();
    }
    let parts: Vec<String> = fields
        .iter()
        .map(|f| format!("{0}: item?.{0}", f.name))
        .collect();
    format!("{{ {} }}", parts.join(", "))
}

/// Write the list page file (`<Name>Page.tsx`)
///
/// Skips an already existing file unless `force` is set.
///
/// # Errors
///
/// Returns an error if template rendering or file writing fails.
pub fn write_page(
    dir: &Path,
    schema: &ContentTypeSchema,
    model: &ViewModel,
    force: bool,
) -> anyhow::Result<()> {
    let path = dir.join(format!("{}Page.tsx", schema.display_name));
    if path.exists() && !force {
        println!("⚠️  Skipping existing page file: {path:?}");
        return Ok(());
    }
    let rendered = PageTemplateData {
        name: schema.display_name.clone(),
        plural_name: schema.plural_name.clone(),
        columns: model.columns.clone(),
        field_kinds: model.field_kinds.clone(),
        has_populate: !model.populate.is_empty(),
        populate_json: serde_json::to_string(&model.populate)?,
    }
    .render()?;
    fs::write(&path, rendered)?;
    println!("✅ Generated page: {path:?}");
    Ok(())
}

/// Write the create/edit modal file (`AE<Name>.tsx`)
///
/// Skips an already existing file unless `force` is set.
///
/// # Errors
///
/// Returns an error if template rendering or file writing fails.
pub fn write_modal(
    dir: &Path,
    schema: &ContentTypeSchema,
    model: &ViewModel,
    force: bool,
) -> anyhow::Result<()> {
    let path = dir.join(format!("AE{}.tsx", schema.display_name));
    if path.exists() && !force {
        println!("⚠️  Skipping existing modal file: {path:?}");
        return Ok(());
    }
    let rendered = ModalTemplateData {
        name: schema.display_name.clone(),
        plural_name: schema.plural_name.clone(),
        fields: model.form_fields.clone(),
        values_object: values_object(&model.form_fields),
        initial_values_object: initial_values_object(&model.form_fields),
    }
    .render()?;
    fs::write(&path, rendered)?;
    println!("✅ Generated modal: {path:?}");
    Ok(())
}
