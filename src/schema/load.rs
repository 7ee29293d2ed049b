use std::path::Path;

use anyhow::Context;
use serde_json::Value;

use super::types::{Attribute, AttributeMeta, ContentTypeSchema, SchemaInfo};

/// Load a Strapi content-type schema from disk
///
/// Reads the `schema.json` document, shape-checks it (an `info` block with
/// `pluralName`/`displayName` plus an `attributes` object are mandatory), and
/// returns an immutable [`ContentTypeSchema`] with attributes in source
/// order. serde_json's `preserve_order` feature keeps the attribute map in
/// insertion order, which the generators rely on for column and field order.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or is
/// missing the expected structure. No partial result is produced.
pub fn load_schema(path: &Path) -> anyhow::Result<ContentTypeSchema> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schema file {path:?}"))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("schema file {path:?} is not valid JSON"))?;
    parse_schema(&value).with_context(|| format!("malformed schema in {path:?}"))
}

/// Build a [`ContentTypeSchema`] from an already parsed JSON document
pub fn parse_schema(value: &Value) -> anyhow::Result<ContentTypeSchema> {
    let info: SchemaInfo = value
        .get("info")
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("schema has no `info` section"))
        .and_then(|v| {
            serde_json::from_value(v)
                .context("`info` must carry `pluralName` and `displayName`")
        })?;

    let attrs = value
        .get("attributes")
        .and_then(|v| v.as_object())
        .ok_or_else(|| anyhow::anyhow!("schema has no `attributes` object"))?;

    let mut attributes = Vec::with_capacity(attrs.len());
    for (name, meta) in attrs {
        let meta: AttributeMeta = serde_json::from_value(meta.clone())
            .with_context(|| format!("attribute `{name}` is missing a `type`"))?;
        attributes.push(Attribute {
            name: name.clone(),
            kind: meta.kind,
            required: meta.required,
            target: meta.target,
        });
    }

    tracing::debug!(
        collection = %info.display_name,
        attributes = attributes.len(),
        "loaded content-type schema"
    );

    Ok(ContentTypeSchema {
        plural_name: info.plural_name,
        display_name: info.display_name,
        attributes,
    })
}
