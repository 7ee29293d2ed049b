use serde::Deserialize;

/// Resource naming from the schema's `info` block
///
/// `plural_name` builds API path segments (`/api/articles`); `display_name`
/// names the generated artifacts (`ArticlePage.tsx`, `AEArticle.tsx`).
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaInfo {
    /// Plural resource name used in API paths (e.g., `articles`)
    #[serde(rename = "pluralName")]
    pub plural_name: String,
    /// Human-facing collection name used in identifiers (e.g., `Article`)
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// Raw attribute metadata as it appears in `schema.json`
#[derive(Debug, Clone, Deserialize)]
pub struct AttributeMeta {
    /// Declared attribute kind, kept verbatim (`string`, `richtext`,
    /// `integer`, `media`, `relation`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the attribute is mandatory on create/edit
    #[serde(default)]
    pub required: bool,
    /// Target content type for `relation` attributes
    #[serde(default)]
    pub target: Option<String>,
}

/// One schema field with its name attached
///
/// `name` is immutable once the schema is constructed; attribute order is
/// the insertion order of the source document.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: String,
    /// Declared kind, verbatim from the schema
    pub kind: String,
    pub required: bool,
    pub target: Option<String>,
}

/// A fully loaded content-type schema
///
/// Built once per invocation by [`super::load_schema`] and consumed by the
/// generator without mutation.
#[derive(Debug, Clone)]
pub struct ContentTypeSchema {
    /// Plural resource name (API path segment)
    pub plural_name: String,
    /// Collection display name (identifier stem for generated artifacts)
    pub display_name: String,
    /// Attributes in source-document order
    pub attributes: Vec<Attribute>,
}
