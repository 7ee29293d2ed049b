//! # Generator Module
//!
//! The generator module turns a loaded content-type schema into the two
//! admin artifacts: a paginated list page and a create/edit modal.
//!
//! ## Architecture
//!
//! Generation is a two-stage pipeline:
//!
//! ```text
//! Schema → View Model (classify + derive) → Template Rendering → Output Files
//! ```
//!
//! 1. **Model** - [`classify_attribute`] maps each declared attribute kind to
//!    a generated-language kind or an eager-load reference;
//!    [`build_view_model`] derives columns, form fields, the TypeScript
//!    interface entries, and the populate list from one pass over the
//!    attributes.
//! 2. **Templates** - Askama templates render the view model into TSX.
//! 3. **Project** - [`generate_admin`] orchestrates loading, rendering, and
//!    file writing driven by an explicit [`GeneratorConfig`].
//!
//! Keeping the mapping rules in the view model stage makes them testable
//! without string-matching generated output.
//!
//! ## Generated artifacts
//!
//! For a schema with display name `Article`:
//!
//! ```text
//! src/pages/ArticlePage.tsx   # searchable, paginated list with actions
//! src/modals/AEArticle.tsx    # create/edit form modal
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use strapi_admin_gen::generator::{generate_admin, GeneratorConfig};
//!
//! generate_admin(&GeneratorConfig {
//!     schema_path: "schema.json".into(),
//!     pages_dir: "src/pages".into(),
//!     modals_dir: "src/modals".into(),
//!     force: false,
//! })?;
//! ```

mod model;
mod project;
mod templates;

pub use model::*;
pub use project::*;
pub use templates::*;
