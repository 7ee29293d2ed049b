//! # strapi-admin-gen
//!
//! A schema-driven source generator: given a Strapi content-type schema
//! (`schema.json`), it produces two TSX artifacts for that CRUD resource —
//! a paginated, searchable antd list page and a create/edit modal form.
//!
//! ## Architecture
//!
//! The library is organized into three modules:
//!
//! - **[`schema`]** - Content-type schema parsing and loading
//! - **[`generator`]** - Attribute classification, view model construction,
//!   and askama template rendering
//! - **[`cli`]** - `clap`-based command-line interface
//!
//! ### Generation Flow
//!
//! ```text
//! schema.json → schema::load_schema → generator::build_view_model
//!             → { page.tsx.txt, modal.tsx.txt } → <Name>Page.tsx, AE<Name>.tsx
//! ```
//!
//! Classification is permissive by design: an unrecognized attribute kind
//! passes through verbatim as the generated TypeScript kind rather than
//! aborting generation, while `media` and `relation` attributes are routed to
//! the populate directive and never surface as direct columns or form fields.
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
//!
//! Or via the `strapi-admin-gen` binary:
//!
//! ```bash
//! strapi-admin-gen generate --root ./my-strapi-app --api article
//! ```

pub mod cli;
pub mod generator;
pub mod schema;

pub use generator::{build_view_model, classify_attribute, generate_admin, GeneratorConfig};
pub use schema::{load_schema, parse_schema, Attribute, ContentTypeSchema};
