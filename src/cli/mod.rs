//! # CLI Module
//!
//! Command-line interface for the Strapi admin generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Generate the list page and create/edit modal for one content type:
//!
//! ```bash
//! strapi-admin-gen generate --schema schema.json
//! strapi-admin-gen generate --root ./my-strapi-app --api article
//! ```
//!
//! Options:
//! - `--schema <FILE>` - Direct path to a content-type schema
//! - `--root <DIR>` / `--api <NAME>` - Derive the schema path by Strapi
//!   convention (`<root>/src/api/<api>/content-types/<api>/schema.json`)
//! - `--pages <DIR>` - Output folder for the page (default: `src/pages`)
//! - `--modals <DIR>` - Output folder for the modal (default: `src/modals`)
//! - `--force` - Overwrite existing files
//!
//! ### `inspect`
//!
//! Print the derived view model without writing anything:
//!
//! ```bash
//! strapi-admin-gen inspect --schema schema.json
//! ```

mod commands;


pub use commands::{resolve_schema_path, run_cli, Cli, Commands};
