//! # Schema Module
//!
//! Strapi content-type schema parsing and loading.
//!
//! A content-type schema (`schema.json`) describes one CRUD resource: its
//! singular/plural naming and an ordered map of attributes, each with a
//! declared kind and a required flag. This module reads that document from
//! disk, shape-checks it, and produces an immutable [`ContentTypeSchema`]
//! that the generator consumes.
//!
//! Attribute order in the source document is significant: it drives column
//! order in the generated list page and field order in the generated modal,
//! so loading preserves insertion order end to end.

mod load;
mod types;

pub use load::*;
pub use types::*;
