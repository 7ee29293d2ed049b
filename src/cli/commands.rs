use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::generator::{build_view_model, generate_admin, GeneratorConfig};
use crate::schema::load_schema;

/// Command-line interface for the Strapi admin generator
#[derive(Parser)]
#[command(name = "strapi-admin-gen")]
#[command(about = "Generate antd admin pages and modals from Strapi schemas", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a list page and create/edit modal from a content-type schema
    Generate {
        /// Path to a content-type schema.json
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Strapi project root the schema path is derived from (needs --api)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Strapi api name (e.g. `article`)
        #[arg(short, long)]
        api: Option<String>,

        /// Output folder for the generated list page
        #[arg(short, long, default_value = "src/pages")]
        pages: PathBuf,

        /// Output folder for the generated modal
        #[arg(short, long, default_value = "src/modals")]
        modals: PathBuf,

        /// Overwrite existing files without prompting
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Print the derived columns, populate keys, and field kinds for a schema
    Inspect {
        /// Path to a content-type schema.json
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Strapi project root the schema path is derived from (needs --api)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Strapi api name (e.g. `article`)
        #[arg(short, long)]
        api: Option<String>,
    },
}

/// Resolve the schema path from the CLI flags
///
/// A direct `--schema` path wins; otherwise the path is derived from
/// `--root` and `--api` by Strapi convention
/// (`<root>/src/api/<api>/content-types/<api>/schema.json`).
///
/// # Errors
///
/// Returns an error when neither a schema path nor a project root was given,
/// or a project root was given without an api name. Nothing is read or
/// written in either case.
pub fn resolve_schema_path(
    schema: Option<&Path>,
    root: Option<&Path>,
    api: Option<&str>,
) -> anyhow::Result<PathBuf> {
    if let Some(schema) = schema {
        return Ok(schema.to_path_buf());
    }
    let Some(root) = root else {
        anyhow::bail!("specify a schema path or a Strapi project root");
    };
    let Some(api) = api else {
        anyhow::bail!("specify an api name alongside the project root");
    };
    Ok(root
        .join("src/api")
        .join(api)
        .join("content-types")
        .join(api)
        .join("schema.json"))
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - No schema path is resolvable from the flags
/// - The schema cannot be loaded or parsed
/// - Generation or file writing fails
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate {
            schema,
            root,
            api,
            pages,
            modals,
            force,
        } => {
            let schema_path =
                resolve_schema_path(schema.as_deref(), root.as_deref(), api.as_deref())?;
            let config = GeneratorConfig {
                schema_path,
                pages_dir: pages.clone(),
                modals_dir: modals.clone(),
                force: *force,
            };
            generate_admin(&config)?;
            Ok(())
        }
        Commands::Inspect { schema, root, api } => {
            let schema_path =
                resolve_schema_path(schema.as_deref(), root.as_deref(), api.as_deref())?;
            let schema = load_schema(&schema_path)?;
            let model = build_view_model(&schema);

            println!("collection: {} (/api/{})", schema.display_name, schema.plural_name);
            println!("columns:");
            for col in &model.columns {
                println!("  {} ({})", col.title, col.align);
            }
            println!("populate: {:?}", model.populate);
            println!("interface:");
            for field in &model.field_kinds {
                println!("  {}: {}", field.name, field.kind);
            }
            Ok(())
        }
    }
}
