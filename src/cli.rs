//! Minimal CLI: swagger JSON + template → GraphQL SDL file
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::engine::{Options, Selection, SwaggerToGraphql};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// convert the `definitions` of a Swagger document into a GraphQL schema
#[derive(Parser, Debug)]
#[command(name = "swagger-gql")]
pub struct CommandLineInterface {
    /// source Swagger specification (JSON)
    #[arg(long)]
    input: PathBuf,

    /// template appended after the generated types (Query types etc.)
    #[arg(long)]
    template: PathBuf,

    /// name of the definition rendered as the root `interface`
    #[arg(long)]
    root_interface: String,

    /// only convert definitions whose name matches this regex
    #[arg(long)]
    filter: Option<String>,

    /// skip definitions whose name matches this regex
    #[arg(long)]
    exclude: Option<String>,

    /// target GraphQL schema file
    #[arg(short, long)]
    output: PathBuf,

    /// raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG wins when set
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    /// Install a stderr `fmt` subscriber. Safe to call once per process.
    pub fn init_tracing(&self) {
        let default_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("swagger_gql={default_level}")));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    pub fn run(&self) -> Result<()> {
        let source = std::fs::read(&self.input)
            .with_context(|| format!("failed to read source file {}", self.input.display()))?;
        let schema = crate::schema::load_document_slice(&source)
            .with_context(|| format!("failed to parse Swagger source file ({})", self.input.display()))?;
        let template = std::fs::read_to_string(&self.template)
            .with_context(|| format!("failed to read template {}", self.template.display()))?;

        let engine = SwaggerToGraphql::new(Options {
            schema: Some(schema),
            root_interface: Some(self.root_interface.clone()),
            template: Some(template),
        })?;
        let selection = Selection { filter: self.filter.clone(), exclude: self.exclude.clone() };
        let graphql = engine
            .render_all_with(&selection)
            .with_context(|| format!("failed to convert {}", self.input.display()))?;

        write_output(&self.output, &graphql)?;
        tracing::info!(output = %self.output.display(), bytes = graphql.len(), "wrote schema");
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_output(out: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory {}", parent.display()))?;
    }
    std::fs::write(out, contents).with_context(|| format!("failed to write {}", out.display()))
}
