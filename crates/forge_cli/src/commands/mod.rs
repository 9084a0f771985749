//! CLI command definitions.
//!
//! Each subcommand maps to one generator workflow: `init` scaffolds a
//! project, `list-options` prints the option catalog, `smoke-templates`
//! verifies the shipped template tree renders cleanly.

use clap::{Parser, Subcommand};

pub mod init;
pub mod list_options;
pub mod smoke_templates;

/// ForgeOps - DevOps project scaffolding
#[derive(Parser)]
#[command(name = "forge")]
#[command(version, about = "ForgeOps - Scaffold production-ready DevOps repositories")]
#[command(long_about = r#"
ForgeOps scaffolds a complete DevOps project skeleton (CI/CD pipelines,
infrastructure-as-code, deployment manifests, monitoring, security policy,
base files) from a small set of options.

WORKFLOWS:
  init            → Generate a project from the given options
  list-options    → Print every option and its legal values
  smoke-templates → Render every shipped template with a sample context

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Configuration validation failure
  4 - Template error
  5 - Generation error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new DevOps project
    Init(init::InitArgs),

    /// List all available options
    #[command(name = "list-options")]
    ListOptions,

    /// Render every shipped template against a sample context
    #[command(name = "smoke-templates")]
    SmokeTemplates(smoke_templates::SmokeTemplatesArgs),
}
