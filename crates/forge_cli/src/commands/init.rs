//! Init command - Generate a DevOps project from options.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use forge_config::{ConfigResolver, RawOptions};
use forge_generator::ProjectGenerator;
use forge_templates::TemplateEngine;

#[derive(Args)]
pub struct InitArgs {
    /// CI/CD platform: github-actions, gitlab-ci, jenkins, none
    #[arg(long)]
    ci: Option<String>,

    /// Infrastructure tool: terraform, cloudformation, none
    #[arg(long)]
    infra: Option<String>,

    /// Deployment method: vm, docker, kubernetes
    #[arg(long)]
    deploy: Option<String>,

    /// Environments: single, or a comma list like dev,stage,prod
    #[arg(long)]
    envs: Option<String>,

    /// Observability level: logs, logs-metrics, full
    #[arg(long)]
    observability: Option<String>,

    /// Security level: basic, standard, strict
    #[arg(long)]
    security: Option<String>,

    /// Project name
    #[arg(long = "name")]
    project_name: Option<String>,

    /// Read options from a YAML file; flags override file values
    #[arg(long = "from-file")]
    from_file: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Templates directory
    #[arg(long, default_value = "templates")]
    templates: PathBuf,

    /// Print the resolved plan as JSON instead of writing anything
    #[arg(long)]
    dry_run: bool,
}

/// Default project name, matching the one the option catalog documents.
const DEFAULT_PROJECT_NAME: &str = "devops-project";

pub fn execute(args: InitArgs) -> Result<()> {
    let raw = collect_options(&args)?;

    let config = ConfigResolver::resolve(&raw)?;
    info!(project = %config.project_name, "configuration resolved");

    let engine = TemplateEngine::new(&args.templates);
    let generator = ProjectGenerator::new(config.clone(), &args.output, engine);
    let plan = generator.plan();

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    if generator.project_path().exists() {
        anyhow::bail!(
            "project directory already exists: {}",
            generator.project_path().display()
        );
    }

    let report = generator
        .execute(&plan)
        .context("Failed to generate project")?;

    println!("Project '{}' generated successfully!", config.project_name);
    println!();
    println!("Location: {}", report.project_path.display());
    println!("Files:    {}", report.files_written.len());
    println!();
    println!("Next steps:");
    println!("  cd {}", config.project_name);
    println!("  make help");

    Ok(())
}

/// Merge CLI flags over an optional YAML options file.
fn collect_options(args: &InitArgs) -> Result<RawOptions> {
    let mut raw = match &args.from_file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read options file {}", path.display()))?;
            serde_yaml::from_str::<RawOptions>(&text)
                .with_context(|| format!("Failed to parse options file {}", path.display()))?
        }
        None => RawOptions::default(),
    };

    if args.ci.is_some() {
        raw.ci = args.ci.clone();
    }
    if args.infra.is_some() {
        raw.infra = args.infra.clone();
    }
    if args.deploy.is_some() {
        raw.deploy = args.deploy.clone();
    }
    if args.envs.is_some() {
        raw.envs = args.envs.clone();
    }
    if args.observability.is_some() {
        raw.observability = args.observability.clone();
    }
    if args.security.is_some() {
        raw.security = args.security.clone();
    }
    if args.project_name.is_some() {
        raw.project_name = args.project_name.clone();
    }
    if raw.project_name.is_none() {
        raw.project_name = Some(DEFAULT_PROJECT_NAME.to_string());
    }

    Ok(raw)
}
