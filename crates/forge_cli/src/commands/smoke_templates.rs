//! Smoke-templates command - Render every shipped template.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use forge_config::{ConfigResolver, RawOptions};
use forge_templates::TemplateEngine;

#[derive(Args)]
pub struct SmokeTemplatesArgs {
    /// Templates directory
    #[arg(long, default_value = "templates")]
    templates: PathBuf,
}

/// Render every discovered template against a representative context.
///
/// Catches missing variables and unreadable templates before a user hits
/// them mid-generation.
pub fn execute(args: SmokeTemplatesArgs) -> Result<()> {
    let engine = TemplateEngine::new(&args.templates);

    let templates = engine.available();
    if templates.is_empty() {
        anyhow::bail!("no templates found under {}", args.templates.display());
    }

    let context = sample_context();

    let mut failures = Vec::new();
    for template in &templates {
        match engine.render(template, &context) {
            Ok(_) => info!(template = %template, "ok"),
            Err(e) => failures.push(format!("{}: {}", template, e)),
        }
    }

    println!("Checked {} templates, {} failed", templates.len(), failures.len());

    if !failures.is_empty() {
        for failure in &failures {
            eprintln!("  {}", failure);
        }
        anyhow::bail!("{} template(s) failed to render", failures.len());
    }

    Ok(())
}

/// A fully-specified configuration's context, plus the fan-out `env`
/// variable so per-environment templates render too.
fn sample_context() -> std::collections::HashMap<String, String> {
    let raw = RawOptions {
        ci: Some("github-actions".to_string()),
        infra: Some("terraform".to_string()),
        deploy: Some("kubernetes".to_string()),
        envs: Some("dev,stage,prod".to_string()),
        observability: Some("full".to_string()),
        security: Some("strict".to_string()),
        project_name: Some("smoke-check".to_string()),
    };
    let config = ConfigResolver::resolve(&raw).expect("sample options are valid");

    let mut context = config.template_context();
    context.insert("env".to_string(), "dev".to_string());
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_context_covers_fan_out_variable() {
        let ctx = sample_context();
        assert!(ctx.contains_key("env"));
        assert!(ctx.contains_key("project_name"));
        assert!(ctx.contains_key("deploy"));
    }
}
