//! Integration tests for plan resolution.

use forge_config::{ConfigResolver, RawOptions};
use forge_plan::{GenerationPlan, GenerationPlanner};

fn plan_for(raw: RawOptions) -> GenerationPlan {
    let config = ConfigResolver::resolve(&raw).unwrap();
    GenerationPlanner::plan(&config)
}

fn options(deploy: &str) -> RawOptions {
    RawOptions {
        deploy: Some(deploy.to_string()),
        project_name: Some("acme-platform".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_plan_is_deterministic() {
    let raw = RawOptions {
        ci: Some("github-actions".to_string()),
        infra: Some("terraform".to_string()),
        deploy: Some("kubernetes".to_string()),
        envs: Some("dev,stage,prod".to_string()),
        observability: Some("full".to_string()),
        security: Some("strict".to_string()),
        project_name: Some("acme-platform".to_string()),
    };

    let first = plan_for(raw.clone());
    let second = plan_for(raw);
    assert_eq!(first, second);
}

#[test]
fn test_kubernetes_overlay_fan_out() {
    let mut raw = options("kubernetes");
    raw.envs = Some("dev,stage,prod".to_string());
    let plan = plan_for(raw);

    let overlays: Vec<_> = plan
        .directives
        .iter()
        .filter(|d| d.template == "deploy/k8s-overlay.yml.j2")
        .collect();

    assert_eq!(overlays.len(), 3);
    for (overlay, env) in overlays.iter().zip(["dev", "stage", "prod"]) {
        assert_eq!(overlay.extra_context.get("env").unwrap(), env);
        assert_eq!(
            overlay.output,
            std::path::PathBuf::from(format!("k8s/overlays/{}/kustomization.yml", env))
        );
    }

    // Overlay directories are part of the directory requirements.
    for env in ["dev", "stage", "prod"] {
        assert!(plan
            .directories
            .contains(&std::path::PathBuf::from(format!("k8s/overlays/{}", env))));
    }
}

#[test]
fn test_terraform_root_files_and_env_fan_out() {
    let mut raw = options("vm");
    raw.infra = Some("terraform".to_string());
    raw.envs = Some("dev,prod".to_string());
    let plan = plan_for(raw);

    for output in [
        "infra/terraform/main.tf",
        "infra/terraform/variables.tf",
        "infra/terraform/outputs.tf",
    ] {
        assert!(plan.directive_for(output).is_some(), "missing {}", output);
    }

    for env in ["dev", "prod"] {
        let d = plan
            .directive_for(format!("infra/environments/{}.tf", env))
            .unwrap();
        assert_eq!(d.template, "infra/environment-terraform.j2");
        assert_eq!(d.extra_context.get("env").unwrap(), env);
    }
}

#[test]
fn test_cloudformation_single_root_file() {
    let mut raw = options("vm");
    raw.infra = Some("cloudformation".to_string());
    let plan = plan_for(raw);

    assert!(plan.directive_for("infra/cloudformation/template.yml").is_some());
    assert!(plan.directive_for("infra/terraform/main.tf").is_none());

    // Per-environment files use .yml for non-terraform tools.
    assert!(plan.directive_for("infra/environments/single.yml").is_some());
}

#[test]
fn test_no_infra_no_infra_directives() {
    let plan = plan_for(options("vm"));
    assert!(!plan
        .directives
        .iter()
        .any(|d| d.output.starts_with("infra")));
}

#[test]
fn test_security_ladder_is_cumulative() {
    let mut basic = options("vm");
    basic.security = Some("basic".to_string());
    let basic_plan = plan_for(basic);

    let mut standard = options("vm");
    standard.security = Some("standard".to_string());
    let standard_plan = plan_for(standard);

    let mut strict = options("vm");
    strict.security = Some("strict".to_string());
    let strict_plan = plan_for(strict);

    let outputs = |plan: &GenerationPlan| -> Vec<std::path::PathBuf> {
        plan.directives
            .iter()
            .filter(|d| d.output.starts_with("security"))
            .map(|d| d.output.clone())
            .collect()
    };

    // basic has neither policy nor compliance
    assert!(!outputs(&basic_plan)
        .iter()
        .any(|p| p.ends_with("security-policy.yml") || p.ends_with("compliance.yml")));

    // standard adds policy, strict adds compliance on top
    assert!(outputs(&standard_plan)
        .iter()
        .any(|p| p.ends_with("security-policy.yml")));
    assert!(!outputs(&standard_plan)
        .iter()
        .any(|p| p.ends_with("compliance.yml")));

    // strict's security outputs are a superset of standard's
    for output in outputs(&standard_plan) {
        assert!(
            outputs(&strict_plan).contains(&output),
            "strict plan missing {:?}",
            output
        );
    }
    assert!(outputs(&strict_plan)
        .iter()
        .any(|p| p.ends_with("compliance.yml")));
}

#[test]
fn test_ci_none_yields_only_readme() {
    let mut raw = options("vm");
    raw.ci = Some("none".to_string());
    let plan = plan_for(raw);

    let ci_directives: Vec<_> = plan
        .directives
        .iter()
        .filter(|d| d.output.starts_with("ci"))
        .collect();
    assert_eq!(ci_directives.len(), 1);
    assert_eq!(ci_directives[0].output, std::path::PathBuf::from("ci/README.md"));
}

#[test]
fn test_base_files_always_present() {
    let plan = plan_for(options("docker"));

    for output in [
        "app/sample-app/main.py",
        "app/sample-app/requirements.txt",
        "scripts/setup.sh",
        "scripts/deploy.sh",
        "Makefile",
        "README.md",
        ".gitignore",
    ] {
        assert!(plan.directive_for(output).is_some(), "missing {}", output);
    }
}

#[test]
fn test_plan_serializes_for_dry_run_output() {
    let plan = plan_for(options("docker"));
    let json = serde_json::to_string_pretty(&plan).unwrap();
    assert!(json.contains("containers/Dockerfile"));
    assert!(json.contains("deploy/Dockerfile.j2"));
}

#[test]
fn test_only_fan_out_directives_carry_context() {
    let mut raw = options("kubernetes");
    raw.infra = Some("terraform".to_string());
    raw.envs = Some("dev,prod".to_string());
    let plan = plan_for(raw);

    for d in &plan.directives {
        let is_fan_out = d.template == "deploy/k8s-overlay.yml.j2"
            || d.template.starts_with("infra/environment-");
        assert_eq!(
            !d.extra_context.is_empty(),
            is_fan_out,
            "unexpected context on {:?}",
            d.output
        );
    }
}
