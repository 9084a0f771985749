//! End-to-end generation tests against the shipped templates tree.

use std::fs;
use std::path::Path;

use forge_config::{ConfigResolver, RawOptions};
use forge_generator::{GenerationError, ProjectGenerator};
use forge_templates::TemplateEngine;
use tempfile::tempdir;

fn get_templates_path() -> String {
    // Try to find the templates directory relative to the workspace.
    let candidates = ["templates", "../templates", "../../templates"];

    for candidate in candidates {
        if Path::new(candidate).exists() {
            return candidate.to_string();
        }
    }

    "templates".to_string()
}

fn resolve(raw: RawOptions) -> forge_config::CanonicalConfig {
    ConfigResolver::resolve(&raw).unwrap()
}

fn full_options() -> RawOptions {
    RawOptions {
        ci: Some("github-actions".to_string()),
        infra: Some("terraform".to_string()),
        deploy: Some("kubernetes".to_string()),
        envs: Some("dev,stage,prod".to_string()),
        observability: Some("full".to_string()),
        security: Some("strict".to_string()),
        project_name: Some("acme-platform".to_string()),
    }
}

#[test]
fn test_generate_full_project() {
    let out = tempdir().unwrap();
    let engine = TemplateEngine::new(get_templates_path());
    let generator = ProjectGenerator::new(resolve(full_options()), out.path(), engine);

    let report = generator.generate().unwrap();
    let root = &report.project_path;

    assert_eq!(root, &out.path().join("acme-platform"));
    assert!(!report.files_written.is_empty());

    // Base structure
    for dir in ["app/sample-app", "ci/pipelines", "monitoring/alerts", "scripts/automation"] {
        assert!(root.join(dir).is_dir(), "missing directory {}", dir);
    }

    // A sample of every stage's output
    assert!(root.join("ci/pipelines/github-actions.yml").is_file());
    assert!(root.join("ci/README.md").is_file());
    assert!(root.join("infra/terraform/main.tf").is_file());
    assert!(root.join("infra/environments/stage.tf").is_file());
    assert!(root.join("containers/Dockerfile").is_file());
    assert!(root.join("k8s/base/deployment.yml").is_file());
    assert!(root.join("k8s/overlays/prod/kustomization.yml").is_file());
    assert!(root.join("monitoring/metrics/metrics.yml").is_file());
    assert!(root.join("security/compliance.yml").is_file());
    assert!(root.join("Makefile").is_file());
    assert!(root.join(".gitignore").is_file());
}

#[test]
fn test_generated_files_are_rendered() {
    let out = tempdir().unwrap();
    let engine = TemplateEngine::new(get_templates_path());
    let generator = ProjectGenerator::new(resolve(full_options()), out.path(), engine);

    let report = generator.generate().unwrap();

    let readme = fs::read_to_string(report.project_path.join("README.md")).unwrap();
    assert!(readme.contains("acme-platform"));
    assert!(!readme.contains("{{"));

    let overlay =
        fs::read_to_string(report.project_path.join("k8s/overlays/dev/kustomization.yml")).unwrap();
    assert!(overlay.contains("namePrefix: dev-"));
}

#[cfg(unix)]
#[test]
fn test_scripts_are_executable() {
    use std::os::unix::fs::PermissionsExt;

    let out = tempdir().unwrap();
    let engine = TemplateEngine::new(get_templates_path());
    let raw = RawOptions {
        deploy: Some("vm".to_string()),
        project_name: Some("vm-app".to_string()),
        ..Default::default()
    };
    let generator = ProjectGenerator::new(resolve(raw), out.path(), engine);
    let report = generator.generate().unwrap();

    for script in ["scripts/setup.sh", "scripts/deploy.sh", "scripts/automation/vm-deploy.sh"] {
        let mode = fs::metadata(report.project_path.join(script))
            .unwrap()
            .permissions()
            .mode();
        assert_ne!(mode & 0o111, 0, "{} is not executable", script);
    }
}

#[test]
fn test_minimal_vm_project_has_no_container_or_k8s_files() {
    let out = tempdir().unwrap();
    let engine = TemplateEngine::new(get_templates_path());
    let raw = RawOptions {
        deploy: Some("vm".to_string()),
        project_name: Some("vm-app".to_string()),
        ..Default::default()
    };
    let generator = ProjectGenerator::new(resolve(raw), out.path(), engine);
    let report = generator.generate().unwrap();

    assert!(!report.project_path.join("containers/Dockerfile").exists());
    assert!(!report.project_path.join("k8s/base/deployment.yml").exists());
    assert!(report.project_path.join("scripts/automation/vm-deploy.sh").is_file());

    // The empty base directories still exist as part of the fixed skeleton.
    assert!(report.project_path.join("containers").is_dir());
    assert!(report.project_path.join("k8s/base").is_dir());
}

#[test]
fn test_missing_template_surfaces_directive_identity() {
    let out = tempdir().unwrap();
    let empty_templates = tempdir().unwrap();
    let engine = TemplateEngine::new(empty_templates.path());
    let raw = RawOptions {
        deploy: Some("docker".to_string()),
        project_name: Some("broken".to_string()),
        ..Default::default()
    };
    let generator = ProjectGenerator::new(resolve(raw), out.path(), engine);

    let err = generator.generate().unwrap_err();
    match err {
        GenerationError::Template { template, .. } => {
            assert!(template.ends_with(".j2"), "unexpected template id {}", template);
        }
        other => panic!("expected Template error, got {:?}", other),
    }
}

#[test]
fn test_shipped_templates_cover_every_plannable_directive() {
    let engine = TemplateEngine::new(get_templates_path());

    // Sweep the whole option space; every directive any plan can emit must
    // have a backing template file.
    for ci in forge_config::CiPlatform::VALUES {
        for infra in forge_config::InfraTool::VALUES {
            for deploy in forge_config::DeployMethod::VALUES {
                for security in forge_config::SecurityLevel::VALUES {
                    let raw = RawOptions {
                        ci: Some(ci.to_string()),
                        infra: Some(infra.to_string()),
                        deploy: Some(deploy.to_string()),
                        envs: Some("dev,prod".to_string()),
                        observability: Some("full".to_string()),
                        security: Some(security.to_string()),
                        project_name: Some("sweep".to_string()),
                    };
                    let plan = forge_plan::GenerationPlanner::plan(&resolve(raw));
                    for template in plan.templates() {
                        assert!(engine.exists(template), "missing template {}", template);
                    }
                }
            }
        }
    }
}
