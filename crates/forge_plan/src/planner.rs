//! The generation planner: config in, ordered plan out.

use std::path::PathBuf;

use tracing::debug;

use forge_config::{CanonicalConfig, CiPlatform, DeployMethod, InfraTool, SecurityLevel};

use crate::directive::{GenerationPlan, RenderDirective};

/// Base directory skeleton, created for every project regardless of
/// configuration.
const BASE_DIRECTORIES: [&str; 12] = [
    "app/sample-app",
    "ci/pipelines",
    "infra/environments",
    "containers",
    "k8s/base",
    "k8s/overlays",
    "monitoring/logs",
    "monitoring/metrics",
    "monitoring/alerts",
    "security/secrets",
    "security/scanning",
    "scripts/automation",
];

/// Derives the ordered set of render directives for a validated config.
///
/// Stage order is fixed (structure, ci, infra, deployment, monitoring,
/// security, base files) so that equal configs always produce byte-equal
/// plans. The planner raises no errors: every lookup is a closed match over
/// an already-validated enum.
pub struct GenerationPlanner;

impl GenerationPlanner {
    pub fn plan(config: &CanonicalConfig) -> GenerationPlan {
        let mut plan =
            GenerationPlan::new(BASE_DIRECTORIES.into_iter().map(PathBuf::from).collect());

        Self::plan_ci(config, &mut plan);
        Self::plan_infrastructure(config, &mut plan);
        Self::plan_deployment(config, &mut plan);
        Self::plan_monitoring(config, &mut plan);
        Self::plan_security(config, &mut plan);
        Self::plan_base_files(&mut plan);

        debug!(
            directives = plan.directives.len(),
            directories = plan.directories.len(),
            "planned generation"
        );

        plan
    }

    /// One platform pipeline when a CI platform is chosen; the CI README is
    /// generated either way and documents the "none" state when it applies.
    fn plan_ci(config: &CanonicalConfig, plan: &mut GenerationPlan) {
        if config.has_ci() {
            let template = match config.ci {
                CiPlatform::GithubActions => "ci/github-actions.yml.j2",
                CiPlatform::GitlabCi => "ci/gitlab-ci.yml.j2",
                CiPlatform::Jenkins => "ci/jenkinsfile.j2",
                CiPlatform::None => unreachable!("has_ci() excludes None"),
            };
            plan.push(RenderDirective::new(
                template,
                format!("ci/pipelines/{}.yml", config.ci),
            ));
        }

        plan.push(RenderDirective::new("ci/README.md.j2", "ci/README.md"));
    }

    /// Tool-specific root files, then one per-environment config file.
    fn plan_infrastructure(config: &CanonicalConfig, plan: &mut GenerationPlan) {
        if !config.has_infra() {
            return;
        }

        match config.infra {
            InfraTool::Terraform => {
                plan.push(RenderDirective::new(
                    "terraform/main.tf.j2",
                    "infra/terraform/main.tf",
                ));
                plan.push(RenderDirective::new(
                    "terraform/variables.tf.j2",
                    "infra/terraform/variables.tf",
                ));
                plan.push(RenderDirective::new(
                    "terraform/outputs.tf.j2",
                    "infra/terraform/outputs.tf",
                ));
            }
            InfraTool::Cloudformation => {
                plan.push(RenderDirective::new(
                    "cloudformation/template.yml.j2",
                    "infra/cloudformation/template.yml",
                ));
            }
            InfraTool::None => unreachable!("has_infra() excludes None"),
        }

        let extension = match config.infra {
            InfraTool::Terraform => "tf",
            _ => "yml",
        };
        for env in &config.environments {
            plan.push(
                RenderDirective::new(
                    format!("infra/environment-{}.j2", config.infra),
                    format!("infra/environments/{}.{}", env, extension),
                )
                .with_env(env),
            );
        }
    }

    /// Container build files when a container is involved, kubernetes base
    /// manifests plus per-environment kustomize overlays, or a VM deploy
    /// script. Kubernetes fires the container branch too.
    fn plan_deployment(config: &CanonicalConfig, plan: &mut GenerationPlan) {
        if config.has_docker() {
            plan.push(RenderDirective::new(
                "deploy/Dockerfile.j2",
                "containers/Dockerfile",
            ));
            plan.push(RenderDirective::new(
                "deploy/docker-compose.yml.j2",
                "containers/docker-compose.yml",
            ));
        }

        if config.has_kubernetes() {
            plan.push(RenderDirective::new(
                "deploy/k8s-deployment.yml.j2",
                "k8s/base/deployment.yml",
            ));
            plan.push(RenderDirective::new(
                "deploy/k8s-service.yml.j2",
                "k8s/base/service.yml",
            ));

            for env in &config.environments {
                plan.require_dir(format!("k8s/overlays/{}", env));
                plan.push(
                    RenderDirective::new(
                        "deploy/k8s-overlay.yml.j2",
                        format!("k8s/overlays/{}/kustomization.yml", env),
                    )
                    .with_env(env),
                );
            }
        }

        if config.deploy == DeployMethod::Vm {
            plan.push(
                RenderDirective::new(
                    "deploy/vm-deploy.sh.j2",
                    "scripts/automation/vm-deploy.sh",
                )
                .executable(),
            );
        }
    }

    /// Logging is the unconditional baseline; metrics and alerts are
    /// independent toggles on top of it.
    fn plan_monitoring(config: &CanonicalConfig, plan: &mut GenerationPlan) {
        plan.push(RenderDirective::new(
            "monitoring/logging.yml.j2",
            "monitoring/logs/logging.yml",
        ));

        if config.has_metrics() {
            plan.push(RenderDirective::new(
                "monitoring/metrics.yml.j2",
                "monitoring/metrics/metrics.yml",
            ));
        }

        if config.has_alerts() {
            plan.push(RenderDirective::new(
                "monitoring/alerts.yml.j2",
                "monitoring/alerts/alerts.yml",
            ));
        }
    }

    /// Secrets and scan templates come in three level-prefixed variants;
    /// policy and compliance stack cumulatively on top.
    fn plan_security(config: &CanonicalConfig, plan: &mut GenerationPlan) {
        let level = config.security_level();

        plan.push(RenderDirective::new(
            format!("security/{}-secrets.yml.j2", level),
            "security/secrets/secrets.yml",
        ));
        plan.push(RenderDirective::new(
            format!("security/{}-scan.yml.j2", level),
            "security/scanning/scan.yml",
        ));

        if level.at_least(SecurityLevel::Standard) {
            plan.push(RenderDirective::new(
                "security/security-policy.yml.j2",
                "security/security-policy.yml",
            ));
        }

        if level == SecurityLevel::Strict {
            plan.push(RenderDirective::new(
                "security/compliance.yml.j2",
                "security/compliance.yml",
            ));
        }
    }

    /// Sample app, automation scripts, Makefile, README, ignore file.
    /// Independent of every other option.
    fn plan_base_files(plan: &mut GenerationPlan) {
        plan.push(RenderDirective::new(
            "app/sample-app/main.py.j2",
            "app/sample-app/main.py",
        ));
        plan.push(RenderDirective::new(
            "app/sample-app/requirements.txt.j2",
            "app/sample-app/requirements.txt",
        ));
        plan.push(RenderDirective::new("scripts/setup.sh.j2", "scripts/setup.sh").executable());
        plan.push(RenderDirective::new("scripts/deploy.sh.j2", "scripts/deploy.sh").executable());
        plan.push(RenderDirective::new("Makefile.j2", "Makefile"));
        plan.push(RenderDirective::new("README.md.j2", "README.md"));
        plan.push(RenderDirective::new("gitignore.j2", ".gitignore"));
    }
}
