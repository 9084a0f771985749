//! The canonical, validated configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::options::{CiPlatform, DeployMethod, InfraTool, ObservabilityLevel, SecurityLevel};

/// Validated, defaulted, normalized configuration for one generation run.
///
/// Constructed only by [`crate::ConfigResolver::resolve`]; immutable after
/// that. All branching decisions downstream go through the derived predicates
/// rather than re-inspecting raw strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalConfig {
    pub ci: CiPlatform,
    pub infra: InfraTool,
    pub deploy: DeployMethod,
    /// Ordered, duplicate-free, non-empty. `["single"]` when unset.
    pub environments: Vec<String>,
    pub observability: ObservabilityLevel,
    pub security: SecurityLevel,
    pub project_name: String,
}

impl CanonicalConfig {
    /// A CI platform was chosen.
    pub fn has_ci(&self) -> bool {
        self.ci != CiPlatform::None
    }

    /// An IaC tool was chosen.
    pub fn has_infra(&self) -> bool {
        self.infra != InfraTool::None
    }

    /// A container image is built. Kubernetes implies a container build step.
    pub fn has_docker(&self) -> bool {
        matches!(self.deploy, DeployMethod::Docker | DeployMethod::Kubernetes)
    }

    pub fn has_kubernetes(&self) -> bool {
        self.deploy == DeployMethod::Kubernetes
    }

    pub fn has_metrics(&self) -> bool {
        self.observability >= ObservabilityLevel::LogsMetrics
    }

    pub fn has_alerts(&self) -> bool {
        self.observability == ObservabilityLevel::Full
    }

    pub fn security_level(&self) -> SecurityLevel {
        self.security
    }

    /// Base variable map shared by every rendered template.
    ///
    /// Per-directive extras (the fan-out `env` variable) are layered on top
    /// of this by the executor.
    pub fn template_context(&self) -> HashMap<String, String> {
        let mut ctx = HashMap::new();
        ctx.insert("project_name".to_string(), self.project_name.clone());
        ctx.insert("ci".to_string(), self.ci.to_string());
        ctx.insert("infra".to_string(), self.infra.to_string());
        ctx.insert("deploy".to_string(), self.deploy.to_string());
        ctx.insert("environments".to_string(), self.environments.join(","));
        ctx.insert("observability".to_string(), self.observability.to_string());
        ctx.insert("security".to_string(), self.security.to_string());
        ctx
    }
}
