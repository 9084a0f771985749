//! Raw option bag and the closed option sets.
//!
//! Each option is a closed enum with a kebab-case wire form matching what the
//! CLI (or an options file) supplies. Parsing is strict: anything outside the
//! closed set is a validation failure upstream, never a silent coercion.

use serde::{Deserialize, Serialize};

/// Sparse, user-supplied options as collected by the CLI or an options file.
///
/// Every field may be absent. Resolution applies defaults where the option
/// set defines one; `deploy` and `project_name` have no default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawOptions {
    pub ci: Option<String>,
    pub infra: Option<String>,
    pub deploy: Option<String>,
    pub envs: Option<String>,
    pub observability: Option<String>,
    pub security: Option<String>,
    pub project_name: Option<String>,
}

/// CI/CD platform choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CiPlatform {
    GithubActions,
    GitlabCi,
    Jenkins,
    #[default]
    None,
}

impl CiPlatform {
    pub const VALUES: [&'static str; 4] = ["github-actions", "gitlab-ci", "jenkins", "none"];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "github-actions" => Some(Self::GithubActions),
            "gitlab-ci" => Some(Self::GitlabCi),
            "jenkins" => Some(Self::Jenkins),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GithubActions => "github-actions",
            Self::GitlabCi => "gitlab-ci",
            Self::Jenkins => "jenkins",
            Self::None => "none",
        }
    }
}

/// Infrastructure-as-code tool choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InfraTool {
    Terraform,
    Cloudformation,
    #[default]
    None,
}

impl InfraTool {
    pub const VALUES: [&'static str; 3] = ["terraform", "cloudformation", "none"];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "terraform" => Some(Self::Terraform),
            "cloudformation" => Some(Self::Cloudformation),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Terraform => "terraform",
            Self::Cloudformation => "cloudformation",
            Self::None => "none",
        }
    }
}

/// Deployment method. Mandatory: there is no "none" deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeployMethod {
    Vm,
    Docker,
    Kubernetes,
}

impl DeployMethod {
    pub const VALUES: [&'static str; 3] = ["vm", "docker", "kubernetes"];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "vm" => Some(Self::Vm),
            "docker" => Some(Self::Docker),
            "kubernetes" => Some(Self::Kubernetes),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vm => "vm",
            Self::Docker => "docker",
            Self::Kubernetes => "kubernetes",
        }
    }
}

/// Observability depth. Ordered: logs < logs-metrics < full.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ObservabilityLevel {
    #[default]
    Logs,
    LogsMetrics,
    Full,
}

impl ObservabilityLevel {
    pub const VALUES: [&'static str; 3] = ["logs", "logs-metrics", "full"];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "logs" => Some(Self::Logs),
            "logs-metrics" => Some(Self::LogsMetrics),
            "full" => Some(Self::Full),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Logs => "logs",
            Self::LogsMetrics => "logs-metrics",
            Self::Full => "full",
        }
    }
}

/// Security strictness. A cumulative ladder: strict implies everything
/// standard implies, carried directly by the `Ord` derive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SecurityLevel {
    #[default]
    Basic,
    Standard,
    Strict,
}

impl SecurityLevel {
    pub const VALUES: [&'static str; 3] = ["basic", "standard", "strict"];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "basic" => Some(Self::Basic),
            "standard" => Some(Self::Standard),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Strict => "strict",
        }
    }

    /// True when this level is at least as strict as `other`.
    pub fn at_least(&self, other: SecurityLevel) -> bool {
        *self >= other
    }
}

macro_rules! impl_display {
    ($($ty:ty),+) => {
        $(impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

impl_display!(
    CiPlatform,
    InfraTool,
    DeployMethod,
    ObservabilityLevel,
    SecurityLevel
);
