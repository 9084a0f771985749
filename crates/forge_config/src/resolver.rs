//! Option resolution: validation, defaulting, normalization.

use tracing::debug;

use crate::config::CanonicalConfig;
use crate::error::{FieldIssue, ValidationError, ValidationResult};
use crate::options::{
    CiPlatform, DeployMethod, InfraTool, ObservabilityLevel, RawOptions, SecurityLevel,
};

/// Sentinel environment name used when no environments are given.
pub const SINGLE_ENV: &str = "single";

/// Resolves a [`RawOptions`] bag into a [`CanonicalConfig`].
///
/// Resolution never stops at the first problem: every offending field is
/// collected and reported together in the resulting [`ValidationError`].
pub struct ConfigResolver;

impl ConfigResolver {
    pub fn resolve(raw: &RawOptions) -> ValidationResult<CanonicalConfig> {
        let mut issues = Vec::new();

        let ci = Self::resolve_enum(
            raw.ci.as_deref(),
            "ci",
            &CiPlatform::VALUES,
            CiPlatform::parse,
            &mut issues,
        );
        let infra = Self::resolve_enum(
            raw.infra.as_deref(),
            "infra",
            &InfraTool::VALUES,
            InfraTool::parse,
            &mut issues,
        );
        let observability = Self::resolve_enum(
            raw.observability.as_deref(),
            "observability",
            &ObservabilityLevel::VALUES,
            ObservabilityLevel::parse,
            &mut issues,
        );
        let security = Self::resolve_enum(
            raw.security.as_deref(),
            "security",
            &SecurityLevel::VALUES,
            SecurityLevel::parse,
            &mut issues,
        );

        let deploy = Self::resolve_deploy(raw.deploy.as_deref(), &mut issues);
        let environments = Self::resolve_environments(raw.envs.as_deref(), &mut issues);
        let project_name = Self::resolve_project_name(raw.project_name.as_deref(), &mut issues);

        if !issues.is_empty() {
            return Err(ValidationError::new(issues));
        }

        // `deploy` is Some by construction here: a missing or invalid value
        // pushed an issue above.
        let config = CanonicalConfig {
            ci,
            infra,
            deploy: deploy.expect("deploy present when no issues were collected"),
            environments,
            observability,
            security,
            project_name,
        };

        debug!(
            project = %config.project_name,
            deploy = %config.deploy,
            environments = config.environments.len(),
            "resolved configuration"
        );

        Ok(config)
    }

    /// Validate an optional enum field against its closed value set.
    ///
    /// Absent (or blank) is allowed and falls back to the field's default.
    /// A set-but-unknown value records an issue; it is never coerced.
    fn resolve_enum<T: Default>(
        value: Option<&str>,
        field: &str,
        allowed: &[&str],
        parse: impl Fn(&str) -> Option<T>,
        issues: &mut Vec<FieldIssue>,
    ) -> T {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => T::default(),
            Some(v) => match parse(v) {
                Some(parsed) => parsed,
                None => {
                    issues.push(FieldIssue::new(
                        field,
                        format!(
                            "unknown value '{}', expected one of: {}",
                            v,
                            allowed.join(", ")
                        ),
                    ));
                    T::default()
                }
            },
        }
    }

    /// `deploy` is the one option with no default.
    fn resolve_deploy(value: Option<&str>, issues: &mut Vec<FieldIssue>) -> Option<DeployMethod> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => {
                issues.push(FieldIssue::new(
                    "deploy",
                    format!("is required, expected one of: {}", DeployMethod::VALUES.join(", ")),
                ));
                None
            }
            Some(v) => match DeployMethod::parse(v) {
                Some(deploy) => Some(deploy),
                None => {
                    issues.push(FieldIssue::new(
                        "deploy",
                        format!(
                            "unknown value '{}', expected one of: {}",
                            v,
                            DeployMethod::VALUES.join(", ")
                        ),
                    ));
                    None
                }
            },
        }
    }

    /// Split `envs` on commas, trim entries, drop empties, keep order.
    /// Duplicates are rejected strictly; names are case-sensitive.
    fn resolve_environments(value: Option<&str>, issues: &mut Vec<FieldIssue>) -> Vec<String> {
        let value = match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => return vec![SINGLE_ENV.to_string()],
            Some(v) if v == SINGLE_ENV => return vec![SINGLE_ENV.to_string()],
            Some(v) => v,
        };

        let mut environments: Vec<String> = Vec::new();
        for name in value.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            if environments.iter().any(|e| e == name) {
                issues.push(FieldIssue::new(
                    "envs",
                    format!("duplicate environment name '{}'", name),
                ));
            } else {
                environments.push(name.to_string());
            }
        }

        if environments.is_empty() {
            issues.push(FieldIssue::new(
                "envs",
                "yields no environment names once split and trimmed",
            ));
        }

        environments
    }

    /// Project names become a directory name, so they must be
    /// filesystem-safe: non-empty, no path separators, no leading dot.
    fn resolve_project_name(value: Option<&str>, issues: &mut Vec<FieldIssue>) -> String {
        let value = match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => {
                issues.push(FieldIssue::new("project_name", "must not be empty"));
                return String::new();
            }
            Some(v) => v,
        };

        if value.contains('/') || value.contains('\\') {
            issues.push(FieldIssue::new(
                "project_name",
                "must not contain path separators",
            ));
        }
        if value.starts_with('.') {
            issues.push(FieldIssue::new(
                "project_name",
                "must not start with a dot",
            ));
        }

        value.to_string()
    }
}
