//! Plan data model: render directives and the generation plan.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One unit of generation work: render `template` into `output` with the
/// per-directive `extra_context` layered over the shared config context.
///
/// Directives are constructed only by the planner and consumed exactly once
/// by the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderDirective {
    /// Template identifier, path-like with a `.j2` suffix
    /// (e.g. `ci/github-actions.yml.j2`).
    pub template: String,
    /// Output path relative to the generated project root.
    pub output: PathBuf,
    /// Per-directive variables. Empty except for per-environment fan-outs,
    /// which carry `env`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra_context: HashMap<String, String>,
    /// Whether the written file needs the executable bit (scripts).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub executable: bool,
}

impl RenderDirective {
    pub fn new(template: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            output: output.into(),
            extra_context: HashMap::new(),
            executable: false,
        }
    }

    /// Attach the fan-out environment variable.
    pub fn with_env(mut self, env: &str) -> Self {
        self.extra_context.insert("env".to_string(), env.to_string());
        self
    }

    /// Mark the output as a script needing the executable bit.
    pub fn executable(mut self) -> Self {
        self.executable = true;
        self
    }
}

/// The full ordered work list for one generation run.
///
/// Directories must all exist before any directive is rendered; beyond that
/// two-phase barrier, directives are independent of each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationPlan {
    /// Directories to create under the project root, in order.
    pub directories: Vec<PathBuf>,
    /// Render directives, in deterministic stage order.
    pub directives: Vec<RenderDirective>,
}

impl GenerationPlan {
    pub(crate) fn new(directories: Vec<PathBuf>) -> Self {
        Self {
            directories,
            directives: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, directive: RenderDirective) {
        self.directives.push(directive);
    }

    pub(crate) fn require_dir(&mut self, dir: impl Into<PathBuf>) {
        self.directories.push(dir.into());
    }

    /// Every distinct template id the plan references, in first-use order.
    pub fn templates(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for d in &self.directives {
            if !seen.contains(&d.template.as_str()) {
                seen.push(d.template.as_str());
            }
        }
        seen
    }

    /// Find the directive that produces the given output path.
    pub fn directive_for(&self, output: impl AsRef<Path>) -> Option<&RenderDirective> {
        let output = output.as_ref();
        self.directives.iter().find(|d| d.output == output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_builder() {
        let d = RenderDirective::new("deploy/vm-deploy.sh.j2", "scripts/automation/vm-deploy.sh")
            .with_env("prod")
            .executable();

        assert_eq!(d.extra_context.get("env").unwrap(), "prod");
        assert!(d.executable);
    }

    #[test]
    fn test_templates_deduplicates_in_order() {
        let mut plan = GenerationPlan::new(vec![]);
        plan.push(RenderDirective::new("a.j2", "a"));
        plan.push(RenderDirective::new("b.j2", "b"));
        plan.push(RenderDirective::new("a.j2", "a2"));

        assert_eq!(plan.templates(), vec!["a.j2", "b.j2"]);
    }

    #[test]
    fn test_directive_for() {
        let mut plan = GenerationPlan::new(vec![]);
        plan.push(RenderDirective::new("a.j2", "dir/a.txt"));

        assert!(plan.directive_for("dir/a.txt").is_some());
        assert!(plan.directive_for("dir/missing.txt").is_none());
    }
}
