//! Project generation: directory creation plus directive execution.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use forge_config::CanonicalConfig;
use forge_plan::{GenerationPlan, GenerationPlanner, RenderDirective};
use forge_templates::TemplateEngine;

use crate::error::{GenerationError, GenerationResult};

/// Outcome of a completed generation run.
#[derive(Debug)]
pub struct GenerationReport {
    /// Root of the generated project.
    pub project_path: PathBuf,
    /// Files written, in directive order.
    pub files_written: Vec<PathBuf>,
}

/// Executes a generation plan for one project.
pub struct ProjectGenerator {
    config: CanonicalConfig,
    output_dir: PathBuf,
    engine: TemplateEngine,
}

impl ProjectGenerator {
    pub fn new(
        config: CanonicalConfig,
        output_dir: impl Into<PathBuf>,
        engine: TemplateEngine,
    ) -> Self {
        Self {
            config,
            output_dir: output_dir.into(),
            engine,
        }
    }

    /// The plan this generator will execute.
    pub fn plan(&self) -> GenerationPlan {
        GenerationPlanner::plan(&self.config)
    }

    /// Root of the project this generator writes into.
    pub fn project_path(&self) -> PathBuf {
        self.output_dir.join(&self.config.project_name)
    }

    /// Plan and execute: create all directories, then render all directives.
    ///
    /// Directives already executed are left on disk when a later one fails;
    /// the error names the failing directive.
    pub fn generate(&self) -> GenerationResult<GenerationReport> {
        let plan = self.plan();
        self.execute(&plan)
    }

    /// Execute an already-computed plan (used by callers that inspected or
    /// printed the plan first).
    pub fn execute(&self, plan: &GenerationPlan) -> GenerationResult<GenerationReport> {
        let project_path = self.project_path();
        info!(project = %self.config.project_name, path = %project_path.display(), "generating project");

        for dir in &plan.directories {
            let path = project_path.join(dir);
            fs::create_dir_all(&path).map_err(|source| GenerationError::Io { path, source })?;
        }

        let base_context = self.config.template_context();

        let mut files_written = Vec::with_capacity(plan.directives.len());
        for directive in &plan.directives {
            let output = self.render_directive(&project_path, &base_context, directive)?;
            files_written.push(output);
        }

        info!(files = files_written.len(), "project generation completed");
        Ok(GenerationReport {
            project_path,
            files_written,
        })
    }

    fn render_directive(
        &self,
        project_path: &Path,
        base_context: &std::collections::HashMap<String, String>,
        directive: &RenderDirective,
    ) -> GenerationResult<PathBuf> {
        let mut context = base_context.clone();
        context.extend(directive.extra_context.clone());

        let rendered = self
            .engine
            .render(&directive.template, &context)
            .map_err(|source| GenerationError::Template {
                template: directive.template.clone(),
                output: directive.output.clone(),
                source,
            })?;

        let output = project_path.join(&directive.output);
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|source| GenerationError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&output, rendered).map_err(|source| GenerationError::Io {
            path: output.clone(),
            source,
        })?;

        if directive.executable {
            mark_executable(&output)?;
        }

        debug!(output = %directive.output.display(), "wrote file");
        Ok(output)
    }
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> GenerationResult<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|source| {
        GenerationError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> GenerationResult<()> {
    Ok(())
}
