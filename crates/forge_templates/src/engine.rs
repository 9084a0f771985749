//! File-backed template engine with `{{variable}}` substitution.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use regex::Regex;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{TemplateError, TemplateResult};

/// Loads templates from a directory tree and renders them against a string
/// variable map.
pub struct TemplateEngine {
    root: PathBuf,
    variable_pattern: Regex,
}

impl TemplateEngine {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            // Match {{variable_name}} pattern
            variable_pattern: Regex::new(r"\{\{([a-zA-Z_][a-zA-Z0-9_]*)\}\}").unwrap(),
        }
    }

    /// Whether a template with the given id exists under the root.
    pub fn exists(&self, template_id: &str) -> bool {
        self.root.join(template_id).is_file()
    }

    /// Render a template by id against the given context.
    ///
    /// Fails with [`TemplateError::NotFound`] when the id does not resolve to
    /// a file, and with [`TemplateError::Render`] when the template
    /// references a variable missing from the context.
    pub fn render(
        &self,
        template_id: &str,
        context: &HashMap<String, String>,
    ) -> TemplateResult<String> {
        let path = self.root.join(template_id);
        if !path.is_file() {
            return Err(TemplateError::NotFound(template_id.to_string()));
        }

        let source = fs::read_to_string(&path)?;
        let rendered = self.render_content(template_id, &source, context)?;

        debug!(template = template_id, "rendered template");
        Ok(rendered)
    }

    /// Substitute `{{variable}}` occurrences in already-loaded content.
    pub fn render_content(
        &self,
        template_id: &str,
        content: &str,
        context: &HashMap<String, String>,
    ) -> TemplateResult<String> {
        let mut missing = Vec::new();
        let rendered = self
            .variable_pattern
            .replace_all(content, |caps: &regex::Captures| {
                let name = &caps[1];
                match context.get(name) {
                    Some(value) => value.clone(),
                    None => {
                        missing.push(name.to_string());
                        String::new()
                    }
                }
            })
            .to_string();

        if missing.is_empty() {
            Ok(rendered)
        } else {
            missing.sort();
            missing.dedup();
            Err(TemplateError::Render {
                template: template_id.to_string(),
                message: format!("missing variables: {}", missing.join(", ")),
            })
        }
    }

    /// All template ids under the root, sorted for stable output.
    pub fn available(&self) -> Vec<String> {
        let mut ids: Vec<String> = WalkDir::new(&self.root)
            .min_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                e.path()
                    .strip_prefix(&self.root)
                    .ok()
                    .map(|p| p.to_string_lossy().replace('\\', "/"))
            })
            .filter(|id| id.ends_with(".j2"))
            .collect();
        ids.sort();
        ids
    }
}
