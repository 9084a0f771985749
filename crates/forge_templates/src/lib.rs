//! # forge_templates
//!
//! Template loading and rendering for ForgeOps.
//!
//! Templates are plain text files under a templates root, addressed by a
//! path-like id (e.g. `ci/github-actions.yml.j2`). Rendering substitutes
//! `{{variable}}` occurrences from a string map and is strict: a reference
//! to a variable the context does not provide is a render error, not a
//! silently passed-through placeholder.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//! use forge_templates::TemplateEngine;
//!
//! let engine = TemplateEngine::new("templates");
//! let mut ctx = HashMap::new();
//! ctx.insert("project_name".to_string(), "demo".to_string());
//!
//! let text = engine.render("README.md.j2", &ctx).unwrap();
//! ```

pub mod engine;
pub mod error;

pub use engine::TemplateEngine;
pub use error::{TemplateError, TemplateResult};
