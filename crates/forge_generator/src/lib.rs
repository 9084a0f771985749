//! # forge_generator
//!
//! Plan execution for ForgeOps: takes the plan produced by
//! [`forge_plan::GenerationPlanner`] and materializes it on disk through the
//! template engine. Two phases, in order: create every required directory,
//! then render and write every directive. Nothing written by earlier
//! directives is rolled back when a later one fails.
//!
//! ## Example
//!
//! ```rust,no_run
//! use forge_config::{ConfigResolver, RawOptions};
//! use forge_generator::ProjectGenerator;
//! use forge_templates::TemplateEngine;
//!
//! let raw = RawOptions {
//!     deploy: Some("docker".into()),
//!     project_name: Some("demo".into()),
//!     ..Default::default()
//! };
//! let config = ConfigResolver::resolve(&raw).unwrap();
//! let engine = TemplateEngine::new("templates");
//!
//! let generator = ProjectGenerator::new(config, ".", engine);
//! let report = generator.generate().unwrap();
//! println!("created {} files", report.files_written.len());
//! ```

pub mod error;
pub mod generator;

pub use error::{GenerationError, GenerationResult};
pub use generator::{GenerationReport, ProjectGenerator};
