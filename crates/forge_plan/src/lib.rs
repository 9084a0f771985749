//! # forge_plan
//!
//! Generation-plan resolution for ForgeOps.
//!
//! [`GenerationPlanner`] turns a validated [`forge_config::CanonicalConfig`]
//! into an ordered list of render directives plus the directory set that must
//! exist before rendering. Planning is pure: no I/O, no clock, no
//! randomness — the same config always yields the same plan, in the same
//! order, so generated trees diff cleanly between runs.
//!
//! ## Example
//!
//! ```rust
//! use forge_config::{ConfigResolver, RawOptions};
//! use forge_plan::GenerationPlanner;
//!
//! let raw = RawOptions {
//!     deploy: Some("docker".into()),
//!     project_name: Some("demo".into()),
//!     ..Default::default()
//! };
//! let config = ConfigResolver::resolve(&raw).unwrap();
//! let plan = GenerationPlanner::plan(&config);
//!
//! assert!(plan.directives.iter().any(|d| d.template == "deploy/Dockerfile.j2"));
//! ```

pub mod directive;
pub mod planner;

pub use directive::{GenerationPlan, RenderDirective};
pub use planner::GenerationPlanner;
