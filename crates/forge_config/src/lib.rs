//! # forge_config
//!
//! Configuration model and option resolution for ForgeOps.
//!
//! This crate turns a sparse, user-supplied option bag ([`RawOptions`]) into a
//! validated, defaulted, normalized [`CanonicalConfig`]. Resolution collects
//! every offending field before failing, so a caller can report all problems
//! in one pass.
//!
//! ## Example
//!
//! ```rust
//! use forge_config::{ConfigResolver, RawOptions};
//!
//! let raw = RawOptions {
//!     deploy: Some("kubernetes".into()),
//!     envs: Some("dev,stage,prod".into()),
//!     project_name: Some("my-platform".into()),
//!     ..Default::default()
//! };
//!
//! let config = ConfigResolver::resolve(&raw).unwrap();
//! assert!(config.has_kubernetes());
//! assert_eq!(config.environments, vec!["dev", "stage", "prod"]);
//! ```

pub mod config;
pub mod error;
pub mod options;
pub mod resolver;

pub use config::CanonicalConfig;
pub use error::{FieldIssue, ValidationError, ValidationResult};
pub use options::{
    CiPlatform, DeployMethod, InfraTool, ObservabilityLevel, RawOptions, SecurityLevel,
};
pub use resolver::ConfigResolver;
