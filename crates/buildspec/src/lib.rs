//! BuildSpec loading for the CI CDK pipeline.
//!
//! This crate turns a CodeBuild BuildSpec YAML file into an opaque spec
//! handle consumed by the CDK stack definitions, substituting the team
//! account and default region placeholders with the concrete deployment
//! values when the deployment cannot autoload spec changes.

pub mod constants;
mod context;
mod error;
mod loader;
mod placeholder;
mod store;

pub use context::DeploymentContext;
pub use error::SpecError;
pub use loader::SpecLoader;
pub use placeholder::PlaceholderMap;
pub use store::{CodeBuildSpecStore, SpecHandle, SpecStore};
