//! Deployment context for BuildSpec loading.
//!
//! Responsibilities:
//! - Carry the resolved AWS account id, region, and autoload flag as an
//!   explicit value injected into the loader, instead of ambient globals.
//! - Build the placeholder map handed to the substitution path.
//!
//! Does NOT handle:
//! - File I/O or spec-store interaction (see loader.rs / store.rs).
//!
//! Invariants:
//! - The context is immutable after construction; `load` only reads it.
//! - Autoload defaults to `account == TEAM_ACCOUNT`: team-account
//!   deployments pick up BuildSpec changes without a redeployment.

use crate::constants::{
    DEFAULT_REGION, ENV_DEPLOY_ACCOUNT, ENV_DEPLOY_REGION, TEAM_ACCOUNT,
};
use crate::placeholder::PlaceholderMap;

/// Deployment values consulted by [`crate::SpecLoader`].
#[derive(Clone, Debug)]
pub struct DeploymentContext {
    aws_account: String,
    aws_region: String,
    autoload: bool,
}

impl DeploymentContext {
    /// Create a context for the given account and region.
    ///
    /// The autoload flag is derived from the account: deployments into the
    /// team account load BuildSpec changes straight from the pipeline
    /// source, everything else goes through placeholder substitution.
    pub fn new(aws_account: impl Into<String>, aws_region: impl Into<String>) -> Self {
        let aws_account = aws_account.into();
        let autoload = aws_account == TEAM_ACCOUNT;
        Self {
            aws_account,
            aws_region: aws_region.into(),
            autoload,
        }
    }

    /// Override the derived autoload flag.
    pub fn with_autoload(mut self, autoload: bool) -> Self {
        self.autoload = autoload;
        self
    }

    /// Build a context from `CDK_DEPLOY_ACCOUNT` / `CDK_DEPLOY_REGION`,
    /// falling back to the team account and default region when a variable
    /// is unset, empty, or whitespace-only.
    pub fn from_env() -> Self {
        let account = env_var_or_default(ENV_DEPLOY_ACCOUNT, TEAM_ACCOUNT);
        let region = env_var_or_default(ENV_DEPLOY_REGION, DEFAULT_REGION);
        let context = Self::new(account, region);
        tracing::debug!(
            account = %context.aws_account,
            region = %context.aws_region,
            autoload = context.autoload,
            "Resolved deployment context from environment"
        );
        context
    }

    pub fn aws_account(&self) -> &str {
        &self.aws_account
    }

    pub fn aws_region(&self) -> &str {
        &self.aws_region
    }

    /// Whether BuildSpec files are resolved from the pipeline source
    /// checkout rather than substituted and uploaded as assets.
    pub fn autoload(&self) -> bool {
        self.autoload
    }

    /// The token -> value map applied on the substitution path:
    /// team account placeholder to the resolved account id, default region
    /// placeholder to the resolved region.
    pub fn placeholder_map(&self) -> PlaceholderMap {
        let mut map = PlaceholderMap::new();
        map.insert(TEAM_ACCOUNT, self.aws_account.clone());
        map.insert(DEFAULT_REGION, self.aws_region.clone());
        map
    }
}

/// Read an environment variable, returning the default if unset, empty, or
/// whitespace-only. The value is trimmed.
fn env_var_or_default(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                default.to_string()
            } else if trimmed.len() == value.len() {
                value
            } else {
                trimmed.to_string()
            }
        }
        Err(_) => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_account_derives_autoload() {
        let context = DeploymentContext::new(TEAM_ACCOUNT, DEFAULT_REGION);
        assert!(context.autoload());
    }

    #[test]
    fn test_other_account_disables_autoload() {
        let context = DeploymentContext::new("111122223333", "us-east-1");
        assert!(!context.autoload());
    }

    #[test]
    fn test_with_autoload_overrides_derivation() {
        let context = DeploymentContext::new("111122223333", "us-east-1").with_autoload(true);
        assert!(context.autoload());
    }

    #[test]
    fn test_placeholder_map_entries() {
        let context = DeploymentContext::new("111122223333", "eu-west-1");
        let map = context.placeholder_map();
        let entries: Vec<_> = map.iter().collect();
        assert_eq!(
            entries,
            vec![
                (TEAM_ACCOUNT, "111122223333"),
                (DEFAULT_REGION, "eu-west-1"),
            ]
        );
    }
}
