//! Centralized constants for the BuildSpec loader.
//!
//! This module contains the placeholder tokens and path constants shared by
//! the deployment context and the loader, to avoid magic string duplication.

// =============================================================================
// Placeholder Tokens
// =============================================================================

/// Team account id, used verbatim as a placeholder inside BuildSpec files.
///
/// Deployments into this account pick up BuildSpec changes automatically;
/// every other account needs the substitution path.
pub const TEAM_ACCOUNT: &str = "123456789012";

/// Default region token, used verbatim as a placeholder inside BuildSpec files.
pub const DEFAULT_REGION: &str = "us-west-2";

// =============================================================================
// Path Resolution
// =============================================================================

/// Project-relative prefix prepended to BuildSpec filenames when the spec is
/// resolved from the pipeline source checkout instead of a local asset.
pub const CDK_SOURCE_PREFIX: &str = "tests/ci/cdk/";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable holding the target AWS account id.
pub const ENV_DEPLOY_ACCOUNT: &str = "CDK_DEPLOY_ACCOUNT";

/// Environment variable holding the target AWS region.
pub const ENV_DEPLOY_REGION: &str = "CDK_DEPLOY_REGION";
