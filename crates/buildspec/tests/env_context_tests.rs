//! Environment variable tests for deployment-context construction.
//!
//! Responsibilities:
//! - Test `DeploymentContext::from_env` with set, unset, empty, and
//!   whitespace-only deployment variables.
//! - Test autoload derivation from the resolved account.

use cdk_buildspec::DeploymentContext;
use serial_test::serial;

#[test]
#[serial]
fn test_from_env_reads_account_and_region() {
    temp_env::with_vars(
        [
            ("CDK_DEPLOY_ACCOUNT", Some("111122223333")),
            ("CDK_DEPLOY_REGION", Some("eu-west-1")),
        ],
        || {
            let context = DeploymentContext::from_env();
            assert_eq!(context.aws_account(), "111122223333");
            assert_eq!(context.aws_region(), "eu-west-1");
            assert!(!context.autoload());
        },
    );
}

#[test]
#[serial]
fn test_from_env_defaults_to_team_account() {
    temp_env::with_vars(
        [
            ("CDK_DEPLOY_ACCOUNT", None::<&str>),
            ("CDK_DEPLOY_REGION", None::<&str>),
        ],
        || {
            let context = DeploymentContext::from_env();
            assert_eq!(
                context.aws_account(),
                cdk_buildspec::constants::TEAM_ACCOUNT
            );
            assert_eq!(
                context.aws_region(),
                cdk_buildspec::constants::DEFAULT_REGION
            );
            // Team-account deployments autoload spec changes.
            assert!(context.autoload());
        },
    );
}

#[test]
#[serial]
fn test_empty_env_vars_fall_back_to_defaults() {
    temp_env::with_vars(
        [
            ("CDK_DEPLOY_ACCOUNT", Some("   ")),
            ("CDK_DEPLOY_REGION", Some("")),
        ],
        || {
            let context = DeploymentContext::from_env();
            assert_eq!(
                context.aws_account(),
                cdk_buildspec::constants::TEAM_ACCOUNT
            );
            assert_eq!(
                context.aws_region(),
                cdk_buildspec::constants::DEFAULT_REGION
            );
        },
    );
}

#[test]
#[serial]
fn test_env_values_are_trimmed() {
    temp_env::with_vars(
        [
            ("CDK_DEPLOY_ACCOUNT", Some(" 111122223333 ")),
            ("CDK_DEPLOY_REGION", Some(" ap-southeast-2")),
        ],
        || {
            let context = DeploymentContext::from_env();
            assert_eq!(context.aws_account(), "111122223333");
            assert_eq!(context.aws_region(), "ap-southeast-2");
        },
    );
}
