//! Error types for BuildSpec loading.
//!
//! Responsibilities:
//! - Define error variants for every loading failure: input read, scratch
//!   file handling, and spec-store rejection.
//!
//! Does NOT handle:
//! - Recovery or retries; every failure bubbles to the caller unchanged.
//!
//! Invariants:
//! - All variants carry the path involved and the underlying cause as
//!   `#[source]`, so callers see the original io/yaml error untranslated.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a BuildSpec file.
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("Failed to read BuildSpec file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create or write scratch file for substituted BuildSpec")]
    TempFile {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to keep scratch file at {path} on disk")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse BuildSpec document at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
