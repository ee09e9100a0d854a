//! BuildSpec loader: branch selection and placeholder substitution.
//!
//! Responsibilities:
//! - Pick the loading strategy from the deployment context: source-filename
//!   resolution when the deployment can autoload, substitution into a
//!   scratch asset otherwise.
//! - On the substitution path, read the input, apply the placeholder map,
//!   and hand a persisted scratch file to the store.
//!
//! Does NOT handle:
//! - YAML validation (see store.rs) or context resolution (see context.rs).
//!
//! Invariants:
//! - The input file is never modified.
//! - The autoload branch performs no local file I/O.
//! - The scratch file is uniquely named and left on disk after the call;
//!   the asset consumer may still need it once `load` has returned.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::constants::CDK_SOURCE_PREFIX;
use crate::context::DeploymentContext;
use crate::error::SpecError;
use crate::store::{SpecHandle, SpecStore};

/// Loads BuildSpec YAML files into spec handles for the CDK stacks.
pub struct SpecLoader<S: SpecStore> {
    context: DeploymentContext,
    store: S,
}

impl<S: SpecStore> SpecLoader<S> {
    /// Create a loader for the given deployment context and spec store.
    pub fn new(context: DeploymentContext, store: S) -> Self {
        Self { context, store }
    }

    pub fn context(&self) -> &DeploymentContext {
        &self.context
    }

    /// Load the BuildSpec file at `file_path`.
    ///
    /// When the deployment can autoload, the path is prefixed with the CDK
    /// source directory and resolved by the store at build time, so spec
    /// changes land without a redeployment. Otherwise the file is read,
    /// the team account and default region placeholders are substituted,
    /// and the result is handed to the store as a local asset.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Read`] if the input cannot be read,
    /// [`SpecError::TempFile`] / [`SpecError::Persist`] if the scratch file
    /// cannot be created or kept, and whatever the store raises for a
    /// malformed document, unchanged.
    pub fn load(&self, file_path: impl AsRef<Path>) -> Result<SpecHandle, SpecError> {
        let file_path = file_path.as_ref();

        if self.context.autoload() {
            let filename = format!("{CDK_SOURCE_PREFIX}{}", file_path.display());
            tracing::debug!(filename = %filename, "Resolving BuildSpec from pipeline source");
            return self.store.from_source_filename(&filename);
        }

        let text =
            std::fs::read_to_string(file_path).map_err(|source| SpecError::Read {
                path: file_path.to_path_buf(),
                source,
            })?;
        let substituted = self.context.placeholder_map().apply(&text);

        let mut scratch =
            NamedTempFile::new().map_err(|source| SpecError::TempFile { source })?;
        scratch
            .write_all(substituted.as_bytes())
            .map_err(|source| SpecError::TempFile { source })?;
        let (_, scratch_path) = scratch.keep().map_err(|e| SpecError::Persist {
            path: e.file.path().to_path_buf(),
            source: e.error,
        })?;

        tracing::debug!(
            input = %file_path.display(),
            scratch = %scratch_path.display(),
            "Substituted BuildSpec placeholders into scratch asset"
        );
        self.store.from_asset(&scratch_path)
    }
}
