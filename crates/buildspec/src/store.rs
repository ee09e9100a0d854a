//! Spec-store strategies and the opaque spec handle.
//!
//! Responsibilities:
//! - Define the [`SpecStore`] seam with the two loading strategies the
//!   pipeline offers: resolve-by-source-filename and load-by-asset-path.
//! - Provide [`CodeBuildSpecStore`], the default implementation used by the
//!   CDK stacks.
//!
//! Does NOT handle:
//! - Placeholder substitution or branch selection (see loader.rs).
//!
//! Invariants:
//! - `from_source_filename` never touches the local filesystem; resolution
//!   happens in the pipeline at build time.
//! - The handle is opaque to the loader; only pipeline consumers and tests
//!   read its accessors.

use std::path::{Path, PathBuf};

use crate::error::SpecError;

/// A loaded BuildSpec reference, produced by a [`SpecStore`].
#[derive(Clone, Debug)]
pub struct SpecHandle {
    source: SpecSource,
}

#[derive(Clone, Debug)]
enum SpecSource {
    /// Filename resolved from the pipeline source checkout at build time.
    SourceFilename(String),
    /// Local file uploaded to the pipeline as an asset.
    Asset(PathBuf),
}

impl SpecHandle {
    /// The source-checkout filename, if this handle was built by
    /// [`SpecStore::from_source_filename`].
    pub fn source_filename(&self) -> Option<&str> {
        match &self.source {
            SpecSource::SourceFilename(name) => Some(name),
            SpecSource::Asset(_) => None,
        }
    }

    /// The local asset path, if this handle was built by
    /// [`SpecStore::from_asset`].
    pub fn asset_path(&self) -> Option<&Path> {
        match &self.source {
            SpecSource::SourceFilename(_) => None,
            SpecSource::Asset(path) => Some(path),
        }
    }
}

/// Strategy seam for turning a BuildSpec reference into a [`SpecHandle`].
pub trait SpecStore {
    /// Build a handle that resolves `filename` from the pipeline source
    /// checkout at build time. No local file I/O.
    fn from_source_filename(&self, filename: &str) -> Result<SpecHandle, SpecError>;

    /// Build a handle that treats `path` as a standalone local asset.
    fn from_asset(&self, path: &Path) -> Result<SpecHandle, SpecError>;
}

impl<S: SpecStore + ?Sized> SpecStore for &S {
    fn from_source_filename(&self, filename: &str) -> Result<SpecHandle, SpecError> {
        (**self).from_source_filename(filename)
    }

    fn from_asset(&self, path: &Path) -> Result<SpecHandle, SpecError> {
        (**self).from_asset(path)
    }
}

/// Default spec store used by the CDK stacks.
///
/// The asset strategy reads the file and rejects documents that are not
/// well-formed YAML before the pipeline ever sees them; the source-filename
/// strategy records the reference untouched.
#[derive(Clone, Debug, Default)]
pub struct CodeBuildSpecStore;

impl CodeBuildSpecStore {
    pub fn new() -> Self {
        Self
    }
}

impl SpecStore for CodeBuildSpecStore {
    fn from_source_filename(&self, filename: &str) -> Result<SpecHandle, SpecError> {
        Ok(SpecHandle {
            source: SpecSource::SourceFilename(filename.to_string()),
        })
    }

    fn from_asset(&self, path: &Path) -> Result<SpecHandle, SpecError> {
        let text = std::fs::read_to_string(path).map_err(|source| SpecError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str::<serde_yaml::Value>(&text).map_err(|source| SpecError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(SpecHandle {
            source: SpecSource::Asset(path.to_path_buf()),
        })
    }
}
