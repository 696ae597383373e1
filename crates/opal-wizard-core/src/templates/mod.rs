//! Template loading, token substitution, and copying
//!
//! This module provides:
//! - The template manifest (`template.yaml`) and its file entries
//! - Template sources: embedded in the binary or a local directory
//! - `{{TOKEN}}` placeholder substitution
//! - Copying a template into the target directory
//! - Version compatibility checking

pub mod copier;
pub mod manifest;
pub mod source;
pub mod tokens;
pub mod version;

use std::path::PathBuf;
use thiserror::Error;

pub use copier::copy_template;
pub use manifest::{TemplateFile, TemplateManifest, MANIFEST_FILE};
pub use source::TemplateSource;
pub use tokens::TemplateTokens;
pub use version::check_compatibility;

/// Errors raised while loading or reading a template
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template manifest '{0}' not found")]
    ManifestMissing(String),

    #[error("failed to parse template manifest: {0}")]
    ManifestParse(#[from] serde_yaml::Error),

    #[error("failed to read template file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template path '{0}' must be relative and stay inside the template")]
    UnsafePath(String),
}
