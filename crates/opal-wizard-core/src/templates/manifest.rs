//! Template manifest types and parsing

use super::TemplateError;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

/// Manifest file name at the root of every template
pub const MANIFEST_FILE: &str = "template.yaml";

/// One file to copy. Either a bare path, or a `source`/`dest` pair for files
/// that can't be stored under their final name (e.g. `.gitignore`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateFile {
    Path(String),
    Mapped {
        source: String,
        #[serde(default)]
        dest: Option<String>,
    },
}

impl TemplateFile {
    /// Path inside the template
    pub fn source(&self) -> &str {
        match self {
            Self::Path(path) => path,
            Self::Mapped { source, .. } => source,
        }
    }

    /// Path inside the generated project (falls back to source)
    pub fn destination(&self) -> &str {
        match self {
            Self::Path(path) => path,
            Self::Mapped { source, dest } => dest.as_deref().unwrap_or(source),
        }
    }
}

/// Template manifest (`template.yaml`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Display name of the template
    pub name: String,

    /// Description of what the template provides
    #[serde(default)]
    pub description: String,

    /// Minimum wizard version the template was written for
    pub version: String,

    /// Explicit list of files to copy, in order
    pub files: Vec<TemplateFile>,
}

impl TemplateManifest {
    pub fn parse(content: &str) -> Result<Self, TemplateError> {
        let manifest: Self = serde_yaml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Reject paths that would escape the template or the target directory
    fn validate(&self) -> Result<(), TemplateError> {
        for file in &self.files {
            for path in [file.source(), file.destination()] {
                if !is_safe_relative(path) {
                    return Err(TemplateError::UnsafePath(path.to_string()));
                }
            }
        }
        Ok(())
    }
}

fn is_safe_relative(path: &str) -> bool {
    !path.is_empty()
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
