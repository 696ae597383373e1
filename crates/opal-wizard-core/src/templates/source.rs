//! Template sources: compiled into the binary, or read from a local directory

use super::manifest::{TemplateManifest, MANIFEST_FILE};
use super::TemplateError;
use rust_embed::Embed;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

#[derive(Embed)]
#[folder = "../../templates/opal-tool/"]
struct OpalToolTemplate;

/// Where template files are read from
#[derive(Debug, Clone, Default)]
pub enum TemplateSource {
    /// The template shipped inside the binary
    #[default]
    Embedded,
    /// A template directory on disk (for development use)
    Local(PathBuf),
}

impl TemplateSource {
    pub fn from_dir(dir: Option<PathBuf>) -> Self {
        dir.map(Self::Local).unwrap_or_default()
    }

    /// Human-readable origin for log messages
    pub fn describe(&self) -> String {
        match self {
            Self::Embedded => "built-in template".to_string(),
            Self::Local(path) => path.display().to_string(),
        }
    }

    /// Read a template-relative file. `Ok(None)` means the file doesn't exist.
    pub async fn read(&self, path: &str) -> Result<Option<Vec<u8>>, TemplateError> {
        match self {
            Self::Embedded => Ok(OpalToolTemplate::get(path).map(|file| file.data.into_owned())),
            Self::Local(root) => {
                let full_path = root.join(path);
                match fs::read(&full_path).await {
                    Ok(bytes) => Ok(Some(bytes)),
                    Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                    Err(source) => Err(TemplateError::Read {
                        path: full_path,
                        source,
                    }),
                }
            }
        }
    }

    /// Load and validate the template manifest
    pub async fn manifest(&self) -> Result<TemplateManifest, TemplateError> {
        let bytes = self
            .read(MANIFEST_FILE)
            .await?
            .ok_or_else(|| TemplateError::ManifestMissing(self.describe()))?;
        TemplateManifest::parse(&String::from_utf8_lossy(&bytes))
    }
}
