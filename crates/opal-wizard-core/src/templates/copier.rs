//! Template file copying with token substitution

use super::manifest::TemplateManifest;
use super::source::TemplateSource;
use super::tokens::TemplateTokens;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Copy every manifest file into `target_dir`, substituting tokens.
///
/// Files missing from the source are skipped. Non-UTF-8 files are copied
/// byte for byte. Returns the destination paths that were written.
pub async fn copy_template(
    source: &TemplateSource,
    manifest: &TemplateManifest,
    target_dir: &Path,
    tokens: &TemplateTokens,
) -> Result<Vec<String>> {
    fs::create_dir_all(target_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", target_dir.display()))?;

    let mut copied_files = Vec::new();

    for file in &manifest.files {
        let Some(content) = source.read(file.source()).await? else {
            continue;
        };

        let target_path = target_dir.join(file.destination());
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = match String::from_utf8(content) {
            Ok(text) => tokens.apply(&text).into_bytes(),
            Err(raw) => raw.into_bytes(),
        };

        fs::write(&target_path, &content)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

        copied_files.push(file.destination().to_string());
    }

    Ok(copied_files)
}
