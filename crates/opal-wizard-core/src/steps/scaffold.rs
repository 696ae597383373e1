//! Copy the template into the target directory

use super::dry_run_tag;
use crate::context::Context;
use crate::product::ProductConfig;
use crate::templates::{check_compatibility, copy_template, TemplateSource, TemplateTokens};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub async fn run<C: ProductConfig>(config: &C, ctx: &mut Context) -> Result<()> {
    let source = TemplateSource::from_dir(ctx.template_dir.clone());
    let manifest = source.manifest().await?;

    if let Some(warning) = check_compatibility(
        config.version(),
        &manifest.version,
        &format!("Consider upgrading {}.", config.name()),
    ) {
        cliclack::log::warning(warning)?;
    }

    let tokens = TemplateTokens::from_context(ctx);

    if ctx.dry_run {
        cliclack::log::info(format!(
            "{} Would scaffold {} into {}",
            dry_run_tag(),
            source.describe(),
            ctx.cwd.bold()
        ))?;
        let substitutions = tokens
            .pairs()
            .iter()
            .map(|(token, value)| format!("  {} -> {}", token, value))
            .collect::<Vec<_>>()
            .join("\n");
        cliclack::log::info(format!(
            "{} Template substitutions:\n{}",
            dry_run_tag(),
            substitutions
        ))?;
        return Ok(());
    }

    let target_dir = Path::new(&ctx.cwd);
    let spinner = cliclack::spinner();
    spinner.start("Copying template files...");

    match copy_template(&source, &manifest, target_dir, &tokens).await {
        Ok(copied_files) => {
            spinner.stop(format!(
                "Created {} files in {}",
                copied_files.len(),
                ctx.display_dir()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Failed to scaffold project");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::testing::TestProduct;
    use std::fs;

    fn ctx_for(cwd: &Path) -> Context {
        Context {
            cwd: cwd.to_str().unwrap().to_string(),
            app_id: "scaffold-test".to_string(),
            tracker_id: "TRK".to_string(),
            ..Context::default()
        }
    }

    #[tokio::test]
    async fn test_scaffolds_embedded_template() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("out");
        let mut ctx = ctx_for(&target);

        run(&TestProduct, &mut ctx).await.unwrap();

        let app_yml = fs::read_to_string(target.join("app.yml")).unwrap();
        assert!(app_yml.contains("scaffold-test"));
        assert!(target.join(".gitignore").exists());
        assert!(!target.join("template.yaml").exists());
    }

    #[tokio::test]
    async fn test_uses_local_template_dir() {
        let template = tempfile::tempdir().unwrap();
        fs::write(
            template.path().join("template.yaml"),
            "name: local\nversion: 0.1.0\nfiles:\n  - hello.txt\n",
        )
        .unwrap();
        fs::write(template.path().join("hello.txt"), "hi {{APP_ID}}").unwrap();

        let tmp = tempfile::tempdir().unwrap();
        let mut ctx = ctx_for(tmp.path());
        ctx.template_dir = Some(template.path().to_path_buf());

        run(&TestProduct, &mut ctx).await.unwrap();
        assert_eq!(
            fs::read_to_string(tmp.path().join("hello.txt")).unwrap(),
            "hi scaffold-test"
        );
    }

    #[tokio::test]
    async fn test_missing_manifest_is_an_error() {
        let template = tempfile::tempdir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        let mut ctx = ctx_for(&tmp.path().join("out"));
        ctx.template_dir = Some(template.path().to_path_buf());

        assert!(run(&TestProduct, &mut ctx).await.is_err());
        assert!(!tmp.path().join("out").exists());
    }

    #[tokio::test]
    async fn test_dry_run_touches_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("out");
        let mut ctx = ctx_for(&target);
        ctx.dry_run = true;

        run(&TestProduct, &mut ctx).await.unwrap();
        assert!(!target.exists());
    }
}
