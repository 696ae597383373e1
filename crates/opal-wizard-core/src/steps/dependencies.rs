//! Dependency installation, deliberately left to the user
//!
//! The generated project must be installed with the product's required
//! package manager (Yarn 1.x for OCP), which the wizard can't guarantee, so
//! this step never installs anything.

use super::dry_run_tag;
use crate::context::Context;
use crate::product::ProductConfig;
use anyhow::Result;
use colored::Colorize;

pub fn run<C: ProductConfig>(config: &C, ctx: &mut Context) -> Result<()> {
    let required = config.required_package_manager();

    if ctx.install == Some(true) {
        cliclack::log::warning(format!(
            "Automatic installation is not supported. Run {} manually.",
            required.install_command().bold()
        ))?;
    }

    ctx.install = Some(false);

    if ctx.package_manager != required {
        cliclack::log::remark(format!(
            "Launched with {}; this project must be installed with {}.",
            ctx.package_manager,
            required.to_string().bold()
        ))?;
    }

    if ctx.dry_run {
        cliclack::log::info(format!("{} Skipping dependency installation", dry_run_tag()))?;
    }

    Ok(())
}
