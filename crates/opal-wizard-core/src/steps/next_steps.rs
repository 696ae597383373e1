//! Closing instructions

use super::dry_run_tag;
use crate::context::Context;
use crate::product::ProductConfig;
use anyhow::Result;
use colored::Colorize;

pub fn run<C: ProductConfig>(config: &C, ctx: &Context) -> Result<()> {
    if let Some((title, lines)) = config.setup_note() {
        cliclack::note(title, lines.join("\n"))?;
    }

    cliclack::note("Success!", config.next_steps(ctx).join("\n"))?;

    if ctx.dry_run {
        cliclack::log::info(format!(
            "{} No files were written and no commands were run.",
            dry_run_tag()
        ))?;
    }

    cliclack::outro(format!(
        "Problems? {}",
        config.issues_url().cyan().underline()
    ))?;

    Ok(())
}
