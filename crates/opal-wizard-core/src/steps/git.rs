//! Optional git repository initialization

use super::{dry_run_tag, prompt, Flow};
use crate::context::Context;
use crate::product::ProductConfig;
use crate::shell::{command_exists, shell, ShellOptions};
use anyhow::{bail, Result};
use colored::Colorize;

pub async fn run<C: ProductConfig>(config: &C, ctx: &mut Context) -> Result<Flow> {
    if !command_exists("git") {
        return skip_without_git(ctx);
    }

    let init = match ctx.git {
        Some(decided) => decided,
        None if ctx.yes => true,
        None => {
            let answer = cliclack::confirm("Initialize a git repository?")
                .initial_value(true)
                .interact();
            let Some(answer) = prompt(answer)? else {
                return Ok(Flow::Exit(0));
            };
            answer
        }
    };
    ctx.git = Some(init);

    if !init {
        return Ok(Flow::Continue);
    }

    if ctx.dry_run {
        cliclack::log::info(format!(
            "{} Would run git init, git add -A and git commit in {}",
            dry_run_tag(),
            ctx.display_dir()
        ))?;
        return Ok(Flow::Continue);
    }

    let spinner = cliclack::spinner();
    spinner.start("Initializing git repository...");

    match init_repository(&ctx.cwd, config.commit_message()).await {
        Ok(()) => spinner.stop("Initialized git repository"),
        Err(e) => {
            spinner.stop("Git initialization failed");
            cliclack::log::warning(format!(
                "{} {}",
                "Could not initialize git repository:".yellow(),
                e
            ))?;
        }
    }

    Ok(Flow::Continue)
}

fn skip_without_git(ctx: &mut Context) -> Result<Flow> {
    cliclack::log::warning("Git is not installed. Skipping repository initialization.")?;
    ctx.git = Some(false);
    Ok(Flow::Continue)
}

/// `git init`, `git add -A`, `git commit -m <message>` inside `dir`
async fn init_repository(dir: &str, commit_message: &str) -> Result<()> {
    let options = ShellOptions::in_dir(dir);
    let commands: [&[&str]; 3] = [
        &["init"],
        &["add", "-A"],
        &["commit", "-m", commit_message],
    ];

    for args in commands {
        let result = shell("git", args, &options).await;
        if !result.success() {
            let detail = result.stderr.trim();
            bail!(
                "git {} exited with code {}{}",
                args[0],
                result.exit_code,
                if detail.is_empty() {
                    String::new()
                } else {
                    format!(": {}", detail)
                }
            );
        }
    }

    Ok(())
}
