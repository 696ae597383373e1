//! Resolve the target directory and the project name derived from it

use super::{dry_run_tag, prompt, Flow};
use crate::context::Context;
use crate::product::ProductConfig;
use crate::validation::{has_non_printable_chars, is_empty, to_valid_app_id};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

const DEFAULT_DIR: &str = "./my-ocp-opal-tool";

const ADJECTIVES: &[&str] = &["smart", "fast", "clever", "bright", "swift", "agile"];
const NOUNS: &[&str] = &["tool", "helper", "assistant", "agent", "bot", "service"];

pub async fn run<C: ProductConfig>(config: &C, ctx: &mut Context) -> Result<Flow> {
    if !ctx.cwd.is_empty() {
        if is_empty(&ctx.cwd) {
            ctx.project_name = extract_project_name(&ctx.cwd);
            cliclack::log::info(format!(
                "{} Using {} as project directory",
                "Directory:".cyan(),
                ctx.cwd.bold()
            ))?;
            return Ok(Flow::Continue);
        }

        // Never scaffold into a non-empty directory
        cliclack::log::warning(format!(
            "{} is not empty! Choosing another directory.",
            format!("\"{}\"", ctx.cwd).yellow()
        ))?;
    }

    if ctx.yes {
        ctx.project_name = generate_project_name(config.project_prefix());
        ctx.cwd = format!("./{}", ctx.project_name);
        cliclack::log::info(format!(
            "{} Creating project at {}",
            "Directory:".cyan(),
            ctx.cwd.bold()
        ))?;
        return Ok(Flow::Continue);
    }

    let input = cliclack::input(format!("Where should we create your {}?", config.display_name()))
        .placeholder(DEFAULT_DIR)
        .default_input(DEFAULT_DIR)
        .validate(|value: &String| validate_directory(value))
        .interact();

    let Some(dir) = prompt::<String>(input)? else {
        return Ok(Flow::Exit(0));
    };

    ctx.cwd = dir.trim().to_string();
    ctx.project_name = extract_project_name(&ctx.cwd);

    if ctx.dry_run {
        cliclack::log::info(format!("{} Would create project at {}", dry_run_tag(), ctx.cwd))?;
    }

    Ok(Flow::Continue)
}

fn validate_directory(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err("Please enter a directory name")
    } else if has_non_printable_chars(value) {
        Err("Invalid characters in directory name")
    } else if !is_empty(value.trim()) {
        Err("Directory is not empty!")
    } else {
        Ok(())
    }
}

/// Derive an app-id-shaped name from the last path segment
/// (`.` and `./` use the current directory's name)
pub fn extract_project_name(cwd: &str) -> String {
    let name = if cwd == "." || cwd == "./" {
        std::env::current_dir()
            .ok()
            .and_then(|dir| dir.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_default()
    } else {
        Path::new(cwd)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| cwd.to_string())
    };

    to_valid_app_id(&name)
}

/// Random `<prefix>-<adjective>-<noun>-<0..999>` name
pub fn generate_project_name(prefix: &str) -> String {
    let adjective = ADJECTIVES[fastrand::usize(..ADJECTIVES.len())];
    let noun = NOUNS[fastrand::usize(..NOUNS.len())];
    let number = fastrand::u32(..1000);
    format!("{}-{}-{}-{}", prefix, adjective, noun, number)
}
