//! Optional OCP tracker id

use super::{dry_run_tag, prompt, Flow};
use crate::context::{Context, TRACKER_ID_PLACEHOLDER};
use crate::validation::is_valid_tracker_id;
use anyhow::Result;
use colored::Colorize;

const TRACKER_ID_HELP: &str = "Your Tracker ID is used to deploy the tool to your OCP account.\n  \
You can find it in your OCP dashboard or leave blank for now.";

pub async fn run(ctx: &mut Context) -> Result<Flow> {
    let seeded = seeded_tracker_id(ctx)?;

    let tracker_id = match seeded {
        Some(id) => id,
        None if ctx.yes => TRACKER_ID_PLACEHOLDER.to_string(),
        None => {
            section_intro()?;
            let input = cliclack::input("OCP Tracker ID (optional, can set later)")
                .placeholder(TRACKER_ID_PLACEHOLDER)
                .required(false)
                .validate(|value: &String| {
                    if value.trim().is_empty() || is_valid_tracker_id(value) {
                        Ok(())
                    } else {
                        Err("Tracker ID may only contain letters, numbers, hyphens and underscores")
                    }
                })
                .interact();
            let Some(value) = prompt::<String>(input)? else {
                return Ok(Flow::Exit(0));
            };
            resolve(&value)
        }
    };

    if tracker_id == TRACKER_ID_PLACEHOLDER {
        cliclack::log::remark(format!(
            "No tracker ID set. Replace {} before installing the app.",
            TRACKER_ID_PLACEHOLDER.yellow()
        ))?;
    }

    ctx.tracker_id = tracker_id;

    if ctx.dry_run {
        cliclack::log::info(format!("{} Tracker ID: {}", dry_run_tag(), ctx.tracker_id))?;
    }

    Ok(Flow::Continue)
}

fn section_intro() -> Result<()> {
    cliclack::log::step("OCP Deployment Configuration".cyan())?;
    cliclack::log::info(TRACKER_ID_HELP.dimmed())?;
    Ok(())
}

/// A valid `--tracker-id` flag, if one was given
fn seeded_tracker_id(ctx: &Context) -> Result<Option<String>> {
    let value = ctx.tracker_id.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if is_valid_tracker_id(value) {
        return Ok(Some(value.to_string()));
    }
    cliclack::log::warning(format!("Ignoring invalid --tracker-id \"{}\"", ctx.tracker_id))?;
    Ok(None)
}

/// Blank input means "use the placeholder"
fn resolve(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        TRACKER_ID_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}
