//! The wizard pipeline: a fixed sequence of steps over a shared [`Context`]
//!
//! Each step either lets the pipeline continue or asks it to stop with an
//! exit code. Only the binary actually exits the process.

pub mod app_details;
pub mod dependencies;
pub mod git;
pub mod intro;
pub mod next_steps;
pub mod project_name;
pub mod scaffold;
pub mod tracker_id;

use crate::context::Context;
use crate::product::ProductConfig;
use anyhow::Result;
use colored::Colorize;
use std::io;

/// What the pipeline should do after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Stop immediately and exit the process with this status
    Exit(i32),
}

/// Bail out of the current function when a step asks to exit
macro_rules! step {
    ($step:expr) => {
        if let Flow::Exit(code) = $step {
            return Ok(Flow::Exit(code));
        }
    };
}

/// Run every step in order.
///
/// Dependencies run before git so anything they produce lands in the
/// initial commit.
pub async fn run<C: ProductConfig>(config: &C, ctx: &mut Context) -> Result<Flow> {
    intro::run(config)?;
    step!(project_name::run(config, ctx).await?);
    step!(app_details::run(ctx).await?);
    step!(tracker_id::run(ctx).await?);
    scaffold::run(config, ctx).await?;
    dependencies::run(config, ctx)?;
    step!(git::run(config, ctx).await?);
    next_steps::run(config, ctx)?;
    Ok(Flow::Continue)
}

/// Unwrap a prompt result, turning a user cancel (Esc / Ctrl+C) into `None`
pub(crate) fn prompt<T>(result: io::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => {
            cliclack::outro_cancel("Operation cancelled.")?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Dimmed `[dry-run]` prefix for report-only messages
pub(crate) fn dry_run_tag() -> String {
    "[dry-run]".dimmed().to_string()
}
