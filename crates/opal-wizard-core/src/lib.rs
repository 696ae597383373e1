//! Opal Wizard Core - Shared library for the OCP Opal Tool scaffolding wizard
//!
//! The binary parses `create` flags into a [`Context`], then hands it to
//! [`run`] together with its [`ProductConfig`]. The pipeline walks a fixed
//! sequence of steps:
//!
//! intro → project name → app details → tracker id → scaffold →
//! dependencies → git → next steps
//!
//! Every interactive step has a non-interactive path (`--yes` or pre-seeded
//! flags), and `--dry-run` reports what would happen without touching the
//! filesystem or spawning processes.
//!
//! # Example Usage
//!
//! ```ignore
//! use clap::Parser;
//! use opal_wizard_core::{cli::{Cli, Command}, Context, Flow};
//!
//! let Command::Create(args) = Cli::parse().command;
//! let mut ctx = Context::from_args(args);
//! match opal_wizard_core::run(&MyConfig, &mut ctx).await? {
//!     Flow::Continue => {}
//!     Flow::Exit(code) => std::process::exit(code),
//! }
//! ```

pub mod cli;
pub mod context;
pub mod package_manager;
pub mod product;
pub mod shell;
pub mod steps;
pub mod templates;
pub mod validation;

// Re-export main types for convenience
pub use context::{Context, TRACKER_ID_PLACEHOLDER};
pub use package_manager::PackageManager;
pub use product::ProductConfig;
pub use steps::{run, Flow};
pub use templates::{copy_template, TemplateManifest, TemplateSource, TemplateTokens};
