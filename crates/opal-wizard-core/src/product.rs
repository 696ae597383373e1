//! Product configuration trait for the CLI binary
//!
//! The wizard steps are product-agnostic about branding: everything the user
//! reads in banners, notes and commit messages comes from here.

use crate::context::Context;
use crate::package_manager::PackageManager;

/// Configuration trait implemented by the binary that ships the wizard
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (binary name, intro badge)
    fn name(&self) -> &'static str;

    /// Human-readable name of the kind of project being created
    fn display_name(&self) -> &'static str;

    /// Version shown in the intro banner
    fn version(&self) -> &'static str;

    /// Extra line shown under the welcome message
    fn tagline(&self) -> &'static str;

    /// Prefix for generated project names in `--yes` mode
    fn project_prefix(&self) -> &'static str;

    /// Message for the initial git commit
    fn commit_message(&self) -> &'static str;

    /// Package manager the generated project must be installed with
    fn required_package_manager(&self) -> PackageManager;

    /// Where users report problems
    fn issues_url(&self) -> &'static str;

    /// One-time environment setup shown before the next steps (title, lines)
    fn setup_note(&self) -> Option<(&'static str, Vec<String>)> {
        None
    }

    /// Instructions printed once the project exists
    fn next_steps(&self, ctx: &Context) -> Vec<String>;
}
