//! Shared wizard state threaded through every step

use crate::cli::CreateArgs;
use crate::package_manager::PackageManager;
use std::path::PathBuf;

/// Tracker id written into `app.yml` when the user hasn't supplied one
pub const TRACKER_ID_PLACEHOLDER: &str = "YOUR_TRACKER_ID";

/// Configuration record populated by CLI flags and then by each wizard step.
///
/// String fields use the empty string for "unset". `install` and `git` are
/// tri-state: `None` means nobody has decided yet.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Target directory for the new project, possibly relative
    pub cwd: String,
    /// App-id-shaped name derived from the last segment of `cwd`
    pub project_name: String,
    pub package_manager: PackageManager,
    pub yes: bool,
    pub dry_run: bool,
    pub install: Option<bool>,
    pub git: Option<bool>,

    pub app_id: String,
    pub app_display_name: String,
    pub app_description: String,
    pub app_summary: String,
    pub tool_description: String,
    pub tracker_id: String,
    pub github_username: String,
    pub repo_name: String,
    pub contact_email: String,

    /// Scaffold from this directory instead of the built-in template
    pub template_dir: Option<PathBuf>,
}

impl Context {
    /// Build a context from parsed flags, detecting the package manager from the environment
    pub fn from_args(args: CreateArgs) -> Self {
        Self::with_package_manager(args, PackageManager::detect())
    }

    /// Build a context from parsed flags.
    ///
    /// Flag precedence, in order: `--install`/`--git` set the baseline;
    /// `--no` clears `yes` and defaults undecided `install`/`git` to false;
    /// `--no-install` and `--no-git` then force false unconditionally.
    pub fn with_package_manager(args: CreateArgs, package_manager: PackageManager) -> Self {
        let mut yes = args.yes;
        let mut install = args.install.then_some(true);
        let mut git = args.git.then_some(true);

        if args.no {
            yes = false;
            install = install.or(Some(false));
            git = git.or(Some(false));
        }

        if args.no_install {
            install = Some(false);
        }

        if args.no_git {
            git = Some(false);
        }

        Self {
            cwd: args.directory.unwrap_or_default(),
            project_name: String::new(),
            package_manager,
            yes,
            dry_run: args.dry_run,
            install,
            git,
            app_id: args.app_id.unwrap_or_default(),
            app_display_name: args.display_name.unwrap_or_default(),
            app_description: args.description.unwrap_or_default(),
            app_summary: args.summary.unwrap_or_default(),
            tool_description: String::new(),
            tracker_id: args.tracker_id.unwrap_or_default(),
            github_username: args.github_user.unwrap_or_default(),
            repo_name: String::new(),
            contact_email: args.email.unwrap_or_default(),
            template_dir: args.template_dir,
        }
    }

    /// `cwd` without a leading `./`, as shown to the user
    pub fn display_dir(&self) -> &str {
        self.cwd.strip_prefix("./").unwrap_or(&self.cwd)
    }
}
