//! Command-line surface: `ocp-opal-wizard create [directory] [options]`

use clap::{ArgAction, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Examples:
  # Interactive wizard
  $ npx @kunalshetye/ocp-opal-wizard create

  # Create in specific directory
  $ npx @kunalshetye/ocp-opal-wizard create my-tool

  # Quick setup with defaults
  $ npx @kunalshetye/ocp-opal-wizard create my-tool --yes

  # Specify app details
  $ npx @kunalshetye/ocp-opal-wizard create my-tool --app-id my-app --tracker-id ABC123

Note:
  Always use npx to run the wizard (not yarn create).
  The scaffolded project uses Yarn 1.x as required by OCP.

Learn more:
  Documentation: https://docs.developers.optimizely.com/
  Repository:    https://github.com/kunalshetye/opal-ocp-template";

#[derive(Parser, Debug)]
#[command(name = "ocp-opal-wizard")]
#[command(about = "Scaffold Optimizely Connect Platform (OCP) Opal Tool projects")]
#[command(version, disable_version_flag = true)]
#[command(subcommand_required = true, arg_required_else_help = true)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Show version number
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new OCP Opal Tool project
    #[command(after_help = AFTER_HELP)]
    Create(CreateArgs),
}

/// Raw `create` flags, before precedence rules are applied
#[derive(Parser, Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project directory
    pub directory: Option<String>,

    /// Skip prompts, use defaults
    #[arg(short, long)]
    pub yes: bool,

    /// Skip prompts, decline all
    #[arg(short, long)]
    pub no: bool,

    /// Install dependencies
    #[arg(long)]
    pub install: bool,

    /// Skip dependency installation
    #[arg(long = "no-install")]
    pub no_install: bool,

    /// Initialize git repository
    #[arg(long)]
    pub git: bool,

    /// Skip git initialization
    #[arg(long = "no-git")]
    pub no_git: bool,

    /// Show what would be done without making changes
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// OCP App ID
    #[arg(long = "app-id")]
    pub app_id: Option<String>,

    /// App display name
    #[arg(long = "display-name")]
    pub display_name: Option<String>,

    /// App description
    #[arg(long)]
    pub description: Option<String>,

    /// App summary
    #[arg(long)]
    pub summary: Option<String>,

    /// OCP Tracker ID for deployment
    #[arg(long = "tracker-id")]
    pub tracker_id: Option<String>,

    /// Contact email
    #[arg(long)]
    pub email: Option<String>,

    /// GitHub username
    #[arg(long = "github-user")]
    pub github_user: Option<String>,

    /// Local directory to use as the template instead of the built-in one (for development use)
    #[arg(long = "template-dir", hide = true)]
    pub template_dir: Option<PathBuf>,
}

/// Drop bare `--` separators that package-manager runners pass through
pub fn clean_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .filter(|arg| arg != "--")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CreateArgs {
        let argv = std::iter::once("ocp-opal-wizard").chain(args.iter().copied());
        match Cli::try_parse_from(clean_args(argv)).unwrap().command {
            Command::Create(args) => args,
        }
    }

    #[test]
    fn test_parses_directory_after_create() {
        let args = parse(&["create", "my-project"]);
        assert_eq!(args.directory.as_deref(), Some("my-project"));
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["create"]);
        assert!(args.directory.is_none());
        assert!(!args.yes);
        assert!(!args.no);
        assert!(!args.dry_run);
        assert!(args.app_id.is_none());
    }

    #[test]
    fn test_short_flags() {
        let args = parse(&["create", "-y"]);
        assert!(args.yes);
        let args = parse(&["create", "-n"]);
        assert!(args.no);
    }

    #[test]
    fn test_string_options() {
        let args = parse(&[
            "create",
            "my-project",
            "--app-id",
            "test-app",
            "--tracker-id",
            "XYZ789",
            "--email",
            "test@example.com",
            "--github-user",
            "octocat",
            "--display-name",
            "Test App",
        ]);
        assert_eq!(args.app_id.as_deref(), Some("test-app"));
        assert_eq!(args.tracker_id.as_deref(), Some("XYZ789"));
        assert_eq!(args.email.as_deref(), Some("test@example.com"));
        assert_eq!(args.github_user.as_deref(), Some("octocat"));
        assert_eq!(args.display_name.as_deref(), Some("Test App"));
    }

    #[test]
    fn test_separator_is_ignored() {
        let args = parse(&["create", "--", "my-project", "--yes"]);
        assert_eq!(args.directory.as_deref(), Some("my-project"));
        assert!(args.yes);
    }

    #[test]
    fn test_conflicting_git_flags_are_accepted() {
        let args = parse(&["create", "--no-git", "--git"]);
        assert!(args.git);
        assert!(args.no_git);
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["ocp-opal-wizard", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_help_flag() {
        let err = Cli::try_parse_from(["ocp-opal-wizard", "create", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["ocp-opal-wizard"]).is_err());
    }
}
