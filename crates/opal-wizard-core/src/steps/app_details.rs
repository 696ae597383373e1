//! Collect the OCP app configuration and repository/contact details

use super::{dry_run_tag, prompt, Flow};
use crate::context::Context;
use crate::shell::{git_user, GitUser};
use crate::validation::{
    is_valid_email, is_valid_github_username, to_display_name, to_valid_app_id,
};
use anyhow::Result;
use colored::Colorize;

pub const DEFAULT_APP_ID: &str = "my-ocp-opal-tool";
pub const DEFAULT_DESCRIPTION: &str = "An OCP Opal Tool";
pub const DEFAULT_SUMMARY: &str = "Extends Opal with custom functionality";
pub const DEFAULT_TOOL_DESCRIPTION: &str = "A custom tool for Opal";
pub const DEFAULT_GITHUB_USERNAME: &str = "your-username";
pub const DEFAULT_EMAIL: &str = "your-email@example.com";

const MAX_DISPLAY_NAME_LEN: usize = 50;

/// First prompt group
#[derive(Debug, Clone, PartialEq, Eq)]
struct AppConfig {
    app_id: String,
    display_name: String,
    description: String,
    summary: String,
    tool_description: String,
}

/// Second prompt group
#[derive(Debug, Clone, PartialEq, Eq)]
struct RepoConfig {
    github_username: String,
    repo_name: String,
    contact_email: String,
}

/// Values passed on the command line that survived validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Seeds {
    app_id: Option<String>,
    display_name: Option<String>,
    description: Option<String>,
    summary: Option<String>,
    github_username: Option<String>,
    contact_email: Option<String>,
}

pub async fn run(ctx: &mut Context) -> Result<Flow> {
    // Read-only lookup, but dry-run spawns nothing
    let git = if ctx.dry_run {
        GitUser::default()
    } else {
        git_user().await
    };

    let seeds = collect_seeds(ctx)?;

    if ctx.yes {
        let (app, repo) = defaults(ctx, &seeds, &git);
        apply(ctx, app, repo);
        return Ok(Flow::Continue);
    }

    cliclack::log::step("App Configuration".cyan())?;
    let Some(app) = prompt_app_config(ctx, &seeds)? else {
        return Ok(Flow::Exit(0));
    };

    cliclack::log::step("Repository & Contact".cyan())?;
    let Some(repo) = prompt_repo_config(&app.app_id, &seeds, &git)? else {
        return Ok(Flow::Exit(0));
    };

    apply(ctx, app, repo);

    if ctx.dry_run {
        cliclack::log::info(format!("{} Collected app details", dry_run_tag()))?;
    }

    Ok(Flow::Continue)
}

fn apply(ctx: &mut Context, app: AppConfig, repo: RepoConfig) {
    ctx.app_id = app.app_id;
    ctx.app_display_name = app.display_name;
    ctx.app_description = app.description;
    ctx.app_summary = app.summary;
    ctx.tool_description = app.tool_description;
    ctx.github_username = repo.github_username;
    ctx.repo_name = repo.repo_name;
    ctx.contact_email = repo.contact_email;
}

/// Validate pre-seeded flags, warning about (and dropping) the bad ones
fn collect_seeds(ctx: &Context) -> Result<Seeds> {
    let mut seeds = Seeds::default();

    if !ctx.app_id.is_empty() {
        let normalized = to_valid_app_id(&ctx.app_id);
        if normalized.is_empty() {
            cliclack::log::warning(format!("Ignoring invalid --app-id \"{}\"", ctx.app_id))?;
        } else {
            if normalized != ctx.app_id.trim() {
                cliclack::log::warning(format!("App ID normalized to: {}", normalized.bold()))?;
            }
            seeds.app_id = Some(normalized);
        }
    }

    if !ctx.app_display_name.is_empty() {
        match validate_display_name(&ctx.app_display_name) {
            Ok(()) => seeds.display_name = Some(ctx.app_display_name.trim().to_string()),
            Err(reason) => cliclack::log::warning(format!("Ignoring --display-name: {}", reason))?,
        }
    }

    seeds.description = non_blank(&ctx.app_description);
    seeds.summary = non_blank(&ctx.app_summary);

    if !ctx.github_username.is_empty() {
        if is_valid_github_username(&ctx.github_username) {
            seeds.github_username = Some(ctx.github_username.trim().to_string());
        } else {
            cliclack::log::warning(format!(
                "Ignoring invalid --github-user \"{}\"",
                ctx.github_username
            ))?;
        }
    }

    if !ctx.contact_email.is_empty() {
        if is_valid_email(&ctx.contact_email) {
            seeds.contact_email = Some(ctx.contact_email.trim().to_string());
        } else {
            cliclack::log::warning(format!("Ignoring invalid --email \"{}\"", ctx.contact_email))?;
        }
    }

    Ok(seeds)
}

/// Non-interactive values for `--yes`
fn defaults(ctx: &Context, seeds: &Seeds, git: &GitUser) -> (AppConfig, RepoConfig) {
    let app_id = seeds
        .app_id
        .clone()
        .unwrap_or_else(|| default_app_id(&ctx.project_name));

    let app = AppConfig {
        display_name: seeds
            .display_name
            .clone()
            .unwrap_or_else(|| to_display_name(&app_id)),
        description: seeds
            .description
            .clone()
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        summary: seeds
            .summary
            .clone()
            .unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
        tool_description: DEFAULT_TOOL_DESCRIPTION.to_string(),
        app_id: app_id.clone(),
    };

    let repo = RepoConfig {
        github_username: seeds
            .github_username
            .clone()
            .unwrap_or_else(|| DEFAULT_GITHUB_USERNAME.to_string()),
        repo_name: app_id,
        contact_email: seeds
            .contact_email
            .clone()
            .or_else(|| non_blank(&git.email))
            .unwrap_or_else(|| DEFAULT_EMAIL.to_string()),
    };

    (app, repo)
}

fn prompt_app_config(ctx: &Context, seeds: &Seeds) -> Result<Option<AppConfig>> {
    let app_id = match &seeds.app_id {
        Some(id) => {
            cliclack::log::info(format!("App ID: {}", id.bold()))?;
            id.clone()
        }
        None => {
            let default = default_app_id(&ctx.project_name);
            let input = cliclack::input("App ID (unique identifier for OCP)")
                .placeholder(&default)
                .default_input(&default)
                .validate(|value: &String| {
                    if to_valid_app_id(value).is_empty() {
                        Err("App ID is required")
                    } else {
                        Ok(())
                    }
                })
                .interact();
            let Some(raw) = prompt::<String>(input)? else {
                return Ok(None);
            };
            let normalized = to_valid_app_id(&raw);
            if normalized != raw.trim() {
                cliclack::log::warning(format!("App ID normalized to: {}", normalized.bold()))?;
            }
            normalized
        }
    };

    let display_name = match &seeds.display_name {
        Some(name) => name.clone(),
        None => {
            let default = to_display_name(&app_id);
            let input = cliclack::input("Display name (shown in OCP)")
                .placeholder(&default)
                .default_input(&default)
                .validate(|value: &String| validate_display_name(value))
                .interact();
            let Some(name) = prompt::<String>(input)? else {
                return Ok(None);
            };
            name.trim().to_string()
        }
    };

    let description = match &seeds.description {
        Some(description) => description.clone(),
        None => {
            let input = cliclack::input("Description (what does your tool do?)")
                .placeholder("An OCP Opal Tool that...")
                .default_input(DEFAULT_DESCRIPTION)
                .validate(|value: &String| {
                    if value.trim().is_empty() {
                        Err("Description is required")
                    } else {
                        Ok(())
                    }
                })
                .interact();
            let Some(description) = prompt::<String>(input)? else {
                return Ok(None);
            };
            description.trim().to_string()
        }
    };

    let summary = match &seeds.summary {
        Some(summary) => summary.clone(),
        None => {
            let input = cliclack::input("Summary (brief one-liner for app listing)")
                .placeholder(DEFAULT_SUMMARY)
                .default_input(DEFAULT_SUMMARY)
                .required(false)
                .interact();
            let Some(summary) = prompt::<String>(input)? else {
                return Ok(None);
            };
            non_blank(&summary).unwrap_or_else(|| DEFAULT_SUMMARY.to_string())
        }
    };

    let input = cliclack::input("Tool description (what will Opal see?)")
        .placeholder("A tool that helps users...")
        .default_input(DEFAULT_TOOL_DESCRIPTION)
        .required(false)
        .interact();
    let Some(tool_description) = prompt::<String>(input)? else {
        return Ok(None);
    };
    let tool_description =
        non_blank(&tool_description).unwrap_or_else(|| DEFAULT_TOOL_DESCRIPTION.to_string());

    Ok(Some(AppConfig {
        app_id,
        display_name,
        description,
        summary,
        tool_description,
    }))
}

fn prompt_repo_config(app_id: &str, seeds: &Seeds, git: &GitUser) -> Result<Option<RepoConfig>> {
    let github_username = match &seeds.github_username {
        Some(username) => username.clone(),
        None => {
            let input = cliclack::input("GitHub username (for repository URL)")
                .placeholder(DEFAULT_GITHUB_USERNAME)
                .required(false)
                .validate(|value: &String| {
                    if value.trim().is_empty() || is_valid_github_username(value) {
                        Ok(())
                    } else {
                        Err("Invalid GitHub username format")
                    }
                })
                .interact();
            let Some(username) = prompt::<String>(input)? else {
                return Ok(None);
            };
            non_blank(&username).unwrap_or_else(|| DEFAULT_GITHUB_USERNAME.to_string())
        }
    };

    let input = cliclack::input("Repository name")
        .placeholder(app_id)
        .default_input(app_id)
        .required(false)
        .interact();
    let Some(repo_name) = prompt::<String>(input)? else {
        return Ok(None);
    };
    let repo_name = non_blank(&repo_name).unwrap_or_else(|| app_id.to_string());

    let contact_email = match &seeds.contact_email {
        Some(email) => email.clone(),
        None => {
            let mut input = cliclack::input("Contact email (for support)").validate(
                |value: &String| {
                    if value.trim().is_empty() {
                        Err("Contact email is required")
                    } else if !is_valid_email(value) {
                        Err("Invalid email format")
                    } else {
                        Ok(())
                    }
                },
            );
            input = match non_blank(&git.email) {
                Some(email) => input.placeholder(&email).default_input(&email),
                None => input.placeholder(DEFAULT_EMAIL),
            };
            let Some(email) = prompt::<String>(input.interact())? else {
                return Ok(None);
            };
            email.trim().to_string()
        }
    };

    Ok(Some(RepoConfig {
        github_username,
        repo_name,
        contact_email,
    }))
}

fn validate_display_name(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err("Display name is required")
    } else if value.chars().count() > MAX_DISPLAY_NAME_LEN {
        Err("Display name should be 50 characters or less")
    } else {
        Ok(())
    }
}

fn default_app_id(project_name: &str) -> String {
    non_blank(project_name).unwrap_or_else(|| DEFAULT_APP_ID.to_string())
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yes_ctx(project_name: &str) -> Context {
        Context {
            project_name: project_name.to_string(),
            yes: true,
            dry_run: true,
            ..Context::default()
        }
    }

    #[tokio::test]
    async fn test_yes_mode_defaults() {
        let mut ctx = yes_ctx("my-cool-tool");

        assert_eq!(run(&mut ctx).await.unwrap(), Flow::Continue);
        assert_eq!(ctx.app_id, "my-cool-tool");
        assert_eq!(ctx.app_display_name, "My Cool Tool");
        assert_eq!(ctx.app_description, DEFAULT_DESCRIPTION);
        assert_eq!(ctx.app_summary, DEFAULT_SUMMARY);
        assert_eq!(ctx.tool_description, DEFAULT_TOOL_DESCRIPTION);
        assert_eq!(ctx.github_username, DEFAULT_GITHUB_USERNAME);
        assert_eq!(ctx.repo_name, "my-cool-tool");
        // dry-run skips the git identity lookup
        assert_eq!(ctx.contact_email, DEFAULT_EMAIL);
    }

    #[tokio::test]
    async fn test_yes_mode_keeps_valid_seeds() {
        let mut ctx = yes_ctx("project");
        ctx.app_id = "foo".to_string();
        ctx.app_display_name = "Foo Tool".to_string();
        ctx.app_description = "Does foo things".to_string();
        ctx.github_username = "octocat".to_string();
        ctx.contact_email = "dev@example.com".to_string();

        run(&mut ctx).await.unwrap();
        assert_eq!(ctx.app_id, "foo");
        assert_eq!(ctx.app_display_name, "Foo Tool");
        assert_eq!(ctx.app_description, "Does foo things");
        assert_eq!(ctx.github_username, "octocat");
        assert_eq!(ctx.repo_name, "foo");
        assert_eq!(ctx.contact_email, "dev@example.com");
    }

    #[tokio::test]
    async fn test_yes_mode_normalizes_and_drops_invalid_seeds() {
        let mut ctx = yes_ctx("project");
        ctx.app_id = "My Foo App!".to_string();
        ctx.github_username = "-bad-".to_string();
        ctx.contact_email = "not-an-email".to_string();

        run(&mut ctx).await.unwrap();
        assert_eq!(ctx.app_id, "my-foo-app");
        assert_eq!(ctx.app_display_name, "My Foo App");
        assert_eq!(ctx.github_username, DEFAULT_GITHUB_USERNAME);
        assert_eq!(ctx.contact_email, DEFAULT_EMAIL);
    }

    #[tokio::test]
    async fn test_yes_mode_empty_project_name_falls_back() {
        let mut ctx = yes_ctx("");
        run(&mut ctx).await.unwrap();
        assert_eq!(ctx.app_id, DEFAULT_APP_ID);
        assert_eq!(ctx.repo_name, DEFAULT_APP_ID);
    }

    #[test]
    fn test_defaults_prefer_git_email() {
        let ctx = yes_ctx("tool");
        let git = GitUser {
            name: "Dev".to_string(),
            email: " dev@corp.example ".to_string(),
        };
        let (_, repo) = defaults(&ctx, &Seeds::default(), &git);
        assert_eq!(repo.contact_email, "dev@corp.example");
    }

    #[test]
    fn test_validate_display_name() {
        assert!(validate_display_name("My Tool").is_ok());
        assert!(validate_display_name("   ").is_err());
        assert!(validate_display_name(&"x".repeat(50)).is_ok());
        assert!(validate_display_name(&"x".repeat(51)).is_err());
    }
}
