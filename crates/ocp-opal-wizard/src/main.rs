//! ocp-opal-wizard - Project scaffolding for OCP Opal Tools

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use opal_wizard_core::cli::{clean_args, Cli, Command};
use opal_wizard_core::{Context, Flow, PackageManager, ProductConfig, TRACKER_ID_PLACEHOLDER};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

const OCP_DOCS_URL: &str = "https://docs.developers.optimizely.com/optimizely-connect-platform/docs/configure-your-development-environment-ocp2";

/// OCP Opal Tool product configuration
#[derive(Clone)]
pub struct OcpOpalConfig;

impl ProductConfig for OcpOpalConfig {
    fn name(&self) -> &'static str {
        "ocp-opal-wizard"
    }

    fn display_name(&self) -> &'static str {
        "OCP Opal Tool"
    }

    fn version(&self) -> &'static str {
        CLI_VERSION
    }

    fn tagline(&self) -> &'static str {
        "Build tools hosted on Optimizely Connect Platform (OCP) that extend Opal's capabilities."
    }

    fn project_prefix(&self) -> &'static str {
        "ocp-opal"
    }

    fn commit_message(&self) -> &'static str {
        "Initial commit from create-ocp-opal-tool"
    }

    fn required_package_manager(&self) -> PackageManager {
        PackageManager::Yarn
    }

    fn issues_url(&self) -> &'static str {
        "https://github.com/kunalshetye/opal-ocp-template/issues"
    }

    fn setup_note(&self) -> Option<(&'static str, Vec<String>)> {
        let prompt = "$".dimmed();
        Some((
            "OCP CLI Setup",
            vec![
                "Install OCP CLI (if not already installed):".cyan().to_string(),
                String::new(),
                format!("  {}", "# Create credentials file with your API key".dimmed()),
                format!("  {} mkdir -p ~/.ocp", prompt),
                format!(
                    "  {} echo '{{\"apiKey\": \"<YOUR_API_KEY>\"}}' > ~/.ocp/credentials.json",
                    prompt
                ),
                String::new(),
                format!("  {}", "# Install OCP CLI globally".dimmed()),
                format!("  {} yarn global add @optimizely/ocp-cli", prompt),
                format!("  {} export PATH=\"$(yarn global bin):$PATH\"", prompt),
                String::new(),
                format!("  {}", "# Verify installation".dimmed()),
                format!("  {} ocp accounts whoami", prompt),
                String::new(),
                "Get your API key from your OCP developer invitation email."
                    .dimmed()
                    .to_string(),
                format!("Docs: {}", OCP_DOCS_URL).dimmed().to_string(),
            ],
        ))
    }

    fn next_steps(&self, ctx: &Context) -> Vec<String> {
        let prompt = "$".dimmed();
        let mut steps = vec![
            format!(
                "Your OCP Opal Tool \"{}\" is ready!",
                ctx.app_display_name
            )
            .bold()
            .to_string(),
            String::new(),
            "Next steps:".cyan().to_string(),
            String::new(),
        ];

        let dir = ctx.display_dir();
        if dir != "." && !dir.is_empty() {
            steps.push(format!("  {} cd {}", prompt, dir));
        }

        // OCP requires Yarn 1.x regardless of who launched the wizard
        let yarn = self.required_package_manager();
        steps.push(format!("  {} {} install", prompt, yarn.name()));
        for script in ["build", "validate"] {
            steps.push(format!("  {} {} {}", prompt, yarn.run_command(), script));
        }

        let tracker = if ctx.tracker_id.is_empty() || ctx.tracker_id == TRACKER_ID_PLACEHOLDER {
            "<TRACKER_ID>"
        } else {
            ctx.tracker_id.as_str()
        };

        steps.extend([
            String::new(),
            "Deploy to OCP:".cyan().to_string(),
            String::new(),
            format!("  {} ocp app register", prompt),
            format!("  {} ocp app prepare", prompt),
            format!(
                "  {} ocp directory install <APP_ID>@<VERSION> {}",
                prompt, tracker
            ),
            String::new(),
            "Note: OCP requires Yarn 1.x (Classic)".dimmed().to_string(),
            "Learn more: https://docs.developers.optimizely.com/"
                .dimmed()
                .to_string(),
        ]);

        steps
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Ctrl+C and SIGTERM exit cleanly
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(0);
    })
    .ok();

    let code = match run().await {
        Ok(Flow::Continue) => 0,
        Ok(Flow::Exit(code)) => code,
        Err(e) => {
            let _ = cliclack::outro_cancel("An error occurred.");
            eprintln!("{:?}", e);
            1
        }
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    std::process::exit(code);
}

async fn run() -> Result<Flow> {
    let cli = match Cli::try_parse_from(clean_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return Ok(Flow::Exit(usage_exit_code(&e)));
        }
    };
    let config = OcpOpalConfig;

    match cli.command {
        Command::Create(args) => {
            let mut ctx = Context::from_args(args);
            opal_wizard_core::run(&config, &mut ctx).await
        }
    }
}

/// Help and version exit 0, a missing subcommand exits 1, other usage errors keep clap's code
fn usage_exit_code(error: &clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 1,
        _ => error.exit_code(),
    }
}
