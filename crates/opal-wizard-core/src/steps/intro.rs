//! Welcome banner

use crate::product::ProductConfig;
use anyhow::Result;
use colored::Colorize;

pub fn run<C: ProductConfig>(config: &C) -> Result<()> {
    println!();

    let badge = format!(" {} ", config.name()).black().on_cyan();
    let version = format!("v{}", config.version()).dimmed();
    cliclack::intro(format!("{} {}", badge, version))?;

    cliclack::log::info(format!(
        "{} Let's create your {} project.",
        "Welcome!".cyan(),
        config.display_name().bold()
    ))?;
    cliclack::log::info(config.tagline().dimmed())?;

    Ok(())
}
