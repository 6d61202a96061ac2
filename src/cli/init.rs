//! Init command implementation

use colored::Colorize;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the init command: prompt for each setting and save the file
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();

    println!("{}", "Welcome to apiscope!".bold().green());
    println!("Let's point it at your analysis backend.\n");

    config.backend_url = Input::<String>::with_theme(&theme)
        .with_prompt("Backend URL")
        .with_initial_text(opts.backend_ref().unwrap_or(&config.backend_url))
        .interact_text()?;

    config.poll_interval_secs = Input::<u64>::with_theme(&theme)
        .with_prompt("Captured-request poll interval (seconds)")
        .default(config.poll_interval_secs)
        .interact_text()?;

    config.refresh_after_analyze = Confirm::with_theme(&theme)
        .with_prompt("Refresh captured requests right after each analysis?")
        .default(config.refresh_after_analyze)
        .interact()?;

    config.validate()?;

    let path = Config::resolve_path(opts.config_ref())?;
    config.save_to(&path)?;

    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        path.display()
    );
    println!("  Run {} to check the backend.", "apiscope status".cyan());

    Ok(())
}
