//! Status command implementation

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::AnalyzerApi;
use crate::config::Config;
use crate::error::Result;

/// Run the status command: configuration, then a live backend check
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "apiscope Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not found, using defaults)".dimmed()
        );
    }

    let ctx = CommandContext::new(opts)?;
    let config = &ctx.config;

    println!("Backend: {}", config.backend_url.cyan());
    println!("Poll interval: {}s", config.poll_interval_secs);
    println!(
        "Refresh after analyze: {}",
        if config.refresh_after_analyze { "on" } else { "off" }
    );
    match config.request_timeout_secs {
        Some(secs) => println!("Request timeout: {}s", secs),
        None => println!("Request timeout: {}", "none".dimmed()),
    }
    println!("Download directory: {}", config.download_dir().display());
    println!();

    match ctx.app.client().list_captured().await {
        Ok(captured) => println!(
            "{} Backend reachable ({} captured requests)",
            "✓".green(),
            captured.len()
        ),
        Err(e) => {
            println!("{} Backend unreachable: {}", "✗".red(), e);
            println!("  → Start the analysis backend or pass --backend <URL>");
        }
    }
    println!();

    Ok(())
}
