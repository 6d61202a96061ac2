//! Endpoint discovery command

use dialoguer::{Select, theme::ColorfulTheme};

use crate::cli::CommandContext;
use crate::error::Result;
use crate::forms::{DiscoveryForm, SingleRequestForm};

/// Run `apiscope discover`.
///
/// With `pick`, a discovered endpoint is chosen interactively, moved into
/// the single-request form, and analyzed.
pub async fn run(ctx: &CommandContext, base_url: String, pick: bool) -> Result<()> {
    let discovered = ctx.app.discover(DiscoveryForm::new(base_url)).await?;
    ctx.emit(discovered.as_slice()).await?;

    if !pick || discovered.is_empty() {
        return Ok(());
    }

    let urls: Vec<&str> = discovered.iter().map(|e| e.url.as_str()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Analyze which endpoint?")
        .items(&urls)
        .default(0)
        .interact_opt()?;

    let Some(index) = selection else {
        return Ok(());
    };

    ctx.app.analyze_discovered(urls[index]).await;
    let url = ctx.app.state().read().await.single_request_url().to_string();
    let result = ctx.app.analyze(SingleRequestForm::new(url)).await?;
    ctx.emit(&result).await
}
