//! Captured request commands

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};

use crate::cli::CommandContext;
use crate::error::Result;
use crate::state::Tab;

/// Run `apiscope captured list`
pub async fn list(ctx: &CommandContext) -> Result<()> {
    ctx.app.state().write().await.switch_tab(Tab::CapturedRequests);
    ctx.app.refresh_captured().await?;

    let captured = ctx.app.state().read().await.captured().to_vec();
    ctx.emit(captured.as_slice()).await
}

/// Run `apiscope captured clear`
pub async fn clear(ctx: &CommandContext, yes: bool) -> Result<()> {
    if !yes && !confirm_clear()? {
        println!("Cancelled.");
        return Ok(());
    }

    ctx.app.clear_captured().await?;
    println!("{} Captured requests cleared", "✓".green());
    ctx.write_page().await
}

pub fn confirm_clear() -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Are you sure you want to clear all captured requests?")
        .default(false)
        .interact()?)
}
