//! Interactive console
//!
//! A prompt loop over the five tabs. The captured list keeps polling in the
//! background for the whole session, and the page (when set) is rewritten
//! after every action.

use std::sync::Arc;

use colored::Colorize;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use crate::cli::{CommandContext, captured::confirm_clear, export};
use crate::client::{DocsResponse, ExportFormat};
use crate::downloads::Download;
use crate::error::Result;
use crate::forms::{BatchForm, DiscoveryForm, SingleRequestForm};
use crate::output;
use crate::refresher::PollingRefresher;
use crate::state::Tab;

const METHODS: [&str; 7] = ["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"];

/// Run `apiscope console`
pub async fn run(ctx: &CommandContext) -> Result<()> {
    let refresher = PollingRefresher::spawn(
        Arc::clone(ctx.app.client()),
        Arc::clone(ctx.app.state()),
        ctx.config.poll_interval(),
    );

    let outcome = session(ctx).await;
    refresher.shutdown().await;
    outcome
}

async fn session(ctx: &CommandContext) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{}", "API Reverse Engineering Console".bold());

    loop {
        let active = ctx.app.state().read().await.active_tab();
        let mut labels: Vec<&str> = Tab::ALL.iter().map(|t| t.label()).collect();
        labels.push("Quit");

        let selection = Select::with_theme(&theme)
            .with_prompt("Tab")
            .items(&labels)
            .default(Tab::ALL.iter().position(|t| *t == active).unwrap_or(0))
            .interact_opt()?;

        let Some(tab) = selection.and_then(|i| Tab::ALL.get(i).copied()) else {
            return Ok(());
        };

        ctx.app.show_tab(tab).await;

        let outcome = match tab {
            Tab::SingleRequest => single_request(ctx, &theme).await,
            Tab::BatchAnalysis => batch(ctx, &theme).await,
            Tab::Discovery => discovery(ctx, &theme).await,
            Tab::CapturedRequests => captured(ctx, &theme).await,
            Tab::Documentation => documentation(ctx, &theme).await,
        };

        // failures are reported and the session continues
        if let Err(e) = outcome {
            eprintln!("{} {}", "Error:".red().bold(), e);
        }

        ctx.write_page().await?;
    }
}

fn optional_input(theme: &ColorfulTheme, prompt: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

async fn single_request(ctx: &CommandContext, theme: &ColorfulTheme) -> Result<()> {
    let current = ctx.app.state().read().await.single_request_url().to_string();

    let url = Input::<String>::with_theme(theme)
        .with_prompt("API URL")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    let method = Select::with_theme(theme)
        .with_prompt("Method")
        .items(&METHODS)
        .default(0)
        .interact()?;

    let form = SingleRequestForm {
        url,
        method: METHODS[method].to_string(),
        headers: optional_input(theme, "Headers (JSON or Key: Value, optional)")?,
        body: optional_input(theme, "Body (optional)")?,
        params: optional_input(theme, "Query params (JSON object, optional)")?,
    };

    let result = ctx.app.analyze(form).await?;
    output::print(&result, ctx.format)
}

async fn batch(ctx: &CommandContext, theme: &ColorfulTheme) -> Result<()> {
    let endpoints = optional_input(theme, "Endpoints (JSON array)")?;
    let results = ctx.app.batch_analyze(BatchForm::new(endpoints)).await?;
    output::print(results.as_slice(), ctx.format)
}

async fn discovery(ctx: &CommandContext, theme: &ColorfulTheme) -> Result<()> {
    let base_url = optional_input(theme, "Base URL")?;
    let discovered = ctx.app.discover(DiscoveryForm::new(base_url)).await?;
    output::print(discovered.as_slice(), ctx.format)?;

    if discovered.is_empty() {
        return Ok(());
    }

    let mut items: Vec<&str> = discovered.iter().map(|e| e.url.as_str()).collect();
    items.push("Back");
    let selection = Select::with_theme(theme)
        .with_prompt("Analyze an endpoint")
        .items(&items)
        .default(items.len() - 1)
        .interact_opt()?;

    if let Some(endpoint) = selection.and_then(|i| discovered.get(i)) {
        ctx.app.analyze_discovered(&endpoint.url).await;
        println!(
            "URL set on {}: {}",
            Tab::SingleRequest.label().bold(),
            endpoint.url.cyan()
        );
    }
    Ok(())
}

async fn captured(ctx: &CommandContext, theme: &ColorfulTheme) -> Result<()> {
    const ACTIONS: [&str; 5] = ["Refresh", "Export JSON", "Export curl", "Clear", "Back"];

    loop {
        let captured = ctx.app.state().read().await.captured().to_vec();
        output::print(captured.as_slice(), ctx.format)?;

        let action = Select::with_theme(theme)
            .with_prompt("Action")
            .items(&ACTIONS)
            .default(0)
            .interact_opt()?;

        match action {
            Some(0) => {
                ctx.app.refresh_captured().await?;
            }
            Some(1) => export_to_dir(ctx, ExportFormat::Json).await?,
            Some(2) => export_to_dir(ctx, ExportFormat::Curl).await?,
            Some(3) => {
                if confirm_clear()? {
                    ctx.app.clear_captured().await?;
                }
            }
            _ => return Ok(()),
        }
    }
}

async fn export_to_dir(ctx: &CommandContext, format: ExportFormat) -> Result<()> {
    let download = ctx.app.export(format).await?;
    let saved = export::save(&download, ctx.app.download_dir())?;
    export::report(ctx.format, &saved)
}

async fn documentation(ctx: &CommandContext, theme: &ColorfulTheme) -> Result<()> {
    let response = ctx.app.generate_docs().await?;
    output::print(&response, ctx.format)?;

    if let DocsResponse::Docs(docs) = &response {
        let download = Confirm::with_theme(theme)
            .with_prompt("Download documentation?")
            .default(false)
            .interact()?;
        if download {
            let saved = export::save(&Download::from_docs(docs)?, ctx.app.download_dir())?;
            export::report(ctx.format, &saved)?;
        }
    }
    Ok(())
}
