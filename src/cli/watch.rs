//! Watch mode: poll captured requests until interrupted

use std::io::BufRead;
use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use log::debug;
use tokio::sync::mpsc;

use crate::cli::CommandContext;
use crate::client::CapturedRequest;
use crate::error::Result;
use crate::refresher::PollingRefresher;
use crate::state::Tab;

/// Run `apiscope watch`.
///
/// Output (and the page, when set) is rewritten whenever a refresh brings a
/// different captured list.
pub async fn run(ctx: &CommandContext, interval: Option<u64>) -> Result<()> {
    let period = interval
        .map(Duration::from_secs)
        .unwrap_or_else(|| ctx.config.poll_interval());

    ctx.app.state().write().await.switch_tab(Tab::CapturedRequests);

    let refresher = PollingRefresher::spawn(
        Arc::clone(ctx.app.client()),
        Arc::clone(ctx.app.state()),
        period,
    );
    eprintln!(
        "Watching captured requests every {}s. Press {} to refresh now, {} to stop.",
        period.as_secs(),
        "Enter".bold(),
        "Ctrl+C".bold()
    );

    let outcome = watch_loop(ctx, &refresher).await;
    refresher.shutdown().await;
    outcome
}

async fn watch_loop(ctx: &CommandContext, refresher: &PollingRefresher) -> Result<()> {
    let mut updates = refresher.subscribe();
    let mut shown: Option<Vec<CapturedRequest>> = None;
    let mut enter = enter_presses();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    return Ok(());
                }
            }
            pressed = enter.recv(), if stdin_open => {
                match pressed {
                    Some(()) => refresher.refresh_now(),
                    // closed or unreadable stdin leaves polling as the only trigger
                    None => stdin_open = false,
                }
                continue;
            }
            _ = tokio::signal::ctrl_c() => {
                debug!("Interrupted");
                return Ok(());
            }
        }

        let captured = ctx.app.state().read().await.captured().to_vec();
        if shown.as_ref() == Some(&captured) {
            continue;
        }

        ctx.emit(captured.as_slice()).await?;
        shown = Some(captured);
    }
}

/// One message per line read from stdin.
///
/// Reads on a detached thread so a pending read never holds up runtime
/// shutdown.
fn enter_presses() -> mpsc::UnboundedReceiver<()> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            if line.is_err() || tx.send(()).is_err() {
                break;
            }
        }
    });
    rx
}
