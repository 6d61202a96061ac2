//! Captured-request polling
//!
//! A background task keeps the captured mirror in step with the backend: once
//! on start, then every period, and whenever a refresh is requested. Failures
//! are logged and the next tick tries again.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

use crate::client::AnalyzerApi;
use crate::error::Result;
use crate::render::render_captured;
use crate::state::{Region, SharedState};

/// Fetch the captured list once, replace the mirror, and re-render its region.
///
/// Returns the number of captured requests now mirrored.
pub async fn refresh_captured<C>(client: &C, state: &SharedState) -> Result<usize>
where
    C: AnalyzerApi + ?Sized,
{
    let captured = client.list_captured().await?;
    let count = captured.len();
    let html = render_captured(&captured);

    let mut state = state.write().await;
    state.replace_captured(captured);
    state.set_view(Region::CapturedList, html);

    Ok(count)
}

/// Handle to the running poll task
pub struct PollingRefresher {
    trigger: Arc<Notify>,
    shutdown: watch::Sender<bool>,
    completions: watch::Receiver<u64>,
    handle: JoinHandle<()>,
}

impl PollingRefresher {
    /// Start polling `client` every `period`. The first fetch happens at once.
    pub fn spawn<C>(client: Arc<C>, state: SharedState, period: Duration) -> Self
    where
        C: AnalyzerApi + 'static,
    {
        let trigger = Arc::new(Notify::new());
        let (shutdown, mut shutdown_rx) = watch::channel(false);
        let (completed_tx, completions) = watch::channel(0u64);

        let task_trigger = Arc::clone(&trigger);
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                        continue;
                    }
                    _ = ticker.tick() => {}
                    _ = task_trigger.notified() => {
                        ticker.reset();
                    }
                }

                match refresh_captured(client.as_ref(), &state).await {
                    Ok(count) => {
                        debug!("Captured refresh: {} requests", count);
                        completed_tx.send_modify(|generation| *generation += 1);
                    }
                    Err(e) => warn!("Captured refresh failed: {}", e),
                }
            }

            debug!("Captured polling stopped");
        });

        Self {
            trigger,
            shutdown,
            completions,
            handle,
        }
    }

    /// Ask for a refresh now; the periodic schedule restarts from here
    pub fn refresh_now(&self) {
        self.trigger.notify_one();
    }

    /// Receiver bumped after every successful refresh
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.completions.clone()
    }

    /// Stop polling and wait for the task to finish
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        if let Err(e) = self.handle.await {
            warn!("Captured polling task ended abnormally: {}", e);
        }
    }
}
