//! Request dispatcher
//!
//! Runs user-triggered backend calls under a loading indicator. The indicator
//! is released by a guard, so it is hidden on every exit path: success,
//! error, a dropped future, or a panic.

use std::fmt;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};

use crate::error::{Error, Result};

/// User-triggered backend operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Analyze,
    BatchAnalyze,
    Discover,
    Export,
    GenerateDocs,
    ClearCaptured,
}

impl Operation {
    /// Message shown while the operation is in flight
    pub fn loading_message(self) -> &'static str {
        match self {
            Operation::Analyze => "Analyzing API...",
            Operation::BatchAnalyze => "Running batch analysis...",
            Operation::Discover => "Discovering endpoints...",
            Operation::Export => "Exporting data...",
            Operation::GenerateDocs => "Generating documentation...",
            Operation::ClearCaptured => "Clearing captured requests...",
        }
    }

    /// Prefix for a failure message
    pub fn failure_context(self) -> &'static str {
        match self {
            Operation::Analyze => "Error analyzing API",
            Operation::BatchAnalyze => "Error in batch analysis",
            Operation::Discover => "Error discovering endpoints",
            Operation::Export => "Error exporting data",
            Operation::GenerateDocs => "Error generating documentation",
            Operation::ClearCaptured => "Error clearing captured requests",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Analyze => "analyze",
            Operation::BatchAnalyze => "batch-analyze",
            Operation::Discover => "discover",
            Operation::Export => "export",
            Operation::GenerateDocs => "generate-docs",
            Operation::ClearCaptured => "clear-captured",
        };
        f.write_str(name)
    }
}

/// Something that can show and hide a blocking "working" indicator
pub trait LoadingIndicator: Send + Sync {
    fn show(&self, message: &str);
    fn hide(&self);
}

/// Spinner on stderr
#[derive(Default)]
pub struct SpinnerIndicator {
    bar: Mutex<Option<ProgressBar>>,
}

impl LoadingIndicator for SpinnerIndicator {
    fn show(&self, message: &str) {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.bar.lock()
            && let Some(previous) = slot.replace(bar)
        {
            previous.finish_and_clear();
        }
    }

    fn hide(&self) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(bar) = slot.take()
        {
            bar.finish_and_clear();
        }
    }
}

/// Indicator that shows nothing (JSON output, scripts)
pub struct NoopIndicator;

impl LoadingIndicator for NoopIndicator {
    fn show(&self, _message: &str) {}
    fn hide(&self) {}
}

/// Hides the indicator when dropped
struct LoadingGuard<'a> {
    indicator: &'a dyn LoadingIndicator,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(indicator: &'a dyn LoadingIndicator, message: &str) -> Self {
        indicator.show(message);
        Self { indicator }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.indicator.hide();
    }
}

/// Runs backend calls under the loading indicator, single attempt.
pub struct Dispatcher {
    indicator: Box<dyn LoadingIndicator>,
}

impl Dispatcher {
    pub fn new(indicator: Box<dyn LoadingIndicator>) -> Self {
        Self { indicator }
    }

    /// Run `call` for `operation`.
    ///
    /// Failures come back as [`Error::Dispatch`] carrying the operation, so
    /// the message reads e.g. `Error analyzing API: Network error: ...`.
    pub async fn dispatch<T, Fut>(&self, operation: Operation, call: Fut) -> Result<T>
    where
        Fut: Future<Output = Result<T>>,
    {
        let _guard = LoadingGuard::acquire(self.indicator.as_ref(), operation.loading_message());
        debug!("Dispatching {}", operation);

        call.await.map_err(|source| {
            warn!("{} failed: {}", operation, source);
            Error::Dispatch {
                operation,
                source: Box::new(source),
            }
        })
    }
}
