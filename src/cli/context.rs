//! Command execution context
//!
//! Provides a unified context for command execution: configuration merged
//! with CLI overrides, the backend client, the application orchestrator, and
//! the resolved output format.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;

use crate::app::{App, AppOptions};
use crate::cli::GlobalOptions;
use crate::client::AnalyzerClient;
use crate::config::Config;
use crate::dispatch::{Dispatcher, LoadingIndicator, NoopIndicator, SpinnerIndicator};
use crate::error::Result;
use crate::output::{self, Formattable, OutputFormat};
use crate::state::AppState;

/// Context for command execution
pub struct CommandContext {
    /// Loaded configuration with CLI overrides applied
    pub config: Config,
    /// Application orchestrator over the HTTP client
    pub app: App<AnalyzerClient>,
    /// Resolved output format
    pub format: OutputFormat,
    page: Option<PathBuf>,
}

impl CommandContext {
    /// Build the context.
    ///
    /// # Errors
    /// Returns error if the config cannot be loaded, an override is invalid,
    /// or the HTTP client cannot be built.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Self::load_config(opts)?;
        let format = Self::resolve_format(opts, &config)?;

        let client = Arc::new(AnalyzerClient::new(
            &config.backend_url,
            config.request_timeout(),
        )?);
        debug!("Using analysis backend at {}", client.base_url());

        let indicator: Box<dyn LoadingIndicator> = match format {
            OutputFormat::Json => Box::new(NoopIndicator),
            _ => Box::new(SpinnerIndicator::default()),
        };

        let app = App::new(
            client,
            Dispatcher::new(indicator),
            AppState::shared(),
            AppOptions {
                refresh_after_analyze: config.refresh_after_analyze,
                download_dir: config.download_dir(),
            },
        );

        Ok(Self {
            config,
            app,
            format,
            page: opts.page.clone(),
        })
    }

    /// Load the config file and apply the backend override
    pub fn load_config(opts: &GlobalOptions) -> Result<Config> {
        let mut config = Config::load_at(opts.config_ref())?;
        if let Some(backend) = opts.backend_ref() {
            config.backend_url = backend.to_string();
            config.validate()?;
        }
        Ok(config)
    }

    /// Flag / env first, then the config preference, then the default
    fn resolve_format(opts: &GlobalOptions, config: &Config) -> Result<OutputFormat> {
        if let Some(format) = opts.format {
            return Ok(format);
        }
        match config.preferences.format.as_deref() {
            Some(preferred) => Ok(preferred.parse()?),
            None => Ok(OutputFormat::default()),
        }
    }

    /// Print `data` in the resolved format, then rewrite the page if one is set
    pub async fn emit<T: Formattable + ?Sized>(&self, data: &T) -> Result<()> {
        output::print(data, self.format)?;
        self.write_page().await
    }

    /// Rewrite the standalone page from current state
    pub async fn write_page(&self) -> Result<()> {
        if let Some(path) = &self.page {
            let html = self.app.page().await;
            std::fs::write(path, html)?;
            debug!("Page written to {}", path.display());
        }
        Ok(())
    }

    /// Target directory for downloads: the flag when given, else the config
    pub fn out_dir(&self, flag: Option<&Path>) -> PathBuf {
        flag.map_or_else(|| self.app.download_dir().to_path_buf(), Path::to_path_buf)
    }
}
