//! Global CLI options

use std::path::PathBuf;

use crate::cli::Cli;
use crate::output::OutputFormat;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are merged in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format override (html, table, json)
    pub format: Option<OutputFormat>,

    /// Analysis backend URL override
    pub backend: Option<String>,

    /// Custom config file path (defaults to ~/.apiscope/config.yaml)
    pub config: Option<String>,

    /// Standalone page rewritten after every state change
    pub page: Option<PathBuf>,

    pub debug: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            backend: cli.backend.clone(),
            config: cli.config.clone(),
            page: cli.page.clone(),
            debug: cli.debug,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get backend override as `Option<&str>`.
    pub fn backend_ref(&self) -> Option<&str> {
        self.backend.as_deref()
    }
}
