//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::client::ExportFormat;
use crate::output::OutputFormat;

pub mod analyze;
pub mod args;
pub mod batch;
pub mod captured;
pub mod console;
pub mod context;
pub mod discover;
pub mod docs;
pub mod export;
pub mod init;
pub mod status;
pub mod watch;

pub use args::GlobalOptions;
pub use context::CommandContext;

/// apiscope - terminal companion for the API reverse-engineering backend
#[derive(Parser, Debug)]
#[command(name = "apiscope")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (html, table, json)
    #[arg(
        long,
        global = true,
        env = "APISCOPE_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Analysis backend URL
    #[arg(long, global = true, env = "APISCOPE_BACKEND", hide_env = true)]
    pub backend: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "APISCOPE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Rewrite a standalone tabbed HTML page after every change
    #[arg(long, global = true, value_name = "PATH")]
    pub page: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true, env = "APISCOPE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a configuration file
    Init,

    /// Analyze a single API endpoint
    Analyze {
        /// Endpoint URL
        url: String,

        /// HTTP method
        #[arg(short = 'X', long, default_value = "GET")]
        method: String,

        /// Request headers: a JSON object or `Key: Value` lines
        #[arg(long)]
        headers: Option<String>,

        /// Request body
        #[arg(long)]
        data: Option<String>,

        /// Query parameters as a JSON object
        #[arg(long)]
        params: Option<String>,
    },

    /// Analyze several endpoints in one call
    Batch {
        /// File holding a JSON array of endpoints
        #[arg(long, conflicts_with = "endpoints", required_unless_present = "endpoints")]
        file: Option<PathBuf>,

        /// JSON array of endpoints, e.g. '[{"url": "https://api.example.com/users"}]'
        #[arg(long)]
        endpoints: Option<String>,
    },

    /// Probe common API paths under a base URL
    Discover {
        /// Base URL to probe
        base_url: String,

        /// Choose a discovered endpoint and analyze it
        #[arg(long)]
        pick: bool,
    },

    /// List or clear captured requests
    #[command(subcommand)]
    Captured(CapturedCommands),

    /// Export captured data to a file
    Export {
        /// Export format
        #[arg(value_enum, id = "export_format", value_name = "FORMAT")]
        format: ExportFormat,

        /// Directory to write into (defaults to the configured download dir)
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Generate documentation from captured requests
    Docs {
        /// Also save the documentation as JSON
        #[arg(long)]
        download: bool,

        /// Directory to write into (defaults to the configured download dir)
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Keep the captured list refreshed until interrupted
    Watch {
        /// Polling period in seconds (defaults to poll_interval_secs)
        #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,
    },

    /// Interactive session over every tab
    Console,

    /// Show configuration and backend status
    Status,

    /// Display version information
    Version,
}

/// Captured request subcommands
#[derive(Subcommand, Debug)]
pub enum CapturedCommands {
    /// List captured requests
    List,

    /// Clear all captured requests
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_analyze_defaults_to_get() {
        let cli = Cli::parse_from(["apiscope", "analyze", "https://api.example.com"]);
        match cli.command {
            Commands::Analyze { url, method, .. } => {
                assert_eq!(url, "https://api.example.com");
                assert_eq!(method, "GET");
            }
            other => panic!("Expected analyze, got {:?}", other),
        }
    }

    #[test]
    fn test_batch_needs_a_source() {
        assert!(Cli::try_parse_from(["apiscope", "batch"]).is_err());
        assert!(
            Cli::try_parse_from(["apiscope", "batch", "--file", "a.json", "--endpoints", "[]"])
                .is_err()
        );
        assert!(Cli::try_parse_from(["apiscope", "batch", "--endpoints", "[]"]).is_ok());
    }

    #[test]
    fn test_export_format_values() {
        let cli = Cli::parse_from(["apiscope", "export", "curl", "--out-dir", "/tmp/x"]);
        match cli.command {
            Commands::Export { format, out_dir } => {
                assert_eq!(format, ExportFormat::Curl);
                assert_eq!(out_dir, Some(PathBuf::from("/tmp/x")));
            }
            other => panic!("Expected export, got {:?}", other),
        }
        assert!(Cli::try_parse_from(["apiscope", "export", "xml"]).is_err());
    }

    #[test]
    fn test_watch_interval_must_be_positive() {
        assert!(Cli::try_parse_from(["apiscope", "watch", "--interval", "0"]).is_err());
    }
}
