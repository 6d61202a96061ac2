//! Output formatting for CLI results

use std::str::FromStr;

use clap::ValueEnum;

use crate::error::{ConfigError, Result};

pub mod formatters;
pub mod json;
pub mod table;

/// Output modes for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// HTML fragment, as rendered into the page
    Html,
    /// Rounded table for terminals
    #[default]
    Table,
    /// JSON with a metadata envelope, for scripts
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
            .map_err(|_| ConfigError::Invalid(format!("Unknown output format: {}", s)))
    }
}

/// Types that can be formatted in every output mode
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;
}

/// Format and print data to stdout
pub fn print<T: Formattable + ?Sized>(data: &T, format: OutputFormat) -> Result<()> {
    let output = data.format(format)?;
    println!("{}", output);
    Ok(())
}
