//! Export command

use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::Serialize;

use crate::cli::CommandContext;
use crate::client::ExportFormat;
use crate::downloads::Download;
use crate::error::Result;
use crate::output::{OutputFormat, json};

/// Where a download landed
#[derive(Debug, Serialize)]
pub struct SavedFile {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Run `apiscope export`
pub async fn run(ctx: &CommandContext, format: ExportFormat, out_dir: Option<&Path>) -> Result<()> {
    let download = ctx.app.export(format).await?;
    let saved = save(&download, &ctx.out_dir(out_dir))?;
    report(ctx.format, &saved)
}

pub fn save(download: &Download, dir: &Path) -> Result<SavedFile> {
    Ok(SavedFile {
        path: download.save(dir)?,
        bytes: download.bytes.len(),
    })
}

/// Print where a file was saved, as JSON in JSON mode
pub fn report(format: OutputFormat, saved: &SavedFile) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", json::format_json(saved)?),
        _ => println!(
            "{} Saved {} ({} bytes)",
            "✓".green(),
            saved.path.display().to_string().cyan(),
            saved.bytes
        ),
    }
    Ok(())
}
