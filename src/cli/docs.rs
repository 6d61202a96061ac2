//! Documentation generation command

use std::path::Path;

use colored::Colorize;

use crate::cli::CommandContext;
use crate::client::DocsResponse;
use crate::downloads::Download;
use crate::error::Result;

/// Run `apiscope docs`.
///
/// A backend-reported error is printed like any other result; `download`
/// then has nothing to save.
pub async fn run(ctx: &CommandContext, download: bool, out_dir: Option<&Path>) -> Result<()> {
    let response = ctx.app.generate_docs().await?;
    ctx.emit(&response).await?;

    if !download {
        return Ok(());
    }

    match &response {
        DocsResponse::Docs(docs) => {
            let path = Download::from_docs(docs)?.save(&ctx.out_dir(out_dir))?;
            eprintln!("{} Saved {}", "✓".green(), path.display());
        }
        DocsResponse::Error { .. } => {
            eprintln!("{} Nothing to download", "○".dimmed());
        }
    }
    Ok(())
}
