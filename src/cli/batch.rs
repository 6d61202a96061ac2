//! Batch analysis command

use std::path::Path;

use crate::cli::CommandContext;
use crate::error::Result;
use crate::forms::BatchForm;

/// Run `apiscope batch`; endpoints come inline or from a file
pub async fn run(ctx: &CommandContext, file: Option<&Path>, endpoints: Option<String>) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => endpoints.unwrap_or_default(),
    };

    let results = ctx.app.batch_analyze(BatchForm::new(text)).await?;
    ctx.emit(results.as_slice()).await
}
