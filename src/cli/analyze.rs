//! Single endpoint analysis command

use crate::cli::CommandContext;
use crate::error::Result;
use crate::forms::SingleRequestForm;

/// Run `apiscope analyze`
pub async fn run(ctx: &CommandContext, form: SingleRequestForm) -> Result<()> {
    let result = ctx.app.analyze(form).await?;
    ctx.emit(&result).await
}

