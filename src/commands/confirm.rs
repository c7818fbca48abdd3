use crate::app::AppContext;
use crate::prompt::query_yes_no;
use anyhow::Result;

/// Handles the 'confirm' command - asks a yes/no question
pub struct ConfirmCommand;

impl ConfirmCommand {
    /// Execute the confirm command, returning the answer
    pub fn execute(ctx: &AppContext, question: &str, default: Option<&str>) -> Result<bool> {
        let answer = query_yes_no(&*ctx.input, question, default)?;
        ctx.output.plain(if answer { "yes" } else { "no" });
        Ok(answer)
    }
}
