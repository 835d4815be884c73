use anyhow::Result;

use crate::context::ExecutionContext;

/// Delete by id. Deleting an absent id is a no-op, so the command is
/// idempotent end to end.
pub fn handle(ctx: &ExecutionContext, id: &str) -> Result<()> {
    ctx.store().delete_session(id)?;
    println!("Session deleted");
    Ok(())
}
