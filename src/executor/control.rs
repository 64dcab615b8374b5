use super::{ExecutionContext, Executor};
use crate::core::Result;
use crate::parser::ast::Statement;
use crate::result::CommandResult;

/// QUIT. Open transactions are left as they are; the session ends without
/// committing them.
pub struct QuitExecutor;

impl Executor for QuitExecutor {
    fn name(&self) -> &'static str {
        "QUIT"
    }

    fn can_handle(&self, stmt: &Statement) -> bool {
        matches!(stmt, Statement::Quit)
    }

    fn execute(&self, _stmt: &Statement, _ctx: &mut ExecutionContext<'_>) -> Result<CommandResult> {
        Ok(CommandResult::Quit)
    }
}
