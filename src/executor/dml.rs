use super::{ExecutionContext, Executor};
use crate::core::Result;
use crate::parser::ast::Statement;
use crate::result::CommandResult;

/// WRITE key value. Inserts or overwrites in the current store.
pub struct WriteExecutor;

impl Executor for WriteExecutor {
    fn name(&self) -> &'static str {
        "WRITE"
    }

    fn can_handle(&self, stmt: &Statement) -> bool {
        matches!(stmt, Statement::Write { .. })
    }

    fn execute(&self, stmt: &Statement, ctx: &mut ExecutionContext<'_>) -> Result<CommandResult> {
        let Statement::Write { key, value } = stmt else {
            unreachable!();
        };

        ctx.transactions.current_mut().set(key.as_str(), value.as_str());
        Ok(CommandResult::Empty)
    }
}
