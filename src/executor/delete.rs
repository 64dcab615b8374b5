use super::{ExecutionContext, Executor};
use crate::core::{KvError, Result};
use crate::parser::ast::Statement;
use crate::result::CommandResult;

/// DELETE key
pub struct DeleteExecutor;

impl Executor for DeleteExecutor {
    fn name(&self) -> &'static str {
        "DELETE"
    }

    fn can_handle(&self, stmt: &Statement) -> bool {
        matches!(stmt, Statement::Delete { .. })
    }

    fn execute(&self, stmt: &Statement, ctx: &mut ExecutionContext<'_>) -> Result<CommandResult> {
        let Statement::Delete { key } = stmt else {
            unreachable!();
        };

        if ctx.transactions.current_mut().delete(key) {
            Ok(CommandResult::Empty)
        } else {
            Err(KvError::KeyNotFound(key.clone()))
        }
    }
}
