use super::{ExecutionContext, Executor};
use crate::core::{KvError, Result};
use crate::parser::ast::Statement;
use crate::result::CommandResult;

/// READ key
pub struct ReadExecutor;

impl Executor for ReadExecutor {
    fn name(&self) -> &'static str {
        "READ"
    }

    fn can_handle(&self, stmt: &Statement) -> bool {
        matches!(stmt, Statement::Read { .. })
    }

    fn execute(&self, stmt: &Statement, ctx: &mut ExecutionContext<'_>) -> Result<CommandResult> {
        let Statement::Read { key } = stmt else {
            unreachable!();
        };

        ctx.transactions
            .current()
            .get(key)
            .map(|value| CommandResult::Value(value.to_string()))
            .ok_or_else(|| KvError::KeyNotFound(key.clone()))
    }
}
