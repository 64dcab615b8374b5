// ============================================================================
// Transaction Executors
// ============================================================================
//
// START / COMMIT / ABORT against the transaction stack.
//
// COMMIT and ABORT at the root are rejected with NoActiveTransaction and leave
// the root store as it was.
//
// ============================================================================

use crate::core::Result;
use crate::executor::{ExecutionContext, Executor};
use crate::parser::ast::Statement;
use crate::result::CommandResult;

/// START: open a nested transaction seeded with a copy of the current store
pub struct StartExecutor;

impl Executor for StartExecutor {
    fn name(&self) -> &'static str {
        "START"
    }

    fn can_handle(&self, stmt: &Statement) -> bool {
        matches!(stmt, Statement::Start)
    }

    fn execute(&self, _stmt: &Statement, ctx: &mut ExecutionContext<'_>) -> Result<CommandResult> {
        let depth = ctx.transactions.begin();
        Ok(CommandResult::Depth(depth))
    }
}

/// COMMIT: the innermost store replaces its parent
pub struct CommitExecutor;

impl Executor for CommitExecutor {
    fn name(&self) -> &'static str {
        "COMMIT"
    }

    fn can_handle(&self, stmt: &Statement) -> bool {
        matches!(stmt, Statement::Commit)
    }

    fn execute(&self, _stmt: &Statement, ctx: &mut ExecutionContext<'_>) -> Result<CommandResult> {
        let depth = ctx.transactions.commit()?;
        Ok(CommandResult::Depth(depth))
    }
}

/// ABORT: the innermost store is dropped
pub struct AbortExecutor;

impl Executor for AbortExecutor {
    fn name(&self) -> &'static str {
        "ABORT"
    }

    fn can_handle(&self, stmt: &Statement) -> bool {
        matches!(stmt, Statement::Abort)
    }

    fn execute(&self, _stmt: &Statement, ctx: &mut ExecutionContext<'_>) -> Result<CommandResult> {
        let depth = ctx.transactions.abort()?;
        Ok(CommandResult::Depth(depth))
    }
}
