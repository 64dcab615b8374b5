use super::ExecutionContext;
use super::control::QuitExecutor;
use super::delete::DeleteExecutor;
use super::dml::WriteExecutor;
use super::query::ReadExecutor;
use super::transaction::{AbortExecutor, CommitExecutor, StartExecutor};
use crate::core::{KvError, Result};
use crate::parser::ast::Statement;
use crate::result::CommandResult;
use tracing::trace;

pub trait Executor {
    /// Name used in trace output
    fn name(&self) -> &'static str;

    fn can_handle(&self, stmt: &Statement) -> bool;
    fn execute(&self, stmt: &Statement, ctx: &mut ExecutionContext<'_>) -> Result<CommandResult>;
}

pub struct ExecutorPipeline {
    pub executors: Vec<Box<dyn Executor>>,
}

impl ExecutorPipeline {
    pub fn new() -> Self {
        Self {
            executors: Vec::new(),
        }
    }

    /// Pipeline with an executor for every command
    pub fn with_default_executors() -> Self {
        let mut pipeline = Self::new();
        // Transaction control first
        pipeline.register(Box::new(StartExecutor));
        pipeline.register(Box::new(CommitExecutor));
        pipeline.register(Box::new(AbortExecutor));

        pipeline.register(Box::new(ReadExecutor));
        pipeline.register(Box::new(WriteExecutor));
        pipeline.register(Box::new(DeleteExecutor));

        pipeline.register(Box::new(QuitExecutor));
        pipeline
    }

    pub fn register(&mut self, executor: Box<dyn Executor>) {
        self.executors.push(executor);
    }

    pub fn execute(
        &self,
        stmt: &Statement,
        ctx: &mut ExecutionContext<'_>,
    ) -> Result<CommandResult> {
        for executor in &self.executors {
            if executor.can_handle(stmt) {
                trace!(
                    executor = executor.name(),
                    depth = ctx.transactions.depth(),
                    "executing"
                );
                return executor.execute(stmt, ctx);
            }
        }

        Err(KvError::UnrecognizedCommand(stmt.name().to_string()))
    }
}

impl Default for ExecutorPipeline {
    fn default() -> Self {
        Self::with_default_executors()
    }
}
