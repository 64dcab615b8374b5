pub mod context;
pub mod control;
pub mod delete;
pub mod dml;
pub mod executor;
pub mod query;
pub mod transaction;

pub use context::ExecutionContext;
pub use executor::{Executor, ExecutorPipeline};
