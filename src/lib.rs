// ============================================================================
// RustMemKV Library
// ============================================================================
//
// In-memory key/value store driven by a line-oriented command interpreter,
// with nested transactions that can be committed or aborted.
//
// ============================================================================

pub mod config;
pub mod core;
pub mod executor;
pub mod facade;
pub mod parser;
pub mod result;
pub mod storage;
pub mod transaction;

// Re-export main types for convenience
pub use config::{InputSource, ReplConfig};
pub use crate::core::{KvError, Result, USAGE};
pub use facade::{Flow, Session};
pub use result::CommandResult;
pub use storage::Store;
pub use transaction::{TransactionOutcome, TransactionStack};
