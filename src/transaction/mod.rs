// ============================================================================
// Transaction Management Module
// ============================================================================
//
// Nested transactions as an explicit stack of store snapshots:
// - START pushes a deep copy of the current store
// - COMMIT pops the top store and writes it over its parent
// - ABORT pops the top store and drops it
//
// The root store (depth 0) can never be popped.
//
// ============================================================================

pub mod manager;
pub mod state;

pub use manager::TransactionStack;
pub use state::TransactionOutcome;
