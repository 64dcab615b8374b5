// ============================================================================
// Transaction Stack
// ============================================================================

use super::TransactionOutcome;
use crate::core::{KvError, Result};
use crate::storage::Store;
use tracing::{debug, trace};

/// Stack of stores, one per open transaction level.
///
/// The root store lives outside the vector so that there is always a current
/// store to apply commands to. `open[n - 1]` is the store of depth `n`.
#[derive(Debug, Default)]
pub struct TransactionStack {
    root: Store,
    open: Vec<Store>,
}

impl TransactionStack {
    /// Empty root store, no open transactions
    pub fn new() -> Self {
        Self::with_root(Store::new())
    }

    pub fn with_root(root: Store) -> Self {
        Self {
            root,
            open: Vec::new(),
        }
    }

    /// Number of open transactions; 0 at the root
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn in_transaction(&self) -> bool {
        !self.open.is_empty()
    }

    /// Store at the deepest open level
    pub fn current(&self) -> &Store {
        self.open.last().unwrap_or(&self.root)
    }

    pub fn current_mut(&mut self) -> &mut Store {
        match self.open.last_mut() {
            Some(store) => store,
            None => &mut self.root,
        }
    }

    /// Store at a given depth, if that level is open
    pub fn store_at(&self, depth: usize) -> Option<&Store> {
        match depth {
            0 => Some(&self.root),
            n => self.open.get(n - 1),
        }
    }

    pub fn root(&self) -> &Store {
        &self.root
    }

    /// Open a new level seeded with a copy of the current store.
    /// Returns the new depth.
    pub fn begin(&mut self) -> usize {
        let snapshot = self.current().copy();
        self.open.push(snapshot);
        debug!(depth = self.depth(), entries = self.current().len(), "transaction started");
        self.depth()
    }

    /// Close the deepest level, replacing its parent's store with it.
    pub fn commit(&mut self) -> Result<usize> {
        self.end(TransactionOutcome::Committed)
    }

    /// Close the deepest level, discarding its store.
    pub fn abort(&mut self) -> Result<usize> {
        self.end(TransactionOutcome::Aborted)
    }

    /// Close the deepest level with the given outcome. Returns the depth
    /// after closing. Fails without any change when no transaction is open.
    pub fn end(&mut self, outcome: TransactionOutcome) -> Result<usize> {
        let child = self.open.pop().ok_or(KvError::NoActiveTransaction)?;

        if outcome.is_committed() {
            *self.current_mut() = child;
            trace!(keys = ?self.current().keys(), "parent store replaced");
        }

        debug!(depth = self.depth(), %outcome, "transaction closed");
        Ok(self.depth())
    }
}
