// ============================================================================
// Transaction Outcome
// ============================================================================
//
// A nested transaction ends in exactly one of two ways:
//
// ```text
// START ──COMMIT──> Committed   (child store replaces the parent store)
//   │
//   └──ABORT──> Aborted         (child store is dropped, parent untouched)
// ```
//
// ============================================================================

/// How an open transaction level was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionOutcome {
    Committed,
    Aborted,
}

impl TransactionOutcome {
    /// Whether the child's changes become visible to the parent
    pub fn is_committed(&self) -> bool {
        matches!(self, TransactionOutcome::Committed)
    }
}

impl std::fmt::Display for TransactionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionOutcome::Committed => write!(f, "COMMITTED"),
            TransactionOutcome::Aborted => write!(f, "ABORTED"),
        }
    }
}
