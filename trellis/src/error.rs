//! Error types.

use thiserror::Error;

/// Errors raised by tree view operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeViewError {
    /// One or more configured column addresses do not exist on the
    /// source. Enabling fails atomically; prior state is unchanged.
    #[error("unresolved tree view column(s): {}", missing.join(", "))]
    MissingColumns {
        /// Every column address that failed to resolve, in
        /// configuration order.
        missing: Vec<String>,
    },

    /// A parent-chain walk exceeded the total row count, meaning the
    /// parent links form a cycle. The triggering operation is aborted;
    /// the dataset must be fixed before retrying.
    #[error("parent chain starting at row {row} exceeded {limit} hops: parent links form a cycle")]
    ParentCycle {
        /// Row position whose ancestor walk overran.
        row: usize,
        /// Hop bound that was exceeded (the row count).
        limit: usize,
    },
}
