use mongodb::results::{DeleteResult, UpdateResult};

/// Outcome of a multi-document write.
///
/// A failed write carries no detail on purpose: the underlying error has
/// already been logged, and callers only learn that the operation did not
/// complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome<T> {
    /// The store accepted the operation; `T` reports the affected counts.
    Completed(T),
    /// The store call failed. The error was logged, not returned.
    Failed,
}

impl<T> WriteOutcome<T> {
    pub fn is_failed(&self) -> bool {
        matches!(self, WriteOutcome::Failed)
    }

    /// Returns the summary of a completed write, or `None` on failure.
    pub fn completed(self) -> Option<T> {
        match self {
            WriteOutcome::Completed(summary) => Some(summary),
            WriteOutcome::Failed => None,
        }
    }
}

/// Counts reported by a completed update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateSummary {
    pub matched_count: u64,
    pub modified_count: u64,
}

impl From<UpdateResult> for UpdateSummary {
    fn from(result: UpdateResult) -> Self {
        Self {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        }
    }
}

/// Count reported by a completed delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteSummary {
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteSummary {
    fn from(result: DeleteResult) -> Self {
        Self {
            deleted_count: result.deleted_count,
        }
    }
}
