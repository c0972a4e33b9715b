use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers.
///
/// Store-side failures during the four operations are deliberately not
/// represented here: they are logged and mapped to fallback values (`false`,
/// an empty vec, or [`WriteOutcome::Failed`](crate::WriteOutcome::Failed)).
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was absent. Raised before any network call.
    #[error("{0} parameter is empty, nothing to do")]
    InvalidArgument(&'static str),

    /// The connection could not be set up at construction time.
    #[error(transparent)]
    Connection(#[from] mongodb::error::Error),
}
