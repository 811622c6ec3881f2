use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaseError {
    /// The input was absent (null) or not a text value. Raised before any
    /// output is produced; callers should treat it as a call-site bug rather
    /// than a recoverable runtime condition.
    #[error("input must be a string (received: {received})")]
    InvalidArgument { received: &'static str },
}
