use std::fmt;
use std::time::Duration;

/// Errors surfaced by the engine.
///
/// A degenerate value range (`max == min`) and a palette shorter than the class
/// count are handled cases, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Empty series, non-finite value, zero classes, malformed breaks or range.
    InvalidInput { reason: String },
    /// A background solve missed the caller's deadline.
    Timeout { after: Duration },
    /// A background worker ended without sending a result.
    WorkerLost,
}

impl EngineError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Self::Timeout { after } => {
                write!(f, "breaks solve did not finish within {} ms", after.as_millis())
            }
            Self::WorkerLost => write!(f, "breaks worker terminated without a result"),
        }
    }
}

impl std::error::Error for EngineError {}
