use thiserror::Error;

/// Failure to read a `"HH:MM"` clock string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseClockError {
    #[error("clock time {0:?} is missing the ':' separator")]
    MissingSeparator(String),
    #[error("clock time {0:?} has a non-numeric hour")]
    InvalidHour(String),
    #[error("clock time {0:?} has a minute outside 00-59")]
    InvalidMinute(String),
}
