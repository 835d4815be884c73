use std::fmt;

/// A caller-supplied record violates a data-model invariant.
///
/// Raised by the consumer-facing validation step before a record reaches
/// the storage layer; the storage layer performs no validation of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Session subject is empty
    EmptySubject,
    /// Session duration is not a positive number of minutes
    ZeroDuration,
    /// Goal title is empty
    EmptyTitle,
    /// Goal target is empty
    EmptyTarget,
    /// Goal progress is outside [0, 100]
    ProgressOutOfRange(u8),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptySubject => write!(f, "subject must not be empty"),
            ValidationError::ZeroDuration => {
                write!(f, "duration must be a positive number of minutes")
            }
            ValidationError::EmptyTitle => write!(f, "title must not be empty"),
            ValidationError::EmptyTarget => write!(f, "target must not be empty"),
            ValidationError::ProgressOutOfRange(value) => {
                write!(f, "progress must be between 0 and 100, got {}", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
