use thiserror::Error;

pub type Result<T> = std::result::Result<T, SeatingError>;

/// Errors raised by auditorium operations.
///
/// Finder misses are not errors; they come back as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("seat ({row}, {column}) does not belong to this auditorium")]
    NotFound { row: usize, column: usize },

    #[error("not enough seats: requested {requested}, only {available} free in a row")]
    NotEnoughSeats { requested: usize, available: usize },

    #[error("invalid range: requested {requested} seats, only {remaining} left in the row")]
    InvalidRange { requested: usize, remaining: usize },

    #[error("partial run: requested {requested} seats, only {taken} taken before a free seat")]
    PartialRun { requested: usize, taken: usize },
}

/// Fieldless category of a `SeatingError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    NotEnoughSeats,
    InvalidRange,
    PartialRun,
}

impl SeatingError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        SeatingError::InvalidArgument { reason: reason.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SeatingError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            SeatingError::NotFound { .. } => ErrorKind::NotFound,
            SeatingError::NotEnoughSeats { .. } => ErrorKind::NotEnoughSeats,
            SeatingError::InvalidRange { .. } => ErrorKind::InvalidRange,
            SeatingError::PartialRun { .. } => ErrorKind::PartialRun,
        }
    }
}
