use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of one auditorium. Minted fresh on every construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuditoriumId(Uuid);

impl AuditoriumId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for AuditoriumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque address of a seat: `(auditorium, row, column)`.
///
/// Handles are only minted by an `Auditorium`, so every handle names a real
/// seat somewhere. Reserve/release compare the whole triple, which is what
/// makes a seat from another auditorium a `NotFound` even when the
/// coordinates happen to exist here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SeatHandle {
    auditorium: AuditoriumId,
    row: usize,
    column: usize,
}

impl SeatHandle {
    pub(crate) fn new(auditorium: AuditoriumId, row: usize, column: usize) -> Self {
        Self { auditorium, row, column }
    }

    pub fn auditorium(&self) -> AuditoriumId {
        self.auditorium
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for SeatHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
