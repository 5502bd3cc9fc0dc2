use serde::Serialize;

use super::SeatHandle;

/// A single seat cell. Availability only changes through the owning
/// `Auditorium`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seat {
    handle: SeatHandle,
    available: bool,
}

impl Seat {
    pub(crate) fn new(handle: SeatHandle) -> Self {
        Self { handle, available: true }
    }

    pub fn handle(&self) -> SeatHandle {
        self.handle
    }

    pub fn row(&self) -> usize {
        self.handle.row()
    }

    pub fn column(&self) -> usize {
        self.handle.column()
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub(crate) fn take(&mut self) {
        debug_assert!(self.available, "seat {} taken twice", self.handle);
        self.available = false;
    }

    pub(crate) fn release(&mut self) {
        debug_assert!(!self.available, "seat {} released while free", self.handle);
        self.available = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AuditoriumId;

    #[test]
    fn take_and_release_flip_availability() {
        let mut seat = Seat::new(SeatHandle::new(AuditoriumId::new(), 0, 3));
        assert!(seat.is_available());
        assert_eq!((seat.row(), seat.column()), (0, 3));

        seat.take();
        assert!(!seat.is_available());

        seat.release();
        assert!(seat.is_available());
    }
}
