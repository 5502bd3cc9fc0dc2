use crate::auditorium::Auditorium;
use crate::models::{Seat, SeatHandle};

impl Auditorium {
    /// Number of free seats in the whole auditorium.
    pub fn count_available(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|seat| seat.is_available())
            .count()
    }

    /// First free seat of `row`, scanning columns left to right.
    ///
    /// A row outside the auditorium is treated as "nothing found", not as an
    /// error (unlike `consecutive_in_row`).
    pub fn first_available_in_row(&self, row: usize) -> Option<SeatHandle> {
        self.rows
            .get(row)?
            .iter()
            .find(|seat| seat.is_available())
            .map(Seat::handle)
    }

    /// First free seat in row-major order.
    pub fn first_available(&self) -> Option<SeatHandle> {
        self.rows
            .iter()
            .flatten()
            .find(|seat| seat.is_available())
            .map(Seat::handle)
    }
}
