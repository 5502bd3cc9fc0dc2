//! Reserve and release runs of seats.
//!
//! Both operations validate the whole run before touching any seat, so a
//! rejected call leaves the grid exactly as it was.

use tracing::{debug, warn};

use crate::auditorium::Auditorium;
use crate::error::{Result, SeatingError};
use crate::models::SeatHandle;

impl Auditorium {
    /// Marks `amount` seats taken, starting at `start` and moving right
    /// along its row.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `amount` is zero.
    /// - `NotFound` if `start` was not handed out by this auditorium.
    /// - `NotEnoughSeats` if the free run starting at `start` is shorter
    ///   than `amount` (a taken seat or the end of the row comes first).
    pub fn reserve(&mut self, start: SeatHandle, amount: usize) -> Result<()> {
        if amount == 0 {
            warn!(seat = %start, "reserve rejected: zero amount");
            return Err(SeatingError::invalid_argument("amount must be positive"));
        }
        let (row, column) = self.locate(start).inspect_err(|_| {
            warn!(seat = %start, "reserve rejected: seat not in auditorium");
        })?;

        let seats = &mut self.rows[row][column..];
        let free = seats
            .iter()
            .take(amount)
            .take_while(|seat| seat.is_available())
            .count();
        if free < amount {
            warn!(row, column, amount, free, "reserve rejected: not enough seats");
            return Err(SeatingError::NotEnoughSeats {
                requested: amount,
                available: free,
            });
        }

        seats[..amount].iter_mut().for_each(|seat| seat.take());
        debug!(row, column, amount, "seats reserved");
        Ok(())
    }

    /// Marks `amount` taken seats free again, starting at `start`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `amount` is zero.
    /// - `NotFound` if `start` was not handed out by this auditorium.
    /// - `InvalidRange` if the run would pass the end of the row.
    /// - `PartialRun` if a seat in the run is already free.
    pub fn release_seats(&mut self, start: SeatHandle, amount: usize) -> Result<()> {
        if amount == 0 {
            warn!(seat = %start, "release rejected: zero amount");
            return Err(SeatingError::invalid_argument("amount must be positive"));
        }
        let (row, column) = self.locate(start).inspect_err(|_| {
            warn!(seat = %start, "release rejected: seat not in auditorium");
        })?;

        let seats = &mut self.rows[row][column..];
        if amount > seats.len() {
            warn!(row, column, amount, remaining = seats.len(), "release rejected: past end of row");
            return Err(SeatingError::InvalidRange {
                requested: amount,
                remaining: seats.len(),
            });
        }

        let taken = seats[..amount]
            .iter()
            .take_while(|seat| !seat.is_available())
            .count();
        if taken < amount {
            warn!(row, column, amount, taken, "release rejected: run contains a free seat");
            return Err(SeatingError::PartialRun {
                requested: amount,
                taken,
            });
        }

        seats[..amount].iter_mut().for_each(|seat| seat.release());
        debug!(row, column, amount, "seats released");
        Ok(())
    }

    /// Reserves the first run of `amount` seats that fits inside one row and
    /// returns its first seat.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `amount` is zero.
    /// - `NotEnoughSeats` if no row has such a run; `available` then carries
    ///   the longest run any row could offer.
    pub fn reserve_best(&mut self, amount: usize) -> Result<SeatHandle> {
        let Some(start) = self.consecutive_in_any_row(amount)? else {
            let available = self.longest_free_run();
            warn!(amount, available, "no row can seat the party");
            return Err(SeatingError::NotEnoughSeats {
                requested: amount,
                available,
            });
        };
        self.reserve(start, amount)?;
        Ok(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn at(auditorium: &Auditorium, row: usize, column: usize) -> SeatHandle {
        auditorium.seat(row, column).unwrap().handle()
    }

    #[test]
    fn reserve_takes_the_run() {
        let mut auditorium = Auditorium::new(&[5, 5, 5]);
        auditorium.reserve(at(&auditorium, 0, 0), 3).unwrap();

        let map = auditorium.snapshot();
        assert_eq!(map.rows[0], vec![false, false, false, true, true]);
        assert_eq!(auditorium.count_available(), 12);
    }

    #[test]
    fn reserve_past_row_end_leaves_grid_alone() {
        let mut auditorium = Auditorium::new(&[5, 5]);
        let before = auditorium.snapshot();

        let err = auditorium.reserve(at(&auditorium, 0, 4), 2).unwrap_err();
        assert_eq!(
            err,
            SeatingError::NotEnoughSeats { requested: 2, available: 1 }
        );
        assert_eq!(auditorium.snapshot(), before);
    }

    #[test]
    fn reserve_stops_at_taken_seat() {
        let mut auditorium = Auditorium::new(&[6]);
        auditorium.reserve(at(&auditorium, 0, 3), 1).unwrap();
        let before = auditorium.snapshot();

        let err = auditorium.reserve(at(&auditorium, 0, 1), 3).unwrap_err();
        assert_eq!(
            err,
            SeatingError::NotEnoughSeats { requested: 3, available: 2 }
        );
        assert_eq!(auditorium.snapshot(), before);
    }

    #[test]
    fn reserve_rejects_zero_and_foreign_seats() {
        let mut auditorium = Auditorium::new(&[3]);
        let other = Auditorium::new(&[3]);

        let err = auditorium.reserve(at(&auditorium, 0, 0), 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = auditorium.reserve(at(&other, 0, 0), 1).unwrap_err();
        assert_eq!(err, SeatingError::NotFound { row: 0, column: 0 });
        assert_eq!(auditorium.count_available(), 3);
    }

    #[test]
    fn release_restores_reserved_run() {
        let mut auditorium = Auditorium::new(&[4]);
        let fresh = auditorium.snapshot();
        let start = at(&auditorium, 0, 1);

        auditorium.reserve(start, 3).unwrap();
        auditorium.release_seats(start, 3).unwrap();
        assert_eq!(auditorium.snapshot(), fresh);
    }

    #[test]
    fn release_past_row_end_is_invalid_range() {
        let mut auditorium = Auditorium::new(&[4]);
        auditorium.reserve(at(&auditorium, 0, 2), 2).unwrap();
        let before = auditorium.snapshot();

        let err = auditorium.release_seats(at(&auditorium, 0, 2), 3).unwrap_err();
        assert_eq!(
            err,
            SeatingError::InvalidRange { requested: 3, remaining: 2 }
        );
        assert_eq!(auditorium.snapshot(), before);
    }

    #[test]
    fn release_over_free_seat_is_partial_run() {
        let mut auditorium = Auditorium::new(&[5]);
        auditorium.reserve(at(&auditorium, 0, 0), 2).unwrap();
        let before = auditorium.snapshot();

        let err = auditorium.release_seats(at(&auditorium, 0, 0), 3).unwrap_err();
        assert_eq!(err, SeatingError::PartialRun { requested: 3, taken: 2 });
        assert_eq!(auditorium.snapshot(), before);
    }

    #[test]
    fn release_rejects_zero_and_foreign_seats() {
        let mut auditorium = Auditorium::new(&[3]);
        let other = Auditorium::new(&[3]);

        let err = auditorium.release_seats(at(&auditorium, 0, 0), 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = auditorium.release_seats(at(&other, 0, 2), 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn reserve_best_picks_first_fitting_row() {
        let mut auditorium = Auditorium::new(&[2, 4, 4]);

        let first = auditorium.reserve_best(3).unwrap();
        assert_eq!((first.row(), first.column()), (1, 0));

        let second = auditorium.reserve_best(3).unwrap();
        assert_eq!((second.row(), second.column()), (2, 0));

        let err = auditorium.reserve_best(3).unwrap_err();
        assert_eq!(
            err,
            SeatingError::NotEnoughSeats { requested: 3, available: 2 }
        );
        assert_eq!(auditorium.count_available(), 4);
    }
}
