//! Consecutive-run search.
//!
//! All searches share one primitive: walk seats in order, keep the length of
//! the current free run and where it started, and stop the first time the
//! run reaches the requested length. The leftmost (earliest) run wins.

use tracing::trace;

use crate::auditorium::Auditorium;
use crate::error::{Result, SeatingError};
use crate::models::{Seat, SeatHandle};

// Start of the first free run of length `amount` in `seats`.
fn first_run<'a>(seats: impl IntoIterator<Item = &'a Seat>, amount: usize) -> Option<SeatHandle> {
    let mut start = None;
    let mut length = 0;
    for seat in seats {
        if !seat.is_available() {
            start = None;
            length = 0;
            continue;
        }
        let first = *start.get_or_insert(seat.handle());
        length += 1;
        if length == amount {
            return Some(first);
        }
    }
    None
}

// Longest free run inside a single row.
fn longest_run(seats: &[Seat]) -> usize {
    seats
        .split(|seat| !seat.is_available())
        .map(<[Seat]>::len)
        .max()
        .unwrap_or(0)
}

fn check_amount(amount: usize) -> Result<()> {
    if amount == 0 {
        return Err(SeatingError::invalid_argument("amount must be positive"));
    }
    Ok(())
}

impl Auditorium {
    /// First seat of the leftmost run of `amount` free seats in `row`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `row` does not exist or `amount` is zero.
    pub fn consecutive_in_row(&self, row: usize, amount: usize) -> Result<Option<SeatHandle>> {
        let seats = self.rows.get(row).ok_or_else(|| {
            SeatingError::invalid_argument(format!(
                "row {} outside 0..{}",
                row,
                self.row_count()
            ))
        })?;
        check_amount(amount)?;

        let found = first_run(seats, amount);
        if found.is_none() {
            trace!(row, amount, "no consecutive run in row");
        }
        Ok(found)
    }

    /// First seat of the earliest run of `amount` free seats in row-major
    /// order.
    ///
    /// The run counter is NOT reset when the scan moves to the next row; it
    /// only resets on a taken seat. A run may therefore start near the end
    /// of one row and finish at the start of the next, in which case the
    /// returned seat is followed by fewer than `amount` seats in its own
    /// row and cannot be passed to `reserve` as-is. Use
    /// `consecutive_in_any_row` for runs confined to one row.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `amount` is zero.
    pub fn consecutive(&self, amount: usize) -> Result<Option<SeatHandle>> {
        check_amount(amount)?;

        let found = first_run(self.rows.iter().flatten(), amount);
        if found.is_none() {
            trace!(amount, "no consecutive run in auditorium");
        }
        Ok(found)
    }

    /// Like `consecutive`, but every run lies within a single row: the
    /// counter restarts at each row.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `amount` is zero.
    pub fn consecutive_in_any_row(&self, amount: usize) -> Result<Option<SeatHandle>> {
        check_amount(amount)?;

        let found = self.rows.iter().find_map(|row| first_run(row, amount));
        if found.is_none() {
            trace!(amount, "no row holds a consecutive run");
        }
        Ok(found)
    }

    /// Length of the longest free run that fits inside one row.
    pub fn longest_free_run(&self) -> usize {
        self.rows
            .iter()
            .map(|row| longest_run(row))
            .max()
            .unwrap_or(0)
    }
}
