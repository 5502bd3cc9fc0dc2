//! The seat grid of one auditorium.
//!
//! Rows are stored as a vector of seat vectors, so rows may have different
//! widths (including zero). The shape is fixed at construction; afterwards
//! only seat availability changes, and only through `reserve` and
//! `release_seats`.
//!
//! The methods are split across files by concern:
//! - `queries.rs`: counting and first-free lookups
//! - `search.rs`: consecutive-run search
//! - `booking.rs`: reserve / release

use tracing::debug;

use crate::error::{Result, SeatingError};
use crate::models::{AuditoriumId, Seat, SeatHandle, SeatMap};

pub mod booking;
pub mod queries;
pub mod search;

#[derive(Debug, Clone)]
pub struct Auditorium {
    id: AuditoriumId,
    rows: Vec<Vec<Seat>>,
}

impl Auditorium {
    /// Builds an auditorium with `widths.len()` rows, row `i` holding
    /// `widths[i]` seats. Every seat starts out available.
    pub fn new(widths: &[usize]) -> Self {
        let id = AuditoriumId::new();
        let rows: Vec<Vec<Seat>> = widths
            .iter()
            .enumerate()
            .map(|(row, &width)| {
                (0..width)
                    .map(|column| Seat::new(SeatHandle::new(id, row, column)))
                    .collect()
            })
            .collect();

        let auditorium = Self { id, rows };
        debug!(
            auditorium = %id,
            rows = auditorium.row_count(),
            seats = auditorium.total_seats(),
            "auditorium created"
        );
        auditorium
    }

    pub fn id(&self) -> AuditoriumId {
        self.id
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of `row`, or `None` when the row does not exist.
    pub fn row_width(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    pub fn total_seats(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn seat(&self, row: usize, column: usize) -> Option<&Seat> {
        self.rows.get(row)?.get(column)
    }

    /// Looks up the seat a handle points at. `None` for handles minted by a
    /// different auditorium.
    pub fn resolve(&self, handle: SeatHandle) -> Option<&Seat> {
        if handle.auditorium() != self.id {
            return None;
        }
        self.seat(handle.row(), handle.column())
    }

    /// Rows in ascending order, each as a slice of seats in column order.
    pub fn rows(&self) -> impl Iterator<Item = &[Seat]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn snapshot(&self) -> SeatMap {
        SeatMap {
            auditorium: self.id,
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(Seat::is_available).collect())
                .collect(),
        }
    }

    // Grid coordinates of a handle that belongs to this auditorium.
    fn locate(&self, handle: SeatHandle) -> Result<(usize, usize)> {
        match self.resolve(handle) {
            Some(seat) => Ok((seat.row(), seat.column())),
            None => Err(SeatingError::NotFound {
                row: handle.row(),
                column: handle.column(),
            }),
        }
    }
}
