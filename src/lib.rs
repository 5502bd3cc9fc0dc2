//! In-memory seat inventory for a single cinema auditorium.
//!
//! The `Auditorium` owns a jagged grid of seats and answers availability
//! queries (free seat counts, first free seat, runs of consecutive free
//! seats) and mutations (reserving or releasing a run). Every mutation is
//! atomic: it either applies in full or leaves the grid untouched.
//!
//! The structure is single-threaded; callers sharing it across threads must
//! wrap it in their own lock.

pub mod auditorium;
pub mod config;
pub mod error;
pub mod models;

pub use auditorium::Auditorium;
pub use error::{ErrorKind, Result, SeatingError};
pub use models::{AuditoriumId, Seat, SeatHandle, SeatMap};
