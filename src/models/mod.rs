pub mod identity;
pub mod seat;
pub mod seat_map;

pub use identity::{AuditoriumId, SeatHandle};
pub use seat::Seat;
pub use seat_map::SeatMap;
