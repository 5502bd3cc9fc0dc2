use serde::{Deserialize, Serialize};
use std::fmt;

use super::AuditoriumId;

/// Availability snapshot of a whole auditorium, `true` meaning free.
///
/// Two snapshots of the same auditorium are equal exactly when every seat
/// has the same state, so tests use it to check that rejected mutations
/// left the grid alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap {
    pub auditorium: AuditoriumId,
    pub rows: Vec<Vec<bool>>,
}

impl SeatMap {
    pub fn count_available(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|free| **free).count())
            .sum()
    }
}

// Seat plan: one line per row, `.` free and `X` taken.
impl fmt::Display for SeatMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.rows.len().saturating_sub(1).to_string().len();
        for (i, row) in self.rows.iter().enumerate() {
            write!(f, "{:>width$} |", i, width = width)?;
            for free in row {
                f.write_str(if *free { "." } else { "X" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_plan_and_counts() {
        let map = SeatMap {
            auditorium: AuditoriumId::new(),
            rows: vec![vec![false, true, true], vec![], vec![true]],
        };
        assert_eq!(map.count_available(), 3);
        assert_eq!(map.to_string(), "0 |X..\n1 |\n2 |.\n");
    }

    #[test]
    fn serializes_to_json() {
        let map = SeatMap {
            auditorium: AuditoriumId::new(),
            rows: vec![vec![true, false]],
        };
        let json = serde_json::to_string(&map).unwrap();
        let back: SeatMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
