use serde::{Deserialize, Serialize};

use super::PassengerGroup;

/// Everything the allocator needs to know about a flight.
///
/// `passenger_count` may exceed `rows * seats_per_row` when the flight is
/// oversubscribed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightManifest {
    pub rows: usize,
    pub seats_per_row: usize,
    pub groups: Vec<PassengerGroup>,
    pub passenger_count: usize,
}

impl FlightManifest {
    /// Create a manifest, counting passengers from `groups`.
    pub fn new(rows: usize, seats_per_row: usize, groups: Vec<PassengerGroup>) -> Self {
        let passenger_count = groups.iter().map(PassengerGroup::len).sum();
        Self {
            rows,
            seats_per_row,
            groups,
            passenger_count,
        }
    }

    /// Seats physically available on the plane, saturating at `usize::MAX`.
    pub fn capacity(&self) -> usize {
        self.rows.saturating_mul(self.seats_per_row)
    }

    pub fn is_oversubscribed(&self) -> bool {
        self.passenger_count > self.capacity()
    }
}
