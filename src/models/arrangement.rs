use serde::{Deserialize, Serialize};

use super::{Passenger, PassengerId};

/// The final seating produced by one allocation run.
///
/// `rows` holds at most the plane's nominal row count, each row listing its
/// occupants left to right. `opened_rows` counts every row the allocator had
/// to open, including overbooked rows that were trimmed from the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatingArrangement {
    pub rows: Vec<Vec<Passenger>>,
    /// Aggregate satisfaction as a percentage in `0.0..=100.0`.
    pub satisfaction: f64,
    pub passenger_count: usize,
    pub opened_rows: usize,
}

impl SeatingArrangement {
    /// Passenger ids per row, in seat order.
    pub fn seat_ids(&self) -> Vec<Vec<PassengerId>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|p| p.id).collect())
            .collect()
    }

    pub fn seated_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Satisfaction rendered the way it is printed, e.g. `78.75%`.
    pub fn formatted_satisfaction(&self) -> String {
        crate::allocator::format_percentage(self.satisfaction)
    }
}
