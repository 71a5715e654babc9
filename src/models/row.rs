use serde::{Deserialize, Serialize};

/// Counters for one opened row.
///
/// Neither `available_seats` nor `available_window_seats` ever drops below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowState {
    pub available_seats: usize,
    pub available_window_seats: usize,
    /// Sum of the satisfaction awarded to passengers seated in this row.
    pub row_satisfaction: f64,
}

impl RowState {
    pub fn new(seats: usize, window_seats: usize) -> Self {
        Self {
            available_seats: seats,
            available_window_seats: window_seats,
            row_satisfaction: 0.0,
        }
    }

    pub fn fits(&self, seats: usize) -> bool {
        seats <= self.available_seats
    }

    pub fn fits_windows(&self, window_seats: usize) -> bool {
        window_seats <= self.available_window_seats
    }

    pub fn has_window_seat(&self) -> bool {
        self.available_window_seats > 0
    }

    pub fn take_seat(&mut self) {
        self.available_seats = self.available_seats.saturating_sub(1);
    }

    pub fn take_window_seat(&mut self) {
        self.available_window_seats = self.available_window_seats.saturating_sub(1);
    }

    pub fn add_satisfaction(&mut self, amount: f64) {
        self.row_satisfaction += amount;
    }
}
