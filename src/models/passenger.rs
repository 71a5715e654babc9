use serde::{Deserialize, Serialize};

/// Unique passenger identifier as it appears in the input file.
pub type PassengerId = u32;

/// A single traveller.
///
/// `satisfaction` starts at zero and is only ever increased by the allocator.
/// For every passenger it stays within `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    pub id: PassengerId,
    pub wants_window: bool,
    /// False only for passengers travelling alone.
    pub in_group: bool,
    /// Set once the passenger's group was dissolved into the overflow pool.
    #[serde(default)]
    pub separated_from_group: bool,
    #[serde(default)]
    pub satisfaction: f64,
}

impl Passenger {
    pub fn new(id: PassengerId, wants_window: bool, in_group: bool) -> Self {
        Self {
            id,
            wants_window,
            in_group,
            separated_from_group: false,
            satisfaction: 0.0,
        }
    }

    /// Add `amount` to the passenger's satisfaction.
    pub fn award(&mut self, amount: f64) {
        self.satisfaction += amount;
    }
}

/// Passengers wishing to sit together in one row.
///
/// Window-preferring members always come first; the relative order of members
/// with the same preference is the order they were given in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerGroup {
    passengers: Vec<Passenger>,
}

impl PassengerGroup {
    pub fn new(mut passengers: Vec<Passenger>) -> Self {
        passengers.sort_by_key(|p| !p.wants_window);
        Self { passengers }
    }

    /// Build a group from `(id, wants_window)` pairs, marking membership the
    /// way the input format does: a single entry is a solo traveller.
    pub fn from_pairs(pairs: &[(PassengerId, bool)]) -> Self {
        let in_group = pairs.len() > 1;
        Self::new(
            pairs
                .iter()
                .map(|&(id, wants_window)| Passenger::new(id, wants_window, in_group))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Number of members asking for a window seat.
    pub fn window_count(&self) -> usize {
        self.passengers.iter().filter(|p| p.wants_window).count()
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn into_passengers(self) -> Vec<Passenger> {
        self.passengers
    }
}
