//! Allocator configuration: row geometry and scoring weights.

use serde::{Deserialize, Serialize};

/// Environment variable overriding the number of window seats per row.
pub const WINDOW_SEATS_ENV: &str = "SEAT_ALLOCATOR_WINDOW_SEATS";

const DEFAULT_WINDOW_SEATS: usize = 2;

/// Satisfaction awarded for each seating outcome.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SatisfactionWeights {
    /// Preference fully met.
    pub full: f64,
    /// Preference partly met (window granted after separation, or seated with
    /// the group but away from a window).
    pub half: f64,
    /// Preference not met.
    pub none: f64,
}

impl Default for SatisfactionWeights {
    fn default() -> Self {
        Self {
            full: 1.0,
            half: 0.5,
            none: 0.0,
        }
    }
}

/// Configuration passed to the allocator at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AllocatorConfig {
    pub window_seats_per_row: usize,
    pub weights: SatisfactionWeights,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            window_seats_per_row: DEFAULT_WINDOW_SEATS,
            weights: SatisfactionWeights::default(),
        }
    }
}

impl AllocatorConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_window_seats_var(std::env::var(WINDOW_SEATS_ENV).ok())
    }

    fn from_window_seats_var(value: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = value {
            match raw.trim().parse::<usize>() {
                Ok(window_seats) => config.window_seats_per_row = window_seats,
                Err(_) => tracing::warn!(
                    value = %raw,
                    "ignoring {}: not an unsigned integer",
                    WINDOW_SEATS_ENV
                ),
            }
        }
        config
    }

    pub fn with_window_seats(mut self, window_seats_per_row: usize) -> Self {
        self.window_seats_per_row = window_seats_per_row;
        self
    }

    pub fn with_weights(mut self, weights: SatisfactionWeights) -> Self {
        self.weights = weights;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_two_windows() {
        let config = AllocatorConfig::default();
        assert_eq!(config.window_seats_per_row, 2);
        assert_eq!(config.weights, SatisfactionWeights::default());
    }

    #[test]
    fn window_seats_var_overrides_default() {
        let config = AllocatorConfig::from_window_seats_var(Some("4".to_string()));
        assert_eq!(config.window_seats_per_row, 4);
    }

    #[test]
    fn invalid_window_seats_var_is_ignored() {
        let config = AllocatorConfig::from_window_seats_var(Some("many".to_string()));
        assert_eq!(config.window_seats_per_row, 2);

        let config = AllocatorConfig::from_window_seats_var(Some("-1".to_string()));
        assert_eq!(config.window_seats_per_row, 2);
    }

    #[test]
    fn builder_overrides_weights() {
        let weights = SatisfactionWeights {
            full: 2.0,
            half: 1.0,
            none: 0.0,
        };
        let config = AllocatorConfig::default().with_weights(weights);
        assert_eq!(config.weights.full, 2.0);
    }
}
