//! Parser for the textual flight description.
//!
//! ```text
//! 4 4
//! 1W 2 3
//! 4 5 6 7
//! 8
//! ```
//!
//! The first line holds the row count and the seats per row. Every following
//! line is one group; `W` after an id marks a window preference, and a line
//! with a single id is a passenger travelling alone.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{FlightManifest, Passenger, PassengerGroup, PassengerId};

/// Input validation errors. All of them are fatal.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Please provide input file")]
    MissingInput,

    #[error("Please provide input file: cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file is empty")]
    EmptyInput,

    #[error("Please provide valid plane dimensions")]
    MalformedDimensions,

    #[error("Plane dimensions must be >= 1")]
    InvalidDimensions,

    #[error("Input must have at least one passenger")]
    NoPassengers,

    #[error("Invalid passenger format on line {line}: {token:?}")]
    MalformedPassenger { line: usize, token: String },

    #[error("Passenger {id} appears more than once")]
    DuplicatePassenger { id: PassengerId },
}

/// Read and parse the flight description at `path`.
pub fn read_manifest(path: &Path) -> Result<FlightManifest, ParseError> {
    let input = std::fs::read_to_string(path).map_err(|source| ParseError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(&input)
}

/// Parse a flight description.
pub fn parse_manifest(input: &str) -> Result<FlightManifest, ParseError> {
    let mut lines = input.lines();
    let dimensions = lines.next().ok_or(ParseError::EmptyInput)?;
    let (rows, seats_per_row) = parse_dimensions(dimensions)?;

    let mut seen = HashSet::new();
    let mut groups = Vec::new();

    // Line numbers are 1-based and the dimension line is line 1.
    for (index, line) in lines.enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        let in_group = tokens.len() > 1;
        let mut passengers = Vec::with_capacity(tokens.len());
        for token in tokens {
            let (id, wants_window) =
                parse_passenger(token).ok_or_else(|| ParseError::MalformedPassenger {
                    line: index + 2,
                    token: token.to_string(),
                })?;
            if !seen.insert(id) {
                return Err(ParseError::DuplicatePassenger { id });
            }
            passengers.push(Passenger::new(id, wants_window, in_group));
        }

        groups.push(PassengerGroup::new(passengers));
    }

    if groups.is_empty() {
        return Err(ParseError::NoPassengers);
    }

    let manifest = FlightManifest::new(rows, seats_per_row, groups);
    tracing::debug!(
        rows = manifest.rows,
        seats_per_row = manifest.seats_per_row,
        groups = manifest.groups.len(),
        passengers = manifest.passenger_count,
        "parsed flight manifest"
    );
    Ok(manifest)
}

fn parse_dimensions(line: &str) -> Result<(usize, usize), ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [rows, seats] = tokens.as_slice() else {
        return Err(ParseError::MalformedDimensions);
    };

    let rows: i64 = rows.parse().map_err(|_| ParseError::MalformedDimensions)?;
    let seats: i64 = seats.parse().map_err(|_| ParseError::MalformedDimensions)?;
    if rows < 1 || seats < 1 {
        return Err(ParseError::InvalidDimensions);
    }

    let rows = usize::try_from(rows).map_err(|_| ParseError::InvalidDimensions)?;
    let seats = usize::try_from(seats).map_err(|_| ParseError::InvalidDimensions)?;
    Ok((rows, seats))
}

/// Parse `<id>` or `<id>W` into an id and a window preference.
fn parse_passenger(token: &str) -> Option<(PassengerId, bool)> {
    let (digits, wants_window) = match token.strip_suffix('W') {
        Some(digits) => (digits, true),
        None => (token, false),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let id: PassengerId = digits.parse().ok()?;
    (id > 0).then_some((id, wants_window))
}
