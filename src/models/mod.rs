//! Domain models for the seat allocator.
//!
//! # Core Concepts
//!
//! ## Input
//!
//! - [`Passenger`]: A traveller with a window preference and an accumulated satisfaction score.
//! - [`PassengerGroup`]: Passengers that want to sit together in one row. Atomic until the
//!   allocator proves it can never fit a single row.
//! - [`FlightManifest`]: Plane dimensions plus every group on the flight.
//!
//! ## Allocation State
//!
//! - [`RowState`]: Seat, window and satisfaction counters for one opened row.
//!
//! ## Output
//!
//! - [`SeatingArrangement`]: Final seat-by-seat layout and the aggregate satisfaction.

mod arrangement;
mod manifest;
mod passenger;
mod row;

pub use arrangement::*;
pub use manifest::*;
pub use passenger::*;
pub use row::*;
