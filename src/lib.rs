//! Airplane seat allocation.
//!
//! Passengers travel in groups that want to sit together, and some of them
//! want a window seat. [`allocator::Allocator`] seats them row by row with a
//! greedy heuristic and reports how satisfied everyone is.

pub mod allocator;
pub mod config;
pub mod models;
pub mod parser;
pub mod render;

pub use allocator::{allocate, Allocator};
pub use config::AllocatorConfig;
pub use parser::{parse_manifest, read_manifest, ParseError};
