//! Record loading and normalization
//!
//! This module turns the two static input sources into validated collections:
//! - `equipment`: the tabular inventory (CSV), read through polars
//! - `maintenance`: the structured log (JSON array of objects)
//!
//! Both loaders normalize every field into a `RawRecord` first (column
//! renames, date parsing, missing values to absence) and then validate. The
//! first invalid record aborts the load; there is no partial result.

pub mod equipment;
pub mod maintenance;

#[cfg(test)]
pub mod tests;

// Re-export the loader entry points
pub use equipment::{equipment_from_frame, load_equipment};
pub use maintenance::{load_maintenance, parse_maintenance};
