//! Core extraction engine: the occurrence data model, the marker parser,
//! and the aggregation fold. Pure and I/O-free; the scanner feeds it and
//! the renderers consume its output.

mod aggregate;
mod occurrence;

pub use aggregate::{AggregatedReport, KeyRecord, aggregate};
pub use occurrence::{KeyOccurrence, RawOccurrence, Scope, parse};
