//! Phase-boundary claims: documents must not claim excluded features ship.

pub mod claims;

pub use claims::{BoundaryScanner, BoundaryViolation};
