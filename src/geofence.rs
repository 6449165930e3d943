//! Geofence evaluation for location-based discovery zones.
//!
//! Types live in `geofence::model`, the Haversine distance and the
//! membership evaluation in `geofence::eval`. Location fixes arrive
//! from an external feed; this module only classifies them.

mod eval;
mod model;

pub use eval::*;
pub use model::*;

#[cfg(test)]
mod tests;
