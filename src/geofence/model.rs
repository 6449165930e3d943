//! Geofence types: coordinates, points of interest and events.

use std::collections::HashSet;

/// A point on the globe, in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A location fix from the platform's location feed.
///
/// `accuracy` is carried for display purposes only; it does not
/// influence geofence membership.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: Option<f64>,
}

impl LocationFix {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A point of interest with a circular geofence around it.
///
/// Static for a session; evaluation never mutates these.
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub coordinate: Coordinate,
    /// Geofence radius in meters. Must be positive.
    pub geofence_radius: f64,
}

/// The set of POI ids the last fix was inside of.
pub type Membership = HashSet<String>;

/// Direction of a membership change.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// The fix moved into the geofence.
    Entered,
    /// The fix moved out of the geofence.
    Left,
}

/// One membership change, addressed by POI id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeofenceEvent {
    pub poi_id: String,
    pub kind: EventKind,
}
