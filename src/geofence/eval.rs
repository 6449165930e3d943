//! Distance math and membership evaluation.

use super::model::{
    Coordinate, EventKind, GeofenceEvent, LocationFix, Membership, PointOfInterest,
};

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two coordinates, in meters, via the
/// Haversine formula. No special handling for antimeridian or pole
/// crossings.
pub fn distance_meters(a: &Coordinate, b: &Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Classify `fix` against every point of interest and report the
/// membership changes.
///
/// A fix exactly on the geofence boundary counts as inside. Events
/// come back in `pois` iteration order so repeated evaluations are
/// deterministic; unchanged POIs produce no event. Callers deliver
/// fixes one at a time; each call is a complete, standalone
/// evaluation against `membership`.
pub fn evaluate(
    membership: &Membership,
    fix: &LocationFix,
    pois: &[PointOfInterest],
) -> (Membership, Vec<GeofenceEvent>) {
    let position = fix.coordinate();
    let mut next = membership.clone();
    let mut events = Vec::new();

    for poi in pois {
        let distance = distance_meters(&position, &poi.coordinate);
        let was_inside = membership.contains(&poi.id);
        let is_inside = distance <= poi.geofence_radius;

        if is_inside && !was_inside {
            next.insert(poi.id.clone());
            events.push(GeofenceEvent {
                poi_id: poi.id.clone(),
                kind: EventKind::Entered,
            });
        } else if !is_inside && was_inside {
            next.remove(&poi.id);
            events.push(GeofenceEvent {
                poi_id: poi.id.clone(),
                kind: EventKind::Left,
            });
        }
    }

    (next, events)
}
