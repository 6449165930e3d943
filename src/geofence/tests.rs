use super::*;

fn poi(id: &str, lat: f64, lon: f64, radius: f64) -> PointOfInterest {
    PointOfInterest {
        id: id.into(),
        title: id.into(),
        description: String::new(),
        coordinate: Coordinate {
            latitude: lat,
            longitude: lon,
        },
        geofence_radius: radius,
    }
}

fn fix(lat: f64, lon: f64) -> LocationFix {
    LocationFix {
        latitude: lat,
        longitude: lon,
        accuracy: None,
    }
}

#[test]
fn distance_to_self_is_zero() {
    let plaza = Coordinate {
        latitude: 14.5995,
        longitude: 120.9842,
    };
    assert_eq!(distance_meters(&plaza, &plaza), 0.0);
}

#[test]
fn distance_is_symmetric_and_plausible() {
    let plaza = Coordinate {
        latitude: 14.5995,
        longitude: 120.9842,
    };
    let north = Coordinate {
        latitude: 14.61,
        longitude: 120.99,
    };

    let there = distance_meters(&plaza, &north);
    let back = distance_meters(&north, &plaza);
    assert!((there - back).abs() < 1e-6);

    // Roughly 1.4 km apart.
    assert!(there > 1_000.0 && there < 2_000.0, "got {there}");
}

#[test]
fn fix_at_the_poi_coordinate_enters_the_geofence() {
    let pois = [poi("poi1", 14.5995, 120.9842, 100.0)];
    let membership = Membership::new();

    let (next, events) = evaluate(&membership, &fix(14.5995, 120.9842), &pois);
    assert!(next.contains("poi1"));
    assert_eq!(
        events,
        vec![GeofenceEvent {
            poi_id: "poi1".into(),
            kind: EventKind::Entered,
        }]
    );
}

#[test]
fn moving_away_emits_a_left_event() {
    let pois = [poi("poi1", 14.5995, 120.9842, 100.0)];

    let (inside, _) = evaluate(&Membership::new(), &fix(14.5995, 120.9842), &pois);
    let (outside, events) = evaluate(&inside, &fix(14.61, 120.99), &pois);

    assert!(!outside.contains("poi1"));
    assert_eq!(
        events,
        vec![GeofenceEvent {
            poi_id: "poi1".into(),
            kind: EventKind::Left,
        }]
    );
}

#[test]
fn unchanged_membership_emits_no_events() {
    let pois = [poi("poi1", 14.5995, 120.9842, 100.0)];

    let (inside, _) = evaluate(&Membership::new(), &fix(14.5995, 120.9842), &pois);
    // Still inside: a few meters of drift within the radius.
    let (still_inside, events) = evaluate(&inside, &fix(14.5996, 120.9842), &pois);

    assert_eq!(still_inside, inside);
    assert!(events.is_empty());

    // Still outside: never entered, no event either.
    let (still_outside, events) = evaluate(&Membership::new(), &fix(14.7, 121.1), &pois);
    assert!(still_outside.is_empty());
    assert!(events.is_empty());
}

#[test]
fn events_follow_poi_iteration_order() {
    let pois = [
        poi("plaza", 14.5995, 120.9842, 100.0),
        poi("arena", 14.6042, 120.9822, 100.0),
        poi("corner", 14.5950, 120.9900, 100.0),
    ];

    // A point far from all three: every previously-inside id leaves,
    // in declaration order.
    let membership: Membership = pois.iter().map(|p| p.id.clone()).collect();
    let (next, events) = evaluate(&membership, &fix(15.0, 121.5), &pois);

    assert!(next.is_empty());
    let order: Vec<&str> = events.iter().map(|e| e.poi_id.as_str()).collect();
    assert_eq!(order, vec!["plaza", "arena", "corner"]);
    assert!(events.iter().all(|e| e.kind == EventKind::Left));
}

#[test]
fn accuracy_does_not_affect_membership() {
    let pois = [poi("poi1", 14.5995, 120.9842, 100.0)];
    let coarse = LocationFix {
        latitude: 14.5995,
        longitude: 120.9842,
        accuracy: Some(500.0),
    };

    let (next, _) = evaluate(&Membership::new(), &coarse, &pois);
    assert!(next.contains("poi1"));
}

#[test]
fn boundary_distance_counts_as_inside() {
    // A radius matching the computed distance: `<=` keeps the fix in.
    let plaza = Coordinate {
        latitude: 14.5995,
        longitude: 120.9842,
    };
    let nearby = fix(14.6005, 120.9842);
    let d = distance_meters(&plaza, &nearby.coordinate());

    let pois = [poi("poi1", plaza.latitude, plaza.longitude, d)];
    let (next, _) = evaluate(&Membership::new(), &nearby, &pois);
    assert!(next.contains("poi1"));
}
