//! End-to-end runs over small fixture tiles, covering the three intersection
//! shapes the engine most often narrates: carrying straight on across a
//! junction, a right turn, and a left turn.

use geom::{Distance, LonLat};
use tile_model::{
    callouts_for_fix, entrances, filter_by_fov, intersections, paths, points_of_interest, roads,
    CalloutConfig, FeatureCollection, NavigationFix, RelativeDirection,
};

const STRAIGHT: &str = include_str!("fixtures/intersection_straight.geojson");
const RIGHT_LEFT: &str = include_str!("fixtures/intersection_right_left.geojson");

fn direction_of(callout: &tile_model::IntersectionCallout, road: &str) -> RelativeDirection {
    callout
        .roads
        .iter()
        .find(|r| r.name == road)
        .unwrap_or_else(|| panic!("{} missing from {:?}", road, callout))
        .direction
        .unwrap_or_else(|| panic!("{} unresolved", road))
}

#[test]
fn straight_ahead_across_a_road_switch() {
    // Standing on Weston Road facing east, where it becomes Long Ashton Road
    let tile = FeatureCollection::from_geojson_str(STRAIGHT).unwrap();
    let fix = NavigationFix {
        location: LonLat::new(-2.6573400576040456, 51.430456817236575),
        heading_degrees: 90.0,
    };

    let callout = callouts_for_fix(&fix, &tile, &CalloutConfig::default()).unwrap();
    assert_eq!(callout.roads.len(), 2);
    assert_eq!(
        direction_of(&callout, "Weston Road"),
        RelativeDirection::Behind
    );
    assert_eq!(
        direction_of(&callout, "Long Ashton Road"),
        RelativeDirection::Ahead
    );

    // The nearer of the two intersections in view wins
    assert!(callout
        .intersection
        .approx_eq(LonLat::new(-2.6569081, 51.4304568), Distance::meters(0.1)));
}

#[test]
fn right_turn_from_belgrave_place() {
    // Standing on Belgrave Place facing south-west; Codrington Place heads
    // off to the right
    let tile = FeatureCollection::from_geojson_str(RIGHT_LEFT).unwrap();
    let fix = NavigationFix {
        location: LonLat::new(-2.615585745757045, 51.457957257918395),
        heading_degrees: 225.0,
    };

    let callout = callouts_for_fix(&fix, &tile, &CalloutConfig::default()).unwrap();
    assert_eq!(
        direction_of(&callout, "Belgrave Place"),
        RelativeDirection::Behind
    );
    assert_eq!(
        direction_of(&callout, "Codrington Place"),
        RelativeDirection::Right
    );
}

#[test]
fn left_turn_from_codrington_place() {
    // Same junction, now standing on Codrington Place facing south-east
    let tile = FeatureCollection::from_geojson_str(RIGHT_LEFT).unwrap();
    let fix = NavigationFix {
        location: LonLat::new(-2.6159411752634583, 51.45799104056931),
        heading_degrees: 135.0,
    };

    let callout = callouts_for_fix(&fix, &tile, &CalloutConfig::default()).unwrap();
    assert_eq!(
        direction_of(&callout, "Codrington Place"),
        RelativeDirection::Behind
    );
    assert_eq!(
        direction_of(&callout, "Belgrave Place"),
        RelativeDirection::Left
    );
}

#[test]
fn classification_partitions_the_fixture_tile() {
    let tile = FeatureCollection::from_geojson_str(STRAIGHT).unwrap();
    let buckets = [
        roads(&tile),
        paths(&tile),
        intersections(&tile),
        entrances(&tile),
        points_of_interest(&tile),
    ];
    assert_eq!(buckets.iter().map(|b| b.len()).sum::<usize>(), tile.len());
    for feature in &tile {
        let hits = buckets
            .iter()
            .filter(|b| b.iter().any(|f| f == feature))
            .count();
        assert_eq!(hits, 1);
    }

    assert_eq!(roads(&tile).len(), 2);
    assert_eq!(intersections(&tile).len(), 2);
    assert_eq!(paths(&tile).len(), 1);
    assert_eq!(entrances(&tile).len(), 1);
    assert_eq!(points_of_interest(&tile).len(), 1);
}

#[test]
fn fov_filter_returns_a_subset() {
    let tile = FeatureCollection::from_geojson_str(STRAIGHT).unwrap();
    let location = LonLat::new(-2.6573400576040456, 51.430456817236575);
    let visible = filter_by_fov(location, 90.0, Distance::meters(50.0), &tile);
    assert!(visible.len() <= tile.len());
    for feature in &visible {
        assert!(tile.iter().any(|f| f == feature));
    }
}

#[test]
fn pipeline_is_deterministic() {
    let tile = FeatureCollection::from_geojson_str(STRAIGHT).unwrap();
    let fix = NavigationFix {
        location: LonLat::new(-2.6573400576040456, 51.430456817236575),
        heading_degrees: 90.0,
    };
    let cfg = CalloutConfig::default();

    let first = callouts_for_fix(&fix, &tile, &cfg);
    let second = callouts_for_fix(&fix, &tile, &cfg);
    assert_eq!(first, second);
}
