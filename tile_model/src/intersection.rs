//! Resolving the intersection the user is approaching, and the roads that
//! meet there.

use geom::{Distance, LonLat};

use crate::{Feature, FeatureCollection, Geometry};

/// How close a road endpoint must be to an intersection node to count as
/// meeting it. Tile coordinates repeat shared nodes with at most float noise,
/// so this is deliberately tight.
pub const ENDPOINT_EPSILON: Distance = Distance::const_meters(0.1);

/// The intersection Point closest to `location` by great-circle distance.
/// Ties go to the earlier feature. None when the collection has no usable
/// intersections -- a normal outcome near dead-ends, not an error.
pub fn nearest_intersection<'a>(
    location: LonLat,
    intersections: &'a FeatureCollection,
) -> Option<&'a Feature> {
    let mut best: Option<(&Feature, Distance)> = None;
    for feature in intersections {
        let pt = match feature.geometry.as_point() {
            Some(pt) => pt,
            None => {
                warn!("Skipping intersection with non-Point geometry");
                continue;
            }
        };
        let dist = location.gps_dist_meters(pt);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => {
                best = Some((feature, dist));
            }
        }
    }
    best.map(|(feature, _)| feature)
}

/// Every road whose LineString starts or ends at the intersection node,
/// within [`ENDPOINT_EPSILON`]. Segments sharing a name stay distinct; the
/// caller decides whether to deduplicate for narration. Roads with unusable
/// geometry are skipped with a diagnostic. An intersection matching nothing
/// yields an empty collection.
pub fn roads_at_intersection(
    intersection: &Feature,
    roads: &FeatureCollection,
) -> FeatureCollection {
    let mut result = FeatureCollection::new();
    let node = match intersection.geometry.as_point() {
        Some(pt) => pt,
        None => {
            warn!("Intersection with non-Point geometry has no roads");
            return result;
        }
    };

    for road in roads {
        let pts = match &road.geometry {
            Geometry::LineString(pts) if pts.len() >= 2 => pts,
            Geometry::LineString(_) => {
                warn!("Skipping road {:?} with a single-vertex geometry", road.name);
                continue;
            }
            _ => {
                warn!("Skipping road {:?} with non-LineString geometry", road.name);
                continue;
            }
        };
        let first = pts[0];
        let last = *pts.last().unwrap();
        if first.approx_eq(node, ENDPOINT_EPSILON) || last.approx_eq(node, ENDPOINT_EPSILON) {
            result.push(road.clone());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intersection_at(pt: LonLat) -> Feature {
        let mut f = Feature::new(Geometry::Point(pt));
        f.feature_type = Some("highway".to_string());
        f.feature_value = Some("gd_intersection".to_string());
        f
    }

    fn road(name: &str, pts: Vec<LonLat>) -> Feature {
        let mut f = Feature::new(Geometry::LineString(pts));
        f.feature_type = Some("highway".to_string());
        f.feature_value = Some("residential".to_string());
        f.name = Some(name.to_string());
        f
    }

    #[test]
    fn picks_the_closest_with_ties_to_input_order() {
        let here = LonLat::new(-2.6157, 51.4579);
        let near = here.project_away(Distance::meters(20.0), 0.0);
        let far = here.project_away(Distance::meters(45.0), 10.0);

        let mut fc = FeatureCollection::new();
        fc.push(intersection_at(far));
        fc.push(intersection_at(near));
        let winner = nearest_intersection(here, &fc).unwrap();
        assert_eq!(winner.geometry.as_point(), Some(near));

        // Exact tie: the first one wins
        let mut tied = FeatureCollection::new();
        let mut first = intersection_at(near);
        first.name = Some("first".to_string());
        tied.push(first);
        let mut second = intersection_at(near);
        second.name = Some("second".to_string());
        tied.push(second);
        assert_eq!(
            nearest_intersection(here, &tied).unwrap().name.as_deref(),
            Some("first")
        );
    }

    #[test]
    fn empty_input_finds_nothing() {
        let here = LonLat::new(-2.6157, 51.4579);
        assert!(nearest_intersection(here, &FeatureCollection::new()).is_none());
    }

    #[test]
    fn roads_match_by_either_endpoint() {
        let node = LonLat::new(-2.6157, 51.4579);
        let away = node.project_away(Distance::meters(80.0), 90.0);
        let elsewhere = node.project_away(Distance::meters(500.0), 180.0);

        let mut roads = FeatureCollection::new();
        roads.push(road("starts here", vec![node, away]));
        roads.push(road("ends here", vec![away, node]));
        roads.push(road(
            "unrelated",
            vec![elsewhere, elsewhere.project_away(Distance::meters(50.0), 90.0)],
        ));

        let found = roads_at_intersection(&intersection_at(node), &roads);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn malformed_roads_are_skipped() {
        let node = LonLat::new(-2.6157, 51.4579);
        let mut roads = FeatureCollection::new();
        roads.push(road("stub", vec![node]));

        let found = roads_at_intersection(&intersection_at(node), &roads);
        assert!(found.is_empty());
    }

    #[test]
    fn unmatched_intersection_has_no_roads() {
        let node = LonLat::new(-2.6157, 51.4579);
        let offset = node.project_away(Distance::meters(10.0), 45.0);
        let mut roads = FeatureCollection::new();
        roads.push(road("nearby", vec![
            offset,
            offset.project_away(Distance::meters(60.0), 90.0),
        ]));

        let found = roads_at_intersection(&intersection_at(node), &roads);
        assert!(found.is_empty());
    }
}
