//! Field-of-view construction and filtering: a forward-facing wedge anchored
//! at the user, used to decide which tile features are currently relevant.

use geom::{Distance, GpsPolygon, LonLat};

use crate::{FeatureCollection, Geometry};

/// Half the angular width of the view cone. The cone spans the quadrant
/// centered on the heading.
pub const FOV_HALF_ANGLE_DEGREES: f64 = 45.0;

/// The wedge extending `distance` forward of `location`, bisected by
/// `heading_degrees`. Panics on a non-positive distance; callers that might
/// hold a degenerate distance should go through [`filter_by_fov`], which
/// treats it as "nothing visible".
pub fn fov_polygon(location: LonLat, heading_degrees: f64, distance: Distance) -> GpsPolygon {
    assert!(
        distance > Distance::ZERO,
        "field of view with distance {}",
        distance
    );
    GpsPolygon::wedge(
        location,
        heading_degrees - FOV_HALF_ANGLE_DEGREES,
        2.0 * FOV_HALF_ANGLE_DEGREES,
        distance,
    )
}

/// The subset of `collection` visible in the wedge. Always a subset of the
/// input; a non-positive distance means an empty result.
pub fn filter_by_fov(
    location: LonLat,
    heading_degrees: f64,
    distance: Distance,
    collection: &FeatureCollection,
) -> FeatureCollection {
    let mut result = FeatureCollection::new();
    if distance <= Distance::ZERO {
        warn!("field of view with distance {}, treating as empty", distance);
        return result;
    }

    let fov = fov_polygon(location, heading_degrees, distance);
    for feature in collection {
        let visible = match &feature.geometry {
            Geometry::Point(pt) => fov.contains(*pt),
            Geometry::LineString(pts) => fov.intersects_line(pts),
            Geometry::Polygon(rings) => match rings.first() {
                Some(outer) => fov.intersects_polygon(outer),
                None => {
                    warn!("Skipping polygon feature with no rings");
                    false
                }
            },
        };
        if visible {
            result.push(feature.clone());
        }
    }
    result
}
