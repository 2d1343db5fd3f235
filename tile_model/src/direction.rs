//! Assigning each road at an intersection to a relative-direction sector.
//!
//! Tile data doesn't promise anything about a road's vertex order relative to
//! the intersection node, so the walk along the road is tried from both ends:
//! whichever reference point first lands in a sector decides the direction.

use geom::{Distance, GpsPolyline, LonLat};

use crate::{DirectionSector, Feature, Geometry, RelativeDirection};

/// How far along a road to walk before asking "which way does this road go".
/// Close enough to stay on the same block, far enough to clear the
/// intersection geometry itself.
pub const ROAD_REFERENCE_DISTANCE: Distance = Distance::const_meters(25.0);

/// The point `target` along the line from its start (or from its end, with
/// `reversed`), interpolating between the bounding vertices; the far endpoint
/// when the line is shorter than `target`.
pub fn reference_coordinate(line: &GpsPolyline, target: Distance, reversed: bool) -> LonLat {
    if reversed {
        line.reversed().dist_along(target)
    } else {
        line.dist_along(target)
    }
}

/// The first sector (in sector order) containing the road's forward
/// reference point, or failing that its reversed one. None means the road
/// couldn't be resolved -- never silently defaulted to "ahead" -- either
/// because both reference points fall outside every sector or because the
/// geometry is unusable.
pub fn sector_for_road(
    road: &Feature,
    sectors: &[DirectionSector],
    reference_distance: Distance,
) -> Option<RelativeDirection> {
    let line = match &road.geometry {
        Geometry::LineString(pts) => match GpsPolyline::maybe_new(pts.clone()) {
            Some(line) => line,
            None => {
                warn!(
                    "Skipping road {:?}: a LineString needs at least 2 points",
                    road.name
                );
                return None;
            }
        },
        _ => {
            warn!("Skipping road {:?} with non-LineString geometry", road.name);
            return None;
        }
    };

    let forward = reference_coordinate(&line, reference_distance, false);
    let reverse = reference_coordinate(&line, reference_distance, true);

    for sector in sectors {
        if sector.contains(forward) || sector.contains(reverse) {
            return Some(sector.label);
        }
    }
    debug!("Road {:?} matched no direction sector", road.name);
    None
}
