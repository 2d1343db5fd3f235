//! The full per-fix pipeline: classify the tile, filter by field of view,
//! resolve the nearest intersection, and label each of its roads with a
//! relative direction. Re-run from scratch on every location/heading sample.

use anyhow::Result;

use geom::{Distance, LonLat};

use crate::{
    build_sectors, classify, filter_by_fov, nearest_intersection, roads_at_intersection,
    sector_for_road, FeatureCollection, RelativeDirection, SectorScheme, Tile,
    ROAD_REFERENCE_DISTANCE, ZOOM,
};

/// One location/heading sample from the sensor-fusion layer. Heading is in
/// degrees clockwise from north, [0, 360).
#[derive(Clone, Copy, Debug)]
pub struct NavigationFix {
    pub location: LonLat,
    pub heading_degrees: f64,
}

/// The tunable constants of a callout run, with the defaults the reference
/// scenarios were produced under.
#[derive(Clone, Copy, Debug)]
pub struct CalloutConfig {
    /// How far ahead the field of view reaches; also the radius of the
    /// direction sectors built at the intersection.
    pub fov_distance: Distance,
    pub scheme: SectorScheme,
    /// How far along each road to walk for its direction reference point.
    pub reference_distance: Distance,
}

impl Default for CalloutConfig {
    fn default() -> CalloutConfig {
        CalloutConfig {
            fov_distance: Distance::const_meters(50.0),
            scheme: SectorScheme::Combined,
            reference_distance: ROAD_REFERENCE_DISTANCE,
        }
    }
}

/// One road at the resolved intersection. `direction` is None when the road
/// couldn't be placed in any sector; the audio layer decides whether to say
/// anything about it.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadCallout {
    pub name: String,
    pub direction: Option<RelativeDirection>,
}

/// What to narrate for one fix: the intersection the user is approaching and
/// where each of its roads leads, relative to the heading. The intersection
/// coordinate doubles as the target for placing an audio beacon.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionCallout {
    pub intersection: LonLat,
    pub roads: Vec<RoadCallout>,
}

/// Runs the whole pipeline over one decoded tile. None when no intersection
/// is in view -- common mid-block or at a dead-end, and not worth narrating.
/// Deterministic: identical inputs give identical output, in input road
/// order.
pub fn callouts_for_fix(
    fix: &NavigationFix,
    tile_features: &FeatureCollection,
    cfg: &CalloutConfig,
) -> Option<IntersectionCallout> {
    let roads = classify::roads(tile_features);
    let intersections = classify::intersections(tile_features);

    let roads_in_view = filter_by_fov(fix.location, fix.heading_degrees, cfg.fov_distance, &roads);
    let intersections_in_view = filter_by_fov(
        fix.location,
        fix.heading_degrees,
        cfg.fov_distance,
        &intersections,
    );

    let intersection = nearest_intersection(fix.location, &intersections_in_view)?;
    let node = intersection.geometry.as_point()?;
    let connected = roads_at_intersection(intersection, &roads_in_view);

    // Sectors sit on the intersection, not on the user: the question is
    // which way each road leaves the junction.
    let sectors = build_sectors(node, fix.heading_degrees, cfg.fov_distance, cfg.scheme);

    let mut callouts = Vec::new();
    for road in &connected {
        callouts.push(RoadCallout {
            name: road_display_name(road),
            direction: sector_for_road(road, &sectors, cfg.reference_distance),
        });
    }

    info!(
        "{} roads at intersection {}, {} in view total",
        callouts.len(),
        node,
        roads_in_view.len()
    );
    Some(IntersectionCallout {
        intersection: node,
        roads: callouts,
    })
}

// Tiles leave service roads and the like unnamed; fall back to the tag so the
// narration can still say something.
fn road_display_name(road: &crate::Feature) -> String {
    if let Some(name) = &road.name {
        return name.clone();
    }
    if let Some(value) = &road.feature_value {
        return value.clone();
    }
    "unnamed road".to_string()
}

/// Where tile payloads come from. The engine performs no I/O itself; the
/// application injects whatever fetch/cache layer it has.
pub trait TileSource {
    fn load_tile(&self, tile: Tile) -> Result<FeatureCollection>;
}

/// Loads the zoom-16 tile containing the fix and runs the pipeline on it.
pub fn callouts_near(
    source: &dyn TileSource,
    fix: &NavigationFix,
    cfg: &CalloutConfig,
) -> Result<Option<IntersectionCallout>> {
    let tile = Tile::containing(fix.location, ZOOM);
    let features = source.load_tile(tile)?;
    Ok(callouts_for_fix(fix, &features, cfg))
}
