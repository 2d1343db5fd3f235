//! The spatial reasoning engine behind a pedestrian-navigation aid: it takes
//! one map tile's worth of decoded features plus a location/heading snapshot,
//! and produces "this road is in that relative direction" facts for an audio
//! layer to narrate.
//!
//! Everything here is a pure, synchronous function over immutable values. The
//! pipeline is re-run from scratch on every location/heading fix; nothing
//! holds state between calls, so concurrent invocations with different inputs
//! are independently safe.

#[macro_use]
extern crate log;

mod classify;
mod direction;
mod feature;
mod fov;
mod intersection;
mod pipeline;
mod sector;
mod taxonomy;
mod tile;

pub use crate::classify::{entrances, intersections, paths, points_of_interest, roads};
pub use crate::direction::{reference_coordinate, sector_for_road, ROAD_REFERENCE_DISTANCE};
pub use crate::feature::{Feature, FeatureCollection, Geometry};
pub use crate::fov::{filter_by_fov, fov_polygon, FOV_HALF_ANGLE_DEGREES};
pub use crate::intersection::{nearest_intersection, roads_at_intersection, ENDPOINT_EPSILON};
pub use crate::pipeline::{
    callouts_for_fix, callouts_near, CalloutConfig, IntersectionCallout, NavigationFix,
    RoadCallout, TileSource,
};
pub use crate::sector::{build_sectors, DirectionSector, RelativeDirection, SectorScheme};
pub use crate::taxonomy::{filter_by_super_category, SuperCategory};
pub use crate::tile::{Tile, ZOOM};
