//! Relative-direction sectors: labeled wedges partitioning the full circle
//! around a point, anchored to the user's heading. Sector 0 is always the one
//! directly behind the heading, and the rest proceed clockwise, so "ahead"
//! means the same thing whatever direction the user faces.

use std::fmt;

use serde::{Deserialize, Serialize};

use geom::{normalize_degrees, Distance, GpsPolygon, LonLat};

/// Where a feature sits relative to the current heading. A closed set; the
/// audio layer maps each variant to a spoken phrase or a spatial azimuth.
/// The coarse scheme uses the eight cardinal variants; the combined scheme
/// adds the four finer side variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum RelativeDirection {
    Behind,
    BehindLeft,
    LeftBehind,
    Left,
    LeftAhead,
    AheadLeft,
    Ahead,
    AheadRight,
    RightAhead,
    Right,
    RightBehind,
    BehindRight,
}

impl RelativeDirection {
    /// The canonical center of this direction, in degrees clockwise from the
    /// heading. Spatial audio turns this into a pan azimuth.
    pub fn azimuth_degrees(self) -> f64 {
        match self {
            RelativeDirection::Behind => 180.0,
            RelativeDirection::BehindLeft => 210.0,
            RelativeDirection::LeftBehind => 240.0,
            RelativeDirection::Left => 270.0,
            RelativeDirection::LeftAhead => 300.0,
            RelativeDirection::AheadLeft => 330.0,
            RelativeDirection::Ahead => 0.0,
            RelativeDirection::AheadRight => 30.0,
            RelativeDirection::RightAhead => 60.0,
            RelativeDirection::Right => 90.0,
            RelativeDirection::RightBehind => 120.0,
            RelativeDirection::BehindRight => 150.0,
        }
    }
}

impl fmt::Display for RelativeDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let phrase = match self {
            RelativeDirection::Behind => "behind",
            RelativeDirection::BehindLeft => "behind to the left",
            RelativeDirection::LeftBehind => "to the left and behind",
            RelativeDirection::Left => "to the left",
            RelativeDirection::LeftAhead => "to the left and ahead",
            RelativeDirection::AheadLeft => "ahead to the left",
            RelativeDirection::Ahead => "ahead",
            RelativeDirection::AheadRight => "ahead to the right",
            RelativeDirection::RightAhead => "to the right and ahead",
            RelativeDirection::Right => "to the right",
            RelativeDirection::RightBehind => "to the right and behind",
            RelativeDirection::BehindRight => "behind to the right",
        };
        write!(f, "{}", phrase)
    }
}

/// How finely to slice the circle.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum SectorScheme {
    /// 8 sectors of 45 degrees.
    Coarse,
    /// 12 sectors of 30 degrees -- enough resolution to tell "ahead left"
    /// from a side road off to the left.
    Combined,
}

impl SectorScheme {
    fn labels(self) -> &'static [RelativeDirection] {
        match self {
            SectorScheme::Coarse => &[
                RelativeDirection::Behind,
                RelativeDirection::BehindLeft,
                RelativeDirection::Left,
                RelativeDirection::AheadLeft,
                RelativeDirection::Ahead,
                RelativeDirection::AheadRight,
                RelativeDirection::Right,
                RelativeDirection::BehindRight,
            ],
            SectorScheme::Combined => &[
                RelativeDirection::Behind,
                RelativeDirection::BehindLeft,
                RelativeDirection::LeftBehind,
                RelativeDirection::Left,
                RelativeDirection::LeftAhead,
                RelativeDirection::AheadLeft,
                RelativeDirection::Ahead,
                RelativeDirection::AheadRight,
                RelativeDirection::RightAhead,
                RelativeDirection::Right,
                RelativeDirection::RightBehind,
                RelativeDirection::BehindRight,
            ],
        }
    }
}

/// One labeled wedge of the circle around `apex`. The angular range is
/// half-open -- a point exactly on the shared edge of two sectors belongs to
/// the clockwise-later one -- so the sectors of one build partition the
/// circle with no gaps or double-claims.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DirectionSector {
    pub label: RelativeDirection,
    pub apex: LonLat,
    /// Absolute compass bearing of the counterclockwise edge.
    start_bearing: f64,
    sweep_degrees: f64,
    radius: Distance,
    /// The wedge as a polygon, for rendering and debugging.
    pub polygon: GpsPolygon,
}

impl DirectionSector {
    fn new(
        label: RelativeDirection,
        apex: LonLat,
        start_bearing: f64,
        sweep_degrees: f64,
        radius: Distance,
    ) -> DirectionSector {
        DirectionSector {
            label,
            apex,
            start_bearing,
            sweep_degrees,
            radius,
            polygon: GpsPolygon::wedge(apex, start_bearing, sweep_degrees, radius),
        }
    }

    /// Is the point inside this wedge? Equivalent to containment in
    /// `polygon`, but with the boundary tie-break done exactly: bearing in
    /// [start, start + sweep), distance within the radius.
    pub fn contains(&self, pt: LonLat) -> bool {
        if self.apex.gps_dist_meters(pt) > self.radius {
            return false;
        }
        let bearing = self.apex.initial_bearing_to(pt);
        normalize_degrees(bearing - self.start_bearing) < self.sweep_degrees
    }
}

/// Slice the circle around `apex` into labeled wedges of `radius`, anchored
/// so that the first sector sits directly behind `heading_degrees` and the
/// rest proceed clockwise. Panics on a non-positive radius.
pub fn build_sectors(
    apex: LonLat,
    heading_degrees: f64,
    radius: Distance,
    scheme: SectorScheme,
) -> Vec<DirectionSector> {
    assert!(
        radius > Distance::ZERO,
        "direction sectors with radius {}",
        radius
    );

    let labels = scheme.labels();
    let width = 360.0 / (labels.len() as f64);
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let start =
                normalize_degrees(heading_degrees + 180.0 - width / 2.0 + width * (i as f64));
            DirectionSector::new(*label, apex, start, width, radius)
        })
        .collect()
}
