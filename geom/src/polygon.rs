use geo::{Contains, Intersects};
use serde::{Deserialize, Serialize};

use crate::{normalize_degrees, Distance, LonLat};

/// Degrees between consecutive arc vertices when approximating a wedge.
const ARC_STEP_DEGREES: f64 = 5.0;

/// A simple polygon in GPS space: one outer ring, no holes. The ring is
/// stored closed (first point equals last).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GpsPolygon {
    ring: Vec<LonLat>,
}

impl GpsPolygon {
    pub fn new(mut ring: Vec<LonLat>) -> GpsPolygon {
        assert!(ring.len() >= 3, "GpsPolygon needs at least 3 points");
        if ring[0] != *ring.last().unwrap() {
            ring.push(ring[0]);
        }
        GpsPolygon { ring }
    }

    pub fn maybe_new(ring: Vec<LonLat>) -> Option<GpsPolygon> {
        if ring.len() < 3 {
            return None;
        }
        Some(GpsPolygon::new(ring))
    }

    /// A pie-slice wedge: apex, then an arc at `radius` from `start_bearing`
    /// sweeping `sweep_degrees` clockwise. The arc is approximated with a
    /// vertex every few degrees, so containment works out to the full radius
    /// at every bearing in the range.
    pub fn wedge(
        apex: LonLat,
        start_bearing: f64,
        sweep_degrees: f64,
        radius: Distance,
    ) -> GpsPolygon {
        assert!(
            radius > Distance::ZERO,
            "wedge with radius {} at {}",
            radius,
            apex
        );
        assert!(sweep_degrees > 0.0 && sweep_degrees <= 360.0);

        let mut ring = vec![apex];
        let steps = (sweep_degrees / ARC_STEP_DEGREES).ceil() as usize;
        for i in 0..=steps {
            let bearing = start_bearing + sweep_degrees * (i as f64) / (steps as f64);
            ring.push(apex.project_away(radius, normalize_degrees(bearing)));
        }
        ring.push(apex);
        GpsPolygon { ring }
    }

    pub fn points(&self) -> &Vec<LonLat> {
        &self.ring
    }

    /// Is the point inside the polygon or on its boundary?
    pub fn contains(&self, pt: LonLat) -> bool {
        let poly = self.to_geo();
        let pt = geo::Point::new(pt.longitude, pt.latitude);
        poly.contains(&pt) || poly.intersects(&pt)
    }

    /// Does any part of the line touch the polygon? Catches both a vertex
    /// landing inside and a segment crossing straight through.
    pub fn intersects_line(&self, pts: &[LonLat]) -> bool {
        if pts.is_empty() {
            return false;
        }
        if pts.len() == 1 {
            return self.contains(pts[0]);
        }
        let line = geo::LineString(pts.iter().map(|pt| pt.to_geo()).collect());
        self.to_geo().intersects(&line)
    }

    /// Does another polygon's outer ring overlap this one? True also when one
    /// fully contains the other.
    pub fn intersects_polygon(&self, outer_ring: &[LonLat]) -> bool {
        if outer_ring.len() < 3 {
            return self.intersects_line(outer_ring);
        }
        let other = geo::Polygon::new(
            geo::LineString(outer_ring.iter().map(|pt| pt.to_geo()).collect()),
            Vec::new(),
        );
        self.to_geo().intersects(&other)
    }

    fn to_geo(&self) -> geo::Polygon<f64> {
        geo::Polygon::new(
            geo::LineString(self.ring.iter().map(|pt| pt.to_geo()).collect()),
            Vec::new(),
        )
    }
}
