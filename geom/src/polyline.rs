use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Distance, LonLat};

/// An ordered sequence of at least 2 GPS points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GpsPolyline {
    pts: Vec<LonLat>,
}

impl GpsPolyline {
    pub fn new(pts: Vec<LonLat>) -> GpsPolyline {
        assert!(pts.len() >= 2, "GpsPolyline needs at least 2 points");
        GpsPolyline { pts }
    }

    /// None when there aren't enough points to form a line. Tile data
    /// sometimes truncates a way to a single vertex; callers skip those.
    pub fn maybe_new(pts: Vec<LonLat>) -> Option<GpsPolyline> {
        if pts.len() < 2 {
            return None;
        }
        Some(GpsPolyline { pts })
    }

    pub fn reversed(&self) -> GpsPolyline {
        let mut pts = self.pts.clone();
        pts.reverse();
        GpsPolyline::new(pts)
    }

    pub fn points(&self) -> &Vec<LonLat> {
        &self.pts
    }

    pub fn first_pt(&self) -> LonLat {
        self.pts[0]
    }

    pub fn last_pt(&self) -> LonLat {
        *self.pts.last().unwrap()
    }

    pub fn length(&self) -> Distance {
        self.pts
            .windows(2)
            .map(|pair| pair[0].gps_dist_meters(pair[1]))
            .sum()
    }

    /// The point `dist_along` from the start, walking vertex to vertex and
    /// linearly interpolating along the segment where the target falls. If the
    /// whole line is shorter than `dist_along`, this is the last point.
    pub fn dist_along(&self, dist_along: Distance) -> LonLat {
        if dist_along <= Distance::ZERO {
            return self.first_pt();
        }

        let mut dist_left = dist_along;
        for pair in self.pts.windows(2) {
            let length = pair[0].gps_dist_meters(pair[1]);
            if dist_left <= length && length > Distance::ZERO {
                let pct = dist_left / length;
                return LonLat::new(
                    pair[0].longitude + pct * (pair[1].longitude - pair[0].longitude),
                    pair[0].latitude + pct * (pair[1].latitude - pair[0].latitude),
                );
            }
            dist_left -= length;
        }
        self.last_pt()
    }
}

impl fmt::Display for GpsPolyline {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "GpsPolyline::new(vec![")?;
        for pt in &self.pts {
            writeln!(f, "  LonLat::new({}, {}),", pt.longitude, pt.latitude)?;
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dist_along_interpolates() {
        // Two segments along a parallel, about 69.4m each at this latitude
        let line = GpsPolyline::new(vec![
            LonLat::new(-2.657, 51.4304),
            LonLat::new(-2.656, 51.4304),
            LonLat::new(-2.655, 51.4304),
        ]);
        let total = line.length();
        assert!((total.inner_meters() - 138.8).abs() < 1.0, "got {}", total);

        let mid = line.dist_along(total / 2.0);
        assert!((mid.longitude - (-2.656)).abs() < 1e-6);
        assert!((mid.latitude - 51.4304).abs() < 1e-9);
    }

    #[test]
    fn dist_along_clamps_to_last_point() {
        let line = GpsPolyline::new(vec![
            LonLat::new(-2.657, 51.4304),
            LonLat::new(-2.6565, 51.4304),
        ]);
        let past_the_end = line.dist_along(Distance::meters(500.0));
        assert_eq!(past_the_end, line.last_pt());
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let line = GpsPolyline::new(vec![
            LonLat::new(-2.657, 51.4304),
            LonLat::new(-2.656, 51.4309),
        ]);
        let rev = line.reversed();
        assert_eq!(line.first_pt(), rev.last_pt());
        assert_eq!(line.last_pt(), rev.first_pt());
    }

    #[test]
    fn too_few_points() {
        assert!(GpsPolyline::maybe_new(vec![LonLat::new(0.0, 0.0)]).is_none());
    }
}
