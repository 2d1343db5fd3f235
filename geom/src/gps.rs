use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Distance, EARTH_RADIUS_METERS};

/// Wraps any angle in degrees into [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

// longitude is x, latitude is y
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LonLat {
    pub longitude: f64,
    pub latitude: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> LonLat {
        LonLat {
            longitude: lon,
            latitude: lat,
        }
    }

    pub fn gps_dist_meters(&self, other: LonLat) -> Distance {
        // Haversine distance
        let lon1 = self.longitude.to_radians();
        let lon2 = other.longitude.to_radians();
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let delta_lat = lat2 - lat1;
        let delta_lon = lon2 - lon1;

        let a = (delta_lat / 2.0).sin().powi(2)
            + (delta_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        Distance::meters(EARTH_RADIUS_METERS * c)
    }

    /// Initial great-circle bearing towards `other`, in degrees clockwise from
    /// north, normalized to [0, 360).
    pub fn initial_bearing_to(&self, other: LonLat) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let y = delta_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();
        normalize_degrees(y.atan2(x).to_degrees())
    }

    /// The point `dist` away along the great circle leaving this point at
    /// `bearing_degrees` (clockwise from north).
    pub fn project_away(&self, dist: Distance, bearing_degrees: f64) -> LonLat {
        let delta = dist.inner_meters() / EARTH_RADIUS_METERS;
        let theta = bearing_degrees.to_radians();
        let lat1 = self.latitude.to_radians();
        let lon1 = self.longitude.to_radians();

        let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
        let lon2 = lon1
            + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());
        LonLat::new(lon2.to_degrees(), lat2.to_degrees())
    }

    /// True when the two points are within `threshold` of each other on the
    /// ground. Tile data repeats node coordinates with float noise, so exact
    /// equality is the wrong test.
    pub fn approx_eq(&self, other: LonLat, threshold: Distance) -> bool {
        self.gps_dist_meters(other) <= threshold
    }

    pub(crate) fn to_geo(self) -> geo::Coordinate<f64> {
        geo::Coordinate {
            x: self.longitude,
            y: self.latitude,
        }
    }
}

impl fmt::Display for LonLat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LonLat({0}, {1})", self.longitude, self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_known_distance() {
        // Bristol Temple Meads to Bristol Parkway, roughly 9.4km
        let temple_meads = LonLat::new(-2.5813, 51.4491);
        let parkway = LonLat::new(-2.5423, 51.5136);
        let d = temple_meads.gps_dist_meters(parkway).inner_meters();
        assert!((9_000.0..10_000.0).contains(&d), "got {}", d);
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = LonLat::new(-2.6, 51.43);
        for (bearing, dx, dy) in [
            (0.0, 0.0, 0.001),
            (90.0, 0.001, 0.0),
            (180.0, 0.0, -0.001),
            (270.0, -0.001, 0.0),
        ] {
            let target = LonLat::new(origin.longitude + dx, origin.latitude + dy);
            let got = origin.initial_bearing_to(target);
            let err = (got - bearing).abs().min((got - bearing - 360.0).abs());
            assert!(err < 1.0, "expected {} got {}", bearing, got);
        }
    }

    #[test]
    fn project_away_round_trip() {
        let origin = LonLat::new(-2.6157, 51.4579);
        for bearing in [0.0, 45.0, 133.7, 270.0] {
            let there = origin.project_away(Distance::meters(50.0), bearing);
            assert!(
                (origin.gps_dist_meters(there).inner_meters() - 50.0).abs() < 0.01,
                "distance off at bearing {}",
                bearing
            );
            let back = origin.initial_bearing_to(there);
            let err = (back - bearing).abs().min((back - bearing - 360.0).abs());
            assert!(err < 0.5, "bearing off: expected {} got {}", bearing, back);
        }
    }

    #[test]
    fn normalize() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
    }
}
