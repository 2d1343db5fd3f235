use serde::{Deserialize, Serialize};

use crate::LonLat;

/// An axis-aligned bounding box in GPS space.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GpsBounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl GpsBounds {
    pub fn new() -> GpsBounds {
        GpsBounds {
            min_lon: f64::MAX,
            min_lat: f64::MAX,
            max_lon: f64::MIN,
            max_lat: f64::MIN,
        }
    }

    pub fn from_corners(pt1: LonLat, pt2: LonLat) -> GpsBounds {
        let mut b = GpsBounds::new();
        b.update(pt1);
        b.update(pt2);
        b
    }

    pub fn update(&mut self, pt: LonLat) {
        self.min_lon = self.min_lon.min(pt.longitude);
        self.max_lon = self.max_lon.max(pt.longitude);
        self.min_lat = self.min_lat.min(pt.latitude);
        self.max_lat = self.max_lat.max(pt.latitude);
    }

    pub fn contains(&self, pt: LonLat) -> bool {
        pt.longitude >= self.min_lon
            && pt.longitude <= self.max_lon
            && pt.latitude >= self.min_lat
            && pt.latitude <= self.max_lat
    }
}

impl Default for GpsBounds {
    fn default() -> GpsBounds {
        GpsBounds::new()
    }
}
