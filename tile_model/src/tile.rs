use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use geom::{GpsBounds, LonLat};

/// The system runs at a fixed zoom; one zoom-16 tile is about 600m on a side
/// at UK latitudes, comfortably more than any field of view.
pub const ZOOM: u32 = 16;

/// A slippy-map tile address. Invariant: x and y are in [0, 2^zoom).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub zoom: u32,
}

impl Tile {
    /// The tile containing a location, using the standard Web-Mercator slippy
    /// scheme. Total over all finite input: latitudes at or beyond the poles
    /// (where the projection diverges) just clamp to a boundary tile.
    pub fn containing(pt: LonLat, zoom: u32) -> Tile {
        assert!(zoom <= 25, "zoom {} out of range", zoom);
        let num_tiles = (1u32 << zoom) as f64;

        let x = ((pt.longitude + 180.0) / 360.0 * num_tiles).floor();
        let lat_rad = pt.latitude.to_radians();
        let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * num_tiles).floor();

        let max = (1u32 << zoom) - 1;
        Tile {
            x: clamp(x, max),
            y: clamp(y, max),
            zoom,
        }
    }

    /// The tile's bounding box, from the inverse projection of its northwest
    /// and southeast corners.
    pub fn bounds(&self) -> GpsBounds {
        GpsBounds::from_corners(
            corner_lonlat(self.x, self.y, self.zoom),
            corner_lonlat(self.x + 1, self.y + 1, self.zoom),
        )
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

fn clamp(value: f64, max: u32) -> u32 {
    if value.is_nan() || value < 0.0 {
        0
    } else if value > max as f64 {
        max
    } else {
        value as u32
    }
}

// Northwest corner of tile (x, y).
fn corner_lonlat(x: u32, y: u32, zoom: u32) -> LonLat {
    let num_tiles = (1u64 << zoom) as f64;
    let lon = (x as f64) / num_tiles * 360.0 - 180.0;
    let lat = (PI * (1.0 - 2.0 * (y as f64) / num_tiles)).sinh().atan().to_degrees();
    LonLat::new(lon, lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_zero_is_one_tile() {
        for (lon, lat) in [(0.0, 0.0), (-2.66, 51.43), (179.9, -85.0), (-179.9, 85.0)] {
            let tile = Tile::containing(LonLat::new(lon, lat), 0);
            assert_eq!((tile.x, tile.y), (0, 0));
        }
    }

    #[test]
    fn results_stay_in_range() {
        for (lon, lat) in [
            (-180.0, 85.05),
            (180.0, -85.05),
            (0.0, 89.9),
            (0.0, -89.9),
            (-2.6573, 51.4304),
        ] {
            let tile = Tile::containing(LonLat::new(lon, lat), ZOOM);
            let max = (1u32 << ZOOM) - 1;
            assert!(tile.x <= max && tile.y <= max, "{} out of range", tile);
        }
    }

    #[test]
    fn monotonic_in_lon_and_lat() {
        let mut last_x = 0;
        for i in 0..20 {
            let lon = -180.0 + (i as f64) * 18.0;
            let tile = Tile::containing(LonLat::new(lon, 51.0), ZOOM);
            assert!(tile.x >= last_x);
            last_x = tile.x;
        }

        // y grows as latitude falls
        let mut last_y = 0;
        for i in 0..20 {
            let lat = 84.0 - (i as f64) * 8.0;
            let tile = Tile::containing(LonLat::new(-2.0, lat), ZOOM);
            assert!(tile.y >= last_y);
            last_y = tile.y;
        }
    }

    #[test]
    fn bounds_contain_the_location() {
        let pt = LonLat::new(-2.6573400576040456, 51.430456817236575);
        let tile = Tile::containing(pt, ZOOM);
        assert!(tile.bounds().contains(pt));
    }
}
