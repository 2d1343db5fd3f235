use anyhow::Result;

use geom::{Distance, LonLat};
use tile_model::{
    callouts_for_fix, CalloutConfig, FeatureCollection, NavigationFix, SectorScheme,
};

pub fn run(
    path: String,
    lat: f64,
    lon: f64,
    heading: f64,
    fov_distance: f64,
    coarse: bool,
) -> Result<()> {
    let raw = fs_err::read_to_string(path)?;
    let tile = FeatureCollection::from_geojson_str(&raw)?;
    info!("Decoded {} features", tile.len());

    let fix = NavigationFix {
        location: LonLat::new(lon, lat),
        heading_degrees: heading,
    };
    let cfg = CalloutConfig {
        fov_distance: Distance::meters(fov_distance),
        scheme: if coarse {
            SectorScheme::Coarse
        } else {
            SectorScheme::Combined
        },
        ..CalloutConfig::default()
    };

    match callouts_for_fix(&fix, &tile, &cfg) {
        Some(callout) => {
            println!("Intersection at {}", callout.intersection);
            for road in &callout.roads {
                match road.direction {
                    Some(direction) => println!("  {}: {}", road.name, direction),
                    None => println!("  {}: (couldn't resolve a direction)", road.name),
                }
            }
        }
        None => {
            println!("No intersection in view");
        }
    }
    Ok(())
}
