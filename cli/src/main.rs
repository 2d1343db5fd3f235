//! A command-line harness for the callout engine: feed it a tile's GeoJSON
//! and a location/heading, and it prints what the audio layer would narrate.
//! Handy for poking at real tile payloads without a device.

#[macro_use]
extern crate log;

mod callouts;
mod classify;

use anyhow::Result;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "earshot", about = "The street callout engine multi-tool")]
enum Command {
    /// Print the zoom-16 slippy tile containing a location, and its bounds
    TileAt {
        #[structopt(long)]
        lat: f64,
        #[structopt(long)]
        lon: f64,
        /// Override the fixed zoom level
        #[structopt(long, default_value = "16")]
        zoom: u32,
    },
    /// Decode a tile and print how its features classify
    Classify {
        /// The path to a GeoJSON tile payload
        #[structopt(long)]
        tile: String,
        /// Also list the points of interest in one super-category
        /// (information, object, place, landmark, mobility, safety)
        #[structopt(long)]
        category: Option<String>,
    },
    /// Run the full pipeline for one location/heading fix and print the
    /// callouts
    Callouts {
        /// The path to a GeoJSON tile payload
        #[structopt(long)]
        tile: String,
        #[structopt(long)]
        lat: f64,
        #[structopt(long)]
        lon: f64,
        /// Degrees clockwise from north
        #[structopt(long)]
        heading: f64,
        /// How far ahead the field of view reaches, in meters
        #[structopt(long, default_value = "50")]
        fov_distance: f64,
        /// Use the 8-way sector scheme instead of the finer 12-way one
        #[structopt(long)]
        coarse: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Command::from_args() {
        Command::TileAt { lat, lon, zoom } => {
            let tile = tile_model::Tile::containing(geom::LonLat::new(lon, lat), zoom);
            let bounds = tile.bounds();
            println!("{}", tile);
            println!(
                "covers lon [{}, {}], lat [{}, {}]",
                bounds.min_lon, bounds.max_lon, bounds.min_lat, bounds.max_lat
            );
            Ok(())
        }
        Command::Classify { tile, category } => classify::run(tile, category),
        Command::Callouts {
            tile,
            lat,
            lon,
            heading,
            fov_distance,
            coarse,
        } => callouts::run(tile, lat, lon, heading, fov_distance, coarse),
    }
}
