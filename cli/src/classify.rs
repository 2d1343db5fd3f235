use anyhow::{bail, Result};

use tile_model::{
    entrances, filter_by_super_category, intersections, paths, points_of_interest, roads,
    FeatureCollection, SuperCategory,
};

pub fn run(path: String, category: Option<String>) -> Result<()> {
    let raw = fs_err::read_to_string(path)?;
    let tile = FeatureCollection::from_geojson_str(&raw)?;

    let pois = points_of_interest(&tile);
    println!("{} features total", tile.len());
    println!("  roads: {}", roads(&tile).len());
    println!("  paths: {}", paths(&tile).len());
    println!("  intersections: {}", intersections(&tile).len());
    println!("  entrances: {}", entrances(&tile).len());
    println!("  points of interest: {}", pois.len());

    if let Some(name) = category {
        let category = match SuperCategory::parse(&name) {
            Some(c) => c,
            None => {
                let valid: Vec<String> = SuperCategory::ALL
                    .iter()
                    .map(|c| c.to_string())
                    .collect();
                bail!("unknown category {:?}; try one of {}", name, valid.join(", "));
            }
        };
        let matching = filter_by_super_category(category, &pois);
        println!("{} {} POIs:", matching.len(), category);
        for feature in &matching {
            println!(
                "  {}",
                feature.name.as_deref().unwrap_or("(unnamed)")
            );
        }
    }
    Ok(())
}
