//! Splits one tile's feature collection into the buckets the rest of the
//! engine works with. Every function builds a new collection; the input is
//! never filtered in place. Together, `roads`, `paths`, `intersections`,
//! `entrances`, and `points_of_interest` partition the input exactly.

use crate::{Feature, FeatureCollection};

// The tile backend tags ordinary road geometry, walkable ways, and its
// synthesized intersection nodes all as feature_type "highway", telling them
// apart by feature_value.
const INTERSECTION_VALUE: &str = "gd_intersection";
const ENTRANCE_TYPE: &str = "gd_entrance_list";
const PATH_VALUES: [&str; 4] = ["footway", "path", "cycleway", "bridleway"];

fn is_highway(feature: &Feature) -> bool {
    feature.feature_type.as_deref() == Some("highway")
}

fn has_path_value(feature: &Feature) -> bool {
    match feature.feature_value.as_deref() {
        Some(value) => PATH_VALUES.contains(&value),
        None => false,
    }
}

fn is_intersection(feature: &Feature) -> bool {
    is_highway(feature) && feature.feature_value.as_deref() == Some(INTERSECTION_VALUE)
}

fn collect<F: Fn(&Feature) -> bool>(input: &FeatureCollection, keep: F) -> FeatureCollection {
    let mut result = FeatureCollection::new();
    for feature in input {
        if keep(feature) {
            result.push(feature.clone());
        }
    }
    result
}

/// Roads: highway features, excluding walkable ways and intersection nodes.
pub fn roads(input: &FeatureCollection) -> FeatureCollection {
    collect(input, |f| {
        is_highway(f) && !is_intersection(f) && !has_path_value(f)
    })
}

/// Paths: footways, paths, cycleways, and bridleways.
pub fn paths(input: &FeatureCollection) -> FeatureCollection {
    collect(input, |f| is_highway(f) && has_path_value(f))
}

/// The tile backend's synthesized intersection nodes.
pub fn intersections(input: &FeatureCollection) -> FeatureCollection {
    collect(input, is_intersection)
}

/// Building entrance lists.
pub fn entrances(input: &FeatureCollection) -> FeatureCollection {
    collect(input, |f| {
        f.feature_type.as_deref() == Some(ENTRANCE_TYPE)
    })
}

/// Everything that isn't road network or entrances, including features with
/// no feature_type at all.
pub fn points_of_interest(input: &FeatureCollection) -> FeatureCollection {
    collect(input, |f| {
        !matches!(f.feature_type.as_deref(), Some("highway") | Some(ENTRANCE_TYPE))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Geometry;
    use geom::LonLat;

    fn feature(feature_type: Option<&str>, feature_value: Option<&str>) -> Feature {
        let mut f = Feature::new(Geometry::Point(LonLat::new(0.0, 0.0)));
        f.feature_type = feature_type.map(|x| x.to_string());
        f.feature_value = feature_value.map(|x| x.to_string());
        f
    }

    fn fixture() -> FeatureCollection {
        let mut fc = FeatureCollection::new();
        fc.push(feature(Some("highway"), Some("residential")));
        fc.push(feature(Some("highway"), Some("footway")));
        fc.push(feature(Some("highway"), Some("cycleway")));
        fc.push(feature(Some("highway"), Some("gd_intersection")));
        fc.push(feature(Some("gd_entrance_list"), None));
        fc.push(feature(Some("amenity"), Some("cafe")));
        fc.push(feature(None, None));
        fc
    }

    #[test]
    fn buckets_partition_the_input() {
        let fc = fixture();
        let buckets = [
            roads(&fc),
            paths(&fc),
            intersections(&fc),
            entrances(&fc),
            points_of_interest(&fc),
        ];

        let total: usize = buckets.iter().map(|b| b.len()).sum();
        assert_eq!(total, fc.len());

        // Each input feature lands in exactly one bucket
        for feature in &fc {
            let hits = buckets
                .iter()
                .filter(|b| b.iter().any(|f| f == feature))
                .count();
            assert_eq!(hits, 1, "{:?} in {} buckets", feature.feature_value, hits);
        }
    }

    #[test]
    fn expected_bucket_sizes() {
        let fc = fixture();
        assert_eq!(roads(&fc).len(), 1);
        assert_eq!(paths(&fc).len(), 2);
        assert_eq!(intersections(&fc).len(), 1);
        assert_eq!(entrances(&fc).len(), 1);
        assert_eq!(points_of_interest(&fc).len(), 2);
    }

    #[test]
    fn input_isnt_mutated() {
        let fc = fixture();
        let before = fc.clone();
        roads(&fc);
        paths(&fc);
        assert_eq!(fc, before);
    }
}
