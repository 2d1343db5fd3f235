use std::collections::BTreeMap;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use geom::LonLat;

/// The geometry of one tile feature. Immutable once decoded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(LonLat),
    LineString(Vec<LonLat>),
    /// Rings in GeoJSON order: the first is the outer boundary, the rest are
    /// holes.
    Polygon(Vec<Vec<LonLat>>),
}

impl Geometry {
    pub fn as_point(&self) -> Option<LonLat> {
        match self {
            Geometry::Point(pt) => Some(*pt),
            _ => None,
        }
    }

    pub fn as_linestring(&self) -> Option<&Vec<LonLat>> {
        match self {
            Geometry::LineString(pts) => Some(pts),
            _ => None,
        }
    }
}

/// One tile feature: a geometry and its tags. The tags the engine actually
/// reasons about are explicit fields; everything else rides along in `extras`
/// untouched, for whoever consumes the output downstream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
    pub feature_type: Option<String>,
    pub feature_value: Option<String>,
    pub name: Option<String>,
    pub extras: BTreeMap<String, serde_json::Value>,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Feature {
        Feature {
            geometry,
            feature_type: None,
            feature_value: None,
            name: None,
            extras: BTreeMap::new(),
        }
    }

    /// Decode one GeoJSON feature. None means the feature isn't usable --
    /// missing geometry, a geometry type the engine doesn't handle, or
    /// malformed coordinates -- and the caller should drop it and move on.
    pub fn from_geojson(raw: geojson::Feature) -> Option<Feature> {
        let geometry = match raw.geometry {
            Some(ref gj) => decode_geometry(gj)?,
            None => {
                warn!("Skipping feature with no geometry");
                return None;
            }
        };

        let mut feature = Feature::new(geometry);
        if let Some(props) = raw.properties {
            for (key, value) in props {
                let as_string = value.as_str().map(|x| x.to_string());
                match (key.as_str(), as_string) {
                    ("feature_type", Some(x)) => {
                        feature.feature_type = Some(x);
                    }
                    ("feature_value", Some(x)) => {
                        feature.feature_value = Some(x);
                    }
                    ("name", Some(x)) => {
                        feature.name = Some(x);
                    }
                    _ => {
                        feature.extras.insert(key, value);
                    }
                }
            }
        }
        Some(feature)
    }
}

/// An ordered list of features. Order is irrelevant to the semantics, but
/// it's preserved everywhere so repeated runs produce identical output.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new() -> FeatureCollection {
        FeatureCollection {
            features: Vec::new(),
        }
    }

    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Decode a whole tile payload. An unparseable payload is an error;
    /// individual broken features are skipped with a diagnostic, because a
    /// partially-malformed tile shouldn't abort the whole run.
    pub fn from_geojson_str(raw: &str) -> Result<FeatureCollection> {
        let geojson: geojson::GeoJson = raw.parse()?;
        let collection = match geojson {
            geojson::GeoJson::FeatureCollection(fc) => fc,
            _ => bail!("Tile payload isn't a GeoJSON FeatureCollection"),
        };

        let mut result = FeatureCollection::new();
        let total = collection.features.len();
        for feature in collection.features {
            if let Some(f) = Feature::from_geojson(feature) {
                result.push(f);
            }
        }
        if result.len() != total {
            info!("Decoded {} of {} tile features", result.len(), total);
        }
        Ok(result)
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

fn decode_geometry(gj: &geojson::Geometry) -> Option<Geometry> {
    match &gj.value {
        geojson::Value::Point(pos) => Some(Geometry::Point(decode_position(pos)?)),
        geojson::Value::LineString(positions) => {
            let pts: Option<Vec<LonLat>> = positions.iter().map(|p| decode_position(p)).collect();
            let pts = pts?;
            if pts.is_empty() {
                warn!("Skipping LineString with no positions");
                return None;
            }
            Some(Geometry::LineString(pts))
        }
        geojson::Value::Polygon(rings) => {
            let mut result = Vec::new();
            for ring in rings {
                let pts: Option<Vec<LonLat>> = ring.iter().map(|p| decode_position(p)).collect();
                let pts = pts?;
                if pts.len() < 3 {
                    warn!("Skipping Polygon with a degenerate ring");
                    return None;
                }
                result.push(pts);
            }
            if result.is_empty() {
                warn!("Skipping Polygon with no rings");
                return None;
            }
            Some(Geometry::Polygon(result))
        }
        other => {
            let name = match other {
                geojson::Value::MultiPoint(_) => "MultiPoint",
                geojson::Value::MultiLineString(_) => "MultiLineString",
                geojson::Value::MultiPolygon(_) => "MultiPolygon",
                geojson::Value::GeometryCollection(_) => "GeometryCollection",
                _ => "unknown",
            };
            warn!("Skipping unhandled geometry type {}", name);
            None
        }
    }
}

// A GeoJSON position is [lon, lat] or [lon, lat, altitude]; the engine doesn't
// use altitude.
fn decode_position(pos: &[f64]) -> Option<LonLat> {
    if pos.len() < 2 {
        warn!("Skipping position with {} coordinates", pos.len());
        return None;
    }
    Some(LonLat::new(pos[0], pos[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_keeps_known_tags_and_extras() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-2.6573, 51.4304, 12.0] },
                "properties": {
                    "feature_type": "amenity",
                    "feature_value": "cafe",
                    "name": "Corner Cafe",
                    "osm_ids": 12345
                }
            }]
        }"#;
        let fc = FeatureCollection::from_geojson_str(raw).unwrap();
        assert_eq!(fc.len(), 1);
        let f = &fc.features[0];
        assert_eq!(f.feature_type.as_deref(), Some("amenity"));
        assert_eq!(f.feature_value.as_deref(), Some("cafe"));
        assert_eq!(f.name.as_deref(), Some("Corner Cafe"));
        assert_eq!(f.extras.get("osm_ids"), Some(&serde_json::json!(12345)));
        assert_eq!(f.geometry.as_point(), Some(LonLat::new(-2.6573, 51.4304)));
    }

    #[test]
    fn decode_skips_malformed_features() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": null,
                    "properties": { "name": "nothing here" }
                },
                {
                    "type": "Feature",
                    "geometry": { "type": "MultiPoint", "coordinates": [[0.0, 0.0]] },
                    "properties": {}
                },
                {
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [-2.0, 51.0] },
                    "properties": { "feature_type": "highway", "feature_value": "residential" }
                }
            ]
        }"#;
        let fc = FeatureCollection::from_geojson_str(raw).unwrap();
        assert_eq!(fc.len(), 1);
        assert_eq!(fc.features[0].feature_type.as_deref(), Some("highway"));
    }

    #[test]
    fn garbage_payload_is_an_error() {
        assert!(FeatureCollection::from_geojson_str("not geojson").is_err());
    }
}
