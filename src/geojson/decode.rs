use std::io::Read;

use serde::Deserialize;

use crate::error::{Error, Result};
use super::schema::{nullable, FeatureCollection, LineDocument, MultiPolygonDocument, PolygonDocument, Shape};

/// Decode a feature collection with coordinate nesting `C` from `reader`.
/// On failure the error carries the geometry type the input most likely holds instead, if readable.
pub fn decode<C: Shape>(mut reader: impl Read) -> Result<FeatureCollection<C>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let mut de = serde_json::Deserializer::from_slice(&bytes);
    let doc = match FeatureCollection::<C>::deserialize(&mut de) {
        Ok(doc) => doc,
        Err(source) => {
            let declared = declared_type(&bytes, C::GEOMETRY_TYPE);
            log::debug!("[decode] {} schema rejected input declaring {:?}: {}", C::GEOMETRY_TYPE, declared, source);
            return Err(Error::Decode { declared, expected: C::GEOMETRY_TYPE, source });
        }
    };
    de.end().map_err(Error::TrailingData)?;

    log::debug!("[decode] {} document with {} features", C::GEOMETRY_TYPE, doc.features.len());
    Ok(doc)
}

/// Decode a LineString feature collection.
pub fn decode_line(reader: impl Read) -> Result<LineDocument> { decode(reader) }

/// Decode a Polygon feature collection.
pub fn decode_polygon(reader: impl Read) -> Result<PolygonDocument> { decode(reader) }

/// Decode a MultiPolygon feature collection.
pub fn decode_multi_polygon(reader: impl Read) -> Result<MultiPolygonDocument> { decode(reader) }

/// Geometry type of the first feature not declaring `expected`, or of the first
/// feature if they all do. Read without looking at coordinates.
/// `None` if the bytes are not a readable collection, or no feature declares a type.
fn declared_type(bytes: &[u8], expected: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, alias = "Features", deserialize_with = "nullable")]
        features: Vec<ProbeFeature>,
    }

    #[derive(Deserialize)]
    struct ProbeFeature {
        #[serde(default, alias = "Geometry")]
        geometry: Option<ProbeGeometry>,
    }

    #[derive(Deserialize)]
    struct ProbeGeometry {
        #[serde(rename = "type", alias = "Type", default, deserialize_with = "nullable")]
        kind: String,
    }

    let mut de = serde_json::Deserializer::from_slice(bytes);
    let probe = Probe::deserialize(&mut de).ok()?;
    let kinds: Vec<String> = probe.features.into_iter()
        .filter_map(|feature| feature.geometry)
        .map(|geometry| geometry.kind)
        .filter(|kind| !kind.is_empty())
        .collect();

    let differing = kinds.iter().position(|kind| kind != expected);
    kinds.into_iter().nth(differing.unwrap_or(0))
}
