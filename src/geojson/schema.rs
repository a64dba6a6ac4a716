use std::fmt;

use serde::{de::{self, DeserializeOwned, SeqAccess, Visitor}, Deserialize, Deserializer};

/// A GeoJSON FeatureCollection whose geometries all share the coordinate nesting `C`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(bound(deserialize = "C: Shape"))]
pub struct FeatureCollection<C> {
    #[serde(rename = "type", alias = "Type", default, deserialize_with = "nullable")]
    pub kind: String,
    #[serde(default, alias = "Features", deserialize_with = "nullable")]
    pub features: Vec<Feature<C>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(bound(deserialize = "C: Shape"))]
pub struct Feature<C> {
    #[serde(rename = "type", alias = "Type", default, deserialize_with = "nullable")]
    pub kind: String,
    /// `None` when the member is missing or `null`.
    #[serde(default, alias = "Geometry")]
    pub geometry: Option<Geometry<C>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(bound(deserialize = "C: Shape"))]
pub struct Geometry<C> {
    #[serde(rename = "type", alias = "Type", default, deserialize_with = "nullable")]
    pub kind: String,
    #[serde(default, alias = "Coordinates", deserialize_with = "nullable")]
    pub coordinates: C,
}

/// Feature collection of LineString geometries.
pub type LineDocument = FeatureCollection<Vec<Position>>;

/// Feature collection of Polygon geometries (ring 0 is the outer ring).
pub type PolygonDocument = FeatureCollection<Vec<Vec<Position>>>;

/// Feature collection of MultiPolygon geometries.
pub type MultiPolygonDocument = FeatureCollection<Vec<Vec<Vec<Position>>>>;

/// Coordinate nesting of one geometry family.
pub trait Shape: DeserializeOwned + Default {
    /// GeoJSON geometry type carried by features of this shape.
    const GEOMETRY_TYPE: &'static str;

    /// Positions that get extracted: the whole line, or the outer ring of the
    /// first polygon. Empty when there is no such ring.
    fn outer_ring(&self) -> &[Position];
}

impl Shape for Vec<Position> {
    const GEOMETRY_TYPE: &'static str = "LineString";

    fn outer_ring(&self) -> &[Position] { self }
}

impl Shape for Vec<Vec<Position>> {
    const GEOMETRY_TYPE: &'static str = "Polygon";

    fn outer_ring(&self) -> &[Position] {
        self.first().map(Vec::as_slice).unwrap_or_default()
    }
}

impl Shape for Vec<Vec<Vec<Position>>> {
    const GEOMETRY_TYPE: &'static str = "MultiPolygon";

    fn outer_ring(&self) -> &[Position] {
        self.first().and_then(|polygon| polygon.first()).map(Vec::as_slice).unwrap_or_default()
    }
}

/// A GeoJSON position, `[lon, lat]` with any further components ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub lon: f64,
    pub lat: f64,
}

impl Position {
    pub fn new(lon: f64, lat: f64) -> Self { Self { lon, lat } }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PositionVisitor;

        impl<'de> Visitor<'de> for PositionVisitor {
            type Value = Position;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a position array of at least two numbers")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Position, A::Error> {
                let lon = seq.next_element::<f64>()?.ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let lat = seq.next_element::<f64>()?.ok_or_else(|| de::Error::invalid_length(1, &self))?;
                // Altitude and friends still have to be numbers.
                while seq.next_element::<f64>()?.is_some() {}
                Ok(Position { lon, lat })
            }
        }

        deserializer.deserialize_seq(PositionVisitor)
    }
}

/// Deserialize a missing-or-`null` capable member, substituting the default for `null`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
