use std::{fmt, str::FromStr};

use crate::{error::Error, geojson::{Position, Shape}};

/// Geometry family selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    Line,           // "LineString", points
    #[default]
    Polygon,        // "Polygon", outer ring
    MultiPolygon,   // "MultiPolygon", outer ring of the first polygon
}

impl Mode {
    pub fn to_str(&self) -> &'static str {
        match self {
            Mode::Line => "linestring",
            Mode::Polygon => "polygon",
            Mode::MultiPolygon => "multipolygon",
        }
    }

    /// GeoJSON geometry type that features must declare to be extracted.
    pub fn geometry_type(&self) -> &'static str {
        match self {
            Mode::Line => <Vec<Position> as Shape>::GEOMETRY_TYPE,
            Mode::Polygon => <Vec<Vec<Position>> as Shape>::GEOMETRY_TYPE,
            Mode::MultiPolygon => <Vec<Vec<Vec<Position>>> as Shape>::GEOMETRY_TYPE,
        }
    }

    /// Mode handling the given GeoJSON geometry type, matched exactly.
    pub fn for_geometry_type(kind: &str) -> Option<Mode> {
        Mode::all().into_iter().find(|mode| mode.geometry_type() == kind)
    }

    pub fn all() -> [Mode; 3] {
        [Mode::Line, Mode::Polygon, Mode::MultiPolygon]
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_lowercase().as_str() {
            "linestring" | "l" | "ls" => Ok(Mode::Line),
            "polygon" | "p" | "poly" => Ok(Mode::Polygon),
            "multipolygon" | "m" | "mp" => Ok(Mode::MultiPolygon),
            _ => Err(Error::UnknownMode(token.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases() {
        for token in ["linestring", "l", "ls", "LineString", "LS"] {
            assert_eq!(token.parse::<Mode>().unwrap(), Mode::Line, "{token}");
        }
        for token in ["polygon", "p", "poly", "POLY", " Polygon "] {
            assert_eq!(token.parse::<Mode>().unwrap(), Mode::Polygon, "{token}");
        }
        for token in ["multipolygon", "m", "mp", "MultiPolygon", "MP"] {
            assert_eq!(token.parse::<Mode>().unwrap(), Mode::MultiPolygon, "{token}");
        }
    }

    #[test]
    fn unknown_token() {
        let err = "hexagon".parse::<Mode>().unwrap_err();
        assert!(matches!(err, Error::UnknownMode(ref t) if t == "hexagon"));
        assert!(matches!("".parse::<Mode>(), Err(Error::UnknownMode(_))));
    }

    #[test]
    fn default_is_polygon() {
        assert_eq!(Mode::default(), Mode::Polygon);
    }

    #[test]
    fn geometry_types() {
        assert_eq!(Mode::Line.geometry_type(), "LineString");
        assert_eq!(Mode::Polygon.geometry_type(), "Polygon");
        assert_eq!(Mode::MultiPolygon.geometry_type(), "MultiPolygon");
    }

    #[test]
    fn geometry_type_round_trip() {
        for mode in Mode::all() {
            assert_eq!(Mode::for_geometry_type(mode.geometry_type()), Some(mode));
            assert_eq!(mode.to_str().parse::<Mode>().unwrap(), mode);
        }
        assert_eq!(Mode::for_geometry_type("polygon"), None);
        assert_eq!(Mode::for_geometry_type("Point"), None);
    }
}
