use std::io::Read;

use crate::{
    error::Result,
    extract::{extract, Coordinates},
    geojson::{decode_line, decode_multi_polygon, decode_polygon},
    mode::Mode,
};

/// Parse `mode_token`, then decode and flatten `reader` into `(x, y)` pairs.
pub fn run(mode_token: &str, reader: impl Read) -> Result<Vec<(f64, f64)>> {
    run_mode(mode_token.parse()?, reader)
}

/// Decode `reader` with the schema for `mode` and flatten the matching features.
pub fn run_mode(mode: Mode, reader: impl Read) -> Result<Vec<(f64, f64)>> {
    Ok(coordinates(mode, reader)?.into_pairs())
}

/// Like [`run_mode`], but keeps the two series apart.
pub fn coordinates(mode: Mode, reader: impl Read) -> Result<Coordinates> {
    let expected = mode.geometry_type();
    Ok(match mode {
        Mode::Line => extract(&decode_line(reader)?, expected),
        Mode::Polygon => extract(&decode_polygon(reader)?, expected),
        Mode::MultiPolygon => extract(&decode_multi_polygon(reader)?, expected),
    })
}
