#![doc = "geoflat public API"]
mod dispatch;
mod error;
mod extract;
mod geojson;
mod mode;

#[doc(inline)]
pub use dispatch::{coordinates, run, run_mode};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use extract::{extract, Coordinates};

#[doc(inline)]
pub use geojson::{
    decode, decode_line, decode_multi_polygon, decode_polygon, Feature, FeatureCollection,
    Geometry, LineDocument, MultiPolygonDocument, PolygonDocument, Position, Shape,
};

#[doc(inline)]
pub use mode::Mode;
