mod decode;
mod schema;

pub use decode::{decode, decode_line, decode_multi_polygon, decode_polygon};
pub use schema::{
    Feature, FeatureCollection, Geometry, LineDocument, MultiPolygonDocument, PolygonDocument,
    Position, Shape,
};
