use geo::{Coord, LineString};

use crate::geojson::{FeatureCollection, Shape};

/// Two parallel coordinate series produced by [`extract`].
///
/// `xs` holds the second component of every visited position (latitude) and
/// `ys` the first (longitude). Downstream consumers rely on this order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Coordinates {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Coordinates {
    pub fn len(&self) -> usize { self.xs.len() }

    pub fn is_empty(&self) -> bool { self.xs.is_empty() }

    /// Iterate `(x, y)` pairs in traversal order.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    pub fn into_pairs(self) -> Vec<(f64, f64)> {
        self.xs.into_iter().zip(self.ys).collect()
    }

    /// Build a `geo::LineString` from the emitted pairs, keeping the x/y order above.
    pub fn to_line_string(&self) -> LineString<f64> {
        LineString::new(self.pairs().map(|(x, y)| Coord { x, y }).collect())
    }
}

/// Flatten every feature of `doc` whose geometry type equals `expected_type` exactly.
///
/// Lines contribute all their positions; polygons only their outer ring; multipolygons
/// only the outer ring of their first polygon. Other features are skipped.
pub fn extract<C: Shape>(doc: &FeatureCollection<C>, expected_type: &str) -> Coordinates {
    let mut out = Coordinates::default();
    let mut matched = 0;

    for (idx, feature) in doc.features.iter().enumerate() {
        let Some(geometry) = feature.geometry.as_ref().filter(|g| g.kind == expected_type) else {
            log::trace!("[extract] skipping feature {idx}: not a {expected_type}");
            continue;
        };
        matched += 1;

        let ring = geometry.coordinates.outer_ring();
        out.xs.reserve(ring.len());
        out.ys.reserve(ring.len());
        for pos in ring {
            out.xs.push(pos.lat);
            out.ys.push(pos.lon);
        }
    }

    log::debug!("[extract] {matched}/{} features matched {expected_type}, {} pairs", doc.features.len(), out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geojson::{Feature, Geometry, LineDocument, MultiPolygonDocument, Position, PolygonDocument};

    fn pos(lon: f64, lat: f64) -> Position { Position::new(lon, lat) }

    fn feature<C>(kind: &str, coordinates: C) -> Feature<C> {
        Feature { kind: "Feature".into(), geometry: Some(Geometry { kind: kind.into(), coordinates }) }
    }

    fn collection<C>(features: Vec<Feature<C>>) -> FeatureCollection<C> {
        FeatureCollection { kind: "FeatureCollection".into(), features }
    }

    #[test]
    fn line_swaps_axes_in_order() {
        let doc: LineDocument = collection(vec![
            feature("LineString", vec![pos(10.0, 20.0), pos(30.0, 40.0)]),
            feature("LineString", vec![pos(-1.5, 2.5)]),
        ]);
        let coords = extract(&doc, "LineString");
        assert_eq!(coords.xs, vec![20.0, 40.0, 2.5]);
        assert_eq!(coords.ys, vec![10.0, 30.0, -1.5]);
        assert_eq!(coords.into_pairs(), vec![(20.0, 10.0), (40.0, 30.0), (2.5, -1.5)]);
    }

    #[test]
    fn polygon_outer_ring_only() {
        let doc: PolygonDocument = collection(vec![feature(
            "Polygon",
            vec![vec![pos(1.0, 2.0), pos(3.0, 4.0)], vec![pos(5.0, 6.0), pos(7.0, 8.0)]],
        )]);
        let coords = extract(&doc, "Polygon");
        assert_eq!(coords.into_pairs(), vec![(2.0, 1.0), (4.0, 3.0)]);
    }

    #[test]
    fn multipolygon_first_polygon_outer_ring_only() {
        let doc: MultiPolygonDocument = collection(vec![feature(
            "MultiPolygon",
            vec![
                vec![vec![pos(1.0, 2.0), pos(3.0, 4.0)], vec![pos(9.0, 9.0)]],
                vec![vec![pos(5.0, 6.0)]],
            ],
        )]);
        assert_eq!(extract(&doc, "MultiPolygon").into_pairs(), vec![(2.0, 1.0), (4.0, 3.0)]);
    }

    #[test]
    fn mismatched_types_skipped() {
        let doc: PolygonDocument = collection(vec![
            feature("polygon", vec![vec![pos(0.0, 0.0)]]),
            feature("MultiPolygon", vec![vec![pos(0.0, 0.0)]]),
            feature("Polygon", vec![vec![pos(1.0, 2.0)]]),
            Feature { kind: "Feature".into(), geometry: None },
        ]);
        assert_eq!(extract(&doc, "Polygon").into_pairs(), vec![(2.0, 1.0)]);
        assert!(extract(&doc, "LineString").is_empty());
    }

    #[test]
    fn empty_rings_and_polygons_contribute_nothing() {
        let doc: PolygonDocument = collection(vec![feature("Polygon", vec![]), feature("Polygon", vec![vec![pos(1.0, 2.0)]])]);
        assert_eq!(extract(&doc, "Polygon").into_pairs(), vec![(2.0, 1.0)]);

        let doc: MultiPolygonDocument = collection(vec![feature("MultiPolygon", vec![]), feature("MultiPolygon", vec![vec![]])]);
        assert!(extract(&doc, "MultiPolygon").is_empty());
    }

    #[test]
    fn no_features_is_empty() {
        let doc: LineDocument = collection(vec![]);
        let coords = extract(&doc, "LineString");
        assert!(coords.is_empty());
        assert_eq!(coords.len(), 0);
        assert_eq!(coords.xs.len(), coords.ys.len());
    }

    #[test]
    fn line_string_uses_emitted_order() {
        let coords = Coordinates { xs: vec![20.0, 40.0], ys: vec![10.0, 30.0] };
        let ls = coords.to_line_string();
        assert_eq!(ls.0, vec![Coord { x: 20.0, y: 10.0 }, Coord { x: 40.0, y: 30.0 }]);
        assert_eq!(coords.pairs().collect::<Vec<_>>(), vec![(20.0, 10.0), (40.0, 30.0)]);
    }
}
