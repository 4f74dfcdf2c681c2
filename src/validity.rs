//! Structural validity predicates for [`geo`] geometries.
//!
//! `geo` has no validity check of its own, so the [`geo_traits`][crate::geo_traits]
//! implementations for `geo` types answer `is_valid` with these predicates. They are structural
//! only: finite coordinates, enough distinct vertices, and closed rings. Self-intersection and
//! ring nesting are not examined. GEOS-backed sources use GEOS's full OGC check instead.

use geo::{Coord, CoordFloat, Geometry, GeometryCollection, LineString, MultiLineString};
use geo::{MultiPoint, MultiPolygon, Point, Polygon};

/// Both ordinates are finite.
pub fn is_valid_coord<T: CoordFloat>(coord: &Coord<T>) -> bool {
    coord.x.is_finite() && coord.y.is_finite()
}

pub fn is_valid_point<T: CoordFloat>(point: &Point<T>) -> bool {
    is_valid_coord(&point.0)
}

/// An empty line string, or one with finite coordinates and at least two distinct vertices.
pub fn is_valid_line_string<T: CoordFloat>(line_string: &LineString<T>) -> bool {
    let coords = &line_string.0;
    if coords.is_empty() {
        return true;
    }
    coords.iter().all(is_valid_coord) && num_distinct_consecutive(coords) >= 2
}

/// An empty ring, or a closed one with finite coordinates and at least three distinct vertices
/// before closing.
pub fn is_valid_ring<T: CoordFloat>(ring: &LineString<T>) -> bool {
    let coords = &ring.0;
    if coords.is_empty() {
        return true;
    }
    coords.len() >= 4
        && ring.is_closed()
        && coords.iter().all(is_valid_coord)
        && num_distinct_consecutive(coords) >= 4
}

/// An empty polygon has neither exterior nor interior coordinates. Otherwise every ring must be a
/// valid, non-empty ring.
pub fn is_valid_polygon<T: CoordFloat>(polygon: &Polygon<T>) -> bool {
    let exterior = polygon.exterior();
    if exterior.0.is_empty() {
        return polygon.interiors().iter().all(|ring| ring.0.is_empty());
    }
    is_valid_ring(exterior)
        && polygon
            .interiors()
            .iter()
            .all(|ring| !ring.0.is_empty() && is_valid_ring(ring))
}

pub fn is_valid_multi_point<T: CoordFloat>(multi_point: &MultiPoint<T>) -> bool {
    multi_point.0.iter().all(is_valid_point)
}

pub fn is_valid_multi_line_string<T: CoordFloat>(multi_line_string: &MultiLineString<T>) -> bool {
    multi_line_string.0.iter().all(is_valid_line_string)
}

pub fn is_valid_multi_polygon<T: CoordFloat>(multi_polygon: &MultiPolygon<T>) -> bool {
    multi_polygon.0.iter().all(is_valid_polygon)
}

pub fn is_valid_geometry_collection<T: CoordFloat>(collection: &GeometryCollection<T>) -> bool {
    collection.0.iter().all(is_valid_geometry)
}

pub fn is_valid_geometry<T: CoordFloat>(geometry: &Geometry<T>) -> bool {
    match geometry {
        Geometry::Point(g) => is_valid_point(g),
        Geometry::Line(g) => is_valid_coord(&g.start) && is_valid_coord(&g.end),
        Geometry::LineString(g) => is_valid_line_string(g),
        Geometry::Polygon(g) => is_valid_polygon(g),
        Geometry::MultiPoint(g) => is_valid_multi_point(g),
        Geometry::MultiLineString(g) => is_valid_multi_line_string(g),
        Geometry::MultiPolygon(g) => is_valid_multi_polygon(g),
        Geometry::GeometryCollection(g) => is_valid_geometry_collection(g),
        Geometry::Rect(g) => is_valid_coord(&g.min()) && is_valid_coord(&g.max()),
        Geometry::Triangle(g) => g.to_array().iter().all(is_valid_coord),
    }
}

/// Vertex count after collapsing runs of repeated coordinates.
fn num_distinct_consecutive<T: CoordFloat>(coords: &[Coord<T>]) -> usize {
    if coords.is_empty() {
        return 0;
    }
    1 + coords.windows(2).filter(|pair| pair[0] != pair[1]).count()
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::{coord, line_string, point, polygon};

    #[test]
    fn non_finite_point_is_invalid() {
        assert!(is_valid_point(&point!(x: 1.0, y: 2.0)));
        assert!(!is_valid_point(&point!(x: f64::NAN, y: 2.0)));
        assert!(!is_valid_point(&point!(x: 0.0, y: f64::INFINITY)));
    }

    #[test]
    fn line_string_needs_two_distinct_vertices() {
        assert!(is_valid_line_string(&line_string![(x: 0., y: 0.), (x: 1., y: 1.)]));
        assert!(!is_valid_line_string(&line_string![(x: 0., y: 0.)]));
        assert!(!is_valid_line_string(&line_string![(x: 0., y: 0.), (x: 0., y: 0.)]));
        assert!(is_valid_line_string(&LineString::<f64>::new(vec![])));
    }

    #[test]
    fn ring_must_be_closed_with_four_vertices() {
        let open = line_string![(x: 0., y: 0.), (x: 1., y: 0.), (x: 1., y: 1.), (x: 0., y: 1.)];
        assert!(!is_valid_ring(&open));

        let mut closed = open.clone();
        closed.close();
        assert!(is_valid_ring(&closed));

        let collapsed = line_string![(x: 0., y: 0.), (x: 1., y: 0.), (x: 1., y: 0.), (x: 0., y: 0.)];
        assert!(!is_valid_ring(&collapsed));
    }

    #[test]
    fn polygon_validity() {
        let square = polygon![
            (x: 0., y: 0.),
            (x: 4., y: 0.),
            (x: 4., y: 4.),
            (x: 0., y: 4.),
        ];
        assert!(is_valid_polygon(&square));

        let empty = Polygon::<f64>::new(LineString::new(vec![]), vec![]);
        assert!(is_valid_polygon(&empty));

        // polygon! closes the ring, so a two-vertex exterior becomes three coordinates
        let sliver = polygon![(x: 0., y: 0.), (x: 1., y: 1.)];
        assert!(!is_valid_polygon(&sliver));
    }

    #[test]
    fn collection_is_invalid_if_any_member_is() {
        let good = Geometry::Point(point!(x: 1., y: 1.));
        let bad = Geometry::Point(Point(coord! { x: f64::NAN, y: 0. }));
        assert!(is_valid_geometry(&Geometry::GeometryCollection(
            GeometryCollection::new_from(vec![good.clone()])
        )));
        assert!(!is_valid_geometry(&Geometry::GeometryCollection(
            GeometryCollection::new_from(vec![good, bad])
        )));
    }
}
