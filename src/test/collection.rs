use geo::{Geometry, GeometryCollection, Rect};

use crate::test::{linestring, multipolygon, point, polygon};

/// A point, a nested collection holding a line string and a triangle, an invalid point, then a
/// multipolygon.
pub(crate) fn gc_nested() -> GeometryCollection {
    let inner = GeometryCollection::new_from(vec![
        Geometry::LineString(linestring::ls1()),
        Geometry::Polygon(polygon::p1()),
    ]);
    GeometryCollection::new_from(vec![
        Geometry::Point(point::p0()),
        Geometry::GeometryCollection(inner),
        Geometry::Point(point::p_nan()),
        Geometry::MultiPolygon(multipolygon::mp0()),
    ])
}

/// Holds a shape kind with no conversion routine next to a polygon.
pub(crate) fn gc_with_rect() -> GeometryCollection {
    GeometryCollection::new_from(vec![
        Geometry::Rect(Rect::new((0., 0.), (1., 1.))),
        Geometry::Polygon(polygon::p1()),
    ])
}
