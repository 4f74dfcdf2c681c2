//! Sources whose child handles may be null, as a GEOS accessor error or a foreign library can
//! produce. `geo` types never hand out a null child.

use geo::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

use crate::geo_traits::{GeometryCollectionTrait, GeometryTrait, GeometryType, MultiPolygonTrait};
use crate::test::polygon::{p0, p1};
use crate::validity;

pub(crate) struct NullableMultiPolygon(pub Vec<Option<Polygon>>);

pub(crate) struct NullableCollection(pub Vec<Option<Geometry>>);

/// `p0`, a null handle, then `p1`.
pub(crate) fn mp_with_null() -> NullableMultiPolygon {
    NullableMultiPolygon(vec![Some(p0()), None, Some(p1())])
}

/// A point, a null handle, then `p1`.
pub(crate) fn gc_with_null() -> NullableCollection {
    NullableCollection(vec![
        Some(Geometry::Point(crate::test::point::p0())),
        None,
        Some(Geometry::Polygon(p1())),
    ])
}

impl MultiPolygonTrait for NullableMultiPolygon {
    type T = f64;
    type ItemType<'a> = &'a Polygon where Self: 'a;

    fn num_polygons(&self) -> usize {
        self.0.len()
    }

    fn polygon(&self, i: usize) -> Option<Self::ItemType<'_>> {
        self.0.get(i)?.as_ref()
    }

    fn is_valid(&self) -> bool {
        self.0.iter().flatten().all(validity::is_valid_polygon)
    }
}

impl GeometryTrait for NullableMultiPolygon {
    type T = f64;
    type PointType<'a> = Point where Self: 'a;
    type LineStringType<'a> = LineString where Self: 'a;
    type PolygonType<'a> = Polygon where Self: 'a;
    type MultiPointType<'a> = MultiPoint where Self: 'a;
    type MultiLineStringType<'a> = MultiLineString where Self: 'a;
    type MultiPolygonType<'a> = NullableMultiPolygon where Self: 'a;
    type GeometryCollectionType<'a> = GeometryCollection where Self: 'a;

    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        Point,
        LineString,
        Polygon,
        MultiPoint,
        MultiLineString,
        NullableMultiPolygon,
        GeometryCollection,
    > {
        GeometryType::MultiPolygon(self)
    }

    fn is_valid(&self) -> bool {
        MultiPolygonTrait::is_valid(self)
    }
}

impl GeometryCollectionTrait for NullableCollection {
    type T = f64;
    type ItemType<'a> = &'a Geometry where Self: 'a;

    fn num_geometries(&self) -> usize {
        self.0.len()
    }

    fn geometry(&self, i: usize) -> Option<Self::ItemType<'_>> {
        self.0.get(i)?.as_ref()
    }

    fn is_valid(&self) -> bool {
        self.0.iter().flatten().all(validity::is_valid_geometry)
    }
}

impl GeometryTrait for NullableCollection {
    type T = f64;
    type PointType<'a> = Point where Self: 'a;
    type LineStringType<'a> = LineString where Self: 'a;
    type PolygonType<'a> = Polygon where Self: 'a;
    type MultiPointType<'a> = MultiPoint where Self: 'a;
    type MultiLineStringType<'a> = MultiLineString where Self: 'a;
    type MultiPolygonType<'a> = MultiPolygon where Self: 'a;
    type GeometryCollectionType<'a> = NullableCollection where Self: 'a;

    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        Point,
        LineString,
        Polygon,
        MultiPoint,
        MultiLineString,
        MultiPolygon,
        NullableCollection,
    > {
        GeometryType::GeometryCollection(self)
    }

    fn is_valid(&self) -> bool {
        GeometryCollectionTrait::is_valid(self)
    }
}
