use std::fmt;

use geo::{
    CoordFloat, CoordNum, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use serde::{Deserialize, Serialize};

use super::{
    GeometryCollectionTrait, LineStringTrait, MultiLineStringTrait, MultiPointTrait,
    MultiPolygonTrait, PointTrait, PolygonTrait,
};
use crate::validity;

/// The structural category of a source geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl ShapeKind {
    /// Whether this kind aggregates child geometries.
    pub fn is_multi(&self) -> bool {
        matches!(
            self,
            ShapeKind::MultiPoint
                | ShapeKind::MultiLineString
                | ShapeKind::MultiPolygon
                | ShapeKind::GeometryCollection
        )
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Point => "Point",
            ShapeKind::LineString => "LineString",
            ShapeKind::LinearRing => "LinearRing",
            ShapeKind::Polygon => "Polygon",
            ShapeKind::MultiPoint => "MultiPoint",
            ShapeKind::MultiLineString => "MultiLineString",
            ShapeKind::MultiPolygon => "MultiPolygon",
            ShapeKind::GeometryCollection => "GeometryCollection",
        };
        f.write_str(name)
    }
}

/// An enumeration of all geometry types that can be contained inside a [GeometryTrait]. This is
/// used for extracting concrete geometry types out of a [GeometryTrait].
///
/// Line strings and linear rings share one accessor type; the tag keeps them apart.
/// `Unsupported` carries the name of a shape the converter has no routine for.
#[derive(Debug)]
pub enum GeometryType<'a, P, L, Y, MP, ML, MY, GC>
where
    P: PointTrait,
    L: LineStringTrait,
    Y: PolygonTrait,
    MP: MultiPointTrait,
    ML: MultiLineStringTrait,
    MY: MultiPolygonTrait,
    GC: GeometryCollectionTrait,
{
    Point(&'a P),
    LineString(&'a L),
    LinearRing(&'a L),
    Polygon(&'a Y),
    MultiPoint(&'a MP),
    MultiLineString(&'a ML),
    MultiPolygon(&'a MY),
    GeometryCollection(&'a GC),
    Unsupported(&'static str),
}

impl<'a, P, L, Y, MP, ML, MY, GC> GeometryType<'a, P, L, Y, MP, ML, MY, GC>
where
    P: PointTrait,
    L: LineStringTrait,
    Y: PolygonTrait,
    MP: MultiPointTrait,
    ML: MultiLineStringTrait,
    MY: MultiPolygonTrait,
    GC: GeometryCollectionTrait,
{
    /// The shape kind of this geometry, or `None` when it is unsupported.
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        let kind = match self {
            GeometryType::Point(_) => ShapeKind::Point,
            GeometryType::LineString(_) => ShapeKind::LineString,
            GeometryType::LinearRing(_) => ShapeKind::LinearRing,
            GeometryType::Polygon(_) => ShapeKind::Polygon,
            GeometryType::MultiPoint(_) => ShapeKind::MultiPoint,
            GeometryType::MultiLineString(_) => ShapeKind::MultiLineString,
            GeometryType::MultiPolygon(_) => ShapeKind::MultiPolygon,
            GeometryType::GeometryCollection(_) => ShapeKind::GeometryCollection,
            GeometryType::Unsupported(_) => return None,
        };
        Some(kind)
    }
}

/// A trait for accessing data from a generic Geometry.
///
/// This is the opaque source handle: it exposes a shape-kind tag through [`as_type`], the data
/// of each shape through the per-kind traits, and a single validity predicate.
///
/// [`as_type`]: GeometryTrait::as_type
#[allow(clippy::type_complexity)]
pub trait GeometryTrait {
    type T: CoordNum;
    type PointType<'a>: 'a + PointTrait<T = Self::T>
    where
        Self: 'a;
    type LineStringType<'a>: 'a + LineStringTrait<T = Self::T>
    where
        Self: 'a;
    type PolygonType<'a>: 'a + PolygonTrait<T = Self::T>
    where
        Self: 'a;
    type MultiPointType<'a>: 'a + MultiPointTrait<T = Self::T>
    where
        Self: 'a;
    type MultiLineStringType<'a>: 'a + MultiLineStringTrait<T = Self::T>
    where
        Self: 'a;
    type MultiPolygonType<'a>: 'a + MultiPolygonTrait<T = Self::T>
    where
        Self: 'a;
    type GeometryCollectionType<'a>: 'a + GeometryCollectionTrait<T = Self::T>
    where
        Self: 'a;

    /// Cast this geometry to a [`GeometryType`] enum, which allows for downcasting to a specific
    /// type
    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        Self::PointType<'_>,
        Self::LineStringType<'_>,
        Self::PolygonType<'_>,
        Self::MultiPointType<'_>,
        Self::MultiLineStringType<'_>,
        Self::MultiPolygonType<'_>,
        Self::GeometryCollectionType<'_>,
    >;

    /// Whether the originating library considers this geometry valid.
    fn is_valid(&self) -> bool;
}

impl<T: CoordFloat> GeometryTrait for Geometry<T> {
    type T = T;
    type PointType<'a> = Point<Self::T> where Self: 'a;
    type LineStringType<'a> = LineString<Self::T> where Self: 'a;
    type PolygonType<'a> = Polygon<Self::T> where Self: 'a;
    type MultiPointType<'a> = MultiPoint<Self::T> where Self: 'a;
    type MultiLineStringType<'a> = MultiLineString<Self::T> where Self: 'a;
    type MultiPolygonType<'a> = MultiPolygon<Self::T> where Self: 'a;
    type GeometryCollectionType<'a> = GeometryCollection<Self::T> where Self: 'a;

    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        Point<T>,
        LineString<T>,
        Polygon<T>,
        MultiPoint<T>,
        MultiLineString<T>,
        MultiPolygon<T>,
        GeometryCollection<T>,
    > {
        match self {
            Geometry::Point(p) => GeometryType::Point(p),
            Geometry::LineString(p) => GeometryType::LineString(p),
            Geometry::Polygon(p) => GeometryType::Polygon(p),
            Geometry::MultiPoint(p) => GeometryType::MultiPoint(p),
            Geometry::MultiLineString(p) => GeometryType::MultiLineString(p),
            Geometry::MultiPolygon(p) => GeometryType::MultiPolygon(p),
            Geometry::GeometryCollection(p) => GeometryType::GeometryCollection(p),
            Geometry::Line(_) => GeometryType::Unsupported("Line"),
            Geometry::Rect(_) => GeometryType::Unsupported("Rect"),
            Geometry::Triangle(_) => GeometryType::Unsupported("Triangle"),
        }
    }

    fn is_valid(&self) -> bool {
        validity::is_valid_geometry(self)
    }
}

impl<'b, T: CoordFloat> GeometryTrait for &'b Geometry<T> {
    type T = T;
    type PointType<'a> = Point<Self::T> where Self: 'a;
    type LineStringType<'a> = LineString<Self::T> where Self: 'a;
    type PolygonType<'a> = Polygon<Self::T> where Self: 'a;
    type MultiPointType<'a> = MultiPoint<Self::T> where Self: 'a;
    type MultiLineStringType<'a> = MultiLineString<Self::T> where Self: 'a;
    type MultiPolygonType<'a> = MultiPolygon<Self::T> where Self: 'a;
    type GeometryCollectionType<'a> = GeometryCollection<Self::T> where Self: 'a;

    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        Point<T>,
        LineString<T>,
        Polygon<T>,
        MultiPoint<T>,
        MultiLineString<T>,
        MultiPolygon<T>,
        GeometryCollection<T>,
    > {
        let geometry: &'b Geometry<T> = *self;
        geometry.as_type()
    }

    fn is_valid(&self) -> bool {
        validity::is_valid_geometry(self)
    }
}

/// Implement [`GeometryTrait`] for a concrete `geo` type so it can be handed to the converter
/// without first wrapping it in a [`Geometry`].
macro_rules! impl_specialization {
    ($geometry_type:ident, $variant:ident, $trait:ident) => {
        impl<T: CoordFloat> GeometryTrait for $geometry_type<T> {
            type T = T;
            type PointType<'a> = Point<Self::T> where Self: 'a;
            type LineStringType<'a> = LineString<Self::T> where Self: 'a;
            type PolygonType<'a> = Polygon<Self::T> where Self: 'a;
            type MultiPointType<'a> = MultiPoint<Self::T> where Self: 'a;
            type MultiLineStringType<'a> = MultiLineString<Self::T> where Self: 'a;
            type MultiPolygonType<'a> = MultiPolygon<Self::T> where Self: 'a;
            type GeometryCollectionType<'a> = GeometryCollection<Self::T> where Self: 'a;

            fn as_type(
                &self,
            ) -> GeometryType<
                '_,
                Point<T>,
                LineString<T>,
                Polygon<T>,
                MultiPoint<T>,
                MultiLineString<T>,
                MultiPolygon<T>,
                GeometryCollection<T>,
            > {
                GeometryType::$variant(self)
            }

            fn is_valid(&self) -> bool {
                <Self as $crate::geo_traits::$trait>::is_valid(self)
            }
        }
    };
}

impl_specialization!(Point, Point, PointTrait);
impl_specialization!(LineString, LineString, LineStringTrait);
impl_specialization!(Polygon, Polygon, PolygonTrait);
impl_specialization!(MultiPoint, MultiPoint, MultiPointTrait);
impl_specialization!(MultiLineString, MultiLineString, MultiLineStringTrait);
impl_specialization!(MultiPolygon, MultiPolygon, MultiPolygonTrait);
impl_specialization!(GeometryCollection, GeometryCollection, GeometryCollectionTrait);
