//! Read GEOS geometries as conversion sources.
//!
//! [`GEOSGeometry`] wraps either a borrowed [`geos::Geometry`] or a [`geos::ConstGeometry`]
//! child handle and implements every [`geo_traits`][crate::geo_traits] trait. Validity is GEOS's
//! own `is_valid`. GEOS accessor errors are read as null children or empty coordinate sequences.

use std::cell::OnceCell;
use std::fmt;

use geos::{Geom, GeometryTypes};

use crate::error::{GeoPathError, Result};
use crate::geo_traits::{
    GeometryCollectionTrait, GeometryTrait, GeometryType, LineStringTrait, MultiLineStringTrait,
    MultiPointTrait, MultiPolygonTrait, PointTrait, PolygonTrait,
};

enum Handle<'a> {
    Borrowed(&'a geos::Geometry),
    Const(geos::ConstGeometry<'a>),
}

/// Run `$body` with `$geom` bound to the underlying GEOS geometry, whichever handle holds it.
macro_rules! with_geom {
    ($self:expr, $geom:ident => $body:expr) => {
        match &$self.handle {
            Handle::Borrowed(borrowed) => {
                let $geom: &geos::Geometry = borrowed;
                $body
            }
            Handle::Const($geom) => $body,
        }
    };
}

/// A GEOS geometry of any type, viewed through the source traits.
///
/// Coordinates are read from GEOS once, on first access, and cached.
pub struct GEOSGeometry<'a> {
    handle: Handle<'a>,
    coords: OnceCell<Vec<(f64, f64)>>,
}

impl<'a> GEOSGeometry<'a> {
    pub fn new(geom: &'a geos::Geometry) -> Self {
        Self {
            handle: Handle::Borrowed(geom),
            coords: OnceCell::new(),
        }
    }

    pub fn from_const(geom: geos::ConstGeometry<'a>) -> Self {
        Self {
            handle: Handle::Const(geom),
            coords: OnceCell::new(),
        }
    }

    pub fn geometry_type(&self) -> GeometryTypes {
        with_geom!(self, geom => geom.geometry_type())
    }

    fn is_empty(&self) -> bool {
        with_geom!(self, geom => geom.is_empty().unwrap_or(true))
    }

    fn geos_is_valid(&self) -> bool {
        with_geom!(self, geom => geom.is_valid())
    }

    fn cached_coords(&self) -> &[(f64, f64)] {
        self.coords
            .get_or_init(|| with_geom!(self, geom => read_coords(geom)))
    }

    fn num_children(&self) -> usize {
        with_geom!(self, geom => geom.get_num_geometries().unwrap_or(0))
    }

    fn child(&self, i: usize) -> Option<GEOSGeometry<'_>> {
        with_geom!(self, geom => geom
            .get_geometry_n(i.try_into().ok()?)
            .ok()
            .map(GEOSGeometry::from_const))
    }
}

impl fmt::Debug for GEOSGeometry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GEOSGeometry")
            .field("geometry_type", &self.geometry_type())
            .finish()
    }
}

fn read_coords(geom: &impl Geom) -> Vec<(f64, f64)> {
    let Ok(seq) = geom.get_coord_seq() else {
        return vec![];
    };
    let size = seq.size().unwrap_or(0);
    (0..size)
        .map_while(|i| Some((seq.get_x(i).ok()?, seq.get_y(i).ok()?)))
        .collect()
}

/// Parse WKT with GEOS. Mostly useful for building conversion sources in tests and tools.
pub fn geos_from_wkt(wkt: &str) -> Result<geos::Geometry> {
    geos::Geometry::new_from_wkt(wkt).map_err(GeoPathError::from)
}

impl<'a> PointTrait for GEOSGeometry<'a> {
    type T = f64;
    type CoordType<'b> = (f64, f64) where Self: 'b;

    fn coord(&self) -> Option<Self::CoordType<'_>> {
        self.cached_coords().first().copied()
    }

    fn is_valid(&self) -> bool {
        self.geos_is_valid()
    }
}

impl<'a> LineStringTrait for GEOSGeometry<'a> {
    type T = f64;
    type CoordType<'b> = (f64, f64) where Self: 'b;

    fn num_coords(&self) -> usize {
        self.cached_coords().len()
    }

    fn coord(&self, i: usize) -> Option<Self::CoordType<'_>> {
        self.cached_coords().get(i).copied()
    }

    fn is_valid(&self) -> bool {
        self.geos_is_valid()
    }
}

impl<'a> PolygonTrait for GEOSGeometry<'a> {
    type T = f64;
    type RingType<'b> = GEOSGeometry<'b> where Self: 'b;

    fn exterior(&self) -> Option<Self::RingType<'_>> {
        if self.is_empty() {
            return None;
        }
        with_geom!(self, geom => geom.get_exterior_ring().ok().map(GEOSGeometry::from_const))
    }

    fn num_interiors(&self) -> usize {
        with_geom!(self, geom => geom.get_num_interior_rings().unwrap_or(0))
    }

    fn interior(&self, i: usize) -> Option<Self::RingType<'_>> {
        with_geom!(self, geom => geom
            .get_interior_ring_n(i.try_into().ok()?)
            .ok()
            .map(GEOSGeometry::from_const))
    }

    fn is_valid(&self) -> bool {
        self.geos_is_valid()
    }
}

impl<'a> MultiPointTrait for GEOSGeometry<'a> {
    type T = f64;
    type ItemType<'b> = GEOSGeometry<'b> where Self: 'b;

    fn num_points(&self) -> usize {
        self.num_children()
    }

    fn point(&self, i: usize) -> Option<Self::ItemType<'_>> {
        self.child(i)
    }

    fn is_valid(&self) -> bool {
        self.geos_is_valid()
    }
}

impl<'a> MultiLineStringTrait for GEOSGeometry<'a> {
    type T = f64;
    type ItemType<'b> = GEOSGeometry<'b> where Self: 'b;

    fn num_line_strings(&self) -> usize {
        self.num_children()
    }

    fn line_string(&self, i: usize) -> Option<Self::ItemType<'_>> {
        self.child(i)
    }

    fn is_valid(&self) -> bool {
        self.geos_is_valid()
    }
}

impl<'a> MultiPolygonTrait for GEOSGeometry<'a> {
    type T = f64;
    type ItemType<'b> = GEOSGeometry<'b> where Self: 'b;

    fn num_polygons(&self) -> usize {
        self.num_children()
    }

    fn polygon(&self, i: usize) -> Option<Self::ItemType<'_>> {
        self.child(i)
    }

    fn is_valid(&self) -> bool {
        self.geos_is_valid()
    }
}

impl<'a> GeometryCollectionTrait for GEOSGeometry<'a> {
    type T = f64;
    type ItemType<'b> = GEOSGeometry<'b> where Self: 'b;

    fn num_geometries(&self) -> usize {
        self.num_children()
    }

    fn geometry(&self, i: usize) -> Option<Self::ItemType<'_>> {
        self.child(i)
    }

    fn is_valid(&self) -> bool {
        self.geos_is_valid()
    }
}

impl<'a> GeometryTrait for GEOSGeometry<'a> {
    type T = f64;
    type PointType<'b> = GEOSGeometry<'a> where Self: 'b;
    type LineStringType<'b> = GEOSGeometry<'a> where Self: 'b;
    type PolygonType<'b> = GEOSGeometry<'a> where Self: 'b;
    type MultiPointType<'b> = GEOSGeometry<'a> where Self: 'b;
    type MultiLineStringType<'b> = GEOSGeometry<'a> where Self: 'b;
    type MultiPolygonType<'b> = GEOSGeometry<'a> where Self: 'b;
    type GeometryCollectionType<'b> = GEOSGeometry<'a> where Self: 'b;

    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        GEOSGeometry<'a>,
        GEOSGeometry<'a>,
        GEOSGeometry<'a>,
        GEOSGeometry<'a>,
        GEOSGeometry<'a>,
        GEOSGeometry<'a>,
        GEOSGeometry<'a>,
    > {
        match self.geometry_type() {
            GeometryTypes::Point => GeometryType::Point(self),
            GeometryTypes::LineString => GeometryType::LineString(self),
            GeometryTypes::LinearRing => GeometryType::LinearRing(self),
            GeometryTypes::Polygon => GeometryType::Polygon(self),
            GeometryTypes::MultiPoint => GeometryType::MultiPoint(self),
            GeometryTypes::MultiLineString => GeometryType::MultiLineString(self),
            GeometryTypes::MultiPolygon => GeometryType::MultiPolygon(self),
            GeometryTypes::GeometryCollection => GeometryType::GeometryCollection(self),
            #[allow(unreachable_patterns)]
            _ => GeometryType::Unsupported("unknown GEOS geometry type"),
        }
    }

    fn is_valid(&self) -> bool {
        self.geos_is_valid()
    }
}
