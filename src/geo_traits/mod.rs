//! Read-only access to a foreign geometry tree.
//!
//! The converter never sees a concrete geometry library. It walks any type implementing
//! [`GeometryTrait`], dispatching on [`GeometryTrait::as_type`] and reading coordinates, rings
//! and children through the per-kind traits. Child accessors return `Option` so that null
//! handles held by the originating library can be represented.
//!
//! Implementations are provided for the [`geo`] types. With the `geos` feature,
//! [`GEOSGeometry`][crate::io::geos::GEOSGeometry] implements every trait for GEOS geometries.

pub use coord::CoordTrait;
pub use geometry::{GeometryTrait, GeometryType, ShapeKind};
pub use geometry_collection::GeometryCollectionTrait;
pub use line_string::LineStringTrait;
pub use multi_line_string::MultiLineStringTrait;
pub use multi_point::MultiPointTrait;
pub use multi_polygon::MultiPolygonTrait;
pub use point::PointTrait;
pub use polygon::PolygonTrait;

mod coord;
mod geometry;
mod geometry_collection;
mod line_string;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
