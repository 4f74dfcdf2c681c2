//! Convert [`PathGeometry`] values back to [`geo`] geometries.

use geo::{Coord, Geometry, LineString, MultiLineString, MultiPoint, Point, Polygon};

use crate::error::{GeoPathError, Result};
use crate::path::{GeometryKind, PathGeometry, Vertex};

fn subpath_to_geo(subpath: &[Vertex]) -> LineString {
    LineString::new(
        subpath
            .iter()
            .map(|vertex| Coord {
                x: vertex.x,
                y: vertex.y,
            })
            .collect(),
    )
}

fn check_kind(path: &PathGeometry, expected: GeometryKind) -> Result<()> {
    if path.kind() == expected {
        Ok(())
    } else {
        Err(GeoPathError::IncorrectType(
            format!("expected a {:?} path, got {:?}", expected, path.kind()).into(),
        ))
    }
}

fn check_not_empty(path: &PathGeometry) -> Result<()> {
    if path.is_empty() {
        Err(GeoPathError::General(
            "cannot convert an empty path to geo".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Convert a Point path to a [`geo::MultiPoint`], one point per vertex.
pub fn path_to_multi_point(path: &PathGeometry) -> Result<MultiPoint> {
    check_kind(path, GeometryKind::Point)?;
    Ok(MultiPoint::new(
        path.vertices()
            .iter()
            .map(|vertex| Point::new(vertex.x, vertex.y))
            .collect(),
    ))
}

/// Convert a LineString path to a [`geo::MultiLineString`], one line string per subpath.
pub fn path_to_multi_line_string(path: &PathGeometry) -> Result<MultiLineString> {
    check_kind(path, GeometryKind::LineString)?;
    Ok(MultiLineString::new(
        path.subpaths().map(subpath_to_geo).collect(),
    ))
}

/// Convert a Polygon path to a [`geo::Polygon`]. The first subpath is the exterior ring and
/// the remaining subpaths are interior rings.
///
/// A merged multipolygon is read back as a single polygon with many interiors.
pub fn path_to_polygon(path: &PathGeometry) -> Result<Polygon> {
    check_kind(path, GeometryKind::Polygon)?;
    check_not_empty(path)?;
    let mut rings = path.subpaths().map(subpath_to_geo);
    let exterior = rings.next().unwrap_or_else(|| LineString::new(vec![]));
    Ok(Polygon::new(exterior, rings.collect()))
}

/// Convert any non-empty path to a [`geo::Geometry`].
///
/// Single-vertex Point paths become a [`Point`] and single-subpath LineString paths a
/// [`LineString`]; otherwise the multi variant is returned.
pub fn path_to_geo(path: &PathGeometry) -> Result<Geometry> {
    check_not_empty(path)?;
    let geometry = match path.kind() {
        GeometryKind::Point => {
            let mut multi_point = path_to_multi_point(path)?;
            if multi_point.0.len() == 1 {
                Geometry::Point(multi_point.0.remove(0))
            } else {
                Geometry::MultiPoint(multi_point)
            }
        }
        GeometryKind::LineString => {
            let mut multi_line_string = path_to_multi_line_string(path)?;
            if multi_line_string.0.len() == 1 {
                Geometry::LineString(multi_line_string.0.remove(0))
            } else {
                Geometry::MultiLineString(multi_line_string)
            }
        }
        GeometryKind::Polygon => Geometry::Polygon(path_to_polygon(path)?),
    };
    Ok(geometry)
}

impl TryFrom<&PathGeometry> for Geometry {
    type Error = GeoPathError;

    fn try_from(value: &PathGeometry) -> Result<Self> {
        path_to_geo(value)
    }
}

impl TryFrom<&PathGeometry> for Polygon {
    type Error = GeoPathError;

    fn try_from(value: &PathGeometry) -> Result<Self> {
        path_to_polygon(value)
    }
}

impl TryFrom<&PathGeometry> for MultiLineString {
    type Error = GeoPathError;

    fn try_from(value: &PathGeometry) -> Result<Self> {
        path_to_multi_line_string(value)
    }
}

impl TryFrom<&PathGeometry> for MultiPoint {
    type Error = GeoPathError;

    fn try_from(value: &PathGeometry) -> Result<Self> {
        path_to_multi_point(value)
    }
}
