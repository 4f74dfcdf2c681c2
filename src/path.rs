//! The output model: geometries expressed as move-to/line-to vertex streams.

use geo::{BoundingRect, MultiPoint, Point, Rect};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::capacity::PathCapacity;
use crate::error::{GeoPathError, Result};
use crate::geo_traits::{CoordTrait, LineStringTrait, PointTrait, PolygonTrait};

/// A path construction command.
///
/// The numeric codes follow the AGG path command numbering.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoPrimitive,
    TryFromPrimitive,
)]
#[repr(u8)]
pub enum Command {
    /// Start a new subpath (or ring) at this vertex.
    MoveTo = 1,
    /// Extend the current subpath to this vertex.
    LineTo = 2,
}

impl Command {
    /// Decode a raw command code.
    pub fn from_code(code: u8) -> Result<Self> {
        Self::try_from(code).map_err(|_| GeoPathError::UnknownCode {
            kind: "path command",
            code,
        })
    }
}

/// The kind of an output geometry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoPrimitive,
    TryFromPrimitive,
)]
#[repr(u8)]
pub enum GeometryKind {
    Point = 1,
    LineString = 2,
    Polygon = 3,
}

impl GeometryKind {
    /// Decode a raw geometry kind code.
    pub fn from_code(code: u8) -> Result<Self> {
        Self::try_from(code).map_err(|_| GeoPathError::UnknownCode {
            kind: "geometry kind",
            code,
        })
    }
}

/// One vertex of a path: a coordinate and the command that reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub command: Command,
}

impl Vertex {
    pub fn new(x: f64, y: f64, command: Command) -> Self {
        Self { x, y, command }
    }

    pub fn is_move_to(&self) -> bool {
        self.command == Command::MoveTo
    }
}

impl CoordTrait for Vertex {
    type T = f64;

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }
}

/// A geometry stored as an ordered sequence of [`Vertex`] values.
///
/// Each `MoveTo` starts a subpath. For a [`GeometryKind::Polygon`] every subpath is a ring, the
/// first one being the exterior. For a [`GeometryKind::Point`] every vertex is a `MoveTo`.
///
/// The vertex buffer is allocated once with the capacity planned by the converter;
/// [`reserved_capacity`](Self::reserved_capacity) reports that plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathGeometry {
    kind: GeometryKind,
    vertices: Vec<Vertex>,
    #[serde(skip)]
    reserved: usize,
}

impl PathGeometry {
    /// Creates a new empty [`PathGeometry`].
    pub fn new(kind: GeometryKind) -> Self {
        Self::with_capacity(kind, PathCapacity::new_empty())
    }

    /// Creates a new [`PathGeometry`] with room for exactly `capacity.vertex_capacity()` vertices.
    pub fn with_capacity(kind: GeometryKind, capacity: PathCapacity) -> Self {
        Self {
            kind,
            vertices: Vec::with_capacity(capacity.vertex_capacity()),
            reserved: capacity.vertex_capacity(),
        }
    }

    /// The canonical method to create a [`PathGeometry`] out of its internal components.
    ///
    /// # Errors
    ///
    /// - if the first vertex is not a `MoveTo`
    /// - if a point geometry contains a `LineTo`
    pub fn try_new(kind: GeometryKind, vertices: Vec<Vertex>) -> Result<Self> {
        if let Some(first) = vertices.first() {
            if !first.is_move_to() {
                return Err(GeoPathError::MalformedPath(
                    "path must start with a move-to command".to_string(),
                ));
            }
        }
        if kind == GeometryKind::Point && vertices.iter().any(|v| !v.is_move_to()) {
            return Err(GeoPathError::MalformedPath(
                "point geometry cannot contain line-to commands".to_string(),
            ));
        }
        let reserved = vertices.len();
        Ok(Self {
            kind,
            vertices,
            reserved,
        })
    }

    /// Reserves the minimum capacity for exactly `additional` more vertices.
    pub fn reserve_exact(&mut self, additional: usize) {
        self.vertices.reserve_exact(additional);
        self.reserved = self.vertices.len() + additional;
    }

    #[inline]
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.vertices.push(Vertex::new(x, y, Command::MoveTo));
    }

    #[inline]
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.vertices.push(Vertex::new(x, y, Command::LineTo));
    }

    /// Append a point as a single `MoveTo`. Returns the number of vertices added.
    pub fn push_point(&mut self, point: &impl PointTrait<T = f64>) -> usize {
        match point.coord() {
            Some(coord) => {
                self.move_to(coord.x(), coord.y());
                1
            }
            None => 0,
        }
    }

    /// Append a line string or ring as one subpath, in storage order and without closing it.
    /// Returns the number of vertices added.
    pub fn push_line_string(&mut self, line_string: &impl LineStringTrait<T = f64>) -> usize {
        let mut added = 0;
        for coord in line_string.coords() {
            if added == 0 {
                self.move_to(coord.x(), coord.y());
            } else {
                self.line_to(coord.x(), coord.y());
            }
            added += 1;
        }
        added
    }

    /// Append the exterior ring followed by every interior ring, each as its own subpath.
    /// Returns the number of vertices added.
    pub fn push_polygon(&mut self, polygon: &impl PolygonTrait<T = f64>) -> usize {
        let Some(exterior) = polygon.exterior() else {
            return 0;
        };
        let mut added = self.push_line_string(&exterior);
        for interior in polygon.interiors() {
            added += self.push_line_string(&interior);
        }
        added
    }

    pub fn kind(&self) -> GeometryKind {
        self.kind
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }

    /// The number of vertices (equivalently, commands) in this path.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The vertex capacity this path was planned with.
    pub fn reserved_capacity(&self) -> usize {
        self.reserved
    }

    pub fn num_subpaths(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_move_to()).count()
    }

    /// Iterate over the subpaths. Each item starts with its `MoveTo` vertex.
    pub fn subpaths(&self) -> Subpaths<'_> {
        Subpaths {
            remaining: &self.vertices,
        }
    }

    /// The axis-aligned extent of every vertex, or `None` for an empty path.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        let points: MultiPoint = self.vertices.iter().map(|v| Point::new(v.x, v.y)).collect();
        points.bounding_rect()
    }
}

/// Iterator over the subpaths of a [`PathGeometry`].
#[derive(Debug, Clone)]
pub struct Subpaths<'a> {
    remaining: &'a [Vertex],
}

impl<'a> Iterator for Subpaths<'a> {
    type Item = &'a [Vertex];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        let end = self.remaining[1..]
            .iter()
            .position(Vertex::is_move_to)
            .map_or(self.remaining.len(), |i| i + 1);
        let (subpath, rest) = self.remaining.split_at(end);
        self.remaining = rest;
        Some(subpath)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::{coord, line_string, point, polygon};

    #[test]
    fn command_codes() {
        assert_eq!(u8::from(Command::MoveTo), 1);
        assert_eq!(Command::from_code(2).unwrap(), Command::LineTo);
        assert!(matches!(
            Command::from_code(7),
            Err(GeoPathError::UnknownCode { code: 7, .. })
        ));
        assert_eq!(GeometryKind::from_code(3).unwrap(), GeometryKind::Polygon);
        assert!(GeometryKind::from_code(0).is_err());
    }

    #[test]
    fn push_line_string_emits_one_subpath() {
        let ls = line_string![(x: 0., y: 0.), (x: 1., y: 0.), (x: 1., y: 1.)];
        let mut path = PathGeometry::with_capacity(
            GeometryKind::LineString,
            PathCapacity::new(3, 1),
        );
        assert_eq!(path.push_line_string(&ls), 3);
        assert_eq!(path.reserved_capacity(), 3);
        assert_eq!(
            path.vertices(),
            &[
                Vertex::new(0., 0., Command::MoveTo),
                Vertex::new(1., 0., Command::LineTo),
                Vertex::new(1., 1., Command::LineTo),
            ]
        );
    }

    #[test]
    fn subpaths_split_at_move_to() {
        let poly = polygon!(
            exterior: [(x: 0., y: 0.), (x: 4., y: 0.), (x: 4., y: 4.), (x: 0., y: 4.)],
            interiors: [[(x: 1., y: 1.), (x: 2., y: 1.), (x: 2., y: 2.)]],
        );
        let mut path = PathGeometry::new(GeometryKind::Polygon);
        assert_eq!(path.push_polygon(&poly), 9);
        let lengths: Vec<usize> = path.subpaths().map(|s| s.len()).collect();
        assert_eq!(lengths, vec![5, 4]);
        assert_eq!(path.num_subpaths(), 2);
        assert!(path.subpaths().all(|s| s[0].is_move_to()));
    }

    #[test]
    fn try_new_rejects_malformed_streams() {
        let leading_line_to = vec![Vertex::new(0., 0., Command::LineTo)];
        assert!(PathGeometry::try_new(GeometryKind::LineString, leading_line_to).is_err());

        let point_with_line_to = vec![
            Vertex::new(0., 0., Command::MoveTo),
            Vertex::new(1., 1., Command::LineTo),
        ];
        assert!(PathGeometry::try_new(GeometryKind::Point, point_with_line_to).is_err());

        let path = PathGeometry::try_new(GeometryKind::Point, vec![]).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn bounding_rect() {
        let mut path = PathGeometry::new(GeometryKind::Point);
        assert!(path.bounding_rect().is_none());
        path.push_point(&point!(x: -3., y: 2.));
        path.push_point(&point!(x: 5., y: -1.));
        let rect = path.bounding_rect().unwrap();
        assert_eq!(rect.min(), coord! { x: -3., y: -1. });
        assert_eq!(rect.max(), coord! { x: 5., y: 2. });
    }
}
