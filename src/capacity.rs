use std::ops::{Add, AddAssign};

use crate::diagnostics::SkipReason;
use crate::geo_traits::{LineStringTrait, PointTrait, PolygonTrait};

/// A counter for the buffer sizes of a [`PathGeometry`][crate::path::PathGeometry].
///
/// This can be used to reduce allocations by allocating once for exactly the vertex space a
/// conversion needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathCapacity {
    pub(crate) vertex_capacity: usize,
    pub(crate) subpath_capacity: usize,
}

impl PathCapacity {
    /// Create a new capacity with known sizes.
    pub fn new(vertex_capacity: usize, subpath_capacity: usize) -> Self {
        Self {
            vertex_capacity,
            subpath_capacity,
        }
    }

    /// Create a new empty capacity.
    pub fn new_empty() -> Self {
        Self::new(0, 0)
    }

    /// Return `true` if the capacity is empty.
    pub fn is_empty(&self) -> bool {
        self.vertex_capacity == 0
    }

    pub fn vertex_capacity(&self) -> usize {
        self.vertex_capacity
    }

    pub fn subpath_capacity(&self) -> usize {
        self.subpath_capacity
    }

    /// Add a run of `num_coords` vertices forming one subpath.
    #[inline]
    pub fn add_coords(&mut self, num_coords: usize) {
        if num_coords > 0 {
            self.vertex_capacity += num_coords;
            self.subpath_capacity += 1;
        }
    }

    #[inline]
    pub fn add_point(&mut self, point: &impl PointTrait) {
        if point.coord().is_some() {
            self.add_coords(1);
        }
    }

    #[inline]
    pub fn add_line_string(&mut self, line_string: &impl LineStringTrait) {
        self.add_coords(line_string.num_coords());
    }

    /// Add the exterior ring and every interior ring of a polygon.
    #[inline]
    pub fn add_polygon(&mut self, polygon: &impl PolygonTrait) {
        if let Some(exterior) = polygon.exterior() {
            self.add_line_string(&exterior);
            for interior in polygon.interiors() {
                self.add_line_string(&interior);
            }
        }
    }

    pub fn from_points<'a>(geoms: impl Iterator<Item = &'a (impl PointTrait + 'a)>) -> Self {
        let mut counter = Self::new_empty();
        for maybe_point in geoms {
            counter.add_point(maybe_point);
        }
        counter
    }

    pub fn from_line_strings<'a>(
        geoms: impl Iterator<Item = &'a (impl LineStringTrait + 'a)>,
    ) -> Self {
        let mut counter = Self::new_empty();
        for line_string in geoms {
            counter.add_line_string(line_string);
        }
        counter
    }

    pub fn from_polygons<'a>(geoms: impl Iterator<Item = &'a (impl PolygonTrait + 'a)>) -> Self {
        let mut counter = Self::new_empty();
        for polygon in geoms {
            counter.add_polygon(polygon);
        }
        counter
    }
}

/// Snapshot the valid, non-null parts among `0..num_parts`.
///
/// The counting pass and the build pass both iterate the returned list, so they always agree on
/// which parts are converted. `on_skip` is told the index and reason of every dropped part.
pub(crate) fn valid_parts<P>(
    num_parts: usize,
    part: impl Fn(usize) -> Option<P>,
    is_valid: impl Fn(&P) -> bool,
    mut on_skip: impl FnMut(usize, SkipReason),
) -> Vec<P> {
    let mut parts = Vec::with_capacity(num_parts);
    for i in 0..num_parts {
        match part(i) {
            None => on_skip(i, SkipReason::Null),
            Some(p) if !is_valid(&p) => on_skip(i, SkipReason::Invalid),
            Some(p) => parts.push(p),
        }
    }
    parts
}

impl Add for PathCapacity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.vertex_capacity + rhs.vertex_capacity,
            self.subpath_capacity + rhs.subpath_capacity,
        )
    }
}

impl AddAssign for PathCapacity {
    fn add_assign(&mut self, rhs: Self) {
        self.vertex_capacity += rhs.vertex_capacity;
        self.subpath_capacity += rhs.subpath_capacity;
    }
}
