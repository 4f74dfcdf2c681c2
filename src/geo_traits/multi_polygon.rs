use geo::{CoordFloat, CoordNum, MultiPolygon, Polygon};

use super::PolygonTrait;
use crate::validity;

/// A trait for accessing data from a generic MultiPolygon.
pub trait MultiPolygonTrait: Sized {
    type T: CoordNum;
    type ItemType<'a>: 'a + PolygonTrait<T = Self::T>
    where
        Self: 'a;

    /// The number of polygons in this MultiPolygon
    fn num_polygons(&self) -> usize;

    /// Access to a specified polygon in this MultiPolygon
    /// Will return None if the provided index is out of bounds or the stored handle is null
    fn polygon(&self, i: usize) -> Option<Self::ItemType<'_>>;

    /// Whether the originating library considers this MultiPolygon valid.
    fn is_valid(&self) -> bool;
}

impl<T: CoordFloat> MultiPolygonTrait for MultiPolygon<T> {
    type T = T;
    type ItemType<'a> = &'a Polygon<Self::T> where Self: 'a;

    fn num_polygons(&self) -> usize {
        self.0.len()
    }

    fn polygon(&self, i: usize) -> Option<Self::ItemType<'_>> {
        self.0.get(i)
    }

    fn is_valid(&self) -> bool {
        validity::is_valid_multi_polygon(self)
    }
}

impl<'b, T: CoordFloat> MultiPolygonTrait for &'b MultiPolygon<T> {
    type T = T;
    type ItemType<'a> = &'b Polygon<Self::T> where Self: 'a;

    fn num_polygons(&self) -> usize {
        self.0.len()
    }

    fn polygon(&self, i: usize) -> Option<Self::ItemType<'_>> {
        let multi_polygon: &'b MultiPolygon<T> = *self;
        multi_polygon.0.get(i)
    }

    fn is_valid(&self) -> bool {
        validity::is_valid_multi_polygon(self)
    }
}
