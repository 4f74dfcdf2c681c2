use geo::{CoordFloat, CoordNum, MultiPoint, Point};

use super::PointTrait;
use crate::validity;

/// A trait for accessing data from a generic MultiPoint.
pub trait MultiPointTrait: Sized {
    type T: CoordNum;
    type ItemType<'a>: 'a + PointTrait<T = Self::T>
    where
        Self: 'a;

    /// The number of points in this MultiPoint
    fn num_points(&self) -> usize;

    /// Access to a specified point in this MultiPoint
    /// Will return None if the provided index is out of bounds or the stored handle is null
    fn point(&self, i: usize) -> Option<Self::ItemType<'_>>;

    /// Whether the originating library considers this MultiPoint valid.
    fn is_valid(&self) -> bool;
}

impl<T: CoordFloat> MultiPointTrait for MultiPoint<T> {
    type T = T;
    type ItemType<'a> = &'a Point<Self::T> where Self: 'a;

    fn num_points(&self) -> usize {
        self.0.len()
    }

    fn point(&self, i: usize) -> Option<Self::ItemType<'_>> {
        self.0.get(i)
    }

    fn is_valid(&self) -> bool {
        validity::is_valid_multi_point(self)
    }
}

impl<'b, T: CoordFloat> MultiPointTrait for &'b MultiPoint<T> {
    type T = T;
    type ItemType<'a> = &'b Point<Self::T> where Self: 'a;

    fn num_points(&self) -> usize {
        self.0.len()
    }

    fn point(&self, i: usize) -> Option<Self::ItemType<'_>> {
        let multi_point: &'b MultiPoint<T> = *self;
        multi_point.0.get(i)
    }

    fn is_valid(&self) -> bool {
        validity::is_valid_multi_point(self)
    }
}
