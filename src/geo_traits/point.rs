use geo::{Coord, CoordFloat, CoordNum, Point};

use super::CoordTrait;
use crate::validity;

/// A trait for accessing data from a generic Point.
pub trait PointTrait {
    type T: CoordNum;
    type CoordType<'a>: 'a + CoordTrait<T = Self::T>
    where
        Self: 'a;

    /// The location of this point, or `None` for an empty point.
    fn coord(&self) -> Option<Self::CoordType<'_>>;

    /// Whether the originating library considers this point valid.
    fn is_valid(&self) -> bool;
}

impl<T: CoordFloat> PointTrait for Point<T> {
    type T = T;
    type CoordType<'a> = &'a Coord<T> where Self: 'a;

    fn coord(&self) -> Option<Self::CoordType<'_>> {
        Some(&self.0)
    }

    fn is_valid(&self) -> bool {
        validity::is_valid_coord(&self.0)
    }
}

impl<'b, T: CoordFloat> PointTrait for &'b Point<T> {
    type T = T;
    type CoordType<'a> = &'b Coord<T> where Self: 'a;

    fn coord(&self) -> Option<Self::CoordType<'_>> {
        let point: &'b Point<T> = *self;
        Some(&point.0)
    }

    fn is_valid(&self) -> bool {
        validity::is_valid_coord(&self.0)
    }
}
