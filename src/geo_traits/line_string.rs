use geo::{Coord, CoordFloat, CoordNum, LineString};

use super::CoordTrait;
use crate::validity;

/// A trait for accessing data from a generic LineString.
///
/// The same trait serves linear rings, which differ from line strings only in what the
/// originating library considers valid.
pub trait LineStringTrait: Sized {
    type T: CoordNum;
    type CoordType<'a>: 'a + CoordTrait<T = Self::T>
    where
        Self: 'a;

    /// The number of coordinates in this LineString
    fn num_coords(&self) -> usize;

    /// Access to a specified coordinate in this LineString
    /// Will return None if the provided index is out of bounds
    fn coord(&self, i: usize) -> Option<Self::CoordType<'_>>;

    /// An iterator over the coordinates in this LineString, in storage order
    fn coords(&self) -> impl Iterator<Item = Self::CoordType<'_>> + '_ {
        (0..self.num_coords()).map_while(move |i| self.coord(i))
    }

    /// Whether the originating library considers this LineString valid.
    fn is_valid(&self) -> bool;
}

impl<T: CoordFloat> LineStringTrait for LineString<T> {
    type T = T;
    type CoordType<'a> = &'a Coord<T> where Self: 'a;

    fn num_coords(&self) -> usize {
        self.0.len()
    }

    fn coord(&self, i: usize) -> Option<Self::CoordType<'_>> {
        self.0.get(i)
    }

    fn is_valid(&self) -> bool {
        validity::is_valid_line_string(self)
    }
}

impl<'b, T: CoordFloat> LineStringTrait for &'b LineString<T> {
    type T = T;
    type CoordType<'a> = &'b Coord<T> where Self: 'a;

    fn num_coords(&self) -> usize {
        self.0.len()
    }

    fn coord(&self, i: usize) -> Option<Self::CoordType<'_>> {
        let line_string: &'b LineString<T> = *self;
        line_string.0.get(i)
    }

    fn is_valid(&self) -> bool {
        validity::is_valid_line_string(self)
    }
}
