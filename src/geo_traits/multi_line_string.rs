use geo::{CoordFloat, CoordNum, LineString, MultiLineString};

use super::LineStringTrait;
use crate::validity;

/// A trait for accessing data from a generic MultiLineString.
pub trait MultiLineStringTrait: Sized {
    type T: CoordNum;
    type ItemType<'a>: 'a + LineStringTrait<T = Self::T>
    where
        Self: 'a;

    /// The number of line strings in this MultiLineString
    fn num_line_strings(&self) -> usize;

    /// Access to a specified line string in this MultiLineString
    /// Will return None if the provided index is out of bounds or the stored handle is null
    fn line_string(&self, i: usize) -> Option<Self::ItemType<'_>>;

    /// Whether the originating library considers this MultiLineString valid.
    fn is_valid(&self) -> bool;
}

impl<T: CoordFloat> MultiLineStringTrait for MultiLineString<T> {
    type T = T;
    type ItemType<'a> = &'a LineString<Self::T> where Self: 'a;

    fn num_line_strings(&self) -> usize {
        self.0.len()
    }

    fn line_string(&self, i: usize) -> Option<Self::ItemType<'_>> {
        self.0.get(i)
    }

    fn is_valid(&self) -> bool {
        validity::is_valid_multi_line_string(self)
    }
}

impl<'b, T: CoordFloat> MultiLineStringTrait for &'b MultiLineString<T> {
    type T = T;
    type ItemType<'a> = &'b LineString<Self::T> where Self: 'a;

    fn num_line_strings(&self) -> usize {
        self.0.len()
    }

    fn line_string(&self, i: usize) -> Option<Self::ItemType<'_>> {
        let multi_line_string: &'b MultiLineString<T> = *self;
        multi_line_string.0.get(i)
    }

    fn is_valid(&self) -> bool {
        validity::is_valid_multi_line_string(self)
    }
}
