use geo::{CoordFloat, CoordNum, LineString, Polygon};

use super::LineStringTrait;
use crate::validity;

/// A trait for accessing data from a generic Polygon.
pub trait PolygonTrait: Sized {
    type T: CoordNum;
    type RingType<'a>: 'a + LineStringTrait<T = Self::T>
    where
        Self: 'a;

    /// The exterior ring of the polygon, or `None` for an empty polygon.
    fn exterior(&self) -> Option<Self::RingType<'_>>;

    /// The number of interior rings in this Polygon
    fn num_interiors(&self) -> usize;

    /// Access to a specified interior ring in this Polygon
    /// Will return None if the provided index is out of bounds
    fn interior(&self, i: usize) -> Option<Self::RingType<'_>>;

    /// An iterator of the interior rings of this Polygon, in storage order
    fn interiors(&self) -> impl Iterator<Item = Self::RingType<'_>> + '_ {
        (0..self.num_interiors()).map_while(move |i| self.interior(i))
    }

    /// Whether the originating library considers this Polygon valid.
    fn is_valid(&self) -> bool;
}

impl<T: CoordFloat> PolygonTrait for Polygon<T> {
    type T = T;
    type RingType<'a> = &'a LineString<T> where Self: 'a;

    fn exterior(&self) -> Option<Self::RingType<'_>> {
        let exterior = Polygon::<T>::exterior(self);
        if exterior.0.is_empty() {
            None
        } else {
            Some(exterior)
        }
    }

    fn num_interiors(&self) -> usize {
        Polygon::<T>::interiors(self).len()
    }

    fn interior(&self, i: usize) -> Option<Self::RingType<'_>> {
        Polygon::<T>::interiors(self).get(i)
    }

    fn is_valid(&self) -> bool {
        validity::is_valid_polygon(self)
    }
}

impl<'b, T: CoordFloat> PolygonTrait for &'b Polygon<T> {
    type T = T;
    type RingType<'a> = &'b LineString<T> where Self: 'a;

    fn exterior(&self) -> Option<Self::RingType<'_>> {
        let polygon: &'b Polygon<T> = *self;
        let exterior = Polygon::<T>::exterior(polygon);
        if exterior.0.is_empty() {
            None
        } else {
            Some(exterior)
        }
    }

    fn num_interiors(&self) -> usize {
        Polygon::<T>::interiors(self).len()
    }

    fn interior(&self, i: usize) -> Option<Self::RingType<'_>> {
        let polygon: &'b Polygon<T> = *self;
        Polygon::<T>::interiors(polygon).get(i)
    }

    fn is_valid(&self) -> bool {
        validity::is_valid_polygon(self)
    }
}
