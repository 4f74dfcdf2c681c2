use geo::{CoordFloat, CoordNum, Geometry, GeometryCollection};

use super::GeometryTrait;
use crate::validity;

/// A trait for accessing data from a generic GeometryCollection.
///
/// Members are themselves [`GeometryTrait`] values, so collections may nest to any depth.
pub trait GeometryCollectionTrait: Sized {
    type T: CoordNum;
    type ItemType<'a>: 'a + GeometryTrait<T = Self::T>
    where
        Self: 'a;

    /// The number of geometries in this GeometryCollection
    fn num_geometries(&self) -> usize;

    /// Access to a specified geometry in this GeometryCollection
    /// Will return None if the provided index is out of bounds or the stored handle is null
    fn geometry(&self, i: usize) -> Option<Self::ItemType<'_>>;

    /// Whether the originating library considers this GeometryCollection valid.
    fn is_valid(&self) -> bool;
}

impl<T: CoordFloat> GeometryCollectionTrait for GeometryCollection<T> {
    type T = T;
    type ItemType<'a> = &'a Geometry<Self::T> where Self: 'a;

    fn num_geometries(&self) -> usize {
        self.0.len()
    }

    fn geometry(&self, i: usize) -> Option<Self::ItemType<'_>> {
        self.0.get(i)
    }

    fn is_valid(&self) -> bool {
        validity::is_valid_geometry_collection(self)
    }
}
