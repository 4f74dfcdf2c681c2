//! Destinations for converted geometries.

use serde::Serialize;

use crate::path::PathGeometry;

/// An ordered, append-only destination for [`PathGeometry`] values.
///
/// The converter only ever pushes; it never reads back or removes what it has emitted.
pub trait FeatureSink {
    fn push_geometry(&mut self, geometry: PathGeometry);
}

impl FeatureSink for Vec<PathGeometry> {
    fn push_geometry(&mut self, geometry: PathGeometry) {
        self.push(geometry);
    }
}

impl<S: FeatureSink + ?Sized> FeatureSink for &mut S {
    fn push_geometry(&mut self, geometry: PathGeometry) {
        (**self).push_geometry(geometry);
    }
}

/// A feature: an identifier and the geometries converted into it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Feature {
    id: i64,
    geometries: Vec<PathGeometry>,
}

impl Feature {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            geometries: vec![],
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn geometries(&self) -> &[PathGeometry] {
        &self.geometries
    }

    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    pub fn into_geometries(self) -> Vec<PathGeometry> {
        self.geometries
    }
}

impl FeatureSink for Feature {
    fn push_geometry(&mut self, geometry: PathGeometry) {
        self.geometries.push(geometry);
    }
}
