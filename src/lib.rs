//! Convert geometries owned by a geometry library into flat move-to/line-to vertex streams.
//!
//! A source geometry is anything implementing [`geo_traits::GeometryTrait`]: the [`geo`] types
//! out of the box, and GEOS geometries with the `geos` feature. The converter walks the source,
//! counts the vertices each output needs, and builds [`PathGeometry`] values with exactly that
//! capacity, appending them to a [`FeatureSink`].
//!
//! ```
//! use geo::{polygon, MultiPolygon};
//! use geopath::{convert_geometry, PathGeometry};
//!
//! let square = polygon![(x: 0., y: 0.), (x: 1., y: 0.), (x: 1., y: 1.), (x: 0., y: 1.)];
//! let source = MultiPolygon::new(vec![square.clone(), square]);
//!
//! let mut merged: Vec<PathGeometry> = vec![];
//! convert_geometry(&source, &mut merged, false);
//! assert_eq!(merged.len(), 1);
//! assert_eq!(merged[0].num_subpaths(), 2);
//!
//! let mut separate: Vec<PathGeometry> = vec![];
//! convert_geometry(&source, &mut separate, true);
//! assert_eq!(separate.len(), 2);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use convert::{convert_geometry, GeometryConverter};
pub use diagnostics::{ConversionSummary, Diagnostics, LogDiagnostics, NoopDiagnostics, SkipReason};
pub use options::ConvertOptions;
pub use path::{Command, GeometryKind, PathGeometry, Vertex};
pub use sink::{Feature, FeatureSink};

pub mod algorithm;
pub mod capacity;
pub mod convert;
pub mod diagnostics;
pub mod error;
pub mod geo_traits;
pub mod io;
pub mod options;
pub mod path;
pub mod sink;
#[cfg(test)]
pub(crate) mod test;
pub mod validity;
