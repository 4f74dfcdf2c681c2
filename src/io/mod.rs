//! Interoperability with other geometry libraries.
//!
//! [`geo`](self::geo) rebuilds `geo` geometries from converted paths. With the `geos` feature,
//! [`geos`](self::geos) exposes GEOS geometries as conversion sources, and with the `geozero`
//! feature, [`PathGeometry`][crate::path::PathGeometry] can be fed to any geozero processor.

pub mod geo;
#[cfg(feature = "geos")]
pub mod geos;
#[cfg(feature = "geozero")]
pub mod geozero;
