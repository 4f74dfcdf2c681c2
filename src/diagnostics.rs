//! Observers notified while a conversion runs.
//!
//! Conversion never fails. Whatever it drops, it reports here: null children, children that fail
//! their validity check, empty shapes, and shape kinds with no conversion routine.
//!
//! [`LogDiagnostics`] forwards to the [`log`] facade and is the default. [`ConversionSummary`]
//! counts, and is what every conversion returns. [`NoopDiagnostics`] discards everything.

use std::fmt;
use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::geo_traits::ShapeKind;
use crate::path::PathGeometry;

/// Why a source part produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SkipReason {
    /// The originating library returned a null handle for the child.
    Null,
    /// The child failed its validity check.
    Invalid,
    /// The shape has no coordinates.
    Empty,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Null => f.write_str("null"),
            SkipReason::Invalid => f.write_str("invalid"),
            SkipReason::Empty => f.write_str("empty"),
        }
    }
}

/// Receives notifications from the converter. Every method defaults to doing nothing.
pub trait Diagnostics {
    /// A shape routine is about to run.
    fn visit(&mut self, _kind: ShapeKind, _flatten_multiparts: bool) {}

    /// A geometry was appended to the sink.
    fn emitted(&mut self, _geometry: &PathGeometry) {}

    /// A part was dropped. `index` is the child position within `parent` when the part was a
    /// child of a multi-part or collection.
    fn skipped(&mut self, _parent: ShapeKind, _index: Option<usize>, _reason: SkipReason) {}

    /// The source was of a kind no routine handles.
    fn unsupported(&mut self, _name: &str) {}
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn visit(&mut self, kind: ShapeKind, flatten_multiparts: bool) {
        (**self).visit(kind, flatten_multiparts)
    }

    fn emitted(&mut self, geometry: &PathGeometry) {
        (**self).emitted(geometry)
    }

    fn skipped(&mut self, parent: ShapeKind, index: Option<usize>, reason: SkipReason) {
        (**self).skipped(parent, index, reason)
    }

    fn unsupported(&mut self, name: &str) {
        (**self).unsupported(name)
    }
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {}

/// Forwards notifications to the [`log`] facade.
///
/// Routine entry and emitted geometries are logged at `trace`, skips and unsupported kinds at
/// `debug`. The log target is this module's path.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn visit(&mut self, kind: ShapeKind, flatten_multiparts: bool) {
        if kind.is_multi() {
            log::trace!("convert {kind} (flatten_multiparts={flatten_multiparts})");
        } else {
            log::trace!("convert {kind}");
        }
    }

    fn emitted(&mut self, geometry: &PathGeometry) {
        log::trace!(
            "emitted {:?} with {} vertices in {} subpaths",
            geometry.kind(),
            geometry.len(),
            geometry.num_subpaths()
        );
    }

    fn skipped(&mut self, parent: ShapeKind, index: Option<usize>, reason: SkipReason) {
        match index {
            Some(index) => log::debug!("skipping {reason} child {index} of {parent}"),
            None => log::debug!("skipping {reason} {parent}"),
        }
    }

    fn unsupported(&mut self, name: &str) {
        log::debug!("unknown geometry_type={name}");
    }
}

/// Counts of what a conversion produced and dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ConversionSummary {
    /// Geometries appended to the sink.
    pub geometries: usize,
    /// Vertices across all emitted geometries.
    pub vertices: usize,
    pub skipped_null: usize,
    pub skipped_invalid: usize,
    pub skipped_empty: usize,
    /// Sources or children of an unsupported kind.
    pub unsupported: usize,
}

impl ConversionSummary {
    /// Total number of parts dropped for any reason.
    pub fn num_dropped(&self) -> usize {
        self.skipped_null + self.skipped_invalid + self.skipped_empty + self.unsupported
    }
}

impl Diagnostics for ConversionSummary {
    fn emitted(&mut self, geometry: &PathGeometry) {
        self.geometries += 1;
        self.vertices += geometry.len();
    }

    fn skipped(&mut self, _parent: ShapeKind, _index: Option<usize>, reason: SkipReason) {
        match reason {
            SkipReason::Null => self.skipped_null += 1,
            SkipReason::Invalid => self.skipped_invalid += 1,
            SkipReason::Empty => self.skipped_empty += 1,
        }
    }

    fn unsupported(&mut self, _name: &str) {
        self.unsupported += 1;
    }
}

impl Add for ConversionSummary {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign for ConversionSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.geometries += rhs.geometries;
        self.vertices += rhs.vertices;
        self.skipped_null += rhs.skipped_null;
        self.skipped_invalid += rhs.skipped_invalid;
        self.skipped_empty += rhs.skipped_empty;
        self.unsupported += rhs.unsupported;
    }
}

impl std::iter::Sum for ConversionSummary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, summary| acc + summary)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::path::GeometryKind;

    #[test]
    fn summary_counts_notifications() {
        let mut summary = ConversionSummary::default();
        let mut path = PathGeometry::new(GeometryKind::LineString);
        path.move_to(0., 0.);
        path.line_to(1., 1.);

        summary.emitted(&path);
        summary.skipped(ShapeKind::MultiLineString, Some(1), SkipReason::Invalid);
        summary.skipped(ShapeKind::MultiLineString, Some(2), SkipReason::Null);
        summary.skipped(ShapeKind::LineString, None, SkipReason::Empty);
        summary.unsupported("Rect");

        assert_eq!(summary.geometries, 1);
        assert_eq!(summary.vertices, 2);
        assert_eq!(summary.num_dropped(), 4);
    }

    #[test]
    fn summaries_add() {
        let a = ConversionSummary {
            geometries: 2,
            vertices: 10,
            ..Default::default()
        };
        let b = ConversionSummary {
            geometries: 1,
            vertices: 3,
            skipped_invalid: 1,
            ..Default::default()
        };
        let total: ConversionSummary = [a, b].into_iter().sum();
        assert_eq!(total, a + b);
        assert_eq!(total.geometries, 3);
        assert_eq!(total.vertices, 13);
        assert_eq!(total.skipped_invalid, 1);
    }
}
