//! Conversion of source geometries into [`PathGeometry`] values.
//!
//! The entry point dispatches on the source's [`ShapeKind`] and hands it to one shape routine:
//!
//! | source | output |
//! |---|---|
//! | Point | one Point |
//! | LineString, LinearRing | one LineString |
//! | Polygon | one Polygon, exterior ring then interior rings |
//! | MultiPoint | one Point per valid member |
//! | MultiLineString | one merged LineString, or one per valid member when flattening |
//! | MultiPolygon | one merged Polygon, or one per valid member when flattening |
//! | GeometryCollection | whatever each valid member converts to, depth first |
//!
//! Each output is built in two passes: the vertices are counted first and the buffer is
//! allocated once at that size, then filled. Null or invalid children of multi-part geometries
//! and collections are dropped; empty shapes produce no output. Both are reported to the
//! [`Diagnostics`] and counted in the returned [`ConversionSummary`]. A merged multi-part is
//! always emitted, as an empty path when none of its members holds a coordinate.

use crate::capacity::{valid_parts, PathCapacity};
use crate::diagnostics::{ConversionSummary, Diagnostics, LogDiagnostics, SkipReason};
use crate::geo_traits::{
    GeometryCollectionTrait, GeometryTrait, GeometryType, LineStringTrait, MultiLineStringTrait,
    MultiPointTrait, MultiPolygonTrait, PointTrait, PolygonTrait, ShapeKind,
};
use crate::options::ConvertOptions;
use crate::path::{GeometryKind, PathGeometry};
use crate::sink::FeatureSink;

/// Convert `geometry` and append the results to `sink`, logging through [`LogDiagnostics`].
///
/// With `flatten_multiparts`, every member of a MultiLineString or MultiPolygon becomes its own
/// output geometry; otherwise the members are merged into one.
///
/// ```
/// use geo::line_string;
/// use geopath::convert::convert_geometry;
/// use geopath::path::PathGeometry;
///
/// let line = line_string![(x: 0., y: 0.), (x: 1., y: 1.), (x: 2., y: 0.)];
/// let mut sink: Vec<PathGeometry> = vec![];
/// let summary = convert_geometry(&line, &mut sink, false);
/// assert_eq!(summary.geometries, 1);
/// assert_eq!(sink[0].len(), 3);
/// ```
pub fn convert_geometry(
    geometry: &impl GeometryTrait<T = f64>,
    sink: &mut impl FeatureSink,
    flatten_multiparts: bool,
) -> ConversionSummary {
    GeometryConverter::new(ConvertOptions::new(flatten_multiparts)).convert(geometry, sink)
}

/// A reusable converter holding [`ConvertOptions`] and a [`Diagnostics`] observer.
///
/// Besides [`convert`](Self::convert), which dispatches on the shape kind, each shape routine is
/// exposed on its own.
#[derive(Debug, Clone, Default)]
pub struct GeometryConverter<D: Diagnostics = LogDiagnostics> {
    options: ConvertOptions,
    diagnostics: D,
}

impl GeometryConverter<LogDiagnostics> {
    pub fn new(options: ConvertOptions) -> Self {
        Self::with_diagnostics(options, LogDiagnostics)
    }
}

impl<D: Diagnostics> GeometryConverter<D> {
    pub fn with_diagnostics(options: ConvertOptions, diagnostics: D) -> Self {
        Self {
            options,
            diagnostics,
        }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut D {
        &mut self.diagnostics
    }

    pub fn into_diagnostics(self) -> D {
        self.diagnostics
    }

    fn walker<'a, S: FeatureSink>(&'a mut self, sink: &'a mut S) -> Walker<'a, D, S> {
        Walker {
            flatten_multiparts: self.options.flatten_multiparts,
            diagnostics: &mut self.diagnostics,
            sink,
            summary: ConversionSummary::default(),
        }
    }

    /// Convert any supported geometry, dispatching on its shape kind.
    pub fn convert(
        &mut self,
        geometry: &impl GeometryTrait<T = f64>,
        sink: &mut impl FeatureSink,
    ) -> ConversionSummary {
        let mut walker = self.walker(sink);
        walker.geometry(geometry);
        walker.summary
    }

    /// Emit a single `MoveTo` at the point's location.
    pub fn convert_point(
        &mut self,
        point: &impl PointTrait<T = f64>,
        sink: &mut impl FeatureSink,
    ) -> ConversionSummary {
        let mut walker = self.walker(sink);
        walker.point(point);
        walker.summary
    }

    /// Emit one subpath with the line string's coordinates in storage order.
    pub fn convert_line_string(
        &mut self,
        line_string: &impl LineStringTrait<T = f64>,
        sink: &mut impl FeatureSink,
    ) -> ConversionSummary {
        let mut walker = self.walker(sink);
        walker.line_string(line_string, ShapeKind::LineString);
        walker.summary
    }

    /// Emit the exterior ring followed by each interior ring, one subpath per ring.
    pub fn convert_polygon(
        &mut self,
        polygon: &impl PolygonTrait<T = f64>,
        sink: &mut impl FeatureSink,
    ) -> ConversionSummary {
        let mut walker = self.walker(sink);
        walker.polygon(polygon);
        walker.summary
    }

    /// Emit one Point per valid member. The flattening option does not apply to MultiPoints.
    pub fn convert_multi_point(
        &mut self,
        multi_point: &impl MultiPointTrait<T = f64>,
        sink: &mut impl FeatureSink,
    ) -> ConversionSummary {
        let mut walker = self.walker(sink);
        walker.multi_point(multi_point);
        walker.summary
    }

    /// Emit a single LineString holding one subpath per valid member.
    ///
    /// The LineString is emitted even when no member contributes a vertex.
    pub fn convert_multi_line_string(
        &mut self,
        multi_line_string: &impl MultiLineStringTrait<T = f64>,
        sink: &mut impl FeatureSink,
    ) -> ConversionSummary {
        let mut walker = self.walker(sink);
        walker.multi_line_string_merged(multi_line_string);
        walker.summary
    }

    /// Emit one LineString per valid member.
    pub fn convert_multi_line_string_as_separate(
        &mut self,
        multi_line_string: &impl MultiLineStringTrait<T = f64>,
        sink: &mut impl FeatureSink,
    ) -> ConversionSummary {
        let mut walker = self.walker(sink);
        walker.multi_line_string_separate(multi_line_string);
        walker.summary
    }

    /// Emit a single Polygon holding the rings of every valid member, in member order.
    ///
    /// The Polygon is emitted even when no member contributes a vertex.
    pub fn convert_multi_polygon(
        &mut self,
        multi_polygon: &impl MultiPolygonTrait<T = f64>,
        sink: &mut impl FeatureSink,
    ) -> ConversionSummary {
        let mut walker = self.walker(sink);
        walker.multi_polygon_merged(multi_polygon);
        walker.summary
    }

    /// Emit one Polygon per valid member.
    pub fn convert_multi_polygon_as_separate(
        &mut self,
        multi_polygon: &impl MultiPolygonTrait<T = f64>,
        sink: &mut impl FeatureSink,
    ) -> ConversionSummary {
        let mut walker = self.walker(sink);
        walker.multi_polygon_separate(multi_polygon);
        walker.summary
    }

    /// Convert every valid member of the collection, recursing into nested collections.
    pub fn convert_collection(
        &mut self,
        collection: &impl GeometryCollectionTrait<T = f64>,
        sink: &mut impl FeatureSink,
    ) -> ConversionSummary {
        let mut walker = self.walker(sink);
        walker.collection(collection);
        walker.summary
    }
}

/// State for one conversion call.
struct Walker<'a, D: Diagnostics, S: FeatureSink> {
    flatten_multiparts: bool,
    diagnostics: &'a mut D,
    sink: &'a mut S,
    summary: ConversionSummary,
}

impl<'a, D: Diagnostics, S: FeatureSink> Walker<'a, D, S> {
    fn visit(&mut self, kind: ShapeKind) {
        self.diagnostics.visit(kind, self.flatten_multiparts);
    }

    fn emit(&mut self, geometry: PathGeometry) {
        debug_assert_eq!(geometry.len(), geometry.reserved_capacity());
        self.summary.emitted(&geometry);
        self.diagnostics.emitted(&geometry);
        self.sink.push_geometry(geometry);
    }

    fn skipped(&mut self, parent: ShapeKind, index: Option<usize>, reason: SkipReason) {
        self.summary.skipped(parent, index, reason);
        self.diagnostics.skipped(parent, index, reason);
    }

    fn unsupported(&mut self, name: &str) {
        self.summary.unsupported(name);
        self.diagnostics.unsupported(name);
    }

    fn geometry(&mut self, geometry: &impl GeometryTrait<T = f64>) {
        match geometry.as_type() {
            GeometryType::Point(g) => self.point(g),
            GeometryType::LineString(g) => self.line_string(g, ShapeKind::LineString),
            GeometryType::LinearRing(g) => self.line_string(g, ShapeKind::LinearRing),
            GeometryType::Polygon(g) => self.polygon(g),
            GeometryType::MultiPoint(g) => self.multi_point(g),
            GeometryType::MultiLineString(g) => {
                if self.flatten_multiparts {
                    self.multi_line_string_separate(g)
                } else {
                    self.multi_line_string_merged(g)
                }
            }
            GeometryType::MultiPolygon(g) => {
                if self.flatten_multiparts {
                    self.multi_polygon_separate(g)
                } else {
                    self.multi_polygon_merged(g)
                }
            }
            GeometryType::GeometryCollection(g) => self.collection(g),
            GeometryType::Unsupported(name) => self.unsupported(name),
        }
    }

    fn point(&mut self, point: &impl PointTrait<T = f64>) {
        self.visit(ShapeKind::Point);
        let mut capacity = PathCapacity::new_empty();
        capacity.add_point(point);
        if capacity.is_empty() {
            self.skipped(ShapeKind::Point, None, SkipReason::Empty);
            return;
        }
        let mut path = PathGeometry::with_capacity(GeometryKind::Point, capacity);
        path.push_point(point);
        self.emit(path);
    }

    fn line_string(&mut self, line_string: &impl LineStringTrait<T = f64>, kind: ShapeKind) {
        self.visit(kind);
        let mut capacity = PathCapacity::new_empty();
        capacity.add_line_string(line_string);
        if capacity.is_empty() {
            self.skipped(kind, None, SkipReason::Empty);
            return;
        }
        let mut path = PathGeometry::with_capacity(GeometryKind::LineString, capacity);
        path.push_line_string(line_string);
        self.emit(path);
    }

    fn polygon(&mut self, polygon: &impl PolygonTrait<T = f64>) {
        self.visit(ShapeKind::Polygon);
        let mut capacity = PathCapacity::new_empty();
        capacity.add_polygon(polygon);
        if capacity.is_empty() {
            self.skipped(ShapeKind::Polygon, None, SkipReason::Empty);
            return;
        }
        let mut path = PathGeometry::with_capacity(GeometryKind::Polygon, capacity);
        path.push_polygon(polygon);
        self.emit(path);
    }

    fn multi_point(&mut self, multi_point: &impl MultiPointTrait<T = f64>) {
        self.visit(ShapeKind::MultiPoint);
        let parts = valid_parts(
            multi_point.num_points(),
            |i| multi_point.point(i),
            |point| point.is_valid(),
            |i, reason| self.skipped(ShapeKind::MultiPoint, Some(i), reason),
        );
        for point in &parts {
            self.point(point);
        }
    }

    fn multi_line_string_merged(&mut self, multi_line_string: &impl MultiLineStringTrait<T = f64>) {
        self.visit(ShapeKind::MultiLineString);
        let parts = valid_parts(
            multi_line_string.num_line_strings(),
            |i| multi_line_string.line_string(i),
            |line_string| line_string.is_valid(),
            |i, reason| self.skipped(ShapeKind::MultiLineString, Some(i), reason),
        );
        let capacity = PathCapacity::from_line_strings(parts.iter());
        let mut path = PathGeometry::with_capacity(GeometryKind::LineString, capacity);
        for line_string in &parts {
            path.push_line_string(line_string);
        }
        self.emit(path);
    }

    fn multi_line_string_separate(
        &mut self,
        multi_line_string: &impl MultiLineStringTrait<T = f64>,
    ) {
        self.visit(ShapeKind::MultiLineString);
        let parts = valid_parts(
            multi_line_string.num_line_strings(),
            |i| multi_line_string.line_string(i),
            |line_string| line_string.is_valid(),
            |i, reason| self.skipped(ShapeKind::MultiLineString, Some(i), reason),
        );
        for line_string in &parts {
            self.line_string(line_string, ShapeKind::LineString);
        }
    }

    fn multi_polygon_merged(&mut self, multi_polygon: &impl MultiPolygonTrait<T = f64>) {
        self.visit(ShapeKind::MultiPolygon);
        let parts = valid_parts(
            multi_polygon.num_polygons(),
            |i| multi_polygon.polygon(i),
            |polygon| polygon.is_valid(),
            |i, reason| self.skipped(ShapeKind::MultiPolygon, Some(i), reason),
        );
        let capacity = PathCapacity::from_polygons(parts.iter());
        let mut path = PathGeometry::with_capacity(GeometryKind::Polygon, capacity);
        for polygon in &parts {
            path.push_polygon(polygon);
        }
        self.emit(path);
    }

    fn multi_polygon_separate(&mut self, multi_polygon: &impl MultiPolygonTrait<T = f64>) {
        self.visit(ShapeKind::MultiPolygon);
        let parts = valid_parts(
            multi_polygon.num_polygons(),
            |i| multi_polygon.polygon(i),
            |polygon| polygon.is_valid(),
            |i, reason| self.skipped(ShapeKind::MultiPolygon, Some(i), reason),
        );
        for polygon in &parts {
            self.polygon(polygon);
        }
    }

    fn collection(&mut self, collection: &impl GeometryCollectionTrait<T = f64>) {
        self.visit(ShapeKind::GeometryCollection);
        let parts = valid_parts(
            collection.num_geometries(),
            |i| collection.geometry(i),
            |geometry| geometry.is_valid(),
            |i, reason| self.skipped(ShapeKind::GeometryCollection, Some(i), reason),
        );
        for geometry in &parts {
            self.geometry(geometry);
        }
    }
}
