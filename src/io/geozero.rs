//! Feed [`PathGeometry`] values to [`geozero`] processors.
//!
//! A Point path is processed as a point, or as a multipoint when it holds several vertices.
//! A LineString path is a linestring, or a multilinestring when it holds several subpaths. A
//! Polygon path is always a single polygon whose first ring is the exterior.

use geozero::{GeomProcessor, GeozeroGeometry};

use crate::path::{GeometryKind, PathGeometry, Vertex};

fn process_subpath<P: GeomProcessor>(
    subpath: &[Vertex],
    tagged: bool,
    idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    processor.linestring_begin(tagged, subpath.len(), idx)?;
    for (coord_idx, vertex) in subpath.iter().enumerate() {
        processor.xy(vertex.x, vertex.y, coord_idx)?;
    }
    processor.linestring_end(tagged, idx)?;
    Ok(())
}

fn process_points<P: GeomProcessor>(
    geom: &PathGeometry,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    let vertices = geom.vertices();
    if let [vertex] = vertices {
        processor.point_begin(geom_idx)?;
        processor.xy(vertex.x, vertex.y, 0)?;
        processor.point_end(geom_idx)?;
    } else {
        processor.multipoint_begin(vertices.len(), geom_idx)?;
        for (coord_idx, vertex) in vertices.iter().enumerate() {
            processor.xy(vertex.x, vertex.y, coord_idx)?;
        }
        processor.multipoint_end(geom_idx)?;
    }
    Ok(())
}

fn process_lines<P: GeomProcessor>(
    geom: &PathGeometry,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    let num_subpaths = geom.num_subpaths();
    if num_subpaths == 1 {
        process_subpath(geom.vertices(), true, geom_idx, processor)?;
    } else {
        processor.multilinestring_begin(num_subpaths, geom_idx)?;
        for (line_idx, subpath) in geom.subpaths().enumerate() {
            process_subpath(subpath, false, line_idx, processor)?;
        }
        processor.multilinestring_end(geom_idx)?;
    }
    Ok(())
}

fn process_rings<P: GeomProcessor>(
    geom: &PathGeometry,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    processor.polygon_begin(true, geom.num_subpaths(), geom_idx)?;
    for (ring_idx, ring) in geom.subpaths().enumerate() {
        process_subpath(ring, false, ring_idx, processor)?;
    }
    processor.polygon_end(true, geom_idx)?;
    Ok(())
}

/// Process a single path as the geometry at position `geom_idx`.
pub fn process_path<P: GeomProcessor>(
    geom: &PathGeometry,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    match geom.kind() {
        GeometryKind::Point => process_points(geom, geom_idx, processor),
        GeometryKind::LineString => process_lines(geom, geom_idx, processor),
        GeometryKind::Polygon => process_rings(geom, geom_idx, processor),
    }
}

/// Process the geometries of one conversion as a geometry collection.
pub fn process_paths<P: GeomProcessor>(
    geoms: &[PathGeometry],
    processor: &mut P,
) -> geozero::error::Result<()> {
    processor.geometrycollection_begin(geoms.len(), 0)?;
    for (geom_idx, geom) in geoms.iter().enumerate() {
        process_path(geom, geom_idx, processor)?;
    }
    processor.geometrycollection_end(0)?;
    Ok(())
}

impl GeozeroGeometry for PathGeometry {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> geozero::error::Result<()>
    where
        Self: Sized,
    {
        process_path(self, 0, processor)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::convert::convert_geometry;
    use crate::test::{multilinestring, multipoint, point, polygon};

    /// Records the geozero events it receives.
    #[derive(Default)]
    struct Events {
        log: Vec<String>,
        coords: usize,
    }

    impl GeomProcessor for Events {
        fn xy(&mut self, _x: f64, _y: f64, _idx: usize) -> geozero::error::Result<()> {
            self.coords += 1;
            Ok(())
        }

        fn point_begin(&mut self, _idx: usize) -> geozero::error::Result<()> {
            self.log.push("point".to_string());
            Ok(())
        }

        fn multipoint_begin(&mut self, size: usize, _idx: usize) -> geozero::error::Result<()> {
            self.log.push(format!("multipoint({size})"));
            Ok(())
        }

        fn linestring_begin(
            &mut self,
            tagged: bool,
            size: usize,
            _idx: usize,
        ) -> geozero::error::Result<()> {
            self.log.push(format!("linestring({tagged},{size})"));
            Ok(())
        }

        fn multilinestring_begin(&mut self, size: usize, _idx: usize) -> geozero::error::Result<()> {
            self.log.push(format!("multilinestring({size})"));
            Ok(())
        }

        fn polygon_begin(
            &mut self,
            _tagged: bool,
            size: usize,
            _idx: usize,
        ) -> geozero::error::Result<()> {
            self.log.push(format!("polygon({size})"));
            Ok(())
        }

        fn geometrycollection_begin(
            &mut self,
            size: usize,
            _idx: usize,
        ) -> geozero::error::Result<()> {
            self.log.push(format!("collection({size})"));
            Ok(())
        }
    }

    fn events(geometry: &impl crate::geo_traits::GeometryTrait<T = f64>) -> Events {
        let mut sink = vec![];
        convert_geometry(geometry, &mut sink, false);
        let mut events = Events::default();
        process_paths(&sink, &mut events).unwrap();
        events
    }

    #[test]
    fn point_and_multi_point() {
        let e = events(&point::p0());
        assert_eq!(e.log, vec!["collection(1)", "point"]);

        let mut path = PathGeometry::new(GeometryKind::Point);
        for p in multipoint::mp0().0 {
            path.move_to(p.x(), p.y());
        }
        let mut e = Events::default();
        path.process_geom(&mut e).unwrap();
        assert_eq!(e.log, vec!["multipoint(2)"]);
        assert_eq!(e.coords, 2);
    }

    #[test]
    fn merged_lines_become_multi_line_string() {
        let e = events(&multilinestring::ml1());
        assert_eq!(
            e.log,
            vec![
                "collection(1)",
                "multilinestring(2)",
                "linestring(false,4)",
                "linestring(false,4)"
            ]
        );
        assert_eq!(e.coords, 8);
    }

    #[test]
    fn polygon_rings() {
        let e = events(&polygon::p0());
        assert_eq!(
            e.log,
            vec![
                "collection(1)",
                "polygon(2)",
                "linestring(false,5)",
                "linestring(false,4)"
            ]
        );
    }
}
