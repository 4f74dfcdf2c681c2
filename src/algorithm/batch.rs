#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::convert::GeometryConverter;
use crate::diagnostics::ConversionSummary;
use crate::error::{GeoPathError, Result};
use crate::geo_traits::GeometryTrait;
use crate::options::ConvertOptions;
use crate::sink::Feature;

/// The result of converting a batch of source geometries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutput {
    /// One feature per source, in source order. A feature's id is its source's position.
    pub features: Vec<Feature>,
    /// Counts summed over every source.
    pub summary: ConversionSummary,
}

impl FromIterator<(Feature, ConversionSummary)> for BatchOutput {
    fn from_iter<I: IntoIterator<Item = (Feature, ConversionSummary)>>(iter: I) -> Self {
        let mut output = BatchOutput::default();
        for (feature, summary) in iter {
            output.features.push(feature);
            output.summary += summary;
        }
        output
    }
}

fn convert_one(
    idx: usize,
    geom: &impl GeometryTrait<T = f64>,
    options: ConvertOptions,
) -> Result<(Feature, ConversionSummary)> {
    let id = i64::try_from(idx).map_err(|_| GeoPathError::Overflow)?;
    let mut feature = Feature::new(id);
    let summary = GeometryConverter::new(options).convert(geom, &mut feature);
    Ok((feature, summary))
}

/// Convert every geometry in `geoms` into its own [`Feature`].
pub fn convert_batch<G: GeometryTrait<T = f64>>(
    geoms: &[G],
    options: ConvertOptions,
) -> Result<BatchOutput> {
    geoms
        .iter()
        .enumerate()
        .map(|(idx, geom)| convert_one(idx, geom, options))
        .collect()
}

/// Convert every geometry in `geoms` into its own [`Feature`] on the rayon thread pool.
///
/// Each worker converts into its own feature with its own summary; the output is identical to
/// [`convert_batch`].
#[cfg(feature = "rayon")]
pub fn par_convert_batch<G: GeometryTrait<T = f64> + Sync>(
    geoms: &[G],
    options: ConvertOptions,
) -> Result<BatchOutput> {
    let mut converted = Vec::with_capacity(geoms.len());
    geoms
        .par_iter()
        .enumerate()
        .map(|(idx, geom)| convert_one(idx, geom, options))
        .collect_into_vec(&mut converted);
    converted.into_iter().collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{collection, multipolygon};
    use geo::Geometry;

    fn sources() -> Vec<Geometry> {
        vec![
            Geometry::MultiPolygon(multipolygon::mp_with_invalid()),
            Geometry::GeometryCollection(collection::gc_nested()),
            Geometry::GeometryCollection(collection::gc_with_rect()),
        ]
    }

    #[test]
    fn one_feature_per_source() {
        let output = convert_batch(&sources(), ConvertOptions::default()).unwrap();
        let ids: Vec<i64> = output.features.iter().map(Feature::id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        let counts: Vec<usize> = output
            .features
            .iter()
            .map(Feature::num_geometries)
            .collect();
        assert_eq!(counts, vec![1, 4, 1]);
        assert_eq!(output.summary.geometries, 6);
        assert_eq!(output.summary.skipped_invalid, 2);
        assert_eq!(output.summary.unsupported, 1);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_matches_serial() {
        for flatten in [false, true] {
            let options = ConvertOptions::new(flatten);
            assert_eq!(
                par_convert_batch(&sources(), options).unwrap(),
                convert_batch(&sources(), options).unwrap()
            );
        }
    }
}
