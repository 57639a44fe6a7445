use crate::assessment::domain::{
    DimensionScores, FacetScores, Percentiles, LIKERT_MAX, LIKERT_MIN,
};

/// Linear rescale of a raw 1–7 mean onto 0–100, rounded half away from zero.
///
/// No population norms are involved. A raw 0 (nothing answered) yields -17 and
/// is deliberately left unclamped.
pub fn to_percentile(raw: f64) -> i32 {
    let span = f64::from(LIKERT_MAX - LIKERT_MIN);
    ((raw - f64::from(LIKERT_MIN)) / span * 100.0).round() as i32
}

pub fn compute_percentiles(
    dimension_scores: &DimensionScores,
    facet_scores: &FacetScores,
) -> Percentiles {
    Percentiles {
        dimensions: dimension_scores
            .iter()
            .map(|(dimension, raw)| (*dimension, to_percentile(*raw)))
            .collect(),
        facets: facet_scores
            .iter()
            .map(|(facet, raw)| (facet.clone(), to_percentile(*raw)))
            .collect(),
    }
}
