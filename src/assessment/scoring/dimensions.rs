use crate::assessment::catalog;
use crate::assessment::domain::{Dimension, DimensionScores, FacetScores};

/// Unweighted mean of the dimension's facet scores.
///
/// Every facet with an entry counts, including zero entries for unanswered
/// facets, which pulls partially answered dimensions toward 0. Facets with no
/// entry at all are left out.
pub fn compute_dimension_score(facet_scores: &FacetScores, dimension: Dimension) -> f64 {
    let (total, count) = catalog::facets_for(dimension)
        .filter_map(|facet| facet_scores.get(facet.id))
        .fold((0.0, 0usize), |(total, count), score| (total + score, count + 1));

    if count > 0 {
        total / count as f64
    } else {
        0.0
    }
}

pub fn compute_dimension_scores(facet_scores: &FacetScores) -> DimensionScores {
    Dimension::ordered()
        .into_iter()
        .map(|dimension| (dimension, compute_dimension_score(facet_scores, dimension)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(dimension: Dimension, value: f64) -> FacetScores {
        catalog::facets_for(dimension)
            .map(|facet| (facet.id.to_string(), value))
            .collect()
    }

    #[test]
    fn all_zero_facets_average_to_zero() {
        for dimension in Dimension::ordered() {
            let scores = uniform(dimension, 0.0);
            assert_eq!(compute_dimension_score(&scores, dimension), 0.0);
        }
    }

    #[test]
    fn all_maximal_facets_average_to_seven() {
        for dimension in Dimension::ordered() {
            let scores = uniform(dimension, 7.0);
            assert_eq!(compute_dimension_score(&scores, dimension), 7.0);
        }
    }

    #[test]
    fn zero_entries_are_included_in_the_mean() {
        let mut scores = uniform(Dimension::Extraversion, 0.0);
        scores.insert("chaleur".to_string(), 6.0);
        assert_eq!(compute_dimension_score(&scores, Dimension::Extraversion), 1.0);
    }

    #[test]
    fn missing_entries_are_excluded_from_the_mean() {
        let mut scores = FacetScores::new();
        scores.insert("chaleur".to_string(), 6.0);
        scores.insert("joie".to_string(), 4.0);
        assert_eq!(compute_dimension_score(&scores, Dimension::Extraversion), 5.0);
        assert_eq!(compute_dimension_score(&scores, Dimension::Openness), 0.0);
    }

    #[test]
    fn facets_of_other_dimensions_are_ignored() {
        let mut scores = uniform(Dimension::Agreeableness, 3.0);
        scores.extend(uniform(Dimension::Neuroticism, 7.0));
        assert_eq!(compute_dimension_score(&scores, Dimension::Agreeableness), 3.0);
    }
}
