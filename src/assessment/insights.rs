//! Display-oriented views derived from a scored result.

use super::catalog;
use super::domain::{Archetype, Dimension, Facet, PersonalityResult};
use super::scoring::to_percentile;
use super::zodiac::{zodiac_sign, Element, ZodiacSign};
use serde::Serialize;

/// Intensity band of the dominant trait, used to pick narrative variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    Low,
    Moderate,
    High,
    Extreme,
}

impl IntensityLevel {
    pub const fn from_percentile(percentile: i32) -> Self {
        if percentile >= 90 {
            Self::Extreme
        } else if percentile >= 70 {
            Self::High
        } else if percentile >= 50 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Extreme => "Extreme",
        }
    }
}

/// Verbal level shown next to a percentile.
pub const fn level_name(percentile: i32) -> &'static str {
    if percentile < 10 {
        "très faible"
    } else if percentile < 30 {
        "faible"
    } else if percentile < 50 {
        "modéré"
    } else if percentile < 70 {
        "bon"
    } else if percentile < 90 {
        "élevé"
    } else if percentile < 95 {
        "très élevé"
    } else if percentile < 99 {
        "exceptionnel"
    } else {
        "extrême"
    }
}

/// Trait-bar width for a raw score; unanswered (0) shows as an empty bar.
pub fn bar_percentage(raw: f64) -> i32 {
    if raw == 0.0 {
        0
    } else {
        to_percentile(raw)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionInsight {
    pub dimension: Dimension,
    pub label: &'static str,
    pub raw_score: f64,
    pub percentile: i32,
    pub level: &'static str,
    pub intensity: IntensityLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct FacetInsight {
    pub facet: &'static Facet,
    pub raw_score: f64,
    pub percentile: i32,
    pub level: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ZodiacView {
    pub sign: ZodiacSign,
    pub element: Element,
}

/// Everything a results page needs, in canonical order.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub dimensions: Vec<DimensionInsight>,
    pub facets: Vec<FacetInsight>,
    pub dominant_dimension: Dimension,
    pub secondary_dimension: Dimension,
    pub intensity: IntensityLevel,
    pub archetype: &'static Archetype,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_trait: Option<&'static Facet>,
    pub zodiac: ZodiacView,
}

impl ProfileSummary {
    pub fn from_result(result: &PersonalityResult) -> Self {
        let dimensions: Vec<DimensionInsight> = Dimension::ordered()
            .into_iter()
            .map(|dimension| {
                let percentile = result
                    .percentiles
                    .dimensions
                    .get(&dimension)
                    .copied()
                    .unwrap_or_default();
                DimensionInsight {
                    dimension,
                    label: dimension.label(),
                    raw_score: result
                        .dimension_scores
                        .get(&dimension)
                        .copied()
                        .unwrap_or_default(),
                    percentile,
                    level: level_name(percentile),
                    intensity: IntensityLevel::from_percentile(percentile),
                }
            })
            .collect();

        let facets = catalog::facets()
            .iter()
            .map(|facet| {
                let percentile = result
                    .percentiles
                    .facets
                    .get(facet.id)
                    .copied()
                    .unwrap_or_default();
                FacetInsight {
                    facet,
                    raw_score: result
                        .facet_scores
                        .get(facet.id)
                        .copied()
                        .unwrap_or_default(),
                    percentile,
                    level: level_name(percentile),
                }
            })
            .collect();

        let dominant_percentile = result
            .percentiles
            .dimensions
            .get(&result.dominant_dimension)
            .copied()
            .unwrap_or_default();

        let archetype = catalog::archetype(&result.archetype)
            .or_else(|| catalog::archetype_for(result.dominant_dimension))
            .unwrap_or_else(catalog::default_archetype);

        let sign = zodiac_sign(result.dominant_dimension, result.secondary_dimension);

        Self {
            dimensions,
            facets,
            dominant_dimension: result.dominant_dimension,
            secondary_dimension: result.secondary_dimension,
            intensity: IntensityLevel::from_percentile(dominant_percentile),
            archetype,
            shadow_trait: catalog::facet(&result.shadow_trait),
            zodiac: ZodiacView {
                sign,
                element: sign.element(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::AnswerSet;
    use crate::assessment::questions::question_bank;
    use crate::assessment::scoring::process_responses_at;

    #[test]
    fn intensity_thresholds() {
        assert_eq!(IntensityLevel::from_percentile(-17), IntensityLevel::Low);
        assert_eq!(IntensityLevel::from_percentile(49), IntensityLevel::Low);
        assert_eq!(IntensityLevel::from_percentile(50), IntensityLevel::Moderate);
        assert_eq!(IntensityLevel::from_percentile(70), IntensityLevel::High);
        assert_eq!(IntensityLevel::from_percentile(89), IntensityLevel::High);
        assert_eq!(IntensityLevel::from_percentile(90), IntensityLevel::Extreme);
    }

    #[test]
    fn level_names_follow_percentile_bands() {
        assert_eq!(level_name(0), "très faible");
        assert_eq!(level_name(10), "faible");
        assert_eq!(level_name(45), "modéré");
        assert_eq!(level_name(50), "bon");
        assert_eq!(level_name(75), "élevé");
        assert_eq!(level_name(92), "très élevé");
        assert_eq!(level_name(97), "exceptionnel");
        assert_eq!(level_name(100), "extrême");
    }

    #[test]
    fn bar_percentage_hides_unanswered_scores() {
        assert_eq!(bar_percentage(0.0), 0);
        assert_eq!(bar_percentage(1.0), 0);
        assert_eq!(bar_percentage(5.5), 75);
    }

    #[test]
    fn summary_of_an_empty_submission() {
        let result = process_responses_at(&AnswerSet::new(), question_bank(), 0);
        let summary = ProfileSummary::from_result(&result);

        assert_eq!(summary.dimensions.len(), 5);
        assert_eq!(summary.facets.len(), 30);
        assert_eq!(summary.archetype.id, "explorer");
        assert_eq!(summary.intensity, IntensityLevel::Low);
        assert_eq!(summary.zodiac.sign, ZodiacSign::Sagittarius);
        assert_eq!(summary.zodiac.element, Element::Fire);
        assert_eq!(
            summary.shadow_trait.map(|facet| facet.id),
            Some("imagination")
        );
    }
}
