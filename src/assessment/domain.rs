use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Lowest point of the Likert scale.
pub const LIKERT_MIN: i32 = 1;
/// Highest point of the Likert scale.
pub const LIKERT_MAX: i32 = 7;

/// The five Big Five axes. Declaration order is the canonical tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "Ouverture")]
    Openness,
    #[serde(rename = "Conscienciosité")]
    Conscientiousness,
    #[serde(rename = "Extraversion")]
    Extraversion,
    #[serde(rename = "Agréabilité")]
    Agreeableness,
    #[serde(rename = "Névrosisme")]
    Neuroticism,
}

impl Dimension {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Openness,
            Self::Conscientiousness,
            Self::Extraversion,
            Self::Agreeableness,
            Self::Neuroticism,
        ]
    }

    /// Display label, also used as the serialized form.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Openness => "Ouverture",
            Self::Conscientiousness => "Conscienciosité",
            Self::Extraversion => "Extraversion",
            Self::Agreeableness => "Agréabilité",
            Self::Neuroticism => "Névrosisme",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Openness => "Openness",
            Self::Conscientiousness => "Conscientiousness",
            Self::Extraversion => "Extraversion",
            Self::Agreeableness => "Agreeableness",
            Self::Neuroticism => "Neuroticism",
        }
    }

    /// Accepts either the display label or the English name, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        let needle = value.trim().to_lowercase();
        Self::ordered().into_iter().find(|dimension| {
            dimension.label().to_lowercase() == needle
                || dimension.english_name().to_lowercase() == needle
        })
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One item of the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: &'static str,
    pub dimension: Dimension,
    pub facet: &'static str,
    pub reverse: bool,
    pub weight: f64,
}

/// Narrow sub-trait; six of them compose each dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Facet {
    pub id: &'static str,
    pub name: &'static str,
    pub dimension: Dimension,
    pub description: &'static str,
}

/// Profile template keyed by dominant dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    pub id: &'static str,
    pub name: &'static str,
    pub primary_dimension: Dimension,
    pub description: &'static str,
    pub adjectives: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
}

pub type QuestionId = u32;

/// Question id to Likert response. Values are not range-checked.
pub type AnswerSet = BTreeMap<QuestionId, i32>;

/// Facet id to weighted mean response, 0 when nothing was answered.
pub type FacetScores = BTreeMap<String, f64>;

pub type DimensionScores = BTreeMap<Dimension, f64>;

pub type DimensionPercentiles = BTreeMap<Dimension, i32>;

pub type FacetPercentiles = BTreeMap<String, i32>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percentiles {
    pub dimensions: DimensionPercentiles,
    pub facets: FacetPercentiles,
}

/// Terminal output of one scored submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityResult {
    pub dimension_scores: DimensionScores,
    pub facet_scores: FacetScores,
    pub percentiles: Percentiles,
    pub dominant_dimension: Dimension,
    pub secondary_dimension: Dimension,
    pub shadow_trait: String,
    pub archetype: String,
    /// Creation time in epoch milliseconds.
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_serialize_with_display_labels() {
        let json = serde_json::to_string(&Dimension::Conscientiousness).expect("serialize");
        assert_eq!(json, "\"Conscienciosité\"");

        let parsed: Dimension = serde_json::from_str("\"Névrosisme\"").expect("deserialize");
        assert_eq!(parsed, Dimension::Neuroticism);
    }

    #[test]
    fn parse_accepts_labels_and_english_names() {
        assert_eq!(Dimension::parse("agréabilité"), Some(Dimension::Agreeableness));
        assert_eq!(Dimension::parse(" Openness "), Some(Dimension::Openness));
        assert_eq!(Dimension::parse("honesty"), None);
    }

    #[test]
    fn dimension_keyed_maps_iterate_in_canonical_order() {
        let mut scores = DimensionScores::new();
        for dimension in Dimension::ordered().into_iter().rev() {
            scores.insert(dimension, 1.0);
        }
        let keys: Vec<_> = scores.keys().copied().collect();
        assert_eq!(keys, Dimension::ordered().to_vec());
    }
}
