//! Scoring pipeline: facets, dimensions, percentiles, archetype.
//!
//! Every function here is pure and total over its inputs. Malformed answers
//! are not rejected; they flow through the arithmetic unchanged.

mod archetype;
mod dimensions;
mod facets;
mod percentiles;

pub use archetype::{resolve_archetype, ArchetypeResolution};
pub use dimensions::{compute_dimension_score, compute_dimension_scores};
pub use facets::{compute_facet_score, compute_facet_scores, effective_answer};
pub use percentiles::{compute_percentiles, to_percentile};

use super::domain::{AnswerSet, PersonalityResult, Question};
use chrono::Utc;
use tracing::debug;

/// Scores a submission and stamps it with the current time.
pub fn process_responses(answers: &AnswerSet, questions: &[Question]) -> PersonalityResult {
    process_responses_at(answers, questions, Utc::now().timestamp_millis())
}

/// Scores a submission with an explicit epoch-millisecond timestamp.
pub fn process_responses_at(
    answers: &AnswerSet,
    questions: &[Question],
    timestamp: i64,
) -> PersonalityResult {
    let facet_scores = compute_facet_scores(answers, questions);
    let dimension_scores = compute_dimension_scores(&facet_scores);
    let percentiles = compute_percentiles(&dimension_scores, &facet_scores);
    let resolution = resolve_archetype(&percentiles.dimensions, &percentiles.facets);

    debug!(
        answered = answers.len(),
        dominant = %resolution.dominant_dimension,
        secondary = %resolution.secondary_dimension,
        archetype = resolution.archetype.id,
        shadow = %resolution.shadow_trait,
        "scored personality profile"
    );

    PersonalityResult {
        dimension_scores,
        facet_scores,
        percentiles,
        dominant_dimension: resolution.dominant_dimension,
        secondary_dimension: resolution.secondary_dimension,
        shadow_trait: resolution.shadow_trait,
        archetype: resolution.archetype.id.to_string(),
        timestamp,
    }
}
