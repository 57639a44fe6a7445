use metrics_exporter_prometheus::PrometheusHandle;
use prism_persona::assessment::domain::{LIKERT_MAX, LIKERT_MIN};
use prism_persona::assessment::{Dimension, KeyValueStore, Question};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared by the assessment handlers.
pub(crate) struct AssessmentState<S> {
    pub(crate) store: Arc<S>,
    pub(crate) questions: &'static [Question],
    pub(crate) min_completion: f64,
}

impl<S: KeyValueStore> AssessmentState<S> {
    pub(crate) fn new(store: Arc<S>, questions: &'static [Question], min_completion: f64) -> Self {
        Self {
            store,
            questions,
            min_completion,
        }
    }
}

pub(crate) fn parse_dimension(raw: &str) -> Result<Dimension, String> {
    Dimension::parse(raw).ok_or_else(|| {
        format!(
            "unknown dimension '{raw}' (expected one of: {})",
            Dimension::ordered()
                .iter()
                .map(|dimension| dimension.english_name())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}

pub(crate) fn parse_likert(raw: &str) -> Result<i32, String> {
    let value: i32 = raw
        .trim()
        .parse()
        .map_err(|err| format!("failed to parse '{raw}' as an integer ({err})"))?;
    if (LIKERT_MIN..=LIKERT_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "{value} is outside the {LIKERT_MIN}..={LIKERT_MAX} answer scale"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dimensions_by_either_name() {
        assert_eq!(parse_dimension("openness"), Ok(Dimension::Openness));
        assert_eq!(parse_dimension("Névrosisme"), Ok(Dimension::Neuroticism));
        assert!(parse_dimension("charisma")
            .expect_err("unknown")
            .contains("Agreeableness"));
    }

    #[test]
    fn likert_values_stay_on_the_scale() {
        assert_eq!(parse_likert(" 4 "), Ok(4));
        assert!(parse_likert("0").is_err());
        assert!(parse_likert("8").is_err());
        assert!(parse_likert("often").is_err());
    }
}
