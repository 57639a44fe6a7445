use crate::assessment::catalog;
use crate::assessment::domain::{AnswerSet, FacetScores, Question, LIKERT_MAX, LIKERT_MIN};

/// Response after reflecting reverse-phrased items across the scale midpoint.
///
/// Computed in `f64` so any `i32` answer reflects without overflow.
pub fn effective_answer(question: &Question, answer: i32) -> f64 {
    if question.reverse {
        f64::from(LIKERT_MAX + LIKERT_MIN) - f64::from(answer)
    } else {
        f64::from(answer)
    }
}

/// Weighted mean of the effective answers recorded for one facet.
///
/// Unanswered items are skipped rather than counted, so partial completion
/// shrinks the sample instead of dragging the mean. A facet with no items or
/// no answered items scores 0.
pub fn compute_facet_score(answers: &AnswerSet, questions: &[Question], facet_id: &str) -> f64 {
    let mut sum = 0.0;
    let mut weight_total = 0.0;

    for question in questions.iter().filter(|question| question.facet == facet_id) {
        let Some(&answer) = answers.get(&question.id) else {
            continue;
        };

        sum += effective_answer(question, answer) * question.weight;
        weight_total += question.weight;
    }

    if weight_total > 0.0 {
        sum / weight_total
    } else {
        0.0
    }
}

/// Scores every catalog facet, including those absent from `questions`.
pub fn compute_facet_scores(answers: &AnswerSet, questions: &[Question]) -> FacetScores {
    catalog::facets()
        .iter()
        .map(|facet| {
            (
                facet.id.to_string(),
                compute_facet_score(answers, questions, facet.id),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::Dimension;
    use crate::assessment::questions::question_bank;

    fn item(id: u32, facet: &'static str, reverse: bool, weight: f64) -> Question {
        Question {
            id,
            text: "item",
            dimension: Dimension::Openness,
            facet,
            reverse,
            weight,
        }
    }

    #[test]
    fn reverse_items_reflect_across_midpoint() {
        let direct = item(1, "imagination", false, 1.0);
        let reverse = item(2, "imagination", true, 1.0);
        for answer in LIKERT_MIN..=LIKERT_MAX {
            assert_eq!(effective_answer(&direct, answer), f64::from(answer));
            assert_eq!(effective_answer(&reverse, answer), f64::from(8 - answer));
        }
    }

    #[test]
    fn no_answers_scores_zero_for_every_facet() {
        let answers = AnswerSet::new();
        for facet in catalog::facets() {
            assert_eq!(compute_facet_score(&answers, question_bank(), facet.id), 0.0);
        }
    }

    #[test]
    fn unknown_facet_scores_zero() {
        let answers: AnswerSet = [(1, 7)].into_iter().collect();
        assert_eq!(compute_facet_score(&answers, question_bank(), "bravoure"), 0.0);
    }

    #[test]
    fn unanswered_items_do_not_count_toward_the_mean() {
        let questions = [
            item(1, "ordre", false, 1.0),
            item(2, "ordre", false, 1.0),
            item(3, "ordre", true, 1.0),
        ];
        let answers: AnswerSet = [(1, 6), (3, 4)].into_iter().collect();
        assert_eq!(compute_facet_score(&answers, &questions, "ordre"), 5.0);
    }

    #[test]
    fn weights_shape_the_mean() {
        let questions = [item(1, "ordre", false, 3.0), item(2, "ordre", false, 1.0)];
        let answers: AnswerSet = [(1, 7), (2, 3)].into_iter().collect();
        assert_eq!(compute_facet_score(&answers, &questions, "ordre"), 6.0);
    }

    #[test]
    fn score_ignores_answer_insertion_order() {
        let forward: AnswerSet = [(1, 2), (2, 5), (3, 7), (4, 1)].into_iter().collect();
        let mut backward = AnswerSet::new();
        for (id, answer) in [(4, 1), (3, 7), (2, 5), (1, 2)] {
            backward.insert(id, answer);
        }
        assert_eq!(
            compute_facet_score(&forward, question_bank(), "imagination"),
            compute_facet_score(&backward, question_bank(), "imagination")
        );
    }

    #[test]
    fn out_of_range_answers_propagate_arithmetically() {
        let questions = [item(1, "joie", true, 1.0)];
        let answers: AnswerSet = [(1, 10)].into_iter().collect();
        assert_eq!(compute_facet_score(&answers, &questions, "joie"), -2.0);
    }

    #[test]
    fn extreme_answers_on_reverse_items_stay_finite() {
        let answers: AnswerSet = [(2, i32::MIN)].into_iter().collect();
        let score = compute_facet_score(&answers, question_bank(), "imagination");
        assert!(score.is_finite());
        assert_eq!(score, 8.0 - f64::from(i32::MIN));

        let reverse = item(1, "joie", true, 1.0);
        assert_eq!(effective_answer(&reverse, i32::MAX), 8.0 - f64::from(i32::MAX));
    }

    #[test]
    fn facet_scores_cover_the_whole_catalog() {
        let scores = compute_facet_scores(&AnswerSet::new(), &[]);
        assert_eq!(scores.len(), 30);
        assert!(scores.values().all(|score| *score == 0.0));
    }
}
