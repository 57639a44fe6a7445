use super::domain::{AnswerSet, PersonalityResult, Question, QuestionId};
use super::scoring::process_responses;
use super::store::{KeyValueStore, ProgressStore, ResultStore};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

pub const QUESTIONS_PER_PAGE: usize = 20;

/// Share of questions that must be answered before a submission is scored.
pub const DEFAULT_MIN_COMPLETION: f64 = 0.8;

/// One respondent's pass through the questionnaire.
///
/// The session owns the answer set; scoring only ever sees a borrowed
/// snapshot of it. Progress and results go through the injected store.
pub struct QuizSession<S> {
    questions: &'static [Question],
    answers: AnswerSet,
    complete: bool,
    min_completion: f64,
    progress: ProgressStore<S>,
    results: ResultStore<S>,
}

impl<S: KeyValueStore> QuizSession<S> {
    pub fn new(questions: &'static [Question], store: Arc<S>) -> Self {
        Self::with_answers(questions, store, AnswerSet::new())
    }

    /// Starts from an existing answer set without persisting it.
    pub fn with_answers(
        questions: &'static [Question],
        store: Arc<S>,
        answers: AnswerSet,
    ) -> Self {
        Self {
            questions,
            answers,
            complete: false,
            min_completion: DEFAULT_MIN_COMPLETION,
            progress: ProgressStore::new(Arc::clone(&store)),
            results: ResultStore::new(store),
        }
    }

    /// Restores saved progress, falling back to an empty session.
    pub fn resume(questions: &'static [Question], store: Arc<S>) -> Self {
        let answers = ProgressStore::new(Arc::clone(&store))
            .load()
            .map(|progress| progress.answers)
            .unwrap_or_default();
        if !answers.is_empty() {
            info!(answered = answers.len(), "resumed saved quiz progress");
        }
        Self::with_answers(questions, store, answers)
    }

    pub fn with_min_completion(mut self, ratio: f64) -> Self {
        self.min_completion = ratio;
        self
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn answer(&self, question_id: QuestionId) -> Option<i32> {
        self.answers.get(&question_id).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Records or replaces one answer and persists progress.
    pub fn record_answer(&mut self, question_id: QuestionId, answer: i32) {
        self.answers.insert(question_id, answer);
        debug!(question_id, answer, "recorded answer");
        self.save_progress();
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Completion as a percentage of the question count.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        self.answered_count() as f64 / self.questions.len() as f64 * 100.0
    }

    /// Minimum number of answers accepted by [`QuizSession::submit`].
    pub fn required_answers(&self) -> usize {
        (self.questions.len() as f64 * self.min_completion).ceil() as usize
    }

    pub fn page_count(&self) -> usize {
        self.questions.len().div_ceil(QUESTIONS_PER_PAGE)
    }

    /// Questions shown on a zero-based page; empty past the last page.
    pub fn page(&self, page: usize) -> &'static [Question] {
        let start = page.saturating_mul(QUESTIONS_PER_PAGE);
        if start >= self.questions.len() {
            return &[];
        }
        let end = (start + QUESTIONS_PER_PAGE).min(self.questions.len());
        &self.questions[start..end]
    }

    pub fn unanswered_on_page(&self, page: usize) -> usize {
        self.page(page)
            .iter()
            .filter(|question| !self.answers.contains_key(&question.id))
            .count()
    }

    /// Clears answers and the completion flag, keeping an empty progress record.
    pub fn start(&mut self) {
        self.answers.clear();
        self.complete = false;
        self.save_progress();
    }

    /// Clears answers, the completion flag and any saved progress.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.complete = false;
        self.progress.clear();
    }

    /// Scores the session once enough questions are answered.
    ///
    /// The result replaces any previously saved one and saved progress is
    /// dropped.
    pub fn submit(&mut self) -> Result<PersonalityResult, SubmissionError> {
        let answered = self.answered_count();
        let total = self.questions.len();
        if (answered as f64) < total as f64 * self.min_completion {
            let required = self.required_answers();
            return Err(SubmissionError::Incomplete {
                answered,
                required,
                total,
                remaining: required.saturating_sub(answered),
            });
        }

        let result = process_responses(&self.answers, self.questions);
        self.results.save(&result);
        self.complete = true;
        self.progress.clear();

        info!(
            answered,
            total,
            archetype = %result.archetype,
            "quiz submitted"
        );

        Ok(result)
    }

    fn save_progress(&self) {
        self.progress.save(&self.answers, Utc::now().timestamp_millis());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error(
        "answer at least {required} of {total} questions before submitting \
         ({answered} answered, {remaining} remaining)"
    )]
    Incomplete {
        answered: usize,
        required: usize,
        total: usize,
        remaining: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::questions::question_bank;
    use crate::assessment::store::{InMemoryStore, PROGRESS_KEY, RESULTS_KEY};

    fn session() -> (QuizSession<InMemoryStore>, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        (QuizSession::new(question_bank(), store.clone()), store)
    }

    fn answer_first(session: &mut QuizSession<InMemoryStore>, count: usize) {
        for question in question_bank().iter().take(count) {
            session.record_answer(question.id, 5);
        }
    }

    #[test]
    fn recording_answers_updates_progress_and_persists() {
        let (mut session, store) = session();

        session.record_answer(1, 6);
        session.record_answer(2, 3);
        session.record_answer(1, 7);

        assert_eq!(session.answered_count(), 2);
        assert_eq!(session.answer(1), Some(7));
        assert!((session.progress() - 2.0 / 120.0 * 100.0).abs() < 1e-9);
        assert!(store.contains(PROGRESS_KEY));
    }

    #[test]
    fn submission_requires_eighty_percent() {
        let (mut session, store) = session();
        answer_first(&mut session, 95);

        let error = session.submit().expect_err("95 of 120 is below the gate");

        assert_eq!(
            error,
            SubmissionError::Incomplete {
                answered: 95,
                required: 96,
                total: 120,
                remaining: 1,
            }
        );
        assert!(error.to_string().contains("1 remaining"));
        assert!(!session.is_complete());
        assert!(!store.contains(RESULTS_KEY));
    }

    #[test]
    fn successful_submission_saves_result_and_clears_progress() {
        let (mut session, store) = session();
        answer_first(&mut session, 96);

        let result = session.submit().expect("96 of 120 passes the gate");

        assert!(session.is_complete());
        assert!(!store.contains(PROGRESS_KEY));
        assert_eq!(ResultStore::new(store).load(), Some(result));
    }

    #[test]
    fn custom_completion_ratio() {
        let (session, _) = session();
        let mut session = session.with_min_completion(0.5);
        answer_first(&mut session, 60);

        assert_eq!(session.required_answers(), 60);
        assert!(session.submit().is_ok());
    }

    #[test]
    fn resume_restores_saved_answers() {
        let (mut session, store) = session();
        session.record_answer(10, 2);
        session.record_answer(11, 4);

        let resumed = QuizSession::resume(question_bank(), store);

        assert_eq!(resumed.answers(), session.answers());
    }

    #[test]
    fn resume_without_progress_starts_empty() {
        let store = Arc::new(InMemoryStore::new());
        store.set(PROGRESS_KEY, "garbage").expect("set");

        let resumed = QuizSession::resume(question_bank(), store);

        assert_eq!(resumed.answered_count(), 0);
    }

    #[test]
    fn reset_drops_saved_progress_but_start_keeps_an_empty_record() {
        let (mut session, store) = session();
        session.record_answer(1, 4);

        session.start();
        assert_eq!(session.answered_count(), 0);
        let saved = ProgressStore::new(store.clone()).load().expect("progress");
        assert!(saved.answers.is_empty());

        session.record_answer(1, 4);
        session.reset();
        assert_eq!(session.answered_count(), 0);
        assert!(!store.contains(PROGRESS_KEY));
    }

    #[test]
    fn pagination_splits_into_pages_of_twenty() {
        let (mut session, _) = session();

        assert_eq!(session.page_count(), 6);
        assert_eq!(session.page(0).len(), 20);
        assert_eq!(session.page(5)[19].id, 120);
        assert!(session.page(6).is_empty());

        for question in session.page(1).iter().take(15) {
            session.record_answer(question.id, 4);
        }
        assert_eq!(session.unanswered_on_page(1), 5);
        assert_eq!(session.unanswered_on_page(0), 20);
    }

    #[test]
    fn empty_question_set_reports_zero_progress() {
        let session = QuizSession::new(&[], Arc::new(InMemoryStore::new()));
        assert_eq!(session.progress(), 0.0);
        assert_eq!(session.page_count(), 0);
    }
}
