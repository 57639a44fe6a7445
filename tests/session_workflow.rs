use prism_persona::assessment::{
    load_answers, question_bank, FileStore, PersonalityResult, ProgressStore, QuizSession,
    ResultExport, ResultStore, SubmissionError,
};
use std::sync::Arc;

#[test]
fn quiz_progress_survives_a_restart_and_submission_persists_the_result() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = Arc::new(FileStore::new(dir.path()));

    let mut session = QuizSession::new(question_bank(), store.clone());
    for page in 0..4 {
        for question in session.page(page) {
            session.record_answer(question.id, 6);
        }
    }
    assert_eq!(session.answered_count(), 80);

    let error = session.submit().expect_err("80 of 120 is below the gate");
    assert!(matches!(
        error,
        SubmissionError::Incomplete { remaining: 16, .. }
    ));

    let mut resumed = QuizSession::resume(question_bank(), store.clone());
    assert_eq!(resumed.answers(), session.answers());

    for question in resumed.page(4) {
        resumed.record_answer(question.id, 2);
    }
    let result = resumed.submit().expect("100 answers pass the gate");

    assert!(resumed.is_complete());
    assert!(ProgressStore::new(store.clone()).load().is_none());
    assert_eq!(ResultStore::new(store).load(), Some(result));
}

#[test]
fn csv_answers_score_and_export_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let answers_path = dir.path().join("answers.csv");
    let mut csv = String::from("question_id,answer\n");
    for question in question_bank() {
        csv.push_str(&format!("{},{}\n", question.id, if question.reverse { 2 } else { 6 }));
    }
    std::fs::write(&answers_path, csv).expect("write answers");

    let answers = load_answers(&answers_path).expect("csv answers load");
    let store = Arc::new(FileStore::new(dir.path().join("store")));
    let mut session = QuizSession::with_answers(question_bank(), store, answers);
    let result = session.submit().expect("complete submission");

    let export = ResultExport::from_result(&result).expect("export builds");
    let path = export.write_to(dir.path().join("exports")).expect("export written");
    let raw = std::fs::read_to_string(path).expect("export readable");
    let reloaded: PersonalityResult = serde_json::from_str(&raw).expect("export parses");

    assert_eq!(reloaded, result);
    assert!(reloaded.dimension_scores.values().all(|score| *score == 6.0));
}
