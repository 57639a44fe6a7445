use super::domain::{AnswerSet, QuestionId};
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read answers: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answers CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid answers JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("answers document must be a JSON object keyed by question id")]
    NotAnObject,
    #[error("'{0}' is not a question id")]
    InvalidQuestionId(String),
    #[error("answer for question {0} is not an integer")]
    InvalidAnswer(String),
}

/// Loads answers from `.csv` (question_id,answer) or JSON.
pub fn load_answers<P: AsRef<Path>>(path: P) -> Result<AnswerSet, ImportError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        answers_from_csv(file)
    } else {
        answers_from_json_reader(file)
    }
}

pub fn answers_from_csv<R: Read>(reader: R) -> Result<AnswerSet, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut answers = AnswerSet::new();

    for row in csv_reader.deserialize::<AnswerRow>() {
        let row = row?;
        answers.insert(row.question_id, row.answer);
    }

    Ok(answers)
}

pub fn answers_from_json_reader<R: Read>(reader: R) -> Result<AnswerSet, ImportError> {
    let document: Value = serde_json::from_reader(reader)?;
    answers_from_value(document)
}

pub fn answers_from_json_str(raw: &str) -> Result<AnswerSet, ImportError> {
    let document: Value = serde_json::from_str(raw)?;
    answers_from_value(document)
}

/// Accepts a bare answer map or a saved-progress document.
fn answers_from_value(document: Value) -> Result<AnswerSet, ImportError> {
    let Value::Object(mut root) = document else {
        return Err(ImportError::NotAnObject);
    };

    let entries = match root.remove("answers") {
        Some(Value::Object(answers)) => answers,
        Some(_) => return Err(ImportError::NotAnObject),
        None => root,
    };

    let mut answers = AnswerSet::new();
    for (key, value) in entries {
        let question_id: QuestionId = key
            .trim()
            .parse()
            .map_err(|_| ImportError::InvalidQuestionId(key.clone()))?;
        let answer = value
            .as_i64()
            .and_then(|answer| i32::try_from(answer).ok())
            .ok_or(ImportError::InvalidAnswer(key))?;
        answers.insert(question_id, answer);
    }

    Ok(answers)
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    question_id: QuestionId,
    answer: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn csv_rows_are_trimmed_and_collected() {
        let answers =
            answers_from_csv(Cursor::new("question_id,answer\n1, 7\n 2 ,1\n3,4\n")).expect("csv");

        assert_eq!(answers, [(1, 7), (2, 1), (3, 4)].into_iter().collect());
    }

    #[test]
    fn csv_rejects_non_numeric_answers() {
        let error = answers_from_csv(Cursor::new("question_id,answer\n1,often\n"))
            .expect_err("invalid row");
        assert!(matches!(error, ImportError::Csv(_)));
    }

    #[test]
    fn json_accepts_bare_maps() {
        let answers = answers_from_json_str(r#"{"1": 7, "120": 2}"#).expect("json");
        assert_eq!(answers, [(1, 7), (120, 2)].into_iter().collect());
    }

    #[test]
    fn json_accepts_saved_progress_documents() {
        let raw = r#"{"answers": {"5": 3}, "timestamp": 1700000000000}"#;
        let answers = answers_from_json_str(raw).expect("json");
        assert_eq!(answers, [(5, 3)].into_iter().collect());
    }

    #[test]
    fn json_rejects_bad_keys_and_values() {
        assert!(matches!(
            answers_from_json_str(r#"{"q1": 7}"#),
            Err(ImportError::InvalidQuestionId(key)) if key == "q1"
        ));
        assert!(matches!(
            answers_from_json_str(r#"{"1": "seven"}"#),
            Err(ImportError::InvalidAnswer(key)) if key == "1"
        ));
        assert!(matches!(
            answers_from_json_str("[1, 2]"),
            Err(ImportError::NotAnObject)
        ));
    }

    #[test]
    fn load_answers_dispatches_on_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let csv_path = dir.path().join("answers.CSV");
        std::fs::write(&csv_path, "question_id,answer\n9,6\n").expect("write csv");
        let json_path = dir.path().join("answers.json");
        std::fs::write(&json_path, r#"{"9": 6}"#).expect("write json");

        assert_eq!(
            load_answers(&csv_path).expect("csv"),
            load_answers(&json_path).expect("json")
        );
    }

    #[test]
    fn load_answers_propagates_missing_files() {
        let error = load_answers("./does-not-exist.json").expect_err("missing file");
        assert!(matches!(error, ImportError::Io(_)));
    }
}
