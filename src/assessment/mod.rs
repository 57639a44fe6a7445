pub mod catalog;
pub mod domain;
pub mod import;
pub mod insights;
pub mod questions;
pub mod scoring;
pub mod session;
pub mod store;
pub mod zodiac;

pub use domain::{
    AnswerSet, Archetype, Dimension, DimensionPercentiles, DimensionScores, Facet,
    FacetPercentiles, FacetScores, Percentiles, PersonalityResult, Question, QuestionId,
};
pub use import::{load_answers, ImportError};
pub use insights::{IntensityLevel, ProfileSummary};
pub use questions::question_bank;
pub use scoring::{process_responses, process_responses_at};
pub use session::{QuizSession, SubmissionError};
pub use store::{
    FileStore, InMemoryStore, KeyValueStore, ProgressStore, ResultExport, ResultStore,
    SavedProgress, StoreError,
};
pub use zodiac::{zodiac_sign, Element, ZodiacSign};
