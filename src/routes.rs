use crate::infra::{AppState, AssessmentState};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use prism_persona::assessment::import::answers_from_json_str;
use prism_persona::assessment::session::QUESTIONS_PER_PAGE;
use prism_persona::assessment::{
    question_bank, KeyValueStore, PersonalityResult, ProfileSummary, Question, QuizSession,
    ResultStore,
};
use prism_persona::error::AppError;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuestionsResponse {
    pub(crate) total: usize,
    pub(crate) page_size: usize,
    pub(crate) questions: &'static [Question],
}

#[derive(Debug, Serialize)]
pub(crate) struct ProfileResponse {
    pub(crate) result: PersonalityResult,
    pub(crate) summary: ProfileSummary,
}

impl ProfileResponse {
    fn new(result: PersonalityResult) -> Self {
        let summary = ProfileSummary::from_result(&result);
        Self { result, summary }
    }
}

pub(crate) fn assessment_router<S>(state: Arc<AssessmentState<S>>) -> Router
where
    S: KeyValueStore + 'static,
{
    Router::new()
        .route("/api/v1/questions", get(questions_endpoint))
        .route("/api/v1/assessment/score", post(score_endpoint::<S>))
        .route("/api/v1/assessment/result", get(result_endpoint::<S>))
        .with_state(state)
}

pub(crate) fn with_assessment_routes<S>(state: Arc<AssessmentState<S>>) -> Router
where
    S: KeyValueStore + 'static,
{
    assessment_router(state)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn questions_endpoint() -> Json<QuestionsResponse> {
    let questions = question_bank();
    Json(QuestionsResponse {
        total: questions.len(),
        page_size: QUESTIONS_PER_PAGE,
        questions,
    })
}

/// Scores a posted answer map (or saved-progress document) and stores the result.
pub(crate) async fn score_endpoint<S>(
    State(state): State<Arc<AssessmentState<S>>>,
    body: String,
) -> Result<Json<ProfileResponse>, AppError>
where
    S: KeyValueStore + 'static,
{
    let answers = answers_from_json_str(&body)?;
    let store = Arc::clone(&state.store);
    let (questions, min_completion) = (state.questions, state.min_completion);
    let result = tokio::task::spawn_blocking(move || {
        QuizSession::with_answers(questions, store, answers)
            .with_min_completion(min_completion)
            .submit()
    })
    .await??;

    info!(
        dominant = %result.dominant_dimension,
        archetype = %result.archetype,
        "scored assessment over http"
    );

    Ok(Json(ProfileResponse::new(result)))
}

pub(crate) async fn result_endpoint<S>(
    State(state): State<Arc<AssessmentState<S>>>,
) -> Result<Response, AppError>
where
    S: KeyValueStore + 'static,
{
    let results = ResultStore::new(Arc::clone(&state.store));
    let saved = tokio::task::spawn_blocking(move || results.load()).await?;

    Ok(match saved {
        Some(result) => Json(ProfileResponse::new(result)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "no saved result" })),
        )
            .into_response(),
    })
}
