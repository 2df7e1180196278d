use std::sync::Arc;

use anyhow::anyhow;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use trivia_api_types::{QuestionData, QuizRequest, QuizResponse};
use trivia_core::domain::draw_question;

use super::error::ApiError;
use super::state::AppState;

pub fn create_quiz_router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(play_quiz))
}

/// Picks a random question the player has not seen, optionally scoped to
/// one category. Category id 0 means "all categories".
async fn play_quiz(
    State(state): State<Arc<AppState>>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(request) = body.map_err(|_| ApiError::BadRequest)?;

    // quiz_category["id"] with a missing or non-object value is an
    // unhandled access in the contract, so it surfaces as a server error
    // rather than defaulting.
    let quiz_category = request
        .quiz_category
        .ok_or_else(|| ApiError::Internal(anyhow!("quiz_category missing from body")))?;
    let category_id = quiz_category
        .get("id")
        .and_then(Value::as_i64)
        .ok_or_else(|| ApiError::Internal(anyhow!("quiz_category has no integer id")))?;

    let pool = if category_id == 0 {
        state.questions.list_ordered().await?
    } else {
        // A failed category lookup reports not-found; an unknown id that
        // merely matches nothing falls through to the empty-pool error. An
        // id outside i32 range matches nothing by definition.
        match i32::try_from(category_id) {
            Ok(id) => state
                .questions
                .list_by_category(id)
                .await
                .map_err(|_| ApiError::NotFound)?,
            Err(_) => Vec::new(),
        }
    };
    let pool: Vec<QuestionData> = pool.into_iter().map(Into::into).collect();

    let question = draw_question(
        pool,
        &request.previous_questions,
        |question| i64::from(question.id),
        &mut rand::thread_rng(),
    )
    .ok_or_else(|| ApiError::Internal(anyhow!("no questions left to draw")))?;

    Ok(Json(QuizResponse {
        quiz_category,
        question,
        previous_questions: request.previous_questions,
    }))
}
