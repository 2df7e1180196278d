use std::sync::Arc;

use anyhow::anyhow;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;
use trivia_api_types::{
    CreateQuestionResponse, DeleteQuestionResponse, QuestionData, QuestionListResponse,
    QuestionPayload, QuestionSetResponse,
};
use trivia_core::domain::page_window;

use super::categories::category_map;
use super::error::ApiError;
use super::state::AppState;
use crate::repository::NewQuestion;

pub fn create_question_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/{question_id}", delete(delete_question))
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<i64>,
}

/// Label of the category a page or match set reports as current. The id
/// comes from the first question of the set; a null or dangling id is an
/// unguarded lookup in the contract and stays a server error here.
async fn current_category_label(
    state: &AppState,
    category_id: Option<i32>,
) -> Result<String, ApiError> {
    let id = category_id
        .ok_or_else(|| ApiError::Internal(anyhow!("question has no category set")))?;

    let category = state
        .categories
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::Internal(anyhow!("category {id} does not exist")))?;

    Ok(category.label)
}

async fn list_questions(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    // A missing or unparsable page coerces to the first page.
    let page = match query {
        Ok(Query(query)) => query.page.unwrap_or(1),
        Err(_) => 1,
    };

    let all = state.questions.list_ordered().await?;
    let total_questions = all.len();

    let window = page_window(page, all.len());
    let questions: Vec<QuestionData> = all[window].iter().cloned().map(Into::into).collect();
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = category_map(state.categories.list().await?);
    let current_category = current_category_label(&state, questions[0].category).await?;

    Ok(Json(QuestionListResponse {
        questions,
        total_questions,
        categories,
        current_category,
    }))
}

async fn delete_question(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeleteQuestionResponse>, ApiError> {
    // A non-numeric id addresses no question.
    let Path(question_id) = path.map_err(|_| ApiError::NotFound)?;

    if state.questions.find_by_id(question_id).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    state
        .questions
        .delete_by_id(question_id)
        .await
        .map_err(|_| ApiError::Unprocessable)?;

    info!(question_id, "question deleted");
    Ok(Json(DeleteQuestionResponse {
        success: true,
        question_id,
    }))
}

/// One endpoint, two operations: a truthy `question` field means create,
/// anything else falls through to search by `searchTerm`. Callers signal
/// intent purely through which keys they send.
async fn create_or_search(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuestionPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::BadRequest)?;

    if payload.question.as_deref().is_some_and(|text| !text.is_empty()) {
        create_question(&state, payload).await
    } else {
        search_questions(&state, payload).await
    }
}

async fn create_question(state: &AppState, payload: QuestionPayload) -> Result<Response, ApiError> {
    let created = state
        .questions
        .create(NewQuestion {
            question: payload.question,
            answer: payload.answer,
            category: payload.category,
            difficulty: payload.difficulty,
        })
        .await
        .map_err(|_| ApiError::Unprocessable)?;

    info!(question_id = created.id, "question created");
    Ok(Json(CreateQuestionResponse { success: true }).into_response())
}

async fn search_questions(
    state: &AppState,
    payload: QuestionPayload,
) -> Result<Response, ApiError> {
    let Some(term) = payload.search_term.filter(|term| !term.is_empty()) else {
        return Err(ApiError::Unprocessable);
    };

    let questions: Vec<QuestionData> = state
        .questions
        .search(&term)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    // No guard for an empty match set: deriving the current category from
    // the first match is part of the contract.
    let first = questions
        .first()
        .ok_or_else(|| ApiError::Internal(anyhow!("search for {term:?} matched no questions")))?;
    let current_category = current_category_label(state, first.category).await?;

    Ok(Json(QuestionSetResponse {
        total_questions: questions.len(),
        questions,
        current_category,
    })
    .into_response())
}
