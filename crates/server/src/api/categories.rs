use std::sync::Arc;

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use trivia_api_types::{CategoryListResponse, CategoryMap, QuestionSetResponse};

use super::error::ApiError;
use super::state::AppState;
use crate::repository::CategoryRecord;

pub fn create_category_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{category_id}/questions", get(questions_by_category))
}

pub(crate) fn category_map(records: Vec<CategoryRecord>) -> CategoryMap {
    records
        .into_iter()
        .map(|record| (record.id.to_string(), record.label))
        .collect()
}

async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoryListResponse>, ApiError> {
    let categories = state.categories.list().await?;

    Ok(Json(CategoryListResponse {
        categories: category_map(categories),
    }))
}

/// All questions in one category, unpaginated, with the category label as
/// `currentCategory`.
async fn questions_by_category(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<QuestionSetResponse>, ApiError> {
    // A non-numeric id addresses no category.
    let Path(category_id) = path.map_err(|_| ApiError::NotFound)?;

    let Some(category) = state.categories.find_by_id(category_id).await? else {
        return Err(ApiError::NotFound);
    };

    let questions: Vec<_> = state
        .questions
        .list_by_category(category_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(QuestionSetResponse {
        total_questions: questions.len(),
        questions,
        current_category: category.label,
    }))
}
