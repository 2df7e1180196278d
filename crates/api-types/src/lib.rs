//! Shared request/response types used by API-facing crates.
//!
//! Field names follow the wire contract the frontend expects, which mixes
//! camelCase (`totalQuestions`, `currentCategory`, `searchTerm`) with
//! snake_case (`question_id`, `previous_questions`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stringified category id mapped to its display label.
pub type CategoryMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: CategoryMap,
}

/// A question as it appears on the wire. Every field except `id` is
/// nullable because the store never validates writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionData {
    pub id: i32,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionData>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    pub categories: CategoryMap,
    #[serde(rename = "currentCategory")]
    pub current_category: String,
}

/// Shared by search results and the by-category listing, which return the
/// same shape minus the category map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSetResponse {
    pub questions: Vec<QuestionData>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    #[serde(rename = "currentCategory")]
    pub current_category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub question_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
}

/// Body of `POST /questions`. The endpoint is dual-purpose: a truthy
/// `question` means create, otherwise `searchTerm` selects a search. All
/// fields are optional so a partial create is accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuestionPayload {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    pub category: Option<i32>,
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Body of `POST /quizzes`. `quiz_category` stays raw JSON: the contract is
/// that a shape without an integer `id` fails at access time, not at decode
/// time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: Option<Value>,
    #[serde(default)]
    pub previous_questions: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResponse {
    pub quiz_category: Value,
    pub question: QuestionData,
    pub previous_questions: Vec<i64>,
}

/// The fixed error body returned for every handled failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn question_list_response_uses_wire_field_names() {
        let response = QuestionListResponse {
            questions: vec![],
            total_questions: 12,
            categories: CategoryMap::from([("1".to_string(), "Science".to_string())]),
            current_category: "Science".to_string(),
        };

        let value = serde_json::to_value(&response).expect("serialize question list");
        assert_eq!(value["totalQuestions"], 12);
        assert_eq!(value["currentCategory"], "Science");
        assert_eq!(value["categories"]["1"], "Science");
    }

    #[test]
    fn question_data_serializes_missing_fields_as_null() {
        let question = QuestionData {
            id: 7,
            question: Some("What?".to_string()),
            answer: None,
            category: None,
            difficulty: None,
        };

        let value = serde_json::to_value(&question).expect("serialize question");
        assert_eq!(value["id"], 7);
        assert!(value["answer"].is_null());
        assert!(value["category"].is_null());
    }

    #[test]
    fn question_payload_accepts_partial_bodies() {
        let payload: QuestionPayload =
            serde_json::from_value(json!({"question": "Only a question"}))
                .expect("deserialize partial payload");

        assert_eq!(payload.question.as_deref(), Some("Only a question"));
        assert_eq!(payload.answer, None);
        assert_eq!(payload.search_term, None);
    }

    #[test]
    fn question_payload_reads_camel_case_search_term() {
        let payload: QuestionPayload =
            serde_json::from_value(json!({"searchTerm": "title"}))
                .expect("deserialize search payload");

        assert_eq!(payload.search_term.as_deref(), Some("title"));
        assert_eq!(payload.question, None);
    }

    #[test]
    fn quiz_request_defaults_previous_questions() {
        let request: QuizRequest =
            serde_json::from_value(json!({"quiz_category": {"id": 0}}))
                .expect("deserialize quiz request");

        assert!(request.previous_questions.is_empty());
        assert_eq!(request.quiz_category, Some(json!({"id": 0})));
    }

    #[test]
    fn quiz_request_keeps_malformed_category_shapes() {
        let request: QuizRequest =
            serde_json::from_value(json!({"quiz_category": "Science", "previous_questions": [1]}))
                .expect("deserialize quiz request");

        assert_eq!(request.quiz_category, Some(json!("Science")));
        assert_eq!(request.previous_questions, vec![1]);
    }

    #[test]
    fn error_response_round_trip_json() {
        let response = ErrorResponse {
            success: false,
            error: 404,
            message: "Error: not found".to_string(),
        };

        let json = serde_json::to_string(&response).expect("serialize error response");
        let decoded: ErrorResponse =
            serde_json::from_str(&json).expect("deserialize error response");

        assert_eq!(decoded, response);
    }
}
