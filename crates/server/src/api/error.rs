use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;
use trivia_api_types::ErrorResponse;

/// The five failure shapes the API knows how to report. Every handled
/// failure becomes `{success: false, error: <code>, message: "Error: ..."}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest,
    NotFound,
    MethodNotAllowed,
    Unprocessable,
    Internal(anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // "method unallowed" is the contract's exact wording.
    fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest => "Error: bad request",
            ApiError::NotFound => "Error: not found",
            ApiError::MethodNotAllowed => "Error: method unallowed",
            ApiError::Unprocessable => "Error: unprocessable",
            ApiError::Internal(_) => "Error: server error",
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(err) = &self {
            error!(error = %err, "request failed with server error");
        }

        let status = self.status();
        let body = Json(ErrorResponse {
            success: false,
            error: status.as_u16(),
            message: self.message().to_string(),
        });
        (status, body).into_response()
    }
}

/// `Router::fallback`: unmatched paths report the shaped 404.
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound
}

/// `Router::method_not_allowed_fallback`: matched path, wrong method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_the_taxonomy() {
        assert_eq!(ApiError::BadRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::Unprocessable.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_use_contract_wording() {
        assert_eq!(ApiError::NotFound.message(), "Error: not found");
        assert_eq!(ApiError::Unprocessable.message(), "Error: unprocessable");
        assert_eq!(
            ApiError::MethodNotAllowed.message(),
            "Error: method unallowed"
        );
    }
}
