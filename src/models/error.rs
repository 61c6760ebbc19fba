use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use std::fmt;

/// Everything that can go wrong while serving a statistic. The dashboard
/// only ever sees a flat 500 with an `error` key, so the variants exist to
/// keep messages and log lines useful, not to vary the response shape.
#[derive(Debug)]
pub enum ApiError {
    /// Network failure, non-2xx upstream status, or undecodable body.
    Upstream { context: String, details: String },
    /// The upstream answered but the expected data was absent or empty.
    MissingData(String),
}

impl ApiError {
    pub fn upstream(context: &str, details: impl fmt::Display) -> Self {
        ApiError::Upstream {
            context: context.to_string(),
            details: details.to_string(),
        }
    }

    pub fn missing(message: impl Into<String>) -> Self {
        ApiError::MissingData(message.into())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Upstream { context, details } => write!(f, "{context}: {details}"),
            ApiError::MissingData(message) => write!(f, "{message}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self {
            ApiError::Upstream { context, details } => Json(json!({
                "error": context,
                "details": details,
            })),
            ApiError::MissingData(message) => Json(json!({
                "error": message,
            })),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn upstream_error_becomes_500_with_error_and_details() {
        let response =
            ApiError::upstream("upstream request failed", "connection refused").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "upstream request failed");
        assert_eq!(body["details"], "connection refused");
    }

    #[tokio::test]
    async fn missing_data_becomes_500_with_error_only() {
        let response =
            ApiError::missing("no driver standings found for season 1890").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "no driver standings found for season 1890");
        assert!(body.get("details").is_none());
    }
}
