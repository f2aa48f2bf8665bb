use reqwest::header::CONTENT_TYPE;
use reqwest::Response;
use serde::Deserialize;
use serde_json::Value;
use shared::Bill;
use tracing::{debug, warn};

use crate::error::{LavaError, Result};

/// Ответ API: JSON, если его так пометил сервер, иначе исходный текст.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Json(Value),
    Text(String),
}

/**
Обёртка ответа Lava: `{"data": {...}, "status": 200, "status_check": true}`,
при ошибке вместо `data` приходит `error`.
 */
#[derive(Debug, Deserialize)]
struct ResponseWrapper {
    data: Option<Value>,
    error: Option<Value>,
    status: Option<Value>,
}

impl ApiResponse {
    pub async fn from_response(response: Response) -> Result<Self> {
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        debug!(%status, content_type = %content_type, "Lava API responded");

        if is_json_content_type(&content_type) {
            let body = response.bytes().await?;

            return Ok(ApiResponse::Json(serde_json::from_slice(&body)?));
        }

        let body = response.text().await?;

        warn!(%status, content_type = %content_type, "Lava API returned a non-JSON body");

        Ok(ApiResponse::Text(body))
    }

    pub fn into_bill(self) -> Result<Bill> {
        let body = match self {
            ApiResponse::Json(body) => body,
            ApiResponse::Text(text) => return Err(LavaError::NonJsonResponse(text)),
        };

        let wrapper = ResponseWrapper::deserialize(&body)?;

        match wrapper.data {
            Some(data) => Ok(serde_json::from_value(data)?),
            None => Err(LavaError::Api {
                status: wrapper.status.as_ref().and_then(Value::as_i64),
                error: wrapper.error.unwrap_or(body),
            }),
        }
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_content_type_detection() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(is_json_content_type("Application/JSON"));
        assert!(!is_json_content_type("text/html; charset=UTF-8"));
        assert!(!is_json_content_type("text/plain"));
        assert!(!is_json_content_type(""));
    }

    #[test]
    fn test_data_becomes_bill() {
        let response = ApiResponse::Json(json!({
            "data": {
                "id": "abc",
                "amount": 100,
                "expire": "2030-01-01T00:00:00",
                "status": "created",
                "shop_id": "shop1"
            },
            "status": 200,
            "status_check": true
        }));

        let bill = response.into_bill().unwrap();

        assert_eq!(bill.id(), "abc");
        assert_eq!(bill.amount(), 100.0);
        assert_eq!(bill.shop_id(), "shop1");
    }

    #[test]
    fn test_data_wins_over_odd_status() {
        let response = ApiResponse::Json(json!({
            "data": {
                "id": "abc",
                "amount": 100,
                "expire": "2030-01-01T00:00:00",
                "status": "created",
                "shop_id": "shop1"
            },
            "status": "ok"
        }));

        let bill = response.into_bill().unwrap();

        assert_eq!(bill.id(), "abc");
        assert!(!bill.is_expired());
    }

    #[test]
    fn test_error_envelope_with_text_status() {
        let response = ApiResponse::Json(json!({"error": "Shop not found", "status": "error"}));

        match response.into_bill() {
            Err(LavaError::Api { status, error }) => {
                assert_eq!(status, None);
                assert_eq!(error, json!("Shop not found"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_error_envelope() {
        let response = ApiResponse::Json(json!({
            "error": {"sum": ["The sum must be at least 1."]},
            "status": 422,
            "status_check": false
        }));

        match response.into_bill() {
            Err(LavaError::Api { status, error }) => {
                assert_eq!(status, Some(422));
                assert_eq!(error, json!({"sum": ["The sum must be at least 1."]}));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_error_without_details_keeps_body() {
        let body = json!({"message": "Server Error"});

        match ApiResponse::Json(body.clone()).into_bill() {
            Err(LavaError::Api { status, error }) => {
                assert_eq!(status, None);
                assert_eq!(error, body);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_text_is_not_a_bill() {
        let response = ApiResponse::Text("<html>502 Bad Gateway</html>".to_string());

        match response.into_bill() {
            Err(LavaError::NonJsonResponse(text)) => assert!(text.contains("502")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_broken_bill_is_a_json_error() {
        let response = ApiResponse::Json(json!({"data": {"id": "abc"}}));

        assert!(matches!(response.into_bill(), Err(LavaError::Json(_))));
    }
}
