//! HTTP helpers for Lambda functions.

use lambda_http::{Body, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::ErrorDetail;

/// Create a JSON response with the given status code and data.
pub fn json_response<T: Serialize>(status: u16, data: &T) -> Result<Response<Body>, lambda_http::Error> {
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(data)?))
        .expect("Failed to build response"))
}

/// Create an error response with the given status code and detail message.
pub fn error_response(status: u16, detail: impl Into<String>) -> Result<Response<Body>, lambda_http::Error> {
    json_response(
        status,
        &ErrorDetail {
            detail: detail.into(),
        },
    )
}

/// Parse request body as JSON, returning a 422 response on failure.
///
/// Returns `Ok(Ok(T))` on successful parse, `Ok(Err(Response))` on parse error (422),
/// or `Err(lambda_http::Error)` on serialization failure.
pub fn parse_json_body<T: DeserializeOwned>(body: &Body) -> Result<Result<T, Response<Body>>, lambda_http::Error> {
    match serde_json::from_slice(body.as_ref()) {
        Ok(parsed) => Ok(Ok(parsed)),
        Err(e) => {
            let response = error_response(422, format!("Invalid request body: {}", e))?;
            Ok(Err(response))
        }
    }
}

/// Macro to parse request body, returning early with 422 on parse error.
///
/// Usage:
/// ```ignore
/// let request: MyRequest = parse_body!(event.body());
/// ```
#[macro_export]
macro_rules! parse_body {
    ($body:expr) => {
        match shared::http::parse_json_body($body)? {
            Ok(parsed) => parsed,
            Err(response) => return Ok(response),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventInput;

    #[test]
    fn test_json_response_sets_content_type() {
        let response = json_response(200, &serde_json::json!({"message": "ok"})).unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["content-type"], "application/json");
    }

    #[test]
    fn test_error_response_body() {
        let response = error_response(404, "Event not found").unwrap();
        assert_eq!(response.status(), 404);
        let body: ErrorDetail = serde_json::from_slice(response.body().as_ref()).unwrap();
        assert_eq!(body.detail, "Event not found");
    }

    #[test]
    fn test_parse_json_body_rejects_malformed() {
        let body = Body::from(r#"{"title":"Launch"}"#);
        let parsed = parse_json_body::<EventInput>(&body).unwrap();
        let response = parsed.unwrap_err();
        assert_eq!(response.status(), 422);
    }

    #[test]
    fn test_parse_json_body_accepts_valid() {
        let body = Body::from(r#"{"title":"Launch","date":"2024-01-01","description":"Kickoff"}"#);
        let parsed = parse_json_body::<EventInput>(&body).unwrap().unwrap();
        assert_eq!(parsed.description, "Kickoff");
    }
}
