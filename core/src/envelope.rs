//! Uniform result envelope returned by every operation handler.
//!
//! Success serializes as `{ "success": true, ...payload }`, failure as
//! `{ "success": false, "error": <label>, "message": <text> }`.

use serde::Serialize;

use crate::error::ApiError;

/// Failure classification shown to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    #[serde(rename = "Credentials Error")]
    Credentials,
    #[serde(rename = "Validation Error")]
    Validation,
    #[serde(rename = "API Error")]
    Api,
}

impl ErrorKind {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::Credentials => "Credentials Error",
            ErrorKind::Validation => "Validation Error",
            ErrorKind::Api => "API Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Success<T> {
    success: bool,
    #[serde(flatten)]
    pub payload: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    success: bool,
    pub error: ErrorKind,
    pub message: String,
}

impl Failure {
    pub fn new(error: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error,
            message: message.into(),
        }
    }
}

impl From<&ApiError> for Failure {
    fn from(err: &ApiError) -> Self {
        Failure::new(err.kind(), err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Success(Success<T>),
    Failure(Failure),
}

impl<T> Envelope<T> {
    pub fn success(payload: T) -> Self {
        Envelope::Success(Success { success: true, payload })
    }

    pub fn failure(err: &ApiError) -> Self {
        Envelope::Failure(Failure::from(err))
    }

    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(payload) => Self::success(payload),
            Err(err) => Self::failure(&err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Envelope::Success(success) => Some(&success.payload),
            Envelope::Failure(_) => None,
        }
    }

    pub fn failure_ref(&self) -> Option<&Failure> {
        match self {
            Envelope::Success(_) => None,
            Envelope::Failure(failure) => Some(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Serialize)]
    struct Payload {
        data: Vec<u32>,
        count: usize,
    }

    #[test]
    fn success_flattens_payload() {
        let envelope = Envelope::success(Payload { data: vec![1, 2], count: 2 });
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "success": true, "data": [1, 2], "count": 2 })
        );
    }

    #[test]
    fn failure_carries_label_and_message() {
        let err = ApiError::Upstream {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        let envelope: Envelope<Payload> = Envelope::failure(&err);
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "success": false,
                "error": "API Error",
                "message": "BigTime API error: 404 Not Found"
            })
        );
    }

    #[test]
    fn labels_match_serialized_form() {
        for kind in [ErrorKind::Credentials, ErrorKind::Validation, ErrorKind::Api] {
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.label()));
        }
    }

    #[test]
    fn from_result_routes_errors() {
        let ok: Envelope<u8> = Envelope::from_result(Ok(3));
        assert_eq!(ok.payload(), Some(&3));

        let err: Envelope<u8> = Envelope::from_result(Err(ApiError::Validation("nope".into())));
        let failure = err.failure_ref().unwrap();
        assert_eq!(failure.error, ErrorKind::Validation);
        assert_eq!(failure.message, "nope");
    }
}
