//! Error types for the BigTime client and operation handlers.
//!
//! # Design
//! A closed set of variants. Lower layers return these instead of panicking,
//! and the operation handlers match on [`ApiError::kind`] to pick the failure
//! envelope label. Upstream failures keep the numeric status and its reason
//! phrase verbatim; no status gets special treatment.

use thiserror::Error;

use crate::envelope::ErrorKind;

/// Errors produced while resolving credentials, validating input, or talking
/// to the BigTime API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// One or more credential variables are missing or empty.
    #[error("{}", missing_credentials_message(.0))]
    MissingCredentials(Vec<&'static str>),

    /// The tool input is well-formed but not usable (bad date, no filter key).
    #[error("{0}")]
    Validation(String),

    /// The API answered with a non-2xx status.
    #[error("BigTime API error: {status} {status_text}")]
    Upstream { status: u16, status_text: String },

    /// The request never produced a response (connect, timeout, TLS, I/O).
    #[error("request to BigTime failed: {0}")]
    Transport(String),

    /// The response body was not the JSON shape the caller expected.
    #[error("failed to decode BigTime response: {0}")]
    Deserialization(String),

    /// The request body could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Serialization(String),

    /// A configuration value is present but unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Envelope label for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::MissingCredentials(_) => ErrorKind::Credentials,
            ApiError::Validation(_) => ErrorKind::Validation,
            ApiError::Upstream { .. }
            | ApiError::Transport(_)
            | ApiError::Deserialization(_)
            | ApiError::Serialization(_)
            | ApiError::Config(_) => ErrorKind::Api,
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }
}

fn missing_credentials_message(missing: &[&'static str]) -> String {
    match missing {
        [] => "BigTime credentials are required".to_string(),
        [one] => format!("{one} environment variable is required"),
        many => format!("{} environment variables are required", many.join(" and ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_message_carries_status_and_reason() {
        let err = ApiError::Upstream {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "BigTime API error: 404 Not Found");
        assert_eq!(err.kind(), ErrorKind::Api);
    }

    #[test]
    fn missing_credentials_names_each_variable() {
        let one = ApiError::MissingCredentials(vec!["BIGTIME_FIRM_ID"]);
        assert_eq!(one.to_string(), "BIGTIME_FIRM_ID environment variable is required");

        let both = ApiError::MissingCredentials(vec!["BIGTIME_API_TOKEN", "BIGTIME_FIRM_ID"]);
        assert_eq!(
            both.to_string(),
            "BIGTIME_API_TOKEN and BIGTIME_FIRM_ID environment variables are required"
        );
        assert_eq!(both.kind(), ErrorKind::Credentials);
    }

    #[test]
    fn transport_and_decode_failures_are_api_errors() {
        assert_eq!(ApiError::Transport("timed out".into()).kind(), ErrorKind::Api);
        assert_eq!(ApiError::Deserialization("eof".into()).kind(), ErrorKind::Api);
        assert_eq!(ApiError::validation("bad").kind(), ErrorKind::Validation);
    }
}
