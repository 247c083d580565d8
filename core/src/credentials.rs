//! Credential resolution for the BigTime API.
//!
//! Handlers resolve credentials on every invocation through a
//! [`CredentialSource`], so a test can hand in fixed credentials while the
//! server reads the process environment each time.

use std::fmt;

use crate::error::ApiError;

pub const TOKEN_VAR: &str = "BIGTIME_API_TOKEN";
pub const FIRM_ID_VAR: &str = "BIGTIME_FIRM_ID";

/// API token plus the firm (realm) it belongs to. Both are non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub firm_id: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>, firm_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            firm_id: firm_id.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("firm_id", &self.firm_id)
            .finish()
    }
}

pub trait CredentialSource: Send + Sync {
    fn resolve(&self) -> Result<Credentials, ApiError>;
}

/// Always returns the same credentials.
#[derive(Debug, Clone)]
pub struct StaticCredentials(pub Credentials);

impl CredentialSource for StaticCredentials {
    fn resolve(&self) -> Result<Credentials, ApiError> {
        Ok(self.0.clone())
    }
}

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Reads [`TOKEN_VAR`] and [`FIRM_ID_VAR`] on every call.
///
/// Unset and empty values are both reported as missing; every missing
/// variable is named in the error.
pub struct EnvCredentials {
    lookup: Lookup,
}

impl EnvCredentials {
    pub fn new() -> Self {
        Self::with_lookup(|key| std::env::var(key).ok())
    }

    pub fn with_lookup(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self { lookup: Box::new(lookup) }
    }

    fn read(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|value| !value.is_empty())
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialSource for EnvCredentials {
    fn resolve(&self) -> Result<Credentials, ApiError> {
        let token = self.read(TOKEN_VAR);
        let firm_id = self.read(FIRM_ID_VAR);

        match (token, firm_id) {
            (Some(token), Some(firm_id)) => Ok(Credentials { token, firm_id }),
            (token, firm_id) => {
                let mut missing = Vec::new();
                if token.is_none() {
                    missing.push(TOKEN_VAR);
                }
                if firm_id.is_none() {
                    missing.push(FIRM_ID_VAR);
                }
                Err(ApiError::MissingCredentials(missing))
            }
        }
    }
}
