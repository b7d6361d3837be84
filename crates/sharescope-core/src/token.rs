//! Opaque provider access token.

use std::fmt;

use crate::error::{SharescopeError, SharescopeResult};

/// An already-issued OAuth access token.
///
/// Never validated against the provider or refreshed here; only checked for
/// presence so a missing credential fails before any remote call.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> SharescopeResult<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(SharescopeError::Credential("access token is missing".to_string()));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(SharescopeError::Credential(
                "access token must not contain whitespace".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Build from an optional value, e.g. a CLI flag or environment variable.
    pub fn from_option(token: Option<String>) -> SharescopeResult<Self> {
        match token {
            Some(t) => Self::new(t),
            None => Err(SharescopeError::Credential("access token is missing".to_string())),
        }
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}
