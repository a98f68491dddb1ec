use std::fmt;

use crate::http::types::ErrorBody;

/// Shown when neither the server nor the failure itself has anything to say.
pub const FALLBACK_ERROR: &'static str = "An error occurred. Please try again.";
pub const MISSING_TOKENS: &'static str = "Access or Refresh token is missing";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// The request never produced a response.
    Transport,
    /// The server answered with a non-success status.
    Rejected { status: u16 },
    /// The server answered successfully but without both tokens.
    MissingTokens,
}

/// Every way a login attempt can fail. Front ends only ever show
/// `display_message`, so bad credentials, an unreachable server and a
/// malformed response all look alike apart from the text.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthError {
    kind: AuthErrorKind,
    message: Option<String>,
    non_field_errors: Vec<String>,
}

impl AuthError {
    pub fn transport(message: &str) -> Self {
        Self {
            kind: AuthErrorKind::Transport,
            message: Some(message.to_string()),
            non_field_errors: vec![],
        }
    }

    pub fn rejected(status: u16, body: ErrorBody) -> Self {
        Self {
            kind: AuthErrorKind::Rejected { status },
            message: Some(format!("Request failed with status code {status}")),
            non_field_errors: body.non_field_errors,
        }
    }

    pub fn missing_tokens() -> Self {
        Self {
            kind: AuthErrorKind::MissingTokens,
            message: Some(MISSING_TOKENS.to_string()),
            non_field_errors: vec![],
        }
    }

    pub fn kind(&self) -> AuthErrorKind {
        self.kind
    }

    /// The text a user sees: the server's first non-field error, then the
    /// failure's own message, then a generic fallback. Empty strings are
    /// skipped at every step.
    pub fn display_message(&self) -> String {
        self.non_field_errors
            .first()
            .filter(|e| !e.is_empty())
            .or(self.message.as_ref().filter(|m| !m.is_empty()))
            .cloned()
            .unwrap_or(FALLBACK_ERROR.to_string())
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_message())
    }
}

impl std::error::Error for AuthError {}

macro_rules! impl_error_from {
    ($error_type:ty) => {
        impl From<$error_type> for AuthError {
            fn from(value: $error_type) -> Self {
                Self::transport(&value.to_string())
            }
        }
    };
}

impl_error_from!(reqwest::Error);
impl_error_from!(anyhow::Error);
