use serde::Deserialize;
use serde::Serialize;

use crate::AuthError;

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The two bearer tokens that make up a session.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

impl TokenPair {
    pub fn is_complete(&self) -> bool {
        !self.access.is_empty() && !self.refresh.is_empty()
    }
}

/// Body of a successful `jwt/create` call. Either token may be absent.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct TokenResponse {
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
}

impl TokenResponse {
    pub fn into_pair(self) -> Result<TokenPair, AuthError> {
        match (self.access, self.refresh) {
            (Some(access), Some(refresh)) if !access.is_empty() && !refresh.is_empty() => {
                Ok(TokenPair { access, refresh })
            }
            _ => Err(AuthError::missing_tokens()),
        }
    }
}

/// Body of a failed call. Only the field-independent errors are kept.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub non_field_errors: Vec<String>,
}
