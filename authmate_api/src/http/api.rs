use log::debug;

use super::AuthClient;
use super::types::*;
use crate::AuthError;

#[derive(Clone, Debug, PartialEq)]
pub struct AuthMateApi {
    pub url: String,
}

impl Default for AuthMateApi {
    fn default() -> Self {
        Self::new(crate::base_url())
    }
}

impl AuthMateApi {
    pub fn new(url: String) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
        }
    }

    pub fn jwt_create_url(&self) -> String {
        format!("{}/api/auth/jwt/create/", self.url)
    }

    /// Exchange credentials for a token pair. A success status without both
    /// tokens is still a failure.
    pub async fn create_jwt(&self, request: &Credentials) -> Result<TokenPair, AuthError> {
        let url = self.jwt_create_url();
        debug!("POST {url}");
        let response = reqwest::Client::new()
            .post(url)
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        if status.is_success() {
            let data: TokenResponse = serde_json::from_str(&text).unwrap_or_else(|e| {
                debug!("undecodable token response: {e}");
                TokenResponse::default()
            });
            data.into_pair()
        } else {
            let body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();
            Err(AuthError::rejected(status.as_u16(), body))
        }
    }
}

impl AuthClient for AuthMateApi {
    async fn submit_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<TokenPair, AuthError> {
        let request = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.create_jwt(&request).await
    }
}
