mod api;
pub mod types;

pub use api::AuthMateApi;

use crate::AuthError;
use types::TokenPair;

/// Anything that can trade an email and password for a session.
#[allow(async_fn_in_trait)]
pub trait AuthClient {
    async fn submit_credentials(&self, email: &str, password: &str)
    -> Result<TokenPair, AuthError>;
}
