pub mod error;
pub mod form;
pub mod http;
pub mod prelude;
pub mod routes;
pub mod session;

#[cfg(test)]
mod tests;

pub use error::AuthError;
pub use form::LoginForm;
pub use http::AuthClient;
pub use http::AuthMateApi;

#[cfg(debug_assertions)]
pub const AUTHMATE_URL: &'static str = "http://127.0.0.1:8000";
#[cfg(not(debug_assertions))]
pub const AUTHMATE_URL: &'static str = "https://api.authmate.app";

#[cfg(debug_assertions)]
pub const WEB_URL: &'static str = "http://127.0.0.1:8080";
#[cfg(not(debug_assertions))]
pub const WEB_URL: &'static str = "https://authmate.app";

/// Base url of the authentication service. A build can point somewhere
/// else by setting `AUTHMATE_URL` at compile time.
pub fn base_url() -> String {
    option_env!("AUTHMATE_URL")
        .unwrap_or(AUTHMATE_URL)
        .to_string()
}
