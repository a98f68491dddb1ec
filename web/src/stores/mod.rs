mod auth;

pub use auth::AUTH_STORE;
