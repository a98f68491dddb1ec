pub use crate::AuthClient;
pub use crate::AuthError;
pub use crate::AuthMateApi;
pub use crate::LoginForm;
pub use crate::base_url;
pub use crate::error::AuthErrorKind;
pub use crate::form::AuthUiState;
pub use crate::form::Field;
pub use crate::form::FormData;
pub use crate::form::Phase;
pub use crate::http::types::*;
pub use crate::routes::*;
pub use crate::session::MemorySessionStore;
pub use crate::session::SessionStore;
