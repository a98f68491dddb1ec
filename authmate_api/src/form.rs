use log::debug;

use crate::AuthError;
use crate::http::AuthClient;
use crate::http::types::Credentials;
use crate::http::types::TokenPair;
use crate::routes::Destination;
use crate::routes::Navigator;
use crate::session::SessionStore;

pub const LOGIN_SUCCESS: &'static str = "Login successful!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormData {
    pub email: String,
    pub password: String,
}

impl FormData {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// What the form shows around its inputs. Once settled, at most one of
/// `message` and `error` is non-empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthUiState {
    pub message: String,
    pub error: String,
    pub loading: bool,
}

impl AuthUiState {
    fn loading() -> Self {
        Self {
            message: String::new(),
            error: String::new(),
            loading: true,
        }
    }

    fn succeeded() -> Self {
        Self {
            message: LOGIN_SUCCESS.to_string(),
            error: String::new(),
            loading: false,
        }
    }

    fn failed(error: &AuthError) -> Self {
        Self {
            message: String::new(),
            error: error.display_message(),
            loading: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if !self.error.is_empty() {
            Phase::Failed
        } else if !self.message.is_empty() {
            Phase::Succeeded
        } else {
            Phase::Idle
        }
    }
}

/// State of the login screen, independent of how it is drawn.
///
/// A submission is split in two so a front end holding this in a reactive
/// cell can release it across the network call: `begin_submit` hands out
/// the credentials and locks the form, `settle` applies the outcome.
/// `submit` does both for callers that can hold `&mut self` throughout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    form: FormData,
    state: AuthUiState,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn state(&self) -> &AuthUiState {
        &self.state
    }

    pub fn handle_change(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        if !self.state.error.is_empty() {
            self.state.error.clear();
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.state.loading
    }

    /// Lock the form and return what to send, or `None` while a previous
    /// submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if !self.can_submit() {
            debug!("ignoring submit while a login is pending");
            return None;
        }
        self.state = AuthUiState::loading();
        Some(self.form.credentials())
    }

    /// Apply the outcome of the call started by `begin_submit`. On success
    /// the tokens go to `session` and the form asks to leave for the
    /// dashboard.
    pub fn settle<S: SessionStore>(
        &mut self,
        outcome: Result<TokenPair, AuthError>,
        session: &mut S,
    ) -> Option<Destination> {
        let outcome = outcome.and_then(|tokens| {
            if tokens.is_complete() {
                Ok(tokens)
            } else {
                Err(AuthError::missing_tokens())
            }
        });
        match outcome {
            Ok(tokens) => {
                session.login(tokens);
                self.state = AuthUiState::succeeded();
                Some(Destination::Dashboard)
            }
            Err(e) => {
                self.state = AuthUiState::failed(&e);
                None
            }
        }
    }

    /// Run one whole login attempt. Returns whether it succeeded; a call
    /// made while another is pending does nothing and returns `false`.
    pub async fn submit<C, S, N>(&mut self, client: &C, session: &mut S, navigator: &mut N) -> bool
    where
        C: AuthClient,
        S: SessionStore,
        N: Navigator,
    {
        let Some(credentials) = self.begin_submit() else {
            return false;
        };
        let outcome = client
            .submit_credentials(&credentials.email, &credentials.password)
            .await;
        match self.settle(outcome, session) {
            Some(destination) => {
                navigator.navigate(destination);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use axum::http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::AuthMateApi;
    use crate::error::FALLBACK_ERROR;
    use crate::http::types::ErrorBody;
    use crate::session::MemorySessionStore;
    use crate::tests::AuthStubServer;

    /// Answers every call with the same outcome and counts the calls.
    struct StaticClient {
        outcome: Result<TokenPair, AuthError>,
        calls: RefCell<Vec<Credentials>>,
    }

    impl StaticClient {
        fn new(outcome: Result<TokenPair, AuthError>) -> Self {
            Self {
                outcome,
                calls: RefCell::new(vec![]),
            }
        }
    }

    impl AuthClient for StaticClient {
        async fn submit_credentials(
            &self,
            email: &str,
            password: &str,
        ) -> Result<TokenPair, AuthError> {
            self.calls.borrow_mut().push(Credentials {
                email: email.to_string(),
                password: password.to_string(),
            });
            self.outcome.clone()
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        visited: Vec<Destination>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, destination: Destination) {
            self.visited.push(destination);
        }
    }

    fn tokens(access: &str, refresh: &str) -> TokenPair {
        TokenPair {
            access: access.to_string(),
            refresh: refresh.to_string(),
        }
    }

    fn filled_form() -> LoginForm {
        let mut form = LoginForm::new();
        form.handle_change(Field::Email, "user@example.com".to_string());
        form.handle_change(Field::Password, "secret1".to_string());
        form
    }

    #[test]
    fn keystrokes_keep_last_value() {
        let mut form = LoginForm::new();
        for value in ["u", "us", "use", "user@example.com"] {
            form.handle_change(Field::Email, value.to_string());
        }
        for value in ["s", "se", ""] {
            form.handle_change(Field::Password, value.to_string());
        }
        assert_eq!(form.form().email, "user@example.com");
        assert_eq!(form.form().password, "");
        assert_eq!(form.state().phase(), Phase::Idle);
    }

    #[test]
    fn keystroke_clears_error_only() {
        let mut form = filled_form();
        let mut session = MemorySessionStore::new();
        form.begin_submit().unwrap();
        form.settle(Err(AuthError::transport("Network Error")), &mut session);
        assert_eq!(form.state().error, "Network Error");

        form.handle_change(Field::Password, "secret2".to_string());
        assert_eq!(form.state(), &AuthUiState::default());
        assert_eq!(form.form().password, "secret2");
    }

    #[test]
    fn keystroke_keeps_success_message() {
        let mut form = filled_form();
        let mut session = MemorySessionStore::new();
        form.begin_submit().unwrap();
        form.settle(Ok(tokens("A", "R")), &mut session);

        form.handle_change(Field::Email, "other@example.com".to_string());
        assert_eq!(form.state().message, LOGIN_SUCCESS);
    }

    #[test]
    fn begin_submit_locks_the_form() {
        let mut form = filled_form();
        let credentials = form.begin_submit().unwrap();
        assert_eq!(credentials.email, "user@example.com");
        assert_eq!(credentials.password, "secret1");
        assert_eq!(form.state().phase(), Phase::Loading);
        assert!(!form.can_submit());

        // second press while pending is inert
        assert!(form.begin_submit().is_none());
        assert_eq!(form.state().phase(), Phase::Loading);
    }

    #[test]
    fn begin_submit_resets_previous_outcome() {
        let mut form = filled_form();
        let mut session = MemorySessionStore::new();
        form.begin_submit().unwrap();
        form.settle(Err(AuthError::transport("Network Error")), &mut session);

        form.begin_submit().unwrap();
        assert_eq!(form.state(), &AuthUiState::loading());
    }

    #[test]
    fn settle_rejects_empty_tokens() {
        let mut form = filled_form();
        let mut session = MemorySessionStore::new();
        form.begin_submit().unwrap();

        let destination = form.settle(Ok(tokens("A", "")), &mut session);
        assert_eq!(destination, None);
        assert_eq!(session.logins, 0);
        assert_eq!(form.state().error, crate::error::MISSING_TOKENS);
        assert_eq!(form.state().message, "");
        assert!(!form.state().loading);
    }

    #[tokio::test]
    async fn submit_success() {
        let mut form = filled_form();
        let client = StaticClient::new(Ok(tokens("A", "R")));
        let mut session = MemorySessionStore::new();
        let mut navigator = RecordingNavigator::default();

        assert!(form.submit(&client, &mut session, &mut navigator).await);

        assert_eq!(
            client.calls.borrow().clone(),
            vec![Credentials {
                email: "user@example.com".to_string(),
                password: "secret1".to_string(),
            }]
        );
        assert_eq!(session.logins, 1);
        assert_eq!(session.tokens(), Some(&tokens("A", "R")));
        assert_eq!(
            form.state(),
            &AuthUiState {
                message: "Login successful!".to_string(),
                error: String::new(),
                loading: false,
            }
        );
        assert_eq!(form.state().phase(), Phase::Succeeded);
        assert_eq!(navigator.visited, vec![Destination::Dashboard]);
    }

    #[tokio::test]
    async fn submit_missing_token() {
        let mut form = filled_form();
        let client = StaticClient::new(Err(AuthError::missing_tokens()));
        let mut session = MemorySessionStore::new();
        let mut navigator = RecordingNavigator::default();

        assert!(!form.submit(&client, &mut session, &mut navigator).await);

        assert_eq!(session.logins, 0);
        assert!(!session.is_authenticated());
        assert_eq!(form.state().message, "");
        assert!(!form.state().error.is_empty());
        assert!(!form.state().loading);
        assert!(navigator.visited.is_empty());
    }

    #[tokio::test]
    async fn submit_invalid_credentials() {
        let mut form = filled_form();
        let client = StaticClient::new(Err(AuthError::rejected(
            400,
            ErrorBody {
                non_field_errors: vec!["Invalid credentials".to_string()],
            },
        )));
        let mut session = MemorySessionStore::new();
        let mut navigator = RecordingNavigator::default();

        form.submit(&client, &mut session, &mut navigator).await;

        assert_eq!(
            form.state(),
            &AuthUiState {
                message: String::new(),
                error: "Invalid credentials".to_string(),
                loading: false,
            }
        );
        assert_eq!(form.state().phase(), Phase::Failed);
        assert!(navigator.visited.is_empty());
    }

    #[tokio::test]
    async fn submit_network_error() {
        let mut form = filled_form();
        let client = StaticClient::new(Err(AuthError::transport("Network Error")));
        let mut session = MemorySessionStore::new();
        let mut navigator = RecordingNavigator::default();

        form.submit(&client, &mut session, &mut navigator).await;
        assert_eq!(form.state().error, "Network Error");
        assert!(navigator.visited.is_empty());
    }

    #[tokio::test]
    async fn submit_silent_failure_uses_fallback() {
        let mut form = filled_form();
        let client = StaticClient::new(Err(AuthError::transport("")));
        let mut session = MemorySessionStore::new();
        let mut navigator = RecordingNavigator::default();

        form.submit(&client, &mut session, &mut navigator).await;
        assert_eq!(form.state().error, FALLBACK_ERROR);
    }

    #[tokio::test]
    async fn submit_while_pending_is_inert() {
        let mut form = filled_form();
        form.begin_submit().unwrap();

        let client = StaticClient::new(Ok(tokens("A", "R")));
        let mut session = MemorySessionStore::new();
        let mut navigator = RecordingNavigator::default();

        assert!(!form.submit(&client, &mut session, &mut navigator).await);
        assert!(client.calls.borrow().is_empty());
        assert_eq!(session.logins, 0);
        assert!(navigator.visited.is_empty());
        assert_eq!(form.state().phase(), Phase::Loading);
    }

    #[tokio::test]
    async fn submit_against_server() -> anyhow::Result<()> {
        let stub =
            AuthStubServer::new(StatusCode::OK, json!({ "access": "A", "refresh": "R" })).await?;
        let api: AuthMateApi = stub.api();

        let mut form = filled_form();
        let mut session = MemorySessionStore::new();
        let mut navigator = RecordingNavigator::default();

        assert!(form.submit(&api, &mut session, &mut navigator).await);
        assert_eq!(stub.received().len(), 1);
        assert_eq!(stub.received()[0].email, "user@example.com");
        assert_eq!(session.tokens(), Some(&tokens("A", "R")));
        assert_eq!(navigator.visited, vec![Destination::Dashboard]);
        Ok(())
    }

    #[tokio::test]
    async fn submit_against_rejecting_server() -> anyhow::Result<()> {
        let stub = AuthStubServer::new(
            StatusCode::BAD_REQUEST,
            json!({ "non_field_errors": ["Invalid credentials"] }),
        )
        .await?;

        let mut form = filled_form();
        let mut session = MemorySessionStore::new();
        let mut navigator = RecordingNavigator::default();

        assert!(!form.submit(&stub.api(), &mut session, &mut navigator).await);
        assert_eq!(form.state().error, "Invalid credentials");
        assert!(!session.is_authenticated());
        Ok(())
    }
}
