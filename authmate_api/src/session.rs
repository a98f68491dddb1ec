use anyhow::Result;

use crate::http::types::TokenPair;

/// Holds the authenticated session on behalf of the rest of the
/// application. The login form only ever calls `login`, once, after a
/// successful exchange.
pub trait SessionStore {
    /// Load whatever session a previous run left behind.
    fn init(&mut self) -> Result<()>;

    /// Take ownership of a freshly issued token pair. Persistence problems
    /// are the store's to report, the caller has already succeeded.
    fn login(&mut self, tokens: TokenPair);

    /// Forget the session, both in memory and wherever it is persisted.
    fn logout(&mut self);

    fn tokens(&self) -> Option<&TokenPair>;

    /// Drop the in-memory session without touching persisted state.
    fn teardown(&mut self);

    fn is_authenticated(&self) -> bool {
        self.tokens().is_some()
    }
}

/// A session that lives exactly as long as the value does.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    tokens: Option<TokenPair>,
    /// Number of hand-offs received, including ones later logged out.
    pub(crate) logins: usize,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn login(&mut self, tokens: TokenPair) {
        self.logins += 1;
        self.tokens = Some(tokens);
    }

    fn logout(&mut self) {
        self.tokens = None;
    }

    fn tokens(&self) -> Option<&TokenPair> {
        self.tokens.as_ref()
    }

    fn teardown(&mut self) {
        self.tokens = None;
    }
}
