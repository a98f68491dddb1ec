use anyhow::Result;
use authmate_api::prelude::SessionStore;
use authmate_api::prelude::TokenPair;
use dioxus::prelude::*;
use gloo_storage::LocalStorage;
use gloo_storage::Storage;
use gloo_storage::errors::StorageError;
use log::warn;

pub static AUTH_STORE: GlobalSignal<AuthStore> = Signal::global(AuthStore::new);

const AUTH_TOKENS_LOCALSTORAGE: &'static str = "auth_tokens";

/// The browser's session holder, persisted in localStorage so a reload
/// keeps the user logged in.
#[derive(Clone, Debug, Default)]
pub struct AuthStore {
    tokens: Option<TokenPair>,
}

impl AuthStore {
    pub fn new() -> Self {
        let mut out = Self::default();
        if let Err(e) = out.init() {
            warn!("discarding stored session: {e}");
            LocalStorage::delete(AUTH_TOKENS_LOCALSTORAGE);
        }
        out
    }
}

impl SessionStore for AuthStore {
    fn init(&mut self) -> Result<()> {
        self.tokens = match LocalStorage::get::<TokenPair>(AUTH_TOKENS_LOCALSTORAGE) {
            Ok(tokens) => Some(tokens),
            Err(StorageError::KeyNotFound(_)) => None,
            Err(e) => anyhow::bail!("failed to read {AUTH_TOKENS_LOCALSTORAGE}: {e}"),
        };
        Ok(())
    }

    fn login(&mut self, tokens: TokenPair) {
        if let Err(e) = LocalStorage::set(AUTH_TOKENS_LOCALSTORAGE, &tokens) {
            warn!("session will not survive a reload: {e}");
        }
        self.tokens = Some(tokens);
    }

    fn logout(&mut self) {
        LocalStorage::delete(AUTH_TOKENS_LOCALSTORAGE);
        self.tokens = None;
    }

    fn tokens(&self) -> Option<&TokenPair> {
        self.tokens.as_ref()
    }

    fn teardown(&mut self) {
        self.tokens = None;
    }
}
