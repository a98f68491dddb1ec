use std::path::PathBuf;

use anyhow::Result;
use authmate_api::prelude::SessionStore;
use authmate_api::prelude::TokenPair;
use log::warn;

/// Session holder for the terminal, kept as a JSON file.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    tokens: Option<TokenPair>,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path, tokens: None }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn persist(&self, tokens: &TokenPair) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(tokens)?)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn init(&mut self) -> Result<()> {
        if !self.path.exists() {
            self.tokens = None;
            return Ok(());
        }
        let data = match std::fs::read_to_string(&self.path) {
            Ok(d) => d,
            Err(e) => anyhow::bail!("Failed to read session file {:?}: {:?}", self.path, e),
        };
        self.tokens = Some(serde_json::from_str(&data).map_err(|e| {
            anyhow::anyhow!("Session file {:?} is corrupt: {}", self.path, e)
        })?);
        Ok(())
    }

    fn login(&mut self, tokens: TokenPair) {
        if let Err(e) = self.persist(&tokens) {
            warn!("failed to write session to {:?}: {e}", self.path);
        }
        self.tokens = Some(tokens);
    }

    fn logout(&mut self) {
        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                warn!("failed to remove session file {:?}: {e}", self.path);
            }
        }
        self.tokens = None;
    }

    fn tokens(&self) -> Option<&TokenPair> {
        self.tokens.as_ref()
    }

    fn teardown(&mut self) {
        self.tokens = None;
    }
}
