//! Strava OAuth tokens and their on-disk store.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

/// Tokens as returned by Strava's `oauth/token` endpoint.
///
/// Fields the card doesn't use (athlete summary, token type, ...) are kept in
/// `extra` so rewriting the file doesn't lose them.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct StravaTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp (seconds) after which `access_token` is rejected.
    pub expires_at: i64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl StravaTokens {
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at < now
    }
}

/// JSON file holding the current [`StravaTokens`].
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<StravaTokens> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write the tokens to a sibling temp file and rename it over the store,
    /// so readers see either the old or the new file, never a partial one.
    pub fn save(&self, tokens: &StravaTokens) -> Result<()> {
        let raw = serde_json::to_string_pretty(tokens)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(raw.as_bytes())?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}
