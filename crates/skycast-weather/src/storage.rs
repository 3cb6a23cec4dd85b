//! Persistence for the OpenWeatherMap API key.
//!
//! The key is stored as a plain file in the user's config directory. The
//! `SKYCAST_API_KEY` environment variable, when set, overrides the stored
//! key for a single run.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable consulted before the stored key.
pub const API_KEY_ENV: &str = "SKYCAST_API_KEY";

const KEY_FILE: &str = "api_key";

/// File-based storage for the provider API key.
pub struct ApiKeyStore;

impl ApiKeyStore {
    fn store_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("skycast");
        Ok(dir)
    }

    /// Persist the API key.
    pub fn store(key: &str) -> Result<()> {
        Self::store_in(&Self::store_dir()?, key)
    }

    /// Retrieve the stored API key, if any.
    pub fn retrieve() -> Result<Option<String>> {
        Self::retrieve_from(&Self::store_dir()?)
    }

    /// Delete the stored API key. Succeeds if no key is stored.
    pub fn delete() -> Result<()> {
        Self::delete_from(&Self::store_dir()?)
    }

    /// Whether a usable key is stored.
    pub fn is_present() -> Result<bool> {
        Ok(Self::retrieve()?.is_some())
    }

    /// Resolve the key to use: environment variable first, stored key second.
    pub fn resolve() -> Result<Option<String>> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            let key = key.trim().to_string();
            if !key.is_empty() {
                tracing::debug!("Using API key from {}", API_KEY_ENV);
                return Ok(Some(key));
            }
        }
        Self::retrieve()
    }

    fn store_in(dir: &Path, key: &str) -> Result<()> {
        fs::create_dir_all(dir).context("Failed to create config directory")?;
        let path = dir.join(KEY_FILE);
        fs::write(&path, key.trim()).context("Failed to write API key file")?;
        tracing::info!("Stored API key at {:?}", path);
        Ok(())
    }

    fn retrieve_from(dir: &Path) -> Result<Option<String>> {
        let path = dir.join(KEY_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let key = fs::read_to_string(&path)
            .context("Failed to read API key file")?
            .trim()
            .to_string();
        if key.is_empty() {
            return Ok(None);
        }
        Ok(Some(key))
    }

    fn is_present_in(dir: &Path) -> Result<bool> {
        Ok(Self::retrieve_from(dir)?.is_some())
    }

    fn delete_from(dir: &Path) -> Result<()> {
        let path = dir.join(KEY_FILE);
        if path.exists() {
            fs::remove_file(&path).context("Failed to delete API key file")?;
            tracing::info!("Deleted stored API key");
        }
        Ok(())
    }
}
