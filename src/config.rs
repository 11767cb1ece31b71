use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ModelError;
use crate::models::Page;

pub const DEFAULT_ROOT_URL: &str = "https://app.ticketmaster.com";
pub const ROOT_URL_ENV: &str = "DISCOVERY_ROOT_URL";

/// Settings for the mapping layer.
///
/// Only pagination links are prefixed with `root_url`; record links are kept
/// as the API sent them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapperConfig {
    pub root_url: Option<String>,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            root_url: Some(DEFAULT_ROOT_URL.to_string()),
        }
    }
}

impl MapperConfig {
    /// Defaults, with `DISCOVERY_ROOT_URL` taking precedence when set.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Reads a JSON config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("unable to read config {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(ROOT_URL_ENV) {
            self.root_url = Some(url);
        }
        self
    }

    /// Root URL to prefix, or `None` when unset or blank.
    pub fn link_base(&self) -> Option<&str> {
        self.root_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
    }

    pub fn page(&self, json: &Value) -> std::result::Result<Page, ModelError> {
        Page::from_json(json, self.link_base())
    }
}
