//! Frontend Configuration
//!
//! Read once at startup from `<meta name="budget-config" content="{json}">`.
//! Every field is optional; missing fields fall back to defaults.

use serde::Deserialize;

/// Name of the meta tag carrying the JSON config
pub const CONFIG_META_NAME: &str = "budget-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for every API path; empty means same origin
    pub api_base: String,
    /// localStorage key holding the username
    pub storage_key: String,
    /// How long non-blocking notices stay visible
    pub notice_timeout_ms: u32,
    /// Records kept by the rolling logger
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            storage_key: "username".to_string(),
            notice_timeout_ms: 4000,
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the config meta tag from the current document.
    /// No tag means defaults; a malformed tag is an error.
    pub fn from_document() -> Result<Self, serde_json::Error> {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&format!("meta[name=\"{}\"]", CONFIG_META_NAME)).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"));

        match raw {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }

    /// Join the API base with an absolute path
    pub fn api_url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}
