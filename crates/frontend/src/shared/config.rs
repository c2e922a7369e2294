//! Настройки клиента.
//!
//! Defaults are compiled in; an operator can override any field by storing a
//! JSON object under the `admin_config` key in localStorage.

use serde::{Deserialize, Serialize};

use crate::shared::retry::RetryPolicy;

const CONFIG_STORAGE_KEY: &str = "admin_config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Full API origin, e.g. "https://api.example.com". When empty the
    /// backend is expected on `api_port` of the page's host.
    pub api_base_url: Option<String>,
    pub api_port: u16,
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    pub retry: RetryPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            api_port: 3000,
            default_page_size: 50,
            page_size_options: vec![25, 50, 100, 200],
            retry: RetryPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Parses an override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: AppConfig = serde_json::from_str(json)?;
        config.normalize();
        Ok(config)
    }

    /// Defaults merged with the localStorage override, if any.
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

        match stored {
            Some(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("ignoring malformed {}: {}", CONFIG_STORAGE_KEY, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    fn normalize(&mut self) {
        self.default_page_size = self.default_page_size.max(1);
        self.page_size_options.retain(|&size| size > 0);
        if !self.page_size_options.contains(&self.default_page_size) {
            self.page_size_options.push(self.default_page_size);
            self.page_size_options.sort_unstable();
        }
        if let Some(url) = &self.api_base_url {
            let trimmed = url.trim().trim_end_matches('/');
            self.api_base_url = (!trimmed.is_empty()).then(|| trimmed.to_string());
        }
    }
}
