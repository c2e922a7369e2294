//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::shared::config::AppConfig;

/// Get the base URL for API requests
///
/// Uses `api_base_url` from the config when set, otherwise the current
/// window location with the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available and no base URL is configured
pub fn api_base(config: &AppConfig) -> String {
    if let Some(base) = &config.api_base_url {
        return base.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config.api_port)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(config: &AppConfig, path: &str) -> String {
    format!("{}{}", api_base(config), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_base_wins() {
        let config = AppConfig {
            api_base_url: Some("https://api.dive.test".into()),
            ..AppConfig::default()
        };
        assert_eq!(api_url(&config, "/api/trips"), "https://api.dive.test/api/trips");
    }
}
