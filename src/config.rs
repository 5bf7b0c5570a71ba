// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! Client configuration.
//!
//! The command-line tool always runs with [`VepConfig::default`]; library
//! callers can point the client at another VEP instance.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use annotate_variants::config::VepConfig;
//!
//! let config = VepConfig::new()
//!     .base_url("https://grch37.rest.ensembl.org/vep/human/hgvs/")
//!     .timeout(Duration::from_secs(30));
//!
//! assert_eq!(config.base_url, "https://grch37.rest.ensembl.org/vep/human/hgvs");
//! ```

use std::time::Duration;

/// Default VEP HGVS endpoint.
pub const DEFAULT_BASE_URL: &str = "http://rest.ensembl.org/vep/human/hgvs";

/// Default `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("annotate-variants/", env!("CARGO_PKG_VERSION"));

/// Configuration for the VEP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VepConfig {
    /// Endpoint that variant identifiers are appended to, without trailing `/`.
    pub base_url: String,
    /// Total request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl Default for VepConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            use_system_proxy: true,
        }
    }
}

impl VepConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint. Trailing slashes are removed.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the `User-Agent` header value.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Connect directly, ignoring proxy settings from the environment.
    pub fn no_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VepConfig::default();
        assert_eq!(config.base_url, "http://rest.ensembl.org/vep/human/hgvs");
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("annotate-variants/"));
        assert!(config.use_system_proxy);
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let config = VepConfig::new().base_url("http://localhost:3000/vep/human/hgvs//");
        assert_eq!(config.base_url, "http://localhost:3000/vep/human/hgvs");
    }

    #[test]
    fn test_builder() {
        let config = VepConfig::new()
            .timeout(Duration::from_secs(5))
            .user_agent("test-agent")
            .no_proxy();
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert!(!config.use_system_proxy);
        assert_eq!(config.user_agent, "test-agent");
    }
}
