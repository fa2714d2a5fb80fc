//! Endpoint and fallback configuration.

use serde::{Deserialize, Serialize};

/// Repository holding the published datasets.
pub const DEFAULT_REPOSITORY: &str = "tidclibya/Libya-Tourism-Atlas";

/// Branch the datasets are read from.
pub const DEFAULT_BRANCH: &str = "main";

/// Raw content host for the repository.
pub const DEFAULT_REMOTE_BASE_URL: &str = "https://raw.githubusercontent.com";

/// CORS proxy prefix wrapping the raw content host.
pub const DEFAULT_PROXY_PREFIX: &str =
    "https://cors-anywhere.herokuapp.com/https://raw.githubusercontent.com";

/// Directory consulted when the remote fetch fails.
pub const DEFAULT_LOCAL_DATA_DIR: &str = "data";

/// Settings consumed read-only by the sources and the fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceConfig {
    /// `owner/name` of the repository.
    pub repository: String,
    pub branch: String,
    pub remote_base_url: String,
    /// Route remote requests through `proxy_prefix` instead of `remote_base_url`.
    pub use_proxy: bool,
    pub proxy_prefix: String,
    /// Header attached only when the proxy is in use.
    pub proxy_header: (String, String),
    /// Read `{local_data_dir}/{filename}` when the remote fetch fails.
    pub fallback_to_local: bool,
    pub local_data_dir: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            repository: DEFAULT_REPOSITORY.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            remote_base_url: DEFAULT_REMOTE_BASE_URL.to_string(),
            use_proxy: true,
            proxy_prefix: DEFAULT_PROXY_PREFIX.to_string(),
            proxy_header: ("X-Requested-With".to_string(), "XMLHttpRequest".to_string()),
            fallback_to_local: true,
            local_data_dir: DEFAULT_LOCAL_DATA_DIR.to_string(),
        }
    }
}

impl SourceConfig {
    /// Base URL requests are sent to, honoring proxy mode.
    pub fn effective_base_url(&self) -> &str {
        if self.use_proxy {
            &self.proxy_prefix
        } else {
            &self.remote_base_url
        }
    }

    /// Full URL of a resource: `{base}/{repository}/{branch}/{filename}`.
    pub fn resource_url(&self, filename: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.effective_base_url().trim_end_matches('/'),
            self.repository.trim_matches('/'),
            self.branch.trim_matches('/'),
            filename.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_proxy() {
        let config = SourceConfig::default();
        assert_eq!(
            config.resource_url("restaurants.json"),
            "https://cors-anywhere.herokuapp.com/https://raw.githubusercontent.com/tidclibya/Libya-Tourism-Atlas/main/restaurants.json"
        );
    }

    #[test]
    fn test_direct_url_without_proxy() {
        let config = SourceConfig {
            use_proxy: false,
            ..SourceConfig::default()
        };
        assert_eq!(
            config.resource_url("cultural_sites.json"),
            "https://raw.githubusercontent.com/tidclibya/Libya-Tourism-Atlas/main/cultural_sites.json"
        );
    }

    #[test]
    fn test_url_tolerates_stray_slashes() {
        let config = SourceConfig {
            use_proxy: false,
            remote_base_url: "http://localhost:9000/".to_string(),
            repository: "/org/repo/".to_string(),
            ..SourceConfig::default()
        };
        assert_eq!(
            config.resource_url("/hotels.json"),
            "http://localhost:9000/org/repo/main/hotels.json"
        );
    }
}
