//! Remote repository source.
//!
//! Reads `{base}/{repository}/{branch}/{filename}` from the raw content host,
//! optionally through a CORS proxy that expects one extra header.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder};

use crate::errors::SourceError;
use crate::models::{FetchOrigin, RawRecord, SourceConfig};

use super::{decode_records, DataSource};

/// Source ID constant
const SOURCE_ID: &str = "REMOTE";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Remote dataset source backed by reqwest.
///
/// # Example
///
/// ```ignore
/// use tourism_source_data::{RemoteSource, SourceConfig};
///
/// let source = RemoteSource::new(SourceConfig::default());
/// let hotels = source.fetch("Inotels.json").await?;
/// ```
pub struct RemoteSource {
    client: Client,
    config: SourceConfig,
}

impl RemoteSource {
    pub fn new(config: SourceConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self::with_client(client, config)
    }

    /// Create a source with a caller-supplied client (custom timeouts, TLS, ...).
    pub fn with_client(client: Client, config: SourceConfig) -> Self {
        Self { client, config }
    }

    /// Build the GET request for a resource, attaching the proxy header when
    /// proxy mode is on.
    fn request(&self, filename: &str) -> RequestBuilder {
        let url = self.config.resource_url(filename);
        let request = self.client.get(&url);
        if self.config.use_proxy {
            let (name, value) = &self.config.proxy_header;
            request.header(name.as_str(), value.as_str())
        } else {
            request
        }
    }
}

fn map_send_error(e: reqwest::Error) -> SourceError {
    // A builder error means the URL or header could not be formed, which no
    // later source can fix.
    if e.is_builder() {
        SourceError::InvalidRequest(e.to_string())
    } else {
        SourceError::Network(e)
    }
}

#[async_trait]
impl DataSource for RemoteSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    fn origin(&self) -> FetchOrigin {
        FetchOrigin::Remote
    }

    async fn fetch(&self, filename: &str) -> Result<Vec<RawRecord>, SourceError> {
        debug!(
            "Fetching '{}' from {}",
            filename,
            self.config.resource_url(filename)
        );

        let response = self.request(filename).send().await.map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Http {
                source_id: SOURCE_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        decode_records(filename, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_proxy_header() {
        let source = RemoteSource::new(SourceConfig::default());
        let request = source.request("Inotels.json").build().unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://cors-anywhere.herokuapp.com/https://raw.githubusercontent.com/tidclibya/Libya-Tourism-Atlas/main/Inotels.json"
        );
        assert_eq!(
            request.headers().get("X-Requested-With").unwrap(),
            "XMLHttpRequest"
        );
    }

    #[test]
    fn test_direct_request_has_no_proxy_header() {
        let config = SourceConfig {
            use_proxy: false,
            ..SourceConfig::default()
        };
        let source = RemoteSource::new(config);
        let request = source.request("viligags.json").build().unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://raw.githubusercontent.com/tidclibya/Libya-Tourism-Atlas/main/viligags.json"
        );
        assert!(request.headers().get("X-Requested-With").is_none());
    }

    #[test]
    fn test_with_client_uses_configured_location() {
        let config = SourceConfig {
            use_proxy: false,
            remote_base_url: "http://mirror.local/raw".to_string(),
            branch: "staging".to_string(),
            ..SourceConfig::default()
        };
        let source = RemoteSource::with_client(Client::new(), config);
        let request = source.request("restaurants.json").build().unwrap();

        assert_eq!(
            request.url().as_str(),
            "http://mirror.local/raw/tidclibya/Libya-Tourism-Atlas/staging/restaurants.json"
        );
    }

    #[tokio::test]
    async fn test_invalid_url_is_invalid_request() {
        let config = SourceConfig {
            use_proxy: false,
            remote_base_url: "not a url".to_string(),
            ..SourceConfig::default()
        };
        let source = RemoteSource::new(config);

        let err = source.fetch("hotels.json").await.unwrap_err();
        assert!(matches!(err, SourceError::InvalidRequest(_)));
    }
}
