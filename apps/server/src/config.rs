use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use tourism_core::TourismConfig;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
    pub tourism: TourismConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("TA_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid TA_LISTEN_ADDR")?;
        let cors_allow = std::env::var("TA_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("TA_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let log_format = match std::env::var("TA_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        let mut tourism = TourismConfig::default();
        let source = &mut tourism.source;
        override_string("TA_REPOSITORY", &mut source.repository);
        override_string("TA_BRANCH", &mut source.branch);
        override_string("TA_REMOTE_BASE_URL", &mut source.remote_base_url);
        override_string("TA_PROXY_PREFIX", &mut source.proxy_prefix);
        override_string("TA_LOCAL_DATA_DIR", &mut source.local_data_dir);
        source.use_proxy = env_flag("TA_USE_PROXY", source.use_proxy);
        source.fallback_to_local = env_flag("TA_FALLBACK_TO_LOCAL", source.fallback_to_local);

        let files = &mut tourism.files;
        override_string("TA_FILE_HOTELS", &mut files.hotels);
        override_string("TA_FILE_BEACHES", &mut files.beaches);
        override_string("TA_FILE_RESTAURANTS", &mut files.restaurants);
        override_string("TA_FILE_CULTURAL_SITES", &mut files.cultural_sites);

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            log_format,
            tourism,
        })
    }
}

fn override_string(key: &str, target: &mut String) {
    if let Ok(value) = std::env::var(key) {
        *target = value;
    }
}

/// Reads a boolean variable, keeping `default` when unset or unrecognized.
fn env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(value) => parse_flag(&value).unwrap_or(default),
        Err(_) => default,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flag_accepts_common_spellings() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" on "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("no"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
