//! Repository configuration
//!
//! Durations are stored as whole milliseconds so the config reads naturally
//! from JSON; use the accessor methods for `Duration` values.

use crate::error::{ProtocolError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 100;
pub const DEFAULT_POOL_WAIT_MS: u64 = 1;

/// HTTP basic authentication credentials
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

/// Configuration for a [`SparqlRepository`](crate::SparqlRepository)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// SPARQL query endpoint
    pub query_endpoint: String,
    /// SPARQL update endpoint; the query endpoint when unset
    pub update_endpoint: Option<String>,
    /// Connection pool size; the process-wide default when unset
    pub max_connections: Option<usize>,
    /// Time allowed to establish a TCP connection
    pub connect_timeout_ms: u64,
    /// Time allowed between reads of a response; no limit when unset
    pub read_timeout_ms: Option<u64>,
    /// Time to wait for a free pooled connection
    pub pool_wait_ms: u64,
    pub auth: Option<BasicAuth>,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            query_endpoint: String::new(),
            update_endpoint: None,
            max_connections: None,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            read_timeout_ms: None,
            pool_wait_ms: DEFAULT_POOL_WAIT_MS,
            auth: None,
        }
    }
}

impl RepositoryConfig {
    pub fn new(query_endpoint: impl Into<String>) -> Self {
        Self {
            query_endpoint: query_endpoint.into(),
            ..Self::default()
        }
    }

    pub fn with_update_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.update_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_max_connections(mut self, max: usize) -> Self {
        self.max_connections = Some(max);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    pub fn with_pool_wait(mut self, wait: Duration) -> Self {
        self.pool_wait_ms = wait.as_millis() as u64;
        self
    }

    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some(BasicAuth {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_ms.map(Duration::from_millis)
    }

    pub fn pool_wait(&self) -> Duration {
        Duration::from_millis(self.pool_wait_ms)
    }

    /// Parsed query and update endpoints.
    ///
    /// Fails with [`ProtocolError::NotInitialized`] when either is empty or
    /// is not an absolute http(s) URL.
    pub fn endpoints(&self) -> Result<(Url, Url)> {
        let query = parse_endpoint("query", &self.query_endpoint)?;
        let update = match &self.update_endpoint {
            Some(endpoint) => parse_endpoint("update", endpoint)?,
            None => query.clone(),
        };
        Ok((query, update))
    }

    /// Check the whole configuration.
    pub fn validate(&self) -> Result<()> {
        self.endpoints()?;
        if self.max_connections == Some(0) {
            return Err(ProtocolError::config("max_connections must be at least 1"));
        }
        if self.connect_timeout_ms == 0 {
            return Err(ProtocolError::config("connect_timeout_ms must be greater than 0"));
        }
        Ok(())
    }
}

fn parse_endpoint(kind: &str, endpoint: &str) -> Result<Url> {
    if endpoint.trim().is_empty() {
        return Err(ProtocolError::NotInitialized(format!(
            "no {kind} endpoint configured"
        )));
    }
    let url = Url::parse(endpoint).map_err(|e| {
        ProtocolError::NotInitialized(format!("invalid {kind} endpoint '{endpoint}': {e}"))
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ProtocolError::NotInitialized(format!(
            "unsupported {kind} endpoint scheme '{scheme}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RepositoryConfig::new("http://localhost:5820/db/query");
        assert_eq!(config.connect_timeout(), Duration::from_millis(100));
        assert_eq!(config.pool_wait(), Duration::from_millis(1));
        assert_eq!(config.read_timeout(), None);
        assert_eq!(config.max_connections, None);
        config.validate().unwrap();
    }

    #[test]
    fn test_update_endpoint_defaults_to_query() {
        let config = RepositoryConfig::new("http://localhost:5820/db/query");
        let (query, update) = config.endpoints().unwrap();
        assert_eq!(query, update);

        let config = config.with_update_endpoint("http://localhost:5820/db/update");
        let (_, update) = config.endpoints().unwrap();
        assert_eq!(update.path(), "/db/update");
    }

    #[test]
    fn test_invalid_endpoints() {
        for endpoint in ["", "   ", "not a url", "ftp://example.org/sparql"] {
            let err = RepositoryConfig::new(endpoint).endpoints().unwrap_err();
            assert!(matches!(err, ProtocolError::NotInitialized(_)), "{endpoint}: {err}");
        }
    }

    #[test]
    fn test_validate_rejects_empty_pool() {
        let config = RepositoryConfig::new("http://localhost/sparql").with_max_connections(0);
        assert!(matches!(config.validate(), Err(ProtocolError::Config(_))));
    }

    #[test]
    fn test_config_serde() {
        let json = r#"{
            "query_endpoint": "http://localhost:5820/db/query",
            "max_connections": 8,
            "read_timeout_ms": 30000,
            "auth": { "username": "admin", "password": "admin" }
        }"#;
        let config: RepositoryConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_connections, Some(8));
        assert_eq!(config.read_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.connect_timeout_ms, DEFAULT_CONNECT_TIMEOUT_MS);
        assert_eq!(config.pool_wait_ms, DEFAULT_POOL_WAIT_MS);

        let round_trip: RepositoryConfig =
            serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(round_trip, config);
    }
}
