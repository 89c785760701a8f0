//! HTTP transport shared by every session a factory creates.
//!
//! The process-wide connection limit plays the role of a system property:
//! it is read when a transport is built, and a repository with its own
//! pool size overrides it for the duration of the build only.

use crate::config::{BasicAuth, RepositoryConfig};
use crate::error::{ProtocolError, Result};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::debug;

/// Connection limit used when neither the repository nor the environment sets one.
pub const DEFAULT_MAX_CONNECTIONS: usize = 5;

/// Environment variable that seeds the process-wide connection limit.
pub const MAX_CONNECTIONS_ENV: &str = "DRAFTER_SPARQL_MAX_CONNECTIONS";

static SYSTEM_MAX_CONNECTIONS: Lazy<Mutex<usize>> = Lazy::new(|| {
    let max = std::env::var(MAX_CONNECTIONS_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_MAX_CONNECTIONS);
    Mutex::new(max)
});

/// Current process-wide connection limit.
pub fn system_max_connections() -> usize {
    *SYSTEM_MAX_CONNECTIONS.lock()
}

/// Replace the process-wide connection limit, returning the previous value.
///
/// Zero is rejected.
pub fn set_system_max_connections(max: usize) -> Result<usize> {
    if max == 0 {
        return Err(ProtocolError::config("max connections must be at least 1"));
    }
    let mut current = SYSTEM_MAX_CONNECTIONS.lock();
    Ok(std::mem::replace(&mut *current, max))
}

/// A configured HTTP client plus the semaphore that bounds it.
#[derive(Debug)]
pub struct Transport {
    pub(crate) client: reqwest::Client,
    pub(crate) permits: Arc<Semaphore>,
    pub(crate) max_connections: usize,
    pub(crate) pool_wait: Duration,
    pub(crate) auth: Option<BasicAuth>,
}

impl Transport {
    /// Build a transport for `config`.
    ///
    /// When `max_connections` is set it replaces the process-wide limit while
    /// the client is built; the previous limit is restored before returning.
    pub fn build(config: &RepositoryConfig, max_connections: Option<usize>) -> Result<Self> {
        let mut system = SYSTEM_MAX_CONNECTIONS.lock();
        let previous = *system;
        if let Some(max) = max_connections {
            if max == 0 {
                return Err(ProtocolError::config("max connections must be at least 1"));
            }
            *system = max;
        }
        let result = Self::with_limit(config, *system);
        *system = previous;
        result
    }

    fn with_limit(config: &RepositoryConfig, max_connections: usize) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .pool_max_idle_per_host(max_connections);
        if let Some(read_timeout) = config.read_timeout() {
            builder = builder.read_timeout(read_timeout);
        }
        let client = builder.build()?;

        debug!(
            max_connections,
            connect_timeout_ms = config.connect_timeout_ms,
            pool_wait_ms = config.pool_wait_ms,
            "built SPARQL transport"
        );

        Ok(Self {
            client,
            permits: Arc::new(Semaphore::new(max_connections)),
            max_connections,
            pool_wait: config.pool_wait(),
            auth: config.auth.clone(),
        })
    }

    pub fn max_connections(&self) -> usize {
        self.max_connections
    }

    /// Pooled connections not currently in use.
    pub fn available_connections(&self) -> usize {
        self.permits.available_permits()
    }

    pub(crate) fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            Some(auth) => request.basic_auth(&auth.username, Some(&auth.password)),
            None => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_is_restored() {
        let config = RepositoryConfig::new("http://localhost/sparql");
        let before = system_max_connections();

        let transport = Transport::build(&config, Some(before + 3)).unwrap();
        assert_eq!(transport.max_connections(), before + 3);
        assert_eq!(transport.available_connections(), before + 3);
        assert_eq!(system_max_connections(), before);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let config = RepositoryConfig::new("http://localhost/sparql");
        let before = system_max_connections();
        assert!(matches!(
            Transport::build(&config, Some(0)),
            Err(ProtocolError::Config(_))
        ));
        assert_eq!(system_max_connections(), before);
        assert!(set_system_max_connections(0).is_err());
    }
}
