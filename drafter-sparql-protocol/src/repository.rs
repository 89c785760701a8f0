//! Repository wrapper around a lazily built session factory.

use crate::config::RepositoryConfig;
use crate::connection::SparqlConnection;
use crate::error::{ProtocolError, Result};
use crate::session::SessionFactory;
use crate::transport::{system_max_connections, Transport};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Default)]
struct RepositoryState {
    max_connections: Option<usize>,
    factory: Option<Arc<SessionFactory>>,
}

/// A remote SPARQL repository.
///
/// The session factory (and with it the connection pool) is built on first
/// use and rebuilt after the pool size changes.
#[derive(Debug)]
pub struct SparqlRepository {
    config: RepositoryConfig,
    state: Mutex<RepositoryState>,
}

impl SparqlRepository {
    pub fn new(config: RepositoryConfig) -> Self {
        let state = RepositoryState {
            max_connections: config.max_connections,
            factory: None,
        };
        Self {
            config,
            state: Mutex::new(state),
        }
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Pool size for new session factories.
    pub fn max_concurrent_connections(&self) -> usize {
        self.state
            .lock()
            .max_connections
            .unwrap_or_else(system_max_connections)
    }

    /// Change the pool size; the next connection gets a new session factory.
    pub fn set_max_concurrent_connections(&self, max: usize) -> Result<()> {
        if max == 0 {
            return Err(ProtocolError::config("max connections must be at least 1"));
        }
        let mut state = self.state.lock();
        state.max_connections = Some(max);
        if state.factory.take().is_some() {
            debug!(max_connections = max, "discarded session factory");
        }
        Ok(())
    }

    /// The current session factory, building it if needed.
    pub fn session_factory(&self) -> Result<Arc<SessionFactory>> {
        let mut state = self.state.lock();
        if let Some(factory) = &state.factory {
            return Ok(Arc::clone(factory));
        }
        let transport = Transport::build(&self.config, state.max_connections)?;
        let factory = Arc::new(SessionFactory::new(transport));
        debug!(
            max_connections = factory.max_connections(),
            "built session factory"
        );
        state.factory = Some(Arc::clone(&factory));
        Ok(factory)
    }

    /// Open a connection.
    ///
    /// Fails with [`ProtocolError::NotInitialized`] when the configured
    /// endpoints are missing or invalid.
    pub fn connection(&self) -> Result<SparqlConnection> {
        let (query_url, update_url) = self.config.endpoints()?;
        let factory = self.session_factory()?;
        Ok(SparqlConnection::new(
            factory.create_session(query_url, update_url),
        ))
    }
}
