//! SPARQL protocol client for Drafter's triple store
//!
//! Sends queries and updates over the SPARQL 1.1 protocol and turns store
//! responses into typed results or [`ProtocolError`]s.
//!
//! # Architecture
//!
//! - [`repository`]: lazily built session factory, pool sizing, connections
//! - [`connection`]: prepared operations with inference switched off
//! - [`session`]: GET/POST selection, dispatch, response handling
//! - [`classify`]: status/header/body classification of failures
//! - [`transport`]: `reqwest` client, connection permits, process-wide limit
//! - [`params`]: protocol parameters and store timeout translation
//! - [`results`]: boolean, tuple and graph result parsing
//! - [`config`]: serde-readable repository configuration
//!
//! # Example
//!
//! ```no_run
//! use drafter_sparql_protocol::{RepositoryConfig, SparqlRepository};
//!
//! # async fn run() -> drafter_sparql_protocol::Result<()> {
//! let repo = SparqlRepository::new(
//!     RepositoryConfig::new("http://localhost:5820/drafter/query")
//!         .with_update_endpoint("http://localhost:5820/drafter/update"),
//! );
//! let conn = repo.connection()?;
//! let found = conn
//!     .prepare_boolean_query("ASK { ?s ?p ?o }")
//!     .with_max_execution_time(30)
//!     .evaluate()
//!     .await?;
//! # let _ = found;
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod config;
pub mod connection;
pub mod error;
pub mod error_info;
pub mod params;
pub mod repository;
pub mod results;
pub mod session;
pub mod transport;

pub use config::{BasicAuth, RepositoryConfig};
pub use connection::{
    PreparedBooleanQuery, PreparedGraphQuery, PreparedTupleQuery, PreparedUpdate,
    SparqlConnection,
};
pub use error::{InterruptReason, ProtocolError, Result};
pub use error_info::{ErrorInfo, ErrorType};
pub use params::{Dataset, OperationSettings};
pub use repository::SparqlRepository;
pub use results::{BindingSet, GraphQueryResult, RdfTerm, RdfTriple, TupleQueryResult};
pub use session::{SessionFactory, SparqlSession, MAX_URL_QUERY_LENGTH};
