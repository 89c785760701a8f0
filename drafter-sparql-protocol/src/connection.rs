//! Connections and prepared operations.
//!
//! Every operation prepared on a [`SparqlConnection`] starts with inferred
//! statements excluded.

use crate::error::Result;
use crate::params::{Dataset, OperationSettings};
use crate::results::{GraphQueryResult, TupleQueryResult};
use crate::session::SparqlSession;

/// A connection to a [`SparqlRepository`](crate::SparqlRepository).
#[derive(Clone, Debug)]
pub struct SparqlConnection {
    session: SparqlSession,
}

impl SparqlConnection {
    pub(crate) fn new(session: SparqlSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &SparqlSession {
        &self.session
    }

    pub fn prepare_boolean_query(&self, query: impl Into<String>) -> PreparedBooleanQuery {
        PreparedBooleanQuery::new(self.session.clone(), query.into())
    }

    pub fn prepare_tuple_query(&self, query: impl Into<String>) -> PreparedTupleQuery {
        PreparedTupleQuery::new(self.session.clone(), query.into())
    }

    pub fn prepare_graph_query(&self, query: impl Into<String>) -> PreparedGraphQuery {
        PreparedGraphQuery::new(self.session.clone(), query.into())
    }

    pub fn prepare_update(&self, update: impl Into<String>) -> PreparedUpdate {
        PreparedUpdate::new(self.session.clone(), update.into())
    }
}

macro_rules! prepared_operation {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug)]
        pub struct $name {
            session: SparqlSession,
            text: String,
            settings: OperationSettings,
        }

        impl $name {
            fn new(session: SparqlSession, text: String) -> Self {
                let settings = OperationSettings {
                    include_inferred: false,
                    ..OperationSettings::default()
                };
                Self {
                    session,
                    text,
                    settings,
                }
            }

            pub fn text(&self) -> &str {
                &self.text
            }

            pub fn settings(&self) -> &OperationSettings {
                &self.settings
            }

            pub fn with_dataset(mut self, dataset: Dataset) -> Self {
                self.settings.dataset = dataset;
                self
            }

            /// Maximum execution time in seconds; 0 removes the limit.
            pub fn with_max_execution_time(mut self, seconds: u32) -> Self {
                self.settings.max_execution_time = seconds;
                self
            }

            pub fn set_include_inferred(&mut self, include: bool) {
                self.settings.include_inferred = include;
            }
        }
    };
}

prepared_operation!(
    /// A prepared ASK query.
    PreparedBooleanQuery
);
prepared_operation!(
    /// A prepared SELECT query.
    PreparedTupleQuery
);
prepared_operation!(
    /// A prepared CONSTRUCT or DESCRIBE query.
    PreparedGraphQuery
);
prepared_operation!(PreparedUpdate);

impl PreparedBooleanQuery {
    pub async fn evaluate(&self) -> Result<bool> {
        self.session
            .send_boolean_query(&self.text, &self.settings)
            .await
    }
}

impl PreparedTupleQuery {
    pub async fn evaluate(&self) -> Result<TupleQueryResult> {
        self.session.send_tuple_query(&self.text, &self.settings).await
    }
}

impl PreparedGraphQuery {
    pub async fn evaluate(&self) -> Result<GraphQueryResult> {
        self.session.send_graph_query(&self.text, &self.settings).await
    }
}

impl PreparedUpdate {
    pub async fn execute(&self) -> Result<()> {
        self.session.send_update(&self.text, &self.settings).await
    }
}

#[cfg(test)]
mod tests {
    use crate::config::RepositoryConfig;
    use crate::SparqlRepository;

    #[test]
    fn test_prepared_operations_exclude_inferred() {
        let repo = SparqlRepository::new(RepositoryConfig::new("http://localhost/sparql"));
        let conn = repo.connection().unwrap();

        assert!(!conn.prepare_boolean_query("ASK {}").settings().include_inferred);
        assert!(!conn.prepare_tuple_query("SELECT * {}").settings().include_inferred);
        assert!(!conn.prepare_graph_query("CONSTRUCT {} WHERE {}").settings().include_inferred);
        assert!(!conn.prepare_update("CLEAR ALL").settings().include_inferred);

        let mut query = conn.prepare_tuple_query("SELECT * {}").with_max_execution_time(3);
        query.set_include_inferred(true);
        assert!(query.settings().include_inferred);
        assert_eq!(query.settings().max_execution_time, 3);
        assert_eq!(query.text(), "SELECT * {}");
    }
}
