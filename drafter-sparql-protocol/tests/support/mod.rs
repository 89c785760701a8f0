#![allow(dead_code)]

use drafter_sparql_protocol::{RepositoryConfig, SparqlConnection, SparqlRepository};
use wiremock::MockServer;

pub const QUERY_PATH: &str = "/drafter/query";
pub const UPDATE_PATH: &str = "/drafter/update";

pub const ASK_TRUE_JSON: &str = r#"{"head":{},"boolean":true}"#;

pub const SELECT_JSON: &str = r#"{
  "head": { "vars": ["s", "o"] },
  "results": { "bindings": [
    { "s": { "type": "uri", "value": "http://live/def/a" },
      "o": { "type": "literal", "value": "1", "datatype": "http://www.w3.org/2001/XMLSchema#integer" } },
    { "s": { "type": "uri", "value": "http://live/def/b" } }
  ] }
}"#;

pub const CONSTRUCT_NT: &str = "<http://live/def/a> <http://live/def/p> \"x\" .\n\
                                <http://live/def/b> <http://live/def/p> <http://live/def/a> .\n";

pub const TIMEOUT_BODY: &str = "com.complexible.stardog.plan.eval.operator.OperatorException: \
                                The query exceeded query timeout: 5000ms";

pub fn config(server: &MockServer) -> RepositoryConfig {
    RepositoryConfig::new(format!("{}{QUERY_PATH}", server.uri()))
        .with_update_endpoint(format!("{}{UPDATE_PATH}", server.uri()))
}

pub fn repository(server: &MockServer) -> SparqlRepository {
    SparqlRepository::new(config(server))
}

pub fn connection(server: &MockServer) -> SparqlConnection {
    repository(server).connection().unwrap()
}

/// An ASK query exactly `len` characters long.
pub fn ask_of_length(len: usize) -> String {
    let query = format!("{:<len$}", "ASK { ?s ?p ?o }");
    assert_eq!(query.chars().count(), len);
    query
}
