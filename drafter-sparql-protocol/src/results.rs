//! Query results.
//!
//! Boolean results are read inline. Tuple and graph results are parsed on
//! the blocking pool and streamed to the caller through a bounded channel.
//! The body is fully read before parsing starts, so a slow reader never
//! holds a pooled connection.

use crate::error::{ProtocolError, Result};
use bytes::Bytes;
use futures::Stream;
use rio_api::model::{Literal, Subject, Term, Triple};
use rio_api::parser::TriplesParser;
use rio_turtle::NTriplesParser;
use serde::Deserialize;
use std::collections::HashMap;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, trace};

pub const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";
pub const TEXT_BOOLEAN: &str = "text/boolean";
pub const N_TRIPLES: &str = "application/n-triples";

const RESULT_CHANNEL_CAPACITY: usize = 256;

/// An RDF term in a result.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RdfTerm {
    Iri(String),
    BlankNode(String),
    Literal {
        value: String,
        language: Option<String>,
        datatype: Option<String>,
    },
}

impl RdfTerm {
    pub fn iri(iri: impl Into<String>) -> Self {
        RdfTerm::Iri(iri.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        RdfTerm::Literal {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }

    /// The IRI, blank node label or lexical form.
    pub fn value(&self) -> &str {
        match self {
            RdfTerm::Iri(v) | RdfTerm::BlankNode(v) => v,
            RdfTerm::Literal { value, .. } => value,
        }
    }
}

/// One row of a tuple result. Unbound variables are absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BindingSet {
    bindings: Vec<(String, RdfTerm)>,
}

impl BindingSet {
    pub fn get(&self, var: &str) -> Option<&RdfTerm> {
        self.bindings
            .iter()
            .find(|(name, _)| name == var)
            .map(|(_, term)| term)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RdfTerm)> {
        self.bindings.iter().map(|(name, term)| (name.as_str(), term))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RdfTriple {
    pub subject: RdfTerm,
    pub predicate: String,
    pub object: RdfTerm,
}

// SPARQL 1.1 Query Results JSON

#[derive(Deserialize)]
struct JsonDocument {
    #[serde(default)]
    head: JsonHead,
    #[serde(default)]
    boolean: Option<bool>,
    #[serde(default)]
    results: Option<JsonResults>,
}

#[derive(Default, Deserialize)]
struct JsonHead {
    #[serde(default)]
    vars: Vec<String>,
}

#[derive(Deserialize)]
struct JsonResults {
    bindings: Vec<HashMap<String, JsonTerm>>,
}

#[derive(Deserialize)]
struct JsonTerm {
    #[serde(rename = "type")]
    kind: String,
    value: String,
    #[serde(rename = "xml:lang")]
    lang: Option<String>,
    datatype: Option<String>,
}

impl TryFrom<JsonTerm> for RdfTerm {
    type Error = ProtocolError;

    fn try_from(term: JsonTerm) -> Result<Self> {
        match term.kind.as_str() {
            "uri" => Ok(RdfTerm::Iri(term.value)),
            "bnode" => Ok(RdfTerm::BlankNode(term.value)),
            "literal" | "typed-literal" => Ok(RdfTerm::Literal {
                value: term.value,
                language: term.lang,
                datatype: term.datatype,
            }),
            other => Err(ProtocolError::result_parse(format!(
                "unknown term type '{other}'"
            ))),
        }
    }
}

/// Read a boolean result in either JSON or `text/boolean` form.
pub fn parse_boolean(content_type: Option<&str>, body: &str) -> Result<bool> {
    let is_text = content_type.is_some_and(|ct| ct.starts_with(TEXT_BOOLEAN));
    if is_text || !body.trim_start().starts_with('{') {
        return match body.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(ProtocolError::result_parse(format!(
                "expected boolean result, got '{other}'"
            ))),
        };
    }
    let doc: JsonDocument = serde_json::from_str(body)?;
    doc.boolean
        .ok_or_else(|| ProtocolError::result_parse("JSON result has no 'boolean' member"))
}

/// Streamed rows of a SELECT result.
#[derive(Debug)]
pub struct TupleQueryResult {
    vars: Vec<String>,
    rows: mpsc::Receiver<Result<BindingSet>>,
}

impl TupleQueryResult {
    /// Parse `body` on the blocking pool.
    pub(crate) async fn spawn(body: Bytes) -> Result<Self> {
        let (vars_tx, vars_rx) = oneshot::channel();
        let (tx, rows) = mpsc::channel(RESULT_CHANNEL_CAPACITY);

        tokio::task::spawn_blocking(move || {
            let doc: JsonDocument = match serde_json::from_slice(&body) {
                Ok(doc) => doc,
                Err(e) => {
                    let _ = vars_tx.send(Err(ProtocolError::from(e)));
                    return;
                }
            };
            let Some(results) = doc.results else {
                let _ = vars_tx.send(Err(ProtocolError::result_parse(
                    "JSON result has no 'results' member",
                )));
                return;
            };
            if vars_tx.send(Ok(doc.head.vars.clone())).is_err() {
                return;
            }

            let mut count = 0usize;
            for solution in results.bindings {
                let row = to_binding_set(&doc.head.vars, solution);
                if tx.blocking_send(row).is_err() {
                    trace!(count, "tuple result dropped by caller");
                    return;
                }
                count += 1;
            }
            debug!(rows = count, "parsed tuple result");
        });

        let vars = vars_rx
            .await
            .map_err(|_| ProtocolError::result_parse("result parser stopped"))??;
        Ok(Self { vars, rows })
    }

    /// Projected variable names, in result order.
    pub fn vars(&self) -> &[String] {
        &self.vars
    }

    pub async fn next(&mut self) -> Option<Result<BindingSet>> {
        self.rows.recv().await
    }

    /// Drain the remaining rows.
    pub async fn collect_all(mut self) -> Result<Vec<BindingSet>> {
        let mut out = Vec::new();
        while let Some(row) = self.next().await {
            out.push(row?);
        }
        Ok(out)
    }
}

impl Stream for TupleQueryResult {
    type Item = Result<BindingSet>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().rows.poll_recv(cx)
    }
}

fn to_binding_set(vars: &[String], mut solution: HashMap<String, JsonTerm>) -> Result<BindingSet> {
    let mut bindings = Vec::with_capacity(solution.len());
    for var in vars {
        if let Some(term) = solution.remove(var) {
            bindings.push((var.clone(), RdfTerm::try_from(term)?));
        }
    }
    // variables bound but missing from head.vars
    let mut extra: Vec<_> = solution.into_iter().collect();
    extra.sort_by(|a, b| a.0.cmp(&b.0));
    for (var, term) in extra {
        bindings.push((var, RdfTerm::try_from(term)?));
    }
    Ok(BindingSet { bindings })
}

/// Streamed triples of a CONSTRUCT or DESCRIBE result.
#[derive(Debug)]
pub struct GraphQueryResult {
    triples: mpsc::Receiver<Result<RdfTriple>>,
}

impl GraphQueryResult {
    /// Parse N-Triples `body` on the blocking pool.
    pub(crate) fn spawn(body: Bytes) -> Self {
        let (tx, triples) = mpsc::channel(RESULT_CHANNEL_CAPACITY);

        tokio::task::spawn_blocking(move || {
            let mut count = 0usize;
            let parsed = NTriplesParser::new(body.as_ref()).parse_all(&mut |t: Triple<'_>| -> Result<()> {
                let triple = RdfTriple {
                    subject: subject_term(t.subject)?,
                    predicate: t.predicate.iri.to_string(),
                    object: object_term(t.object)?,
                };
                tx.blocking_send(Ok(triple))
                    .map_err(|_| ProtocolError::result_parse("graph result dropped by caller"))?;
                count += 1;
                Ok(())
            });
            match parsed {
                Ok(()) => debug!(triples = count, "parsed graph result"),
                Err(e) => {
                    trace!(error = %e, "graph result parse stopped");
                    let _ = tx.blocking_send(Err(e));
                }
            }
        });

        Self { triples }
    }

    pub async fn next(&mut self) -> Option<Result<RdfTriple>> {
        self.triples.recv().await
    }

    pub async fn collect_all(mut self) -> Result<Vec<RdfTriple>> {
        let mut out = Vec::new();
        while let Some(triple) = self.next().await {
            out.push(triple?);
        }
        Ok(out)
    }
}

impl Stream for GraphQueryResult {
    type Item = Result<RdfTriple>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().triples.poll_recv(cx)
    }
}

fn subject_term(subject: Subject<'_>) -> Result<RdfTerm> {
    match subject {
        Subject::NamedNode(n) => Ok(RdfTerm::Iri(n.iri.to_string())),
        Subject::BlankNode(b) => Ok(RdfTerm::BlankNode(b.id.to_string())),
        Subject::Triple(_) => Err(ProtocolError::result_parse(
            "quoted triples are not supported",
        )),
    }
}

fn object_term(object: Term<'_>) -> Result<RdfTerm> {
    match object {
        Term::NamedNode(n) => Ok(RdfTerm::Iri(n.iri.to_string())),
        Term::BlankNode(b) => Ok(RdfTerm::BlankNode(b.id.to_string())),
        Term::Literal(Literal::Simple { value }) => Ok(RdfTerm::literal(value)),
        Term::Literal(Literal::LanguageTaggedString { value, language }) => Ok(RdfTerm::Literal {
            value: value.to_string(),
            language: Some(language.to_string()),
            datatype: None,
        }),
        Term::Literal(Literal::Typed { value, datatype }) => Ok(RdfTerm::Literal {
            value: value.to_string(),
            language: None,
            datatype: Some(datatype.iri.to_string()),
        }),
        Term::Triple(_) => Err(ProtocolError::result_parse(
            "quoted triples are not supported",
        )),
    }
}
