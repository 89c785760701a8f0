//! SPARQL Update AST types.
//!
//! An [`UpdateRequest`] is an ordered sequence of operations sharing one
//! prologue:
//! - INSERT DATA
//! - DELETE DATA
//! - DELETE WHERE
//! - INSERT/DELETE with WHERE (Modify operation)
//!
//! Quad templates are sequences of [`QuadBlock`]s: plain triples for the
//! default graph and `GRAPH name { ... }` blocks for named graphs.

use super::pattern::{BasicPattern, GraphPattern};
use super::term::{Iri, Term};
use crate::span::SourceSpan;

/// A SPARQL Update request.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateRequest {
    /// Operations, applied in order
    pub operations: Vec<UpdateOperation>,
    /// Source span
    pub span: SourceSpan,
}

impl UpdateRequest {
    /// Create an update request.
    pub fn new(operations: Vec<UpdateOperation>, span: SourceSpan) -> Self {
        Self { operations, span }
    }
}

/// A SPARQL Update operation.
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateOperation {
    /// INSERT DATA { quads }
    InsertData(InsertData),
    /// DELETE DATA { quads }
    DeleteData(DeleteData),
    /// DELETE WHERE { quads }
    DeleteWhere(DeleteWhere),
    /// INSERT/DELETE with WHERE clause (Modify operation)
    /// Boxed to reduce enum size
    Modify(Box<Modify>),
}

impl UpdateOperation {
    /// Get the source span.
    pub fn span(&self) -> SourceSpan {
        match self {
            UpdateOperation::InsertData(op) => op.span,
            UpdateOperation::DeleteData(op) => op.span,
            UpdateOperation::DeleteWhere(op) => op.span,
            UpdateOperation::Modify(op) => op.span,
        }
    }
}

/// INSERT DATA operation.
///
/// ```sparql
/// INSERT DATA { <http://example.org/s> <http://example.org/p> "value" }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct InsertData {
    /// The ground quads to insert
    pub data: QuadPattern,
    /// Source span
    pub span: SourceSpan,
}

impl InsertData {
    /// Create a new INSERT DATA operation.
    pub fn new(data: QuadPattern, span: SourceSpan) -> Self {
        Self { data, span }
    }
}

/// DELETE DATA operation.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteData {
    /// The ground quads to delete
    pub data: QuadPattern,
    /// Source span
    pub span: SourceSpan,
}

impl DeleteData {
    /// Create a new DELETE DATA operation.
    pub fn new(data: QuadPattern, span: SourceSpan) -> Self {
        Self { data, span }
    }
}

/// DELETE WHERE operation.
///
/// ```sparql
/// DELETE WHERE { ?s ex:obsolete ?o }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteWhere {
    /// The pattern to match and delete
    pub pattern: QuadPattern,
    /// Source span
    pub span: SourceSpan,
}

impl DeleteWhere {
    /// Create a new DELETE WHERE operation.
    pub fn new(pattern: QuadPattern, span: SourceSpan) -> Self {
        Self { pattern, span }
    }
}

/// Modify operation (INSERT/DELETE with WHERE).
///
/// ```sparql
/// WITH <http://example.org/graph>
/// DELETE { ?s ex:old ?o }
/// INSERT { ?s ex:new ?o }
/// WHERE { ?s ex:old ?o }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Modify {
    /// WITH clause specifying the graph to modify
    pub with_iri: Option<Iri>,
    /// USING / USING NAMED clauses for the WHERE pattern
    pub using: Option<UsingClause>,
    /// DELETE clause (optional)
    pub delete_clause: Option<QuadPattern>,
    /// INSERT clause (optional)
    pub insert_clause: Option<QuadPattern>,
    /// WHERE pattern
    pub where_pattern: GraphPattern,
    /// Source span
    pub span: SourceSpan,
}

impl Modify {
    /// Create a new Modify operation.
    pub fn new(
        delete_clause: Option<QuadPattern>,
        insert_clause: Option<QuadPattern>,
        where_pattern: GraphPattern,
        span: SourceSpan,
    ) -> Self {
        Self {
            with_iri: None,
            using: None,
            delete_clause,
            insert_clause,
            where_pattern,
            span,
        }
    }

    /// Set the WITH clause.
    pub fn with_graph(mut self, iri: Iri) -> Self {
        self.with_iri = Some(iri);
        self
    }

    /// Set the USING clause.
    pub fn with_using(mut self, using: UsingClause) -> Self {
        self.using = Some(using);
        self
    }
}

/// Quad template or ground quad data.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadPattern {
    pub blocks: Vec<QuadBlock>,
    /// Source span (including braces)
    pub span: SourceSpan,
}

impl QuadPattern {
    /// Create a new quad pattern.
    pub fn new(blocks: Vec<QuadBlock>, span: SourceSpan) -> Self {
        Self { blocks, span }
    }

    /// A quad pattern holding only default-graph triples.
    pub fn default_graph(bgp: BasicPattern) -> Self {
        let span = bgp.span;
        Self {
            blocks: vec![QuadBlock::Triples(bgp)],
            span,
        }
    }
}

/// One block of a quad pattern.
#[derive(Clone, Debug, PartialEq)]
pub enum QuadBlock {
    /// Triples in the default graph
    Triples(BasicPattern),
    /// `GRAPH name { triples }`
    Graph {
        name: Term,
        triples: BasicPattern,
        span: SourceSpan,
    },
}

/// USING clause for Modify operations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsingClause {
    /// Default graphs (USING <iri>)
    pub default_graphs: Vec<Iri>,
    /// Named graphs (USING NAMED <iri>)
    pub named_graphs: Vec<Iri>,
    /// Source span
    pub span: SourceSpan,
}

impl UsingClause {
    /// Create a new USING clause with a default graph.
    pub fn default_graph(iri: Iri, span: SourceSpan) -> Self {
        Self {
            default_graphs: vec![iri],
            named_graphs: Vec::new(),
            span,
        }
    }

    /// Create a new USING NAMED clause.
    pub fn named_graph(iri: Iri, span: SourceSpan) -> Self {
        Self {
            default_graphs: Vec::new(),
            named_graphs: vec![iri],
            span,
        }
    }
}
