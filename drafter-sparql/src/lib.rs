//! # Drafter SPARQL
//!
//! SPARQL 1.1 syntax trees for Drafter, with:
//! - URI rewriting from live graph identifiers to their draft counterparts
//! - A read-only flattening collector for inspecting tree shape
//! - Canonical SPARQL text output for every node (`Display`)
//!
//! ## Architecture
//!
//! Trees are built by the caller (or a parser upstream) as [`SparqlAst`]
//! values carrying [`SourceSpan`]s. Rewriting never mutates its input:
//!
//! 1. **Rewrite**: `SparqlAst` + [`UriMapping`] -> new `SparqlAst`
//! 2. **Inspect**: [`flatten`] / [`node_kinds`] list nodes in pre-order
//! 3. **Write**: `ast.to_string()` renders SPARQL text for the endpoint
//!
//! ## Quick Start
//!
//! ```
//! use drafter_sparql::ast::*;
//! use drafter_sparql::{node_kinds, rewrite_query, SourceSpan, UriMapping};
//!
//! let span = SourceSpan::point(0);
//! let pattern = GraphPattern::graph(
//!     Term::Iri(Iri::full("http://live/g", span)),
//!     GraphPattern::group(vec![], span),
//!     span,
//! );
//! let query = SelectQuery::new(
//!     SelectClause::star(span),
//!     WhereClause::new(GraphPattern::group(vec![pattern], span), true, span),
//!     SolutionModifiers::new(),
//!     span,
//! );
//! let ast = SparqlAst::new(Prologue::new(), QueryBody::Select(query), span);
//!
//! let mapping = UriMapping::new().with("http://live/g", "http://draft/g");
//! let draft = rewrite_query(&mapping, &ast).unwrap();
//!
//! assert_eq!(draft.to_string(), "SELECT * WHERE { GRAPH <http://draft/g> { } }");
//! assert_eq!(node_kinds(&draft), node_kinds(&ast));
//! ```

pub mod ast;
pub mod collect;
pub mod rewrite;
pub mod span;
pub mod vocab;
mod write;

// Re-exports
pub use ast::{Prologue, QueryBody, SparqlAst, UpdateOperation};
pub use collect::{flatten, node_kinds, Node, NodeKind};
pub use rewrite::{rewrite_ast, rewrite_query, rewrite_update, RewriteError, Rewriter, UriMapping};
pub use span::SourceSpan;
