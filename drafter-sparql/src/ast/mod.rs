//! SPARQL Abstract Syntax Tree types.
//!
//! This module contains the typed AST representation of SPARQL queries
//! and updates. All nodes carry source spans; nodes built in code use
//! `SourceSpan::point(0)` or any span the caller finds useful.
//!
//! ## Module Structure
//!
//! - [`term`]: Terms that can appear in patterns (variables, IRIs, literals, blank nodes)
//! - [`pattern`]: Graph patterns (BGP, OPTIONAL, UNION, FILTER, etc.)
//! - [`path`]: Property path expressions (transitive, inverse, sequence, etc.)
//! - [`expr`]: Expressions (arithmetic, comparison, boolean, function calls)
//! - [`query`]: Query forms (SELECT, CONSTRUCT, ASK, DESCRIBE) and solution modifiers
//! - [`update`]: Update operations (INSERT DATA, DELETE DATA, DELETE WHERE, etc.)
//!
//! ## Example
//!
//! ```
//! use drafter_sparql::ast::*;
//! use drafter_sparql::SourceSpan;
//!
//! let span = SourceSpan::point(0);
//! let triple = TriplePattern::new(
//!     Term::Var(Var::new("s", span)),
//!     Term::Iri(Iri::full("http://example.org/name", span)),
//!     Term::Var(Var::new("name", span)),
//!     span,
//! );
//! let query = SelectQuery::new(
//!     SelectClause::star(span),
//!     WhereClause::new(
//!         GraphPattern::group(vec![GraphPattern::triples(vec![triple], span)], span),
//!         true,
//!         span,
//!     ),
//!     SolutionModifiers::new(),
//!     span,
//! );
//! let ast = SparqlAst::new(Prologue::new(), QueryBody::Select(query), span);
//! assert_eq!(
//!     ast.to_string(),
//!     "SELECT * WHERE { ?s <http://example.org/name> ?name . }"
//! );
//! ```

pub mod expr;
pub mod path;
pub mod pattern;
pub mod query;
pub mod term;
pub mod update;

// Re-export commonly used types at the ast module level
pub use expr::{AggregateFunction, BinaryOp, Expression, FunctionName, UnaryOp};
pub use path::{NegatedPredicate, PropertyPath};
pub use pattern::{
    BasicPattern, Binding, DatasetRef, GraphPattern, TriplePath, TriplePattern, ValuesBlock,
};
pub use query::{
    AskQuery, BaseDecl, ConstructQuery, ConstructTemplate, DatasetClause, DescribeQuery,
    DescribeTarget, GroupByClause, GroupCondition, HavingClause, LimitClause, OffsetClause,
    OrderByClause, OrderCondition, OrderDirection, OrderExpr, PrefixDecl, Prologue, QueryBody,
    SelectClause, SelectModifier, SelectQuery, SelectVariable, SelectVariables, SolutionModifiers,
    SparqlAst, VarOrIri, WhereClause,
};
pub use term::{BlankNode, BlankNodeValue, Iri, IriValue, Literal, LiteralValue, Term, Var};
pub use update::{
    DeleteData, DeleteWhere, InsertData, Modify, QuadBlock, QuadPattern, UpdateOperation,
    UpdateRequest, UsingClause,
};
