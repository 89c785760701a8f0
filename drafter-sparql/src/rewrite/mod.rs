//! Live-to-draft IRI rewriting.
//!
//! Rewriting builds a new tree with the same shape as its input: every node
//! kind maps to the same kind, child order and spans are kept, and only IRIs
//! in term positions change. The rules:
//!
//! - an IRI is replaced by its entry in the [`UriMapping`], if any
//! - string literals (simple, language-tagged, `xsd:string`) have their
//!   lexical value looked up the same way; the tag or datatype is kept
//! - variables, blank nodes and the `[]` wildcard are never changed
//! - `SERVICE` endpoints and bodies keep the IRIs they denote
//! - extension function names and literal datatypes keep the IRIs they denote
//! - relative IRIs are resolved against BASE before lookup
//!
//! PREFIX declarations are rewritten first, by exact match on the whole
//! namespace. A prefixed name is then expanded with the original prologue
//! and mapped; it keeps its prefixed form if the rewritten prologue still
//! spells the mapped IRI the same way, and becomes a full `<iri>` otherwise.
//! Positions that are never substituted go through the same respelling, so
//! a rewritten PREFIX cannot change what they denote.
//!
//! [`Rewriter`] carries the mapping and both prologues; its `rewrite_*`
//! methods are spread across the submodules by node family.

mod error;
mod expr;
mod mapping;
mod path;
mod pattern;
mod query;
mod term;
mod update;

pub use error::{Result, RewriteError};
pub use mapping::UriMapping;

use crate::ast::{PrefixDecl, Prologue, QueryBody, SparqlAst};
use tracing::debug;

/// Rewriting context for one query or update.
///
/// Built from the input prologue; node-level methods can be used directly
/// on fragments that resolve prefixes against that prologue.
#[derive(Debug)]
pub struct Rewriter<'a> {
    mapping: &'a UriMapping,
    /// Prologue of the input, used to expand prefixed names
    source: &'a Prologue,
    /// Prologue of the output
    target: Prologue,
    /// Whether mapping lookups apply; off inside SERVICE
    substitute: bool,
}

impl<'a> Rewriter<'a> {
    /// Create a rewriter for nodes declared under `prologue`.
    pub fn new(mapping: &'a UriMapping, prologue: &'a Prologue) -> Self {
        Self {
            mapping,
            source: prologue,
            target: rewrite_prologue(mapping, prologue),
            substitute: true,
        }
    }

    /// A rewriter over the same prologues that never substitutes.
    pub(super) fn passthrough(&self) -> Rewriter<'a> {
        Rewriter {
            mapping: self.mapping,
            source: self.source,
            target: self.target.clone(),
            substitute: false,
        }
    }

    /// The rewritten prologue.
    pub fn prologue(&self) -> &Prologue {
        &self.target
    }

    /// Consume the rewriter, returning the rewritten prologue.
    pub fn into_prologue(self) -> Prologue {
        self.target
    }
}

/// Rewrite PREFIX namespaces by exact match. BASE is kept as written.
fn rewrite_prologue(mapping: &UriMapping, prologue: &Prologue) -> Prologue {
    Prologue {
        base: prologue.base.clone(),
        prefixes: prologue
            .prefixes
            .iter()
            .map(|decl| PrefixDecl {
                prefix: decl.prefix.clone(),
                iri: mapping.get(&decl.iri).unwrap_or(&decl.iri).clone(),
                span: decl.span,
            })
            .collect(),
    }
}

/// Rewrite a query or an update, whichever `ast` holds.
pub fn rewrite_ast(mapping: &UriMapping, ast: &SparqlAst) -> Result<SparqlAst> {
    debug!(
        form = ast.body.form_name(),
        substitutions = mapping.len(),
        "rewriting SPARQL"
    );
    let rewriter = Rewriter::new(mapping, &ast.prologue);
    let body = match &ast.body {
        QueryBody::Select(q) => QueryBody::Select(rewriter.rewrite_select_query(q)?),
        QueryBody::Construct(q) => QueryBody::Construct(rewriter.rewrite_construct_query(q)?),
        QueryBody::Ask(q) => QueryBody::Ask(rewriter.rewrite_ask_query(q)?),
        QueryBody::Describe(q) => QueryBody::Describe(rewriter.rewrite_describe_query(q)?),
        QueryBody::Update(u) => QueryBody::Update(rewriter.rewrite_update_request(u)?),
    };
    Ok(SparqlAst {
        prologue: rewriter.into_prologue(),
        body,
        span: ast.span,
    })
}

/// Rewrite a SELECT, CONSTRUCT, ASK or DESCRIBE query.
///
/// Fails with [`RewriteError::UnexpectedBody`] if `ast` is an update.
pub fn rewrite_query(mapping: &UriMapping, ast: &SparqlAst) -> Result<SparqlAst> {
    if ast.is_update() {
        return Err(RewriteError::UnexpectedBody {
            expected: "query",
            found: ast.body.form_name(),
            span: ast.span,
        });
    }
    rewrite_ast(mapping, ast)
}

/// Rewrite a SPARQL Update request.
///
/// Fails with [`RewriteError::UnexpectedBody`] if `ast` is a query.
pub fn rewrite_update(mapping: &UriMapping, ast: &SparqlAst) -> Result<SparqlAst> {
    if !ast.is_update() {
        return Err(RewriteError::UnexpectedBody {
            expected: "update",
            found: ast.body.form_name(),
            span: ast.span,
        });
    }
    rewrite_ast(mapping, ast)
}
