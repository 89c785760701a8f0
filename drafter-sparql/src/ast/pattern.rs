//! Graph pattern types.
//!
//! A [`GraphPattern`] is one element of a WHERE clause. Groups hold an
//! ordered list of elements; the order is significant and is preserved by
//! every transformation in this crate.

use super::expr::Expression;
use super::path::PropertyPath;
use super::query::SelectQuery;
use super::term::{Term, Var};
use crate::span::SourceSpan;
use std::sync::Arc;

/// A single triple pattern: subject, predicate, object.
#[derive(Clone, Debug, PartialEq)]
pub struct TriplePattern {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
    /// Source span
    pub span: SourceSpan,
}

impl TriplePattern {
    /// Create a new triple pattern.
    pub fn new(subject: Term, predicate: Term, object: Term, span: SourceSpan) -> Self {
        Self {
            subject,
            predicate,
            object,
            span,
        }
    }
}

/// A triple pattern whose predicate may be a property path.
#[derive(Clone, Debug, PartialEq)]
pub enum TriplePath {
    /// Plain triple
    Triple(TriplePattern),
    /// `subject path object`
    Path {
        subject: Term,
        path: PropertyPath,
        object: Term,
        span: SourceSpan,
    },
}

impl TriplePath {
    /// Get the source span.
    pub fn span(&self) -> SourceSpan {
        match self {
            TriplePath::Triple(t) => t.span,
            TriplePath::Path { span, .. } => *span,
        }
    }
}

/// An ordered list of triple patterns.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicPattern {
    pub triples: Vec<TriplePattern>,
    /// Source span
    pub span: SourceSpan,
}

impl BasicPattern {
    /// Create a basic pattern.
    pub fn new(triples: Vec<TriplePattern>, span: SourceSpan) -> Self {
        Self { triples, span }
    }

    /// Whether the pattern holds no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

/// One row of a VALUES block.
///
/// Entries are kept in the order they were written. A variable of the
/// enclosing block with no entry is unbound (`UNDEF`) in this row.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    pub entries: Vec<(Var, Term)>,
    /// Source span
    pub span: SourceSpan,
}

impl Binding {
    /// Create a binding row.
    pub fn new(entries: Vec<(Var, Term)>, span: SourceSpan) -> Self {
        Self { entries, span }
    }

    /// The value bound to `var` in this row, if any.
    pub fn get(&self, var: &str) -> Option<&Term> {
        self.entries
            .iter()
            .find(|(v, _)| v.name.as_ref() == var)
            .map(|(_, term)| term)
    }
}

/// A VALUES block: a variable list and the rows binding them.
#[derive(Clone, Debug, PartialEq)]
pub struct ValuesBlock {
    pub vars: Vec<Var>,
    pub rows: Vec<Binding>,
    /// Source span
    pub span: SourceSpan,
}

impl ValuesBlock {
    /// Create a VALUES block.
    pub fn new(vars: Vec<Var>, rows: Vec<Binding>, span: SourceSpan) -> Self {
        Self { vars, rows, span }
    }
}

/// Reference to a dataset supplied alongside the query rather than
/// written in it.
///
/// The reference is carried through transformations untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetRef {
    pub id: Arc<str>,
}

impl DatasetRef {
    /// Create a dataset reference.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self {
            id: Arc::from(id.as_ref()),
        }
    }
}

/// A graph pattern element.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphPattern {
    /// Basic graph pattern
    Triples(BasicPattern),

    /// Triple patterns where predicates may be property paths
    Paths {
        triples: Vec<TriplePath>,
        span: SourceSpan,
    },

    /// `FILTER (expr)`
    Filter { expr: Expression, span: SourceSpan },

    /// `BIND (expr AS ?var)`
    Bind {
        expr: Expression,
        var: Var,
        span: SourceSpan,
    },

    /// `LET (?var := expr)`
    Assign {
        var: Var,
        expr: Expression,
        span: SourceSpan,
    },

    /// Inline `VALUES` data
    Values(ValuesBlock),

    /// `{ ... } UNION { ... } UNION ...`
    Union {
        branches: Vec<GraphPattern>,
        span: SourceSpan,
    },

    /// `OPTIONAL { ... }`
    Optional {
        pattern: Box<GraphPattern>,
        span: SourceSpan,
    },

    /// `{ ... }`
    Group {
        elements: Vec<GraphPattern>,
        span: SourceSpan,
    },

    /// `GRAPH name { ... }`
    Graph {
        name: Term,
        pattern: Box<GraphPattern>,
        span: SourceSpan,
    },

    /// Pattern evaluated against a caller-supplied dataset
    Dataset {
        dataset: DatasetRef,
        pattern: Box<GraphPattern>,
        span: SourceSpan,
    },

    /// `EXISTS { ... }` as a pattern element
    Exists {
        pattern: Box<GraphPattern>,
        span: SourceSpan,
    },

    /// `NOT EXISTS { ... }` as a pattern element
    NotExists {
        pattern: Box<GraphPattern>,
        span: SourceSpan,
    },

    /// `MINUS { ... }`
    Minus {
        pattern: Box<GraphPattern>,
        span: SourceSpan,
    },

    /// Nested `{ SELECT ... }`
    SubSelect {
        query: Box<SelectQuery>,
        span: SourceSpan,
    },

    /// `SERVICE [SILENT] endpoint { ... }`
    Service {
        silent: bool,
        endpoint: Term,
        pattern: Box<GraphPattern>,
        span: SourceSpan,
    },
}

impl GraphPattern {
    /// Get the source span of this pattern.
    pub fn span(&self) -> SourceSpan {
        match self {
            GraphPattern::Triples(bgp) => bgp.span,
            GraphPattern::Values(values) => values.span,
            GraphPattern::Paths { span, .. }
            | GraphPattern::Filter { span, .. }
            | GraphPattern::Bind { span, .. }
            | GraphPattern::Assign { span, .. }
            | GraphPattern::Union { span, .. }
            | GraphPattern::Optional { span, .. }
            | GraphPattern::Group { span, .. }
            | GraphPattern::Graph { span, .. }
            | GraphPattern::Dataset { span, .. }
            | GraphPattern::Exists { span, .. }
            | GraphPattern::NotExists { span, .. }
            | GraphPattern::Minus { span, .. }
            | GraphPattern::SubSelect { span, .. }
            | GraphPattern::Service { span, .. } => *span,
        }
    }

    /// Create a group pattern.
    pub fn group(elements: Vec<GraphPattern>, span: SourceSpan) -> Self {
        GraphPattern::Group { elements, span }
    }

    /// Create a basic graph pattern element.
    pub fn triples(triples: Vec<TriplePattern>, span: SourceSpan) -> Self {
        GraphPattern::Triples(BasicPattern::new(triples, span))
    }

    /// Create an OPTIONAL pattern.
    pub fn optional(pattern: GraphPattern, span: SourceSpan) -> Self {
        GraphPattern::Optional {
            pattern: Box::new(pattern),
            span,
        }
    }

    /// Create a GRAPH pattern.
    pub fn graph(name: Term, pattern: GraphPattern, span: SourceSpan) -> Self {
        GraphPattern::Graph {
            name,
            pattern: Box::new(pattern),
            span,
        }
    }

    /// Create a MINUS pattern.
    pub fn minus(pattern: GraphPattern, span: SourceSpan) -> Self {
        GraphPattern::Minus {
            pattern: Box::new(pattern),
            span,
        }
    }

    /// Create a FILTER element.
    pub fn filter(expr: Expression, span: SourceSpan) -> Self {
        GraphPattern::Filter { expr, span }
    }

    /// Check if this is a group.
    pub fn is_group(&self) -> bool {
        matches!(self, GraphPattern::Group { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::term::Iri;

    fn test_span() -> SourceSpan {
        SourceSpan::new(0, 10)
    }

    fn triple() -> TriplePattern {
        TriplePattern::new(
            Term::Var(Var::new("s", test_span())),
            Term::Iri(Iri::full("http://example.org/p", test_span())),
            Term::Var(Var::new("o", test_span())),
            test_span(),
        )
    }

    #[test]
    fn test_group_span() {
        let group = GraphPattern::group(
            vec![GraphPattern::triples(vec![triple()], SourceSpan::new(2, 8))],
            SourceSpan::new(0, 10),
        );
        assert!(group.is_group());
        assert_eq!(group.span(), SourceSpan::new(0, 10));
    }

    #[test]
    fn test_binding_lookup() {
        let row = Binding::new(
            vec![(
                Var::new("x", test_span()),
                Term::Iri(Iri::full("http://example.org/a", test_span())),
            )],
            test_span(),
        );
        assert!(row.get("x").is_some());
        assert!(row.get("y").is_none());
    }

    #[test]
    fn test_triple_path_span() {
        let path = TriplePath::Path {
            subject: Term::Var(Var::new("s", test_span())),
            path: PropertyPath::link(Iri::full("http://example.org/p", test_span())),
            object: Term::Var(Var::new("o", test_span())),
            span: SourceSpan::new(3, 9),
        };
        assert_eq!(path.span(), SourceSpan::new(3, 9));
        assert_eq!(TriplePath::Triple(triple()).span(), test_span());
    }
}
