//! SPARQL Property Path types.
//!
//! Paths are kept in their algebraic form: a parenthesised `(p)` in the
//! source is not a node of its own, and `^iri` on a bare IRI is a
//! [`PropertyPath::ReverseLink`] rather than an inverse of a link.
//!
//! | Syntax | Variant |
//! |--------|---------|
//! | `iri` | `Link` |
//! | `^iri` | `ReverseLink` |
//! | `!(iri\|^iri...)` | `NegatedSet` |
//! | `^(path)` | `Inverse` |
//! | `path{n,m}` | `Mod` |
//! | `path{n}` | `FixedLength` |
//! | `distinct(path)` | `Distinct` |
//! | `multi(path)` | `Multi` |
//! | `shortest(path)` | `Shortest` |
//! | `path*` / `path+` / `path?` | `ZeroOrMore` / `OneOrMore` / `ZeroOrOne` |
//! | `p\|q` / `p/q` | `Alternative` / `Sequence` |
//!
//! The `distinct`, `multi` and `shortest` forms and the `{n,m}` repetition
//! counts are extensions accepted by common SPARQL engines.

use super::term::Iri;
use crate::span::SourceSpan;

/// A property path expression in SPARQL.
///
/// Property paths can appear in the predicate position of a triple pattern.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyPath {
    /// Simple predicate
    Link(Iri),

    /// Reversed predicate: `^iri`
    ReverseLink(Iri),

    /// Negated property set: `!iri` or `!(iri1|^iri2|...)`
    NegatedSet {
        members: Vec<NegatedPredicate>,
        span: SourceSpan,
    },

    /// Inverse of a composite path: `^(path)`
    Inverse {
        path: Box<PropertyPath>,
        span: SourceSpan,
    },

    /// Bounded repetition: `path{min,max}`, either bound may be open
    Mod {
        path: Box<PropertyPath>,
        min: Option<u64>,
        max: Option<u64>,
        span: SourceSpan,
    },

    /// Exact repetition: `path{count}`
    FixedLength {
        path: Box<PropertyPath>,
        count: u64,
        span: SourceSpan,
    },

    /// `distinct(path)`
    Distinct {
        path: Box<PropertyPath>,
        span: SourceSpan,
    },

    /// `multi(path)`
    Multi {
        path: Box<PropertyPath>,
        span: SourceSpan,
    },

    /// `shortest(path)`
    Shortest {
        path: Box<PropertyPath>,
        span: SourceSpan,
    },

    /// Zero or more: `path*`
    ZeroOrMore {
        path: Box<PropertyPath>,
        span: SourceSpan,
    },

    /// One or more: `path+`
    OneOrMore {
        path: Box<PropertyPath>,
        span: SourceSpan,
    },

    /// Zero or one: `path?`
    ZeroOrOne {
        path: Box<PropertyPath>,
        span: SourceSpan,
    },

    /// Alternative path: `path1|path2`
    Alternative {
        left: Box<PropertyPath>,
        right: Box<PropertyPath>,
        span: SourceSpan,
    },

    /// Sequence path: `path1/path2`
    Sequence {
        left: Box<PropertyPath>,
        right: Box<PropertyPath>,
        span: SourceSpan,
    },
}

impl PropertyPath {
    /// Get the source span of this path.
    pub fn span(&self) -> SourceSpan {
        match self {
            PropertyPath::Link(iri) | PropertyPath::ReverseLink(iri) => iri.span,
            PropertyPath::NegatedSet { span, .. }
            | PropertyPath::Inverse { span, .. }
            | PropertyPath::Mod { span, .. }
            | PropertyPath::FixedLength { span, .. }
            | PropertyPath::Distinct { span, .. }
            | PropertyPath::Multi { span, .. }
            | PropertyPath::Shortest { span, .. }
            | PropertyPath::ZeroOrMore { span, .. }
            | PropertyPath::OneOrMore { span, .. }
            | PropertyPath::ZeroOrOne { span, .. }
            | PropertyPath::Alternative { span, .. }
            | PropertyPath::Sequence { span, .. } => *span,
        }
    }

    /// Check if this is a single (possibly reversed) predicate.
    pub fn is_simple(&self) -> bool {
        matches!(self, PropertyPath::Link(_) | PropertyPath::ReverseLink(_))
    }

    /// Create a simple IRI path.
    pub fn link(iri: Iri) -> Self {
        PropertyPath::Link(iri)
    }

    /// Create an inverse path.
    pub fn inverse(path: PropertyPath, span: SourceSpan) -> Self {
        PropertyPath::Inverse {
            path: Box::new(path),
            span,
        }
    }

    /// Create a sequence path.
    pub fn sequence(left: PropertyPath, right: PropertyPath, span: SourceSpan) -> Self {
        PropertyPath::Sequence {
            left: Box::new(left),
            right: Box::new(right),
            span,
        }
    }

    /// Create an alternative path.
    pub fn alternative(left: PropertyPath, right: PropertyPath, span: SourceSpan) -> Self {
        PropertyPath::Alternative {
            left: Box::new(left),
            right: Box::new(right),
            span,
        }
    }

    /// Create a zero-or-more path.
    pub fn zero_or_more(path: PropertyPath, span: SourceSpan) -> Self {
        PropertyPath::ZeroOrMore {
            path: Box::new(path),
            span,
        }
    }

    /// Create a one-or-more path.
    pub fn one_or_more(path: PropertyPath, span: SourceSpan) -> Self {
        PropertyPath::OneOrMore {
            path: Box::new(path),
            span,
        }
    }

    /// Create a zero-or-one path.
    pub fn zero_or_one(path: PropertyPath, span: SourceSpan) -> Self {
        PropertyPath::ZeroOrOne {
            path: Box::new(path),
            span,
        }
    }

    /// Create a bounded repetition path.
    pub fn repeat(path: PropertyPath, min: Option<u64>, max: Option<u64>, span: SourceSpan) -> Self {
        PropertyPath::Mod {
            path: Box::new(path),
            min,
            max,
            span,
        }
    }

    /// Create an exact repetition path.
    pub fn fixed_length(path: PropertyPath, count: u64, span: SourceSpan) -> Self {
        PropertyPath::FixedLength {
            path: Box::new(path),
            count,
            span,
        }
    }
}

/// A member of a negated property set.
#[derive(Clone, Debug, PartialEq)]
pub enum NegatedPredicate {
    /// Forward predicate
    Forward(Iri),
    /// Inverse predicate `^iri`
    Inverse(Iri),
}

impl NegatedPredicate {
    /// Get the source span.
    pub fn span(&self) -> SourceSpan {
        match self {
            NegatedPredicate::Forward(iri) | NegatedPredicate::Inverse(iri) => iri.span,
        }
    }

    /// The predicate IRI, regardless of direction.
    pub fn iri(&self) -> &Iri {
        match self {
            NegatedPredicate::Forward(iri) | NegatedPredicate::Inverse(iri) => iri,
        }
    }
}
