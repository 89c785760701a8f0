//! Leaf terms: variables, IRIs, literals, blank nodes and `[]`.
//!
//! IRIs stay in the spelling they were written in. Whether `ex:p` and
//! `<http://example.org/p>` denote the same resource depends on the prologue,
//! so expansion is left to the rewriter.

use crate::span::SourceSpan;
use crate::vocab;
use std::sync::Arc;

/// `?name` or `$name`. The sigil is not part of `name`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Var {
    pub name: Arc<str>,
    pub span: SourceSpan,
}

impl Var {
    pub fn new(name: impl AsRef<str>, span: SourceSpan) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
            span,
        }
    }
}

/// An IRI as written: `<...>` or `prefix:local`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Iri {
    pub value: IriValue,
    pub span: SourceSpan,
}

impl Iri {
    /// `<iri>`. Relative references are allowed and resolve against BASE.
    pub fn full(iri: impl AsRef<str>, span: SourceSpan) -> Self {
        Self {
            value: IriValue::Full(Arc::from(iri.as_ref())),
            span,
        }
    }

    /// `prefix:local`; an empty prefix is the default namespace.
    pub fn prefixed(prefix: impl AsRef<str>, local: impl AsRef<str>, span: SourceSpan) -> Self {
        Self {
            value: IriValue::Prefixed {
                prefix: Arc::from(prefix.as_ref()),
                local: Arc::from(local.as_ref()),
            },
            span,
        }
    }

    /// The `a` keyword. Always full, so it never depends on the prologue.
    pub fn rdf_type(span: SourceSpan) -> Self {
        Self::full(vocab::RDF_TYPE, span)
    }

    /// The bracketed text, or `None` for a prefixed name.
    pub fn as_full(&self) -> Option<&str> {
        match &self.value {
            IriValue::Full(iri) => Some(iri),
            IriValue::Prefixed { .. } => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IriValue {
    Full(Arc<str>),
    Prefixed { prefix: Arc<str>, local: Arc<str> },
}

/// `_:label` or `[]`. Blank nodes are never rewritten.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlankNode {
    pub value: BlankNodeValue,
    pub span: SourceSpan,
}

impl BlankNode {
    pub fn labeled(label: impl AsRef<str>, span: SourceSpan) -> Self {
        Self {
            value: BlankNodeValue::Labeled(Arc::from(label.as_ref())),
            span,
        }
    }

    pub fn anon(span: SourceSpan) -> Self {
        Self {
            value: BlankNodeValue::Anon,
            span,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlankNodeValue {
    Labeled(Arc<str>),
    Anon,
}

/// A literal. Only plain, language-tagged and `xsd:string` literals hold
/// text the rewriter may substitute.
#[derive(Clone, Debug, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
    pub span: SourceSpan,
}

impl Literal {
    pub fn string(value: impl AsRef<str>, span: SourceSpan) -> Self {
        Self {
            value: LiteralValue::Simple(Arc::from(value.as_ref())),
            span,
        }
    }

    pub fn lang_string(value: impl AsRef<str>, lang: impl AsRef<str>, span: SourceSpan) -> Self {
        Self {
            value: LiteralValue::LangTagged {
                value: Arc::from(value.as_ref()),
                lang: Arc::from(lang.as_ref()),
            },
            span,
        }
    }

    /// `"value"^^datatype`, with the datatype spelled either way.
    pub fn typed(value: impl AsRef<str>, datatype: Iri, span: SourceSpan) -> Self {
        Self {
            value: LiteralValue::Typed {
                value: Arc::from(value.as_ref()),
                datatype: Box::new(datatype),
            },
            span,
        }
    }

    pub fn integer(value: i64, span: SourceSpan) -> Self {
        Self {
            value: LiteralValue::Integer(value),
            span,
        }
    }

    /// Kept as text so `3.140` is written back unchanged.
    pub fn decimal(value: impl AsRef<str>, span: SourceSpan) -> Self {
        Self {
            value: LiteralValue::Decimal(Arc::from(value.as_ref())),
            span,
        }
    }

    pub fn double(value: f64, span: SourceSpan) -> Self {
        Self {
            value: LiteralValue::Double(value),
            span,
        }
    }

    pub fn boolean(value: bool, span: SourceSpan) -> Self {
        Self {
            value: LiteralValue::Boolean(value),
            span,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    /// `"text"`
    Simple(Arc<str>),
    /// `"text"@lang`
    LangTagged { value: Arc<str>, lang: Arc<str> },
    /// `"lexical"^^datatype`
    Typed { value: Arc<str>, datatype: Box<Iri> },
    /// Bare numeric and boolean forms.
    Integer(i64),
    Decimal(Arc<str>),
    Double(f64),
    Boolean(bool),
}

/// Anything that may sit in a triple or quad position.
#[derive(Clone, Debug, PartialEq)]
pub enum Term {
    Var(Var),
    Iri(Iri),
    Literal(Literal),
    BlankNode(BlankNode),
    /// `[]` in a pattern position.
    Any { span: SourceSpan },
}

impl Term {
    pub fn span(&self) -> SourceSpan {
        match self {
            Term::Var(v) => v.span,
            Term::Iri(i) => i.span,
            Term::Literal(l) => l.span,
            Term::BlankNode(b) => b.span,
            Term::Any { span } => *span,
        }
    }
}
