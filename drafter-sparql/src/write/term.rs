use super::write_quoted;
use crate::ast::{BlankNode, BlankNodeValue, Iri, IriValue, Literal, LiteralValue, Term, Var};
use crate::vocab;
use std::fmt::{self, Display, Formatter};

impl Display for Var {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.name)
    }
}

impl Display for Iri {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.value {
            IriValue::Full(iri) => write!(f, "<{iri}>"),
            IriValue::Prefixed { prefix, local } => write!(f, "{prefix}:{local}"),
        }
    }
}

impl Display for BlankNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.value {
            BlankNodeValue::Labeled(label) => write!(f, "_:{label}"),
            BlankNodeValue::Anon => f.write_str("[]"),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.value {
            LiteralValue::Simple(value) => write_quoted(f, value),
            LiteralValue::LangTagged { value, lang } => {
                write_quoted(f, value)?;
                write!(f, "@{lang}")
            }
            LiteralValue::Typed { value, datatype } => {
                write_quoted(f, value)?;
                write!(f, "^^{datatype}")
            }
            LiteralValue::Integer(n) => write!(f, "{n}"),
            LiteralValue::Decimal(d) => f.write_str(d),
            LiteralValue::Double(d) if d.is_finite() => write!(f, "{d:e}"),
            LiteralValue::Double(d) => {
                let lexical = if d.is_nan() {
                    "NaN"
                } else if d.is_sign_positive() {
                    "INF"
                } else {
                    "-INF"
                };
                write!(f, "\"{lexical}\"^^<{}>", vocab::XSD_DOUBLE)
            }
            LiteralValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(v) => v.fmt(f),
            Term::Iri(i) => i.fmt(f),
            Term::Literal(l) => l.fmt(f),
            Term::BlankNode(b) => b.fmt(f),
            Term::Any { .. } => f.write_str("[]"),
        }
    }
}
