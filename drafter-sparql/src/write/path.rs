use crate::ast::{NegatedPredicate, PropertyPath};
use std::fmt::{self, Display, Formatter};

/// Binding strength of each path form, following the SPARQL grammar:
/// alternative < sequence < inverse < postfix modifier < primary.
fn precedence(path: &PropertyPath) -> u8 {
    match path {
        PropertyPath::Alternative { .. } => 1,
        PropertyPath::Sequence { .. } => 2,
        PropertyPath::ReverseLink(_) | PropertyPath::Inverse { .. } => 3,
        PropertyPath::Mod { .. }
        | PropertyPath::FixedLength { .. }
        | PropertyPath::ZeroOrMore { .. }
        | PropertyPath::OneOrMore { .. }
        | PropertyPath::ZeroOrOne { .. } => 4,
        PropertyPath::Link(_)
        | PropertyPath::NegatedSet { .. }
        | PropertyPath::Distinct { .. }
        | PropertyPath::Multi { .. }
        | PropertyPath::Shortest { .. } => 5,
    }
}

/// Write `path`, parenthesised if it binds looser than `min`.
fn write_operand(f: &mut Formatter<'_>, path: &PropertyPath, min: u8) -> fmt::Result {
    if precedence(path) >= min {
        write!(f, "{path}")
    } else {
        write!(f, "({path})")
    }
}

impl Display for NegatedPredicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NegatedPredicate::Forward(iri) => write!(f, "{iri}"),
            NegatedPredicate::Inverse(iri) => write!(f, "^{iri}"),
        }
    }
}

impl Display for PropertyPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PropertyPath::Link(iri) => write!(f, "{iri}"),
            PropertyPath::ReverseLink(iri) => write!(f, "^{iri}"),
            PropertyPath::NegatedSet { members, .. } => {
                f.write_str("!(")?;
                super::write_separated(f, members, "|")?;
                f.write_str(")")
            }
            PropertyPath::Inverse { path, .. } => {
                f.write_str("^")?;
                write_operand(f, path, 4)
            }
            PropertyPath::Mod { path, min, max, .. } => {
                write_operand(f, path, 5)?;
                match (min, max) {
                    (Some(min), Some(max)) => write!(f, "{{{min},{max}}}"),
                    (Some(min), None) => write!(f, "{{{min},}}"),
                    (None, Some(max)) => write!(f, "{{,{max}}}"),
                    (None, None) => f.write_str("{0,}"),
                }
            }
            PropertyPath::FixedLength { path, count, .. } => {
                write_operand(f, path, 5)?;
                write!(f, "{{{count}}}")
            }
            PropertyPath::Distinct { path, .. } => write!(f, "distinct({path})"),
            PropertyPath::Multi { path, .. } => write!(f, "multi({path})"),
            PropertyPath::Shortest { path, .. } => write!(f, "shortest({path})"),
            PropertyPath::ZeroOrMore { path, .. } => {
                write_operand(f, path, 5)?;
                f.write_str("*")
            }
            PropertyPath::OneOrMore { path, .. } => {
                write_operand(f, path, 5)?;
                f.write_str("+")
            }
            PropertyPath::ZeroOrOne { path, .. } => {
                write_operand(f, path, 5)?;
                f.write_str("?")
            }
            PropertyPath::Alternative { left, right, .. } => {
                write_operand(f, left, 2)?;
                f.write_str("|")?;
                write_operand(f, right, 2)
            }
            PropertyPath::Sequence { left, right, .. } => {
                write_operand(f, left, 3)?;
                f.write_str("/")?;
                write_operand(f, right, 3)
            }
        }
    }
}
