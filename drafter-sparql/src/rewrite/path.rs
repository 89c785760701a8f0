//! Property path rewriting.
//!
//! Every operator is rebuilt around its rewritten operands. Repetition
//! bounds and counts are copied unchanged.

use crate::ast::{NegatedPredicate, PropertyPath};

use super::{Result, Rewriter};

impl Rewriter<'_> {
    pub fn rewrite_path(&self, path: &PropertyPath) -> Result<PropertyPath> {
        let boxed =
            |p: &PropertyPath| -> Result<Box<PropertyPath>> { Ok(Box::new(self.rewrite_path(p)?)) };

        Ok(match path {
            PropertyPath::Link(iri) => PropertyPath::Link(self.rewrite_iri(iri)?),
            PropertyPath::ReverseLink(iri) => PropertyPath::ReverseLink(self.rewrite_iri(iri)?),
            PropertyPath::NegatedSet { members, span } => PropertyPath::NegatedSet {
                members: members
                    .iter()
                    .map(|member| self.rewrite_negated_predicate(member))
                    .collect::<Result<_>>()?,
                span: *span,
            },
            PropertyPath::Inverse { path, span } => PropertyPath::Inverse {
                path: boxed(path)?,
                span: *span,
            },
            PropertyPath::Mod {
                path,
                min,
                max,
                span,
            } => PropertyPath::Mod {
                path: boxed(path)?,
                min: *min,
                max: *max,
                span: *span,
            },
            PropertyPath::FixedLength { path, count, span } => PropertyPath::FixedLength {
                path: boxed(path)?,
                count: *count,
                span: *span,
            },
            PropertyPath::Distinct { path, span } => PropertyPath::Distinct {
                path: boxed(path)?,
                span: *span,
            },
            PropertyPath::Multi { path, span } => PropertyPath::Multi {
                path: boxed(path)?,
                span: *span,
            },
            PropertyPath::Shortest { path, span } => PropertyPath::Shortest {
                path: boxed(path)?,
                span: *span,
            },
            PropertyPath::ZeroOrMore { path, span } => PropertyPath::ZeroOrMore {
                path: boxed(path)?,
                span: *span,
            },
            PropertyPath::OneOrMore { path, span } => PropertyPath::OneOrMore {
                path: boxed(path)?,
                span: *span,
            },
            PropertyPath::ZeroOrOne { path, span } => PropertyPath::ZeroOrOne {
                path: boxed(path)?,
                span: *span,
            },
            PropertyPath::Alternative { left, right, span } => PropertyPath::Alternative {
                left: boxed(left)?,
                right: boxed(right)?,
                span: *span,
            },
            PropertyPath::Sequence { left, right, span } => PropertyPath::Sequence {
                left: boxed(left)?,
                right: boxed(right)?,
                span: *span,
            },
        })
    }

    fn rewrite_negated_predicate(&self, member: &NegatedPredicate) -> Result<NegatedPredicate> {
        Ok(match member {
            NegatedPredicate::Forward(iri) => NegatedPredicate::Forward(self.rewrite_iri(iri)?),
            NegatedPredicate::Inverse(iri) => NegatedPredicate::Inverse(self.rewrite_iri(iri)?),
        })
    }
}
