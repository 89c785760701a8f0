//! Expression rewriting.

use crate::ast::{Expression, FunctionName};

use super::{Result, Rewriter};

impl Rewriter<'_> {
    /// Extension function IRIs name functions, so they are never substituted.
    pub fn rewrite_function_name(&self, name: &FunctionName) -> Result<FunctionName> {
        Ok(match name {
            FunctionName::Extension(iri) => FunctionName::Extension(self.requalify_iri(iri)?),
            builtin => builtin.clone(),
        })
    }

    pub fn rewrite_expression(&self, expr: &Expression) -> Result<Expression> {
        let boxed = |e: &Expression| -> Result<Box<Expression>> {
            Ok(Box::new(self.rewrite_expression(e)?))
        };

        Ok(match expr {
            Expression::Var(v) => Expression::Var(v.clone()),
            Expression::Literal(literal) => Expression::Literal(self.rewrite_literal(literal)?),
            Expression::Iri(iri) => Expression::Iri(self.rewrite_iri(iri)?),
            Expression::Binary {
                op,
                left,
                right,
                span,
            } => Expression::Binary {
                op: *op,
                left: boxed(left)?,
                right: boxed(right)?,
                span: *span,
            },
            Expression::Unary { op, operand, span } => Expression::Unary {
                op: *op,
                operand: boxed(operand)?,
                span: *span,
            },
            Expression::FunctionCall {
                name,
                args,
                distinct,
                span,
            } => Expression::FunctionCall {
                name: self.rewrite_function_name(name)?,
                args: self.rewrite_expressions(args)?,
                distinct: *distinct,
                span: *span,
            },
            Expression::If {
                condition,
                then_expr,
                else_expr,
                span,
            } => Expression::If {
                condition: boxed(condition)?,
                then_expr: boxed(then_expr)?,
                else_expr: boxed(else_expr)?,
                span: *span,
            },
            Expression::Coalesce { args, span } => Expression::Coalesce {
                args: self.rewrite_expressions(args)?,
                span: *span,
            },
            Expression::In {
                expr,
                list,
                negated,
                span,
            } => Expression::In {
                expr: boxed(expr)?,
                list: self.rewrite_expressions(list)?,
                negated: *negated,
                span: *span,
            },
            Expression::Exists { pattern, span } => Expression::Exists {
                pattern: Box::new(self.rewrite_graph_pattern(pattern)?),
                span: *span,
            },
            Expression::NotExists { pattern, span } => Expression::NotExists {
                pattern: Box::new(self.rewrite_graph_pattern(pattern)?),
                span: *span,
            },
            Expression::Aggregate {
                function,
                expr,
                distinct,
                separator,
                span,
            } => Expression::Aggregate {
                function: *function,
                expr: expr.as_deref().map(boxed).transpose()?,
                distinct: *distinct,
                separator: separator.clone(),
                span: *span,
            },
            Expression::Bracketed { inner, span } => Expression::Bracketed {
                inner: boxed(inner)?,
                span: *span,
            },
        })
    }

    pub(super) fn rewrite_expressions(&self, exprs: &[Expression]) -> Result<Vec<Expression>> {
        exprs.iter().map(|e| self.rewrite_expression(e)).collect()
    }
}
