use super::{write_braced, write_quoted, write_separated};
use crate::ast::{Expression, FunctionName};
use std::fmt::{self, Display, Formatter};

fn write_operand(f: &mut Formatter<'_>, expr: &Expression) -> fmt::Result {
    if expr.is_primary() {
        write!(f, "{expr}")
    } else {
        write!(f, "({expr})")
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Var(v) => v.fmt(f),
            Expression::Literal(l) => l.fmt(f),
            Expression::Iri(i) => i.fmt(f),
            Expression::Binary {
                op, left, right, ..
            } => {
                write_operand(f, left)?;
                write!(f, " {} ", op.as_str())?;
                write_operand(f, right)
            }
            Expression::Unary { op, operand, .. } => {
                f.write_str(op.as_str())?;
                write_operand(f, operand)
            }
            Expression::FunctionCall {
                name,
                args,
                distinct,
                ..
            } => {
                match name {
                    FunctionName::Extension(iri) => write!(f, "{iri}(")?,
                    builtin => write!(f, "{}(", builtin.keyword().unwrap_or_default())?,
                }
                if *distinct {
                    f.write_str("DISTINCT ")?;
                }
                write_separated(f, args, ", ")?;
                f.write_str(")")
            }
            Expression::If {
                condition,
                then_expr,
                else_expr,
                ..
            } => write!(f, "IF({condition}, {then_expr}, {else_expr})"),
            Expression::Coalesce { args, .. } => {
                f.write_str("COALESCE(")?;
                write_separated(f, args, ", ")?;
                f.write_str(")")
            }
            Expression::In {
                expr,
                list,
                negated,
                ..
            } => {
                write_operand(f, expr)?;
                f.write_str(if *negated { " NOT IN (" } else { " IN (" })?;
                write_separated(f, list, ", ")?;
                f.write_str(")")
            }
            Expression::Exists { pattern, .. } => {
                f.write_str("EXISTS ")?;
                write_braced(f, pattern)
            }
            Expression::NotExists { pattern, .. } => {
                f.write_str("NOT EXISTS ")?;
                write_braced(f, pattern)
            }
            Expression::Aggregate {
                function,
                expr,
                distinct,
                separator,
                ..
            } => {
                write!(f, "{}(", function.as_str())?;
                if *distinct {
                    f.write_str("DISTINCT ")?;
                }
                match expr {
                    Some(expr) => write!(f, "{expr}")?,
                    None => f.write_str("*")?,
                }
                if let Some(separator) = separator {
                    f.write_str("; SEPARATOR=")?;
                    write_quoted(f, separator)?;
                }
                f.write_str(")")
            }
            Expression::Bracketed { inner, .. } => write!(f, "({inner})"),
        }
    }
}
