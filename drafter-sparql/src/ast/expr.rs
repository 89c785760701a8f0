//! SPARQL expression types.
//!
//! Expressions appear in FILTER, BIND, LET, SELECT (expr AS ?var),
//! GROUP BY, ORDER BY and HAVING clauses.

use super::pattern::GraphPattern;
use super::term::{Iri, Literal, Var};
use crate::span::SourceSpan;
use std::sync::Arc;

/// A SPARQL expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    /// A variable reference
    Var(Var),

    /// A literal value
    Literal(Literal),

    /// An IRI constant
    Iri(Iri),

    /// Binary operation (arithmetic, comparison, boolean)
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
        span: SourceSpan,
    },

    /// Unary operation (negation, logical NOT)
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
        span: SourceSpan,
    },

    /// Function call (built-in or extension)
    FunctionCall {
        name: FunctionName,
        args: Vec<Expression>,
        /// `DISTINCT` inside an extension function call
        distinct: bool,
        span: SourceSpan,
    },

    /// IF(condition, then, else)
    If {
        condition: Box<Expression>,
        then_expr: Box<Expression>,
        else_expr: Box<Expression>,
        span: SourceSpan,
    },

    /// COALESCE(expr, expr, ...)
    Coalesce {
        args: Vec<Expression>,
        span: SourceSpan,
    },

    /// IN / NOT IN list
    In {
        expr: Box<Expression>,
        list: Vec<Expression>,
        negated: bool,
        span: SourceSpan,
    },

    /// EXISTS { pattern }
    Exists {
        pattern: Box<GraphPattern>,
        span: SourceSpan,
    },

    /// NOT EXISTS { pattern }
    NotExists {
        pattern: Box<GraphPattern>,
        span: SourceSpan,
    },

    /// Aggregate function (COUNT, SUM, AVG, MIN, MAX, GROUP_CONCAT, SAMPLE)
    Aggregate {
        function: AggregateFunction,
        /// `None` for `COUNT(*)`
        expr: Option<Box<Expression>>,
        distinct: bool,
        /// GROUP_CONCAT separator
        separator: Option<Arc<str>>,
        span: SourceSpan,
    },

    /// Parenthesized expression
    Bracketed {
        inner: Box<Expression>,
        span: SourceSpan,
    },
}

impl Expression {
    /// Get the source span of this expression.
    pub fn span(&self) -> SourceSpan {
        match self {
            Expression::Var(v) => v.span,
            Expression::Literal(l) => l.span,
            Expression::Iri(i) => i.span,
            Expression::Binary { span, .. }
            | Expression::Unary { span, .. }
            | Expression::FunctionCall { span, .. }
            | Expression::If { span, .. }
            | Expression::Coalesce { span, .. }
            | Expression::In { span, .. }
            | Expression::Exists { span, .. }
            | Expression::NotExists { span, .. }
            | Expression::Aggregate { span, .. }
            | Expression::Bracketed { span, .. } => *span,
        }
    }

    /// Create a variable expression.
    pub fn var(var: Var) -> Self {
        Expression::Var(var)
    }

    /// Create a literal expression.
    pub fn literal(lit: Literal) -> Self {
        Expression::Literal(lit)
    }

    /// Create an IRI expression.
    pub fn iri(iri: Iri) -> Self {
        Expression::Iri(iri)
    }

    /// Create a binary expression.
    pub fn binary(op: BinaryOp, left: Expression, right: Expression, span: SourceSpan) -> Self {
        Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            span,
        }
    }

    /// Create a unary expression.
    pub fn unary(op: UnaryOp, operand: Expression, span: SourceSpan) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
            span,
        }
    }

    /// Create a function call expression.
    pub fn function_call(name: FunctionName, args: Vec<Expression>, span: SourceSpan) -> Self {
        Expression::FunctionCall {
            name,
            args,
            distinct: false,
            span,
        }
    }

    /// Whether this expression is written without surrounding parentheses
    /// when it appears as an operand.
    pub fn is_primary(&self) -> bool {
        matches!(
            self,
            Expression::Var(_)
                | Expression::Literal(_)
                | Expression::Iri(_)
                | Expression::FunctionCall { .. }
                | Expression::If { .. }
                | Expression::Coalesce { .. }
                | Expression::Exists { .. }
                | Expression::NotExists { .. }
                | Expression::Aggregate { .. }
                | Expression::Bracketed { .. }
        )
    }
}

/// Binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Logical
    And, // &&
    Or,  // ||

    // Comparison
    Eq, // =
    Ne, // !=
    Lt, // <
    Le, // <=
    Gt, // >
    Ge, // >=

    // Arithmetic
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
}

impl BinaryOp {
    /// Get the operator symbol as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Eq => "=",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

/// Unary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Logical NOT (!)
    Not,
    /// Arithmetic negation (-)
    Neg,
    /// Unary plus (+)
    Pos,
}

impl UnaryOp {
    /// Get the operator symbol as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Neg => "-",
            UnaryOp::Pos => "+",
        }
    }
}

/// Function names.
///
/// Built-ins are written by keyword. An [`FunctionName::Extension`] is
/// identified by IRI; that IRI names a function, not a resource, and is
/// never subject to IRI rewriting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FunctionName {
    // Type checking functions
    Bound,
    IsIri,
    IsUri,
    IsBlank,
    IsLiteral,
    IsNumeric,

    // Accessors
    Str,
    Lang,
    Datatype,

    // Constructor functions
    Iri,
    Uri,
    BNode,
    StrDt,
    StrLang,

    // String functions
    Strlen,
    Substr,
    Ucase,
    Lcase,
    StrStarts,
    StrEnds,
    Contains,
    StrBefore,
    StrAfter,
    EncodeForUri,
    Concat,
    LangMatches,
    Regex,
    Replace,

    // Numeric functions
    Abs,
    Round,
    Ceil,
    Floor,
    Rand,

    // Date/time functions
    Now,
    Year,
    Month,
    Day,
    Hours,
    Minutes,
    Seconds,
    Timezone,
    Tz,

    // Hash functions
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,

    SameTerm,
    Uuid,
    StrUuid,

    /// Custom extension function (IRI)
    Extension(Iri),
}

impl FunctionName {
    /// The SPARQL keyword for a built-in, or `None` for extension functions.
    pub fn keyword(&self) -> Option<&'static str> {
        let keyword = match self {
            FunctionName::Bound => "BOUND",
            FunctionName::IsIri => "isIRI",
            FunctionName::IsUri => "isURI",
            FunctionName::IsBlank => "isBLANK",
            FunctionName::IsLiteral => "isLITERAL",
            FunctionName::IsNumeric => "isNUMERIC",
            FunctionName::Str => "STR",
            FunctionName::Lang => "LANG",
            FunctionName::Datatype => "DATATYPE",
            FunctionName::Iri => "IRI",
            FunctionName::Uri => "URI",
            FunctionName::BNode => "BNODE",
            FunctionName::StrDt => "STRDT",
            FunctionName::StrLang => "STRLANG",
            FunctionName::Strlen => "STRLEN",
            FunctionName::Substr => "SUBSTR",
            FunctionName::Ucase => "UCASE",
            FunctionName::Lcase => "LCASE",
            FunctionName::StrStarts => "STRSTARTS",
            FunctionName::StrEnds => "STRENDS",
            FunctionName::Contains => "CONTAINS",
            FunctionName::StrBefore => "STRBEFORE",
            FunctionName::StrAfter => "STRAFTER",
            FunctionName::EncodeForUri => "ENCODE_FOR_URI",
            FunctionName::Concat => "CONCAT",
            FunctionName::LangMatches => "LANGMATCHES",
            FunctionName::Regex => "REGEX",
            FunctionName::Replace => "REPLACE",
            FunctionName::Abs => "ABS",
            FunctionName::Round => "ROUND",
            FunctionName::Ceil => "CEIL",
            FunctionName::Floor => "FLOOR",
            FunctionName::Rand => "RAND",
            FunctionName::Now => "NOW",
            FunctionName::Year => "YEAR",
            FunctionName::Month => "MONTH",
            FunctionName::Day => "DAY",
            FunctionName::Hours => "HOURS",
            FunctionName::Minutes => "MINUTES",
            FunctionName::Seconds => "SECONDS",
            FunctionName::Timezone => "TIMEZONE",
            FunctionName::Tz => "TZ",
            FunctionName::Md5 => "MD5",
            FunctionName::Sha1 => "SHA1",
            FunctionName::Sha256 => "SHA256",
            FunctionName::Sha384 => "SHA384",
            FunctionName::Sha512 => "SHA512",
            FunctionName::SameTerm => "sameTerm",
            FunctionName::Uuid => "UUID",
            FunctionName::StrUuid => "STRUUID",
            FunctionName::Extension(_) => return None,
        };
        Some(keyword)
    }
}

/// Aggregate functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AggregateFunction {
    Count,
    Sum,
    Avg,
    Min,
    Max,
    GroupConcat,
    Sample,
}

impl AggregateFunction {
    /// Get the function name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateFunction::Count => "COUNT",
            AggregateFunction::Sum => "SUM",
            AggregateFunction::Avg => "AVG",
            AggregateFunction::Min => "MIN",
            AggregateFunction::Max => "MAX",
            AggregateFunction::GroupConcat => "GROUP_CONCAT",
            AggregateFunction::Sample => "SAMPLE",
        }
    }
}
