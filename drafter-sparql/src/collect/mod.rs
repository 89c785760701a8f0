//! Read-only flattening of an AST into a node sequence.
//!
//! [`flatten`] lists the root and then every node beneath it, depth-first
//! and pre-order, one entry per occurrence. Children are visited in the
//! same order the rewriter processes them, so two trees have the same
//! shape exactly when their [`node_kinds`] sequences are equal.
//!
//! The collector only ever holds shared borrows; there is no mutable walk.

mod walk;

use crate::ast::{
    AggregateFunction, AskQuery, BaseDecl, BasicPattern, BinaryOp, Binding, ConstructQuery,
    ConstructTemplate, DatasetClause, DescribeQuery, Expression, GraphPattern, GroupCondition,
    Iri, LimitClause, NegatedPredicate, OffsetClause, OrderCondition, OrderDirection, PrefixDecl,
    Prologue, PropertyPath, QuadBlock, QuadPattern, SelectClause, SelectQuery, SelectVariable,
    SparqlAst, Term, TriplePath, TriplePattern, UnaryOp, UpdateOperation, UpdateRequest,
    UsingClause, ValuesBlock, Var,
};

/// A borrowed AST node.
#[derive(Clone, Copy, Debug)]
pub enum Node<'a> {
    Ast(&'a SparqlAst),
    Prologue(&'a Prologue),
    Base(&'a BaseDecl),
    Prefix(&'a PrefixDecl),
    Select(&'a SelectQuery),
    Construct(&'a ConstructQuery),
    Ask(&'a AskQuery),
    Describe(&'a DescribeQuery),
    SelectClause(&'a SelectClause),
    SelectVariable(&'a SelectVariable),
    ConstructTemplate(&'a ConstructTemplate),
    Dataset(&'a DatasetClause),
    GroupCondition(&'a GroupCondition),
    OrderCondition(&'a OrderCondition),
    Limit(&'a LimitClause),
    Offset(&'a OffsetClause),
    Values(&'a ValuesBlock),
    Binding(&'a Binding),
    Pattern(&'a GraphPattern),
    BasicPattern(&'a BasicPattern),
    Triple(&'a TriplePattern),
    TriplePath(&'a TriplePath),
    Path(&'a PropertyPath),
    NegatedPredicate(&'a NegatedPredicate),
    Expression(&'a Expression),
    Term(&'a Term),
    /// An IRI outside a term position (dataset graphs, DESCRIBE targets, WITH, USING, path links)
    Iri(&'a Iri),
    /// A variable outside a term position (VALUES headers, DESCRIBE targets)
    Var(&'a Var),
    UpdateRequest(&'a UpdateRequest),
    UpdateOperation(&'a UpdateOperation),
    QuadPattern(&'a QuadPattern),
    QuadBlock(&'a QuadBlock),
    Using(&'a UsingClause),
}

/// The kind of a [`Node`], without its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Ast,
    Prologue,
    Base,
    Prefix,
    Select,
    Construct,
    Ask,
    Describe,
    SelectClause,
    SelectVariable,
    ConstructTemplate,
    Dataset,
    GroupCondition,
    OrderCondition(OrderDirection),
    Limit,
    Offset,
    Values,
    Binding,
    Pattern(PatternKind),
    BasicPattern,
    Triple,
    TriplePath,
    Path(PathKind),
    NegatedPredicate,
    Expression(ExpressionKind),
    Term(TermKind),
    Iri,
    Var,
    UpdateRequest,
    Update(UpdateKind),
    QuadPattern,
    QuadBlock,
    Using,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TermKind {
    Var,
    Iri,
    Literal,
    BlankNode,
    Any,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathKind {
    Link,
    ReverseLink,
    NegatedSet,
    Inverse,
    Mod,
    FixedLength,
    Distinct,
    Multi,
    Shortest,
    ZeroOrMore,
    OneOrMore,
    ZeroOrOne,
    Alternative,
    Sequence,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Triples,
    Paths,
    Filter,
    Bind,
    Assign,
    Values,
    Union,
    Optional,
    Group,
    Graph,
    Dataset,
    Exists,
    NotExists,
    Minus,
    SubSelect,
    Service,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    Var,
    Literal,
    Iri,
    Binary(BinaryOp),
    Unary(UnaryOp),
    FunctionCall,
    If,
    Coalesce,
    In,
    Exists,
    NotExists,
    Aggregate(AggregateFunction),
    Bracketed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpdateKind {
    InsertData,
    DeleteData,
    DeleteWhere,
    Modify,
}

impl Node<'_> {
    /// The kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Ast(_) => NodeKind::Ast,
            Node::Prologue(_) => NodeKind::Prologue,
            Node::Base(_) => NodeKind::Base,
            Node::Prefix(_) => NodeKind::Prefix,
            Node::Select(_) => NodeKind::Select,
            Node::Construct(_) => NodeKind::Construct,
            Node::Ask(_) => NodeKind::Ask,
            Node::Describe(_) => NodeKind::Describe,
            Node::SelectClause(_) => NodeKind::SelectClause,
            Node::SelectVariable(_) => NodeKind::SelectVariable,
            Node::ConstructTemplate(_) => NodeKind::ConstructTemplate,
            Node::Dataset(_) => NodeKind::Dataset,
            Node::GroupCondition(_) => NodeKind::GroupCondition,
            Node::OrderCondition(c) => NodeKind::OrderCondition(c.direction),
            Node::Limit(_) => NodeKind::Limit,
            Node::Offset(_) => NodeKind::Offset,
            Node::Values(_) => NodeKind::Values,
            Node::Binding(_) => NodeKind::Binding,
            Node::Pattern(p) => NodeKind::Pattern(pattern_kind(p)),
            Node::BasicPattern(_) => NodeKind::BasicPattern,
            Node::Triple(_) => NodeKind::Triple,
            Node::TriplePath(_) => NodeKind::TriplePath,
            Node::Path(p) => NodeKind::Path(path_kind(p)),
            Node::NegatedPredicate(_) => NodeKind::NegatedPredicate,
            Node::Expression(e) => NodeKind::Expression(expression_kind(e)),
            Node::Term(t) => NodeKind::Term(term_kind(t)),
            Node::Iri(_) => NodeKind::Iri,
            Node::Var(_) => NodeKind::Var,
            Node::UpdateRequest(_) => NodeKind::UpdateRequest,
            Node::UpdateOperation(op) => NodeKind::Update(match op {
                UpdateOperation::InsertData(_) => UpdateKind::InsertData,
                UpdateOperation::DeleteData(_) => UpdateKind::DeleteData,
                UpdateOperation::DeleteWhere(_) => UpdateKind::DeleteWhere,
                UpdateOperation::Modify(_) => UpdateKind::Modify,
            }),
            Node::QuadPattern(_) => NodeKind::QuadPattern,
            Node::QuadBlock(_) => NodeKind::QuadBlock,
            Node::Using(_) => NodeKind::Using,
        }
    }
}

fn term_kind(term: &Term) -> TermKind {
    match term {
        Term::Var(_) => TermKind::Var,
        Term::Iri(_) => TermKind::Iri,
        Term::Literal(_) => TermKind::Literal,
        Term::BlankNode(_) => TermKind::BlankNode,
        Term::Any { .. } => TermKind::Any,
    }
}

fn path_kind(path: &PropertyPath) -> PathKind {
    match path {
        PropertyPath::Link(_) => PathKind::Link,
        PropertyPath::ReverseLink(_) => PathKind::ReverseLink,
        PropertyPath::NegatedSet { .. } => PathKind::NegatedSet,
        PropertyPath::Inverse { .. } => PathKind::Inverse,
        PropertyPath::Mod { .. } => PathKind::Mod,
        PropertyPath::FixedLength { .. } => PathKind::FixedLength,
        PropertyPath::Distinct { .. } => PathKind::Distinct,
        PropertyPath::Multi { .. } => PathKind::Multi,
        PropertyPath::Shortest { .. } => PathKind::Shortest,
        PropertyPath::ZeroOrMore { .. } => PathKind::ZeroOrMore,
        PropertyPath::OneOrMore { .. } => PathKind::OneOrMore,
        PropertyPath::ZeroOrOne { .. } => PathKind::ZeroOrOne,
        PropertyPath::Alternative { .. } => PathKind::Alternative,
        PropertyPath::Sequence { .. } => PathKind::Sequence,
    }
}

fn pattern_kind(pattern: &GraphPattern) -> PatternKind {
    match pattern {
        GraphPattern::Triples(_) => PatternKind::Triples,
        GraphPattern::Paths { .. } => PatternKind::Paths,
        GraphPattern::Filter { .. } => PatternKind::Filter,
        GraphPattern::Bind { .. } => PatternKind::Bind,
        GraphPattern::Assign { .. } => PatternKind::Assign,
        GraphPattern::Values(_) => PatternKind::Values,
        GraphPattern::Union { .. } => PatternKind::Union,
        GraphPattern::Optional { .. } => PatternKind::Optional,
        GraphPattern::Group { .. } => PatternKind::Group,
        GraphPattern::Graph { .. } => PatternKind::Graph,
        GraphPattern::Dataset { .. } => PatternKind::Dataset,
        GraphPattern::Exists { .. } => PatternKind::Exists,
        GraphPattern::NotExists { .. } => PatternKind::NotExists,
        GraphPattern::Minus { .. } => PatternKind::Minus,
        GraphPattern::SubSelect { .. } => PatternKind::SubSelect,
        GraphPattern::Service { .. } => PatternKind::Service,
    }
}

fn expression_kind(expr: &Expression) -> ExpressionKind {
    match expr {
        Expression::Var(_) => ExpressionKind::Var,
        Expression::Literal(_) => ExpressionKind::Literal,
        Expression::Iri(_) => ExpressionKind::Iri,
        Expression::Binary { op, .. } => ExpressionKind::Binary(*op),
        Expression::Unary { op, .. } => ExpressionKind::Unary(*op),
        Expression::FunctionCall { .. } => ExpressionKind::FunctionCall,
        Expression::If { .. } => ExpressionKind::If,
        Expression::Coalesce { .. } => ExpressionKind::Coalesce,
        Expression::In { .. } => ExpressionKind::In,
        Expression::Exists { .. } => ExpressionKind::Exists,
        Expression::NotExists { .. } => ExpressionKind::NotExists,
        Expression::Aggregate { function, .. } => ExpressionKind::Aggregate(*function),
        Expression::Bracketed { .. } => ExpressionKind::Bracketed,
    }
}

macro_rules! impl_from_node {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for Node<'a> {
                fn from(node: &'a $ty) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

impl_from_node! {
    SparqlAst => Ast,
    Prologue => Prologue,
    SelectQuery => Select,
    ConstructQuery => Construct,
    AskQuery => Ask,
    DescribeQuery => Describe,
    ValuesBlock => Values,
    GraphPattern => Pattern,
    BasicPattern => BasicPattern,
    TriplePattern => Triple,
    TriplePath => TriplePath,
    PropertyPath => Path,
    Expression => Expression,
    Term => Term,
    UpdateRequest => UpdateRequest,
    UpdateOperation => UpdateOperation,
}

/// Every node under `root`, root first, depth-first pre-order.
pub fn flatten<'a>(root: impl Into<Node<'a>>) -> Vec<Node<'a>> {
    let mut collector = walk::Collector::default();
    collector.visit(root.into());
    collector.into_nodes()
}

/// The kinds of [`flatten`]`(root)`, in the same order.
pub fn node_kinds<'a>(root: impl Into<Node<'a>>) -> Vec<NodeKind> {
    flatten(root).iter().map(Node::kind).collect()
}
