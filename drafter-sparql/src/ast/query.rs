//! Top of the tree: the prologue and the four query forms, plus updates.
//!
//! Every query form carries its own dataset clause, modifiers and trailing
//! VALUES block so the writer can emit them in grammar order.

use super::expr::Expression;
use super::pattern::{GraphPattern, TriplePattern, ValuesBlock};
use super::term::{Iri, Var};
use super::update::UpdateRequest;
use crate::span::SourceSpan;
use std::sync::Arc;

/// One parsed request: a prologue and the body it scopes.
#[derive(Clone, Debug, PartialEq)]
pub struct SparqlAst {
    pub prologue: Prologue,
    pub body: QueryBody,
    pub span: SourceSpan,
}

impl SparqlAst {
    pub fn new(prologue: Prologue, body: QueryBody, span: SourceSpan) -> Self {
        Self {
            prologue,
            body,
            span,
        }
    }

    /// Updates go to the update endpoint; everything else is a query.
    pub fn is_update(&self) -> bool {
        matches!(self.body, QueryBody::Update(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum QueryBody {
    Select(SelectQuery),
    Construct(ConstructQuery),
    Ask(AskQuery),
    Describe(DescribeQuery),
    /// One or more update operations sharing the prologue.
    Update(UpdateRequest),
}

impl QueryBody {
    /// Keyword naming the body's form, for logs and error messages.
    pub fn form_name(&self) -> &'static str {
        match self {
            QueryBody::Select(_) => "SELECT",
            QueryBody::Construct(_) => "CONSTRUCT",
            QueryBody::Ask(_) => "ASK",
            QueryBody::Describe(_) => "DESCRIBE",
            QueryBody::Update(_) => "UPDATE",
        }
    }
}

/// BASE and PREFIX declarations, in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Prologue {
    pub base: Option<BaseDecl>,
    pub prefixes: Vec<PrefixDecl>,
}

impl Prologue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: BaseDecl) -> Self {
        self.base = Some(base);
        self
    }

    pub fn with_prefix(mut self, prefix: PrefixDecl) -> Self {
        self.prefixes.push(prefix);
        self
    }

    /// Namespace bound to `prefix`. A redeclared prefix resolves to its
    /// last binding.
    pub fn get_prefix(&self, prefix: &str) -> Option<&Arc<str>> {
        self.prefixes
            .iter()
            .rev()
            .find(|p| p.prefix.as_ref() == prefix)
            .map(|p| &p.iri)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BaseDecl {
    pub iri: Arc<str>,
    pub span: SourceSpan,
}

impl BaseDecl {
    pub fn new(iri: impl AsRef<str>, span: SourceSpan) -> Self {
        Self {
            iri: Arc::from(iri.as_ref()),
            span,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrefixDecl {
    /// Empty for the default namespace.
    pub prefix: Arc<str>,
    pub iri: Arc<str>,
    pub span: SourceSpan,
}

impl PrefixDecl {
    pub fn new(prefix: impl AsRef<str>, iri: impl AsRef<str>, span: SourceSpan) -> Self {
        Self {
            prefix: Arc::from(prefix.as_ref()),
            iri: Arc::from(iri.as_ref()),
            span,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectQuery {
    pub select: SelectClause,
    pub dataset: Option<DatasetClause>,
    pub where_clause: WhereClause,
    pub modifiers: SolutionModifiers,
    pub values: Option<ValuesBlock>,
    pub span: SourceSpan,
}

impl SelectQuery {
    pub fn new(
        select: SelectClause,
        where_clause: WhereClause,
        modifiers: SolutionModifiers,
        span: SourceSpan,
    ) -> Self {
        Self {
            select,
            dataset: None,
            where_clause,
            modifiers,
            values: None,
            span,
        }
    }

    pub fn with_dataset(mut self, dataset: DatasetClause) -> Self {
        self.dataset = Some(dataset);
        self
    }

    /// Attach the `VALUES` block that follows the modifiers.
    pub fn with_values(mut self, values: ValuesBlock) -> Self {
        self.values = Some(values);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectClause {
    pub modifier: Option<SelectModifier>,
    pub variables: SelectVariables,
    pub span: SourceSpan,
}

impl SelectClause {
    pub fn star(span: SourceSpan) -> Self {
        Self {
            modifier: None,
            variables: SelectVariables::Star,
            span,
        }
    }

    pub fn variables(vars: Vec<SelectVariable>, span: SourceSpan) -> Self {
        Self {
            modifier: None,
            variables: SelectVariables::Explicit(vars),
            span,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectModifier {
    Distinct,
    Reduced,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SelectVariables {
    Star,
    Explicit(Vec<SelectVariable>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum SelectVariable {
    Var(Var),
    /// `(expr AS ?alias)`
    Expr {
        expr: Expression,
        alias: Var,
        span: SourceSpan,
    },
}

/// `FROM` and `FROM NAMED` graphs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DatasetClause {
    pub default_graphs: Vec<Iri>,
    pub named_graphs: Vec<Iri>,
    pub span: SourceSpan,
}

impl DatasetClause {
    pub fn new(default_graphs: Vec<Iri>, named_graphs: Vec<Iri>, span: SourceSpan) -> Self {
        Self {
            default_graphs,
            named_graphs,
            span,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WhereClause {
    /// The keyword is optional; remember whether it was written.
    pub has_where_keyword: bool,
    pub pattern: GraphPattern,
    pub span: SourceSpan,
}

impl WhereClause {
    pub fn new(pattern: GraphPattern, has_where_keyword: bool, span: SourceSpan) -> Self {
        Self {
            has_where_keyword,
            pattern,
            span,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolutionModifiers {
    pub group_by: Option<GroupByClause>,
    pub having: Option<HavingClause>,
    pub order_by: Option<OrderByClause>,
    pub limit: Option<LimitClause>,
    pub offset: Option<OffsetClause>,
}

impl SolutionModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order_by(mut self, order_by: OrderByClause) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn with_limit(mut self, limit: LimitClause) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: OffsetClause) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_group_by(mut self, group_by: GroupByClause) -> Self {
        self.group_by = Some(group_by);
        self
    }

    pub fn with_having(mut self, having: HavingClause) -> Self {
        self.having = Some(having);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GroupByClause {
    pub conditions: Vec<GroupCondition>,
    pub span: SourceSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GroupCondition {
    Var(Var),
    Expr {
        expr: Expression,
        alias: Option<Var>,
        span: SourceSpan,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct HavingClause {
    pub conditions: Vec<Expression>,
    pub span: SourceSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderByClause {
    pub conditions: Vec<OrderCondition>,
    pub span: SourceSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderCondition {
    pub expr: OrderExpr,
    pub direction: OrderDirection,
    pub span: SourceSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub enum OrderExpr {
    Var(Var),
    Expr(Expression),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LimitClause {
    pub value: u64,
    pub span: SourceSpan,
}

impl LimitClause {
    pub fn new(value: u64, span: SourceSpan) -> Self {
        Self { value, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OffsetClause {
    pub value: u64,
    pub span: SourceSpan,
}

impl OffsetClause {
    pub fn new(value: u64, span: SourceSpan) -> Self {
        Self { value, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConstructQuery {
    /// `None` for the `CONSTRUCT WHERE { ... }` short form.
    pub template: Option<ConstructTemplate>,
    pub dataset: Option<DatasetClause>,
    pub where_clause: WhereClause,
    pub modifiers: SolutionModifiers,
    pub values: Option<ValuesBlock>,
    pub span: SourceSpan,
}

impl ConstructQuery {
    pub fn new(
        template: Option<ConstructTemplate>,
        where_clause: WhereClause,
        modifiers: SolutionModifiers,
        span: SourceSpan,
    ) -> Self {
        Self {
            template,
            dataset: None,
            where_clause,
            modifiers,
            values: None,
            span,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConstructTemplate {
    pub triples: Vec<TriplePattern>,
    pub span: SourceSpan,
}

impl ConstructTemplate {
    pub fn new(triples: Vec<TriplePattern>, span: SourceSpan) -> Self {
        Self { triples, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AskQuery {
    pub dataset: Option<DatasetClause>,
    pub where_clause: WhereClause,
    pub modifiers: SolutionModifiers,
    pub values: Option<ValuesBlock>,
    pub span: SourceSpan,
}

impl AskQuery {
    pub fn new(where_clause: WhereClause, span: SourceSpan) -> Self {
        Self {
            dataset: None,
            where_clause,
            modifiers: SolutionModifiers::new(),
            values: None,
            span,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DescribeQuery {
    pub target: DescribeTarget,
    pub dataset: Option<DatasetClause>,
    /// `DESCRIBE <iri>` needs no pattern.
    pub where_clause: Option<WhereClause>,
    pub modifiers: SolutionModifiers,
    pub values: Option<ValuesBlock>,
    pub span: SourceSpan,
}

impl DescribeQuery {
    pub fn new(target: DescribeTarget, span: SourceSpan) -> Self {
        Self {
            target,
            dataset: None,
            where_clause: None,
            modifiers: SolutionModifiers::new(),
            values: None,
            span,
        }
    }

    pub fn with_where(mut self, where_clause: WhereClause) -> Self {
        self.where_clause = Some(where_clause);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DescribeTarget {
    Star,
    Resources(Vec<VarOrIri>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum VarOrIri {
    Var(Var),
    Iri(Iri),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::pattern::Binding;
    use crate::ast::term::Term;
    use crate::ast::update::{InsertData, QuadPattern, UpdateOperation};

    fn at(offset: usize) -> SourceSpan {
        SourceSpan::point(offset)
    }

    fn empty_where() -> WhereClause {
        WhereClause::new(GraphPattern::group(vec![], at(0)), true, at(0))
    }

    fn bodies() -> Vec<QueryBody> {
        let data = QuadPattern::new(vec![], at(0));
        let insert = UpdateOperation::InsertData(InsertData::new(data, at(0)));
        vec![
            QueryBody::Select(SelectQuery::new(
                SelectClause::star(at(0)),
                empty_where(),
                SolutionModifiers::new(),
                at(0),
            )),
            QueryBody::Construct(ConstructQuery::new(
                None,
                empty_where(),
                SolutionModifiers::new(),
                at(0),
            )),
            QueryBody::Ask(AskQuery::new(empty_where(), at(0))),
            QueryBody::Describe(DescribeQuery::new(DescribeTarget::Star, at(0))),
            QueryBody::Update(UpdateRequest::new(vec![insert], at(0))),
        ]
    }

    #[test]
    fn test_form_names() {
        let names: Vec<_> = bodies().iter().map(QueryBody::form_name).collect();
        assert_eq!(names, ["SELECT", "CONSTRUCT", "ASK", "DESCRIBE", "UPDATE"]);
    }

    #[test]
    fn test_only_update_bodies_are_updates() {
        let updates: Vec<_> = bodies()
            .into_iter()
            .map(|body| SparqlAst::new(Prologue::new(), body, at(0)).is_update())
            .collect();
        assert_eq!(updates, [false, false, false, false, true]);
    }

    #[test]
    fn test_redeclared_prefix_resolves_to_last_binding() {
        let prologue = Prologue::new()
            .with_prefix(PrefixDecl::new("g", "http://live/a/", at(0)))
            .with_prefix(PrefixDecl::new("", "http://live/default/", at(1)))
            .with_prefix(PrefixDecl::new("g", "http://live/b/", at(2)));

        let ns = |prefix| prologue.get_prefix(prefix).map(|iri| iri.as_ref());
        assert_eq!(ns("g"), Some("http://live/b/"));
        assert_eq!(ns(""), Some("http://live/default/"));
        assert_eq!(prologue.get_prefix("h"), None);
    }

    #[test]
    fn test_base_does_not_bind_a_prefix() {
        let prologue = Prologue::new().with_base(BaseDecl::new("http://live/", at(0)));
        assert_eq!(prologue.get_prefix(""), None);
    }

    #[test]
    fn test_trailing_values_are_kept_apart_from_where() {
        let g = Var::new("g", at(5));
        let graph = Term::Iri(Iri::full("http://live/g", at(7)));
        let row = Binding::new(vec![(g.clone(), graph)], at(6));
        let query = SelectQuery::new(
            SelectClause::star(at(0)),
            empty_where(),
            SolutionModifiers::new().with_limit(LimitClause::new(1, at(3))),
            at(0),
        )
        .with_values(ValuesBlock::new(vec![g], vec![row], at(4)));

        let values = query.values.as_ref().map(|v| (v.vars.len(), v.rows.len()));
        assert_eq!(values, Some((1, 1)));
        assert_eq!(query.where_clause, empty_where());
        assert_eq!(query.modifiers.limit.map(|l| l.value), Some(1));
    }
}
