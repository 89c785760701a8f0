//! Query form and solution modifier rewriting.

use crate::ast::{
    AskQuery, ConstructQuery, ConstructTemplate, DatasetClause, DescribeQuery, DescribeTarget,
    GroupByClause, GroupCondition, HavingClause, Iri, OrderByClause, OrderCondition, OrderExpr,
    SelectClause, SelectQuery, SelectVariable, SelectVariables, SolutionModifiers, WhereClause,
};

use super::{Result, Rewriter};

impl Rewriter<'_> {
    pub fn rewrite_select_query(&self, query: &SelectQuery) -> Result<SelectQuery> {
        Ok(SelectQuery {
            select: self.rewrite_select_clause(&query.select)?,
            dataset: self.rewrite_dataset(query.dataset.as_ref())?,
            where_clause: self.rewrite_where(&query.where_clause)?,
            modifiers: self.rewrite_modifiers(&query.modifiers)?,
            values: query
                .values
                .as_ref()
                .map(|v| self.rewrite_values(v))
                .transpose()?,
            span: query.span,
        })
    }

    pub fn rewrite_construct_query(&self, query: &ConstructQuery) -> Result<ConstructQuery> {
        let template = match &query.template {
            Some(template) => Some(ConstructTemplate {
                triples: self.rewrite_triples(&template.triples)?,
                span: template.span,
            }),
            None => None,
        };
        Ok(ConstructQuery {
            template,
            dataset: self.rewrite_dataset(query.dataset.as_ref())?,
            where_clause: self.rewrite_where(&query.where_clause)?,
            modifiers: self.rewrite_modifiers(&query.modifiers)?,
            values: query
                .values
                .as_ref()
                .map(|v| self.rewrite_values(v))
                .transpose()?,
            span: query.span,
        })
    }

    pub fn rewrite_ask_query(&self, query: &AskQuery) -> Result<AskQuery> {
        Ok(AskQuery {
            dataset: self.rewrite_dataset(query.dataset.as_ref())?,
            where_clause: self.rewrite_where(&query.where_clause)?,
            modifiers: self.rewrite_modifiers(&query.modifiers)?,
            values: query
                .values
                .as_ref()
                .map(|v| self.rewrite_values(v))
                .transpose()?,
            span: query.span,
        })
    }

    pub fn rewrite_describe_query(&self, query: &DescribeQuery) -> Result<DescribeQuery> {
        let target = match &query.target {
            DescribeTarget::Star => DescribeTarget::Star,
            DescribeTarget::Resources(resources) => DescribeTarget::Resources(
                resources
                    .iter()
                    .map(|r| self.rewrite_var_or_iri(r))
                    .collect::<Result<_>>()?,
            ),
        };
        Ok(DescribeQuery {
            target,
            dataset: self.rewrite_dataset(query.dataset.as_ref())?,
            where_clause: query
                .where_clause
                .as_ref()
                .map(|w| self.rewrite_where(w))
                .transpose()?,
            modifiers: self.rewrite_modifiers(&query.modifiers)?,
            values: query
                .values
                .as_ref()
                .map(|v| self.rewrite_values(v))
                .transpose()?,
            span: query.span,
        })
    }

    fn rewrite_select_clause(&self, select: &SelectClause) -> Result<SelectClause> {
        let variables = match &select.variables {
            SelectVariables::Star => SelectVariables::Star,
            SelectVariables::Explicit(vars) => SelectVariables::Explicit(
                vars.iter()
                    .map(|v| self.rewrite_select_variable(v))
                    .collect::<Result<_>>()?,
            ),
        };
        Ok(SelectClause {
            modifier: select.modifier,
            variables,
            span: select.span,
        })
    }

    fn rewrite_select_variable(&self, var: &SelectVariable) -> Result<SelectVariable> {
        Ok(match var {
            SelectVariable::Var(v) => SelectVariable::Var(v.clone()),
            SelectVariable::Expr { expr, alias, span } => SelectVariable::Expr {
                expr: self.rewrite_expression(expr)?,
                alias: alias.clone(),
                span: *span,
            },
        })
    }

    pub(super) fn rewrite_iris(&self, iris: &[Iri]) -> Result<Vec<Iri>> {
        iris.iter().map(|iri| self.rewrite_iri(iri)).collect()
    }

    fn rewrite_dataset(&self, dataset: Option<&DatasetClause>) -> Result<Option<DatasetClause>> {
        dataset
            .map(|d| {
                Ok(DatasetClause {
                    default_graphs: self.rewrite_iris(&d.default_graphs)?,
                    named_graphs: self.rewrite_iris(&d.named_graphs)?,
                    span: d.span,
                })
            })
            .transpose()
    }

    fn rewrite_where(&self, where_clause: &WhereClause) -> Result<WhereClause> {
        Ok(WhereClause {
            has_where_keyword: where_clause.has_where_keyword,
            pattern: self.rewrite_graph_pattern(&where_clause.pattern)?,
            span: where_clause.span,
        })
    }

    fn rewrite_modifiers(&self, modifiers: &SolutionModifiers) -> Result<SolutionModifiers> {
        let group_by = match &modifiers.group_by {
            Some(group_by) => Some(GroupByClause {
                conditions: group_by
                    .conditions
                    .iter()
                    .map(|c| self.rewrite_group_condition(c))
                    .collect::<Result<_>>()?,
                span: group_by.span,
            }),
            None => None,
        };
        let having = match &modifiers.having {
            Some(having) => Some(HavingClause {
                conditions: self.rewrite_expressions(&having.conditions)?,
                span: having.span,
            }),
            None => None,
        };
        let order_by = match &modifiers.order_by {
            Some(order_by) => Some(OrderByClause {
                conditions: order_by
                    .conditions
                    .iter()
                    .map(|c| self.rewrite_order_condition(c))
                    .collect::<Result<_>>()?,
                span: order_by.span,
            }),
            None => None,
        };
        Ok(SolutionModifiers {
            group_by,
            having,
            order_by,
            limit: modifiers.limit.clone(),
            offset: modifiers.offset.clone(),
        })
    }

    fn rewrite_group_condition(&self, condition: &GroupCondition) -> Result<GroupCondition> {
        Ok(match condition {
            GroupCondition::Var(v) => GroupCondition::Var(v.clone()),
            GroupCondition::Expr { expr, alias, span } => GroupCondition::Expr {
                expr: self.rewrite_expression(expr)?,
                alias: alias.clone(),
                span: *span,
            },
        })
    }

    fn rewrite_order_condition(&self, condition: &OrderCondition) -> Result<OrderCondition> {
        let expr = match &condition.expr {
            OrderExpr::Var(v) => OrderExpr::Var(v.clone()),
            OrderExpr::Expr(e) => OrderExpr::Expr(self.rewrite_expression(e)?),
        };
        Ok(OrderCondition {
            expr,
            direction: condition.direction,
            span: condition.span,
        })
    }
}
