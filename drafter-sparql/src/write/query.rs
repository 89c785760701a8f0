use super::{write_braced, write_separated, write_triples_braced};
use crate::ast::{
    AskQuery, ConstructQuery, DatasetClause, DescribeQuery, DescribeTarget, GroupCondition,
    OrderCondition, OrderDirection, OrderExpr, Prologue, QueryBody, SelectClause, SelectModifier,
    SelectQuery, SelectVariable, SelectVariables, SolutionModifiers, SparqlAst, ValuesBlock,
    VarOrIri, WhereClause,
};
use std::fmt::{self, Display, Formatter};

impl Display for SparqlAst {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prologue)?;
        match &self.body {
            QueryBody::Select(q) => q.fmt(f),
            QueryBody::Construct(q) => q.fmt(f),
            QueryBody::Ask(q) => q.fmt(f),
            QueryBody::Describe(q) => q.fmt(f),
            QueryBody::Update(u) => u.fmt(f),
        }
    }
}

impl Display for Prologue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(base) = &self.base {
            writeln!(f, "BASE <{}>", base.iri)?;
        }
        for decl in &self.prefixes {
            writeln!(f, "PREFIX {}: <{}>", decl.prefix, decl.iri)?;
        }
        Ok(())
    }
}

/// Clauses shared by every query form, written after the form keyword.
fn write_tail(
    f: &mut Formatter<'_>,
    dataset: Option<&DatasetClause>,
    where_clause: Option<&WhereClause>,
    modifiers: &SolutionModifiers,
    values: Option<&ValuesBlock>,
) -> fmt::Result {
    if let Some(dataset) = dataset {
        write!(f, "{dataset}")?;
    }
    if let Some(where_clause) = where_clause {
        write!(f, " {where_clause}")?;
    }
    write!(f, "{modifiers}")?;
    if let Some(values) = values {
        write!(f, " {values}")?;
    }
    Ok(())
}

impl Display for SelectQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.select)?;
        write_tail(
            f,
            self.dataset.as_ref(),
            Some(&self.where_clause),
            &self.modifiers,
            self.values.as_ref(),
        )
    }
}

impl Display for SelectClause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT")?;
        match self.modifier {
            Some(SelectModifier::Distinct) => f.write_str(" DISTINCT")?,
            Some(SelectModifier::Reduced) => f.write_str(" REDUCED")?,
            None => {}
        }
        match &self.variables {
            SelectVariables::Star => f.write_str(" *"),
            SelectVariables::Explicit(vars) => {
                for var in vars {
                    write!(f, " {var}")?;
                }
                Ok(())
            }
        }
    }
}

impl Display for SelectVariable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SelectVariable::Var(v) => v.fmt(f),
            SelectVariable::Expr { expr, alias, .. } => write!(f, "({expr} AS {alias})"),
        }
    }
}

impl Display for ConstructQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("CONSTRUCT")?;
        if let Some(template) = &self.template {
            f.write_str(" ")?;
            write_triples_braced(f, &template.triples)?;
        }
        write_tail(
            f,
            self.dataset.as_ref(),
            Some(&self.where_clause),
            &self.modifiers,
            self.values.as_ref(),
        )
    }
}

impl Display for AskQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("ASK")?;
        write_tail(
            f,
            self.dataset.as_ref(),
            Some(&self.where_clause),
            &self.modifiers,
            self.values.as_ref(),
        )
    }
}

impl Display for DescribeQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("DESCRIBE")?;
        match &self.target {
            DescribeTarget::Star => f.write_str(" *")?,
            DescribeTarget::Resources(resources) => {
                for resource in resources {
                    write!(f, " {resource}")?;
                }
            }
        }
        write_tail(
            f,
            self.dataset.as_ref(),
            self.where_clause.as_ref(),
            &self.modifiers,
            self.values.as_ref(),
        )
    }
}

impl Display for VarOrIri {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            VarOrIri::Var(v) => v.fmt(f),
            VarOrIri::Iri(i) => i.fmt(f),
        }
    }
}

impl Display for DatasetClause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for graph in &self.default_graphs {
            write!(f, " FROM {graph}")?;
        }
        for graph in &self.named_graphs {
            write!(f, " FROM NAMED {graph}")?;
        }
        Ok(())
    }
}

impl Display for WhereClause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.has_where_keyword {
            f.write_str("WHERE ")?;
        }
        write_braced(f, &self.pattern)
    }
}

/// Written with a leading space per clause; empty modifiers write nothing.
impl Display for SolutionModifiers {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(group_by) = &self.group_by {
            f.write_str(" GROUP BY ")?;
            write_separated(f, &group_by.conditions, " ")?;
        }
        if let Some(having) = &self.having {
            f.write_str(" HAVING")?;
            for condition in &having.conditions {
                write!(f, " ({condition})")?;
            }
        }
        if let Some(order_by) = &self.order_by {
            f.write_str(" ORDER BY ")?;
            write_separated(f, &order_by.conditions, " ")?;
        }
        if let Some(limit) = &self.limit {
            write!(f, " LIMIT {}", limit.value)?;
        }
        if let Some(offset) = &self.offset {
            write!(f, " OFFSET {}", offset.value)?;
        }
        Ok(())
    }
}

impl Display for GroupCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GroupCondition::Var(v) => v.fmt(f),
            GroupCondition::Expr {
                expr,
                alias: Some(alias),
                ..
            } => write!(f, "({expr} AS {alias})"),
            GroupCondition::Expr { expr, alias: None, .. } => write!(f, "({expr})"),
        }
    }
}

impl Display for OrderCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match (&self.expr, self.direction) {
            (OrderExpr::Var(v), OrderDirection::Asc) => v.fmt(f),
            (OrderExpr::Var(v), OrderDirection::Desc) => write!(f, "DESC({v})"),
            (OrderExpr::Expr(e), OrderDirection::Asc) => write!(f, "ASC({e})"),
            (OrderExpr::Expr(e), OrderDirection::Desc) => write!(f, "DESC({e})"),
        }
    }
}
