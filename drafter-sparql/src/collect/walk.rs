use super::Node;
use crate::ast::{
    DescribeTarget, Expression, GraphPattern, GroupCondition, OrderExpr, PropertyPath, QuadBlock,
    QueryBody, SelectVariable, SelectVariables, SolutionModifiers, TriplePath, UpdateOperation,
    VarOrIri,
};

#[derive(Default)]
pub(super) struct Collector<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> Collector<'a> {
    pub(super) fn into_nodes(self) -> Vec<Node<'a>> {
        self.nodes
    }

    pub(super) fn visit(&mut self, node: Node<'a>) {
        self.nodes.push(node);
        match node {
            Node::Ast(ast) => {
                self.visit(Node::Prologue(&ast.prologue));
                match &ast.body {
                    QueryBody::Select(q) => self.visit(Node::Select(q)),
                    QueryBody::Construct(q) => self.visit(Node::Construct(q)),
                    QueryBody::Ask(q) => self.visit(Node::Ask(q)),
                    QueryBody::Describe(q) => self.visit(Node::Describe(q)),
                    QueryBody::Update(u) => self.visit(Node::UpdateRequest(u)),
                }
            }
            Node::Prologue(prologue) => {
                if let Some(base) = &prologue.base {
                    self.visit(Node::Base(base));
                }
                for prefix in &prologue.prefixes {
                    self.visit(Node::Prefix(prefix));
                }
            }
            Node::Select(q) => {
                self.visit(Node::SelectClause(&q.select));
                self.visit_opt(q.dataset.as_ref().map(Node::Dataset));
                self.visit(Node::Pattern(&q.where_clause.pattern));
                self.visit_modifiers(&q.modifiers);
                self.visit_opt(q.values.as_ref().map(Node::Values));
            }
            Node::Construct(q) => {
                self.visit_opt(q.template.as_ref().map(Node::ConstructTemplate));
                self.visit_opt(q.dataset.as_ref().map(Node::Dataset));
                self.visit(Node::Pattern(&q.where_clause.pattern));
                self.visit_modifiers(&q.modifiers);
                self.visit_opt(q.values.as_ref().map(Node::Values));
            }
            Node::Ask(q) => {
                self.visit_opt(q.dataset.as_ref().map(Node::Dataset));
                self.visit(Node::Pattern(&q.where_clause.pattern));
                self.visit_modifiers(&q.modifiers);
                self.visit_opt(q.values.as_ref().map(Node::Values));
            }
            Node::Describe(q) => {
                if let DescribeTarget::Resources(resources) = &q.target {
                    for resource in resources {
                        match resource {
                            VarOrIri::Var(v) => self.visit(Node::Var(v)),
                            VarOrIri::Iri(i) => self.visit(Node::Iri(i)),
                        }
                    }
                }
                self.visit_opt(q.dataset.as_ref().map(Node::Dataset));
                self.visit_opt(q.where_clause.as_ref().map(|w| Node::Pattern(&w.pattern)));
                self.visit_modifiers(&q.modifiers);
                self.visit_opt(q.values.as_ref().map(Node::Values));
            }
            Node::SelectClause(clause) => {
                if let SelectVariables::Explicit(vars) = &clause.variables {
                    for var in vars {
                        self.visit(Node::SelectVariable(var));
                    }
                }
            }
            Node::SelectVariable(SelectVariable::Expr { expr, .. }) => {
                self.visit(Node::Expression(expr));
            }
            Node::ConstructTemplate(template) => {
                for triple in &template.triples {
                    self.visit(Node::Triple(triple));
                }
            }
            Node::Dataset(dataset) => {
                for iri in dataset.default_graphs.iter().chain(&dataset.named_graphs) {
                    self.visit(Node::Iri(iri));
                }
            }
            Node::GroupCondition(GroupCondition::Expr { expr, .. }) => {
                self.visit(Node::Expression(expr));
            }
            Node::OrderCondition(condition) => match &condition.expr {
                OrderExpr::Var(v) => self.visit(Node::Var(v)),
                OrderExpr::Expr(e) => self.visit(Node::Expression(e)),
            },
            Node::Values(block) => {
                for var in &block.vars {
                    self.visit(Node::Var(var));
                }
                for row in &block.rows {
                    self.visit(Node::Binding(row));
                }
            }
            Node::Binding(binding) => {
                for (var, term) in &binding.entries {
                    self.visit(Node::Var(var));
                    self.visit(Node::Term(term));
                }
            }
            Node::Pattern(pattern) => self.visit_pattern(pattern),
            Node::BasicPattern(bgp) => {
                for triple in &bgp.triples {
                    self.visit(Node::Triple(triple));
                }
            }
            Node::Triple(triple) => {
                self.visit(Node::Term(&triple.subject));
                self.visit(Node::Term(&triple.predicate));
                self.visit(Node::Term(&triple.object));
            }
            Node::TriplePath(TriplePath::Triple(triple)) => self.visit(Node::Triple(triple)),
            Node::TriplePath(TriplePath::Path {
                subject,
                path,
                object,
                ..
            }) => {
                self.visit(Node::Term(subject));
                self.visit(Node::Path(path));
                self.visit(Node::Term(object));
            }
            Node::Path(path) => self.visit_path(path),
            Node::NegatedPredicate(member) => self.visit(Node::Iri(member.iri())),
            Node::Expression(expr) => self.visit_expression(expr),
            Node::UpdateRequest(request) => {
                for op in &request.operations {
                    self.visit(Node::UpdateOperation(op));
                }
            }
            Node::UpdateOperation(op) => match op {
                UpdateOperation::InsertData(insert) => self.visit(Node::QuadPattern(&insert.data)),
                UpdateOperation::DeleteData(delete) => self.visit(Node::QuadPattern(&delete.data)),
                UpdateOperation::DeleteWhere(delete) => {
                    self.visit(Node::QuadPattern(&delete.pattern))
                }
                UpdateOperation::Modify(modify) => {
                    self.visit_opt(modify.with_iri.as_ref().map(Node::Iri));
                    self.visit_opt(modify.delete_clause.as_ref().map(Node::QuadPattern));
                    self.visit_opt(modify.insert_clause.as_ref().map(Node::QuadPattern));
                    self.visit_opt(modify.using.as_ref().map(Node::Using));
                    self.visit(Node::Pattern(&modify.where_pattern));
                }
            },
            Node::QuadPattern(quads) => {
                for block in &quads.blocks {
                    self.visit(Node::QuadBlock(block));
                }
            }
            Node::QuadBlock(QuadBlock::Triples(bgp)) => self.visit(Node::BasicPattern(bgp)),
            Node::QuadBlock(QuadBlock::Graph { name, triples, .. }) => {
                self.visit(Node::Term(name));
                self.visit(Node::BasicPattern(triples));
            }
            Node::Using(using) => {
                for iri in using.default_graphs.iter().chain(&using.named_graphs) {
                    self.visit(Node::Iri(iri));
                }
            }
            // leaves
            Node::Base(_)
            | Node::Prefix(_)
            | Node::SelectVariable(SelectVariable::Var(_))
            | Node::GroupCondition(GroupCondition::Var(_))
            | Node::Limit(_)
            | Node::Offset(_)
            | Node::Term(_)
            | Node::Iri(_)
            | Node::Var(_) => {}
        }
    }

    fn visit_opt(&mut self, node: Option<Node<'a>>) {
        if let Some(node) = node {
            self.visit(node);
        }
    }

    fn visit_modifiers(&mut self, modifiers: &'a SolutionModifiers) {
        if let Some(group_by) = &modifiers.group_by {
            for condition in &group_by.conditions {
                self.visit(Node::GroupCondition(condition));
            }
        }
        if let Some(having) = &modifiers.having {
            for condition in &having.conditions {
                self.visit(Node::Expression(condition));
            }
        }
        if let Some(order_by) = &modifiers.order_by {
            for condition in &order_by.conditions {
                self.visit(Node::OrderCondition(condition));
            }
        }
        self.visit_opt(modifiers.limit.as_ref().map(Node::Limit));
        self.visit_opt(modifiers.offset.as_ref().map(Node::Offset));
    }

    fn visit_pattern(&mut self, pattern: &'a GraphPattern) {
        match pattern {
            GraphPattern::Triples(bgp) => self.visit(Node::BasicPattern(bgp)),
            GraphPattern::Paths { triples, .. } => {
                for triple in triples {
                    self.visit(Node::TriplePath(triple));
                }
            }
            GraphPattern::Filter { expr, .. } => self.visit(Node::Expression(expr)),
            GraphPattern::Bind { expr, var, .. } => {
                self.visit(Node::Expression(expr));
                self.visit(Node::Var(var));
            }
            GraphPattern::Assign { var, expr, .. } => {
                self.visit(Node::Var(var));
                self.visit(Node::Expression(expr));
            }
            GraphPattern::Values(block) => self.visit(Node::Values(block)),
            GraphPattern::Union { branches: elements, .. }
            | GraphPattern::Group { elements, .. } => {
                for element in elements {
                    self.visit(Node::Pattern(element));
                }
            }
            GraphPattern::Optional { pattern, .. }
            | GraphPattern::Dataset { pattern, .. }
            | GraphPattern::Exists { pattern, .. }
            | GraphPattern::NotExists { pattern, .. }
            | GraphPattern::Minus { pattern, .. } => self.visit(Node::Pattern(pattern)),
            GraphPattern::Graph { name, pattern, .. } => {
                self.visit(Node::Term(name));
                self.visit(Node::Pattern(pattern));
            }
            GraphPattern::SubSelect { query, .. } => self.visit(Node::Select(query)),
            GraphPattern::Service {
                endpoint, pattern, ..
            } => {
                self.visit(Node::Term(endpoint));
                self.visit(Node::Pattern(pattern));
            }
        }
    }

    fn visit_path(&mut self, path: &'a PropertyPath) {
        match path {
            PropertyPath::Link(iri) | PropertyPath::ReverseLink(iri) => self.visit(Node::Iri(iri)),
            PropertyPath::NegatedSet { members, .. } => {
                for member in members {
                    self.visit(Node::NegatedPredicate(member));
                }
            }
            PropertyPath::Inverse { path, .. }
            | PropertyPath::Mod { path, .. }
            | PropertyPath::FixedLength { path, .. }
            | PropertyPath::Distinct { path, .. }
            | PropertyPath::Multi { path, .. }
            | PropertyPath::Shortest { path, .. }
            | PropertyPath::ZeroOrMore { path, .. }
            | PropertyPath::OneOrMore { path, .. }
            | PropertyPath::ZeroOrOne { path, .. } => self.visit(Node::Path(path)),
            PropertyPath::Alternative { left, right, .. }
            | PropertyPath::Sequence { left, right, .. } => {
                self.visit(Node::Path(left));
                self.visit(Node::Path(right));
            }
        }
    }

    fn visit_expression(&mut self, expr: &'a Expression) {
        match expr {
            Expression::Var(_) | Expression::Literal(_) | Expression::Iri(_) => {}
            Expression::Binary { left, right, .. } => {
                self.visit(Node::Expression(left));
                self.visit(Node::Expression(right));
            }
            Expression::Unary { operand, .. } => self.visit(Node::Expression(operand)),
            Expression::FunctionCall { args, .. } | Expression::Coalesce { args, .. } => {
                for arg in args {
                    self.visit(Node::Expression(arg));
                }
            }
            Expression::If {
                condition,
                then_expr,
                else_expr,
                ..
            } => {
                self.visit(Node::Expression(condition));
                self.visit(Node::Expression(then_expr));
                self.visit(Node::Expression(else_expr));
            }
            Expression::In { expr, list, .. } => {
                self.visit(Node::Expression(expr));
                for item in list {
                    self.visit(Node::Expression(item));
                }
            }
            Expression::Exists { pattern, .. } | Expression::NotExists { pattern, .. } => {
                self.visit(Node::Pattern(pattern));
            }
            Expression::Aggregate { expr, .. } => {
                if let Some(expr) = expr {
                    self.visit(Node::Expression(expr));
                }
            }
            Expression::Bracketed { inner, .. } => self.visit(Node::Expression(inner)),
        }
    }
}
