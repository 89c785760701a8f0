//! Triple, VALUES and graph pattern rewriting.

use crate::ast::{
    BasicPattern, Binding, GraphPattern, Term, TriplePath, TriplePattern, ValuesBlock, Var,
};
use std::collections::HashSet;

use super::{Result, RewriteError, Rewriter};

impl Rewriter<'_> {
    pub fn rewrite_triple(&self, triple: &TriplePattern) -> Result<TriplePattern> {
        Ok(TriplePattern {
            subject: self.rewrite_term(&triple.subject)?,
            predicate: self.rewrite_term(&triple.predicate)?,
            object: self.rewrite_term(&triple.object)?,
            span: triple.span,
        })
    }

    pub fn rewrite_triple_path(&self, triple: &TriplePath) -> Result<TriplePath> {
        Ok(match triple {
            TriplePath::Triple(t) => TriplePath::Triple(self.rewrite_triple(t)?),
            TriplePath::Path {
                subject,
                path,
                object,
                span,
            } => TriplePath::Path {
                subject: self.rewrite_term(subject)?,
                path: self.rewrite_path(path)?,
                object: self.rewrite_term(object)?,
                span: *span,
            },
        })
    }

    pub fn rewrite_basic_pattern(&self, bgp: &BasicPattern) -> Result<BasicPattern> {
        Ok(BasicPattern {
            triples: self.rewrite_triples(&bgp.triples)?,
            span: bgp.span,
        })
    }

    pub(super) fn rewrite_triples(&self, triples: &[TriplePattern]) -> Result<Vec<TriplePattern>> {
        triples.iter().map(|t| self.rewrite_triple(t)).collect()
    }

    /// Rewrite one VALUES row against the block's variable list.
    ///
    /// Rows may only bind listed variables, each at most once, and only to
    /// ground terms.
    pub fn rewrite_binding(&self, binding: &Binding, vars: &[Var]) -> Result<Binding> {
        let mut seen = HashSet::with_capacity(binding.entries.len());
        let mut entries = Vec::with_capacity(binding.entries.len());
        for (var, term) in &binding.entries {
            if !vars.iter().any(|v| v.name == var.name) {
                return Err(RewriteError::unknown_binding_variable(
                    var.name.clone(),
                    var.span,
                ));
            }
            if !seen.insert(var.name.clone()) {
                return Err(RewriteError::duplicate_binding(var.name.clone(), var.span));
            }
            if let Term::Var(_) = term {
                return Err(RewriteError::variable_in_binding(
                    var.name.clone(),
                    term.span(),
                ));
            }
            entries.push((var.clone(), self.rewrite_term(term)?));
        }
        Ok(Binding {
            entries,
            span: binding.span,
        })
    }

    pub fn rewrite_values(&self, values: &ValuesBlock) -> Result<ValuesBlock> {
        Ok(ValuesBlock {
            vars: values.vars.clone(),
            rows: values
                .rows
                .iter()
                .map(|row| self.rewrite_binding(row, &values.vars))
                .collect::<Result<_>>()?,
            span: values.span,
        })
    }

    pub fn rewrite_graph_pattern(&self, pattern: &GraphPattern) -> Result<GraphPattern> {
        let boxed = |p: &GraphPattern| -> Result<Box<GraphPattern>> {
            Ok(Box::new(self.rewrite_graph_pattern(p)?))
        };

        Ok(match pattern {
            GraphPattern::Triples(bgp) => GraphPattern::Triples(self.rewrite_basic_pattern(bgp)?),
            GraphPattern::Paths { triples, span } => GraphPattern::Paths {
                triples: triples
                    .iter()
                    .map(|t| self.rewrite_triple_path(t))
                    .collect::<Result<_>>()?,
                span: *span,
            },
            GraphPattern::Filter { expr, span } => GraphPattern::Filter {
                expr: self.rewrite_expression(expr)?,
                span: *span,
            },
            GraphPattern::Bind { expr, var, span } => GraphPattern::Bind {
                expr: self.rewrite_expression(expr)?,
                var: var.clone(),
                span: *span,
            },
            GraphPattern::Assign { var, expr, span } => GraphPattern::Assign {
                var: var.clone(),
                expr: self.rewrite_expression(expr)?,
                span: *span,
            },
            GraphPattern::Values(values) => GraphPattern::Values(self.rewrite_values(values)?),
            GraphPattern::Union { branches, span } => GraphPattern::Union {
                branches: self.rewrite_graph_patterns(branches)?,
                span: *span,
            },
            GraphPattern::Optional { pattern, span } => GraphPattern::Optional {
                pattern: boxed(pattern)?,
                span: *span,
            },
            GraphPattern::Group { elements, span } => GraphPattern::Group {
                elements: self.rewrite_graph_patterns(elements)?,
                span: *span,
            },
            GraphPattern::Graph {
                name,
                pattern,
                span,
            } => GraphPattern::Graph {
                name: self.rewrite_term(name)?,
                pattern: boxed(pattern)?,
                span: *span,
            },
            GraphPattern::Dataset {
                dataset,
                pattern,
                span,
            } => GraphPattern::Dataset {
                dataset: dataset.clone(),
                pattern: boxed(pattern)?,
                span: *span,
            },
            GraphPattern::Exists { pattern, span } => GraphPattern::Exists {
                pattern: boxed(pattern)?,
                span: *span,
            },
            GraphPattern::NotExists { pattern, span } => GraphPattern::NotExists {
                pattern: boxed(pattern)?,
                span: *span,
            },
            GraphPattern::Minus { pattern, span } => GraphPattern::Minus {
                pattern: boxed(pattern)?,
                span: *span,
            },
            GraphPattern::SubSelect { query, span } => GraphPattern::SubSelect {
                query: Box::new(self.rewrite_select_query(query)?),
                span: *span,
            },
            // Remote endpoints see live IRIs.
            GraphPattern::Service {
                silent,
                endpoint,
                pattern,
                span,
            } => {
                let verbatim = self.passthrough();
                GraphPattern::Service {
                    silent: *silent,
                    endpoint: verbatim.rewrite_term(endpoint)?,
                    pattern: Box::new(verbatim.rewrite_graph_pattern(pattern)?),
                    span: *span,
                }
            }
        })
    }

    fn rewrite_graph_patterns(&self, patterns: &[GraphPattern]) -> Result<Vec<GraphPattern>> {
        patterns
            .iter()
            .map(|p| self.rewrite_graph_pattern(p))
            .collect()
    }
}
