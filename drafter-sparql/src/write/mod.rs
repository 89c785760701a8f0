//! SPARQL text output.
//!
//! Every AST node implements [`std::fmt::Display`], producing SPARQL that
//! a conforming parser reads back into an equivalent tree. Output is a
//! single line per query or update operation; no attempt is made to keep
//! the layout of the original text.

mod expr;
mod path;
mod pattern;
mod query;
mod term;
mod update;

use crate::ast::{GraphPattern, TriplePattern};
use std::fmt::{self, Display, Formatter};

/// Write `items` separated by `sep`.
fn write_separated<T: Display>(f: &mut Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Write a quoted string literal body, escaping as SPARQL `STRING_LITERAL2`.
fn write_quoted(f: &mut Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

/// Write a pattern in a position that requires braces.
///
/// Groups already carry their braces; anything else is wrapped.
fn write_braced(f: &mut Formatter<'_>, pattern: &GraphPattern) -> fmt::Result {
    if pattern.is_group() {
        write!(f, "{pattern}")
    } else {
        write!(f, "{{ {pattern} }}")
    }
}

/// Write `{ s p o . ... }`.
fn write_triples_braced(f: &mut Formatter<'_>, triples: &[TriplePattern]) -> fmt::Result {
    if triples.is_empty() {
        return f.write_str("{ }");
    }
    f.write_str("{ ")?;
    write_separated(f, triples, " ")?;
    f.write_str(" }")
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::span::SourceSpan;

    fn span() -> SourceSpan {
        SourceSpan::point(0)
    }

    fn var(name: &str) -> Term {
        Term::Var(Var::new(name, span()))
    }

    fn iri(value: &str) -> Iri {
        Iri::full(value, span())
    }

    fn triple(s: Term, p: Term, o: Term) -> TriplePattern {
        TriplePattern::new(s, p, o, span())
    }

    #[test]
    fn test_literal_escaping() {
        let lit = Literal::string("say \"hi\"\n\\", span());
        assert_eq!(lit.to_string(), r#""say \"hi\"\n\\""#);

        let lang = Literal::lang_string("chat", "fr", span());
        assert_eq!(lang.to_string(), "\"chat\"@fr");

        let typed = Literal::typed("x", Iri::prefixed("xsd", "string", span()), span());
        assert_eq!(typed.to_string(), "\"x\"^^xsd:string");
    }

    #[test]
    fn test_numeric_literals() {
        assert_eq!(Literal::integer(-7, span()).to_string(), "-7");
        assert_eq!(Literal::decimal("3.140", span()).to_string(), "3.140");
        assert_eq!(Literal::double(1.5e10, span()).to_string(), "1.5e10");
        assert_eq!(Literal::double(1.0, span()).to_string(), "1e0");
        assert_eq!(
            Literal::double(f64::NAN, span()).to_string(),
            "\"NaN\"^^<http://www.w3.org/2001/XMLSchema#double>"
        );
        assert_eq!(Literal::boolean(false, span()).to_string(), "false");
    }

    #[test]
    fn test_terms() {
        assert_eq!(var("x").to_string(), "?x");
        assert_eq!(Term::Iri(iri("http://example.org/a")).to_string(), "<http://example.org/a>");
        assert_eq!(Term::BlankNode(BlankNode::labeled("b0", span())).to_string(), "_:b0");
        assert_eq!(Term::Any { span: span() }.to_string(), "[]");
    }

    #[test]
    fn test_paths() {
        let p = || PropertyPath::link(Iri::prefixed("ex", "p", span()));
        let q = || PropertyPath::ReverseLink(Iri::prefixed("ex", "q", span()));

        let seq = PropertyPath::sequence(p(), PropertyPath::one_or_more(q(), span()), span());
        assert_eq!(seq.to_string(), "ex:p/(^ex:q)+");

        let alt = PropertyPath::alternative(seq, p(), span());
        assert_eq!(alt.to_string(), "ex:p/(^ex:q)+|ex:p");

        let inverse_seq = PropertyPath::inverse(PropertyPath::sequence(p(), p(), span()), span());
        assert_eq!(inverse_seq.to_string(), "^(ex:p/ex:p)");

        let negated = PropertyPath::NegatedSet {
            members: vec![
                NegatedPredicate::Forward(Iri::prefixed("ex", "p", span())),
                NegatedPredicate::Inverse(Iri::prefixed("ex", "q", span())),
            ],
            span: span(),
        };
        assert_eq!(negated.to_string(), "!(ex:p|^ex:q)");

        assert_eq!(PropertyPath::repeat(p(), Some(1), Some(3), span()).to_string(), "ex:p{1,3}");
        assert_eq!(PropertyPath::repeat(p(), None, Some(3), span()).to_string(), "ex:p{,3}");
        assert_eq!(PropertyPath::fixed_length(p(), 2, span()).to_string(), "ex:p{2}");
        assert_eq!(
            PropertyPath::Shortest {
                path: Box::new(p()),
                span: span()
            }
            .to_string(),
            "shortest(ex:p)"
        );
    }

    #[test]
    fn test_expressions() {
        let x = || Expression::var(Var::new("x", span()));
        let sum = Expression::binary(
            BinaryOp::Add,
            x(),
            Expression::literal(Literal::integer(1, span())),
            span(),
        );
        let cmp = Expression::binary(
            BinaryOp::Gt,
            sum,
            Expression::literal(Literal::integer(3, span())),
            span(),
        );
        assert_eq!(cmp.to_string(), "(?x + 1) > 3");

        let negated = Expression::unary(UnaryOp::Not, cmp, span());
        assert_eq!(negated.to_string(), "!((?x + 1) > 3)");

        let call = Expression::function_call(
            FunctionName::StrStarts,
            vec![
                Expression::function_call(FunctionName::Str, vec![x()], span()),
                Expression::literal(Literal::string("http://", span())),
            ],
            span(),
        );
        assert_eq!(call.to_string(), "STRSTARTS(STR(?x), \"http://\")");

        let count = Expression::Aggregate {
            function: AggregateFunction::Count,
            expr: None,
            distinct: true,
            separator: None,
            span: span(),
        };
        assert_eq!(count.to_string(), "COUNT(DISTINCT *)");

        let concat = Expression::Aggregate {
            function: AggregateFunction::GroupConcat,
            expr: Some(Box::new(x())),
            distinct: false,
            separator: Some("; ".into()),
            span: span(),
        };
        assert_eq!(concat.to_string(), "GROUP_CONCAT(?x; SEPARATOR=\"; \")");

        let within = Expression::In {
            expr: Box::new(x()),
            list: vec![Expression::iri(iri("http://example.org/a"))],
            negated: true,
            span: span(),
        };
        assert_eq!(within.to_string(), "?x NOT IN (<http://example.org/a>)");
    }

    #[test]
    fn test_group_elements() {
        let bgp = GraphPattern::triples(
            vec![
                triple(var("s"), Term::Iri(iri("http://example.org/p")), var("o")),
                triple(var("o"), Term::Iri(iri("http://example.org/q")), var("z")),
            ],
            span(),
        );
        let optional = GraphPattern::optional(
            GraphPattern::triples(
                vec![triple(var("s"), Term::Iri(iri("http://example.org/r")), var("r"))],
                span(),
            ),
            span(),
        );
        let filter = GraphPattern::filter(
            Expression::function_call(
                FunctionName::Bound,
                vec![Expression::var(Var::new("r", span()))],
                span(),
            ),
            span(),
        );
        let group = GraphPattern::group(vec![bgp, optional, filter], span());

        assert_eq!(
            group.to_string(),
            "{ ?s <http://example.org/p> ?o . ?o <http://example.org/q> ?z . \
             OPTIONAL { ?s <http://example.org/r> ?r . } FILTER(BOUND(?r)) }"
        );
    }

    #[test]
    fn test_values_block() {
        let values = ValuesBlock::new(
            vec![Var::new("a", span()), Var::new("b", span())],
            vec![
                Binding::new(
                    vec![
                        (Var::new("a", span()), Term::Iri(iri("http://example.org/1"))),
                        (Var::new("b", span()), Term::Literal(Literal::integer(2, span()))),
                    ],
                    span(),
                ),
                Binding::new(
                    vec![(Var::new("b", span()), Term::Literal(Literal::integer(3, span())))],
                    span(),
                ),
            ],
            span(),
        );
        assert_eq!(
            GraphPattern::Values(values).to_string(),
            "VALUES (?a ?b) { (<http://example.org/1> 2) (UNDEF 3) }"
        );
    }

    #[test]
    fn test_select_with_prologue_and_modifiers() {
        let prologue = Prologue::new()
            .with_base(BaseDecl::new("http://example.org/", span()))
            .with_prefix(PrefixDecl::new("ex", "http://example.org/", span()));

        let mut select = SelectClause::variables(
            vec![
                SelectVariable::Var(Var::new("s", span())),
                SelectVariable::Expr {
                    expr: Expression::Aggregate {
                        function: AggregateFunction::Count,
                        expr: Some(Box::new(Expression::var(Var::new("o", span())))),
                        distinct: false,
                        separator: None,
                        span: span(),
                    },
                    alias: Var::new("n", span()),
                    span: span(),
                },
            ],
            span(),
        );
        select.modifier = Some(SelectModifier::Distinct);

        let modifiers = SolutionModifiers::new()
            .with_group_by(GroupByClause {
                conditions: vec![GroupCondition::Var(Var::new("s", span()))],
                span: span(),
            })
            .with_order_by(OrderByClause {
                conditions: vec![OrderCondition {
                    expr: OrderExpr::Var(Var::new("n", span())),
                    direction: OrderDirection::Desc,
                    span: span(),
                }],
                span: span(),
            })
            .with_limit(LimitClause::new(10, span()))
            .with_offset(OffsetClause::new(20, span()));

        let where_clause = WhereClause::new(
            GraphPattern::group(
                vec![GraphPattern::triples(
                    vec![triple(
                        var("s"),
                        Term::Iri(Iri::prefixed("ex", "p", span())),
                        var("o"),
                    )],
                    span(),
                )],
                span(),
            ),
            true,
            span(),
        );
        let query = SelectQuery::new(select, where_clause, modifiers, span()).with_dataset(
            DatasetClause::new(
                vec![iri("http://example.org/g1")],
                vec![iri("http://example.org/g2")],
                span(),
            ),
        );
        let ast = SparqlAst::new(prologue, QueryBody::Select(query), span());

        assert_eq!(
            ast.to_string(),
            "BASE <http://example.org/>\n\
             PREFIX ex: <http://example.org/>\n\
             SELECT DISTINCT ?s (COUNT(?o) AS ?n) FROM <http://example.org/g1> \
             FROM NAMED <http://example.org/g2> WHERE { ?s ex:p ?o . } \
             GROUP BY ?s ORDER BY DESC(?n) LIMIT 10 OFFSET 20"
        );
    }

    #[test]
    fn test_update_request() {
        let data = QuadPattern::new(
            vec![
                QuadBlock::Triples(BasicPattern::new(
                    vec![triple(
                        Term::Iri(iri("http://example.org/s")),
                        Term::Iri(iri("http://example.org/p")),
                        Term::Literal(Literal::string("v", span())),
                    )],
                    span(),
                )),
                QuadBlock::Graph {
                    name: Term::Iri(iri("http://example.org/g")),
                    triples: BasicPattern::new(vec![], span()),
                    span: span(),
                },
            ],
            span(),
        );
        let modify = Modify::new(
            Some(QuadPattern::default_graph(BasicPattern::new(
                vec![triple(var("s"), Term::Iri(iri("http://example.org/old")), var("o"))],
                span(),
            ))),
            None,
            GraphPattern::group(
                vec![GraphPattern::triples(
                    vec![triple(var("s"), Term::Iri(iri("http://example.org/old")), var("o"))],
                    span(),
                )],
                span(),
            ),
            span(),
        )
        .with_graph(iri("http://example.org/g"));

        let request = UpdateRequest::new(
            vec![
                UpdateOperation::InsertData(InsertData::new(data, span())),
                UpdateOperation::Modify(Box::new(modify)),
            ],
            span(),
        );
        let ast = SparqlAst::new(Prologue::new(), QueryBody::Update(request), span());

        assert_eq!(
            ast.to_string(),
            "INSERT DATA { <http://example.org/s> <http://example.org/p> \"v\" . \
             GRAPH <http://example.org/g> { } } ;\n\
             WITH <http://example.org/g> DELETE { ?s <http://example.org/old> ?o . } \
             WHERE { ?s <http://example.org/old> ?o . }"
        );
    }
}
