//! Shared fixtures for drafter-sparql integration tests.
//!
//! `rich_query()` builds a SELECT touching every pattern element, path
//! operator and solution modifier, so rewrites and flattening can be
//! checked against the whole grammar at once.

#![allow(dead_code)]

use drafter_sparql::ast::*;
use drafter_sparql::{flatten, Node, SourceSpan, UriMapping};

pub const LIVE_GRAPH: &str = "http://live/graph/1";
pub const DRAFT_GRAPH: &str = "http://draft/graph/1";
pub const LIVE_NS: &str = "http://live/def/";
pub const DRAFT_NS: &str = "http://draft/def/";
pub const LIVE_PRED: &str = "http://live/def/p";
pub const DRAFT_PRED: &str = "http://draft/def/p";
pub const LIVE_FN: &str = "http://live/def/fn";
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// Live to draft substitutions used throughout the tests.
pub fn mapping() -> UriMapping {
    UriMapping::new()
        .with(LIVE_GRAPH, DRAFT_GRAPH)
        .with(LIVE_NS, DRAFT_NS)
        .with(LIVE_PRED, DRAFT_PRED)
        .with(LIVE_FN, "http://draft/def/fn")
}

/// A span unique to each call site, so span preservation is observable.
pub fn at(n: usize) -> SourceSpan {
    SourceSpan::new(n, n + 1)
}

pub fn var(name: &str, n: usize) -> Var {
    Var::new(name, at(n))
}

pub fn v(name: &str, n: usize) -> Term {
    Term::Var(var(name, n))
}

pub fn iri(value: &str, n: usize) -> Term {
    Term::Iri(Iri::full(value, at(n)))
}

pub fn pname(local: &str, n: usize) -> Iri {
    Iri::prefixed("def", local, at(n))
}

pub fn triple(s: Term, p: Term, o: Term, n: usize) -> TriplePattern {
    TriplePattern::new(s, p, o, at(n))
}

pub fn group(elements: Vec<GraphPattern>, n: usize) -> GraphPattern {
    GraphPattern::group(elements, at(n))
}

pub fn prologue() -> Prologue {
    Prologue::new()
        .with_base(BaseDecl::new("http://example.org/base/", at(1)))
        .with_prefix(PrefixDecl::new("def", LIVE_NS, at(2)))
        .with_prefix(PrefixDecl::new("xsd", XSD, at(3)))
        .with_prefix(PrefixDecl::new("g", "http://live/graph/", at(4)))
}

fn paths() -> GraphPattern {
    let star = PropertyPath::zero_or_more(
        PropertyPath::sequence(
            PropertyPath::link(pname("p", 20)),
            PropertyPath::inverse(PropertyPath::link(Iri::full(LIVE_PRED, at(21))), at(22)),
            at(23),
        ),
        at(24),
    );
    let negated = PropertyPath::NegatedSet {
        members: vec![
            NegatedPredicate::Forward(pname("p", 25)),
            NegatedPredicate::Inverse(pname("q", 26)),
        ],
        span: at(27),
    };
    let bounded = PropertyPath::repeat(PropertyPath::link(pname("p", 28)), Some(1), Some(3), at(29));
    let fixed = PropertyPath::fixed_length(PropertyPath::link(pname("p", 30)), 2, at(31));
    let alt = PropertyPath::alternative(
        PropertyPath::one_or_more(PropertyPath::link(pname("p", 32)), at(33)),
        PropertyPath::zero_or_one(PropertyPath::ReverseLink(Iri::full(LIVE_PRED, at(34))), at(35)),
        at(36),
    );
    let extended = PropertyPath::Shortest {
        path: Box::new(PropertyPath::Multi {
            path: Box::new(PropertyPath::Distinct {
                path: Box::new(PropertyPath::link(pname("p", 37))),
                span: at(38),
            }),
            span: at(39),
        }),
        span: at(40),
    };

    let path_triple = |path, n| TriplePath::Path {
        subject: v("s", n),
        path,
        object: v("o", n + 1),
        span: at(n + 2),
    };
    GraphPattern::Paths {
        triples: vec![
            path_triple(star, 41),
            path_triple(negated, 44),
            path_triple(bounded, 47),
            path_triple(fixed, 50),
            path_triple(alt, 53),
            path_triple(extended, 56),
            TriplePath::Triple(triple(v("s", 59), iri(LIVE_PRED, 60), v("o", 61), 62)),
        ],
        span: at(63),
    }
}

fn expressions() -> Vec<GraphPattern> {
    let filter = GraphPattern::filter(
        Expression::binary(
            BinaryOp::Or,
            Expression::binary(
                BinaryOp::Eq,
                Expression::var(var("o", 70)),
                Expression::iri(Iri::full(LIVE_GRAPH, at(71))),
                at(72),
            ),
            Expression::binary(
                BinaryOp::Eq,
                Expression::literal(Literal::string(LIVE_GRAPH, at(73))),
                Expression::function_call(
                    FunctionName::Str,
                    vec![Expression::var(var("s", 74))],
                    at(75),
                ),
                at(76),
            ),
            at(77),
        ),
        at(78),
    );
    let bind = GraphPattern::Bind {
        expr: Expression::If {
            condition: Box::new(Expression::function_call(
                FunctionName::Bound,
                vec![Expression::var(var("x", 80))],
                at(81),
            )),
            then_expr: Box::new(Expression::iri(Iri::full(LIVE_GRAPH, at(82)))),
            else_expr: Box::new(Expression::Coalesce {
                args: vec![
                    Expression::var(var("y", 83)),
                    Expression::literal(Literal::lang_string(LIVE_GRAPH, "en", at(84))),
                ],
                span: at(85),
            }),
            span: at(86),
        },
        var: var("b", 87),
        span: at(88),
    };
    let assign = GraphPattern::Assign {
        var: var("c", 90),
        expr: Expression::In {
            expr: Box::new(Expression::var(var("s", 91))),
            list: vec![
                Expression::iri(Iri::full(LIVE_GRAPH, at(92))),
                Expression::iri(Iri::full("http://other/", at(93))),
            ],
            negated: false,
            span: at(94),
        },
        span: at(95),
    };
    let extension = GraphPattern::filter(
        Expression::Unary {
            op: UnaryOp::Not,
            operand: Box::new(Expression::Bracketed {
                inner: Box::new(Expression::FunctionCall {
                    name: FunctionName::Extension(Iri::full(LIVE_FN, at(96))),
                    args: vec![Expression::var(var("s", 97))],
                    distinct: false,
                    span: at(98),
                }),
                span: at(99),
            }),
            span: at(100),
        },
        at(101),
    );
    let not_exists = GraphPattern::filter(
        Expression::NotExists {
            pattern: Box::new(group(
                vec![GraphPattern::triples(
                    vec![triple(v("s", 102), iri(LIVE_PRED, 103), iri(LIVE_GRAPH, 104), 105)],
                    at(106),
                )],
                107,
            )),
            span: at(108),
        },
        at(109),
    );
    vec![filter, bind, assign, extension, not_exists]
}

pub fn inline_values(n: usize) -> ValuesBlock {
    ValuesBlock::new(
        vec![var("v", n), var("w", n + 1)],
        vec![
            Binding::new(
                vec![
                    (var("v", n + 2), iri(LIVE_GRAPH, n + 3)),
                    (
                        var("w", n + 4),
                        Term::Literal(Literal::typed(
                            LIVE_GRAPH,
                            Iri::prefixed("xsd", "string", at(n + 5)),
                            at(n + 6),
                        )),
                    ),
                ],
                at(n + 7),
            ),
            Binding::new(
                vec![(var("w", n + 8), Term::Literal(Literal::integer(1, at(n + 9))))],
                at(n + 10),
            ),
        ],
        at(n + 11),
    )
}

fn sub_select() -> SelectQuery {
    let count = Expression::Aggregate {
        function: AggregateFunction::Count,
        expr: Some(Box::new(Expression::var(var("s", 200)))),
        distinct: true,
        separator: None,
        span: at(201),
    };
    let modifiers = SolutionModifiers::new().with_group_by(GroupByClause {
        conditions: vec![GroupCondition::Var(var("o", 202))],
        span: at(203),
    });
    SelectQuery::new(
        SelectClause::variables(
            vec![SelectVariable::Expr {
                expr: count,
                alias: var("n", 204),
                span: at(205),
            }],
            at(206),
        ),
        WhereClause::new(
            group(
                vec![GraphPattern::triples(
                    vec![triple(v("s", 207), Term::Iri(pname("p", 208)), v("o", 209), 210)],
                    at(211),
                )],
                212,
            ),
            true,
            at(213),
        ),
        modifiers,
        at(214),
    )
}

/// The SERVICE element in `rich_query()`; it must survive rewriting untouched.
pub fn service() -> GraphPattern {
    GraphPattern::Service {
        silent: true,
        endpoint: iri(LIVE_GRAPH, 300),
        pattern: Box::new(group(
            vec![GraphPattern::triples(
                vec![triple(v("s", 301), iri(LIVE_PRED, 302), iri(LIVE_GRAPH, 303), 304)],
                at(305),
            )],
            306,
        )),
        span: at(307),
    }
}

fn where_pattern() -> GraphPattern {
    let mut elements = vec![
        GraphPattern::triples(
            vec![
                triple(v("s", 10), Term::Iri(pname("p", 11)), v("o", 12), 13),
                triple(
                    v("s", 14),
                    Term::Iri(Iri::rdf_type(at(15))),
                    Term::Iri(pname("Class", 16)),
                    17,
                ),
            ],
            at(18),
        ),
        paths(),
    ];
    elements.extend(expressions());
    elements.extend([
        GraphPattern::Values(inline_values(110)),
        GraphPattern::Union {
            branches: vec![
                group(
                    vec![GraphPattern::triples(
                        vec![triple(
                            Term::BlankNode(BlankNode::labeled("b1", at(130))),
                            Term::Iri(pname("p", 131)),
                            Term::BlankNode(BlankNode::anon(at(132))),
                            133,
                        )],
                        at(134),
                    )],
                    135,
                ),
                group(
                    vec![GraphPattern::triples(
                        vec![triple(v("s", 136), Term::Any { span: at(137) }, v("o", 138), 139)],
                        at(140),
                    )],
                    141,
                ),
            ],
            span: at(142),
        },
        GraphPattern::optional(
            group(
                vec![GraphPattern::triples(
                    vec![triple(
                        v("s", 150),
                        Term::Iri(pname("q", 151)),
                        Term::Literal(Literal::lang_string("x", "en", at(152))),
                        153,
                    )],
                    at(154),
                )],
                155,
            ),
            at(156),
        ),
        GraphPattern::graph(
            iri(LIVE_GRAPH, 160),
            group(
                vec![GraphPattern::triples(
                    vec![triple(v("s", 161), v("p", 162), v("o", 163), 164)],
                    at(165),
                )],
                166,
            ),
            at(167),
        ),
        GraphPattern::Dataset {
            dataset: DatasetRef::new("draftset-1"),
            pattern: Box::new(group(
                vec![GraphPattern::triples(
                    vec![triple(v("s", 170), iri(LIVE_PRED, 171), v("o", 172), 173)],
                    at(174),
                )],
                175,
            )),
            span: at(176),
        },
        GraphPattern::Exists {
            pattern: Box::new(group(
                vec![GraphPattern::triples(
                    vec![triple(iri(LIVE_GRAPH, 177), v("p", 178), v("o", 179), 180)],
                    at(181),
                )],
                182,
            )),
            span: at(183),
        },
        GraphPattern::NotExists {
            pattern: Box::new(group(vec![], 184)),
            span: at(185),
        },
        GraphPattern::minus(
            group(
                vec![GraphPattern::triples(
                    vec![triple(
                        v("s", 186),
                        Term::Iri(pname("p", 187)),
                        Term::Literal(Literal::double(1.5, at(188))),
                        189,
                    )],
                    at(190),
                )],
                191,
            ),
            at(192),
        ),
        GraphPattern::SubSelect {
            query: Box::new(sub_select()),
            span: at(215),
        },
        service(),
    ]);
    group(elements, 400)
}

fn modifiers() -> SolutionModifiers {
    SolutionModifiers::new()
        .with_group_by(GroupByClause {
            conditions: vec![
                GroupCondition::Var(var("s", 410)),
                GroupCondition::Expr {
                    expr: Expression::function_call(
                        FunctionName::Str,
                        vec![Expression::iri(Iri::full(LIVE_GRAPH, at(411)))],
                        at(412),
                    ),
                    alias: Some(var("g", 413)),
                    span: at(414),
                },
            ],
            span: at(415),
        })
        .with_having(HavingClause {
            conditions: vec![Expression::binary(
                BinaryOp::Gt,
                Expression::Aggregate {
                    function: AggregateFunction::Count,
                    expr: None,
                    distinct: false,
                    separator: None,
                    span: at(416),
                },
                Expression::literal(Literal::integer(1, at(417))),
                at(418),
            )],
            span: at(419),
        })
        .with_order_by(OrderByClause {
            conditions: vec![
                OrderCondition {
                    expr: OrderExpr::Var(var("s", 420)),
                    direction: OrderDirection::Desc,
                    span: at(421),
                },
                OrderCondition {
                    expr: OrderExpr::Expr(Expression::function_call(
                        FunctionName::Str,
                        vec![Expression::var(var("o", 422))],
                        at(423),
                    )),
                    direction: OrderDirection::Asc,
                    span: at(424),
                },
            ],
            span: at(425),
        })
        .with_limit(LimitClause::new(10, at(426)))
        .with_offset(OffsetClause::new(5, at(427)))
}

/// A SELECT query using every construct the rewriter handles.
pub fn rich_query() -> SparqlAst {
    let mut select = SelectClause::variables(
        vec![
            SelectVariable::Var(var("s", 500)),
            SelectVariable::Expr {
                expr: Expression::function_call(
                    FunctionName::Str,
                    vec![Expression::iri(Iri::full(LIVE_GRAPH, at(501)))],
                    at(502),
                ),
                alias: var("label", 503),
                span: at(504),
            },
        ],
        at(505),
    );
    select.modifier = Some(SelectModifier::Distinct);

    let query = SelectQuery::new(
        select,
        WhereClause::new(where_pattern(), true, at(506)),
        modifiers(),
        at(507),
    )
    .with_dataset(DatasetClause::new(
        vec![Iri::full(LIVE_GRAPH, at(508))],
        vec![Iri::prefixed("g", "2", at(509))],
        at(510),
    ))
    .with_values(ValuesBlock::new(
        vec![var("s", 511)],
        vec![Binding::new(vec![(var("s", 512), iri(LIVE_GRAPH, 513))], at(514))],
        at(515),
    ));

    SparqlAst::new(prologue(), QueryBody::Select(query), at(0))
}

/// A SELECT over `pattern` with the standard prologue.
pub fn select_where(pattern: GraphPattern) -> SparqlAst {
    let query = SelectQuery::new(
        SelectClause::star(at(0)),
        WhereClause::new(pattern, true, at(0)),
        SolutionModifiers::new(),
        at(0),
    );
    SparqlAst::new(prologue(), QueryBody::Select(query), at(0))
}

/// An update request covering every operation kind.
pub fn rich_update() -> SparqlAst {
    let data = |n| {
        QuadPattern::new(
            vec![
                QuadBlock::Triples(BasicPattern::new(
                    vec![triple(iri(LIVE_GRAPH, n), Term::Iri(pname("p", n + 1)), iri(LIVE_GRAPH, n + 2), n + 3)],
                    at(n + 4),
                )),
                QuadBlock::Graph {
                    name: iri(LIVE_GRAPH, n + 5),
                    triples: BasicPattern::new(
                        vec![triple(
                            iri("http://example.org/s", n + 6),
                            iri(LIVE_PRED, n + 7),
                            Term::Literal(Literal::string("o", at(n + 8))),
                            n + 9,
                        )],
                        at(n + 10),
                    ),
                    span: at(n + 11),
                },
            ],
            at(n + 12),
        )
    };
    let template = |n| {
        QuadPattern::default_graph(BasicPattern::new(
            vec![triple(v("s", n), iri(LIVE_PRED, n + 1), v("o", n + 2), n + 3)],
            at(n + 4),
        ))
    };
    let modify = Modify::new(
        Some(template(100)),
        Some(template(110)),
        group(
            vec![GraphPattern::triples(
                vec![triple(v("s", 120), Term::Iri(pname("p", 121)), v("o", 122), 123)],
                at(124),
            )],
            125,
        ),
        at(126),
    )
    .with_graph(Iri::full(LIVE_GRAPH, at(127)))
    .with_using(UsingClause {
        default_graphs: vec![Iri::full(LIVE_GRAPH, at(128))],
        named_graphs: vec![Iri::full("http://live/graph/2", at(129))],
        span: at(130),
    });

    let request = UpdateRequest::new(
        vec![
            UpdateOperation::InsertData(InsertData::new(data(10), at(30))),
            UpdateOperation::DeleteData(DeleteData::new(data(40), at(60))),
            UpdateOperation::DeleteWhere(DeleteWhere::new(data(70), at(90))),
            UpdateOperation::Modify(Box::new(modify)),
        ],
        at(131),
    );
    SparqlAst::new(prologue(), QueryBody::Update(request), at(0))
}

/// Nodes of `root` outside any SERVICE element.
pub fn outside_service<'a>(root: impl Into<Node<'a>>) -> Vec<Node<'a>> {
    let nodes = flatten(root);
    let mut kept = Vec::with_capacity(nodes.len());
    let mut i = 0;
    while i < nodes.len() {
        if let Node::Pattern(pattern) = nodes[i] {
            if matches!(pattern, GraphPattern::Service { .. }) {
                i += flatten(pattern).len();
                continue;
            }
        }
        kept.push(nodes[i]);
        i += 1;
    }
    kept
}

/// Every full IRI written in a term or IRI position.
pub fn full_iris<'a>(nodes: &[Node<'a>]) -> Vec<&'a str> {
    nodes
        .iter()
        .filter_map(|node| match *node {
            Node::Term(Term::Iri(iri)) | Node::Iri(iri) => iri.as_full(),
            Node::Expression(Expression::Iri(iri)) => iri.as_full(),
            _ => None,
        })
        .collect()
}
