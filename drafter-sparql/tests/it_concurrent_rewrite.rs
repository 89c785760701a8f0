//! Rewriting shares nothing mutable, so independent queries can be rewritten
//! from many threads against one mapping.

mod support;

use drafter_sparql::ast::*;
use drafter_sparql::rewrite_ast;
use support::*;

fn numbered_query(i: usize) -> SparqlAst {
    let graph = format!("http://live/graph/{}", i % 4);
    select_where(group(
        vec![
            GraphPattern::graph(
                iri(&graph, 1),
                group(
                    vec![GraphPattern::triples(
                        vec![triple(
                            v("s", 2),
                            iri(LIVE_PRED, 3),
                            Term::Literal(Literal::integer(i as i64, at(4))),
                            5,
                        )],
                        at(6),
                    )],
                    7,
                ),
                at(8),
            ),
            service(),
        ],
        9,
    ))
}

#[test]
fn concurrent_rewrites_match_sequential_rewrites() {
    let mapping = mapping();
    let queries: Vec<SparqlAst> = (0..64)
        .map(numbered_query)
        .chain([rich_query(), rich_update()])
        .collect();

    let sequential: Vec<_> = queries
        .iter()
        .map(|q| rewrite_ast(&mapping, q).expect("rewrite"))
        .collect();

    let mapping = &mapping;
    let concurrent: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = queries
            .iter()
            .map(|q| scope.spawn(move || rewrite_ast(mapping, q).expect("rewrite")))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("rewrite thread panicked"))
            .collect()
    });

    assert_eq!(concurrent, sequential);
    // graph 1 is mapped, the others pass through
    assert!(sequential[1].to_string().contains("GRAPH <http://draft/graph/1>"));
    assert!(sequential[2].to_string().contains("GRAPH <http://live/graph/2>"));
}
