//! SPARQL Update rewriting.

use crate::ast::{
    DeleteData, DeleteWhere, InsertData, Modify, QuadBlock, QuadPattern, UpdateOperation,
    UpdateRequest, UsingClause,
};

use super::{Result, Rewriter};

impl Rewriter<'_> {
    pub fn rewrite_update_request(&self, request: &UpdateRequest) -> Result<UpdateRequest> {
        Ok(UpdateRequest {
            operations: request
                .operations
                .iter()
                .map(|op| self.rewrite_update_operation(op))
                .collect::<Result<_>>()?,
            span: request.span,
        })
    }

    pub fn rewrite_update_operation(&self, op: &UpdateOperation) -> Result<UpdateOperation> {
        Ok(match op {
            UpdateOperation::InsertData(insert) => UpdateOperation::InsertData(InsertData {
                data: self.rewrite_quads(&insert.data)?,
                span: insert.span,
            }),
            UpdateOperation::DeleteData(delete) => UpdateOperation::DeleteData(DeleteData {
                data: self.rewrite_quads(&delete.data)?,
                span: delete.span,
            }),
            UpdateOperation::DeleteWhere(delete) => UpdateOperation::DeleteWhere(DeleteWhere {
                pattern: self.rewrite_quads(&delete.pattern)?,
                span: delete.span,
            }),
            UpdateOperation::Modify(modify) => {
                UpdateOperation::Modify(Box::new(self.rewrite_modify(modify)?))
            }
        })
    }

    fn rewrite_modify(&self, modify: &Modify) -> Result<Modify> {
        let using = match &modify.using {
            Some(using) => Some(UsingClause {
                default_graphs: self.rewrite_iris(&using.default_graphs)?,
                named_graphs: self.rewrite_iris(&using.named_graphs)?,
                span: using.span,
            }),
            None => None,
        };
        Ok(Modify {
            with_iri: modify
                .with_iri
                .as_ref()
                .map(|iri| self.rewrite_iri(iri))
                .transpose()?,
            using,
            delete_clause: modify
                .delete_clause
                .as_ref()
                .map(|q| self.rewrite_quads(q))
                .transpose()?,
            insert_clause: modify
                .insert_clause
                .as_ref()
                .map(|q| self.rewrite_quads(q))
                .transpose()?,
            where_pattern: self.rewrite_graph_pattern(&modify.where_pattern)?,
            span: modify.span,
        })
    }

    fn rewrite_quads(&self, quads: &QuadPattern) -> Result<QuadPattern> {
        let blocks = quads
            .blocks
            .iter()
            .map(|block| {
                Ok(match block {
                    QuadBlock::Triples(bgp) => QuadBlock::Triples(self.rewrite_basic_pattern(bgp)?),
                    QuadBlock::Graph {
                        name,
                        triples,
                        span,
                    } => QuadBlock::Graph {
                        name: self.rewrite_term(name)?,
                        triples: self.rewrite_basic_pattern(triples)?,
                        span: *span,
                    },
                })
            })
            .collect::<Result<_>>()?;
        Ok(QuadPattern {
            blocks,
            span: quads.span,
        })
    }
}
