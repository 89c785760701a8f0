use super::{write_braced, write_triples_braced};
use crate::ast::{QuadBlock, QuadPattern, UpdateOperation, UpdateRequest};
use std::fmt::{self, Display, Formatter};

impl Display for UpdateRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, operation) in self.operations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ;\n")?;
            }
            write!(f, "{operation}")?;
        }
        Ok(())
    }
}

impl Display for UpdateOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            UpdateOperation::InsertData(op) => write!(f, "INSERT DATA {}", op.data),
            UpdateOperation::DeleteData(op) => write!(f, "DELETE DATA {}", op.data),
            UpdateOperation::DeleteWhere(op) => write!(f, "DELETE WHERE {}", op.pattern),
            UpdateOperation::Modify(op) => {
                if let Some(with) = &op.with_iri {
                    write!(f, "WITH {with} ")?;
                }
                if let Some(delete) = &op.delete_clause {
                    write!(f, "DELETE {delete} ")?;
                }
                if let Some(insert) = &op.insert_clause {
                    write!(f, "INSERT {insert} ")?;
                }
                if let Some(using) = &op.using {
                    for graph in &using.default_graphs {
                        write!(f, "USING {graph} ")?;
                    }
                    for graph in &using.named_graphs {
                        write!(f, "USING NAMED {graph} ")?;
                    }
                }
                f.write_str("WHERE ")?;
                write_braced(f, &op.where_pattern)
            }
        }
    }
}

impl Display for QuadPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for block in &self.blocks {
            match block {
                QuadBlock::Triples(bgp) if bgp.is_empty() => continue,
                QuadBlock::Triples(bgp) => write!(f, " {bgp}")?,
                QuadBlock::Graph { name, triples, .. } => {
                    write!(f, " GRAPH {name} ")?;
                    write_triples_braced(f, &triples.triples)?;
                }
            }
        }
        f.write_str(" }")
    }
}
