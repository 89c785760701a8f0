use super::{write_braced, write_separated};
use crate::ast::{
    BasicPattern, Binding, GraphPattern, TriplePath, TriplePattern, ValuesBlock, Var,
};
use std::fmt::{self, Display, Formatter};

impl Display for TriplePattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

impl Display for TriplePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TriplePath::Triple(triple) => triple.fmt(f),
            TriplePath::Path {
                subject,
                path,
                object,
                ..
            } => write!(f, "{subject} {path} {object} ."),
        }
    }
}

impl Display for BasicPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_separated(f, &self.triples, " ")
    }
}

/// A row of values written against the block's variable list.
struct Row<'a> {
    vars: &'a [Var],
    binding: &'a Binding,
}

impl Display for Row<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, var) in self.vars.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match self.binding.get(&var.name) {
                Some(term) => write!(f, "{term}")?,
                None => f.write_str("UNDEF")?,
            }
        }
        f.write_str(")")
    }
}

impl Display for ValuesBlock {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("VALUES (")?;
        write_separated(f, &self.vars, " ")?;
        f.write_str(") {")?;
        for binding in &self.rows {
            let row = Row {
                vars: &self.vars,
                binding,
            };
            write!(f, " {row}")?;
        }
        f.write_str(" }")
    }
}

impl Display for GraphPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GraphPattern::Triples(bgp) => bgp.fmt(f),
            GraphPattern::Paths { triples, .. } => write_separated(f, triples, " "),
            GraphPattern::Filter { expr, .. } => write!(f, "FILTER({expr})"),
            GraphPattern::Bind { expr, var, .. } => write!(f, "BIND({expr} AS {var})"),
            GraphPattern::Assign { var, expr, .. } => write!(f, "LET({var} := {expr})"),
            GraphPattern::Values(values) => values.fmt(f),
            GraphPattern::Union { branches, .. } => {
                for (i, branch) in branches.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" UNION ")?;
                    }
                    write_braced(f, branch)?;
                }
                Ok(())
            }
            GraphPattern::Optional { pattern, .. } => {
                f.write_str("OPTIONAL ")?;
                write_braced(f, pattern)
            }
            GraphPattern::Group { elements, .. } => {
                f.write_str("{")?;
                for element in elements {
                    if matches!(element, GraphPattern::Triples(bgp) if bgp.is_empty()) {
                        continue;
                    }
                    write!(f, " {element}")?;
                }
                f.write_str(" }")
            }
            GraphPattern::Graph { name, pattern, .. } => {
                write!(f, "GRAPH {name} ")?;
                write_braced(f, pattern)
            }
            // The attached dataset has no SPARQL syntax; only the pattern is written.
            GraphPattern::Dataset { pattern, .. } => write_braced(f, pattern),
            GraphPattern::Exists { pattern, .. } => {
                f.write_str("FILTER EXISTS ")?;
                write_braced(f, pattern)
            }
            GraphPattern::NotExists { pattern, .. } => {
                f.write_str("FILTER NOT EXISTS ")?;
                write_braced(f, pattern)
            }
            GraphPattern::Minus { pattern, .. } => {
                f.write_str("MINUS ")?;
                write_braced(f, pattern)
            }
            GraphPattern::SubSelect { query, .. } => write!(f, "{{ {query} }}"),
            GraphPattern::Service {
                silent,
                endpoint,
                pattern,
                ..
            } => {
                f.write_str("SERVICE ")?;
                if *silent {
                    f.write_str("SILENT ")?;
                }
                write!(f, "{endpoint} ")?;
                write_braced(f, pattern)
            }
        }
    }
}
