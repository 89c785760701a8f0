//! IRIs the AST and rewriter refer to by name.

/// `rdf:type`, written as the `a` keyword in SPARQL.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// `xsd:string`. Literals of this datatype carry plain string values.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// `xsd:double`, used when writing non-finite double literals.
pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
