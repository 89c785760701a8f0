//! Term and IRI rewriting.

use crate::ast::{Iri, IriValue, Literal, LiteralValue, Term, VarOrIri};
use crate::vocab;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::trace;
use url::Url;

use super::{Result, RewriteError, Rewriter};

impl Rewriter<'_> {
    /// The draft replacement for an absolute IRI, unless substitution is off.
    fn lookup(&self, iri: &str) -> Option<&Arc<str>> {
        if self.substitute {
            self.mapping.get(iri)
        } else {
            None
        }
    }

    /// Look up a full IRI string in the mapping.
    pub(super) fn map_iri_str(&self, iri: &Arc<str>) -> Arc<str> {
        match self.lookup(iri) {
            Some(draft) => {
                trace!(live = %iri, draft = %draft, "substituted IRI");
                draft.clone()
            }
            None => iri.clone(),
        }
    }

    /// Expand an IRI against the input prologue.
    fn expand<'i>(&self, iri: &'i Iri) -> Result<Cow<'i, str>> {
        match &iri.value {
            IriValue::Full(value) => Ok(Cow::Borrowed(value)),
            IriValue::Prefixed { prefix, local } => {
                let namespace = self
                    .source
                    .get_prefix(prefix)
                    .ok_or_else(|| RewriteError::undefined_prefix(prefix.clone(), iri.span))?;
                Ok(Cow::Owned(format!("{namespace}{local}")))
            }
        }
    }

    /// Resolve a relative IRI reference against BASE.
    ///
    /// Absolute IRIs, and relative ones with no usable BASE, come back as is.
    fn resolve<'i>(&self, iri: &'i str) -> Cow<'i, str> {
        let Some(base) = &self.source.base else {
            return Cow::Borrowed(iri);
        };
        if Url::parse(iri).is_ok() {
            return Cow::Borrowed(iri);
        }
        match Url::parse(&base.iri).and_then(|base| base.join(iri)) {
            Ok(resolved) => Cow::Owned(resolved.into()),
            Err(_) => Cow::Borrowed(iri),
        }
    }

    /// Map an IRI, writing a prefixed name in full when the rewritten
    /// prologue would spell a different IRI.
    pub fn rewrite_iri(&self, iri: &Iri) -> Result<Iri> {
        self.qualify(iri, true)
    }

    /// Keep the IRI `iri` denotes without consulting the mapping.
    ///
    /// Used where IRIs name something other than graph data: extension
    /// functions, literal datatypes and everything under SERVICE.
    pub fn requalify_iri(&self, iri: &Iri) -> Result<Iri> {
        self.qualify(iri, false)
    }

    fn qualify(&self, iri: &Iri, substitute: bool) -> Result<Iri> {
        let value = match &iri.value {
            IriValue::Full(value) => match self.lookup(&self.resolve(value)).filter(|_| substitute) {
                Some(draft) => {
                    trace!(live = %value, draft = %draft, "substituted IRI");
                    IriValue::Full(draft.clone())
                }
                None => iri.value.clone(),
            },
            IriValue::Prefixed { prefix, local } => {
                let expanded = self.expand(iri)?;
                let absolute = self.resolve(&expanded);
                let mapped = self
                    .lookup(&absolute)
                    .filter(|_| substitute)
                    .map_or(absolute.as_ref(), |draft| draft.as_ref());
                let respelled = self
                    .target
                    .get_prefix(prefix)
                    .map(|namespace| self.resolve(&format!("{namespace}{local}")).into_owned());
                if respelled.as_deref() == Some(mapped) {
                    iri.value.clone()
                } else {
                    trace!(prefix = %prefix, local = %local, iri = %mapped, "prefixed name written in full");
                    IriValue::Full(Arc::from(mapped))
                }
            }
        };
        Ok(Iri {
            value,
            span: iri.span,
        })
    }

    fn is_xsd_string(&self, datatype: &Iri) -> Result<bool> {
        Ok(self.expand(datatype)? == vocab::XSD_STRING)
    }

    /// Rewrite the lexical value of string literals; other literals keep
    /// their value. Datatypes are never substituted.
    pub fn rewrite_literal(&self, literal: &Literal) -> Result<Literal> {
        let value = match &literal.value {
            LiteralValue::Simple(value) => LiteralValue::Simple(self.map_iri_str(value)),
            LiteralValue::LangTagged { value, lang } => LiteralValue::LangTagged {
                value: self.map_iri_str(value),
                lang: lang.clone(),
            },
            LiteralValue::Typed { value, datatype } => LiteralValue::Typed {
                value: if self.is_xsd_string(datatype)? {
                    self.map_iri_str(value)
                } else {
                    value.clone()
                },
                datatype: Box::new(self.requalify_iri(datatype)?),
            },
            other => other.clone(),
        };
        Ok(Literal {
            value,
            span: literal.span,
        })
    }

    /// Rewrite an IRI or literal term; variables, blank nodes and `[]` are copied.
    pub fn rewrite_term(&self, term: &Term) -> Result<Term> {
        Ok(match term {
            Term::Iri(iri) => Term::Iri(self.rewrite_iri(iri)?),
            Term::Literal(literal) => Term::Literal(self.rewrite_literal(literal)?),
            Term::Var(_) | Term::BlankNode(_) | Term::Any { .. } => term.clone(),
        })
    }

    pub(super) fn rewrite_var_or_iri(&self, target: &VarOrIri) -> Result<VarOrIri> {
        Ok(match target {
            VarOrIri::Var(v) => VarOrIri::Var(v.clone()),
            VarOrIri::Iri(iri) => VarOrIri::Iri(self.rewrite_iri(iri)?),
        })
    }
}
