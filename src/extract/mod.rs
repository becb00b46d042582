//! Field extraction engine

mod labels;

pub use labels::resolve_label;

use std::collections::BTreeMap;

use tracing::trace;

use crate::fetch::Fetcher;
use crate::graph::{GraphStore, Object};
use crate::vocab;

/// Extracts requested fields for one entity, resolving references to labels.
///
/// Fields are omitted rather than defaulted: unmapped names, missing
/// predicates, empty literals, and unresolvable references all leave no entry
/// behind. Callers treat absence as "unknown", never as an error.
pub struct Extractor<'a> {
    fetcher: &'a Fetcher<'a>,
}

impl<'a> Extractor<'a> {
    pub fn new(fetcher: &'a Fetcher<'a>) -> Self {
        Self { fetcher }
    }

    /// Produce a `field -> value` mapping for `entity_iri`.
    ///
    /// Multi-valued predicates surface only their first statement. A
    /// reference value is replaced by its resolved label; the raw IRI is
    /// never surfaced.
    pub fn extract(
        &self,
        store: &mut GraphStore,
        entity_iri: &str,
        fields: &[String],
    ) -> BTreeMap<String, String> {
        let mut result = BTreeMap::new();
        for field in fields {
            let Some(predicate) = vocab::field_predicate(field) else {
                trace!(field, "field has no mapped predicate");
                continue;
            };
            let Some(object) = store.first_object(entity_iri, predicate).cloned() else {
                continue;
            };
            match object {
                Object::Reference(iri) => {
                    if let Some(label) = labels::resolve_label(store, self.fetcher, &iri) {
                        result.insert(field.clone(), label);
                    } else {
                        trace!(field, reference = %iri, "reference has no resolvable label");
                    }
                }
                Object::Literal(value) if !value.is_empty() => {
                    result.insert(field.clone(), value);
                }
                Object::Literal(_) => {}
            }
        }
        result
    }
}
