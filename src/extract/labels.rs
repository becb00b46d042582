//! Display-label resolution for reference values

use crate::fetch::Fetcher;
use crate::graph::GraphStore;
use crate::vocab::{foaf, rdfs};

/// Label predicates in priority order.
const LABEL_TIERS: [&str; 2] = [rdfs::LABEL, foaf::NAME];

/// Resolve a reference to its display label.
///
/// Two phases: ensure the referenced entity is described (a best-effort fetch
/// when the store knows nothing about it), then a pure read over the label
/// tiers — `rdfs:label` first, `foaf:name` as fallback. The first statement
/// seen wins within a tier. `None` when neither tier yields a value; an empty
/// label is never synthesized.
pub fn resolve_label(
    store: &mut GraphStore,
    fetcher: &Fetcher<'_>,
    reference: &str,
) -> Option<String> {
    fetcher.ensure_described(store, reference);
    for predicate in LABEL_TIERS {
        if let Some(object) = store.first_object(reference, predicate) {
            return Some(object.as_str().to_string());
        }
    }
    None
}
