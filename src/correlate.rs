//! Reverse-provenance lookup for correlated API resources
//!
//! A catalog may publish an API endpoint as its own entity that declares a
//! distribution as its `dcterms:source`. The distribution itself carries no
//! forward link, so the correlation is found by reverse lookup over whatever
//! descriptions the store has accumulated.

use crate::catalog::RESOURCE_SEGMENT;
use crate::graph::{GraphStore, Object};
use crate::vocab::dcterms;

/// Find ids of entities that declare `distribution_iri` as their source.
///
/// A match is any subject IRI containing the catalog's `/resource/` path
/// segment; the trailing segment is taken as the API id. This is a substring
/// heuristic inherited from the catalog's URL conventions, not a URL parser.
/// Multiple matches are all returned; none is not an error.
pub fn find_correlated_apis(store: &GraphStore, distribution_iri: &str) -> Vec<String> {
    let target = Object::reference(distribution_iri);
    store
        .subjects_declaring(dcterms::SOURCE, &target)
        .into_iter()
        .filter_map(|subject| {
            subject
                .rfind(RESOURCE_SEGMENT)
                .map(|at| subject[at + RESOURCE_SEGMENT.len()..].to_string())
        })
        .collect()
}
