//! Description fetching: primary (fatal) and secondary (best-effort) paths
//!
//! Retrieval goes through the `DescriptionSource` trait so the HTTP layer
//! stays pluggable; `HttpSource` is the production backend.

mod parse;
mod source;

pub use parse::parse_document;
pub use source::{DescriptionSource, Document, HttpSource, RdfFormat};

use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::CatalogConfig;
use crate::graph::GraphStore;

/// Errors that can occur while retrieving or parsing a description
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("failed to parse description: {0}")]
    Parse(String),
}

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Loads entity descriptions into a `GraphStore`.
///
/// Two paths with different failure policies: `load_description` propagates
/// errors and is used for the primary dataset fetch, where nothing can be
/// extracted without the result. Everything else goes through the best-effort
/// variants, which log and leave the store untouched on failure — partial
/// metadata beats total failure.
pub struct Fetcher<'a> {
    config: &'a CatalogConfig,
    source: &'a dyn DescriptionSource,
}

impl<'a> Fetcher<'a> {
    pub fn new(config: &'a CatalogConfig, source: &'a dyn DescriptionSource) -> Self {
        Self { config, source }
    }

    /// Fetch the document at `url`, parse it, and merge the statements as the
    /// description of `entity_iri`. Returns the number of statements merged.
    pub fn load_description(
        &self,
        store: &mut GraphStore,
        entity_iri: &str,
        url: &str,
    ) -> FetchResult<usize> {
        let document = self.source.retrieve(url)?;
        let statements = parse::parse_document(&document)?;
        let count = statements.len();
        store.insert_description(entity_iri, statements);
        Ok(count)
    }

    /// Best-effort variant for distribution descriptions. Failure is logged
    /// and swallowed; returns whether anything was merged.
    pub fn load_description_best_effort(
        &self,
        store: &mut GraphStore,
        entity_iri: &str,
        url: &str,
    ) -> bool {
        match self.load_description(store, entity_iri, url) {
            Ok(count) => {
                debug!(entity = entity_iri, statements = count, "merged description");
                true
            }
            Err(err) => {
                warn!(entity = entity_iri, url, %err, "skipping unavailable description");
                false
            }
        }
    }

    /// Ensure statements about `iri` are present, fetching its description on
    /// demand. No-op when the store already describes it, so each reference
    /// is fetched at most once per call.
    pub fn ensure_described(&self, store: &mut GraphStore, iri: &str) {
        if store.is_described(iri) {
            return;
        }
        let url = self.config.description_url_for(iri);
        match self.load_description(store, iri, &url) {
            Ok(count) => debug!(iri, statements = count, "fetched reference description"),
            Err(err) => debug!(iri, url = %url, %err, "reference description unavailable"),
        }
    }
}
