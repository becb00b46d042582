//! Consumer-facing entry point
//!
//! `CatalogClient` is the single entry point: it owns the URL scheme and the
//! retrieval backend, and each `get_metadata` call builds and discards its
//! own statement store. No state survives between calls.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::catalog::CatalogConfig;
use crate::correlate;
use crate::extract::Extractor;
use crate::fetch::{DescriptionSource, FetchError, Fetcher, HttpSource};
use crate::graph::{GraphStore, Object, TriplePattern};
use crate::vocab::dcat;

/// Errors that cross the extraction boundary
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The dataset's own description could not be retrieved or parsed.
    /// Nothing meaningful can be extracted without it; every other failure
    /// is absorbed and shows up only as gaps in the result.
    #[error("failed to load dataset description: {0}")]
    PrimaryFetch(#[from] FetchError),
}

/// Extracted metadata for one dataset and one of its distributions.
///
/// Each sub-mapping contains only the fields that were resolvable; absent
/// keys mean "unknown", never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metadata {
    pub dataset: BTreeMap<String, String>,
    pub distribution: BTreeMap<String, String>,
}

/// Client for one catalog store.
pub struct CatalogClient {
    config: CatalogConfig,
    source: Box<dyn DescriptionSource>,
}

impl CatalogClient {
    /// Client for the default catalog over HTTP.
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self::with_source(
            CatalogConfig::default(),
            Box::new(HttpSource::new()?),
        ))
    }

    /// Client with a custom URL scheme and retrieval backend.
    pub fn with_source(config: CatalogConfig, source: Box<dyn DescriptionSource>) -> Self {
        Self { config, source }
    }

    /// Fetch `fields` for the dataset and the given distribution.
    ///
    /// The dataset description is loaded first (failure is fatal), then the
    /// description of every distribution it declares (failures are skipped),
    /// then both entities are extracted. With `get_api_id`, entities that
    /// declare the distribution as their `dcterms:source` are reported in the
    /// log; they are never part of the returned structure.
    pub fn get_metadata(
        &self,
        dataset_id: &str,
        resource_id: &str,
        fields: &[String],
        get_api_id: bool,
    ) -> Result<Metadata, MetadataError> {
        let mut store = GraphStore::new();
        let fetcher = Fetcher::new(&self.config, self.source.as_ref());

        let dataset_iri = self.config.resource_iri(dataset_id);
        fetcher.load_description(
            &mut store,
            &dataset_iri,
            &self.config.metadata_url(dataset_id),
        )?;

        // Distribution membership is only known from the dataset's own
        // statements, so this runs strictly after the primary load.
        let distribution_iris: Vec<String> = store
            .query(&TriplePattern::new().with_predicate(dcat::DISTRIBUTION))
            .into_iter()
            .filter_map(|statement| match &statement.object {
                Object::Reference(iri) => Some(iri.clone()),
                Object::Literal(_) => None,
            })
            .collect();
        for iri in &distribution_iris {
            let url = self.config.description_url_for(iri);
            fetcher.load_description_best_effort(&mut store, iri, &url);
        }

        let distribution_iri = self.config.resource_iri(resource_id);
        if get_api_id {
            for api_id in correlate::find_correlated_apis(&store, &distribution_iri) {
                info!(api_id = %api_id, "correlated API resource found");
            }
        }

        let extractor = Extractor::new(&fetcher);
        Ok(Metadata {
            dataset: extractor.extract(&mut store, &dataset_iri, fields),
            distribution: extractor.extract(&mut store, &distribution_iri, fields),
        })
    }
}
