//! Catalog URL scheme: where descriptions live and how entities are named
//!
//! The catalog publishes each entity twice: a canonical reference IRI under
//! `/resource/{id}` (used inside descriptions to point at the entity) and a
//! fetchable machine-readable document under `/metadata/{id}`.

use url::Url;

/// Path segment marking a canonical entity reference.
pub const RESOURCE_SEGMENT: &str = "/resource/";

const METADATA_SEGMENT: &str = "/metadata/";

const DEFAULT_BASE: &str = "https://data.zg.ch/store/1";

/// URL scheme of one catalog store.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    base: Url,
}

impl CatalogConfig {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Parse `base` as the store root, e.g. `https://data.zg.ch/store/1`.
    pub fn from_base(base: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(base)?))
    }

    /// `{base}/metadata/{id}` — the fetchable description document.
    pub fn metadata_url(&self, id: &str) -> String {
        format!("{}{}{}", self.base_str(), METADATA_SEGMENT, id)
    }

    /// `{base}/resource/{id}` — the canonical reference IRI for the entity.
    pub fn resource_iri(&self, id: &str) -> String {
        format!("{}{}{}", self.base_str(), RESOURCE_SEGMENT, id)
    }

    /// Description document URL for an arbitrary reference IRI.
    ///
    /// Reference IRIs under a `/resource/` path are rewritten to their
    /// `/metadata/` document; anything else is fetched as-is. Plain string
    /// replacement, matching the catalog's publishing convention.
    pub fn description_url_for(&self, iri: &str) -> String {
        iri.replace(RESOURCE_SEGMENT, METADATA_SEGMENT)
    }

    fn base_str(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        // The constant is a valid absolute URL
        Self::new(Url::parse(DEFAULT_BASE).expect("default catalog base URL parses"))
    }
}
