//! dcatmeta: DCAT catalog metadata extraction
//!
//! Fetches the linked-data descriptions of a dataset and its distributions
//! from a catalog, merges them into an in-memory statement store, and extracts
//! requested metadata fields. Field values that reference another described
//! entity are resolved down to a display label instead of the raw IRI.
//!
//! # Core Concepts
//!
//! - **Statements**: subject–predicate–object triples accumulated per call
//! - **Descriptions**: everything a catalog document says about one entity
//! - **References**: field values naming another entity, resolved via
//!   `rdfs:label` / `foaf:name`
//!
//! # Example
//!
//! ```no_run
//! use dcatmeta::CatalogClient;
//!
//! let client = CatalogClient::new()?;
//! let fields = ["title".to_string(), "modified".to_string()];
//! let metadata = client.get_metadata("510", "512", &fields, true)?;
//! println!("{}", serde_json::to_string_pretty(&metadata)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod api;
pub mod catalog;
pub mod correlate;
pub mod extract;
pub mod fetch;
mod graph;
pub mod vocab;

pub use api::{CatalogClient, Metadata, MetadataError};
pub use catalog::CatalogConfig;
pub use correlate::find_correlated_apis;
pub use extract::Extractor;
pub use fetch::{DescriptionSource, Document, FetchError, Fetcher, HttpSource, RdfFormat};
pub use graph::{GraphStore, Object, Statement, TriplePattern};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
