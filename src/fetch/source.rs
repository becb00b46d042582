//! Pluggable retrieval backend for description documents

use std::time::Duration;

use super::{FetchError, FetchResult};

/// Serialization format of a retrieved description document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    RdfXml,
    Turtle,
}

/// A retrieved description document, not yet parsed.
#[derive(Debug, Clone)]
pub struct Document {
    pub body: String,
    pub format: RdfFormat,
}

/// Trait for retrieval backends.
///
/// Every fetch in the extraction pipeline is a blocking round-trip on the
/// calling thread; implementations own any timeout policy.
pub trait DescriptionSource {
    /// Retrieve the description document at `url`.
    fn retrieve(&self, url: &str) -> FetchResult<Document>;
}

const ACCEPT_RDF: &str = "application/rdf+xml, text/turtle;q=0.9";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP backend over a blocking reqwest client.
#[derive(Debug)]
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new() -> FetchResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

impl DescriptionSource for HttpSource {
    fn retrieve(&self, url: &str) -> FetchResult<Document> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, ACCEPT_RDF)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // The catalog serves RDF/XML by default; Turtle is recognized from
        // the content type.
        let format = match response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        {
            Some(content_type) if content_type.contains("turtle") => RdfFormat::Turtle,
            _ => RdfFormat::RdfXml,
        };

        let body = response.text()?;
        Ok(Document { body, format })
    }
}
