//! Shared fixtures: an in-memory description source serving Turtle documents.

use std::collections::HashMap;

use dcatmeta::{DescriptionSource, Document, FetchError, RdfFormat};

pub const BASE: &str = "https://data.zg.ch/store/1";

/// Retrieval backend serving canned Turtle bodies by URL.
///
/// Unknown URLs fail with a 404-shaped error, which exercises the same paths
/// a real unreachable catalog would.
#[derive(Default)]
pub struct StubSource {
    documents: HashMap<String, String>,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, url: impl Into<String>, turtle: impl Into<String>) -> Self {
        self.documents.insert(url.into(), turtle.into());
        self
    }

    pub fn without_document(mut self, url: &str) -> Self {
        self.documents.remove(url);
        self
    }
}

impl DescriptionSource for StubSource {
    fn retrieve(&self, url: &str) -> Result<Document, FetchError> {
        match self.documents.get(url) {
            Some(body) => Ok(Document {
                body: body.clone(),
                format: RdfFormat::Turtle,
            }),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

/// The air-quality catalog: dataset 510 with distributions 511 (CSV) and
/// 512 (JSON), publisher 20, format entity 30, and API entity 600 declaring
/// 512 as its provenance source.
pub fn air_quality_source() -> StubSource {
    StubSource::new()
        .with_document(
            format!("{BASE}/metadata/510"),
            format!(
                r#"
                @prefix dcat: <http://www.w3.org/ns/dcat#> .
                @prefix dct: <http://purl.org/dc/terms/> .

                <{BASE}/resource/510>
                    dct:title "Air Quality 2023" ;
                    dct:modified "2023-05-01" ;
                    dct:description "Hourly air quality measurements." ;
                    dct:publisher <{BASE}/resource/20> ;
                    dcat:distribution <{BASE}/resource/511> , <{BASE}/resource/512> .
                "#
            ),
        )
        .with_document(
            format!("{BASE}/metadata/511"),
            format!(
                r#"
                @prefix dct: <http://purl.org/dc/terms/> .

                <{BASE}/resource/511>
                    dct:title "CSV export" ;
                    dct:modified "2023-05-02" ;
                    dct:format <{BASE}/resource/30> .
                "#
            ),
        )
        .with_document(
            format!("{BASE}/metadata/512"),
            format!(
                r#"
                @prefix dct: <http://purl.org/dc/terms/> .

                <{BASE}/resource/512>
                    dct:title "JSON export" ;
                    dct:modified "2023-05-03" .

                <{BASE}/resource/600> dct:source <{BASE}/resource/512> .
                "#
            ),
        )
        .with_document(
            format!("{BASE}/metadata/20"),
            format!(
                r#"<{BASE}/resource/20>
                     <http://www.w3.org/2000/01/rdf-schema#label> "Canton Office" ."#
            ),
        )
        .with_document(
            format!("{BASE}/metadata/30"),
            format!(
                r#"<{BASE}/resource/30>
                     <http://www.w3.org/2000/01/rdf-schema#label> "CSV" ."#
            ),
        )
}
