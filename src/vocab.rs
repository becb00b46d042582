//! Vocabulary constants and the abstract-field → predicate map

/// Dublin Core terms
pub mod dcterms {
    pub const TITLE: &str = "http://purl.org/dc/terms/title";
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
    pub const MODIFIED: &str = "http://purl.org/dc/terms/modified";
    pub const ISSUED: &str = "http://purl.org/dc/terms/issued";
    pub const PUBLISHER: &str = "http://purl.org/dc/terms/publisher";
    pub const FORMAT: &str = "http://purl.org/dc/terms/format";
    pub const SOURCE: &str = "http://purl.org/dc/terms/source";
}

/// Data Catalog vocabulary
pub mod dcat {
    pub const DISTRIBUTION: &str = "http://www.w3.org/ns/dcat#distribution";
    pub const DOWNLOAD_URL: &str = "http://www.w3.org/ns/dcat#downloadURL";
    pub const ACCESS_URL: &str = "http://www.w3.org/ns/dcat#accessURL";
}

/// RDF Schema
pub mod rdfs {
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
}

/// Friend of a Friend
pub mod foaf {
    pub const NAME: &str = "http://xmlns.com/foaf/0.1/name";
}

/// Map an abstract field name to its predicate IRI.
///
/// Unknown names are `None`, not an error; the extraction engine simply omits
/// them from its result. Extend the match arm to support more fields.
pub fn field_predicate(field: &str) -> Option<&'static str> {
    match field {
        "modified" => Some(dcterms::MODIFIED),
        "description" => Some(dcterms::DESCRIPTION),
        "title" => Some(dcterms::TITLE),
        "issued" => Some(dcterms::ISSUED),
        "publisher" => Some(dcterms::PUBLISHER),
        "format" => Some(dcterms::FORMAT),
        "downloadURL" => Some(dcat::DOWNLOAD_URL),
        "accessURL" => Some(dcat::ACCESS_URL),
        _ => None,
    }
}
