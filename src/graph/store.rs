//! In-memory statement accumulator, scoped to one extraction call

use std::collections::HashSet;

use super::statement::{Object, Statement};

/// Wildcard pattern for matching statements.
///
/// Any component left unset matches everything in that position.
#[derive(Debug, Clone, Default)]
pub struct TriplePattern {
    /// Match statements with this subject IRI
    pub subject: Option<String>,
    /// Match statements with this predicate IRI
    pub predicate: Option<String>,
    /// Match statements with exactly this object
    pub object: Option<Object>,
}

impl TriplePattern {
    /// Create an empty pattern (matches all statements)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_predicate(mut self, predicate: impl Into<String>) -> Self {
        self.predicate = Some(predicate.into());
        self
    }

    pub fn with_object(mut self, object: Object) -> Self {
        self.object = Some(object);
        self
    }

    /// Check if a statement matches all set components
    fn matches(&self, statement: &Statement) -> bool {
        if let Some(ref subject) = self.subject {
            if &statement.subject != subject {
                return false;
            }
        }
        if let Some(ref predicate) = self.predicate {
            if &statement.predicate != predicate {
                return false;
            }
        }
        if let Some(ref object) = self.object {
            if &statement.object != object {
                return false;
            }
        }
        true
    }
}

/// Accumulates entity descriptions for the duration of one extraction call.
///
/// Merging is strictly additive: nothing is ever removed or overwritten, so
/// once a description has been fetched its statements stay queryable for the
/// rest of the call. Duplicate statements from re-fetching are harmless for
/// lookup correctness and are not deduplicated.
#[derive(Debug, Default)]
pub struct GraphStore {
    statements: Vec<Statement>,
    described: HashSet<String>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a fetched description batch, crediting it to `entity_iri`.
    pub fn insert_description(&mut self, entity_iri: &str, statements: Vec<Statement>) {
        self.described.insert(entity_iri.to_string());
        self.statements.extend(statements);
    }

    /// Whether anything is known about `iri`: either its description was
    /// fetched, or some other description already carries statements about it
    /// (catalogs commonly inline publisher labels into dataset documents).
    pub fn is_described(&self, iri: &str) -> bool {
        self.described.contains(iri) || self.statements.iter().any(|s| s.subject == iri)
    }

    /// All statements matching the pattern, in insertion order.
    pub fn query(&self, pattern: &TriplePattern) -> Vec<&Statement> {
        self.statements.iter().filter(|s| pattern.matches(s)).collect()
    }

    /// First object for `(subject, predicate)`, in insertion order.
    ///
    /// Multi-valued predicates have no defined tie-break; the first statement
    /// encountered wins.
    pub fn first_object(&self, subject: &str, predicate: &str) -> Option<&Object> {
        self.statements
            .iter()
            .find(|s| s.subject == subject && s.predicate == predicate)
            .map(|s| &s.object)
    }

    /// Subjects of all statements `(?, predicate, object)` — the reverse
    /// lookup used for provenance correlation.
    pub fn subjects_declaring(&self, predicate: &str, object: &Object) -> Vec<&str> {
        self.statements
            .iter()
            .filter(|s| s.predicate == predicate && &s.object == object)
            .map(|s| s.subject.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_store() -> GraphStore {
        let mut store = GraphStore::new();
        store.insert_description(
            "https://example.org/resource/510",
            vec![
                Statement::new(
                    "https://example.org/resource/510",
                    "http://purl.org/dc/terms/title",
                    Object::literal("Air Quality 2023"),
                ),
                Statement::new(
                    "https://example.org/resource/510",
                    "http://purl.org/dc/terms/publisher",
                    Object::reference("https://example.org/resource/20"),
                ),
                Statement::new(
                    "https://example.org/resource/510",
                    "http://www.w3.org/ns/dcat#distribution",
                    Object::reference("https://example.org/resource/511"),
                ),
            ],
        );
        store
    }

    #[test]
    fn test_empty_pattern_matches_all() {
        let store = populated_store();
        assert_eq!(store.query(&TriplePattern::new()).len(), 3);
    }

    #[test]
    fn test_query_by_predicate() {
        let store = populated_store();
        let hits = store.query(
            &TriplePattern::new().with_predicate("http://www.w3.org/ns/dcat#distribution"),
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(
            hits[0].object,
            Object::reference("https://example.org/resource/511")
        );
    }

    #[test]
    fn test_query_by_object() {
        let store = populated_store();
        let hits = store.query(
            &TriplePattern::new()
                .with_object(Object::reference("https://example.org/resource/20")),
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].predicate, "http://purl.org/dc/terms/publisher");
    }

    #[test]
    fn test_merge_is_additive() {
        let mut store = populated_store();
        let before = store.len();
        store.insert_description(
            "https://example.org/resource/511",
            vec![Statement::new(
                "https://example.org/resource/511",
                "http://purl.org/dc/terms/title",
                Object::literal("CSV export"),
            )],
        );
        assert_eq!(store.len(), before + 1);
        // Earlier statements are still there
        assert!(store
            .first_object(
                "https://example.org/resource/510",
                "http://purl.org/dc/terms/title"
            )
            .is_some());
    }

    #[test]
    fn test_reinsert_same_entity_is_harmless() {
        let mut store = populated_store();
        store.insert_description("https://example.org/resource/510", vec![]);
        assert!(store.is_described("https://example.org/resource/510"));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_is_described_covers_inline_subjects() {
        let mut store = GraphStore::new();
        store.insert_description(
            "https://example.org/resource/510",
            vec![Statement::new(
                "https://example.org/resource/20",
                "http://www.w3.org/2000/01/rdf-schema#label",
                Object::literal("Canton Office"),
            )],
        );
        // 20 was never fetched itself, but the 510 document describes it
        assert!(store.is_described("https://example.org/resource/20"));
        assert!(!store.is_described("https://example.org/resource/99"));
    }

    #[test]
    fn test_first_object_keeps_insertion_order() {
        let mut store = GraphStore::new();
        store.insert_description(
            "https://example.org/resource/510",
            vec![
                Statement::new(
                    "https://example.org/resource/510",
                    "http://purl.org/dc/terms/title",
                    Object::literal("first"),
                ),
                Statement::new(
                    "https://example.org/resource/510",
                    "http://purl.org/dc/terms/title",
                    Object::literal("second"),
                ),
            ],
        );
        assert_eq!(
            store.first_object(
                "https://example.org/resource/510",
                "http://purl.org/dc/terms/title"
            ),
            Some(&Object::literal("first"))
        );
    }

    #[test]
    fn test_subjects_declaring_reverse_lookup() {
        let mut store = populated_store();
        store.insert_description(
            "https://example.org/resource/600",
            vec![Statement::new(
                "https://example.org/resource/600",
                "http://purl.org/dc/terms/source",
                Object::reference("https://example.org/resource/511"),
            )],
        );
        let subjects = store.subjects_declaring(
            "http://purl.org/dc/terms/source",
            &Object::reference("https://example.org/resource/511"),
        );
        assert_eq!(subjects, vec!["https://example.org/resource/600"]);
    }
}
