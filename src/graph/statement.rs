//! Triple statements as fetched from entity descriptions

use serde::{Deserialize, Serialize};

/// The object position of a statement.
///
/// Catalog descriptions mix plain values with links to other described
/// entities; which one a field holds decides whether extraction can use the
/// value directly or has to resolve it to a label first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Object {
    /// Lexical form of a literal. Language tags and datatypes are already
    /// stripped by the parser.
    Literal(String),
    /// IRI of another entity, or a `_:`-prefixed blank node id.
    Reference(String),
}

impl Object {
    pub fn literal(value: impl Into<String>) -> Self {
        Object::Literal(value.into())
    }

    pub fn reference(iri: impl Into<String>) -> Self {
        Object::Reference(iri.into())
    }

    /// The raw string carried by either variant.
    pub fn as_str(&self) -> &str {
        match self {
            Object::Literal(value) => value,
            Object::Reference(iri) => iri,
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Object::Reference(_))
    }
}

/// One subject–predicate–object statement. Immutable once added to a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub subject: String,
    pub predicate: String,
    pub object: Object,
}

impl Statement {
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: Object) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}
