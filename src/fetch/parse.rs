//! RDF document parsing into statements

use rio_api::model::{Literal, Subject, Term, Triple};
use rio_api::parser::TriplesParser;
use rio_turtle::{TurtleError, TurtleParser};
use rio_xml::{RdfXmlError, RdfXmlParser};

use super::source::{Document, RdfFormat};
use super::{FetchError, FetchResult};
use crate::graph::{Object, Statement};

/// Parse a retrieved document into statements.
///
/// Catalog documents carry absolute IRIs, so no base IRI is supplied to the
/// parsers. Syntax errors surface as `FetchError::Parse`.
pub fn parse_document(document: &Document) -> FetchResult<Vec<Statement>> {
    let mut statements = Vec::new();
    match document.format {
        RdfFormat::Turtle => TurtleParser::new(document.body.as_bytes(), None)
            .parse_all(&mut |triple| {
                collect(&triple, &mut statements);
                Ok(()) as Result<(), TurtleError>
            })
            .map_err(|e| FetchError::Parse(e.to_string()))?,
        RdfFormat::RdfXml => RdfXmlParser::new(document.body.as_bytes(), None)
            .parse_all(&mut |triple| {
                collect(&triple, &mut statements);
                Ok(()) as Result<(), RdfXmlError>
            })
            .map_err(|e| FetchError::Parse(e.to_string()))?,
    }
    Ok(statements)
}

/// Flatten one parsed triple into the statement model.
///
/// Literals collapse to their lexical form regardless of language tag or
/// datatype; IRIs and blank nodes become references (blank nodes keep a `_:`
/// prefix so they can never collide with a fetchable IRI).
fn collect(triple: &Triple<'_>, out: &mut Vec<Statement>) {
    let subject = match triple.subject {
        Subject::NamedNode(node) => node.iri.to_string(),
        Subject::BlankNode(node) => format!("_:{}", node.id),
        _ => return,
    };
    let object = match triple.object {
        Term::NamedNode(node) => Object::reference(node.iri),
        Term::BlankNode(node) => Object::reference(format!("_:{}", node.id)),
        Term::Literal(Literal::Simple { value })
        | Term::Literal(Literal::LanguageTaggedString { value, .. })
        | Term::Literal(Literal::Typed { value, .. }) => Object::literal(value),
        _ => return,
    };
    out.push(Statement::new(subject, triple.predicate.iri, object));
}
