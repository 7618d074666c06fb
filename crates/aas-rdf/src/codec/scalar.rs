//! Literal and enumeration adapters, plus the shared field readers.
//!
//! Primitive values ride on single literal triples. Enumerated symbols
//! are not literals: they are encoded as address fragments under the
//! enum's own namespace segment so the represented choice is
//! self-describing in the graph. Language-tagged text cannot ride on one
//! triple at all (two literal components), so it becomes a small
//! anonymous node.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::DecodeError;
use crate::graph::{Graph, Literal, LiteralKind, NodeId, Term};
use crate::iri;
use crate::model::{LangString, NamedEnum};
use crate::vocab;

// =============================================================================
// ENUMERATED SYMBOLS
// =============================================================================

/// Encodes an enumerated symbol as its self-describing address fragment.
pub(crate) fn enum_term<E: NamedEnum>(value: E) -> Term {
    Term::Node(vocab::enum_value(E::NAME, value.as_str()))
}

/// Recovers an enumerated symbol: the value is the text after the last
/// `/` of the address (or the bare literal, for producers that wrote
/// one). Anything outside the closed set fails — never a default.
pub(crate) fn decode_enum<E: NamedEnum>(term: &Term) -> Result<E, DecodeError> {
    let text = match term {
        Term::Node(node) => node.as_str(),
        Term::Literal(literal) => literal.lexical.as_str(),
    };
    let fragment = text.rsplit('/').next().unwrap_or(text);
    E::parse(fragment).ok_or_else(|| DecodeError::UnknownEnumValue {
        enum_name: E::NAME,
        value: fragment.to_string(),
    })
}

/// Optional enum field: absent triple decodes to `None`.
pub(crate) fn optional_enum<E: NamedEnum>(
    graph: &Graph,
    subject: &NodeId,
    predicate: &NodeId,
) -> Result<Option<E>, DecodeError> {
    graph
        .first_object(subject, predicate)
        .map(decode_enum)
        .transpose()
}

/// Mandatory enum field: absent triple is a malformed graph.
pub(crate) fn require_enum<E: NamedEnum>(
    graph: &Graph,
    subject: &NodeId,
    predicate: &NodeId,
    field: &'static str,
) -> Result<E, DecodeError> {
    match graph.first_object(subject, predicate) {
        Some(term) => decode_enum(term),
        None => Err(DecodeError::malformed(format!(
            "{subject} is missing mandatory {field}"
        ))),
    }
}

// =============================================================================
// LITERAL FIELDS
// =============================================================================

/// First literal of a singular field; `None` when the field is absent.
pub(crate) fn optional_string(
    graph: &Graph,
    subject: &NodeId,
    predicate: &NodeId,
) -> Result<Option<String>, DecodeError> {
    match graph.first_object(subject, predicate) {
        None => Ok(None),
        Some(Term::Literal(literal)) => Ok(Some(literal.lexical.clone())),
        Some(Term::Node(_)) => Err(DecodeError::malformed(format!(
            "{predicate} on {subject}: expected a literal"
        ))),
    }
}

/// Mandatory literal field: absent triple is a malformed graph.
pub(crate) fn require_string(
    graph: &Graph,
    subject: &NodeId,
    predicate: &NodeId,
    field: &'static str,
) -> Result<String, DecodeError> {
    optional_string(graph, subject, predicate)?.ok_or_else(|| {
        DecodeError::malformed(format!("{subject} is missing mandatory {field}"))
    })
}

/// Optional boolean literal field.
pub(crate) fn optional_bool(
    graph: &Graph,
    subject: &NodeId,
    predicate: &NodeId,
) -> Result<Option<bool>, DecodeError> {
    match graph.first_object(subject, predicate) {
        None => Ok(None),
        Some(Term::Literal(literal)) => literal.as_boolean().map(Some).ok_or_else(|| {
            DecodeError::malformed(format!(
                "{predicate} on {subject}: {:?} is not a boolean",
                literal.lexical
            ))
        }),
        Some(Term::Node(_)) => Err(DecodeError::malformed(format!(
            "{predicate} on {subject}: expected a literal"
        ))),
    }
}

// =============================================================================
// NODE FIELDS
// =============================================================================

/// First node of a singular sub-object field; a literal there is a
/// malformed graph.
pub(crate) fn optional_node<'g>(
    graph: &'g Graph,
    subject: &NodeId,
    predicate: &NodeId,
) -> Result<Option<&'g NodeId>, DecodeError> {
    match graph.first_object(subject, predicate) {
        None => Ok(None),
        Some(Term::Node(node)) => Ok(Some(node)),
        Some(Term::Literal(_)) => Err(DecodeError::malformed(format!(
            "{predicate} on {subject}: expected a node"
        ))),
    }
}

/// Mandatory sub-object field.
pub(crate) fn require_node<'g>(
    graph: &'g Graph,
    subject: &NodeId,
    predicate: &NodeId,
    field: &'static str,
) -> Result<&'g NodeId, DecodeError> {
    optional_node(graph, subject, predicate)?.ok_or_else(|| {
        DecodeError::malformed(format!("{subject} is missing mandatory {field}"))
    })
}

// =============================================================================
// BINARY PAYLOADS
// =============================================================================

/// Encodes an inline binary payload as an xs:base64Binary literal.
pub(crate) fn base64_literal(data: &[u8]) -> Literal {
    Literal::new(STANDARD.encode(data), LiteralKind::Base64Binary)
}

/// Optional binary field: decodes the base64 lexical form back to bytes.
pub(crate) fn optional_base64(
    graph: &Graph,
    subject: &NodeId,
    predicate: &NodeId,
) -> Result<Option<Vec<u8>>, DecodeError> {
    match optional_string(graph, subject, predicate)? {
        None => Ok(None),
        Some(lexical) => STANDARD.decode(&lexical).map(Some).map_err(|_| {
            DecodeError::malformed(format!("{predicate} on {subject}: invalid base64 payload"))
        }),
    }
}

// =============================================================================
// LANGUAGE-TAGGED TEXT
// =============================================================================

/// Encodes a language/text pair as an anonymous node: one type marker
/// plus two literal triples.
pub(crate) fn encode_lang_string(
    graph: &mut Graph,
    marker: &'static str,
    entry: &LangString,
) -> NodeId {
    let node = iri::anonymous_node();
    graph.add(node.clone(), vocab::rdf_type(), vocab::type_marker(marker));
    graph.add(
        node.clone(),
        vocab::predicate("AbstractLangString", "language"),
        Literal::string(&entry.language),
    );
    graph.add(
        node.clone(),
        vocab::predicate("AbstractLangString", "text"),
        Literal::string(&entry.text),
    );
    node
}

/// Decodes a language/text pair node. Both literals are mandatory.
pub(crate) fn decode_lang_string(graph: &Graph, subject: &NodeId) -> Result<LangString, DecodeError> {
    let language = require_string(
        graph,
        subject,
        &vocab::predicate("AbstractLangString", "language"),
        "AbstractLangString/language",
    )?;
    let text = require_string(
        graph,
        subject,
        &vocab::predicate("AbstractLangString", "text"),
        "AbstractLangString/text",
    )?;
    Ok(LangString { language, text })
}
