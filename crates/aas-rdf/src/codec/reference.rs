//! The recursive reference codec.
//!
//! References have no independent global identity, so every encode mints
//! a fresh anonymous node. The `referredSemanticId` link makes the type
//! self-recursive: encode follows the record's own nesting, decode
//! follows link triples in the graph — and the graph carries no
//! acyclicity guarantee, so decode tracks its ancestor chain and rejects
//! loops instead of recursing forever.

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::codec::scalar;
use crate::codec::sequence::{decode_sequence, encode_sequence};
use crate::error::{DecodeError, EncodeError};
use crate::graph::{Graph, Literal, NodeId, Term};
use crate::iri;
use crate::limits::MAX_REFERENCE_DEPTH;
use crate::model::{Key, Reference};
use crate::vocab;

fn encode_key(graph: &mut Graph, key: &Key) -> Result<NodeId, EncodeError> {
    let node = iri::anonymous_node();
    graph.add(node.clone(), vocab::rdf_type(), vocab::type_marker("Key"));
    graph.add(
        node.clone(),
        vocab::predicate("Key", "type"),
        scalar::enum_term(key.kind),
    );
    graph.add(
        node.clone(),
        vocab::predicate("Key", "value"),
        Literal::string(&key.value),
    );
    Ok(node)
}

fn decode_key(graph: &Graph, subject: &NodeId) -> Result<Key, DecodeError> {
    let kind = scalar::require_enum(graph, subject, &vocab::predicate("Key", "type"), "Key/type")?;
    let value = scalar::require_string(
        graph,
        subject,
        &vocab::predicate("Key", "value"),
        "Key/value",
    )?;
    Ok(Key { kind, value })
}

/// Encodes a reference into `graph`, returning its fresh anonymous node.
///
/// Nested `referredSemanticId` references recurse directly; recursion
/// depth is bounded by the record's own nesting, which ownership keeps
/// acyclic.
pub fn encode_reference_into(
    graph: &mut Graph,
    reference: &Reference,
) -> Result<NodeId, EncodeError> {
    let node = iri::anonymous_node();
    graph.add(
        node.clone(),
        vocab::rdf_type(),
        vocab::type_marker("Reference"),
    );
    graph.add(
        node.clone(),
        vocab::predicate("Reference", "type"),
        scalar::enum_term(reference.kind),
    );
    encode_sequence(
        graph,
        &node,
        vocab::predicate("Reference", "keys"),
        &reference.keys,
        encode_key,
    )?;
    if let Some(referred) = &reference.referred_semantic_id {
        let referred_node = encode_reference_into(graph, referred)?;
        graph.add(
            node.clone(),
            vocab::predicate("Reference", "referredSemanticId"),
            Term::Node(referred_node),
        );
    }
    Ok(node)
}

/// Encodes a reference, creating a graph unless the caller supplies one
/// to extend. Returns the graph and the reference's node.
pub fn encode_reference(
    reference: &Reference,
    graph: Option<Graph>,
) -> Result<(Graph, NodeId), EncodeError> {
    let mut graph = graph.unwrap_or_default();
    let node = encode_reference_into(&mut graph, reference)?;
    Ok((graph, node))
}

/// Decodes the reference rooted at `subject`.
///
/// A reference that decodes with zero keys is accepted: decode collects
/// whatever triples exist, and the minimum-one constraint belongs to the
/// validation layer the caller re-runs afterwards.
pub fn decode_reference(graph: &Graph, subject: &NodeId) -> Result<Reference, DecodeError> {
    let mut ancestors = FxHashSet::default();
    decode_reference_guarded(graph, subject, &mut ancestors, 0)
}

fn decode_reference_guarded(
    graph: &Graph,
    subject: &NodeId,
    ancestors: &mut FxHashSet<NodeId>,
    depth: usize,
) -> Result<Reference, DecodeError> {
    if depth >= MAX_REFERENCE_DEPTH {
        return Err(DecodeError::ReferenceDepthExceeded {
            max: MAX_REFERENCE_DEPTH,
        });
    }
    if !ancestors.insert(subject.clone()) {
        return Err(DecodeError::CyclicReference {
            node: subject.to_string(),
        });
    }
    trace!(%subject, depth, "decoding reference");

    let kind = scalar::require_enum(
        graph,
        subject,
        &vocab::predicate("Reference", "type"),
        "Reference/type",
    )?;
    let keys = decode_sequence(
        graph,
        subject,
        &vocab::predicate("Reference", "keys"),
        decode_key,
    )?
    .unwrap_or_default();

    let referred_semantic_id = match scalar::optional_node(
        graph,
        subject,
        &vocab::predicate("Reference", "referredSemanticId"),
    )? {
        Some(referred) => Some(Box::new(decode_reference_guarded(
            graph,
            referred,
            ancestors,
            depth + 1,
        )?)),
        None => None,
    };

    Ok(Reference {
        kind,
        keys,
        referred_semantic_id,
    })
}
