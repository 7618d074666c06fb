//! The ordered-collection convention.
//!
//! A triple set has no native list order, so every sequence child carries
//! one extra `(child, <ns>index, i)` triple recording its 0-based
//! position among siblings of the same (parent, predicate) pair. Decode
//! collects whatever children exist, demands the index, and sorts —
//! storage enumeration order is never observable.

use crate::error::{DecodeError, EncodeError};
use crate::graph::{Graph, Literal, NodeId, Term};
use crate::vocab;

/// Encodes `items` as the ordered children of (parent, predicate).
///
/// `encode_item` produces each child's node (emitting its sub-graph as a
/// side effect); this function then attaches the index triple and the
/// parent link. The only failure path is the item encoder's own.
pub(crate) fn encode_sequence<T, E>(
    graph: &mut Graph,
    parent: &NodeId,
    predicate: NodeId,
    items: &[T],
    mut encode_item: E,
) -> Result<(), EncodeError>
where
    E: FnMut(&mut Graph, &T) -> Result<NodeId, EncodeError>,
{
    for (position, item) in items.iter().enumerate() {
        let child = encode_item(graph, item)?;
        graph.add(
            child.clone(),
            vocab::index_predicate(),
            Literal::integer(position as u64),
        );
        graph.add(parent.clone(), predicate.clone(), Term::Node(child));
    }
    Ok(())
}

/// Decodes the ordered children of (parent, predicate).
///
/// Returns `None` when no child triples exist: an optional sequence that
/// was never set decodes to absent, not to an empty collection (the
/// schema forbids present-but-empty, so the two must stay distinct).
///
/// A child without an index triple is [`DecodeError::MissingOrderIndex`].
/// Duplicate indices are a detectable malformation; decode still
/// succeeds, and the tied children keep the graph's insertion order
/// (stable sort) — that order is whatever the producer emitted.
pub(crate) fn decode_sequence<T, D>(
    graph: &Graph,
    parent: &NodeId,
    predicate: &NodeId,
    mut decode_item: D,
) -> Result<Option<Vec<T>>, DecodeError>
where
    D: FnMut(&Graph, &NodeId) -> Result<T, DecodeError>,
{
    let index_predicate = vocab::index_predicate();
    let mut children: Vec<(u64, &NodeId)> = Vec::new();
    for term in graph.objects(parent, predicate) {
        let child = term.node().ok_or_else(|| {
            DecodeError::malformed(format!("{predicate} on {parent}: expected a child node"))
        })?;
        let position = match graph.first_object(child, &index_predicate) {
            None => {
                return Err(DecodeError::MissingOrderIndex {
                    child: child.to_string(),
                    predicate: predicate.to_string(),
                });
            }
            Some(term) => term
                .literal()
                .and_then(Literal::as_integer)
                .ok_or_else(|| {
                    DecodeError::malformed(format!("order index on {child} is not an integer"))
                })?,
        };
        children.push((position, child));
    }

    if children.is_empty() {
        return Ok(None);
    }
    children.sort_by_key(|(position, _)| *position);

    let mut items = Vec::with_capacity(children.len());
    for (_, child) in children {
        items.push(decode_item(graph, child)?);
    }
    Ok(Some(items))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::codec::scalar;
    use crate::iri;

    fn value_predicate() -> NodeId {
        NodeId::iri("urn:test:value")
    }

    fn children_predicate() -> NodeId {
        NodeId::iri("urn:test:children")
    }

    fn encode_text(graph: &mut Graph, item: &String) -> Result<NodeId, EncodeError> {
        let node = iri::anonymous_node();
        graph.add(node.clone(), value_predicate(), Literal::string(item));
        Ok(node)
    }

    fn decode_text(graph: &Graph, subject: &NodeId) -> Result<String, DecodeError> {
        scalar::require_string(graph, subject, &value_predicate(), "value")
    }

    #[test]
    fn test_sequence_round_trip() {
        let mut graph = Graph::new();
        let parent = iri::anonymous_node();
        let items = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        encode_sequence(&mut graph, &parent, children_predicate(), &items, encode_text).unwrap();

        let decoded =
            decode_sequence(&graph, &parent, &children_predicate(), decode_text).unwrap();
        assert_eq!(decoded, Some(items));
    }

    #[test]
    fn test_order_survives_adversarial_insertion() {
        // Build the triples by hand, inserting parent links in reverse of
        // the encoded order. The index triples, not insertion order, must
        // drive the decoded sequence.
        let mut graph = Graph::new();
        let parent = iri::anonymous_node();
        let mut nodes = Vec::new();
        for (position, text) in ["first", "second", "third"].iter().enumerate() {
            let node = iri::anonymous_node();
            graph.add(node.clone(), value_predicate(), Literal::string(*text));
            graph.add(
                node.clone(),
                vocab::index_predicate(),
                Literal::integer(position as u64),
            );
            nodes.push(node);
        }
        for node in nodes.iter().rev() {
            graph.add(parent.clone(), children_predicate(), Term::Node(node.clone()));
        }

        let decoded = decode_sequence(&graph, &parent, &children_predicate(), decode_text)
            .unwrap()
            .unwrap();
        assert_eq!(decoded, ["first", "second", "third"]);
    }

    #[test]
    fn test_absent_sequence_decodes_to_none() {
        let graph = Graph::new();
        let parent = iri::anonymous_node();
        let decoded =
            decode_sequence(&graph, &parent, &children_predicate(), decode_text).unwrap();
        assert_eq!(decoded, None);
    }

    #[test]
    fn test_empty_items_encode_to_no_triples() {
        let mut graph = Graph::new();
        let parent = iri::anonymous_node();
        let items: Vec<String> = Vec::new();
        encode_sequence(&mut graph, &parent, children_predicate(), &items, encode_text).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_missing_index_is_an_error() {
        let mut graph = Graph::new();
        let parent = iri::anonymous_node();
        let child = iri::anonymous_node();
        graph.add(child.clone(), value_predicate(), Literal::string("stray"));
        graph.add(parent.clone(), children_predicate(), Term::Node(child));

        let result = decode_sequence(&graph, &parent, &children_predicate(), decode_text);
        assert!(matches!(result, Err(DecodeError::MissingOrderIndex { .. })));
    }

    #[test]
    fn test_duplicate_indices_keep_insertion_order() {
        let mut graph = Graph::new();
        let parent = iri::anonymous_node();
        for text in ["tied-a", "tied-b"] {
            let node = iri::anonymous_node();
            graph.add(node.clone(), value_predicate(), Literal::string(text));
            graph.add(node.clone(), vocab::index_predicate(), Literal::integer(0));
            graph.add(parent.clone(), children_predicate(), Term::Node(node));
        }

        let decoded = decode_sequence(&graph, &parent, &children_predicate(), decode_text)
            .unwrap()
            .unwrap();
        assert_eq!(decoded, ["tied-a", "tied-b"]);
    }

    proptest! {
        #[test]
        fn prop_sequence_round_trips(items in proptest::collection::vec(".{0,24}", 0..16)) {
            let mut graph = Graph::new();
            let parent = iri::anonymous_node();
            encode_sequence(&mut graph, &parent, children_predicate(), &items, encode_text).unwrap();

            let decoded = decode_sequence(&graph, &parent, &children_predicate(), decode_text).unwrap();
            if items.is_empty() {
                prop_assert_eq!(decoded, None);
            } else {
                prop_assert_eq!(decoded, Some(items));
            }
        }
    }
}
