//! Codecs for the identifiable roots.
//!
//! Roots are the only named nodes the codec mints: their address is
//! derived from the global identifier, which is also stored verbatim as
//! the `Identifiable/id` literal. Encoding the same identifier twice
//! yields the same address, so callers can chain several roots into one
//! graph and link between them.

use tracing::debug;

use crate::codec::common::{
    decode_administration, decode_qualifier_sequence, decode_referable, decode_semantics,
    encode_administration, encode_qualifier_sequence, encode_referable, encode_semantics,
};
use crate::codec::element::{decode_element, encode_element_into};
use crate::codec::reference::{decode_reference, encode_reference_into};
use crate::codec::scalar;
use crate::codec::sequence::{decode_sequence, encode_sequence};
use crate::error::{DecodeError, EncodeError};
use crate::graph::{Graph, Literal, NodeId};
use crate::iri;
use crate::model::{ConceptDescription, Submodel};
use crate::vocab;

/// Encodes a submodel into `graph`, returning its named node.
pub fn encode_submodel_into(
    graph: &mut Graph,
    submodel: &Submodel,
    prefix_uri: &str,
) -> Result<NodeId, EncodeError> {
    let node = iri::named_node(prefix_uri, &submodel.id)?;
    debug!(id = %submodel.id, node = %node, "encoding submodel");
    graph.add(node.clone(), vocab::rdf_type(), vocab::type_marker("Submodel"));

    encode_referable(graph, &node, &submodel.referable)?;
    graph.add(
        node.clone(),
        vocab::predicate("Identifiable", "id"),
        Literal::string(&submodel.id),
    );
    if let Some(administration) = &submodel.administration {
        encode_administration(graph, &node, administration)?;
    }
    if let Some(kind) = submodel.kind {
        graph.add(
            node.clone(),
            vocab::predicate("HasKind", "kind"),
            scalar::enum_term(kind),
        );
    }
    encode_semantics(
        graph,
        &node,
        submodel.semantic_id.as_ref(),
        submodel.supplemental_semantic_ids.as_deref(),
    )?;
    if let Some(qualifiers) = &submodel.qualifiers {
        encode_qualifier_sequence(graph, &node, qualifiers)?;
    }
    if let Some(elements) = &submodel.submodel_elements {
        encode_sequence(
            graph,
            &node,
            vocab::predicate("Submodel", "submodelElements"),
            elements,
            encode_element_into,
        )?;
    }
    Ok(node)
}

/// Encodes a submodel, creating a graph unless the caller supplies one
/// to extend. Returns the graph and the submodel's named node.
pub fn encode_submodel(
    submodel: &Submodel,
    graph: Option<Graph>,
    prefix_uri: &str,
) -> Result<(Graph, NodeId), EncodeError> {
    let mut graph = graph.unwrap_or_default();
    let node = encode_submodel_into(&mut graph, submodel, prefix_uri)?;
    Ok((graph, node))
}

/// Decodes the submodel rooted at `subject`.
pub fn decode_submodel(graph: &Graph, subject: &NodeId) -> Result<Submodel, DecodeError> {
    debug!(node = %subject, "decoding submodel");
    let referable = decode_referable(graph, subject)?;
    let id = scalar::require_string(
        graph,
        subject,
        &vocab::predicate("Identifiable", "id"),
        "Identifiable/id",
    )?;
    let administration = decode_administration(graph, subject)?;
    let kind = scalar::optional_enum(graph, subject, &vocab::predicate("HasKind", "kind"))?;
    let (semantic_id, supplemental_semantic_ids) = decode_semantics(graph, subject)?;
    let qualifiers = decode_qualifier_sequence(graph, subject)?;
    let submodel_elements = decode_sequence(
        graph,
        subject,
        &vocab::predicate("Submodel", "submodelElements"),
        decode_element,
    )?;
    Ok(Submodel {
        referable,
        id,
        administration,
        kind,
        semantic_id,
        supplemental_semantic_ids,
        qualifiers,
        submodel_elements,
    })
}

/// Encodes a concept description into `graph`, returning its named node.
pub fn encode_concept_description_into(
    graph: &mut Graph,
    concept: &ConceptDescription,
    prefix_uri: &str,
) -> Result<NodeId, EncodeError> {
    let node = iri::named_node(prefix_uri, &concept.id)?;
    debug!(id = %concept.id, node = %node, "encoding concept description");
    graph.add(
        node.clone(),
        vocab::rdf_type(),
        vocab::type_marker("ConceptDescription"),
    );

    encode_referable(graph, &node, &concept.referable)?;
    graph.add(
        node.clone(),
        vocab::predicate("Identifiable", "id"),
        Literal::string(&concept.id),
    );
    if let Some(administration) = &concept.administration {
        encode_administration(graph, &node, administration)?;
    }
    if let Some(is_case_of) = &concept.is_case_of {
        encode_sequence(
            graph,
            &node,
            vocab::predicate("ConceptDescription", "isCaseOf"),
            is_case_of,
            encode_reference_into,
        )?;
    }
    Ok(node)
}

/// Encodes a concept description, creating a graph unless the caller
/// supplies one to extend.
pub fn encode_concept_description(
    concept: &ConceptDescription,
    graph: Option<Graph>,
    prefix_uri: &str,
) -> Result<(Graph, NodeId), EncodeError> {
    let mut graph = graph.unwrap_or_default();
    let node = encode_concept_description_into(&mut graph, concept, prefix_uri)?;
    Ok((graph, node))
}

/// Decodes the concept description rooted at `subject`.
pub fn decode_concept_description(
    graph: &Graph,
    subject: &NodeId,
) -> Result<ConceptDescription, DecodeError> {
    debug!(node = %subject, "decoding concept description");
    let referable = decode_referable(graph, subject)?;
    let id = scalar::require_string(
        graph,
        subject,
        &vocab::predicate("Identifiable", "id"),
        "Identifiable/id",
    )?;
    let administration = decode_administration(graph, subject)?;
    let is_case_of = decode_sequence(
        graph,
        subject,
        &vocab::predicate("ConceptDescription", "isCaseOf"),
        decode_reference,
    )?;
    Ok(ConceptDescription {
        referable,
        id,
        administration,
        is_case_of,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AdministrativeInformation, DataTypeDefXsd, LangString, ModellingKind, Property, Referable,
        Reference, SubmodelElement,
    };

    const PREFIX: &str = "https://graph.example/nodes/";

    fn sample_submodel() -> Submodel {
        Submodel {
            referable: Referable {
                id_short: Some("TechnicalData".to_string()),
                display_name: Some(vec![
                    LangString::new("en", "Technical data"),
                    LangString::new("de", "Technische Daten"),
                ]),
                ..Referable::default()
            },
            id: "https://example.com/ids/sm/2543_5072_7091_2660".to_string(),
            administration: Some(AdministrativeInformation {
                version: Some("1".to_string()),
                revision: Some("2".to_string()),
                ..AdministrativeInformation::default()
            }),
            kind: Some(ModellingKind::Instance),
            semantic_id: Some(Reference::external("urn:templates:technical-data")),
            supplemental_semantic_ids: None,
            qualifiers: None,
            submodel_elements: Some(vec![
                SubmodelElement::Property(Property {
                    base: Default::default(),
                    value_type: DataTypeDefXsd::Double,
                    value: Some("400".to_string()),
                    value_id: None,
                }),
                SubmodelElement::Property(Property {
                    base: Default::default(),
                    value_type: DataTypeDefXsd::String,
                    value: Some("IE4".to_string()),
                    value_id: None,
                }),
            ]),
        }
    }

    #[test]
    fn test_submodel_round_trip() {
        let submodel = sample_submodel();
        let (graph, node) = encode_submodel(&submodel, None, PREFIX).unwrap();
        let decoded = decode_submodel(&graph, &node).unwrap();
        assert_eq!(decoded, submodel);
    }

    #[test]
    fn test_submodel_node_is_deterministic() {
        let submodel = sample_submodel();
        let (_, first) = encode_submodel(&submodel, None, PREFIX).unwrap();
        let (_, second) = encode_submodel(&submodel, None, PREFIX).unwrap();
        assert_eq!(first, second);
        assert!(!first.is_blank());
    }

    #[test]
    fn test_empty_id_fails_encode() {
        let submodel = Submodel::new("");
        assert!(matches!(
            encode_submodel(&submodel, None, PREFIX),
            Err(EncodeError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_absent_element_list_stays_absent() {
        let submodel = Submodel::new("urn:sm:bare");
        let (graph, node) = encode_submodel(&submodel, None, PREFIX).unwrap();
        let decoded = decode_submodel(&graph, &node).unwrap();
        assert_eq!(decoded.submodel_elements, None);
    }

    #[test]
    fn test_two_roots_share_one_graph() {
        let first = Submodel::new("urn:sm:one");
        let second = Submodel::new("urn:sm:two");

        let (graph, first_node) = encode_submodel(&first, None, PREFIX).unwrap();
        let (graph, second_node) = encode_submodel(&second, Some(graph), PREFIX).unwrap();
        assert_ne!(first_node, second_node);

        assert_eq!(decode_submodel(&graph, &first_node).unwrap(), first);
        assert_eq!(decode_submodel(&graph, &second_node).unwrap(), second);
    }

    #[test]
    fn test_concept_description_round_trip() {
        let concept = ConceptDescription {
            referable: Referable {
                id_short: Some("RotationSpeed".to_string()),
                ..Referable::default()
            },
            id: "https://example.com/ids/cd/0173-1#02-BAA120#008".to_string(),
            administration: None,
            is_case_of: Some(vec![
                Reference::external("urn:eclass:0173-1#02-BAA120#008"),
                Reference::external("urn:irdi:0112/2///61987#ABA574#007"),
            ]),
        };

        let (graph, node) = encode_concept_description(&concept, None, PREFIX).unwrap();
        let decoded = decode_concept_description(&graph, &node).unwrap();
        assert_eq!(decoded, concept);
    }

    #[test]
    fn test_missing_id_literal_is_malformed() {
        let mut graph = Graph::new();
        let node = NodeId::iri("https://graph.example/nodes/orphan");
        graph.add(node.clone(), vocab::rdf_type(), vocab::type_marker("Submodel"));

        assert!(matches!(
            decode_submodel(&graph, &node),
            Err(DecodeError::MalformedGraph { .. })
        ));
    }
}
