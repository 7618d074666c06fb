//! Codecs for the shared record heads.
//!
//! Every concrete type composes these by delegation, supertype fields
//! first: extensions, then the referable naming fields, then (for
//! elements) semantics and qualifiers. The composition order is fixed —
//! producers and consumers that interoperate on the same graphs expect
//! the same triple set.

use crate::codec::reference::{decode_reference, encode_reference_into};
use crate::codec::scalar;
use crate::codec::sequence::{decode_sequence, encode_sequence};
use crate::error::{DecodeError, EncodeError};
use crate::graph::{Graph, Literal, NodeId, Term};
use crate::iri;
use crate::model::{
    AdministrativeInformation, ElementBase, Extension, Qualifier, Referable, Reference,
    SpecificAssetId,
};
use crate::vocab;

// =============================================================================
// SEMANTICS (HasSemantics)
// =============================================================================

pub(crate) fn encode_semantics(
    graph: &mut Graph,
    node: &NodeId,
    semantic_id: Option<&Reference>,
    supplemental_semantic_ids: Option<&[Reference]>,
) -> Result<(), EncodeError> {
    if let Some(reference) = semantic_id {
        let reference_node = encode_reference_into(graph, reference)?;
        graph.add(
            node.clone(),
            vocab::predicate("HasSemantics", "semanticId"),
            Term::Node(reference_node),
        );
    }
    if let Some(references) = supplemental_semantic_ids {
        encode_sequence(
            graph,
            node,
            vocab::predicate("HasSemantics", "supplementalSemanticIds"),
            references,
            encode_reference_into,
        )?;
    }
    Ok(())
}

pub(crate) fn decode_semantics(
    graph: &Graph,
    subject: &NodeId,
) -> Result<(Option<Reference>, Option<Vec<Reference>>), DecodeError> {
    let semantic_id = scalar::optional_node(
        graph,
        subject,
        &vocab::predicate("HasSemantics", "semanticId"),
    )?
    .map(|node| decode_reference(graph, node))
    .transpose()?;

    let supplemental = decode_sequence(
        graph,
        subject,
        &vocab::predicate("HasSemantics", "supplementalSemanticIds"),
        decode_reference,
    )?;

    Ok((semantic_id, supplemental))
}

// =============================================================================
// EXTENSIONS (HasExtensions)
// =============================================================================

fn encode_extension(graph: &mut Graph, extension: &Extension) -> Result<NodeId, EncodeError> {
    let node = iri::anonymous_node();
    graph.add(node.clone(), vocab::rdf_type(), vocab::type_marker("Extension"));
    encode_semantics(
        graph,
        &node,
        extension.semantic_id.as_ref(),
        extension.supplemental_semantic_ids.as_deref(),
    )?;
    graph.add(
        node.clone(),
        vocab::predicate("Extension", "name"),
        Literal::string(&extension.name),
    );
    if let Some(value_type) = extension.value_type {
        graph.add(
            node.clone(),
            vocab::predicate("Extension", "valueType"),
            scalar::enum_term(value_type),
        );
    }
    if let Some(value) = &extension.value {
        graph.add(
            node.clone(),
            vocab::predicate("Extension", "value"),
            Literal::string(value),
        );
    }
    if let Some(refers_to) = &extension.refers_to {
        encode_sequence(
            graph,
            &node,
            vocab::predicate("Extension", "refersTo"),
            refers_to,
            encode_reference_into,
        )?;
    }
    Ok(node)
}

fn decode_extension(graph: &Graph, subject: &NodeId) -> Result<Extension, DecodeError> {
    let (semantic_id, supplemental_semantic_ids) = decode_semantics(graph, subject)?;
    let name = scalar::require_string(
        graph,
        subject,
        &vocab::predicate("Extension", "name"),
        "Extension/name",
    )?;
    let value_type =
        scalar::optional_enum(graph, subject, &vocab::predicate("Extension", "valueType"))?;
    let value = scalar::optional_string(graph, subject, &vocab::predicate("Extension", "value"))?;
    let refers_to = decode_sequence(
        graph,
        subject,
        &vocab::predicate("Extension", "refersTo"),
        decode_reference,
    )?;
    Ok(Extension {
        semantic_id,
        supplemental_semantic_ids,
        name,
        value_type,
        value,
        refers_to,
    })
}

// =============================================================================
// REFERABLE HEAD (HasExtensions + Referable)
// =============================================================================

pub(crate) fn encode_referable(
    graph: &mut Graph,
    node: &NodeId,
    referable: &Referable,
) -> Result<(), EncodeError> {
    if let Some(extensions) = &referable.extensions {
        encode_sequence(
            graph,
            node,
            vocab::predicate("HasExtensions", "extensions"),
            extensions,
            encode_extension,
        )?;
    }
    if let Some(category) = &referable.category {
        graph.add(
            node.clone(),
            vocab::predicate("Referable", "category"),
            Literal::string(category),
        );
    }
    if let Some(id_short) = &referable.id_short {
        graph.add(
            node.clone(),
            vocab::predicate("Referable", "idShort"),
            Literal::string(id_short),
        );
    }
    if let Some(display_name) = &referable.display_name {
        encode_sequence(
            graph,
            node,
            vocab::predicate("Referable", "displayName"),
            display_name,
            |g, entry| Ok(scalar::encode_lang_string(g, "LangStringNameType", entry)),
        )?;
    }
    if let Some(description) = &referable.description {
        encode_sequence(
            graph,
            node,
            vocab::predicate("Referable", "description"),
            description,
            |g, entry| Ok(scalar::encode_lang_string(g, "LangStringTextType", entry)),
        )?;
    }
    Ok(())
}

pub(crate) fn decode_referable(graph: &Graph, subject: &NodeId) -> Result<Referable, DecodeError> {
    let extensions = decode_sequence(
        graph,
        subject,
        &vocab::predicate("HasExtensions", "extensions"),
        decode_extension,
    )?;
    let category =
        scalar::optional_string(graph, subject, &vocab::predicate("Referable", "category"))?;
    let id_short =
        scalar::optional_string(graph, subject, &vocab::predicate("Referable", "idShort"))?;
    let display_name = decode_sequence(
        graph,
        subject,
        &vocab::predicate("Referable", "displayName"),
        scalar::decode_lang_string,
    )?;
    let description = decode_sequence(
        graph,
        subject,
        &vocab::predicate("Referable", "description"),
        scalar::decode_lang_string,
    )?;
    Ok(Referable {
        extensions,
        category,
        id_short,
        display_name,
        description,
    })
}

// =============================================================================
// QUALIFIERS (Qualifiable)
// =============================================================================

fn encode_qualifier(graph: &mut Graph, qualifier: &Qualifier) -> Result<NodeId, EncodeError> {
    let node = iri::anonymous_node();
    graph.add(node.clone(), vocab::rdf_type(), vocab::type_marker("Qualifier"));
    encode_semantics(
        graph,
        &node,
        qualifier.semantic_id.as_ref(),
        qualifier.supplemental_semantic_ids.as_deref(),
    )?;
    if let Some(kind) = qualifier.kind {
        graph.add(
            node.clone(),
            vocab::predicate("Qualifier", "kind"),
            scalar::enum_term(kind),
        );
    }
    graph.add(
        node.clone(),
        vocab::predicate("Qualifier", "type"),
        Literal::string(&qualifier.qualifier_type),
    );
    graph.add(
        node.clone(),
        vocab::predicate("Qualifier", "valueType"),
        scalar::enum_term(qualifier.value_type),
    );
    if let Some(value) = &qualifier.value {
        graph.add(
            node.clone(),
            vocab::predicate("Qualifier", "value"),
            Literal::string(value),
        );
    }
    if let Some(value_id) = &qualifier.value_id {
        let value_id_node = encode_reference_into(graph, value_id)?;
        graph.add(
            node.clone(),
            vocab::predicate("Qualifier", "valueId"),
            Term::Node(value_id_node),
        );
    }
    Ok(node)
}

fn decode_qualifier(graph: &Graph, subject: &NodeId) -> Result<Qualifier, DecodeError> {
    let (semantic_id, supplemental_semantic_ids) = decode_semantics(graph, subject)?;
    let kind = scalar::optional_enum(graph, subject, &vocab::predicate("Qualifier", "kind"))?;
    let qualifier_type = scalar::require_string(
        graph,
        subject,
        &vocab::predicate("Qualifier", "type"),
        "Qualifier/type",
    )?;
    let value_type = scalar::require_enum(
        graph,
        subject,
        &vocab::predicate("Qualifier", "valueType"),
        "Qualifier/valueType",
    )?;
    let value = scalar::optional_string(graph, subject, &vocab::predicate("Qualifier", "value"))?;
    let value_id = scalar::optional_node(graph, subject, &vocab::predicate("Qualifier", "valueId"))?
        .map(|node| decode_reference(graph, node))
        .transpose()?;
    Ok(Qualifier {
        semantic_id,
        supplemental_semantic_ids,
        kind,
        qualifier_type,
        value_type,
        value,
        value_id,
    })
}

pub(crate) fn encode_qualifier_sequence(
    graph: &mut Graph,
    node: &NodeId,
    qualifiers: &[Qualifier],
) -> Result<(), EncodeError> {
    encode_sequence(
        graph,
        node,
        vocab::predicate("Qualifiable", "qualifiers"),
        qualifiers,
        encode_qualifier,
    )
}

pub(crate) fn decode_qualifier_sequence(
    graph: &Graph,
    subject: &NodeId,
) -> Result<Option<Vec<Qualifier>>, DecodeError> {
    decode_sequence(
        graph,
        subject,
        &vocab::predicate("Qualifiable", "qualifiers"),
        decode_qualifier,
    )
}

// =============================================================================
// ELEMENT HEAD (the full supertype chain of a submodel element)
// =============================================================================

pub(crate) fn encode_element_base(
    graph: &mut Graph,
    node: &NodeId,
    base: &ElementBase,
) -> Result<(), EncodeError> {
    encode_referable(graph, node, &base.referable)?;
    encode_semantics(
        graph,
        node,
        base.semantic_id.as_ref(),
        base.supplemental_semantic_ids.as_deref(),
    )?;
    if let Some(qualifiers) = &base.qualifiers {
        encode_qualifier_sequence(graph, node, qualifiers)?;
    }
    Ok(())
}

pub(crate) fn decode_element_base(
    graph: &Graph,
    subject: &NodeId,
) -> Result<ElementBase, DecodeError> {
    let referable = decode_referable(graph, subject)?;
    let (semantic_id, supplemental_semantic_ids) = decode_semantics(graph, subject)?;
    let qualifiers = decode_qualifier_sequence(graph, subject)?;
    Ok(ElementBase {
        referable,
        semantic_id,
        supplemental_semantic_ids,
        qualifiers,
    })
}

// =============================================================================
// ADMINISTRATIVE INFORMATION (Identifiable)
// =============================================================================

pub(crate) fn encode_administration(
    graph: &mut Graph,
    parent: &NodeId,
    administration: &AdministrativeInformation,
) -> Result<(), EncodeError> {
    let node = iri::anonymous_node();
    graph.add(
        node.clone(),
        vocab::rdf_type(),
        vocab::type_marker("AdministrativeInformation"),
    );
    if let Some(version) = &administration.version {
        graph.add(
            node.clone(),
            vocab::predicate("AdministrativeInformation", "version"),
            Literal::string(version),
        );
    }
    if let Some(revision) = &administration.revision {
        graph.add(
            node.clone(),
            vocab::predicate("AdministrativeInformation", "revision"),
            Literal::string(revision),
        );
    }
    if let Some(creator) = &administration.creator {
        let creator_node = encode_reference_into(graph, creator)?;
        graph.add(
            node.clone(),
            vocab::predicate("AdministrativeInformation", "creator"),
            Term::Node(creator_node),
        );
    }
    if let Some(template_id) = &administration.template_id {
        graph.add(
            node.clone(),
            vocab::predicate("AdministrativeInformation", "templateId"),
            Literal::string(template_id),
        );
    }
    graph.add(
        parent.clone(),
        vocab::predicate("Identifiable", "administration"),
        Term::Node(node),
    );
    Ok(())
}

pub(crate) fn decode_administration(
    graph: &Graph,
    parent: &NodeId,
) -> Result<Option<AdministrativeInformation>, DecodeError> {
    let Some(subject) = scalar::optional_node(
        graph,
        parent,
        &vocab::predicate("Identifiable", "administration"),
    )?
    else {
        return Ok(None);
    };

    let version = scalar::optional_string(
        graph,
        subject,
        &vocab::predicate("AdministrativeInformation", "version"),
    )?;
    let revision = scalar::optional_string(
        graph,
        subject,
        &vocab::predicate("AdministrativeInformation", "revision"),
    )?;
    let creator = scalar::optional_node(
        graph,
        subject,
        &vocab::predicate("AdministrativeInformation", "creator"),
    )?
    .map(|node| decode_reference(graph, node))
    .transpose()?;
    let template_id = scalar::optional_string(
        graph,
        subject,
        &vocab::predicate("AdministrativeInformation", "templateId"),
    )?;
    Ok(Some(AdministrativeInformation {
        version,
        revision,
        creator,
        template_id,
    }))
}

// =============================================================================
// SPECIFIC ASSET IDS (used by Entity)
// =============================================================================

pub(crate) fn encode_specific_asset_id(
    graph: &mut Graph,
    asset_id: &SpecificAssetId,
) -> Result<NodeId, EncodeError> {
    let node = iri::anonymous_node();
    graph.add(
        node.clone(),
        vocab::rdf_type(),
        vocab::type_marker("SpecificAssetId"),
    );
    encode_semantics(
        graph,
        &node,
        asset_id.semantic_id.as_ref(),
        asset_id.supplemental_semantic_ids.as_deref(),
    )?;
    graph.add(
        node.clone(),
        vocab::predicate("SpecificAssetId", "name"),
        Literal::string(&asset_id.name),
    );
    graph.add(
        node.clone(),
        vocab::predicate("SpecificAssetId", "value"),
        Literal::string(&asset_id.value),
    );
    if let Some(external_subject_id) = &asset_id.external_subject_id {
        let subject_node = encode_reference_into(graph, external_subject_id)?;
        graph.add(
            node.clone(),
            vocab::predicate("SpecificAssetId", "externalSubjectId"),
            Term::Node(subject_node),
        );
    }
    Ok(node)
}

pub(crate) fn decode_specific_asset_id(
    graph: &Graph,
    subject: &NodeId,
) -> Result<SpecificAssetId, DecodeError> {
    let (semantic_id, supplemental_semantic_ids) = decode_semantics(graph, subject)?;
    let name = scalar::require_string(
        graph,
        subject,
        &vocab::predicate("SpecificAssetId", "name"),
        "SpecificAssetId/name",
    )?;
    let value = scalar::require_string(
        graph,
        subject,
        &vocab::predicate("SpecificAssetId", "value"),
        "SpecificAssetId/value",
    )?;
    let external_subject_id = scalar::optional_node(
        graph,
        subject,
        &vocab::predicate("SpecificAssetId", "externalSubjectId"),
    )?
    .map(|node| decode_reference(graph, node))
    .transpose()?;
    Ok(SpecificAssetId {
        semantic_id,
        supplemental_semantic_ids,
        name,
        value,
        external_subject_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DataTypeDefXsd, LangString, QualifierKind};

    #[test]
    fn test_referable_round_trip_preserves_order() {
        let referable = Referable {
            extensions: None,
            category: Some("PARAMETER".to_string()),
            id_short: Some("Motor".to_string()),
            display_name: Some(vec![
                LangString::new("en", "Motor"),
                LangString::new("de", "Motor"),
                LangString::new("fr", "Moteur"),
            ]),
            description: Some(vec![LangString::new("en", "Drive motor")]),
        };

        let mut graph = Graph::new();
        let node = iri::anonymous_node();
        encode_referable(&mut graph, &node, &referable).unwrap();

        let decoded = decode_referable(&graph, &node).unwrap();
        assert_eq!(decoded, referable);
    }

    #[test]
    fn test_absent_referable_fields_stay_absent() {
        let mut graph = Graph::new();
        let node = iri::anonymous_node();
        encode_referable(&mut graph, &node, &Referable::default()).unwrap();
        assert!(graph.is_empty());

        let decoded = decode_referable(&graph, &node).unwrap();
        assert_eq!(decoded, Referable::default());
        assert!(decoded.display_name.is_none());
    }

    #[test]
    fn test_extension_round_trip() {
        let referable = Referable {
            extensions: Some(vec![Extension {
                semantic_id: Some(Reference::external("urn:ext:semantics")),
                supplemental_semantic_ids: None,
                name: "revisionHint".to_string(),
                value_type: Some(DataTypeDefXsd::String),
                value: Some("draft".to_string()),
                refers_to: Some(vec![Reference::external("urn:ext:target")]),
            }]),
            ..Referable::default()
        };

        let mut graph = Graph::new();
        let node = iri::anonymous_node();
        encode_referable(&mut graph, &node, &referable).unwrap();

        let decoded = decode_referable(&graph, &node).unwrap();
        assert_eq!(decoded, referable);
    }

    #[test]
    fn test_element_base_round_trip() {
        let base = ElementBase {
            referable: Referable {
                id_short: Some("Speed".to_string()),
                ..Referable::default()
            },
            semantic_id: Some(Reference::external("urn:cd:speed")),
            supplemental_semantic_ids: Some(vec![
                Reference::external("urn:cd:speed:a"),
                Reference::external("urn:cd:speed:b"),
            ]),
            qualifiers: Some(vec![Qualifier {
                semantic_id: None,
                supplemental_semantic_ids: None,
                kind: Some(QualifierKind::ConceptQualifier),
                qualifier_type: "Cardinality".to_string(),
                value_type: DataTypeDefXsd::String,
                value: Some("One".to_string()),
                value_id: None,
            }]),
        };

        let mut graph = Graph::new();
        let node = iri::anonymous_node();
        encode_element_base(&mut graph, &node, &base).unwrap();

        let decoded = decode_element_base(&graph, &node).unwrap();
        assert_eq!(decoded, base);
    }

    #[test]
    fn test_administration_round_trip() {
        let administration = AdministrativeInformation {
            version: Some("1".to_string()),
            revision: Some("4".to_string()),
            creator: Some(Reference::external("urn:creator")),
            template_id: None,
        };

        let mut graph = Graph::new();
        let parent = iri::anonymous_node();
        encode_administration(&mut graph, &parent, &administration).unwrap();

        let decoded = decode_administration(&graph, &parent).unwrap();
        assert_eq!(decoded, Some(administration));

        let other = iri::anonymous_node();
        assert_eq!(decode_administration(&graph, &other).unwrap(), None);
    }

    #[test]
    fn test_specific_asset_id_round_trip() {
        let asset_id = SpecificAssetId {
            semantic_id: None,
            supplemental_semantic_ids: None,
            name: "serialNumber".to_string(),
            value: "SN-1029".to_string(),
            external_subject_id: Some(Reference::external("urn:oem")),
        };

        let mut graph = Graph::new();
        let node = encode_specific_asset_id(&mut graph, &asset_id).unwrap();

        let decoded = decode_specific_asset_id(&graph, &node).unwrap();
        assert_eq!(decoded, asset_id);
    }
}
