//! Per-kind element codecs and polymorphic dispatch.
//!
//! Each concrete kind's encoder emits the abstract family marker, its own
//! concrete marker, and the discriminator literal, then delegates the
//! shared head to [`crate::codec::common`] before its kind-specific
//! fields. Decode reads the discriminator first and dispatches through a
//! single `match` over the closed kind set.

use tracing::trace;

use crate::codec::common::{
    decode_element_base, decode_specific_asset_id, encode_element_base, encode_specific_asset_id,
};
use crate::codec::reference::{decode_reference, encode_reference_into};
use crate::codec::scalar;
use crate::codec::sequence::{decode_sequence, encode_sequence};
use crate::error::{DecodeError, EncodeError};
use crate::graph::{Graph, Literal, NodeId, Term};
use crate::iri;
use crate::model::{
    AnnotatedRelationshipElement, BasicEventElement, Blob, Capability, ElementBase, ElementKind,
    Entity, File, MultiLanguageProperty, Operation, OperationVariable, Property, Range, Reference,
    ReferenceElement, RelationshipElement, SubmodelElement, SubmodelElementCollection,
    SubmodelElementList,
};
use crate::vocab;

/// Encodes an element into `graph`, returning its fresh anonymous node.
pub fn encode_element_into(
    graph: &mut Graph,
    element: &SubmodelElement,
) -> Result<NodeId, EncodeError> {
    let node = iri::anonymous_node();
    let kind = element.kind();
    graph.add(
        node.clone(),
        vocab::rdf_type(),
        vocab::type_marker("SubmodelElement"),
    );
    graph.add(node.clone(), vocab::rdf_type(), vocab::type_marker(kind.as_str()));
    graph.add(
        node.clone(),
        vocab::predicate("SubmodelElement", "modelType"),
        Literal::string(kind.as_str()),
    );
    encode_element_base(graph, &node, element.base())?;

    match element {
        SubmodelElement::AnnotatedRelationshipElement(e) => {
            encode_annotated_relationship(graph, &node, e)?
        }
        SubmodelElement::BasicEventElement(e) => encode_basic_event(graph, &node, e)?,
        SubmodelElement::Blob(e) => encode_blob(graph, &node, e)?,
        SubmodelElement::Capability(_) => {}
        SubmodelElement::Entity(e) => encode_entity(graph, &node, e)?,
        SubmodelElement::File(e) => encode_file(graph, &node, e)?,
        SubmodelElement::MultiLanguageProperty(e) => encode_multi_language(graph, &node, e)?,
        SubmodelElement::Operation(e) => encode_operation(graph, &node, e)?,
        SubmodelElement::Property(e) => encode_property(graph, &node, e)?,
        SubmodelElement::Range(e) => encode_range(graph, &node, e)?,
        SubmodelElement::ReferenceElement(e) => encode_reference_element(graph, &node, e)?,
        SubmodelElement::RelationshipElement(e) => encode_relationship(graph, &node, e)?,
        SubmodelElement::SubmodelElementCollection(e) => encode_collection(graph, &node, e)?,
        SubmodelElement::SubmodelElementList(e) => encode_list(graph, &node, e)?,
    }
    Ok(node)
}

/// Encodes an element, creating a graph unless the caller supplies one.
pub fn encode_element(
    element: &SubmodelElement,
    graph: Option<Graph>,
) -> Result<(Graph, NodeId), EncodeError> {
    let mut graph = graph.unwrap_or_default();
    let node = encode_element_into(&mut graph, element)?;
    Ok((graph, node))
}

/// Decodes the element rooted at `subject`, dispatching on its
/// discriminator literal.
pub fn decode_element(graph: &Graph, subject: &NodeId) -> Result<SubmodelElement, DecodeError> {
    let discriminator = scalar::optional_string(
        graph,
        subject,
        &vocab::predicate("SubmodelElement", "modelType"),
    )?
    .ok_or_else(|| {
        DecodeError::malformed(format!("{subject} carries no element discriminator"))
    })?;
    let kind = match ElementKind::parse(&discriminator) {
        Some(kind) => kind,
        None => {
            return Err(DecodeError::UnsupportedElementKind {
                kind: discriminator,
            });
        }
    };
    trace!(%subject, kind = kind.as_str(), "dispatching element decode");

    let base = decode_element_base(graph, subject)?;
    Ok(match kind {
        ElementKind::AnnotatedRelationshipElement => SubmodelElement::AnnotatedRelationshipElement(
            decode_annotated_relationship(graph, subject, base)?,
        ),
        ElementKind::BasicEventElement => {
            SubmodelElement::BasicEventElement(decode_basic_event(graph, subject, base)?)
        }
        ElementKind::Blob => SubmodelElement::Blob(decode_blob(graph, subject, base)?),
        ElementKind::Capability => SubmodelElement::Capability(Capability { base }),
        ElementKind::Entity => SubmodelElement::Entity(decode_entity(graph, subject, base)?),
        ElementKind::File => SubmodelElement::File(decode_file(graph, subject, base)?),
        ElementKind::MultiLanguageProperty => {
            SubmodelElement::MultiLanguageProperty(decode_multi_language(graph, subject, base)?)
        }
        ElementKind::Operation => {
            SubmodelElement::Operation(decode_operation(graph, subject, base)?)
        }
        ElementKind::Property => SubmodelElement::Property(decode_property(graph, subject, base)?),
        ElementKind::Range => SubmodelElement::Range(decode_range(graph, subject, base)?),
        ElementKind::ReferenceElement => {
            SubmodelElement::ReferenceElement(decode_reference_element(graph, subject, base)?)
        }
        ElementKind::RelationshipElement => {
            SubmodelElement::RelationshipElement(decode_relationship(graph, subject, base)?)
        }
        ElementKind::SubmodelElementCollection => {
            SubmodelElement::SubmodelElementCollection(decode_collection(graph, subject, base)?)
        }
        ElementKind::SubmodelElementList => {
            SubmodelElement::SubmodelElementList(decode_list(graph, subject, base)?)
        }
    })
}

// =============================================================================
// DATA ELEMENTS
// =============================================================================

fn encode_property(graph: &mut Graph, node: &NodeId, e: &Property) -> Result<(), EncodeError> {
    graph.add(
        node.clone(),
        vocab::predicate("Property", "valueType"),
        scalar::enum_term(e.value_type),
    );
    if let Some(value) = &e.value {
        graph.add(
            node.clone(),
            vocab::predicate("Property", "value"),
            Literal::string(value),
        );
    }
    if let Some(value_id) = &e.value_id {
        let value_id_node = encode_reference_into(graph, value_id)?;
        graph.add(
            node.clone(),
            vocab::predicate("Property", "valueId"),
            Term::Node(value_id_node),
        );
    }
    Ok(())
}

fn decode_property(
    graph: &Graph,
    subject: &NodeId,
    base: ElementBase,
) -> Result<Property, DecodeError> {
    let value_type = scalar::require_enum(
        graph,
        subject,
        &vocab::predicate("Property", "valueType"),
        "Property/valueType",
    )?;
    let value = scalar::optional_string(graph, subject, &vocab::predicate("Property", "value"))?;
    let value_id = scalar::optional_node(graph, subject, &vocab::predicate("Property", "valueId"))?
        .map(|node| decode_reference(graph, node))
        .transpose()?;
    Ok(Property {
        base,
        value_type,
        value,
        value_id,
    })
}

fn encode_multi_language(
    graph: &mut Graph,
    node: &NodeId,
    e: &MultiLanguageProperty,
) -> Result<(), EncodeError> {
    if let Some(value) = &e.value {
        encode_sequence(
            graph,
            node,
            vocab::predicate("MultiLanguageProperty", "value"),
            value,
            |g, entry| Ok(scalar::encode_lang_string(g, "LangStringTextType", entry)),
        )?;
    }
    if let Some(value_id) = &e.value_id {
        let value_id_node = encode_reference_into(graph, value_id)?;
        graph.add(
            node.clone(),
            vocab::predicate("MultiLanguageProperty", "valueId"),
            Term::Node(value_id_node),
        );
    }
    Ok(())
}

fn decode_multi_language(
    graph: &Graph,
    subject: &NodeId,
    base: ElementBase,
) -> Result<MultiLanguageProperty, DecodeError> {
    let value = decode_sequence(
        graph,
        subject,
        &vocab::predicate("MultiLanguageProperty", "value"),
        scalar::decode_lang_string,
    )?;
    let value_id = scalar::optional_node(
        graph,
        subject,
        &vocab::predicate("MultiLanguageProperty", "valueId"),
    )?
    .map(|node| decode_reference(graph, node))
    .transpose()?;
    Ok(MultiLanguageProperty {
        base,
        value,
        value_id,
    })
}

fn encode_range(graph: &mut Graph, node: &NodeId, e: &Range) -> Result<(), EncodeError> {
    graph.add(
        node.clone(),
        vocab::predicate("Range", "valueType"),
        scalar::enum_term(e.value_type),
    );
    if let Some(min) = &e.min {
        graph.add(
            node.clone(),
            vocab::predicate("Range", "min"),
            Literal::string(min),
        );
    }
    if let Some(max) = &e.max {
        graph.add(
            node.clone(),
            vocab::predicate("Range", "max"),
            Literal::string(max),
        );
    }
    Ok(())
}

fn decode_range(graph: &Graph, subject: &NodeId, base: ElementBase) -> Result<Range, DecodeError> {
    let value_type = scalar::require_enum(
        graph,
        subject,
        &vocab::predicate("Range", "valueType"),
        "Range/valueType",
    )?;
    let min = scalar::optional_string(graph, subject, &vocab::predicate("Range", "min"))?;
    let max = scalar::optional_string(graph, subject, &vocab::predicate("Range", "max"))?;
    Ok(Range {
        base,
        value_type,
        min,
        max,
    })
}

fn encode_blob(graph: &mut Graph, node: &NodeId, e: &Blob) -> Result<(), EncodeError> {
    graph.add(
        node.clone(),
        vocab::predicate("Blob", "contentType"),
        Literal::string(&e.content_type),
    );
    if let Some(value) = &e.value {
        graph.add(
            node.clone(),
            vocab::predicate("Blob", "value"),
            scalar::base64_literal(value),
        );
    }
    Ok(())
}

fn decode_blob(graph: &Graph, subject: &NodeId, base: ElementBase) -> Result<Blob, DecodeError> {
    let content_type = scalar::require_string(
        graph,
        subject,
        &vocab::predicate("Blob", "contentType"),
        "Blob/contentType",
    )?;
    let value = scalar::optional_base64(graph, subject, &vocab::predicate("Blob", "value"))?;
    Ok(Blob {
        base,
        content_type,
        value,
    })
}

fn encode_file(graph: &mut Graph, node: &NodeId, e: &File) -> Result<(), EncodeError> {
    graph.add(
        node.clone(),
        vocab::predicate("File", "contentType"),
        Literal::string(&e.content_type),
    );
    if let Some(value) = &e.value {
        graph.add(
            node.clone(),
            vocab::predicate("File", "value"),
            Literal::string(value),
        );
    }
    Ok(())
}

fn decode_file(graph: &Graph, subject: &NodeId, base: ElementBase) -> Result<File, DecodeError> {
    let content_type = scalar::require_string(
        graph,
        subject,
        &vocab::predicate("File", "contentType"),
        "File/contentType",
    )?;
    let value = scalar::optional_string(graph, subject, &vocab::predicate("File", "value"))?;
    Ok(File {
        base,
        content_type,
        value,
    })
}

fn encode_reference_element(
    graph: &mut Graph,
    node: &NodeId,
    e: &ReferenceElement,
) -> Result<(), EncodeError> {
    if let Some(value) = &e.value {
        let value_node = encode_reference_into(graph, value)?;
        graph.add(
            node.clone(),
            vocab::predicate("ReferenceElement", "value"),
            Term::Node(value_node),
        );
    }
    Ok(())
}

fn decode_reference_element(
    graph: &Graph,
    subject: &NodeId,
    base: ElementBase,
) -> Result<ReferenceElement, DecodeError> {
    let value = scalar::optional_node(
        graph,
        subject,
        &vocab::predicate("ReferenceElement", "value"),
    )?
    .map(|node| decode_reference(graph, node))
    .transpose()?;
    Ok(ReferenceElement { base, value })
}

// =============================================================================
// RELATIONSHIPS
// =============================================================================

fn encode_relationship_ends(
    graph: &mut Graph,
    node: &NodeId,
    first: &Reference,
    second: &Reference,
) -> Result<(), EncodeError> {
    let first_node = encode_reference_into(graph, first)?;
    graph.add(
        node.clone(),
        vocab::predicate("RelationshipElement", "first"),
        Term::Node(first_node),
    );
    let second_node = encode_reference_into(graph, second)?;
    graph.add(
        node.clone(),
        vocab::predicate("RelationshipElement", "second"),
        Term::Node(second_node),
    );
    Ok(())
}

fn encode_relationship(
    graph: &mut Graph,
    node: &NodeId,
    e: &RelationshipElement,
) -> Result<(), EncodeError> {
    encode_relationship_ends(graph, node, &e.first, &e.second)
}

fn decode_relationship_ends(
    graph: &Graph,
    subject: &NodeId,
) -> Result<(Reference, Reference), DecodeError> {
    let first_node = scalar::require_node(
        graph,
        subject,
        &vocab::predicate("RelationshipElement", "first"),
        "RelationshipElement/first",
    )?;
    let second_node = scalar::require_node(
        graph,
        subject,
        &vocab::predicate("RelationshipElement", "second"),
        "RelationshipElement/second",
    )?;
    Ok((
        decode_reference(graph, first_node)?,
        decode_reference(graph, second_node)?,
    ))
}

fn decode_relationship(
    graph: &Graph,
    subject: &NodeId,
    base: ElementBase,
) -> Result<RelationshipElement, DecodeError> {
    let (first, second) = decode_relationship_ends(graph, subject)?;
    Ok(RelationshipElement {
        base,
        first,
        second,
    })
}

fn encode_annotated_relationship(
    graph: &mut Graph,
    node: &NodeId,
    e: &AnnotatedRelationshipElement,
) -> Result<(), EncodeError> {
    encode_relationship_ends(graph, node, &e.first, &e.second)?;
    if let Some(annotations) = &e.annotations {
        encode_sequence(
            graph,
            node,
            vocab::predicate("AnnotatedRelationshipElement", "annotations"),
            annotations,
            encode_element_into,
        )?;
    }
    Ok(())
}

fn decode_annotated_relationship(
    graph: &Graph,
    subject: &NodeId,
    base: ElementBase,
) -> Result<AnnotatedRelationshipElement, DecodeError> {
    let (first, second) = decode_relationship_ends(graph, subject)?;
    let annotations = decode_sequence(
        graph,
        subject,
        &vocab::predicate("AnnotatedRelationshipElement", "annotations"),
        decode_element,
    )?;
    Ok(AnnotatedRelationshipElement {
        base,
        first,
        second,
        annotations,
    })
}

// =============================================================================
// STRUCTURAL ELEMENTS
// =============================================================================

fn encode_entity(graph: &mut Graph, node: &NodeId, e: &Entity) -> Result<(), EncodeError> {
    if let Some(statements) = &e.statements {
        encode_sequence(
            graph,
            node,
            vocab::predicate("Entity", "statements"),
            statements,
            encode_element_into,
        )?;
    }
    graph.add(
        node.clone(),
        vocab::predicate("Entity", "entityType"),
        scalar::enum_term(e.entity_type),
    );
    if let Some(global_asset_id) = &e.global_asset_id {
        graph.add(
            node.clone(),
            vocab::predicate("Entity", "globalAssetId"),
            Literal::string(global_asset_id),
        );
    }
    if let Some(specific_asset_ids) = &e.specific_asset_ids {
        encode_sequence(
            graph,
            node,
            vocab::predicate("Entity", "specificAssetIds"),
            specific_asset_ids,
            encode_specific_asset_id,
        )?;
    }
    Ok(())
}

fn decode_entity(graph: &Graph, subject: &NodeId, base: ElementBase) -> Result<Entity, DecodeError> {
    let statements = decode_sequence(
        graph,
        subject,
        &vocab::predicate("Entity", "statements"),
        decode_element,
    )?;
    let entity_type = scalar::require_enum(
        graph,
        subject,
        &vocab::predicate("Entity", "entityType"),
        "Entity/entityType",
    )?;
    let global_asset_id =
        scalar::optional_string(graph, subject, &vocab::predicate("Entity", "globalAssetId"))?;
    let specific_asset_ids = decode_sequence(
        graph,
        subject,
        &vocab::predicate("Entity", "specificAssetIds"),
        decode_specific_asset_id,
    )?;
    Ok(Entity {
        base,
        statements,
        entity_type,
        global_asset_id,
        specific_asset_ids,
    })
}

fn encode_operation_variable(
    graph: &mut Graph,
    variable: &OperationVariable,
) -> Result<NodeId, EncodeError> {
    let node = iri::anonymous_node();
    graph.add(
        node.clone(),
        vocab::rdf_type(),
        vocab::type_marker("OperationVariable"),
    );
    let value_node = encode_element_into(graph, &variable.value)?;
    graph.add(
        node.clone(),
        vocab::predicate("OperationVariable", "value"),
        Term::Node(value_node),
    );
    Ok(node)
}

fn decode_operation_variable(
    graph: &Graph,
    subject: &NodeId,
) -> Result<OperationVariable, DecodeError> {
    let value_node = scalar::require_node(
        graph,
        subject,
        &vocab::predicate("OperationVariable", "value"),
        "OperationVariable/value",
    )?;
    Ok(OperationVariable {
        value: decode_element(graph, value_node)?,
    })
}

fn encode_operation(graph: &mut Graph, node: &NodeId, e: &Operation) -> Result<(), EncodeError> {
    for (field, variables) in [
        ("inputVariables", &e.input_variables),
        ("outputVariables", &e.output_variables),
        ("inoutputVariables", &e.inoutput_variables),
    ] {
        if let Some(variables) = variables {
            encode_sequence(
                graph,
                node,
                vocab::predicate("Operation", field),
                variables,
                encode_operation_variable,
            )?;
        }
    }
    Ok(())
}

fn decode_operation(
    graph: &Graph,
    subject: &NodeId,
    base: ElementBase,
) -> Result<Operation, DecodeError> {
    let input_variables = decode_sequence(
        graph,
        subject,
        &vocab::predicate("Operation", "inputVariables"),
        decode_operation_variable,
    )?;
    let output_variables = decode_sequence(
        graph,
        subject,
        &vocab::predicate("Operation", "outputVariables"),
        decode_operation_variable,
    )?;
    let inoutput_variables = decode_sequence(
        graph,
        subject,
        &vocab::predicate("Operation", "inoutputVariables"),
        decode_operation_variable,
    )?;
    Ok(Operation {
        base,
        input_variables,
        output_variables,
        inoutput_variables,
    })
}

fn encode_basic_event(
    graph: &mut Graph,
    node: &NodeId,
    e: &BasicEventElement,
) -> Result<(), EncodeError> {
    let observed = encode_reference_into(graph, &e.observed)?;
    graph.add(
        node.clone(),
        vocab::predicate("BasicEventElement", "observed"),
        Term::Node(observed),
    );
    graph.add(
        node.clone(),
        vocab::predicate("BasicEventElement", "direction"),
        scalar::enum_term(e.direction),
    );
    graph.add(
        node.clone(),
        vocab::predicate("BasicEventElement", "state"),
        scalar::enum_term(e.state),
    );
    if let Some(message_topic) = &e.message_topic {
        graph.add(
            node.clone(),
            vocab::predicate("BasicEventElement", "messageTopic"),
            Literal::string(message_topic),
        );
    }
    if let Some(message_broker) = &e.message_broker {
        let broker = encode_reference_into(graph, message_broker)?;
        graph.add(
            node.clone(),
            vocab::predicate("BasicEventElement", "messageBroker"),
            Term::Node(broker),
        );
    }
    if let Some(last_update) = &e.last_update {
        graph.add(
            node.clone(),
            vocab::predicate("BasicEventElement", "lastUpdate"),
            Literal::date_time(last_update),
        );
    }
    if let Some(min_interval) = &e.min_interval {
        graph.add(
            node.clone(),
            vocab::predicate("BasicEventElement", "minInterval"),
            Literal::duration(min_interval),
        );
    }
    if let Some(max_interval) = &e.max_interval {
        graph.add(
            node.clone(),
            vocab::predicate("BasicEventElement", "maxInterval"),
            Literal::duration(max_interval),
        );
    }
    Ok(())
}

fn decode_basic_event(
    graph: &Graph,
    subject: &NodeId,
    base: ElementBase,
) -> Result<BasicEventElement, DecodeError> {
    let observed_node = scalar::require_node(
        graph,
        subject,
        &vocab::predicate("BasicEventElement", "observed"),
        "BasicEventElement/observed",
    )?;
    let observed = decode_reference(graph, observed_node)?;
    let direction = scalar::require_enum(
        graph,
        subject,
        &vocab::predicate("BasicEventElement", "direction"),
        "BasicEventElement/direction",
    )?;
    let state = scalar::require_enum(
        graph,
        subject,
        &vocab::predicate("BasicEventElement", "state"),
        "BasicEventElement/state",
    )?;
    let message_topic = scalar::optional_string(
        graph,
        subject,
        &vocab::predicate("BasicEventElement", "messageTopic"),
    )?;
    let message_broker = scalar::optional_node(
        graph,
        subject,
        &vocab::predicate("BasicEventElement", "messageBroker"),
    )?
    .map(|node| decode_reference(graph, node))
    .transpose()?;
    let last_update = scalar::optional_string(
        graph,
        subject,
        &vocab::predicate("BasicEventElement", "lastUpdate"),
    )?;
    let min_interval = scalar::optional_string(
        graph,
        subject,
        &vocab::predicate("BasicEventElement", "minInterval"),
    )?;
    let max_interval = scalar::optional_string(
        graph,
        subject,
        &vocab::predicate("BasicEventElement", "maxInterval"),
    )?;
    Ok(BasicEventElement {
        base,
        observed,
        direction,
        state,
        message_topic,
        message_broker,
        last_update,
        min_interval,
        max_interval,
    })
}

fn encode_collection(
    graph: &mut Graph,
    node: &NodeId,
    e: &SubmodelElementCollection,
) -> Result<(), EncodeError> {
    if let Some(value) = &e.value {
        encode_sequence(
            graph,
            node,
            vocab::predicate("SubmodelElementCollection", "value"),
            value,
            encode_element_into,
        )?;
    }
    Ok(())
}

fn decode_collection(
    graph: &Graph,
    subject: &NodeId,
    base: ElementBase,
) -> Result<SubmodelElementCollection, DecodeError> {
    let value = decode_sequence(
        graph,
        subject,
        &vocab::predicate("SubmodelElementCollection", "value"),
        decode_element,
    )?;
    Ok(SubmodelElementCollection { base, value })
}

fn encode_list(
    graph: &mut Graph,
    node: &NodeId,
    e: &SubmodelElementList,
) -> Result<(), EncodeError> {
    if let Some(order_relevant) = e.order_relevant {
        graph.add(
            node.clone(),
            vocab::predicate("SubmodelElementList", "orderRelevant"),
            Literal::boolean(order_relevant),
        );
    }
    if let Some(semantic_id_list_element) = &e.semantic_id_list_element {
        let semantic_node = encode_reference_into(graph, semantic_id_list_element)?;
        graph.add(
            node.clone(),
            vocab::predicate("SubmodelElementList", "semanticIdListElement"),
            Term::Node(semantic_node),
        );
    }
    graph.add(
        node.clone(),
        vocab::predicate("SubmodelElementList", "typeValueListElement"),
        scalar::enum_term(e.type_value_list_element),
    );
    if let Some(value_type_list_element) = e.value_type_list_element {
        graph.add(
            node.clone(),
            vocab::predicate("SubmodelElementList", "valueTypeListElement"),
            scalar::enum_term(value_type_list_element),
        );
    }
    if let Some(value) = &e.value {
        encode_sequence(
            graph,
            node,
            vocab::predicate("SubmodelElementList", "value"),
            value,
            encode_element_into,
        )?;
    }
    Ok(())
}

fn decode_list(
    graph: &Graph,
    subject: &NodeId,
    base: ElementBase,
) -> Result<SubmodelElementList, DecodeError> {
    let order_relevant = scalar::optional_bool(
        graph,
        subject,
        &vocab::predicate("SubmodelElementList", "orderRelevant"),
    )?;
    let semantic_id_list_element = scalar::optional_node(
        graph,
        subject,
        &vocab::predicate("SubmodelElementList", "semanticIdListElement"),
    )?
    .map(|node| decode_reference(graph, node))
    .transpose()?;
    let type_value_list_element = scalar::require_enum(
        graph,
        subject,
        &vocab::predicate("SubmodelElementList", "typeValueListElement"),
        "SubmodelElementList/typeValueListElement",
    )?;
    let value_type_list_element = scalar::optional_enum(
        graph,
        subject,
        &vocab::predicate("SubmodelElementList", "valueTypeListElement"),
    )?;
    let value = decode_sequence(
        graph,
        subject,
        &vocab::predicate("SubmodelElementList", "value"),
        decode_element,
    )?;
    Ok(SubmodelElementList {
        base,
        order_relevant,
        semantic_id_list_element,
        type_value_list_element,
        value_type_list_element,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AasSubmodelElements, DataTypeDefXsd, Direction, EntityType, LangString, Referable,
        Reference, SpecificAssetId, StateOfEvent,
    };

    fn named_base(id_short: &str) -> ElementBase {
        ElementBase {
            referable: Referable {
                id_short: Some(id_short.to_string()),
                ..Referable::default()
            },
            ..ElementBase::default()
        }
    }

    fn roundtrip(element: SubmodelElement) -> SubmodelElement {
        let (graph, node) = encode_element(&element, None).unwrap();
        let decoded = decode_element(&graph, &node).unwrap();
        assert_eq!(decoded, element);
        decoded
    }

    #[test]
    fn test_property_round_trip() {
        roundtrip(SubmodelElement::Property(Property {
            base: named_base("Temperature"),
            value_type: DataTypeDefXsd::Double,
            value: Some("23.5".to_string()),
            value_id: Some(Reference::external("urn:unit:celsius")),
        }));
    }

    #[test]
    fn test_multi_language_property_keeps_entry_order() {
        let decoded = roundtrip(SubmodelElement::MultiLanguageProperty(MultiLanguageProperty {
            base: named_base("Label"),
            value: Some(vec![
                LangString::new("en", "pump"),
                LangString::new("de", "Pumpe"),
                LangString::new("ja", "ポンプ"),
            ]),
            value_id: None,
        }));
        let SubmodelElement::MultiLanguageProperty(e) = decoded else {
            unreachable!()
        };
        let languages: Vec<&str> = e
            .value
            .as_deref()
            .unwrap()
            .iter()
            .map(|entry| entry.language.as_str())
            .collect();
        assert_eq!(languages, ["en", "de", "ja"]);
    }

    #[test]
    fn test_range_and_file_round_trip() {
        roundtrip(SubmodelElement::Range(Range {
            base: named_base("OperatingTemp"),
            value_type: DataTypeDefXsd::Int,
            min: Some("-10".to_string()),
            max: None,
        }));
        roundtrip(SubmodelElement::File(File {
            base: named_base("Manual"),
            content_type: "application/pdf".to_string(),
            value: Some("/aasx/docs/manual.pdf".to_string()),
        }));
    }

    #[test]
    fn test_blob_round_trip_preserves_bytes() {
        let decoded = roundtrip(SubmodelElement::Blob(Blob {
            base: named_base("Thumbnail"),
            content_type: "image/png".to_string(),
            value: Some(vec![0x89, 0x50, 0x4e, 0x47, 0x00, 0xff]),
        }));
        let SubmodelElement::Blob(e) = decoded else {
            unreachable!()
        };
        assert_eq!(e.value.unwrap(), [0x89, 0x50, 0x4e, 0x47, 0x00, 0xff]);
    }

    #[test]
    fn test_reference_element_and_capability_round_trip() {
        roundtrip(SubmodelElement::ReferenceElement(ReferenceElement {
            base: named_base("SeeAlso"),
            value: Some(Reference::external("urn:other:submodel")),
        }));
        roundtrip(SubmodelElement::Capability(Capability {
            base: named_base("CanWeld"),
        }));
    }

    #[test]
    fn test_relationship_round_trip() {
        roundtrip(SubmodelElement::RelationshipElement(RelationshipElement {
            base: named_base("ConnectedTo"),
            first: Reference::external("urn:plug"),
            second: Reference::external("urn:socket"),
        }));
    }

    #[test]
    fn test_annotated_relationship_round_trip() {
        roundtrip(SubmodelElement::AnnotatedRelationshipElement(
            AnnotatedRelationshipElement {
                base: named_base("MeasuredLink"),
                first: Reference::external("urn:sensor"),
                second: Reference::external("urn:target"),
                annotations: Some(vec![SubmodelElement::Property(Property {
                    base: named_base("Confidence"),
                    value_type: DataTypeDefXsd::Float,
                    value: Some("0.97".to_string()),
                    value_id: None,
                })]),
            },
        ));
    }

    #[test]
    fn test_entity_round_trip() {
        roundtrip(SubmodelElement::Entity(Entity {
            base: named_base("Drive"),
            statements: Some(vec![SubmodelElement::Property(Property {
                base: named_base("Mass"),
                value_type: DataTypeDefXsd::Decimal,
                value: Some("12.4".to_string()),
                value_id: None,
            })]),
            entity_type: EntityType::SelfManagedEntity,
            global_asset_id: Some("https://assets.example/drive/7".to_string()),
            specific_asset_ids: Some(vec![SpecificAssetId {
                name: "serialNumber".to_string(),
                value: "D-7781".to_string(),
                ..SpecificAssetId::default()
            }]),
        }));
    }

    #[test]
    fn test_operation_round_trip() {
        roundtrip(SubmodelElement::Operation(Operation {
            base: named_base("Calibrate"),
            input_variables: Some(vec![OperationVariable {
                value: SubmodelElement::Property(Property {
                    base: named_base("Offset"),
                    value_type: DataTypeDefXsd::Double,
                    value: None,
                    value_id: None,
                }),
            }]),
            output_variables: Some(vec![OperationVariable {
                value: SubmodelElement::Property(Property {
                    base: named_base("Succeeded"),
                    value_type: DataTypeDefXsd::Boolean,
                    value: None,
                    value_id: None,
                }),
            }]),
            inoutput_variables: None,
        }));
    }

    #[test]
    fn test_basic_event_round_trip() {
        roundtrip(SubmodelElement::BasicEventElement(BasicEventElement {
            base: named_base("OverTemp"),
            observed: Reference::external("urn:property:temperature"),
            direction: Direction::Output,
            state: StateOfEvent::On,
            message_topic: Some("plant/line4/events".to_string()),
            message_broker: Some(Reference::external("urn:broker:mqtt")),
            last_update: Some("2024-11-02T08:15:00Z".to_string()),
            min_interval: Some("PT1S".to_string()),
            max_interval: None,
        }));
    }

    #[test]
    fn test_nested_collections_round_trip() {
        roundtrip(SubmodelElement::SubmodelElementCollection(
            SubmodelElementCollection {
                base: named_base("Nameplate"),
                value: Some(vec![
                    SubmodelElement::Property(Property {
                        base: named_base("Manufacturer"),
                        value_type: DataTypeDefXsd::String,
                        value: Some("ACME".to_string()),
                        value_id: None,
                    }),
                    SubmodelElement::SubmodelElementCollection(SubmodelElementCollection {
                        base: named_base("Address"),
                        value: Some(vec![SubmodelElement::Property(Property {
                            base: named_base("City"),
                            value_type: DataTypeDefXsd::String,
                            value: Some("Dresden".to_string()),
                            value_id: None,
                        })]),
                    }),
                ]),
            },
        ));
    }

    #[test]
    fn test_element_list_round_trip() {
        roundtrip(SubmodelElement::SubmodelElementList(SubmodelElementList {
            base: named_base("Measurements"),
            order_relevant: Some(true),
            semantic_id_list_element: None,
            type_value_list_element: AasSubmodelElements::Property,
            value_type_list_element: Some(DataTypeDefXsd::Double),
            value: Some(vec![
                SubmodelElement::Property(Property {
                    base: ElementBase::default(),
                    value_type: DataTypeDefXsd::Double,
                    value: Some("1.0".to_string()),
                    value_id: None,
                }),
                SubmodelElement::Property(Property {
                    base: ElementBase::default(),
                    value_type: DataTypeDefXsd::Double,
                    value: Some("2.0".to_string()),
                    value_id: None,
                }),
            ]),
        }));
    }

    #[test]
    fn test_unknown_discriminator_fails_decode() {
        let element = SubmodelElement::Capability(Capability {
            base: named_base("X"),
        });
        let (mut graph, _) = encode_element(&element, None).unwrap();

        let rogue = iri::anonymous_node();
        graph.add(
            rogue.clone(),
            vocab::predicate("SubmodelElement", "modelType"),
            Literal::string("HologramElement"),
        );

        assert!(matches!(
            decode_element(&graph, &rogue),
            Err(DecodeError::UnsupportedElementKind { kind }) if kind == "HologramElement"
        ));
    }

    #[test]
    fn test_missing_discriminator_is_malformed() {
        let graph = Graph::new();
        let subject = iri::anonymous_node();
        assert!(matches!(
            decode_element(&graph, &subject),
            Err(DecodeError::MalformedGraph { .. })
        ));
    }

    #[test]
    fn test_duplicate_singular_value_takes_first_match() {
        let element = SubmodelElement::Property(Property {
            base: named_base("P"),
            value_type: DataTypeDefXsd::String,
            value: Some("first".to_string()),
            value_id: None,
        });
        let (mut graph, node) = encode_element(&element, None).unwrap();
        // A sloppy producer appends a second value triple.
        graph.add(
            node.clone(),
            vocab::predicate("Property", "value"),
            Literal::string("second"),
        );

        let SubmodelElement::Property(decoded) = decode_element(&graph, &node).unwrap() else {
            unreachable!()
        };
        assert_eq!(decoded.value.as_deref(), Some("first"));
    }

    #[test]
    fn test_decode_failure_does_not_mutate_graph() {
        let mut graph = Graph::new();
        let subject = iri::anonymous_node();
        graph.add(
            subject.clone(),
            vocab::predicate("SubmodelElement", "modelType"),
            Literal::string("Property"),
        );
        // Property/valueType is missing, so decode must fail.
        let before = graph.len();
        assert!(decode_element(&graph, &subject).is_err());
        assert_eq!(graph.len(), before);
    }
}
