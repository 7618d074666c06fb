//! The closed polymorphic family of submodel element kinds.
//!
//! The family is a sum type: one tag per concrete kind, no open
//! subclassing. The tag doubles as the discriminator literal the codec
//! writes next to the rdf:type markers.

use crate::model::NamedEnum;
use crate::model::common::{DataTypeDefXsd, LangString, Qualifier, Referable, SpecificAssetId};
use crate::model::reference::Reference;

/// Discriminator tags for the concrete element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    AnnotatedRelationshipElement,
    BasicEventElement,
    Blob,
    Capability,
    Entity,
    File,
    MultiLanguageProperty,
    Operation,
    Property,
    Range,
    ReferenceElement,
    RelationshipElement,
    SubmodelElementCollection,
    SubmodelElementList,
}

impl ElementKind {
    /// The discriminator text stored in the graph.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::AnnotatedRelationshipElement => "AnnotatedRelationshipElement",
            ElementKind::BasicEventElement => "BasicEventElement",
            ElementKind::Blob => "Blob",
            ElementKind::Capability => "Capability",
            ElementKind::Entity => "Entity",
            ElementKind::File => "File",
            ElementKind::MultiLanguageProperty => "MultiLanguageProperty",
            ElementKind::Operation => "Operation",
            ElementKind::Property => "Property",
            ElementKind::Range => "Range",
            ElementKind::ReferenceElement => "ReferenceElement",
            ElementKind::RelationshipElement => "RelationshipElement",
            ElementKind::SubmodelElementCollection => "SubmodelElementCollection",
            ElementKind::SubmodelElementList => "SubmodelElementList",
        }
    }

    /// Parses a discriminator back into the closed set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "AnnotatedRelationshipElement" => Some(ElementKind::AnnotatedRelationshipElement),
            "BasicEventElement" => Some(ElementKind::BasicEventElement),
            "Blob" => Some(ElementKind::Blob),
            "Capability" => Some(ElementKind::Capability),
            "Entity" => Some(ElementKind::Entity),
            "File" => Some(ElementKind::File),
            "MultiLanguageProperty" => Some(ElementKind::MultiLanguageProperty),
            "Operation" => Some(ElementKind::Operation),
            "Property" => Some(ElementKind::Property),
            "Range" => Some(ElementKind::Range),
            "ReferenceElement" => Some(ElementKind::ReferenceElement),
            "RelationshipElement" => Some(ElementKind::RelationshipElement),
            "SubmodelElementCollection" => Some(ElementKind::SubmodelElementCollection),
            "SubmodelElementList" => Some(ElementKind::SubmodelElementList),
            _ => None,
        }
    }
}

/// Element type names a SubmodelElementList may constrain its entries to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AasSubmodelElements {
    AnnotatedRelationshipElement,
    BasicEventElement,
    Blob,
    Capability,
    DataElement,
    Entity,
    EventElement,
    File,
    MultiLanguageProperty,
    Operation,
    Property,
    Range,
    ReferenceElement,
    RelationshipElement,
    SubmodelElement,
    SubmodelElementCollection,
    SubmodelElementList,
}

impl NamedEnum for AasSubmodelElements {
    const NAME: &'static str = "AasSubmodelElements";

    fn as_str(self) -> &'static str {
        match self {
            AasSubmodelElements::AnnotatedRelationshipElement => "AnnotatedRelationshipElement",
            AasSubmodelElements::BasicEventElement => "BasicEventElement",
            AasSubmodelElements::Blob => "Blob",
            AasSubmodelElements::Capability => "Capability",
            AasSubmodelElements::DataElement => "DataElement",
            AasSubmodelElements::Entity => "Entity",
            AasSubmodelElements::EventElement => "EventElement",
            AasSubmodelElements::File => "File",
            AasSubmodelElements::MultiLanguageProperty => "MultiLanguageProperty",
            AasSubmodelElements::Operation => "Operation",
            AasSubmodelElements::Property => "Property",
            AasSubmodelElements::Range => "Range",
            AasSubmodelElements::ReferenceElement => "ReferenceElement",
            AasSubmodelElements::RelationshipElement => "RelationshipElement",
            AasSubmodelElements::SubmodelElement => "SubmodelElement",
            AasSubmodelElements::SubmodelElementCollection => "SubmodelElementCollection",
            AasSubmodelElements::SubmodelElementList => "SubmodelElementList",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "AnnotatedRelationshipElement" => Some(AasSubmodelElements::AnnotatedRelationshipElement),
            "BasicEventElement" => Some(AasSubmodelElements::BasicEventElement),
            "Blob" => Some(AasSubmodelElements::Blob),
            "Capability" => Some(AasSubmodelElements::Capability),
            "DataElement" => Some(AasSubmodelElements::DataElement),
            "Entity" => Some(AasSubmodelElements::Entity),
            "EventElement" => Some(AasSubmodelElements::EventElement),
            "File" => Some(AasSubmodelElements::File),
            "MultiLanguageProperty" => Some(AasSubmodelElements::MultiLanguageProperty),
            "Operation" => Some(AasSubmodelElements::Operation),
            "Property" => Some(AasSubmodelElements::Property),
            "Range" => Some(AasSubmodelElements::Range),
            "ReferenceElement" => Some(AasSubmodelElements::ReferenceElement),
            "RelationshipElement" => Some(AasSubmodelElements::RelationshipElement),
            "SubmodelElement" => Some(AasSubmodelElements::SubmodelElement),
            "SubmodelElementCollection" => Some(AasSubmodelElements::SubmodelElementCollection),
            "SubmodelElementList" => Some(AasSubmodelElements::SubmodelElementList),
            _ => None,
        }
    }
}

/// Whether an entity manages its own asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    CoManagedEntity,
    SelfManagedEntity,
}

impl NamedEnum for EntityType {
    const NAME: &'static str = "EntityType";

    fn as_str(self) -> &'static str {
        match self {
            EntityType::CoManagedEntity => "CoManagedEntity",
            EntityType::SelfManagedEntity => "SelfManagedEntity",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "CoManagedEntity" => Some(EntityType::CoManagedEntity),
            "SelfManagedEntity" => Some(EntityType::SelfManagedEntity),
            _ => None,
        }
    }
}

/// Direction of an event element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Input,
    Output,
}

impl NamedEnum for Direction {
    const NAME: &'static str = "Direction";

    fn as_str(self) -> &'static str {
        match self {
            Direction::Input => "input",
            Direction::Output => "output",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "input" => Some(Direction::Input),
            "output" => Some(Direction::Output),
            _ => None,
        }
    }
}

/// Activation state of an event element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateOfEvent {
    On,
    Off,
}

impl NamedEnum for StateOfEvent {
    const NAME: &'static str = "StateOfEvent";

    fn as_str(self) -> &'static str {
        match self {
            StateOfEvent::On => "on",
            StateOfEvent::Off => "off",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "on" => Some(StateOfEvent::On),
            "off" => Some(StateOfEvent::Off),
            _ => None,
        }
    }
}

/// The fields every submodel element shares, regardless of kind.
///
/// The codec encodes these by delegation in a fixed order — extensions,
/// referable naming fields, semantics, qualifiers — before any
/// kind-specific field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementBase {
    pub referable: Referable,
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Option<Vec<Reference>>,
    pub qualifiers: Option<Vec<Qualifier>>,
}

/// A typed single-value data element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub base: ElementBase,
    pub value_type: DataTypeDefXsd,
    pub value: Option<String>,
    pub value_id: Option<Reference>,
}

impl Property {
    pub fn new(value_type: DataTypeDefXsd) -> Self {
        Property {
            base: ElementBase::default(),
            value_type,
            value: None,
            value_id: None,
        }
    }
}

/// A data element holding one value per language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiLanguageProperty {
    pub base: ElementBase,
    pub value: Option<Vec<LangString>>,
    pub value_id: Option<Reference>,
}

/// A data element spanning a min/max value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    pub base: ElementBase,
    pub value_type: DataTypeDefXsd,
    pub min: Option<String>,
    pub max: Option<String>,
}

/// A data element holding an inline binary payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub base: ElementBase,
    pub content_type: String,
    pub value: Option<Vec<u8>>,
}

/// A data element pointing at a file by path or URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub base: ElementBase,
    pub content_type: String,
    pub value: Option<String>,
}

/// A data element whose value is a reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReferenceElement {
    pub base: ElementBase,
    pub value: Option<Reference>,
}

/// A directed relationship between two referables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipElement {
    pub base: ElementBase,
    pub first: Reference,
    pub second: Reference,
}

/// A relationship annotated with additional data elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRelationshipElement {
    pub base: ElementBase,
    pub first: Reference,
    pub second: Reference,
    pub annotations: Option<Vec<SubmodelElement>>,
}

/// An element expressing that the asset offers some capability.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Capability {
    pub base: ElementBase,
}

/// An element describing an entity of the composed asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub base: ElementBase,
    pub statements: Option<Vec<SubmodelElement>>,
    pub entity_type: EntityType,
    pub global_asset_id: Option<String>,
    pub specific_asset_ids: Option<Vec<SpecificAssetId>>,
}

/// One typed argument slot of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationVariable {
    pub value: SubmodelElement,
}

/// An invokable element with input, output and inout argument lists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Operation {
    pub base: ElementBase,
    pub input_variables: Option<Vec<OperationVariable>>,
    pub output_variables: Option<Vec<OperationVariable>>,
    pub inoutput_variables: Option<Vec<OperationVariable>>,
}

/// A basic event element observing a referable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicEventElement {
    pub base: ElementBase,
    pub observed: Reference,
    pub direction: Direction,
    pub state: StateOfEvent,
    pub message_topic: Option<String>,
    pub message_broker: Option<Reference>,
    pub last_update: Option<String>,
    pub min_interval: Option<String>,
    pub max_interval: Option<String>,
}

/// A grouping of named child elements.
///
/// The metamodel treats the grouping as unordered; the codec still
/// records and restores the order the caller supplied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmodelElementCollection {
    pub base: ElementBase,
    pub value: Option<Vec<SubmodelElement>>,
}

/// An ordered list of homogeneous child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmodelElementList {
    pub base: ElementBase,
    pub order_relevant: Option<bool>,
    pub semantic_id_list_element: Option<Reference>,
    pub type_value_list_element: AasSubmodelElements,
    pub value_type_list_element: Option<DataTypeDefXsd>,
    pub value: Option<Vec<SubmodelElement>>,
}

/// A concrete submodel element of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmodelElement {
    AnnotatedRelationshipElement(AnnotatedRelationshipElement),
    BasicEventElement(BasicEventElement),
    Blob(Blob),
    Capability(Capability),
    Entity(Entity),
    File(File),
    MultiLanguageProperty(MultiLanguageProperty),
    Operation(Operation),
    Property(Property),
    Range(Range),
    ReferenceElement(ReferenceElement),
    RelationshipElement(RelationshipElement),
    SubmodelElementCollection(SubmodelElementCollection),
    SubmodelElementList(SubmodelElementList),
}

impl SubmodelElement {
    /// The discriminator tag of this element.
    pub fn kind(&self) -> ElementKind {
        match self {
            SubmodelElement::AnnotatedRelationshipElement(_) => {
                ElementKind::AnnotatedRelationshipElement
            }
            SubmodelElement::BasicEventElement(_) => ElementKind::BasicEventElement,
            SubmodelElement::Blob(_) => ElementKind::Blob,
            SubmodelElement::Capability(_) => ElementKind::Capability,
            SubmodelElement::Entity(_) => ElementKind::Entity,
            SubmodelElement::File(_) => ElementKind::File,
            SubmodelElement::MultiLanguageProperty(_) => ElementKind::MultiLanguageProperty,
            SubmodelElement::Operation(_) => ElementKind::Operation,
            SubmodelElement::Property(_) => ElementKind::Property,
            SubmodelElement::Range(_) => ElementKind::Range,
            SubmodelElement::ReferenceElement(_) => ElementKind::ReferenceElement,
            SubmodelElement::RelationshipElement(_) => ElementKind::RelationshipElement,
            SubmodelElement::SubmodelElementCollection(_) => {
                ElementKind::SubmodelElementCollection
            }
            SubmodelElement::SubmodelElementList(_) => ElementKind::SubmodelElementList,
        }
    }

    /// The shared field head of this element.
    pub fn base(&self) -> &ElementBase {
        match self {
            SubmodelElement::AnnotatedRelationshipElement(e) => &e.base,
            SubmodelElement::BasicEventElement(e) => &e.base,
            SubmodelElement::Blob(e) => &e.base,
            SubmodelElement::Capability(e) => &e.base,
            SubmodelElement::Entity(e) => &e.base,
            SubmodelElement::File(e) => &e.base,
            SubmodelElement::MultiLanguageProperty(e) => &e.base,
            SubmodelElement::Operation(e) => &e.base,
            SubmodelElement::Property(e) => &e.base,
            SubmodelElement::Range(e) => &e.base,
            SubmodelElement::ReferenceElement(e) => &e.base,
            SubmodelElement::RelationshipElement(e) => &e.base,
            SubmodelElement::SubmodelElementCollection(e) => &e.base,
            SubmodelElement::SubmodelElementList(e) => &e.base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminator_round_trip() {
        for kind in [
            ElementKind::Property,
            ElementKind::Capability,
            ElementKind::SubmodelElementList,
            ElementKind::AnnotatedRelationshipElement,
        ] {
            assert_eq!(ElementKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ElementKind::parse("Widget"), None);
    }

    #[test]
    fn test_element_reports_its_kind() {
        let element = SubmodelElement::Property(Property::new(DataTypeDefXsd::Int));
        assert_eq!(element.kind(), ElementKind::Property);
        assert!(element.base().referable.id_short.is_none());
    }
}
