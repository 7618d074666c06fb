//! References: typed key chains pointing at model elements or external
//! resources.

use crate::model::NamedEnum;

/// Whether a reference points into the model or at an external resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceTypes {
    ExternalReference,
    ModelReference,
}

impl NamedEnum for ReferenceTypes {
    const NAME: &'static str = "ReferenceTypes";

    fn as_str(self) -> &'static str {
        match self {
            ReferenceTypes::ExternalReference => "ExternalReference",
            ReferenceTypes::ModelReference => "ModelReference",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "ExternalReference" => Some(ReferenceTypes::ExternalReference),
            "ModelReference" => Some(ReferenceTypes::ModelReference),
            _ => None,
        }
    }
}

/// The kind of element a single key denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyTypes {
    AnnotatedRelationshipElement,
    AssetAdministrationShell,
    BasicEventElement,
    Blob,
    Capability,
    ConceptDescription,
    DataElement,
    Entity,
    EventElement,
    File,
    FragmentReference,
    GlobalReference,
    Identifiable,
    MultiLanguageProperty,
    Operation,
    Property,
    Range,
    Referable,
    ReferenceElement,
    RelationshipElement,
    Submodel,
    SubmodelElement,
    SubmodelElementCollection,
    SubmodelElementList,
}

impl NamedEnum for KeyTypes {
    const NAME: &'static str = "KeyTypes";

    fn as_str(self) -> &'static str {
        match self {
            KeyTypes::AnnotatedRelationshipElement => "AnnotatedRelationshipElement",
            KeyTypes::AssetAdministrationShell => "AssetAdministrationShell",
            KeyTypes::BasicEventElement => "BasicEventElement",
            KeyTypes::Blob => "Blob",
            KeyTypes::Capability => "Capability",
            KeyTypes::ConceptDescription => "ConceptDescription",
            KeyTypes::DataElement => "DataElement",
            KeyTypes::Entity => "Entity",
            KeyTypes::EventElement => "EventElement",
            KeyTypes::File => "File",
            KeyTypes::FragmentReference => "FragmentReference",
            KeyTypes::GlobalReference => "GlobalReference",
            KeyTypes::Identifiable => "Identifiable",
            KeyTypes::MultiLanguageProperty => "MultiLanguageProperty",
            KeyTypes::Operation => "Operation",
            KeyTypes::Property => "Property",
            KeyTypes::Range => "Range",
            KeyTypes::Referable => "Referable",
            KeyTypes::ReferenceElement => "ReferenceElement",
            KeyTypes::RelationshipElement => "RelationshipElement",
            KeyTypes::Submodel => "Submodel",
            KeyTypes::SubmodelElement => "SubmodelElement",
            KeyTypes::SubmodelElementCollection => "SubmodelElementCollection",
            KeyTypes::SubmodelElementList => "SubmodelElementList",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "AnnotatedRelationshipElement" => Some(KeyTypes::AnnotatedRelationshipElement),
            "AssetAdministrationShell" => Some(KeyTypes::AssetAdministrationShell),
            "BasicEventElement" => Some(KeyTypes::BasicEventElement),
            "Blob" => Some(KeyTypes::Blob),
            "Capability" => Some(KeyTypes::Capability),
            "ConceptDescription" => Some(KeyTypes::ConceptDescription),
            "DataElement" => Some(KeyTypes::DataElement),
            "Entity" => Some(KeyTypes::Entity),
            "EventElement" => Some(KeyTypes::EventElement),
            "File" => Some(KeyTypes::File),
            "FragmentReference" => Some(KeyTypes::FragmentReference),
            "GlobalReference" => Some(KeyTypes::GlobalReference),
            "Identifiable" => Some(KeyTypes::Identifiable),
            "MultiLanguageProperty" => Some(KeyTypes::MultiLanguageProperty),
            "Operation" => Some(KeyTypes::Operation),
            "Property" => Some(KeyTypes::Property),
            "Range" => Some(KeyTypes::Range),
            "Referable" => Some(KeyTypes::Referable),
            "ReferenceElement" => Some(KeyTypes::ReferenceElement),
            "RelationshipElement" => Some(KeyTypes::RelationshipElement),
            "Submodel" => Some(KeyTypes::Submodel),
            "SubmodelElement" => Some(KeyTypes::SubmodelElement),
            "SubmodelElementCollection" => Some(KeyTypes::SubmodelElementCollection),
            "SubmodelElementList" => Some(KeyTypes::SubmodelElementList),
            _ => None,
        }
    }
}

/// One (kind, value) step of a reference chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    pub kind: KeyTypes,
    pub value: String,
}

impl Key {
    pub fn new(kind: KeyTypes, value: impl Into<String>) -> Self {
        Key {
            kind,
            value: value.into(),
        }
    }
}

/// A reference to a model element or an external resource.
///
/// The one genuinely recursive record: `referred_semantic_id` may nest
/// another `Reference` to arbitrary depth. `keys` must hold at least one
/// entry for a valid reference; the constraint is enforced by the
/// validation layer, and decoding deliberately tolerates graphs that
/// violate it (callers re-validate after decode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub kind: ReferenceTypes,
    pub keys: Vec<Key>,
    pub referred_semantic_id: Option<Box<Reference>>,
}

impl Reference {
    /// An external reference with a single global key.
    pub fn external(value: impl Into<String>) -> Self {
        Reference {
            kind: ReferenceTypes::ExternalReference,
            keys: vec![Key::new(KeyTypes::GlobalReference, value)],
            referred_semantic_id: None,
        }
    }

    /// A model reference from an ordered key chain.
    pub fn model(keys: Vec<Key>) -> Self {
        Reference {
            kind: ReferenceTypes::ModelReference,
            keys,
            referred_semantic_id: None,
        }
    }

    /// Attaches a nested semantic id to this reference.
    pub fn with_referred(mut self, referred: Reference) -> Self {
        self.referred_semantic_id = Some(Box::new(referred));
        self
    }
}
