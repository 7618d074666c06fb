//! Process-wide vocabulary: predicate and type-marker addresses.
//!
//! Every address follows the fixed textual pattern
//! `<namespace><TypeName>/<fieldName>` (predicates),
//! `<namespace><TypeName>` (type markers) and
//! `<namespace><EnumName>/<value>` (enumerated fragments). This pattern
//! is the wire contract third-party producers and consumers must match;
//! any deviation breaks round-tripping against their graphs.
//!
//! The tables are built once at first use and never mutated, so they are
//! safe for unsynchronized concurrent reads.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::graph::NodeId;

/// Namespace every vocabulary address lives under.
pub const AAS_NS: &str = "https://admin-shell.io/aas/3/0/";

/// The rdf:type predicate carrying type markers.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// Every (declaring type, field) pair the codec maps. Fields are always
/// addressed under the type that declares them, so shared fields keep one
/// predicate across all concrete kinds.
const FIELDS: &[(&str, &[&str])] = &[
    ("HasExtensions", &["extensions"]),
    ("Referable", &["category", "idShort", "displayName", "description"]),
    ("Identifiable", &["id", "administration"]),
    ("HasSemantics", &["semanticId", "supplementalSemanticIds"]),
    ("Qualifiable", &["qualifiers"]),
    ("HasKind", &["kind"]),
    ("AbstractLangString", &["language", "text"]),
    ("Extension", &["name", "valueType", "value", "refersTo"]),
    ("Qualifier", &["kind", "type", "valueType", "value", "valueId"]),
    ("AdministrativeInformation", &["version", "revision", "creator", "templateId"]),
    ("SpecificAssetId", &["name", "value", "externalSubjectId"]),
    ("Key", &["type", "value"]),
    ("Reference", &["type", "keys", "referredSemanticId"]),
    ("SubmodelElement", &["modelType"]),
    ("Property", &["valueType", "value", "valueId"]),
    ("MultiLanguageProperty", &["value", "valueId"]),
    ("Range", &["valueType", "min", "max"]),
    ("Blob", &["contentType", "value"]),
    ("File", &["contentType", "value"]),
    ("ReferenceElement", &["value"]),
    ("RelationshipElement", &["first", "second"]),
    ("AnnotatedRelationshipElement", &["annotations"]),
    ("Entity", &["statements", "entityType", "globalAssetId", "specificAssetIds"]),
    ("Operation", &["inputVariables", "outputVariables", "inoutputVariables"]),
    ("OperationVariable", &["value"]),
    (
        "BasicEventElement",
        &[
            "observed",
            "direction",
            "state",
            "messageTopic",
            "messageBroker",
            "lastUpdate",
            "minInterval",
            "maxInterval",
        ],
    ),
    ("SubmodelElementCollection", &["value"]),
    (
        "SubmodelElementList",
        &[
            "orderRelevant",
            "semanticIdListElement",
            "typeValueListElement",
            "valueTypeListElement",
            "value",
        ],
    ),
    ("Submodel", &["submodelElements"]),
    ("ConceptDescription", &["isCaseOf"]),
];

/// Every type the codec marks with rdf:type.
const TYPES: &[&str] = &[
    "Reference",
    "Key",
    "LangStringNameType",
    "LangStringTextType",
    "Extension",
    "Qualifier",
    "AdministrativeInformation",
    "SpecificAssetId",
    "OperationVariable",
    "SubmodelElement",
    "Property",
    "MultiLanguageProperty",
    "Range",
    "Blob",
    "File",
    "ReferenceElement",
    "RelationshipElement",
    "AnnotatedRelationshipElement",
    "Capability",
    "Entity",
    "Operation",
    "BasicEventElement",
    "SubmodelElementCollection",
    "SubmodelElementList",
    "Submodel",
    "ConceptDescription",
];

lazy_static! {
    static ref PREDICATES: FxHashMap<(&'static str, &'static str), NodeId> = {
        let mut map = FxHashMap::default();
        for (type_name, fields) in FIELDS {
            for field in *fields {
                map.insert(
                    (*type_name, *field),
                    NodeId::iri(format!("{AAS_NS}{type_name}/{field}")),
                );
            }
        }
        map
    };
    static ref TYPE_MARKERS: FxHashMap<&'static str, NodeId> = TYPES
        .iter()
        .map(|t| (*t, NodeId::iri(format!("{AAS_NS}{t}"))))
        .collect();
    static ref INDEX: NodeId = NodeId::iri(format!("{AAS_NS}index"));
    static ref TYPE_PREDICATE: NodeId = NodeId::iri(RDF_TYPE);
}

/// Predicate address for a mapped field.
///
/// Panics when the pair is not in the table: the table must cover every
/// field of every supported type, so a miss is a programming error, not
/// a runtime condition.
pub fn predicate(type_name: &'static str, field: &'static str) -> NodeId {
    PREDICATES
        .get(&(type_name, field))
        .unwrap_or_else(|| panic!("no predicate mapped for {type_name}/{field}"))
        .clone()
}

/// Type-marker address for a supported type. Panics on unmapped types,
/// same contract as [`predicate`].
pub fn type_marker(type_name: &'static str) -> NodeId {
    TYPE_MARKERS
        .get(type_name)
        .unwrap_or_else(|| panic!("no type marker mapped for {type_name}"))
        .clone()
}

/// The structural predicate recording a sequence child's position.
pub fn index_predicate() -> NodeId {
    INDEX.clone()
}

/// The rdf:type predicate.
pub fn rdf_type() -> NodeId {
    TYPE_PREDICATE.clone()
}

/// Address fragment for an enumerated symbol: `<ns><EnumName>/<value>`.
pub fn enum_value(enum_name: &str, value: &str) -> NodeId {
    NodeId::iri(format!("{AAS_NS}{enum_name}/{value}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_follows_wire_pattern() {
        assert_eq!(
            predicate("Reference", "type").as_str(),
            "https://admin-shell.io/aas/3/0/Reference/type"
        );
        assert_eq!(
            predicate("Referable", "idShort").as_str(),
            "https://admin-shell.io/aas/3/0/Referable/idShort"
        );
    }

    #[test]
    fn test_type_marker_is_bare_type_address() {
        assert_eq!(
            type_marker("Submodel").as_str(),
            "https://admin-shell.io/aas/3/0/Submodel"
        );
    }

    #[test]
    fn test_enum_value_fragment() {
        assert_eq!(
            enum_value("ReferenceTypes", "ExternalReference").as_str(),
            "https://admin-shell.io/aas/3/0/ReferenceTypes/ExternalReference"
        );
    }

    #[test]
    fn test_index_predicate_is_structural() {
        assert_eq!(index_predicate().as_str(), "https://admin-shell.io/aas/3/0/index");
    }

    #[test]
    #[should_panic(expected = "no predicate mapped")]
    fn test_unmapped_field_is_a_programming_error() {
        predicate("Referable", "nonexistent");
    }
}
