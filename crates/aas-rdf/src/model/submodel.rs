//! Identifiable roots: submodels and concept descriptions.

use crate::model::common::{AdministrativeInformation, ModellingKind, Qualifier, Referable};
use crate::model::element::SubmodelElement;
use crate::model::reference::Reference;

/// A submodel: an identifiable container of submodel elements.
///
/// `id` is the global identifier the named node address is derived from;
/// it is also stored verbatim in the graph, so decode recovers it without
/// reversing the address encoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Submodel {
    pub referable: Referable,
    pub id: String,
    pub administration: Option<AdministrativeInformation>,
    pub kind: Option<ModellingKind>,
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Option<Vec<Reference>>,
    pub qualifiers: Option<Vec<Qualifier>>,
    pub submodel_elements: Option<Vec<SubmodelElement>>,
}

impl Submodel {
    pub fn new(id: impl Into<String>) -> Self {
        Submodel {
            id: id.into(),
            ..Submodel::default()
        }
    }
}

/// An identifiable description of a concept, optionally marked as a case
/// of other definitions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConceptDescription {
    pub referable: Referable,
    pub id: String,
    pub administration: Option<AdministrativeInformation>,
    pub is_case_of: Option<Vec<Reference>>,
}

impl ConceptDescription {
    pub fn new(id: impl Into<String>) -> Self {
        ConceptDescription {
            id: id.into(),
            ..ConceptDescription::default()
        }
    }
}
