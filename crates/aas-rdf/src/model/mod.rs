//! Typed object records for the Asset Administration Shell metamodel.
//!
//! This module is pure data: construction, equality, and closed-set enum
//! parsing. All graph I/O lives in [`crate::codec`]. Records are built by
//! the caller (or by decode) and are never mutated by the codec.

pub mod common;
pub mod element;
pub mod reference;
pub mod submodel;

pub use common::{
    AdministrativeInformation, DataTypeDefXsd, Extension, LangString, ModellingKind, Qualifier,
    QualifierKind, Referable, SpecificAssetId,
};
pub use element::{
    AasSubmodelElements, AnnotatedRelationshipElement, BasicEventElement, Blob, Capability,
    Direction, ElementBase, ElementKind, Entity, EntityType, File, MultiLanguageProperty,
    Operation, OperationVariable, Property, Range, ReferenceElement, RelationshipElement,
    StateOfEvent, SubmodelElement, SubmodelElementCollection, SubmodelElementList,
};
pub use reference::{Key, KeyTypes, Reference, ReferenceTypes};
pub use submodel::{ConceptDescription, Submodel};

/// A closed enumeration carried in the graph as a self-describing address
/// fragment under its own namespace segment (`<ns><NAME>/<value>`).
///
/// `parse` is strict: anything outside the closed set is rejected, never
/// defaulted.
pub trait NamedEnum: Sized + Copy {
    /// Namespace segment the fragments live under.
    const NAME: &'static str;

    /// The fragment text for this value.
    fn as_str(self) -> &'static str;

    /// Parses a fragment back into the closed set.
    fn parse(value: &str) -> Option<Self>;
}
