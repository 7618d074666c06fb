//! Lossless RDF triple codec for the Asset Administration Shell v3
//! metamodel.
//!
//! This crate converts between typed AAS records (submodels, concept
//! descriptions, the closed family of submodel element kinds, and
//! recursive references) and an unordered set of
//! (subject, predicate, object) triples — and back, without losing the
//! structure the triple representation has no native notion of:
//!
//! - **List order**: every sequence child carries an explicit index
//!   triple; decode sorts by it, never by storage enumeration order.
//! - **Concrete kind**: each element node carries a discriminator
//!   literal next to its rdf:type markers; decode dispatches on it over
//!   the closed kind set.
//! - **Absent vs. empty**: an optional field that was never set emits no
//!   triples and decodes back to `None`, never to an empty collection.
//!
//! # Quick Start
//!
//! ```rust
//! use aas_rdf::model::{DataTypeDefXsd, Property, Submodel, SubmodelElement};
//! use aas_rdf::{decode_submodel, encode_submodel};
//!
//! let mut submodel = Submodel::new("https://example.com/ids/sm/2543");
//! submodel.referable.id_short = Some("TechnicalData".to_string());
//!
//! let mut rated_speed = Property::new(DataTypeDefXsd::Double);
//! rated_speed.value = Some("1450".to_string());
//! submodel.submodel_elements = Some(vec![SubmodelElement::Property(rated_speed)]);
//!
//! // Encode into a fresh graph; the root's address is derived from its id.
//! let (graph, node) = encode_submodel(&submodel, None, "https://graph.example/nodes/").unwrap();
//!
//! // Decode back and compare field for field.
//! let decoded = decode_submodel(&graph, &node).unwrap();
//! assert_eq!(decoded, submodel);
//! ```
//!
//! # Modules
//!
//! - [`model`]: the typed records (pure data, no graph I/O)
//! - [`codec`]: encode/decode between records and triples
//! - [`graph`]: the minimal in-memory triple store
//! - [`vocab`]: the fixed predicate/type-marker vocabulary (the wire
//!   contract)
//! - [`iri`]: named and anonymous node minting
//! - [`error`]: error types
//! - [`limits`]: decode guards for untrusted graphs
//!
//! # Trust model
//!
//! Encoders assume their input records were already validated (string
//! constraints, cardinalities) by the caller. Decoders assume nothing:
//! they tolerate absence, demand order indices, reject enum values and
//! element kinds outside their closed sets, and refuse cyclic reference
//! chains instead of recursing forever. A decode failure aborts that
//! record's reconstruction entirely — no partial records, and the graph
//! is never mutated by decoding.

pub mod codec;
pub mod error;
pub mod graph;
pub mod iri;
pub mod limits;
pub mod model;
pub mod vocab;

// Re-export the common entry points and types at crate root
pub use codec::{
    decode_concept_description, decode_element, decode_reference, decode_submodel,
    encode_concept_description, encode_element, encode_reference, encode_submodel,
};
pub use error::{DecodeError, EncodeError};
pub use graph::{Graph, Literal, LiteralKind, NodeId, Term, Triple};
pub use model::{
    ConceptDescription, ElementKind, Key, KeyTypes, LangString, Reference, ReferenceTypes,
    Submodel, SubmodelElement,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
