//! Encode a submodel to triples, print the graph, decode it back.

use aas_rdf::model::{
    DataTypeDefXsd, LangString, MultiLanguageProperty, Property, Referable, Submodel,
    SubmodelElement, SubmodelElementCollection,
};
use aas_rdf::{Term, decode_submodel, encode_submodel};

fn main() {
    let mut submodel = Submodel::new("https://example.com/ids/sm/2543_5072_7091_2660");
    submodel.referable = Referable {
        id_short: Some("Nameplate".to_string()),
        display_name: Some(vec![
            LangString::new("en", "Nameplate"),
            LangString::new("de", "Typenschild"),
        ]),
        ..Referable::default()
    };

    let mut manufacturer = Property::new(DataTypeDefXsd::String);
    manufacturer.base.referable.id_short = Some("ManufacturerName".to_string());
    manufacturer.value = Some("ACME Motors".to_string());

    let mut designation = MultiLanguageProperty::default();
    designation.base.referable.id_short = Some("ProductDesignation".to_string());
    designation.value = Some(vec![
        LangString::new("en", "Asynchronous motor"),
        LangString::new("de", "Asynchronmotor"),
    ]);

    let mut markings = SubmodelElementCollection::default();
    markings.base.referable.id_short = Some("Markings".to_string());
    markings.value = Some(vec![SubmodelElement::Property({
        let mut ce = Property::new(DataTypeDefXsd::Boolean);
        ce.base.referable.id_short = Some("CE".to_string());
        ce.value = Some("true".to_string());
        ce
    })]);

    submodel.submodel_elements = Some(vec![
        SubmodelElement::Property(manufacturer),
        SubmodelElement::MultiLanguageProperty(designation),
        SubmodelElement::SubmodelElementCollection(markings),
    ]);

    let (graph, node) = encode_submodel(&submodel, None, "https://graph.example/nodes/")
        .expect("encoding failed");

    println!("Root node: {node}");
    println!("Triples: {}", graph.len());
    println!("\nFirst 15 triples:");
    for triple in graph.iter().take(15) {
        match &triple.object {
            Term::Node(n) => println!("  {} {} {}", triple.subject, triple.predicate, n),
            Term::Literal(l) => {
                println!("  {} {} {:?}", triple.subject, triple.predicate, l.lexical)
            }
        }
    }

    let decoded = decode_submodel(&graph, &node).expect("decoding failed");
    assert_eq!(decoded, submodel);
    println!("\nRound trip OK: {} elements restored in order", decoded
        .submodel_elements
        .as_deref()
        .map(|e| e.len())
        .unwrap_or(0));
}
