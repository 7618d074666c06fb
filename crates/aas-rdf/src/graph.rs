//! In-memory triple store used as the codec's target representation.
//!
//! The graph is a *set* of (subject, predicate, object) facts: duplicate
//! inserts collapse and nothing about storage order is observable through
//! the codec — list order rides on explicit index triples instead. The
//! store does keep insertion order for iteration, which is what makes the
//! documented first-match policy for malformed singular fields
//! deterministic.

use std::fmt;

use rustc_hash::FxHashMap;

/// A graph node address: either a full IRI or a blank (anonymous) node
/// label.
///
/// Named nodes are minted deterministically from a global identifier (see
/// [`crate::iri`]); blank nodes are fresh per encode call and never
/// reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeId {
    /// A named node addressed by IRI.
    Iri(String),
    /// An anonymous node addressed by a per-process-unique label.
    Blank(String),
}

impl NodeId {
    /// Creates a named node.
    pub fn iri(value: impl Into<String>) -> Self {
        NodeId::Iri(value.into())
    }

    /// Creates a blank node with the given label.
    pub fn blank(label: impl Into<String>) -> Self {
        NodeId::Blank(label.into())
    }

    /// The raw IRI or blank label.
    pub fn as_str(&self) -> &str {
        match self {
            NodeId::Iri(s) | NodeId::Blank(s) => s,
        }
    }

    /// Returns true for anonymous nodes.
    pub fn is_blank(&self) -> bool {
        matches!(self, NodeId::Blank(_))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Iri(s) => write!(f, "<{s}>"),
            NodeId::Blank(s) => write!(f, "_:{s}"),
        }
    }
}

/// Datatypes the codec attaches to literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    String,
    Integer,
    Boolean,
    DateTime,
    Duration,
    Base64Binary,
}

/// A typed literal: lexical form plus datatype.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    pub lexical: String,
    pub kind: LiteralKind,
}

impl Literal {
    /// Creates a literal with an explicit datatype.
    pub fn new(lexical: impl Into<String>, kind: LiteralKind) -> Self {
        Literal {
            lexical: lexical.into(),
            kind,
        }
    }

    /// Creates a plain string literal.
    pub fn string(lexical: impl Into<String>) -> Self {
        Literal::new(lexical, LiteralKind::String)
    }

    /// Creates an integer literal.
    pub fn integer(value: u64) -> Self {
        Literal::new(value.to_string(), LiteralKind::Integer)
    }

    /// Creates a boolean literal.
    pub fn boolean(value: bool) -> Self {
        Literal::new(if value { "true" } else { "false" }, LiteralKind::Boolean)
    }

    /// Creates an xs:dateTime literal from its lexical form.
    pub fn date_time(lexical: impl Into<String>) -> Self {
        Literal::new(lexical, LiteralKind::DateTime)
    }

    /// Creates an xs:duration literal from its lexical form.
    pub fn duration(lexical: impl Into<String>) -> Self {
        Literal::new(lexical, LiteralKind::Duration)
    }

    /// Parses the lexical form as an unsigned integer.
    ///
    /// Parsing is kind-agnostic: a third-party producer may have typed an
    /// index differently, and the lexical form is what carries meaning.
    pub fn as_integer(&self) -> Option<u64> {
        self.lexical.parse().ok()
    }

    /// Parses the lexical form as a boolean (`true`/`false`/`1`/`0`).
    pub fn as_boolean(&self) -> Option<bool> {
        match self.lexical.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }
}

/// The object position of a triple: another node, or a typed literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Node(NodeId),
    Literal(Literal),
}

impl Term {
    /// The node, if this term is one.
    pub fn node(&self) -> Option<&NodeId> {
        match self {
            Term::Node(n) => Some(n),
            Term::Literal(_) => None,
        }
    }

    /// The literal, if this term is one.
    pub fn literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(l) => Some(l),
            Term::Node(_) => None,
        }
    }
}

impl From<NodeId> for Term {
    fn from(node: NodeId) -> Self {
        Term::Node(node)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

/// One (subject, predicate, object) fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: NodeId,
    pub predicate: NodeId,
    pub object: Term,
}

/// A set of triples with a (subject, predicate) lookup index.
///
/// This is the smallest storage shape the codec needs: insert, and
/// enumerate objects by subject and predicate. Encoders only insert;
/// decoders only look up.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    index: FxHashMap<NodeId, FxHashMap<NodeId, Vec<usize>>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct triples.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true when no triples have been inserted.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Inserts a triple. Duplicates collapse; returns whether the triple
    /// was newly added.
    pub fn insert(&mut self, triple: Triple) -> bool {
        let slots = self
            .index
            .entry(triple.subject.clone())
            .or_default()
            .entry(triple.predicate.clone())
            .or_default();
        if slots.iter().any(|&i| self.triples[i].object == triple.object) {
            return false;
        }
        slots.push(self.triples.len());
        self.triples.push(triple);
        true
    }

    /// Convenience insert from parts.
    pub fn add(&mut self, subject: NodeId, predicate: NodeId, object: impl Into<Term>) {
        self.insert(Triple {
            subject,
            predicate,
            object: object.into(),
        });
    }

    /// All objects of (subject, predicate), in insertion order.
    pub fn objects<'a>(
        &'a self,
        subject: &NodeId,
        predicate: &NodeId,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.index
            .get(subject)
            .and_then(|by_predicate| by_predicate.get(predicate))
            .into_iter()
            .flatten()
            .map(|&i| &self.triples[i].object)
    }

    /// First object of (subject, predicate), in insertion order.
    ///
    /// This is the decoder's documented policy for singular fields that a
    /// malformed producer emitted more than once: the earliest inserted
    /// triple wins, deterministically.
    pub fn first_object(&self, subject: &NodeId, predicate: &NodeId) -> Option<&Term> {
        self.objects(subject, predicate).next()
    }

    /// All triples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iri(s: &str) -> NodeId {
        NodeId::iri(s)
    }

    #[test]
    fn test_duplicate_triples_collapse() {
        let mut graph = Graph::new();
        assert!(graph.insert(Triple {
            subject: iri("s"),
            predicate: iri("p"),
            object: Term::Literal(Literal::string("v")),
        }));
        assert!(!graph.insert(Triple {
            subject: iri("s"),
            predicate: iri("p"),
            object: Term::Literal(Literal::string("v")),
        }));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_objects_keep_insertion_order() {
        let mut graph = Graph::new();
        graph.add(iri("s"), iri("p"), Literal::string("a"));
        graph.add(iri("s"), iri("p"), Literal::string("b"));
        graph.add(iri("s"), iri("q"), Literal::string("c"));

        let values: Vec<&str> = graph
            .objects(&iri("s"), &iri("p"))
            .filter_map(|t| t.literal())
            .map(|l| l.lexical.as_str())
            .collect();
        assert_eq!(values, ["a", "b"]);
    }

    #[test]
    fn test_first_object_is_earliest_inserted() {
        let mut graph = Graph::new();
        graph.add(iri("s"), iri("p"), Literal::string("first"));
        graph.add(iri("s"), iri("p"), Literal::string("second"));

        let first = graph.first_object(&iri("s"), &iri("p")).unwrap();
        assert_eq!(first.literal().unwrap().lexical, "first");
    }

    #[test]
    fn test_missing_lookup_is_empty() {
        let graph = Graph::new();
        assert!(graph.first_object(&iri("s"), &iri("p")).is_none());
        assert_eq!(graph.objects(&iri("s"), &iri("p")).count(), 0);
    }

    #[test]
    fn test_blank_and_iri_do_not_collide() {
        let mut graph = Graph::new();
        graph.add(NodeId::iri("x"), iri("p"), Literal::string("a"));
        graph.add(NodeId::blank("x"), iri("p"), Literal::string("b"));

        assert_eq!(graph.objects(&NodeId::iri("x"), &iri("p")).count(), 1);
        assert_eq!(graph.objects(&NodeId::blank("x"), &iri("p")).count(), 1);
    }

    #[test]
    fn test_literal_accessors() {
        assert_eq!(Literal::integer(7).as_integer(), Some(7));
        assert_eq!(Literal::boolean(true).as_boolean(), Some(true));
        assert_eq!(Literal::string("x").as_integer(), None);
        assert_eq!(Literal::string("maybe").as_boolean(), None);
    }

    #[test]
    fn test_node_display() {
        assert_eq!(NodeId::iri("http://a/b").to_string(), "<http://a/b>");
        assert_eq!(NodeId::blank("n1").to_string(), "_:n1");
    }
}
