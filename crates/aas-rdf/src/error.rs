//! Error types for graph encoding and decoding.

use thiserror::Error;

/// Error while encoding a record into the graph.
///
/// The only failure the encode path itself can produce is a bad global
/// identifier; everything else an encoder emits is infallible triple
/// insertion. A failure leaves a caller-supplied graph partially
/// extended — callers that need atomicity should encode into a throwaway
/// graph and merge on success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The global identifier of a named node is unusable.
    #[error("invalid identifier: {reason}")]
    InvalidIdentifier { reason: &'static str },
}

/// Error while reconstructing a record from the graph.
///
/// Decode failures abort the reconstruction of the node they occur under;
/// no partially populated record is ever returned. The graph is never
/// mutated by decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// An enumerated fragment or literal is outside its closed value set.
    #[error("unknown {enum_name} value {value:?}")]
    UnknownEnumValue {
        enum_name: &'static str,
        value: String,
    },

    /// A sequence child carries no order index triple.
    #[error("child {child} under {predicate} carries no order index")]
    MissingOrderIndex { child: String, predicate: String },

    /// The discriminator literal names a kind outside the closed set.
    #[error("unsupported element kind {kind:?}")]
    UnsupportedElementKind { kind: String },

    /// A reference chain links back to one of its own ancestors.
    #[error("reference at {node} links back to an ancestor reference")]
    CyclicReference { node: String },

    /// A reference chain nests deeper than the decode guard allows.
    #[error("reference chain deeper than {max} levels")]
    ReferenceDepthExceeded { max: usize },

    /// Catch-all for structurally impossible states, e.g. a mandatory
    /// field with no triple or a literal where a node is required.
    #[error("malformed graph: {context}")]
    MalformedGraph { context: String },
}

impl DecodeError {
    pub(crate) fn malformed(context: impl Into<String>) -> Self {
        DecodeError::MalformedGraph {
            context: context.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = DecodeError::UnknownEnumValue {
            enum_name: "ReferenceTypes",
            value: "Bogus".to_string(),
        };
        assert!(err.to_string().contains("ReferenceTypes"));
        assert!(err.to_string().contains("Bogus"));

        let err = DecodeError::malformed("missing Identifiable/id");
        assert!(err.to_string().contains("missing Identifiable/id"));
    }
}
