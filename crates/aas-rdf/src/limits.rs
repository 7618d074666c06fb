//! Decode guards for untrusted graphs.
//!
//! The reference chain (`referredSemanticId`) is the only depth-unbounded
//! path in the model, so it is the only place a guard is needed. The
//! ancestor-set check in the reference decoder already rejects true
//! cycles; the depth cap additionally bounds pathological acyclic chains.

/// Maximum `referredSemanticId` nesting the decoder will follow.
pub const MAX_REFERENCE_DEPTH: usize = 128;
