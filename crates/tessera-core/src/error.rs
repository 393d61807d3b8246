//! Error types for the TESSERA protocol

use thiserror::Error;

use crate::NodeId;

/// Core TESSERA errors
#[derive(Error, Debug)]
pub enum TesseraError {
    // Load errors
    #[error("malformed record at line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },

    #[error("duplicate node id {0}")]
    DuplicateId(NodeId),

    // Consistency errors
    #[error("deferred peer {peer} of node {requester} does not resolve to a live node")]
    BrokenReference { requester: NodeId, peer: NodeId },

    #[error("node index {index} out of bounds for registry of {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("node {0} cannot grant to or defer itself")]
    SelfReference(NodeId),

    // Source errors
    #[error("record source error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for TESSERA operations
pub type TesseraResult<T> = Result<T, TesseraError>;
