//! Identity and logical-time types for the TESSERA protocol
//!
//! Node ids are positive integers unique within a registry. Timestamps are
//! static logical clock values fixed at load time; they stand in for a
//! Lamport-clock request time and never change during a run.

use std::fmt;

/// Node identity within a registry
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NodeId(pub u64);

impl NodeId {
    #[inline]
    pub fn new(id: u64) -> Self {
        NodeId(id)
    }

    #[inline]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Logical request timestamp, fixed at load time
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(pub i64);

impl Timestamp {
    #[inline]
    pub fn new(value: i64) -> Self {
        Timestamp(value)
    }

    #[inline]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ts({})", self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node's request identity: the pair the priority comparison reads
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestStamp {
    pub node: NodeId,
    pub timestamp: Timestamp,
}

impl RequestStamp {
    #[inline]
    pub fn new(node: NodeId, timestamp: Timestamp) -> Self {
        RequestStamp { node, timestamp }
    }
}

impl fmt::Debug for RequestStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Request({} @ {})", self.node, self.timestamp)
    }
}
