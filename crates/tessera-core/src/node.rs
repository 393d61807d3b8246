//! Per-node protocol state
//!
//! A node carries its fixed request stamp plus the two mutable pieces of
//! protocol state: the set of peers from which a permission is recorded and
//! the ordered list of peers whose requests it has postponed. Only the
//! arbiter mutates either, one decision at a time.

use std::collections::BTreeSet;

use crate::{NodeId, RequestStamp, TesseraError, TesseraResult, Timestamp};

/// One participant in the mutual-exclusion protocol
#[derive(Clone, Debug)]
pub struct Node {
    /// Fixed request identity
    stamp: RequestStamp,
    /// Peers from which a permission is currently recorded
    granted_from: BTreeSet<NodeId>,
    /// Peers whose requests were postponed, in deferral order
    deferred: Vec<NodeId>,
}

impl Node {
    /// Create a node with empty permission and deferral state
    pub fn new(id: NodeId, timestamp: Timestamp) -> Self {
        Node {
            stamp: RequestStamp::new(id, timestamp),
            granted_from: BTreeSet::new(),
            deferred: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.stamp.node
    }

    #[inline]
    pub fn timestamp(&self) -> Timestamp {
        self.stamp.timestamp
    }

    #[inline]
    pub fn stamp(&self) -> RequestStamp {
        self.stamp
    }

    /// Record a permission received from `from`
    ///
    /// Idempotent; a node never holds a permission from itself.
    pub fn record_permission(&mut self, from: NodeId) -> TesseraResult<()> {
        if from == self.id() {
            return Err(TesseraError::SelfReference(from));
        }
        self.granted_from.insert(from);
        Ok(())
    }

    /// Postpone the response to `peer`, preserving deferral order
    pub fn defer(&mut self, peer: NodeId) -> TesseraResult<()> {
        if peer == self.id() {
            return Err(TesseraError::SelfReference(peer));
        }
        self.deferred.push(peer);
        Ok(())
    }

    pub fn holds_permission_from(&self, peer: NodeId) -> bool {
        self.granted_from.contains(&peer)
    }

    /// Recorded permissions, in id order
    pub fn permissions(&self) -> &BTreeSet<NodeId> {
        &self.granted_from
    }

    /// Postponed peers, in deferral order
    pub fn deferred(&self) -> &[NodeId] {
        &self.deferred
    }

    /// Entry eligibility: a permission is recorded from every other id
    ///
    /// `all_ids` is the full registry membership; this node's own id is
    /// skipped, so a lone node is trivially eligible.
    pub fn can_enter<I>(&self, all_ids: I) -> bool
    where
        I: IntoIterator<Item = NodeId>,
    {
        all_ids
            .into_iter()
            .all(|id| id == self.id() || self.granted_from.contains(&id))
    }

    /// Take the deferred list, leaving it empty
    pub fn drain_deferred(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.deferred)
    }
}
