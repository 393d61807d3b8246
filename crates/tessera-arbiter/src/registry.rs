//! Node registry
//!
//! The registry owns the ordered node collection. Load order is
//! authoritative: it is both the membership for eligibility checks and the
//! processing order for requester rounds. Deferred peer references resolve
//! by node id through the id map, never by position.

use std::collections::HashMap;

use tessera_core::{Node, NodeId, TesseraError, TesseraResult, Timestamp};

/// Ordered collection of participants
#[derive(Clone, Debug, Default)]
pub struct Registry {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Build a registry from ordered (id, timestamp) records
    ///
    /// One node per record, in input order, with empty permission and
    /// deferral state. A repeated id is rejected.
    pub fn load<I>(records: I) -> TesseraResult<Self>
    where
        I: IntoIterator<Item = (NodeId, Timestamp)>,
    {
        let mut registry = Registry::new();
        for (id, timestamp) in records {
            registry.insert(Node::new(id, timestamp))?;
        }
        Ok(registry)
    }

    fn insert(&mut self, node: Node) -> TesseraResult<()> {
        if self.index.contains_key(&node.id()) {
            return Err(TesseraError::DuplicateId(node.id()));
        }
        self.index.insert(node.id(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    /// Nodes in load order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Bounds-checked positional lookup
    pub fn node_at(&self, index: usize) -> TesseraResult<&Node> {
        self.nodes.get(index).ok_or(TesseraError::IndexOutOfBounds {
            index,
            len: self.nodes.len(),
        })
    }

    /// Id-keyed lookup
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    /// Load-order position of a member id
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Member ids in load order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|n| n.id())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn node_mut(&mut self, index: usize) -> &mut Node {
        &mut self.nodes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn records(pairs: &[(u64, i64)]) -> Vec<(NodeId, Timestamp)> {
        pairs
            .iter()
            .map(|&(id, ts)| (NodeId::new(id), Timestamp::new(ts)))
            .collect()
    }

    #[test]
    fn test_load_preserves_input_order() {
        let registry = Registry::load(records(&[(3, 9), (1, 5), (2, 7)])).unwrap();
        let ids: Vec<NodeId> = registry.ids().collect();
        assert_eq!(ids, vec![NodeId::new(3), NodeId::new(1), NodeId::new(2)]);
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let err = Registry::load(records(&[(1, 5), (1, 9)])).unwrap_err();
        assert!(matches!(err, TesseraError::DuplicateId(id) if id == NodeId::new(1)));
    }

    #[test]
    fn test_lookup_by_sparse_ids() {
        // Ids are not a dense zero-based range; resolution must not assume
        // they index the collection.
        let registry = Registry::load(records(&[(10, 1), (700, 2), (42, 3)])).unwrap();
        assert_eq!(registry.index_of(NodeId::new(700)), Some(1));
        assert_eq!(
            registry.get(NodeId::new(42)).map(|n| n.timestamp()),
            Some(Timestamp::new(3))
        );
        assert_eq!(registry.get(NodeId::new(2)).map(|n| n.id()), None);
    }

    #[test]
    fn test_node_at_is_bounds_checked() {
        let registry = Registry::load(records(&[(1, 5)])).unwrap();
        assert!(registry.node_at(0).is_ok());
        assert!(matches!(
            registry.node_at(1),
            Err(TesseraError::IndexOutOfBounds { index: 1, len: 1 })
        ));
    }

    #[test]
    fn test_load_is_idempotent() {
        let input = records(&[(2, 5), (1, 5), (9, -3)]);
        let first = Registry::load(input.clone()).unwrap();
        let second = Registry::load(input).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.nodes().iter().zip(second.nodes()) {
            assert_eq!(a.id(), b.id());
            assert_eq!(a.timestamp(), b.timestamp());
            assert!(a.permissions().is_empty() && b.permissions().is_empty());
            assert!(a.deferred().is_empty() && b.deferred().is_empty());
        }
    }

    proptest! {
        #[test]
        fn prop_load_keeps_every_unique_record(ids in prop::collection::hash_set(1u64..512, 0..16)) {
            let input: Vec<(NodeId, Timestamp)> = ids
                .iter()
                .map(|&id| (NodeId::new(id), Timestamp::new(id as i64)))
                .collect();
            let registry = Registry::load(input.clone()).unwrap();

            prop_assert_eq!(registry.len(), input.len());
            for (position, (id, ts)) in input.into_iter().enumerate() {
                prop_assert_eq!(registry.index_of(id), Some(position));
                prop_assert_eq!(registry.get(id).map(|n| n.timestamp()), Some(ts));
            }
        }
    }
}
