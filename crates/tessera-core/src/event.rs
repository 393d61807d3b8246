//! Protocol events and the event sink seam
//!
//! Every observable decision of the arbiter is reported as a discrete
//! event: the start of a requester round, each grant or deferral, the entry
//! into the critical section, and each permission released from a deferred
//! list. Rendering is a downstream concern; a sink may narrate, record, or
//! discard.

use crate::{NodeId, Timestamp};

/// A discrete, observable protocol decision
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProtocolEvent {
    /// A node opened its request round
    RequestStarted {
        requester: NodeId,
        timestamp: Timestamp,
    },
    /// A permission was recorded during the requester's peer pass
    GrantRecorded { requester: NodeId, peer: NodeId },
    /// The requester postponed its response to a peer
    DeferredRecorded { requester: NodeId, peer: NodeId },
    /// The requester collected every permission and entered
    EnteredCriticalSection { requester: NodeId },
    /// A postponed permission was released after entry
    DeferredGrantFlushed { requester: NodeId, peer: NodeId },
}

impl ProtocolEvent {
    /// The requesting node the event belongs to
    pub fn requester(&self) -> NodeId {
        match *self {
            ProtocolEvent::RequestStarted { requester, .. }
            | ProtocolEvent::GrantRecorded { requester, .. }
            | ProtocolEvent::DeferredRecorded { requester, .. }
            | ProtocolEvent::EnteredCriticalSection { requester }
            | ProtocolEvent::DeferredGrantFlushed { requester, .. } => requester,
        }
    }

    /// The peer side of the event, when one exists
    pub fn peer(&self) -> Option<NodeId> {
        match *self {
            ProtocolEvent::GrantRecorded { peer, .. }
            | ProtocolEvent::DeferredRecorded { peer, .. }
            | ProtocolEvent::DeferredGrantFlushed { peer, .. } => Some(peer),
            ProtocolEvent::RequestStarted { .. }
            | ProtocolEvent::EnteredCriticalSection { .. } => None,
        }
    }
}

/// Consumer of protocol events
pub trait EventSink {
    fn emit(&mut self, event: &ProtocolEvent);

    /// Called once after each requester round, entered or not
    fn round_complete(&mut self, _requester: NodeId) {}
}

/// Sink that keeps every event, for tests and tooling
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<ProtocolEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink::default()
    }

    /// Events of one requester, in emission order
    pub fn events_for(&self, requester: NodeId) -> Vec<ProtocolEvent> {
        self.events
            .iter()
            .copied()
            .filter(|e| e.requester() == requester)
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &ProtocolEvent) {
        self.events.push(*event);
    }
}

/// Sink that discards everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &ProtocolEvent) {}
}
