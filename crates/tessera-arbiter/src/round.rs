//! Requester round evaluation
//!
//! One round evaluates a single requesting node against every peer in
//! registry order, then checks entry eligibility and, on entry, releases
//! every postponed permission. Rounds are strictly sequential; the whole
//! peer pass completes before the eligibility check, which completes
//! before the next requester starts.
//!
//! A grant lands on the responding node's permission set; a flush lands on
//! the deferred peer's. Eligibility therefore reads permissions accumulated
//! across earlier rounds, not the current round's decisions.

use std::cmp::Ordering;

use tessera_core::{
    EventSink, NodeId, ProtocolEvent, RequestStamp, TesseraError, TesseraResult,
};

use crate::Registry;

/// Immediate outcome of the priority comparison for one peer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The peer records the permission at once
    Grant,
    /// The requester postpones its response to the peer
    Defer,
}

/// Grant-or-defer rule between a requester and one peer
///
/// A later request timestamp wins an immediate grant; ties fall to the
/// lower node id; an earlier timestamp postpones the peer. Decisions read
/// only the two static stamps.
pub fn decide(requester: RequestStamp, peer: RequestStamp) -> Decision {
    match requester.timestamp.cmp(&peer.timestamp) {
        Ordering::Greater => Decision::Grant,
        Ordering::Equal if requester.node < peer.node => Decision::Grant,
        Ordering::Equal | Ordering::Less => Decision::Defer,
    }
}

/// Counter summary of one requester round
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    pub requester: NodeId,
    pub entered: bool,
    pub grants: u32,
    pub deferrals: u32,
    pub flushed: u32,
}

/// Aggregate of a full serialized run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub rounds: Vec<RoundOutcome>,
    /// Ids that entered the critical section, in entry order
    pub entered: Vec<NodeId>,
}

/// Evaluate one requester round: peer pass, eligibility, deferred flush
pub fn run_round(
    registry: &mut Registry,
    requester_index: usize,
    sink: &mut dyn EventSink,
) -> TesseraResult<RoundOutcome> {
    let r_stamp = registry.node_at(requester_index)?.stamp();
    let r_id = r_stamp.node;

    sink.emit(&ProtocolEvent::RequestStarted {
        requester: r_id,
        timestamp: r_stamp.timestamp,
    });

    let mut outcome = RoundOutcome {
        requester: r_id,
        entered: false,
        grants: 0,
        deferrals: 0,
        flushed: 0,
    };

    // Peer pass, registry order. Decisions are collected from the static
    // stamps first so each mutation touches exactly one node.
    let decisions: Vec<(usize, NodeId, Decision)> = registry
        .nodes()
        .iter()
        .enumerate()
        .filter(|(_, peer)| peer.id() != r_id)
        .map(|(index, peer)| (index, peer.id(), decide(r_stamp, peer.stamp())))
        .collect();

    for (peer_index, peer_id, decision) in decisions {
        match decision {
            Decision::Grant => {
                registry.node_mut(peer_index).record_permission(r_id)?;
                sink.emit(&ProtocolEvent::GrantRecorded {
                    requester: r_id,
                    peer: peer_id,
                });
                outcome.grants += 1;
            }
            Decision::Defer => {
                registry.node_mut(requester_index).defer(peer_id)?;
                sink.emit(&ProtocolEvent::DeferredRecorded {
                    requester: r_id,
                    peer: peer_id,
                });
                outcome.deferrals += 1;
            }
        }
    }

    // Entry eligibility against the full membership
    let all_ids: Vec<NodeId> = registry.ids().collect();
    if registry.node_at(requester_index)?.can_enter(all_ids) {
        tracing::debug!(requester = %r_id, "entered critical section");
        sink.emit(&ProtocolEvent::EnteredCriticalSection { requester: r_id });
        outcome.entered = true;

        // Release every postponed permission, in deferral order
        let deferred = registry.node_mut(requester_index).drain_deferred();
        for peer_id in deferred {
            let peer_index =
                registry
                    .index_of(peer_id)
                    .ok_or(TesseraError::BrokenReference {
                        requester: r_id,
                        peer: peer_id,
                    })?;
            registry.node_mut(peer_index).record_permission(r_id)?;
            sink.emit(&ProtocolEvent::DeferredGrantFlushed {
                requester: r_id,
                peer: peer_id,
            });
            outcome.flushed += 1;
        }
    }

    Ok(outcome)
}

/// Drive one round per node, in registry order
pub fn run_all(registry: &mut Registry, sink: &mut dyn EventSink) -> TesseraResult<RunReport> {
    let mut report = RunReport::default();
    for index in 0..registry.len() {
        let outcome = run_round(registry, index, sink)?;
        sink.round_complete(outcome.requester);
        if outcome.entered {
            report.entered.push(outcome.requester);
        }
        report.rounds.push(outcome);
    }
    Ok(report)
}
