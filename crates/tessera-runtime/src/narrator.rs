//! Console narration of protocol events
//!
//! One sentence per observable step, with a blank line closing each
//! requester round. Deferrals mutate requester state without a narration
//! line; they surface later as the flushed replies of an entering node.

use std::io::Write;

use tessera_core::{EventSink, NodeId, ProtocolEvent};

/// Event sink that narrates each protocol step to a writer
pub struct Narrator<W: Write> {
    out: W,
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W) -> Self {
        Narrator { out }
    }

    /// Consume the narrator, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Narrator over standard output
pub fn stdout_narrator() -> Narrator<std::io::Stdout> {
    Narrator::new(std::io::stdout())
}

impl<W: Write> EventSink for Narrator<W> {
    fn emit(&mut self, event: &ProtocolEvent) {
        // Narration failures are not protocol failures.
        let _ = match *event {
            ProtocolEvent::RequestStarted {
                requester,
                timestamp,
            } => writeln!(
                self.out,
                "Node {} is requesting to enter critical section with timestamp {}",
                requester, timestamp
            ),
            ProtocolEvent::GrantRecorded { requester, peer }
            | ProtocolEvent::DeferredGrantFlushed { requester, peer } => {
                writeln!(self.out, "Node {} has replied to Node {}", peer, requester)
            }
            ProtocolEvent::EnteredCriticalSection { requester } => {
                writeln!(self.out, "Node {} entered critical section", requester)
            }
            ProtocolEvent::DeferredRecorded { .. } => Ok(()),
        };
    }

    fn round_complete(&mut self, _requester: NodeId) {
        let _ = writeln!(self.out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::Timestamp;

    fn narrate(events: &[ProtocolEvent]) -> String {
        let mut narrator = Narrator::new(Vec::new());
        for event in events {
            narrator.emit(event);
        }
        String::from_utf8(narrator.into_inner()).unwrap()
    }

    #[test]
    fn test_request_and_entry_wording() {
        let text = narrate(&[
            ProtocolEvent::RequestStarted {
                requester: NodeId::new(1),
                timestamp: Timestamp::new(5),
            },
            ProtocolEvent::EnteredCriticalSection {
                requester: NodeId::new(1),
            },
        ]);
        assert_eq!(
            text,
            "Node 1 is requesting to enter critical section with timestamp 5\n\
             Node 1 entered critical section\n"
        );
    }

    #[test]
    fn test_grant_and_flush_share_the_reply_sentence() {
        let grant = narrate(&[ProtocolEvent::GrantRecorded {
            requester: NodeId::new(1),
            peer: NodeId::new(2),
        }]);
        let flush = narrate(&[ProtocolEvent::DeferredGrantFlushed {
            requester: NodeId::new(1),
            peer: NodeId::new(2),
        }]);
        assert_eq!(grant, "Node 2 has replied to Node 1\n");
        assert_eq!(flush, grant);
    }

    #[test]
    fn test_deferral_is_silent() {
        let text = narrate(&[ProtocolEvent::DeferredRecorded {
            requester: NodeId::new(2),
            peer: NodeId::new(1),
        }]);
        assert!(text.is_empty());
    }

    #[test]
    fn test_round_separator_is_a_blank_line() {
        let mut narrator = Narrator::new(Vec::new());
        narrator.round_complete(NodeId::new(1));
        assert_eq!(String::from_utf8(narrator.into_inner()).unwrap(), "\n");
    }
}
