//! Runtime diagnostics for the gesture core.
//!
//! Nothing in the gesture path is fatal.  Edges that make no sense in the
//! current state, events the queue refused, and forced resets are counted
//! here and the most recent few are kept in a small ring so a diagnostics
//! request can show what happened.

use heapless::Deque;

use crate::error::QueueError;
use crate::events::ButtonEventKind;
use crate::fsm::ButtonState;

const RECENT_SLOTS: usize = 8;

/// One recoverable anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// Edge that does not move the machine (duplicate or out of sequence).
    IgnoredEdge { state: ButtonState, pressed: bool },
    /// Event lost because the outbound queue refused it.
    EventDropped {
        kind: ButtonEventKind,
        reason: QueueError,
    },
    /// Machine found in a state the active policy never enters.
    ForcedReset { state: ButtonState },
}

/// Counters plus a ring of the latest anomalies.
#[derive(Debug, Default)]
pub struct Diagnostics {
    ignored_edges: u32,
    events_sent: u32,
    events_dropped: u32,
    forced_resets: u32,
    recent: Deque<Diagnostic, RECENT_SLOTS>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an anomaly, evicting the oldest one when the ring is full.
    pub fn record(&mut self, diag: Diagnostic) {
        match diag {
            Diagnostic::IgnoredEdge { .. } => {
                self.ignored_edges = self.ignored_edges.saturating_add(1);
            }
            Diagnostic::EventDropped { .. } => {
                self.events_dropped = self.events_dropped.saturating_add(1);
            }
            Diagnostic::ForcedReset { .. } => {
                self.forced_resets = self.forced_resets.saturating_add(1);
            }
        }
        if self.recent.is_full() {
            self.recent.pop_front();
        }
        let _ = self.recent.push_back(diag);
    }

    pub(crate) fn count_sent(&mut self) {
        self.events_sent = self.events_sent.saturating_add(1);
    }

    pub fn ignored_edges(&self) -> u32 {
        self.ignored_edges
    }

    pub fn events_sent(&self) -> u32 {
        self.events_sent
    }

    pub fn events_dropped(&self) -> u32 {
        self.events_dropped
    }

    pub fn forced_resets(&self) -> u32 {
        self.forced_resets
    }

    /// Latest anomalies, oldest first.
    pub fn recent(&self) -> impl Iterator<Item = &Diagnostic> {
        self.recent.iter()
    }

    /// Most recent anomaly, if any.
    pub fn last(&self) -> Option<&Diagnostic> {
        self.recent.back()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
