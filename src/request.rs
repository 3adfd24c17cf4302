//! Single-slot tracking of asynchronous requests where the latest one wins.
//!
//! Responses can complete out of order. The slot hands out increasing
//! sequence numbers and accepts a response only if it answers the most
//! recently issued request that is still outstanding. Older responses are
//! stale and should be dropped by the caller; nothing is actually aborted.

/// Sequence number of an issued request.
pub type Seq = u64;

/// Tracks the one request whose response may still be applied.
#[derive(Debug, Clone, Default)]
pub struct RequestSlot {
    latest: Seq,
    in_flight: bool,
}

impl RequestSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new request, making every earlier one stale.
    pub fn issue(&mut self) -> Seq {
        self.latest += 1;
        self.in_flight = true;
        self.latest
    }

    /// Whether `seq` is the outstanding request.
    pub fn is_current(&self, seq: Seq) -> bool {
        self.in_flight && seq == self.latest
    }

    /// Claims the response for `seq`.
    ///
    /// Returns `true` at most once, for the latest issued request.
    pub fn accept(&mut self, seq: Seq) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.in_flight = false;
        true
    }

    /// Makes any outstanding request stale.
    pub fn invalidate(&mut self) {
        if self.in_flight {
            self.latest += 1;
            self.in_flight = false;
        }
    }

    /// Whether a request is outstanding.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Sequence number of the most recently issued request.
    pub fn latest(&self) -> Seq {
        self.latest
    }
}
