//! Tag-based debounce timer.
//!
//! Every call to [`Debouncer::trigger`] starts a new quiet window and returns a
//! command that delivers a [`DebounceMsg`] once the window has elapsed. Each
//! message carries the debouncer's id and the tag current at trigger time; a
//! newer trigger bumps the tag, so only the last window's message settles.
//! Superseded messages still arrive but are ignored.
//!
//! ```rust
//! use bubbletea_typeahead::debounce::{DebounceMsg, Debouncer};
//! use std::time::Duration;
//!
//! let mut d = Debouncer::new(Duration::from_millis(300));
//! let _first = d.trigger();
//! let _second = d.trigger();
//!
//! // Only the message tagged by the second trigger settles.
//! assert!(!d.settle(&DebounceMsg { id: d.id(), tag: 1 }));
//! assert!(d.settle(&DebounceMsg { id: d.id(), tag: 2 }));
//! ```

use bubbletea_rs::{tick, Cmd, Msg};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// Default quiet period before a debounced action runs.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Delivered when a debounce window elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceMsg {
    /// Id of the debouncer that armed the window.
    pub id: usize,
    /// Tag at the time the window was armed.
    pub tag: usize,
}

/// Callback run when a window settles.
pub type FlushFunc = Box<dyn FnMut() + Send>;

/// Coalesces bursts of triggers into one settled event.
pub struct Debouncer {
    id: usize,
    tag: usize,
    delay: Duration,
    pending: bool,
    on_flush: Option<FlushFunc>,
}

impl std::fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .field("delay", &self.delay)
            .field("pending", &self.pending)
            .field("on_flush", &self.on_flush.is_some())
            .finish()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            id: next_id(),
            tag: 0,
            delay,
            pending: false,
            on_flush: None,
        }
    }

    /// Unique id used to route messages back to this debouncer.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Changes the quiet period for future triggers.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Registers a callback run whenever a window settles.
    pub fn set_on_flush(&mut self, f: FlushFunc) {
        self.on_flush = Some(f);
    }

    /// Whether a window is armed and has not settled or been cancelled.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Starts a new window, superseding any armed one.
    pub fn trigger(&mut self) -> Cmd {
        self.tag = self.tag.wrapping_add(1);
        self.pending = true;
        let id = self.id;
        let tag = self.tag;
        tick(self.delay, move |_| Box::new(DebounceMsg { id, tag }) as Msg)
    }

    /// Drops the armed window, if any.
    pub fn cancel(&mut self) {
        if self.pending {
            self.tag = self.tag.wrapping_add(1);
            self.pending = false;
        }
    }

    /// Consumes a delivered message.
    ///
    /// Returns `true` when the message belongs to the current window, in
    /// which case the flush callback has run and the window is closed.
    pub fn settle(&mut self, msg: &DebounceMsg) -> bool {
        if msg.id != self.id || msg.tag != self.tag || !self.pending {
            return false;
        }
        self.pending = false;
        if let Some(flush) = self.on_flush.as_mut() {
            flush();
        }
        true
    }
}
