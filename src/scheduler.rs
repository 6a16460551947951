//! Dwell timer: at most one pending advance at a time.

use std::time::Duration;

use tracing::{debug, trace};

/// The single outstanding deferred advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    pub remaining: Duration,
    /// Rotation counter of the window that armed this timer.
    pub counter: usize,
    /// Carousel generation at arming time.
    pub generation: u64,
}

/// Emitted by [`Scheduler::advance`] when the pending timer elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub counter: usize,
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    dwell: Duration,
    enabled: bool,
    pending: Option<PendingTimer>,
}

impl Scheduler {
    pub fn new(dwell: Duration, enabled: bool) -> Self {
        Self {
            dwell,
            enabled,
            pending: None,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.cancel();
        }
    }

    /// Arms the timer for a window of `window_len` items.
    ///
    /// No-op when disabled or when the window holds fewer than two items.
    /// Returns whether a timer is now pending.
    pub fn arm(
        &mut self,
        window_len: usize,
        counter: usize,
        generation: u64,
        delay: Option<Duration>,
    ) -> bool {
        if !self.enabled || window_len <= 1 {
            return false;
        }
        if self.pending.is_some() {
            debug!("replacing a pending timer that never fired");
        }
        let remaining = delay.unwrap_or(self.dwell);
        debug!(?remaining, counter, generation, "armed advance timer");
        self.pending = Some(PendingTimer {
            remaining,
            counter,
            generation,
        });
        true
    }

    /// Drops the pending timer, if any.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            debug!("cancelled pending advance timer");
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&PendingTimer> {
        self.pending.as_ref()
    }

    /// Counts the pending timer down by `dt`, consuming it when it elapses.
    pub fn advance(&mut self, dt: Duration) -> Option<Fired> {
        let timer = self.pending.as_mut()?;
        timer.remaining = timer.remaining.saturating_sub(dt);
        trace!(remaining = ?timer.remaining, "timer tick");
        if !timer.remaining.is_zero() {
            return None;
        }
        let timer = self.pending.take()?;
        Some(Fired {
            counter: timer.counter,
            generation: timer.generation,
        })
    }
}
