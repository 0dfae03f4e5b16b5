//! Single-occupancy timer ownership.
//!
//! A `TimerSlot` holds at most one running countdown, tagged with the
//! owner (a phase) that started it. Starting a new countdown or releasing
//! the slot cancels the old one, so a countdown can never outlive the
//! phase that owns it.

use super::countdown::{Countdown, TimerHandle, TimerSignal};

#[derive(Clone, Debug)]
pub struct TimerSlot<O> {
    active: Option<(O, Countdown)>,
    next_handle: u64,
}

impl<O> Default for TimerSlot<O> {
    fn default() -> Self {
        Self {
            active: None,
            next_handle: 1,
        }
    }
}

impl<O: Copy + PartialEq + std::fmt::Debug> TimerSlot<O> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a countdown for `owner`, cancelling whatever was running.
    pub fn start(&mut self, owner: O, duration_secs: u32) -> TimerHandle {
        self.release();
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.active = Some((owner, Countdown::start(handle, duration_secs)));
        tracing::trace!(%handle, ?owner, duration_secs, "timer started");
        handle
    }

    /// Cancel and drop the current countdown, if any.
    pub fn release(&mut self) -> Option<TimerHandle> {
        let (owner, mut countdown) = self.active.take()?;
        if countdown.cancel() {
            tracing::trace!(handle = %countdown.handle(), ?owner, "timer cancelled");
        }
        Some(countdown.handle())
    }

    /// Advance the current countdown one second.
    ///
    /// On expiry the countdown is dropped and its owner returned alongside
    /// the signal.
    pub fn tick(&mut self) -> Option<(O, TimerSignal)> {
        let (owner, countdown) = self.active.as_mut()?;
        let owner = *owner;
        let signal = countdown.tick();
        if matches!(signal, TimerSignal::Expired(_)) {
            self.active = None;
        }
        Some((owner, signal))
    }

    /// Accept an expiry reported from outside for `handle`.
    ///
    /// Returns the owner if `handle` is the running countdown. Stale handles
    /// (cancelled, replaced, already expired) return `None`.
    pub fn expire(&mut self, handle: TimerHandle) -> Option<O> {
        let current = self
            .active
            .as_ref()
            .is_some_and(|(_, c)| c.handle() == handle && c.is_running());
        if !current {
            return None;
        }
        let (owner, mut countdown) = self.active.take()?;
        countdown.force_expire();
        Some(owner)
    }

    /// Handle of the running countdown.
    #[must_use]
    pub fn handle(&self) -> Option<TimerHandle> {
        self.active.as_ref().map(|(_, c)| c.handle())
    }

    /// Owner of the running countdown.
    #[must_use]
    pub fn owner(&self) -> Option<O> {
        self.active.as_ref().map(|(o, _)| *o)
    }

    /// Seconds left on the running countdown.
    #[must_use]
    pub fn remaining(&self) -> Option<u32> {
        self.active.as_ref().map(|(_, c)| c.remaining())
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Owner {
        Countdown,
        Prompt,
    }

    #[test]
    fn test_start_replaces_previous() {
        let mut slot = TimerSlot::new();
        let first = slot.start(Owner::Countdown, 5);
        let second = slot.start(Owner::Prompt, 30);

        assert_ne!(first, second);
        assert_eq!(slot.handle(), Some(second));
        assert_eq!(slot.owner(), Some(Owner::Prompt));
        assert_eq!(slot.expire(first), None);
    }

    #[test]
    fn test_tick_to_expiry_clears_slot() {
        let mut slot = TimerSlot::new();
        let handle = slot.start(Owner::Countdown, 2);

        assert_eq!(
            slot.tick(),
            Some((Owner::Countdown, TimerSignal::Tick { handle, remaining: 1 }))
        );
        assert_eq!(slot.remaining(), Some(1));
        assert_eq!(slot.tick(), Some((Owner::Countdown, TimerSignal::Expired(handle))));
        assert!(!slot.is_running());
        assert_eq!(slot.tick(), None);
    }

    #[test]
    fn test_release_makes_handle_stale() {
        let mut slot = TimerSlot::new();
        let handle = slot.start(Owner::Prompt, 10);
        assert_eq!(slot.release(), Some(handle));
        assert_eq!(slot.expire(handle), None);
        assert_eq!(slot.release(), None);
    }

    #[test]
    fn test_external_expire() {
        let mut slot = TimerSlot::new();
        let handle = slot.start(Owner::Prompt, 10);
        assert_eq!(slot.expire(handle), Some(Owner::Prompt));
        // Only once
        assert_eq!(slot.expire(handle), None);
    }
}
