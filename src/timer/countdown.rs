//! One-second-cadence countdown clock.

use serde::{Deserialize, Serialize};

/// Identifies one started countdown. Never reused within a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

impl std::fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// What a single tick produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerSignal {
    /// A second elapsed; time is left.
    Tick { handle: TimerHandle, remaining: u32 },
    /// Remaining time reached zero. Produced exactly once per countdown.
    Expired(TimerHandle),
    /// The countdown is no longer running.
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerStatus {
    Running,
    Expired,
    Cancelled,
}

/// Informational callbacks for a ticking countdown.
pub trait TimerObserver {
    fn on_tick(&mut self, _remaining: u32) {}
    fn on_expire(&mut self) {}
}

/// A countdown in whole seconds, advanced by explicit ticks.
///
/// The countdown never reads the wall clock; whoever owns it decides when
/// a second has passed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    handle: TimerHandle,
    duration: u32,
    remaining: u32,
    status: TimerStatus,
}

impl Countdown {
    /// Start a countdown of `duration_secs`.
    #[must_use]
    pub fn start(handle: TimerHandle, duration_secs: u32) -> Self {
        Self {
            handle,
            duration: duration_secs,
            remaining: duration_secs,
            status: TimerStatus::Running,
        }
    }

    /// Advance one second.
    pub fn tick(&mut self) -> TimerSignal {
        if self.status != TimerStatus::Running {
            return TimerSignal::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.status = TimerStatus::Expired;
            TimerSignal::Expired(self.handle)
        } else {
            TimerSignal::Tick {
                handle: self.handle,
                remaining: self.remaining,
            }
        }
    }

    /// Advance one second, reporting to an observer.
    pub fn tick_with<O: TimerObserver + ?Sized>(&mut self, observer: &mut O) -> TimerSignal {
        let signal = self.tick();
        match signal {
            TimerSignal::Tick { remaining, .. } => observer.on_tick(remaining),
            TimerSignal::Expired(_) => observer.on_expire(),
            TimerSignal::Idle => {}
        }
        signal
    }

    /// Expire immediately, as if the last second elapsed.
    ///
    /// Returns false if the countdown had already stopped.
    pub fn force_expire(&mut self) -> bool {
        if self.status != TimerStatus::Running {
            return false;
        }
        self.remaining = 0;
        self.status = TimerStatus::Expired;
        true
    }

    /// Stop without expiring. Returns false if it had already stopped.
    pub fn cancel(&mut self) -> bool {
        if self.status != TimerStatus::Running {
            return false;
        }
        self.status = TimerStatus::Cancelled;
        true
    }

    #[must_use]
    pub fn handle(&self) -> TimerHandle {
        self.handle
    }

    #[must_use]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn status(&self) -> TimerStatus {
        self.status
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }
}
