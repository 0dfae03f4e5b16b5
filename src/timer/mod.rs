//! Timer facility: countdowns decoupled from any clock.
//!
//! The engine is driven by discrete ticks (one per second) delivered by the
//! presentation layer, so tests can run any timer to completion instantly.
//!
//! - [`Countdown`]: one countdown, `Tick` per second, `Expired` exactly once
//! - [`TimerSlot`]: owns at most one countdown, scoped to the phase that
//!   started it

mod countdown;
mod slot;

pub use countdown::{Countdown, TimerHandle, TimerObserver, TimerSignal, TimerStatus};
pub use slot::TimerSlot;
