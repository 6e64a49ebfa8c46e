//! Periodic tick registration for timed playback
//!
//! The controller never owns a clock. It asks a [`Scheduler`] to register a
//! periodic callback and later cancels it; whoever owns the scheduler is
//! responsible for delivering ticks back to the controller.

use std::time::Duration;

/// Handle of one periodic registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw identifier value
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Registers and cancels periodic ticks
pub trait Scheduler {
    /// Start delivering ticks every `interval`
    fn schedule_periodic(&mut self, interval: Duration) -> TimerId;

    /// Stop delivering ticks for `timer`
    fn cancel(&mut self, timer: TimerId);
}

/// Single-threaded scheduler pumped by its owner
///
/// Only records which registration is live and at what interval. A driving
/// loop sleeps for [`CooperativeScheduler::interval`] between calls to the
/// controller's `tick`, and a test simply calls `tick` directly.
#[derive(Debug, Default)]
pub struct CooperativeScheduler {
    next_id: u64,
    active: Option<(TimerId, Duration)>,
    last_cancelled: Option<TimerId>,
    cancelled_count: u64,
}

impl CooperativeScheduler {
    /// Scheduler with nothing registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a periodic registration is live
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Interval of the live registration
    pub fn interval(&self) -> Option<Duration> {
        self.active.map(|(_, interval)| interval)
    }

    /// Handle of the live registration
    pub fn active_timer(&self) -> Option<TimerId> {
        self.active.map(|(timer, _)| timer)
    }

    /// Most recently cancelled registration
    pub const fn last_cancelled(&self) -> Option<TimerId> {
        self.last_cancelled
    }

    /// Number of cancellations so far, replaced registrations included
    pub const fn cancelled_count(&self) -> u64 {
        self.cancelled_count
    }

    const fn record_cancel(&mut self, timer: TimerId) {
        self.last_cancelled = Some(timer);
        self.cancelled_count += 1;
    }
}

impl Scheduler for CooperativeScheduler {
    fn schedule_periodic(&mut self, interval: Duration) -> TimerId {
        let timer = TimerId(self.next_id);
        self.next_id += 1;

        // A new registration replaces any live one
        if let Some((previous, _)) = self.active.take() {
            self.record_cancel(previous);
        }
        self.active = Some((timer, interval));
        timer
    }

    fn cancel(&mut self, timer: TimerId) {
        if self.active.is_some_and(|(live, _)| live == timer) {
            self.active = None;
        }
        self.record_cancel(timer);
    }
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn schedule_periodic(&mut self, interval: Duration) -> TimerId {
        (**self).schedule_periodic(interval)
    }

    fn cancel(&mut self, timer: TimerId) {
        (**self).cancel(timer);
    }
}
