//! Scheduler queue.
//!
//! The [`Clock`] holds callbacks waiting for a delay to run out. Each frame
//! [`update_clock`](crate::systems::clock::update_clock) calls
//! [`Clock::advance`] with the frame delta, which rebuilds the queue and
//! hands back the callbacks that became due. They are invoked only after the
//! queue is complete, so a callback that schedules or unschedules affects the
//! next frame and never the one in progress.
//!
//! Entries are either one-shot (`interval == 0`) or recurring, in which case
//! they are re-armed with their interval every time they fire.

use log::debug;

use crate::callback::Callback;
use crate::error::{EngineResult, ensure_positive};

/// A pending call in the [`Clock`] queue.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledCall {
    pub callback: Callback,
    /// Seconds left before the call is due.
    pub remaining: f64,
    /// Re-arm delay, 0 for one-shot calls.
    pub interval: f64,
}

impl ScheduledCall {
    pub fn is_recurring(&self) -> bool {
        self.interval > 0.0
    }
}

/// Queue of delayed and recurring callbacks.
///
/// This is a non-send resource; use `NonSend<Clock>` in system parameters.
// NonSend resource: insert with insert_non_send_resource and access via NonSend/NonSendMut
#[derive(Debug, Default)]
pub struct Clock {
    queue: Vec<ScheduledCall>,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `callback` once after `delay` seconds.
    pub fn schedule(&mut self, callback: Callback, delay: f64) -> EngineResult<()> {
        let delay = ensure_positive("delay", delay)?;
        debug!("schedule {:?} in {}s", callback, delay);
        self.queue.push(ScheduledCall {
            callback,
            remaining: delay,
            interval: 0.0,
        });
        Ok(())
    }

    /// Like [`schedule`](Self::schedule), dropping every pending entry for
    /// the same callback first. Nothing is removed when `delay` is invalid.
    pub fn schedule_unique(&mut self, callback: Callback, delay: f64) -> EngineResult<()> {
        let delay = ensure_positive("delay", delay)?;
        self.unschedule(&callback);
        self.schedule(callback, delay)
    }

    /// Call `callback` every `interval` seconds.
    pub fn schedule_interval(&mut self, callback: Callback, interval: f64) -> EngineResult<()> {
        let interval = ensure_positive("interval", interval)?;
        debug!("schedule {:?} every {}s", callback, interval);
        self.queue.push(ScheduledCall {
            callback,
            remaining: interval,
            interval,
        });
        Ok(())
    }

    /// Remove every entry for `callback`. Returns how many were removed.
    pub fn unschedule(&mut self, callback: &Callback) -> usize {
        let before = self.queue.len();
        self.queue.retain(|call| call.callback != *callback);
        let removed = before - self.queue.len();
        if removed > 0 {
            debug!("unschedule {:?}: {} entries", callback, removed);
        }
        removed
    }

    /// Count down every entry by `dt` and return the callbacks that became
    /// due, in queue order.
    ///
    /// Due one-shot entries are removed, due recurring entries are re-armed
    /// with their full interval. The queue is final when this returns.
    pub fn advance(&mut self, dt: f64) -> Vec<Callback> {
        let mut due = Vec::new();
        let mut next = Vec::with_capacity(self.queue.len());
        for mut call in self.queue.drain(..) {
            call.remaining -= dt;
            if call.remaining <= 0.0 {
                due.push(call.callback.clone());
                if call.is_recurring() {
                    call.remaining = call.interval;
                    next.push(call);
                }
            } else {
                next.push(call);
            }
        }
        self.queue = next;
        due
    }

    /// Pending entries in queue order.
    pub fn queue(&self) -> &[ScheduledCall] {
        &self.queue
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn noop() -> Callback {
        Callback::new(|_| {})
    }

    // ==================== VALIDATION TESTS ====================

    #[test]
    fn test_invalid_delays() {
        let mut clock = Clock::new();
        for bad in [0.0, -1.0, f64::INFINITY] {
            let err = clock.schedule(noop(), bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Range);
            let err = clock.schedule_interval(noop(), bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Range);
        }
        let err = clock.schedule(noop(), f64::NAN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(clock.is_empty());
    }

    #[test]
    fn test_schedule_unique_keeps_queue_on_error() {
        let mut clock = Clock::new();
        let cb = noop();
        clock.schedule(cb.clone(), 1.0).unwrap();
        assert!(clock.schedule_unique(cb.clone(), -1.0).is_err());
        assert_eq!(clock.len(), 1);
    }

    // ==================== QUEUE TESTS ====================

    #[test]
    fn test_one_shot_fires_once_at_delay() {
        let mut clock = Clock::new();
        let cb = noop();
        clock.schedule(cb.clone(), 1.0).unwrap();
        assert!(clock.advance(0.5).is_empty());
        assert!(approx_eq(clock.queue()[0].remaining, 0.5));
        assert_eq!(clock.advance(0.5), vec![cb]);
        assert!(clock.is_empty());
        assert!(clock.advance(10.0).is_empty());
    }

    #[test]
    fn test_interval_rearms_with_full_interval() {
        let mut clock = Clock::new();
        let cb = noop();
        clock.schedule_interval(cb.clone(), 1.0).unwrap();
        assert_eq!(clock.advance(1.5).len(), 1);
        assert_eq!(clock.queue()[0].remaining, 1.0);
        assert!(clock.queue()[0].is_recurring());
        assert_eq!(clock.advance(1.0).len(), 1);
    }

    #[test]
    fn test_due_order_is_queue_order() {
        let mut clock = Clock::new();
        let (a, b, c) = (noop(), noop(), noop());
        clock.schedule(b.clone(), 0.2).unwrap();
        clock.schedule(a.clone(), 0.1).unwrap();
        clock.schedule(c.clone(), 5.0).unwrap();
        assert_eq!(clock.advance(1.0), vec![b, a]);
        assert_eq!(clock.queue()[0].callback, c);
    }

    #[test]
    fn test_unschedule_removes_all_matches() {
        let mut clock = Clock::new();
        let cb = noop();
        let other = noop();
        clock.schedule(cb.clone(), 1.0).unwrap();
        clock.schedule_interval(cb.clone(), 2.0).unwrap();
        clock.schedule(other.clone(), 1.0).unwrap();
        assert_eq!(clock.unschedule(&cb), 2);
        assert_eq!(clock.unschedule(&cb), 0);
        assert_eq!(clock.len(), 1);
    }

    #[test]
    fn test_schedule_unique_replaces() {
        let mut clock = Clock::new();
        let cb = noop();
        clock.schedule(cb.clone(), 1.0).unwrap();
        clock.schedule_interval(cb.clone(), 1.0).unwrap();
        clock.schedule_unique(cb.clone(), 3.0).unwrap();
        assert_eq!(clock.len(), 1);
        assert_eq!(clock.queue()[0].remaining, 3.0);
        assert!(!clock.queue()[0].is_recurring());
    }

    #[test]
    fn test_clear() {
        let mut clock = Clock::new();
        clock.schedule(noop(), 1.0).unwrap();
        clock.clear();
        assert!(clock.is_empty());
    }
}
