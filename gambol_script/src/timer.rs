//! Periodic Timers
//!
//! Scripts register repeating callbacks against the level clock (milliseconds
//! since level start); the host pumps [`Timers::tick`] once per frame. Due times
//! live in a reversed binary heap as a priority queue; stopping a timer leaves a
//! tombstone slot and any stale heap entry for it is discarded lazily on the next
//! pump.
//!
//! A continuing timer is rescheduled relative to the tick that ran it, so a long
//! gap between pumps (a paused level, a dropped frame batch) never produces a
//! burst of catch-up fires.
//!
//! A timer can also be registered dormant behind a [`TimerTrigger`]: it costs
//! nothing until some event handler trips the trigger, at which point the next
//! pump moves it into the live schedule.

use std::cell::Cell;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::host::Host;

/// Handle to a registered timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(usize);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a timer callback wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    /// Fire again one interval from now.
    Continue,
    /// Retire the timer.
    Stop,
}

/// Callback run each time a timer comes due.
pub type TimerCallback = Box<dyn FnMut(&mut dyn Host) -> TimerOutcome>;

/// Shared switch that starts a dormant timer from code with no access to the
/// pump itself, such as an event handler running mid-dispatch.
#[derive(Debug, Clone, Default)]
pub struct TimerTrigger {
    fired: Rc<Cell<bool>>,
}

impl TimerTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trip the switch. Idempotent; the pump notices on its next run.
    pub fn fire(&self) {
        self.fired.set(true);
    }

    pub fn is_fired(&self) -> bool {
        self.fired.get()
    }
}

struct TimerSlot {
    interval_ms: u64,
    callback: TimerCallback,
}

struct DormantTimer {
    trigger: TimerTrigger,
    interval_ms: u64,
    callback: TimerCallback,
}

/// The repeating-timer pump.
#[derive(Default)]
pub struct Timers {
    heap: BinaryHeap<Reverse<(u64, usize)>>, /* (due_ms, slot_idx) */
    slots: Vec<Option<TimerSlot>>,
    dormant: Vec<DormantTimer>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a repeating timer. The first fire comes due `interval_ms` after
    /// `now_ms`; the callback decides each time whether to continue.
    pub fn every<F>(&mut self, now_ms: u64, interval_ms: u64, callback: F) -> TimerId
    where
        F: FnMut(&mut dyn Host) -> TimerOutcome + 'static,
    {
        // a zero interval would spin the pump forever
        let interval_ms = interval_ms.max(1);
        let idx = self.schedule(now_ms, interval_ms, Box::new(callback));
        debug!("registering timer {idx} every {interval_ms} ms (now = {now_ms})");
        TimerId(idx)
    }

    /// Register a repeating timer that stays dormant until `trigger` fires.
    ///
    /// Arming happens on the first [`Timers::tick`] that sees the fired
    /// trigger; the first run comes due one interval after that pump, and from
    /// then on the timer behaves exactly like one from [`Timers::every`]. Each
    /// registration arms at most once.
    pub fn every_when<F>(&mut self, trigger: &TimerTrigger, interval_ms: u64, callback: F)
    where
        F: FnMut(&mut dyn Host) -> TimerOutcome + 'static,
    {
        debug!("registering dormant timer every {interval_ms} ms");
        self.dormant.push(DormantTimer {
            trigger: trigger.clone(),
            interval_ms: interval_ms.max(1),
            callback: Box::new(callback),
        });
    }

    /// Cancel a timer from outside. Harmless if it already stopped.
    pub fn stop(&mut self, id: TimerId) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            if slot.take().is_some() {
                debug!("stopping timer {id}");
            }
        }
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.slots.get(id.0).is_some_and(Option::is_some)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Run every timer due at `now_ms`, in due-time order (ties in registration
    /// order). Each live timer runs at most once per call. Returns how many fired.
    pub fn tick(&mut self, host: &mut dyn Host, now_ms: u64) -> usize {
        self.arm_fired(now_ms);
        let mut fired = 0;
        while let Some(Reverse((due_ms, idx))) = self.heap.peek().copied() {
            if due_ms > now_ms {
                break;
            }
            self.heap.pop();
            // stale entry for a stopped timer
            let Some(slot) = self.slots[idx].as_mut() else {
                continue;
            };
            fired += 1;
            match (slot.callback)(host) {
                TimerOutcome::Continue => {
                    self.heap.push(Reverse((now_ms + slot.interval_ms, idx)));
                },
                TimerOutcome::Stop => {
                    debug!("timer {idx} stopped itself");
                    self.slots[idx] = None;
                },
            }
        }
        fired
    }

    fn schedule(&mut self, now_ms: u64, interval_ms: u64, callback: TimerCallback) -> usize {
        let idx = self.slots.len();
        self.heap.push(Reverse((now_ms + interval_ms, idx)));
        self.slots.push(Some(TimerSlot { interval_ms, callback }));
        idx
    }

    /// Move every dormant timer with a fired trigger into the live schedule,
    /// preserving registration order.
    fn arm_fired(&mut self, now_ms: u64) {
        if !self.dormant.iter().any(|timer| timer.trigger.is_fired()) {
            return;
        }
        for timer in std::mem::take(&mut self.dormant) {
            if timer.trigger.is_fired() {
                let interval_ms = timer.interval_ms;
                let idx = self.schedule(now_ms, interval_ms, timer.callback);
                debug!("arming timer {idx} every {interval_ms} ms (now = {now_ms})");
            } else {
                self.dormant.push(timer);
            }
        }
    }
}
