//! Deferred re-entry for the single-threaded UI loop
//!
//! Delayed callbacks are plain values queued with a due time and the
//! generation of the transition that scheduled them. When the owner moves to
//! a newer generation, older tasks are dropped instead of run, so a late
//! timer can never resurrect a transition the user has already left.

use std::time::{Duration, Instant};
use tracing::debug;

/// Monotonic transition counter used to invalidate stale tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    pub fn next(self) -> Self {
        Generation(self.0 + 1)
    }
}

#[derive(Debug)]
struct Deferred<T> {
    due: Instant,
    generation: Generation,
    task: T,
}

/// Queue of tasks waiting for their due time
#[derive(Debug)]
pub struct DeferredQueue<T> {
    pending: Vec<Deferred<T>>,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<T: std::fmt::Debug> DeferredQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, generation: Generation, task: T) {
        debug!(?task, delay_ms = delay.as_millis() as u64, "scheduled deferred task");
        self.pending.push(Deferred {
            due: now + delay,
            generation,
            task,
        });
    }

    /// Remove and return the earliest task that is due.
    /// Tasks scheduled under an older generation than `current` are discarded
    /// on the way. Call in a loop: each task may start a new generation.
    pub fn pop_due(&mut self, now: Instant, current: Generation) -> Option<T> {
        loop {
            let index = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, d)| d.due <= now)
                .min_by_key(|(_, d)| d.due)
                .map(|(i, _)| i)?;

            let deferred = self.pending.remove(index);
            if deferred.generation < current {
                debug!(task = ?deferred.task, "dropping stale deferred task");
                continue;
            }
            return Some(deferred.task);
        }
    }

    /// Earliest due time, used to schedule the next repaint
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|d| d.due).min()
    }
}

/// Trailing-edge debounce: a burst of triggers fires once after `wait` of quiet
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self { wait, deadline: None }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.wait);
    }

    /// Returns true exactly once per burst, when the quiet period has elapsed
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
