//! Cooperative main queue
//!
//! Every UI-facing callback in Pulse runs on a single cooperative queue. Delays
//! are scheduled callbacks, never blocking waits, so other work (theme changes,
//! lifecycle events) may interleave between a delay's scheduling and its firing.
//!
//! The queue keeps a virtual clock. Hosts drive it from their frame loop with
//! [`MainQueue::advance_by`]; tests drive it directly, which makes timing
//! contracts exact.

use slotmap::{new_key_type, SlotMap};
use std::cell::{Cell, RefCell};
use std::time::Duration;

new_key_type! {
    /// Handle to a scheduled callback, usable for cancellation
    pub struct TimerId;
}

/// A callback scheduled on the main queue
pub type Task = Box<dyn FnOnce(&MainQueue)>;

struct PendingTask {
    deadline: Duration,
    /// Tie-breaker: equal deadlines run in scheduling order
    seq: u64,
    label: &'static str,
    task: Task,
}

/// Single-threaded timer queue with a virtual clock
pub struct MainQueue {
    now: Cell<Duration>,
    next_seq: Cell<u64>,
    tasks: RefCell<SlotMap<TimerId, PendingTask>>,
}

impl MainQueue {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
            next_seq: Cell::new(0),
            tasks: RefCell::new(SlotMap::with_key()),
        }
    }

    /// Current virtual time, measured from queue creation
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Schedule `task` to run `delay` after the current virtual time
    pub fn schedule_after<F>(&self, delay: Duration, label: &'static str, task: F) -> TimerId
    where
        F: FnOnce(&MainQueue) + 'static,
    {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        let deadline = self.now.get() + delay;

        let id = self.tasks.borrow_mut().insert(PendingTask {
            deadline,
            seq,
            label,
            task: Box::new(task),
        });
        tracing::trace!(label, deadline_ms = deadline.as_millis() as u64, "main queue: scheduled");
        id
    }

    /// Run `task` on the next turn of the queue
    pub fn post<F>(&self, label: &'static str, task: F) -> TimerId
    where
        F: FnOnce(&MainQueue) + 'static,
    {
        self.schedule_after(Duration::ZERO, label, task)
    }

    /// Cancel a pending callback. Returns false if it already ran or was cancelled.
    pub fn cancel(&self, id: TimerId) -> bool {
        match self.tasks.borrow_mut().remove(id) {
            Some(pending) => {
                tracing::debug!(label = pending.label, "main queue: cancelled");
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.tasks.borrow().contains_key(id)
    }

    /// Number of callbacks waiting to run
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Advance the clock by `dt`, running every callback that becomes due.
    ///
    /// Callbacks scheduled while advancing also run if they fall due before the
    /// new time. Returns the number of callbacks executed.
    pub fn advance_by(&self, dt: Duration) -> usize {
        let target = self.now.get() + dt;
        let mut ran = 0;
        while self.run_next(Some(target)) {
            ran += 1;
        }
        // A callback may have advanced the clock further itself
        self.now.set(self.now.get().max(target));
        ran
    }

    /// Run callbacks until the queue is empty, jumping the clock to each deadline
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while self.run_next(None) {
            ran += 1;
        }
        ran
    }

    fn run_next(&self, limit: Option<Duration>) -> bool {
        let next = {
            let tasks = self.tasks.borrow();
            tasks
                .iter()
                .filter(|(_, t)| limit.map_or(true, |limit| t.deadline <= limit))
                .min_by_key(|(_, t)| (t.deadline, t.seq))
                .map(|(id, _)| id)
        };
        let Some(id) = next else {
            return false;
        };
        let Some(pending) = self.tasks.borrow_mut().remove(id) else {
            return false;
        };

        if pending.deadline > self.now.get() {
            self.now.set(pending.deadline);
        }
        tracing::trace!(
            label = pending.label,
            now_ms = self.now.get().as_millis() as u64,
            "main queue: running"
        );
        (pending.task)(self);
        true
    }
}

impl Default for MainQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MainQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MainQueue")
            .field("now", &self.now.get())
            .field("pending", &self.pending())
            .finish()
    }
}
