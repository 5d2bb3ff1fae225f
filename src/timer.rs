//! Timer queue
//!
//! Repeating timers without handing closures to the host.
//!
//! Design:
//! - TimerQueue is a min-heap sorted by deadline
//! - `tick(now)` reports which timers fired; the owner reacts to them
//! - Time comes from the host (rAF timestamp in the browser)
//! - Every timer can be cancelled by id; a cancelled timer never fires

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Unique identifier for a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Timer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Timer is active and waiting
    Pending,
    /// Timer has fired
    Fired,
    /// Timer was cancelled
    Cancelled,
}

/// A repeating timer
#[derive(Debug)]
pub struct Timer {
    pub id: TimerId,
    /// When this timer next fires (monotonic milliseconds)
    pub deadline: f64,
    pub state: TimerState,
    /// Period between firings
    pub interval: f64,
}

impl Timer {
    pub fn interval(id: TimerId, deadline: f64, interval_ms: f64) -> Self {
        Self {
            id,
            deadline,
            state: TimerState::Pending,
            interval: interval_ms,
        }
    }

    pub fn is_expired(&self, now: f64) -> bool {
        self.state == TimerState::Pending && now >= self.deadline
    }

    /// Fire the timer. Returns false if it was not pending.
    pub fn fire(&mut self) -> bool {
        if self.state == TimerState::Pending {
            self.state = TimerState::Fired;
            true
        } else {
            false
        }
    }

    /// Re-arm for the next period
    pub fn reset_interval(&mut self) {
        self.deadline += self.interval;
        self.state = TimerState::Pending;
    }

    pub fn cancel(&mut self) {
        self.state = TimerState::Cancelled;
    }
}

/// Entry in the timer heap (for ordering)
#[derive(Debug)]
struct TimerEntry {
    deadline: f64,
    id: TimerId,
}

impl PartialEq for TimerEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TimerEntry {}

impl PartialOrd for TimerEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap; equal deadlines fire in schedule order
        other
            .deadline
            .partial_cmp(&self.deadline)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.id.0.cmp(&self.id.0))
    }
}

/// Timer queue - owns all active timers
#[derive(Debug)]
pub struct TimerQueue {
    heap: BinaryHeap<TimerEntry>,
    timers: HashMap<TimerId, Timer>,
    next_id: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            timers: HashMap::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Schedule a repeating interval timer
    pub fn schedule_interval(&mut self, interval_ms: f64, now: f64) -> TimerId {
        let id = self.allocate_id();
        let deadline = now + interval_ms;
        self.heap.push(TimerEntry { deadline, id });
        self.timers
            .insert(id, Timer::interval(id, deadline, interval_ms));
        id
    }

    /// Cancel a timer
    /// Returns true if the timer was pending and is now cancelled
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.timers.get_mut(&id) {
            Some(timer) if timer.state == TimerState::Pending => {
                timer.cancel();
                true
            }
            _ => false,
        }
    }

    /// Cancel every pending timer
    pub fn cancel_all(&mut self) {
        for timer in self.timers.values_mut() {
            timer.cancel();
        }
        self.timers.clear();
        self.heap.clear();
    }

    /// Process expired timers, returning one id per firing in deadline order.
    ///
    /// An interval timer that fell several periods behind fires once per
    /// missed period.
    pub fn tick(&mut self, now: f64) -> Vec<TimerId> {
        let mut fired = Vec::new();

        while let Some(entry) = self.heap.peek() {
            if entry.deadline > now {
                break;
            }
            let Some(entry) = self.heap.pop() else {
                break;
            };

            if let Some(timer) = self.timers.get_mut(&entry.id)
                && timer.is_expired(now)
                && timer.fire()
            {
                fired.push(timer.id);
                timer.reset_interval();
                self.heap.push(TimerEntry {
                    deadline: timer.deadline,
                    id: timer.id,
                });
            }
        }

        // Clean up fired/cancelled timers
        self.timers.retain(|_, t| t.state == TimerState::Pending);

        fired
    }

    pub fn pending_count(&self) -> usize {
        self.timers
            .values()
            .filter(|t| t.state == TimerState::Pending)
            .count()
    }
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_timer() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule_interval(100.0, 0.0);
        assert_eq!(queue.pending_count(), 1);

        assert!(queue.tick(50.0).is_empty());
        assert_eq!(queue.tick(100.0), vec![id]);
        assert_eq!(queue.tick(200.0), vec![id]);
        assert_eq!(queue.pending_count(), 1);

        queue.cancel(id);
        assert!(queue.tick(300.0).is_empty());
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn test_interval_catches_up() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule_interval(20.0, 0.0);

        // Three periods elapsed in one tick
        assert_eq!(queue.tick(65.0), vec![id, id, id]);
        assert!(queue.tick(79.0).is_empty());
        assert_eq!(queue.tick(80.0), vec![id]);
    }

    #[test]
    fn test_multiple_timers_in_deadline_order() {
        let mut queue = TimerQueue::new();
        let slow = queue.schedule_interval(100.0, 0.0);
        let fast = queue.schedule_interval(30.0, 0.0);

        assert_eq!(queue.tick(30.0), vec![fast]);
        assert_eq!(queue.tick(100.0), vec![fast, fast, slow]);
    }

    #[test]
    fn test_same_deadline_schedule_order() {
        let mut queue = TimerQueue::new();
        let a = queue.schedule_interval(50.0, 0.0);
        let b = queue.schedule_interval(50.0, 0.0);
        let c = queue.schedule_interval(50.0, 0.0);
        assert_eq!(queue.tick(50.0), vec![a, b, c]);
    }

    #[test]
    fn test_cancel_timer() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule_interval(100.0, 0.0);
        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));
        assert!(queue.tick(100.0).is_empty());
    }

    #[test]
    fn test_cancel_all() {
        let mut queue = TimerQueue::new();
        queue.schedule_interval(10.0, 0.0);
        queue.schedule_interval(25.0, 0.0);
        queue.cancel_all();
        assert_eq!(queue.pending_count(), 0);
        assert!(queue.tick(1000.0).is_empty());
    }
}
