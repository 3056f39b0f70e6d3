//! Virtual-time timer queue.
//!
//! The page runs a single `requestAnimationFrame` loop; instead of chains of
//! `setTimeout` callbacks, delayed work is queued here with a due time and
//! drained by that loop. Tasks due at the same instant run in the order they
//! were scheduled.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Delayed work items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    /// Advance the typewriter, if `generation` is still the live one.
    TypewriterStep { generation: u64 },
}

#[derive(Debug, PartialEq, Eq)]
struct Entry {
    due_ms: u64,
    seq: u64,
    task: Task,
}

impl Ord for Entry {
    // Reversed: BinaryHeap is a max-heap, we want the earliest entry on top.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due_ms
            .cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_at(&mut self, due_ms: f64, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Entry {
            due_ms: due_ms.max(0.0).round() as u64,
            seq,
            task,
        });
    }

    /// Pop the earliest task due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(f64, Task)> {
        let now = now_ms.max(0.0).round() as u64;
        if self.queue.peek()?.due_ms > now {
            return None;
        }
        self.queue.pop().map(|e| (e.due_ms as f64, e.task))
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
