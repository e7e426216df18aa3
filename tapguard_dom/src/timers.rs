// Copyright 2026 the Tapguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Virtual-time timer queue.
//!
//! Time only moves when the host calls [`TimerQueue::advance`]. Due timers are
//! returned in `(due_at, order)` order so callbacks run deterministically.

use alloc::vec::Vec;

use crate::types::{PendingTimer, TimerId};

/// One-shot timers on a virtual millisecond clock.
#[derive(Clone, Debug, Default)]
pub(crate) struct TimerQueue {
    now_ms: u64,
    next_id: u64,
    next_order: u64,
    queue: Vec<PendingTimer>,
}

impl TimerQueue {
    pub(crate) fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub(crate) fn set_timeout(&mut self, delay_ms: u32) -> TimerId {
        self.next_id += 1;
        self.next_order += 1;
        let id = TimerId(self.next_id);
        self.queue.push(PendingTimer {
            id,
            due_at: self.now_ms.saturating_add(u64::from(delay_ms)),
            order: self.next_order,
        });
        id
    }

    pub(crate) fn pending(&self) -> Vec<PendingTimer> {
        let mut timers = self.queue.clone();
        timers.sort_by_key(|t| (t.due_at, t.order));
        timers
    }

    /// Move the clock forward and drain every timer that is now due.
    pub(crate) fn advance(&mut self, delta_ms: u64) -> Vec<TimerId> {
        self.now_ms = self.now_ms.saturating_add(delta_ms);
        let now = self.now_ms;
        let mut due: Vec<PendingTimer> = self
            .queue
            .iter()
            .copied()
            .filter(|t| t.due_at <= now)
            .collect();
        self.queue.retain(|t| t.due_at > now);
        due.sort_by_key(|t| (t.due_at, t.order));
        due.into_iter().map(|t| t.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn fires_only_when_due() {
        let mut q = TimerQueue::default();
        let a = q.set_timeout(3000);
        assert!(q.advance(2999).is_empty());
        assert_eq!(q.advance(1), vec![a]);
        assert!(q.pending().is_empty());
        assert_eq!(q.now_ms(), 3000);
    }

    #[test]
    fn equal_due_times_fire_in_scheduling_order() {
        let mut q = TimerQueue::default();
        let late = q.set_timeout(500);
        let first = q.set_timeout(100);
        let second = q.set_timeout(100);
        assert_eq!(q.advance(1000), vec![first, second, late]);
    }
}
