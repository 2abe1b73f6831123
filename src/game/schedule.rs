//! Deferred turn effects on a logical clock.

extern crate alloc;

use alloc::vec::Vec;

use super::state::Side;

/// Work deferred to a later point on the game clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// The skip from a four or an ace, played by this side, resolves.
    SkipTurn(Side),
    /// The opponent picks and applies its move.
    OpponentMove,
}

/// A queued task, tagged with the game generation it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    /// Clock time at which the task becomes due.
    pub due: u64,
    /// Generation of the game the task was scheduled against.
    pub generation: u64,
    /// What to do.
    pub kind: TaskKind,
    seq: u64,
}

/// Single-threaded task queue ordered by due time, then scheduling order.
#[derive(Debug, Clone, Default)]
pub(crate) struct Scheduler {
    now: u64,
    next_seq: u64,
    tasks: Vec<Task>,
}

impl Scheduler {
    pub(crate) const fn now(&self) -> u64 {
        self.now
    }

    pub(crate) fn schedule(&mut self, delay: u64, generation: u64, kind: TaskKind) -> Task {
        let task = Task {
            due: self.now.saturating_add(delay),
            generation,
            kind,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.tasks.push(task);
        log::trace!("queued {kind:?} for generation {generation} at t={}", task.due);
        task
    }

    /// Drops every task not belonging to `generation`, returning how many.
    pub(crate) fn retain_generation(&mut self, generation: u64) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.generation == generation);
        before - self.tasks.len()
    }

    /// Drops every queued task, returning how many.
    pub(crate) fn clear(&mut self) -> usize {
        let dropped = self.tasks.len();
        self.tasks.clear();
        dropped
    }

    pub(crate) fn has_pending(&self, generation: u64) -> bool {
        self.tasks.iter().any(|task| task.generation == generation)
    }

    pub(crate) fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub(crate) fn next_due(&self) -> Option<u64> {
        self.tasks.iter().map(|task| task.due).min()
    }

    /// Removes the earliest task due at or before `until`, moving the clock
    /// to its due time.
    pub(crate) fn pop_due(&mut self, until: u64) -> Option<Task> {
        let index = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due <= until)
            .min_by_key(|(_, task)| (task.due, task.seq))
            .map(|(index, _)| index)?;

        let task = self.tasks.remove(index);
        self.now = self.now.max(task.due);
        Some(task)
    }

    /// Moves the clock forward without firing anything.
    pub(crate) fn set_now(&mut self, now: u64) {
        self.now = self.now.max(now);
    }
}
