//! Tick-driven task queue.

use hashbrown::HashSet;

use crate::scheduler::{Task, TaskId};

pub(super) struct ScheduledTask {
    pub(super) id: TaskId,
    pub(super) next_run: u64,
    pub(super) period: Option<u64>,
    pub(super) task: Task,
}

#[derive(Default)]
pub(super) struct SchedulerState {
    current_tick: u64,
    next_task_id: u32,
    queued: Vec<ScheduledTask>,
    /// Tasks taken out of the queue for the tick in progress.
    running: HashSet<TaskId>,
    /// Running tasks cancelled from inside another task.
    cancelled: HashSet<TaskId>,
}

impl SchedulerState {
    pub(super) const fn current_tick(&self) -> u64 {
        self.current_tick
    }

    /// Queue a task. A delay or period of zero means the next tick.
    pub(super) fn schedule(&mut self, task: Task, delay: u64, period: Option<u64>) -> TaskId {
        let id = TaskId::new(self.next_task_id);
        self.next_task_id = self.next_task_id.wrapping_add(1);
        self.queued.push(ScheduledTask {
            id,
            next_run: self.current_tick.saturating_add(delay.max(1)),
            period: period.map(|p| p.max(1)),
            task,
        });
        id
    }

    pub(super) fn cancel(&mut self, id: TaskId) {
        if self.running.contains(&id) {
            self.cancelled.insert(id);
        }
        self.queued.retain(|t| t.id != id);
    }

    pub(super) fn is_queued(&self, id: TaskId) -> bool {
        (self.running.contains(&id) && !self.cancelled.contains(&id))
            || self.queued.iter().any(|t| t.id == id)
    }

    pub(super) fn pending(&self) -> usize {
        self.queued.len()
    }

    /// Advance one tick and take every task due on it, in scheduling order.
    pub(super) fn advance(&mut self) -> Vec<ScheduledTask> {
        self.current_tick += 1;
        let tick = self.current_tick;

        let (due, waiting): (Vec<_>, Vec<_>) = self
            .queued
            .drain(..)
            .partition(|t| t.next_run <= tick);
        self.queued = waiting;
        self.running.extend(due.iter().map(|t| t.id));
        due
    }

    /// Whether a task taken by [`advance`](Self::advance) was cancelled while the tick ran.
    pub(super) fn was_cancelled(&self, id: TaskId) -> bool {
        self.cancelled.contains(&id)
    }

    /// Put a finished task back if it repeats, and forget it otherwise.
    pub(super) fn finish(&mut self, mut task: ScheduledTask, stop: bool) {
        self.running.remove(&task.id);
        let cancelled = self.cancelled.remove(&task.id);

        match task.period {
            Some(period) if !stop && !cancelled => {
                task.next_run = self.current_tick.saturating_add(period);
                self.queued.push(task);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Task {
        Box::new(|_| {})
    }

    #[test]
    fn test_zero_delay_runs_next_tick() {
        let mut state = SchedulerState::default();
        let id = state.schedule(noop(), 0, None);
        let due = state.advance();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, id);
    }

    #[test]
    fn test_delay() {
        let mut state = SchedulerState::default();
        state.schedule(noop(), 3, None);
        assert!(state.advance().is_empty());
        assert!(state.advance().is_empty());
        assert_eq!(state.advance().len(), 1);
        assert_eq!(state.current_tick(), 3);
    }

    #[test]
    fn test_repeating_requeues() {
        let mut state = SchedulerState::default();
        let id = state.schedule(noop(), 1, Some(2));

        let due = state.advance();
        assert_eq!(due.len(), 1);
        for task in due {
            state.finish(task, false);
        }
        assert!(state.is_queued(id));
        assert!(state.advance().is_empty());
        assert_eq!(state.advance().len(), 1);
    }

    #[test]
    fn test_huge_delay_never_comes_due() {
        let mut state = SchedulerState::default();
        state.advance();
        let id = state.schedule(noop(), u64::MAX, None);
        assert!(state.advance().is_empty());
        assert!(state.is_queued(id));
    }

    #[test]
    fn test_huge_period_requeues_at_the_end_of_time() {
        let mut state = SchedulerState::default();
        let id = state.schedule(noop(), 1, Some(u64::MAX));
        for task in state.advance() {
            state.finish(task, false);
        }
        assert!(state.is_queued(id));
        assert!(state.advance().is_empty());
    }

    #[test]
    fn test_cancel_while_running() {
        let mut state = SchedulerState::default();
        let id = state.schedule(noop(), 1, Some(1));
        let due = state.advance();
        state.cancel(id);
        assert!(state.was_cancelled(id));
        assert!(!state.is_queued(id));
        for task in due {
            state.finish(task, false);
        }
        assert_eq!(state.pending(), 0);
        assert!(!state.was_cancelled(id));
    }
}
