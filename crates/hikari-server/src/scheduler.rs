//! Task scheduler port.
//!
//! Delays and periods are measured in server ticks (20 per second).

/// Handle for a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub(crate) u32);

impl TaskId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Passed to a running task so it can stop itself.
#[derive(Debug)]
pub struct TaskContext {
    id: TaskId,
    cancelled: bool,
}

impl TaskContext {
    #[must_use]
    pub const fn new(id: TaskId) -> Self {
        Self {
            id,
            cancelled: false,
        }
    }

    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Don't run this task again.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// A unit of work run on the main thread.
pub type Task = Box<dyn FnMut(&mut TaskContext) + Send + 'static>;

/// Defers work to later ticks.
pub trait Scheduler {
    /// Run `task` once after `delay` ticks.
    fn schedule_once(&self, task: Task, delay: u64) -> TaskId;

    /// Run `task` after `delay` ticks, then every `period` ticks.
    fn schedule_repeating(&self, task: Task, delay: u64, period: u64) -> TaskId;

    /// Stop a task. Unknown or finished ids are ignored.
    fn cancel_task(&self, id: TaskId);

    /// Whether `id` will run again.
    fn is_queued(&self, id: TaskId) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_cancel() {
        let mut ctx = TaskContext::new(TaskId::new(7));
        assert_eq!(ctx.id().raw(), 7);
        assert!(!ctx.is_cancelled());
        ctx.cancel();
        assert!(ctx.is_cancelled());
    }
}
