use super::state::{Process, Ticks};
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueueError {
    /// The rejected process is handed back so the caller can report it.
    #[error("queue overflow: capacity {capacity} reached, P{} dropped", .process.id)]
    Overflow { capacity: usize, process: Process },
}

impl QueueError {
    pub fn into_process(self) -> Process {
        match self {
            Self::Overflow { process, .. } => process,
        }
    }
}

/// FIFO staging area for processes waiting on the CPU.
///
/// Unbounded unless built with [`ProcessQueue::with_capacity`]. A bounded queue
/// of capacity 0 accepts nothing.
#[derive(Debug, Clone, Default)]
pub struct ProcessQueue {
    processes: VecDeque<Process>,
    capacity: Option<usize>,
}

impl ProcessQueue {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            processes: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.processes.len() >= cap)
    }

    pub fn enqueue(&mut self, process: Process) -> Result<(), QueueError> {
        debug_assert!(
            !process.is_completed(),
            "Completed process P{} must not be enqueued",
            process.id
        );

        match self.capacity {
            Some(capacity) if self.processes.len() >= capacity => {
                return Err(QueueError::Overflow { capacity, process });
            }
            _ => {}
        }

        self.processes.push_back(process);
        Ok(())
    }

    /// Removes the head process.
    ///
    /// # Panics
    /// If the queue is empty. Callers check [`is_empty`](Self::is_empty) or
    /// [`peek_front`](Self::peek_front) first.
    pub fn dequeue(&mut self) -> Process {
        self.processes
            .pop_front()
            .expect("Queue underflow: dequeue on an empty queue")
    }

    pub fn peek_front(&self) -> Option<&Process> {
        self.processes.front()
    }

    // True iff there is a head and it has arrived by `now`
    pub fn head_arrived(&self, now: Ticks) -> bool {
        self.peek_front().is_some_and(|p| p.has_arrived(now))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }
}
