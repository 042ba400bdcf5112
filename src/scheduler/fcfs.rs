use super::Discipline;
use crate::core::{Process, Ticks};

/// Run-to-completion: the head gets everything it still owes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fcfs;

impl Discipline for Fcfs {
    fn slice(&self, process: &Process) -> Ticks {
        process.remaining_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PriorityClass, ProcessQueue, QueueLevel, TraceEvent};
    use crate::scheduler::dispatch_head;

    #[test]
    fn head_runs_to_completion_in_one_event() {
        let mut queue = ProcessQueue::unbounded();
        queue
            .enqueue(Process::new(4, PriorityClass::Low, 9, 0))
            .unwrap();
        queue
            .enqueue(Process::new(5, PriorityClass::Low, 2, 0))
            .unwrap();

        let mut events = Vec::new();
        let ran = dispatch_head(&Fcfs, &mut queue, QueueLevel::Q2, &mut events);

        assert_eq!(ran, 9);
        assert_eq!(
            events,
            vec![
                TraceEvent::Executing {
                    process: 4,
                    queue: QueueLevel::Q2,
                    duration: 9
                },
                TraceEvent::Completed { process: 4 }
            ]
        );
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.peek_front().map(|p| p.id), Some(5));
    }
}
